// ==========================================
// Recruit Desk - repository layer
// ==========================================
// Rule: repositories map rows, no business logic
// Rule: parameterized SQL only
// ==========================================

pub mod candidate_repo;
pub mod error;
pub mod message_log_repo;

pub use candidate_repo::CandidateRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use message_log_repo::MessageLogRepository;
