// ==========================================
// Recruit Desk - application layer
// ==========================================
// Wires database, repositories and APIs for the binary
// ==========================================

pub mod state;

pub use state::{load_authenticator, AppState};
