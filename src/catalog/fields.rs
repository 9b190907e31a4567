// ==========================================
// Recruit Desk - canonical field catalog
// ==========================================
// Header aliases seen in the office's intake sheets (Google Forms exports,
// hand-made Excel lists). Arabic first, then English; order is priority.
// ==========================================

use crate::domain::candidate::CandidateField;
use serde::Serialize;

/// One canonical field and the header spellings accepted for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanonicalField {
    pub key: CandidateField,
    pub aliases: &'static [&'static str],
}

pub static CANDIDATE_FIELDS: [CanonicalField; 20] = [
    CanonicalField {
        key: CandidateField::FullName,
        aliases: &[
            "الاسم الكامل",
            "الاسم الرباعي",
            "الاسم",
            "اسم المرشح",
            "Full Name",
            "Name",
            "Candidate Name",
        ],
    },
    CanonicalField {
        key: CandidateField::Phone,
        aliases: &[
            "رقم الجوال",
            "الجوال",
            "رقم الهاتف",
            "رقم التواصل",
            "Phone Number",
            "Phone",
            "Mobile",
            "WhatsApp",
        ],
    },
    CanonicalField {
        key: CandidateField::Age,
        aliases: &["العمر", "السن", "Age"],
    },
    CanonicalField {
        key: CandidateField::Nationality,
        aliases: &["الجنسية", "Nationality"],
    },
    CanonicalField {
        key: CandidateField::ResidencyStatus,
        aliases: &[
            "حالة الإقامة",
            "نوع الإقامة",
            "الإقامة",
            "Residency Status",
            "Iqama Status",
            "Residency",
        ],
    },
    CanonicalField {
        key: CandidateField::JobAppliedFor,
        aliases: &[
            "الوظيفة المتقدم لها",
            "الوظيفة المطلوبة",
            "المسمى الوظيفي",
            "Job Applied For",
            "Applied Position",
            "Job Title",
        ],
    },
    CanonicalField {
        key: CandidateField::CurrentEmployment,
        aliases: &[
            "هل تعمل حالياً",
            "العمل الحالي",
            "الوظيفة الحالية",
            "Currently Employed",
            "Current Employment",
            "Current Job",
        ],
    },
    CanonicalField {
        key: CandidateField::Availability,
        aliases: &[
            "متى يمكنك المباشرة",
            "موعد المباشرة",
            "الجاهزية",
            "Availability",
            "Start Date",
        ],
    },
    CanonicalField {
        key: CandidateField::MilitaryStatus,
        aliases: &[
            "الوضع العسكري",
            "الحالة المهنية",
            "Military Status",
            "Professional Status",
        ],
    },
    CanonicalField {
        key: CandidateField::SocialStatus,
        aliases: &[
            "الحالة الاجتماعية",
            "Social Status",
            "Marital Status",
        ],
    },
    CanonicalField {
        key: CandidateField::YearsOfExperience,
        aliases: &[
            "سنوات الخبرة",
            "عدد سنوات الخبرة",
            "الخبرة",
            "Years of Experience",
            "Experience",
        ],
    },
    CanonicalField {
        key: CandidateField::HajjExperience,
        aliases: &[
            "هل سبق لك العمل في الحج",
            "العمل في الحج",
            "خبرة الحج",
            "Hajj Experience",
            "Worked in Hajj",
        ],
    },
    CanonicalField {
        key: CandidateField::HealthCard,
        aliases: &[
            "الشهادة الصحية",
            "البطاقة الصحية",
            "Health Card",
            "Health Certificate",
        ],
    },
    CanonicalField {
        key: CandidateField::LastSalary,
        aliases: &["آخر راتب", "الراتب السابق", "Last Salary", "Previous Salary"],
    },
    CanonicalField {
        key: CandidateField::Transportation,
        aliases: &[
            "وسيلة المواصلات",
            "وسيلة النقل",
            "المواصلات",
            "Transportation",
            "Own Car",
        ],
    },
    CanonicalField {
        key: CandidateField::EnglishLevel,
        aliases: &[
            "مستوى اللغة الإنجليزية",
            "اللغة الإنجليزية",
            "English Level",
            "English",
        ],
    },
    CanonicalField {
        key: CandidateField::AcceptsRequirements,
        aliases: &[
            "الموافقة على متطلبات العمل",
            "متطلبات العمل",
            "Accepts Work Requirements",
            "Work Requirements",
        ],
    },
    CanonicalField {
        key: CandidateField::Housing,
        aliases: &["مكان السكن", "السكن", "الحي", "Housing", "Residence Area"],
    },
    CanonicalField {
        key: CandidateField::InterviewCity,
        aliases: &[
            "هل ترغب بإجراء المقابلة في جدة",
            "المقابلة في جدة",
            "Interview in Jeddah",
            "Willing to Interview",
        ],
    },
    CanonicalField {
        key: CandidateField::Education,
        aliases: &[
            "المؤهل العلمي",
            "المؤهل",
            "التعليم",
            "Education",
            "Qualification",
        ],
    },
];
