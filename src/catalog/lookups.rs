// ==========================================
// Recruit Desk - composer lookup tables
// ==========================================
// Interview venues / week days / time slots / form defaults
// ==========================================

use crate::domain::message::LocalizedText;
use crate::domain::types::Language;
use serde::Serialize;

/// Screening form sent with info-collection messages
pub const DEFAULT_FORM_LINK: &str = "https://docs.google.com/forms/e/1FAIpQLSdfdTSx2PLk5592bJAGLYcys5Vh2rcUv2iGaJmJDzdRFI4DRQ/viewform?usp=header";

/// Position pre-filled in the composer
pub const DEFAULT_POSITION: LocalizedText = LocalizedText::new("مدير عمليات", "Operations Manager");

// ==========================================
// Locations
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: &'static str,
    pub name: LocalizedText,
    pub link: &'static str,
}

pub static LOCATIONS: [Location; 7] = [
    Location {
        id: "office",
        name: LocalizedText::new("الإدارة الرئيسية", "Head Office"),
        link: "https://maps.app.goo.gl/VWJaf34hKTnFU8JAA",
    },
    Location {
        id: "zikaki",
        name: LocalizedText::new("مطعم زيكاكي", "Zikaki Restaurant"),
        link: "https://maps.app.goo.gl/ZikakiLink",
    },
    Location {
        id: "shorafa",
        name: LocalizedText::new("قاعة الشرافة", "Al Shorafa Hall"),
        link: "https://maps.app.goo.gl/ShorafaLink",
    },
    Location {
        id: "stagioni",
        name: LocalizedText::new("مطعم سيزيوني", "Stagioni Restaurant"),
        link: "https://maps.app.goo.gl/StagioniLink",
    },
    Location {
        id: "albay_m",
        name: LocalizedText::new("مخبز الباي المحمدية", "Al Bay Bakery - Muhammadiyah"),
        link: "https://maps.app.goo.gl/AlBayMuhammadiyah",
    },
    Location {
        id: "albay_z",
        name: LocalizedText::new("مخبز الباي الزهراء", "Al Bay Bakery - Al Zahra"),
        link: "https://maps.app.goo.gl/AlBayZahra",
    },
    Location {
        id: "gabbiano",
        name: LocalizedText::new("مطعم الجبيانو", "Il Gabbiano Restaurant"),
        link: "https://maps.app.goo.gl/IlGabbiano",
    },
];

pub fn find_location(id: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|l| l.id == id)
}

// ==========================================
// Week days (Sunday first)
// ==========================================
pub static DAYS: [LocalizedText; 7] = [
    LocalizedText::new("الأحد", "Sunday"),
    LocalizedText::new("الاثنين", "Monday"),
    LocalizedText::new("الثلاثاء", "Tuesday"),
    LocalizedText::new("الأربعاء", "Wednesday"),
    LocalizedText::new("الخميس", "Thursday"),
    LocalizedText::new("الجمعة", "Friday"),
    LocalizedText::new("السبت", "Saturday"),
];

/// Day label for a chrono weekday
pub fn day_label(weekday: chrono::Weekday, language: Language) -> &'static str {
    DAYS[weekday.num_days_from_sunday() as usize].get(language)
}

// ==========================================
// Time slots
// ==========================================
const FIRST_SLOT_HOUR: u32 = 9;
const LAST_SLOT_HOUR: u32 = 23;
const SLOT_STEP_MINUTES: u32 = 10;

/// Interview time on the 10-minute grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TimeSlot {
    pub hour: u32,   // 0-23
    pub minute: u32, // 0-59
}

impl TimeSlot {
    /// 12-hour label, e.g. "9:00 AM" / "1:30 مساءً"
    pub fn label(&self, language: Language) -> String {
        let suffix = match (language, self.hour >= 12) {
            (Language::Ar, true) => "مساءً",
            (Language::Ar, false) => "صباحاً",
            (Language::En, true) => "PM",
            (Language::En, false) => "AM",
        };

        let display_hour = match self.hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };

        format!("{}:{:02} {}", display_hour, self.minute, suffix)
    }
}

/// 9:00 AM through 11:00 PM inclusive, every 10 minutes
pub fn time_slots() -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    for hour in FIRST_SLOT_HOUR..=LAST_SLOT_HOUR {
        for minute in (0..60).step_by(SLOT_STEP_MINUTES as usize) {
            if hour == LAST_SLOT_HOUR && minute > 0 {
                break;
            }
            slots.push(TimeSlot { hour, minute });
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slots_range() {
        let slots = time_slots();
        assert_eq!(slots.len(), 85);
        assert_eq!(slots.first(), Some(&TimeSlot { hour: 9, minute: 0 }));
        assert_eq!(slots.last(), Some(&TimeSlot { hour: 23, minute: 0 }));
    }

    #[test]
    fn test_time_slot_labels() {
        let nine = TimeSlot { hour: 9, minute: 0 };
        assert_eq!(nine.label(Language::En), "9:00 AM");
        assert_eq!(nine.label(Language::Ar), "9:00 صباحاً");

        let noon = TimeSlot { hour: 12, minute: 30 };
        assert_eq!(noon.label(Language::En), "12:30 PM");

        let evening = TimeSlot { hour: 22, minute: 50 };
        assert_eq!(evening.label(Language::En), "10:50 PM");
        assert_eq!(evening.label(Language::Ar), "10:50 مساءً");
    }

    #[test]
    fn test_find_location() {
        let office = find_location("office").unwrap();
        assert_eq!(office.name.get(Language::En), "Head Office");
        assert!(find_location("nowhere").is_none());
    }

    #[test]
    fn test_day_label() {
        assert_eq!(day_label(chrono::Weekday::Sun, Language::En), "Sunday");
        assert_eq!(day_label(chrono::Weekday::Sat, Language::Ar), "السبت");
    }
}
