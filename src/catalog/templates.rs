// ==========================================
// Recruit Desk - message template catalog
// ==========================================
// Four kinds, Arabic + English bodies, WhatsApp markup (*bold*)
// Bodies are sent as-is apart from placeholder substitution
// ==========================================

use crate::domain::message::{LocalizedText, MessageTemplate, Placeholder};
use crate::domain::types::MessageKind;

const INTERVIEW_AR: &str = r#"عزيزي المرشح/ عزيزتي المرشحة *{name}*،

تحية طيبة،،

يسرنا إبلاغكم بأنه تم اختياركم من بين عدد من المرشحين لإجراء مقابلة شخصية، وذلك ضمن إجراءات التوظيف في مجموعة الكعكي.

تفاصيل المقابلة:
المكان: *{place}*
التاريخ: *{date}*
اليوم: *{day}*
الوقت: *{time}*

رابط الموقع:
{location_link}

نأمل الالتزام بالحضور في الوقت المحدد.

قسم التوظيف - مجموعة الكعكي"#;

const INTERVIEW_EN: &str = r#"Dear Candidate *{name}*,

Greetings,,

We are pleased to inform you that you have been selected for an interview at Al-Kaki Group.

Interview Details:
Location: *{place}*
Date: *{date}*
Day: *{day}*
Time: *{time}*

Location Link:
{location_link}

We look forward to your attendance at the scheduled time.

Recruitment Department - Al-Kaki Group"#;

const REMINDER_AR: &str = r#"عزيزي/عزيزتي المرشح(ة) *{name}*،

تحية طيبة،،

نأمل تأكيد حضوركم لموعد المقابلة المقررة اليوم في: *{place}* – مجموعة الكعكي

التفاصيل الكاملة للموقع في الرابط التالي:
{location_link}

شاكرين لكم تعاونكم، ونتمنى لكم كل التوفيق.

قسم التوظيف - مجموعة الكعكي"#;

const REMINDER_EN: &str = r#"Dear Candidate *{name}*,

Greetings,,

We hope to confirm your attendance for the interview scheduled today at: *{place}* – Al-Kaki Group

Full location details in the following link:
{location_link}

Thank you for your cooperation, we wish you the best of luck.

Recruitment Department - Al-Kaki Group"#;

const INFO_COLLECTION_AR: &str = r#"عزيزي/عزيزتي المرشح *{name}*،

نشكركم على اهتمامكم بالانضمام إلى مجموعة الكعكي.

حرصًا منا على استكمال خطوات الترشيح المبدئي، نرجو منكم التكرم بالإجابة على النموذج المرفق حيث تم ترشيحكم للمسمى الوظيفي (*{position}*).

رابط النموذج:
{form_link}

ملاحظة: في حال لم يكن المسمى الوظيفي المقترح مناسبًا لكم، نأمل منكم الرد بعبارة "غير مهتم".

مع خالص التحية، قسم التوظيف – مجموعة الكعكي"#;

const INFO_COLLECTION_EN: &str = r#"Dear Candidate *{name}*,

Thank you for your interest in joining Al-Kaki Group.

To complete the initial screening process, please fill out the attached form as you have been nominated for the position: (*{position}*).

Form Link:
{form_link}

Note: If the proposed position is not suitable for you, please reply with "Not Interested".

Best regards, Recruitment Department – Al-Kaki Group"#;

const REJECTION_AR: &str = r#"عزيزي/عزيزتي المرشح *{name}*،

نشكر لك اهتمامك بشركتنا وتخصيص وقتك لحضور المقابلة الشخصية.

بعد دراسة جميع الطلبات بعناية ومراجعة متطلبات الوظيفة، نأسف لإبلاغك بعدم اختيارك لهذه الفرصة في الوقت الحالي. نود التأكيد على أن هذا القرار يتعلق بمتطلبات الوظيفة ولا يعكس أي تقصير في مؤهلاتك أو قدراتك.

كما يسعدنا الاحتفاظ ببياناتك في قاعدة بياناتنا للتواصل معك في حال توفر فرص تناسب خبراتك مستقبلاً.

نتمنى لك كل التوفيق والنجاح في مسيرتك المهنية.

تقبل منا خالص التحيات، مجموعة الكعكي"#;

const REJECTION_EN: &str = r#"Dear Candidate *{name}*,

Thank you for your interest and for taking the time to attend the interview.

After careful review of all applications and job requirements, we regret to inform you that you have not been selected for this opportunity at this time. We would like to emphasize that this decision relates to job requirements and does not reflect any deficiency in your qualifications.

We are happy to keep your data in our database to contact you if future opportunities fit your experience.

We wish you all the best and success in your career.

Best regards, Al-Kaki Group"#;

pub static TEMPLATES: [MessageTemplate; 4] = [
    MessageTemplate {
        kind: MessageKind::Interview,
        placeholders: &[
            Placeholder::Name,
            Placeholder::Place,
            Placeholder::Date,
            Placeholder::Day,
            Placeholder::Time,
            Placeholder::LocationLink,
        ],
        body: LocalizedText::new(INTERVIEW_AR, INTERVIEW_EN),
    },
    MessageTemplate {
        kind: MessageKind::Reminder,
        placeholders: &[Placeholder::Name, Placeholder::Place, Placeholder::LocationLink],
        body: LocalizedText::new(REMINDER_AR, REMINDER_EN),
    },
    MessageTemplate {
        kind: MessageKind::InfoCollection,
        placeholders: &[Placeholder::Name, Placeholder::Position, Placeholder::FormLink],
        body: LocalizedText::new(INFO_COLLECTION_AR, INFO_COLLECTION_EN),
    },
    MessageTemplate {
        kind: MessageKind::Rejection,
        placeholders: &[Placeholder::Name],
        body: LocalizedText::new(REJECTION_AR, REJECTION_EN),
    },
];

/// Template for a message kind
pub fn template_for(kind: MessageKind) -> &'static MessageTemplate {
    match kind {
        MessageKind::Interview => &TEMPLATES[0],
        MessageKind::Reminder => &TEMPLATES[1],
        MessageKind::InfoCollection => &TEMPLATES[2],
        MessageKind::Rejection => &TEMPLATES[3],
    }
}
