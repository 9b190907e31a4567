// ==========================================
// Compose → send → history integration tests
// ==========================================


use chrono::{NaiveDate, NaiveDateTime};
use recruit_desk::api::ApiError;
use recruit_desk::app::load_authenticator;
use recruit_desk::auth::{AuthOutcome, Authenticator, StaticCredentialTable, CREDENTIALS_ENV};
use recruit_desk::domain::{Credentials, Language, MessageKind, Role, SendStatus};
use recruit_desk::logging;
use recruit_desk::UNRESOLVED_PLACEHOLDER;
use test_helpers::{create_test_state, test_user, write_credentials_file};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 12).expect("valid date")
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    today().and_hms_opt(hour, minute, 0).expect("valid time")
}

#[test]
fn test_send_interview_logs_entry() {
    logging::init_test();
    let (_temp_file, state) = create_test_state().expect("Failed to create test state");
    let staff = test_user(Role::Staff);

    let form = state
        .composer_api
        .new_form(Language::En, today())
        .expect("new form")
        .with_kind(MessageKind::Interview)
        .with_recipient("  Sara  ", "055 123 4567")
        .with_location("shorafa");

    let dispatch = state
        .composer_api
        .send(&staff, &form, Language::En, at(10, 0))
        .expect("send");

    assert!(dispatch.text.contains("*Sara*"));
    assert!(dispatch.text.contains("Al Shorafa Hall"));
    assert!(!dispatch.text.contains(UNRESOLVED_PLACEHOLDER));
    assert!(dispatch.link.starts_with("https://wa.me/966551234567?text="));
    assert!(!dispatch.link.contains(' '));

    let admin = test_user(Role::Admin);
    let entries = state.history_api.list(&admin, None).expect("history");
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry.candidate_name, "Sara");
    assert_eq!(entry.phone, "966551234567");
    assert_eq!(entry.kind, MessageKind::Interview);
    assert_eq!(entry.details, "Al Shorafa Hall");
    assert_eq!(entry.status, SendStatus::Sent);
    assert_eq!(entry.sender, "Test staff");
    assert_eq!(entry.timestamp, at(10, 0));
}

#[test]
fn test_info_collection_uses_form_link_override() {
    logging::init_test();
    let (_temp_file, state) = create_test_state().expect("Failed to create test state");
    state
        .config
        .set_default_form_link("https://forms.example.com/apply")
        .expect("set form link");

    let form = state
        .composer_api
        .new_form(Language::Ar, today())
        .expect("new form")
        .with_kind(MessageKind::InfoCollection)
        .with_recipient("سارة", "0551234567");
    assert_eq!(form.form_link, "https://forms.example.com/apply");

    let staff = test_user(Role::Staff);
    let preview = state
        .composer_api
        .preview(&staff, &form, Language::Ar)
        .expect("preview");
    assert!(preview.contains("https://forms.example.com/apply"));
    assert!(preview.contains("سارة"));

    let dispatch = state
        .composer_api
        .send(&staff, &form, Language::Ar, at(9, 0))
        .expect("send");
    // info collection logs the position instead of a venue
    assert_eq!(dispatch.entry.details, "مدير عمليات");
    assert_eq!(dispatch.entry.language, Language::Ar);
}

#[test]
fn test_missing_recipient_logs_nothing() {
    logging::init_test();
    let (_temp_file, state) = create_test_state().expect("Failed to create test state");
    let staff = test_user(Role::Staff);

    let no_phone = state
        .composer_api
        .new_form(Language::Ar, today())
        .expect("new form")
        .with_recipient("سارة", "  ");
    let err = state
        .composer_api
        .send(&staff, &no_phone, Language::Ar, at(9, 0))
        .expect_err("phone is required");
    assert!(matches!(err, ApiError::MissingRecipient));
    assert_eq!(err.user_message(Language::Ar), "يرجى إدخال اسم المرشح ورقم الجوال");

    let no_name = no_phone.with_recipient("", "0551234567");
    assert!(matches!(
        state.composer_api.send(&staff, &no_name, Language::Ar, at(9, 0)),
        Err(ApiError::MissingRecipient)
    ));

    let admin = test_user(Role::Admin);
    assert_eq!(state.history_api.count(&admin).expect("count"), 0);
}

#[test]
fn test_history_newest_first_and_clear() {
    logging::init_test();
    let (_temp_file, state) = create_test_state().expect("Failed to create test state");
    let admin = test_user(Role::Admin);

    for (name, minute) in [("First", 0), ("Second", 5), ("Third", 10)] {
        let form = state
            .composer_api
            .new_form(Language::En, today())
            .expect("new form")
            .with_kind(MessageKind::Reminder)
            .with_recipient(name, "0551234567");
        state
            .composer_api
            .send(&admin, &form, Language::En, at(11, minute))
            .expect("send");
    }

    let entries = state.history_api.list(&admin, None).expect("history");
    let names: Vec<&str> = entries.iter().map(|e| e.candidate_name.as_str()).collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);

    let latest = state.history_api.list(&admin, Some(1)).expect("history");
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].candidate_name, "Third");

    assert_eq!(state.history_api.clear(&admin).expect("clear"), 3);
    assert!(state.history_api.list(&admin, None).expect("history").is_empty());
}

#[test]
fn test_role_gates() {
    logging::init_test();
    let (_temp_file, state) = create_test_state().expect("Failed to create test state");
    let staff = test_user(Role::Staff);
    let manager = test_user(Role::Manager);

    let form = state
        .composer_api
        .new_form(Language::En, today())
        .expect("new form")
        .with_recipient("Sara", "0551234567");

    // managers read, they do not send
    let err = state
        .composer_api
        .send(&manager, &form, Language::En, at(9, 0))
        .expect_err("manager cannot send");
    assert!(matches!(err, ApiError::Forbidden { .. }));
    assert_eq!(
        err.user_message(Language::En),
        "You do not have permission for this action"
    );
    assert!(state.history_api.list(&manager, None).expect("history").is_empty());
    assert_eq!(state.template_api.list(&manager, Language::En).expect("templates").len(), 4);

    // staff send, they do not read history or templates
    state
        .composer_api
        .send(&staff, &form, Language::En, at(9, 0))
        .expect("staff can send");
    assert!(matches!(
        state.history_api.list(&staff, None),
        Err(ApiError::Forbidden { .. })
    ));
    assert!(matches!(
        state.history_api.clear(&staff),
        Err(ApiError::Forbidden { .. })
    ));
    assert!(matches!(
        state.template_api.list(&staff, Language::En),
        Err(ApiError::Forbidden { .. })
    ));
}

#[test]
fn test_sign_in_from_credential_file() {
    logging::init_test();
    let file = write_credentials_file().expect("credential file");

    let table = StaticCredentialTable::from_json_file(file.path()).expect("load table");
    assert_eq!(table.len(), 2);

    match table.authenticate(&Credentials::new("Reem", "reem-pass"), Language::Ar) {
        AuthOutcome::Granted(user) => {
            assert_eq!(user.role, Role::Staff);
            assert_eq!(user.display_name, "ريم");
        }
        AuthOutcome::Denied => panic!("valid credentials were denied"),
    }
    assert!(matches!(
        table.authenticate(&Credentials::new("reem", "REEM-PASS"), Language::Ar),
        AuthOutcome::Denied
    ));

    // the only test in this binary that touches the environment
    std::env::set_var(CREDENTIALS_ENV, file.path());
    let authenticator = load_authenticator().expect("authenticator from env");
    let outcome = authenticator.authenticate(&Credentials::new("admin", "admin-pass"), Language::En);
    assert_eq!(
        outcome.user().map(|u| u.display_name.as_str()),
        Some("Administrator")
    );
    std::env::remove_var(CREDENTIALS_ENV);
}
