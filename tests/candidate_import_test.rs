// ==========================================
// Candidate import integration tests
// ==========================================
// Spreadsheet on disk → resolved records → stored candidate list
// ==========================================


use recruit_desk::api::ApiError;
use recruit_desk::domain::{CandidateField, Language, Role};
use recruit_desk::importer::{CandidateImporter, ExcelParser, FileParser};
use recruit_desk::logging;
use std::io::Write;
use std::path::Path;
use test_helpers::{create_test_state, fixture, test_user};

#[test]
fn test_importer_resolves_arabic_headers_with_diacritics() {
    logging::init_test();

    let importer = CandidateImporter::default();
    let report = importer
        .import_file(fixture("candidates_ar.csv"))
        .expect("fixture should import");

    // trailing all-blank row is skipped
    assert_eq!(report.total_rows, 2);
    assert_eq!(report.records.len(), 2);

    let sara = &report.records[0];
    assert_eq!(sara.full_name(), "سارة أحمد");
    assert_eq!(sara.phone(), "0551234567");
    assert_eq!(sara.get(CandidateField::Age), "27");
    assert_eq!(sara.get(CandidateField::Nationality), "سعودية");
    assert_eq!(sara.get(CandidateField::YearsOfExperience), "3");
    assert_eq!(sara.get(CandidateField::Education), "-");

    let omar = &report.records[1];
    assert_eq!(omar.full_name(), "Omar Khalid");
    assert_eq!(omar.phone(), "+966 50 111 2222");
    // matched column, blank cell
    assert_eq!(omar.get(CandidateField::YearsOfExperience), "-");

    let missing = report.missing_columns();
    assert!(missing.contains(&CandidateField::Education));
    assert!(!missing.contains(&CandidateField::FullName));
    assert!(!missing.contains(&CandidateField::YearsOfExperience));
}

#[test]
fn test_import_and_manage_candidates() {
    logging::init_test();
    let (_temp_file, state) = create_test_state().expect("Failed to create test state");
    let api = &state.candidate_api;
    let staff = test_user(Role::Staff);

    let response = api
        .import_file(&staff, fixture("candidates_ar.csv"))
        .expect("import should succeed");
    assert_eq!(response.imported, 2);
    assert!(response.missing_columns.contains(&CandidateField::HealthCard));

    // list keeps file order
    let listed = api.list(&staff).expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].full_name(), "سارة أحمد");
    assert_eq!(listed[1].full_name(), "Omar Khalid");

    // notes
    let sara_id = listed[0].id.clone();
    api.update_notes(&staff, &sara_id, "  called back on Sunday  ").expect("update notes");
    let sara = api.get(&staff, &sara_id).expect("get");
    assert_eq!(sara.notes, "called back on Sunday");
    assert_eq!(sara.get(CandidateField::Age), "27");

    // delete one, then the rest
    api.delete(&staff, &sara_id).expect("delete");
    assert!(matches!(api.get(&staff, &sara_id), Err(ApiError::NotFound(_))));
    assert!(matches!(api.delete(&staff, &sara_id), Err(ApiError::NotFound(_))));
    assert_eq!(api.clear(&test_user(Role::Admin)).expect("clear"), 1);
    assert!(api.list(&staff).expect("list").is_empty());
}

#[test]
fn test_second_import_appends_after_first() {
    logging::init_test();
    let (_temp_file, state) = create_test_state().expect("Failed to create test state");
    let api = &state.candidate_api;
    let admin = test_user(Role::Admin);

    let first = api.import_file(&admin, fixture("candidates_ar.csv")).expect("first import");
    let second = api.import_file(&admin, fixture("candidates_ar.csv")).expect("second import");
    assert_ne!(first.batch_id, second.batch_id);

    let listed = api.list(&admin).expect("list");
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[2].full_name(), "سارة أحمد");

    let ids: Vec<String> = listed.iter().take(2).map(|r| r.id.clone()).collect();
    assert_eq!(api.delete_many(&admin, &ids).expect("delete_many"), 2);
    assert_eq!(api.list(&admin).expect("list").len(), 2);
}

#[test]
fn test_english_headers_and_partial_match() {
    logging::init_test();
    let (_temp_file, state) = create_test_state().expect("Failed to create test state");

    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp csv");
    writeln!(file, "Name,Mobile Phone,Nationality").expect("write");
    writeln!(file, "Sara,0551234567,Saudi").expect("write");
    file.flush().expect("flush");

    let staff = test_user(Role::Staff);
    let response = state
        .candidate_api
        .import_file(&staff, file.path())
        .expect("import");
    assert_eq!(response.imported, 1);
    assert_eq!(response.loosely_matched(), vec![CandidateField::Phone]);

    let record = &state.candidate_api.list(&staff).expect("list")[0];
    assert_eq!(record.full_name(), "Sara");
    // "Mobile Phone" contains the "phone" alias
    assert_eq!(record.phone(), "0551234567");
    assert_eq!(record.get(CandidateField::Nationality), "Saudi");
}

#[test]
fn test_unreadable_file_stores_nothing() {
    logging::init_test();
    let (_temp_file, state) = create_test_state().expect("Failed to create test state");
    let staff = test_user(Role::Staff);

    let err = state
        .candidate_api
        .import_file(&staff, "tests/fixtures/does_not_exist.csv")
        .expect_err("missing file must fail");
    assert!(matches!(err, ApiError::ImportError(_)));
    assert!(!err.user_message(Language::En).is_empty());
    assert!(state.candidate_api.list(&staff).expect("list").is_empty());
}

#[test]
fn test_manager_cannot_import_or_purge() {
    logging::init_test();
    let (_temp_file, state) = create_test_state().expect("Failed to create test state");
    let api = &state.candidate_api;
    let manager = test_user(Role::Manager);

    let err = api
        .import_file(&manager, fixture("candidates_ar.csv"))
        .expect_err("manager cannot import");
    assert!(matches!(err, ApiError::Forbidden { .. }));
    assert_eq!(
        err.user_message(Language::En),
        "You do not have permission for this action"
    );
    assert!(api.list(&manager).expect("list").is_empty());

    // staff import and annotate, only admins purge
    let staff = test_user(Role::Staff);
    api.import_file(&staff, fixture("candidates_ar.csv")).expect("staff import");
    assert!(matches!(api.clear(&staff), Err(ApiError::Forbidden { .. })));
    assert!(matches!(api.clear(&manager), Err(ApiError::Forbidden { .. })));
    assert_eq!(api.list(&manager).expect("list").len(), 2);
}

#[test]
fn test_workbook_reads_first_sheet_only() {
    logging::init_test();
    let path = fixture("candidates.xlsx");

    let rows = ExcelParser
        .parse_to_raw_rows(Path::new(&path))
        .expect("workbook should parse");
    assert_eq!(rows.len(), 2);

    let headers: Vec<&str> = rows[0].headers().collect();
    assert_eq!(headers, vec!["Full Name", "Mobile", "Age", "Nationality"]);
    assert_eq!(rows[0].get("Age").map(|v| v.to_display_string()), Some("27".to_string()));

    let report = CandidateImporter::default()
        .import_file(&path)
        .expect("workbook should import");
    let names: Vec<&str> = report.records.iter().map(|r| r.full_name()).collect();
    // the second sheet ("Archive") is ignored
    assert_eq!(names, vec!["Sara Ahmed", "Omar Khalid"]);

    let sara = &report.records[0];
    assert_eq!(sara.get(CandidateField::Age), "27");
    // text cell keeps its leading zero
    assert_eq!(sara.phone(), "0551234567");
    assert_eq!(report.records[1].get(CandidateField::Age), "31.5");
    assert_eq!(report.records[1].get(CandidateField::Nationality), "Jordanian");
}
