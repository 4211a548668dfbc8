use chrono::NaiveDate;
use healthsurvey::db::SurveyStore;
use healthsurvey::db::schema::{EMPLOYEE_TABLE, schema_present};
use healthsurvey::db::store::NO_EMPLOYEE;
use healthsurvey::errors::AppError;
use healthsurvey::models::survey::Survey;

mod common;
use common::{fresh_store, setup_test_db};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn cells(store: &mut SurveyStore, employee_id: i64) -> Vec<Vec<String>> {
    store.set_current_employee_id(employee_id);
    store.refresh_survey_view().unwrap();
    store.survey_view().display_rows()
}

#[test]
fn test_distinct_employees_are_added() {
    let store = fresh_store("store_distinct_employees");

    let a = store.add_employee("Alice").unwrap();
    let b = store.add_employee("Bob").unwrap();

    assert_ne!(a, b);
    assert!(store.employee_exists("alice").unwrap());
    assert!(store.employee_exists("BOB").unwrap());
    assert!(!store.employee_exists("Carol").unwrap());
}

#[test]
fn test_duplicate_employee_is_rejected_case_insensitively() {
    let store = fresh_store("store_duplicate_employee");

    store.add_employee("Alice").unwrap();
    let err = store.add_employee("aLiCe").unwrap_err();

    assert!(matches!(err, AppError::DuplicateEmployee(_)));
    assert_eq!(store.employees().unwrap().len(), 1);
}

#[test]
fn test_empty_employee_name_is_rejected() {
    let store = fresh_store("store_empty_name");

    assert!(matches!(store.add_employee(""), Err(AppError::EmptyName)));
    assert!(matches!(store.add_employee("   "), Err(AppError::EmptyName)));
    assert!(store.employees().unwrap().is_empty());
}

#[test]
fn test_add_employee_does_not_refresh_view() {
    let mut store = fresh_store("store_no_auto_refresh");

    store.add_employee("Alice").unwrap();
    assert_eq!(store.employee_view().row_count(), 0);

    store.refresh_employee_view().unwrap();
    assert_eq!(store.employee_view().row_count(), 1);
    assert_eq!(store.employee_view().name_at(0), Some("Alice"));
}

#[test]
fn test_employee_view_is_ordered_by_name() {
    let mut store = fresh_store("store_employee_order");

    let carol = store.add_employee("Carol").unwrap();
    let alice = store.add_employee("Alice").unwrap();
    store.add_employee("Bob").unwrap();
    store.refresh_employee_view().unwrap();

    let view = store.employee_view();
    assert_eq!(view.header(0), Some("ID"));
    assert_eq!(view.header(1), Some("Name"));
    assert_eq!(view.id_at(0), Some(alice));
    assert_eq!(view.id_at(2), Some(carol));

    let names: Vec<String> = view.employees().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn test_edit_employee_by_id_and_by_name() {
    let mut store = fresh_store("store_edit_employee");

    let id = store.add_employee("Alice").unwrap();
    assert_eq!(store.edit_employee(id, "Alicia").unwrap(), 1);

    // name match is exact
    assert_eq!(store.edit_employee_by_name("alicia", "Ali").unwrap(), 0);
    assert_eq!(store.edit_employee_by_name("Alicia", "Ali").unwrap(), 1);

    store.refresh_employee_view().unwrap();
    assert_eq!(store.employee_view().name_at(0), Some("Ali"));
    assert!(matches!(store.edit_employee(id, ""), Err(AppError::EmptyName)));
}

#[test]
fn test_survey_round_trip_through_view() {
    let mut store = fresh_store("store_round_trip");

    let survey = Survey::new(d(2024, 3, 1), 7, true, false, true, 36.6);
    store.add_survey(&survey).unwrap();

    assert_eq!(
        cells(&mut store, 7),
        vec![vec!["01/03/2024", "Yes", "No", "Yes", "36.6"]]
    );
    assert_eq!(store.survey_view().employee_id(), 7);
    assert_eq!(store.surveys(7).unwrap(), vec![survey]);
}

#[test]
fn test_one_survey_per_employee_per_day() {
    let store = fresh_store("store_unique_survey");

    store
        .add_survey(&Survey::new(d(2024, 3, 1), 1, true, true, true, 36.6))
        .unwrap();

    let err = store
        .add_survey(&Survey::new(d(2024, 3, 1), 1, false, false, false, 38.0))
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateSurvey { employee_id: 1, .. }));

    // same day, other employee; other day, same employee
    store
        .add_survey(&Survey::new(d(2024, 3, 1), 2, false, false, false, 36.0))
        .unwrap();
    store
        .add_survey(&Survey::new(d(2024, 3, 2), 1, false, false, false, 36.0))
        .unwrap();

    assert_eq!(store.surveys(1).unwrap().len(), 2);
    assert_eq!(store.surveys(1).unwrap()[0].temperature, 36.6);
}

#[test]
fn test_invalid_survey_is_rejected() {
    let store = fresh_store("store_invalid_survey");

    assert!(matches!(
        store.add_survey(&Survey::default()),
        Err(AppError::InvalidSurvey)
    ));

    let mut no_employee = Survey::new(d(2024, 3, 1), -1, true, true, true, 36.6);
    assert!(matches!(
        store.add_survey(&no_employee),
        Err(AppError::InvalidSurvey)
    ));
    assert!(matches!(
        store.edit_survey(&no_employee),
        Err(AppError::InvalidSurvey)
    ));

    no_employee.employee_id = 0;
    no_employee.survey_date = None;
    assert!(!no_employee.is_valid());
    assert!(store.add_survey(&no_employee).is_err());
}

#[test]
fn test_edit_survey_keeps_key() {
    let mut store = fresh_store("store_edit_survey");

    let mut survey = Survey::new(d(2024, 3, 1), 7, true, false, true, 36.6);
    store.add_survey(&survey).unwrap();

    survey.temperature = 37.2;
    survey.question_two = true;
    assert_eq!(store.edit_survey(&survey).unwrap(), 1);

    assert_eq!(
        cells(&mut store, 7),
        vec![vec!["01/03/2024", "Yes", "Yes", "Yes", "37.2"]]
    );
}

#[test]
fn test_zero_row_edit_and_remove_are_not_errors() {
    let store = fresh_store("store_zero_rows");

    let missing = Survey::new(d(2024, 1, 1), 3, false, false, false, 36.0);
    assert_eq!(store.edit_survey(&missing).unwrap(), 0);
    assert_eq!(store.remove_survey(d(2024, 1, 1), 3).unwrap(), 0);
    assert!(store.surveys(3).unwrap().is_empty());
}

#[test]
fn test_remove_survey() {
    let mut store = fresh_store("store_remove_survey");

    store
        .add_survey(&Survey::new(d(2024, 3, 1), 4, true, true, true, 36.6))
        .unwrap();
    store
        .add_survey(&Survey::new(d(2024, 3, 2), 4, true, true, true, 36.8))
        .unwrap();

    assert_eq!(store.remove_survey(d(2024, 3, 1), 4).unwrap(), 1);
    assert_eq!(
        cells(&mut store, 4),
        vec![vec!["02/03/2024", "Yes", "Yes", "Yes", "36.8"]]
    );
}

#[test]
fn test_remove_employee_cascades_to_surveys() {
    let mut store = fresh_store("store_cascade");

    let alice = store.add_employee("Alice").unwrap();
    let bob = store.add_employee("Bob").unwrap();
    for day in 1..=3 {
        store
            .add_survey(&Survey::new(d(2024, 3, day), alice, false, false, false, 36.5))
            .unwrap();
    }
    store
        .add_survey(&Survey::new(d(2024, 3, 1), bob, false, false, false, 36.5))
        .unwrap();

    assert_eq!(store.remove_employee(alice).unwrap(), 3);

    assert!(cells(&mut store, alice).is_empty());
    assert_eq!(cells(&mut store, bob).len(), 1);

    store.refresh_employee_view().unwrap();
    assert_eq!(store.employee_view().position_of(alice), None);
    assert!(store.employee_view().position_of(bob).is_some());
}

#[test]
fn test_survey_view_is_ordered_by_date() {
    let mut store = fresh_store("store_survey_order");

    for (day, temp) in [(15, 36.1), (2, 36.2), (9, 36.3)] {
        store
            .add_survey(&Survey::new(d(2024, 5, day), 1, false, true, false, temp))
            .unwrap();
    }

    let dates: Vec<String> = cells(&mut store, 1).into_iter().map(|r| r[0].clone()).collect();
    assert_eq!(dates, vec!["02/05/2024", "09/05/2024", "15/05/2024"]);
}

#[test]
fn test_current_employee_filter() {
    let mut store = fresh_store("store_current_employee");

    assert_eq!(store.current_employee_id(), NO_EMPLOYEE);
    store
        .add_survey(&Survey::new(d(2024, 3, 1), 1, true, true, true, 36.6))
        .unwrap();

    store.set_current_employee_id(-1);
    store.refresh_survey_view().unwrap();
    assert!(store.survey_view().is_empty());

    store.set_current_employee_id(42);
    store.refresh_survey_view().unwrap();
    assert_eq!(store.survey_view().row_count(), 0);

    // below -1 is ignored
    store.set_current_employee_id(-5);
    assert_eq!(store.current_employee_id(), 42);

    assert_eq!(store.query_survey_view(1).unwrap().row_count(), 1);
}

#[test]
fn test_open_is_idempotent() {
    let db_path = setup_test_db("store_idempotent_open");

    {
        let store = SurveyStore::open(&db_path).unwrap();
        store.add_employee("Alice").unwrap();
        store
            .add_survey(&Survey::new(d(2024, 3, 1), 1, true, false, true, 36.6))
            .unwrap();
    }

    let mut store = SurveyStore::open(&db_path).unwrap();
    assert_eq!(store.employee_view().row_count(), 1);
    assert_eq!(store.employees().unwrap().len(), 1);
    assert_eq!(cells(&mut store, 1).len(), 1);

    let again = SurveyStore::open(&db_path).unwrap();
    assert_eq!(again.employees().unwrap().len(), 1);
    assert_eq!(again.surveys(1).unwrap().len(), 1);
}

#[test]
fn test_resolve_employee() {
    let store = fresh_store("store_resolve_employee");

    let id = store.add_employee("Alice").unwrap();
    assert_eq!(store.resolve_employee("Alice").unwrap(), id);
    assert_eq!(store.resolve_employee("12").unwrap(), 12);
    assert!(matches!(
        store.resolve_employee("Nobody"),
        Err(AppError::EmployeeNotFound(_))
    ));
}

#[test]
fn test_survey_for_unregistered_employee_is_stored() {
    let mut store = fresh_store("store_unregistered_employee");

    assert!(store.employees().unwrap().is_empty());
    store
        .add_survey(&Survey::new(d(2024, 3, 1), 1, true, true, true, 36.6))
        .unwrap();

    assert_eq!(
        cells(&mut store, 1),
        vec![vec!["01/03/2024", "Yes", "Yes", "Yes", "36.6"]]
    );
}

#[test]
fn test_non_finite_temperature_is_rejected() {
    let store = fresh_store("store_non_finite_temperature");

    for temp in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let survey = Survey::new(d(2024, 3, 1), 1, true, true, true, temp);
        assert!(!survey.is_valid());
        assert!(matches!(
            store.add_survey(&survey),
            Err(AppError::InvalidSurvey)
        ));
        assert!(matches!(
            store.edit_survey(&survey),
            Err(AppError::InvalidSurvey)
        ));
    }

    assert!(store.surveys(1).unwrap().is_empty());
}

#[test]
fn test_open_fails_on_non_database_file() {
    let db_path = setup_test_db("store_not_a_database");
    std::fs::write(&db_path, "this is not an sqlite database\n".repeat(200)).unwrap();

    assert!(SurveyStore::open(&db_path).is_err());
}

#[test]
fn test_open_creates_missing_survey_table() {
    let db_path = setup_test_db("store_partial_schema");
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(EMPLOYEE_TABLE).unwrap();
        conn.execute("INSERT INTO Employee (name) VALUES ('Alice')", [])
            .unwrap();
        assert!(!schema_present(&conn).unwrap());
    }

    let store = SurveyStore::open(&db_path).unwrap();
    assert_eq!(store.employee_view().name_at(0), Some("Alice"));
    store
        .add_survey(&Survey::new(d(2024, 3, 1), 1, false, false, false, 36.4))
        .unwrap();

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    assert!(schema_present(&conn).unwrap());
}

#[test]
fn test_resolve_employee_prefers_exact_name() {
    let store = fresh_store("store_numeric_name");

    store.add_employee("Alice").unwrap();
    let seven = store.add_employee("7").unwrap();

    assert_ne!(seven, 7);
    assert_eq!(store.resolve_employee("7").unwrap(), seven);
    assert_eq!(store.resolve_employee(" 7 ").unwrap(), seven);
    // no employee named "7000": falls back to the id
    assert_eq!(store.resolve_employee("7000").unwrap(), 7000);
}
