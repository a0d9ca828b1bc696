use studydesk::core::AppState;
use studydesk::core::calculator::gpa::{cumulative_gpa, format_gpa, semester_gpa, total_units};
use studydesk::errors::AppError;
use studydesk::models::gpa::parse_units;
use studydesk::models::{Course, CoursePatch, Grade, Semester};
use studydesk::store::{KEY_GPA, MemoryStore};

fn course(units: Option<f64>, grade: Grade) -> Course {
    Course {
        units,
        grade,
        ..Course::blank()
    }
}

fn semester(courses: Vec<Course>) -> Semester {
    Semester {
        courses,
        ..Semester::with_blank_course("S")
    }
}

#[test]
fn test_semester_gpa_weighted_by_units() {
    let s = semester(vec![course(Some(3.0), Grade::A), course(Some(2.0), Grade::C)]);
    assert_eq!(format_gpa(semester_gpa(&s)), "4.20");
    assert_eq!(total_units(&s.courses), 5.0);
}

#[test]
fn test_invalid_units_are_excluded_not_zero() {
    let s = semester(vec![
        course(Some(3.0), Grade::B),
        course(parse_units("abc"), Grade::F),
        course(parse_units(""), Grade::F),
    ]);
    assert_eq!(format_gpa(semester_gpa(&s)), "4.00");
}

#[test]
fn test_no_valid_units_yields_zero() {
    let s = semester(vec![course(None, Grade::A)]);
    assert_eq!(semester_gpa(&s), 0.0);
    assert_eq!(format_gpa(semester_gpa(&s)), "0.00");
}

#[test]
fn test_parse_units() {
    assert_eq!(parse_units(" 3 "), Some(3.0));
    assert_eq!(parse_units("0"), Some(0.0));
    assert_eq!(parse_units("2.5"), Some(2.5));
    assert_eq!(parse_units("-1"), None);
    assert_eq!(parse_units("NaN"), None);
    assert_eq!(parse_units("x"), None);
}

#[test]
fn test_grade_parsing() {
    assert_eq!("b".parse::<Grade>().unwrap(), Grade::B);
    assert_eq!(Grade::E.points(), 1.0);
    assert!(matches!("G".parse::<Grade>(), Err(AppError::InvalidGrade(_))));
}

#[test]
fn test_cumulative_gpa_pools_all_courses() {
    let semesters = vec![
        semester(vec![course(Some(4.0), Grade::A)]),
        semester(vec![course(Some(1.0), Grade::F)]),
    ];
    // (20 + 0) / 5, not the mean of 5.0 and 0.0
    assert_eq!(format_gpa(cumulative_gpa(&semesters)), "4.00");
}

#[test]
fn test_semester_and_course_lifecycle() {
    let mut state = AppState::hydrate(MemoryStore::new(), false);
    let first = state.semesters()[0].id.clone();

    let second = state.add_semester();
    assert_eq!(state.find_semester(&second).unwrap().name, "Semester 2");

    let course_id = state.add_course(&first).unwrap();
    assert_eq!(state.find_semester(&first).unwrap().courses.len(), 2);

    assert!(state.update_course(
        &first,
        &course_id,
        CoursePatch {
            name: Some("Algebra".into()),
            units: Some(Some(3.0)),
            grade: Some(Grade::B),
        },
    ));
    assert!(state.rename_semester(&first, "Year 1"));

    let raw = state.store().raw(KEY_GPA).unwrap().to_string();
    assert!(raw.contains("\"units\":\"3\""));
    assert!(raw.contains("Year 1"));

    let state = AppState::hydrate(state.into_store(), false);
    let s = state.find_semester(&first).unwrap();
    assert_eq!(s.courses[1].name, "Algebra");
    assert_eq!(s.courses[1].units, Some(3.0));
    assert_eq!(s.courses[1].grade, Grade::B);
}

#[test]
fn test_last_course_and_semester_are_kept() {
    let mut state = AppState::hydrate(MemoryStore::new(), false);
    let sem = state.semesters()[0].id.clone();
    let only_course = state.semesters()[0].courses[0].id.clone();

    assert!(matches!(
        state.remove_course(&sem, &only_course),
        Err(AppError::LastCourse)
    ));
    assert!(matches!(state.remove_semester(&sem), Err(AppError::LastSemester)));

    let other = state.add_semester();
    assert!(state.remove_semester(&sem).unwrap());
    assert_eq!(state.semesters().len(), 1);
    assert_eq!(state.semesters()[0].id, other);

    assert!(!state.remove_semester("missing").unwrap());
    assert!(state.add_course("missing").is_none());
}

#[test]
fn test_corrupt_gpa_data_gives_default_semester() {
    let store = MemoryStore::new().with_entry(KEY_GPA, "[]");
    let state = AppState::hydrate(store, false);
    assert_eq!(state.semesters().len(), 1);
    assert_eq!(state.semesters()[0].courses.len(), 1);

    let store = MemoryStore::new()
        .with_entry(KEY_GPA, r#"[{"id":"s1","name":"Fall","courses":[{"id":"c1","name":"Bio","units":4,"grade":"C"}]}]"#);
    let state = AppState::hydrate(store, false);
    assert_eq!(state.semesters()[0].courses[0].units, Some(4.0));
    assert_eq!(format_gpa(semester_gpa(&state.semesters()[0])), "3.00");
}

#[test]
fn test_numeric_ids_from_older_data_are_kept() {
    let raw = r#"[{"id":1760000000000,"name":"Semester 1","courses":[
        {"id":1760000000000,"name":"Calculus","units":"3","grade":"A"},
        {"id":1760000000001,"name":"Physics","units":"2","grade":"C"}]}]"#;
    let mut state = AppState::hydrate(MemoryStore::new().with_entry(KEY_GPA, raw), false);

    assert_eq!(state.semesters().len(), 1);
    let s = &state.semesters()[0];
    assert_eq!(s.id, "1760000000000");
    assert_eq!(s.courses.len(), 2);
    assert_eq!(s.courses[1].name, "Physics");
    assert_eq!(format_gpa(semester_gpa(s)), "4.20");

    assert!(state.update_course(
        "1760000000000",
        "1760000000001",
        CoursePatch {
            grade: Some(Grade::A),
            ..CoursePatch::default()
        },
    ));
    assert_eq!(format_gpa(semester_gpa(&state.semesters()[0])), "5.00");

    // written back as strings, still readable
    let raw = state.store().raw(KEY_GPA).unwrap().to_string();
    assert!(raw.contains("\"id\":\"1760000000001\""));
    let state = AppState::hydrate(state.into_store(), false);
    assert_eq!(state.semesters()[0].courses[0].name, "Calculus");
}
