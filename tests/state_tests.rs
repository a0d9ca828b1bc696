use chrono::{NaiveDate, NaiveTime};
use studydesk::core::AppState;
use studydesk::models::{
    AccentColor, AssignmentPatch, ClassPatch, Day, ExamType, NewAssignment, NewClass, NewExam,
    Priority, ProfilePatch, ScheduleSlot, Status, Theme, UserProfile,
};
use studydesk::store::{
    KEY_ACCENT, KEY_ASSIGNMENTS, KEY_CLASSES, KEY_EXAMS, KEY_THEME, KEY_USER, KeyValueStore,
    MemoryStore,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn math_class() -> NewClass {
    NewClass {
        name: "Math".into(),
        teacher: "Dr. Euler".into(),
        room: "B12".into(),
        schedule: vec![ScheduleSlot::new(Day::Monday, hm(9, 0), hm(10, 30))],
    }
}

fn empty_state() -> AppState<MemoryStore> {
    AppState::hydrate(MemoryStore::new(), false)
}

#[test]
fn test_hydrate_empty_store_gives_defaults() {
    let state = AppState::hydrate(MemoryStore::new(), true);

    assert!(state.classes().is_empty());
    assert!(state.assignments().is_empty());
    assert!(state.exams().is_empty());
    assert!(!state.is_signed_in());
    assert_eq!(state.username(), "");
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.accent_color(), AccentColor::Violet);
    assert_eq!(state.semesters().len(), 1);
    assert_eq!(state.semesters()[0].name, "Semester 1");
    assert_eq!(state.semesters()[0].courses.len(), 1);

    // hydrating writes nothing back
    assert!(state.store().is_empty());
}

#[test]
fn test_add_class_persists_whole_collection() {
    let mut state = empty_state();
    let first = state.add_class(math_class());
    let second = state.add_class(NewClass {
        name: "History".into(),
        ..NewClass::default()
    });

    assert_ne!(first, second);
    assert_eq!(state.classes()[0].id, first);
    assert_eq!(state.classes()[1].id, second);

    let raw = state.store().raw(KEY_CLASSES).unwrap();
    let value: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["schedule"][0]["day"], "Monday");
    assert_eq!(value[0]["schedule"][0]["startTime"], "09:00");
    assert_eq!(value[0]["schedule"][0]["endTime"], "10:30");
}

#[test]
fn test_update_class_merges_only_given_fields() {
    let mut state = empty_state();
    let id = state.add_class(math_class());

    let changed = state.update_class(
        &id,
        ClassPatch {
            room: Some("C3".into()),
            ..ClassPatch::default()
        },
    );

    assert!(changed);
    let class = state.find_class(&id).unwrap();
    assert_eq!(class.room, "C3");
    assert_eq!(class.name, "Math");
    assert_eq!(class.teacher, "Dr. Euler");
    assert_eq!(class.schedule.len(), 1);
}

#[test]
fn test_unknown_ids_are_noops() {
    let mut state = empty_state();
    let id = state.add_class(math_class());
    let before = state.store().raw(KEY_CLASSES).map(String::from);

    assert!(!state.update_class("missing", ClassPatch::default()));
    assert!(!state.delete_class("missing"));
    assert!(!state.delete_assignment("missing"));
    assert!(!state.delete_exam("missing"));
    assert!(state.toggle_assignment_status("missing").is_none());

    assert_eq!(state.classes().len(), 1);
    assert_eq!(state.classes()[0].id, id);
    assert_eq!(state.store().raw(KEY_CLASSES).map(String::from), before);
    assert!(state.store().raw(KEY_ASSIGNMENTS).is_none());
    assert!(state.store().raw(KEY_EXAMS).is_none());
}

#[test]
fn test_add_assignment_forces_pending() {
    let mut state = empty_state();
    let data = NewAssignment {
        status: Some(Status::Completed),
        priority: Priority::High,
        ..NewAssignment::new("Essay", date(2026, 10, 20))
    };

    let id = state.add_assignment(data);
    let a = state.find_assignment(&id).unwrap();
    assert_eq!(a.status, Status::Pending);
    assert_eq!(a.priority, Priority::High);
    assert!(a.class_id.is_none());
}

#[test]
fn test_toggle_is_its_own_inverse_and_isolated() {
    let mut state = empty_state();
    let a = state.add_assignment(NewAssignment::new("A", date(2026, 10, 20)));
    let b = state.add_assignment(NewAssignment::new("B", date(2026, 10, 21)));

    assert_eq!(state.toggle_assignment_status(&a), Some(Status::Completed));
    assert_eq!(state.find_assignment(&b).unwrap().status, Status::Pending);

    assert_eq!(state.toggle_assignment_status(&a), Some(Status::Pending));
    assert_eq!(state.find_assignment(&a).unwrap().status, Status::Pending);
}

#[test]
fn test_update_assignment_can_clear_class() {
    let mut state = empty_state();
    let class = state.add_class(math_class());
    let id = state.add_assignment(NewAssignment {
        class_id: Some(class),
        ..NewAssignment::new("Homework", date(2026, 10, 20))
    });

    state.update_assignment(
        &id,
        AssignmentPatch {
            class_id: Some(None),
            title: Some("Homework 2".into()),
            ..AssignmentPatch::default()
        },
    );

    let a = state.find_assignment(&id).unwrap();
    assert!(a.class_id.is_none());
    assert_eq!(a.title, "Homework 2");
    assert_eq!(a.due_date, date(2026, 10, 20));
}

#[test]
fn test_deleting_class_leaves_dangling_references() {
    let mut state = empty_state();
    let class = state.add_class(math_class());
    let id = state.add_assignment(NewAssignment {
        class_id: Some(class.clone()),
        ..NewAssignment::new("Homework", date(2026, 10, 20))
    });

    assert!(state.delete_class(&class));
    assert_eq!(
        state.find_assignment(&id).unwrap().class_id.as_deref(),
        Some(class.as_str())
    );
}

#[test]
fn test_state_survives_rehydration() {
    let mut state = empty_state();
    state.add_class(math_class());
    state.add_exam(NewExam {
        title: "Algebra final".into(),
        class_id: None,
        date: date(2026, 12, 1),
        time: hm(14, 0),
        topics: "groups, rings".into(),
        kind: ExamType::ProjectPresentation,
    });
    state.sign_in(UserProfile {
        name: "Ada".into(),
        school: "Analytical College".into(),
        email: "ada@example.com".into(),
    });
    state.toggle_theme();
    state.set_accent_color(AccentColor::Teal);

    let store = state.into_store();
    assert_eq!(store.raw(KEY_THEME), Some("dark"));
    assert_eq!(store.raw(KEY_ACCENT), Some("teal"));
    assert!(store.raw(KEY_EXAMS).unwrap().contains("\"type\":\"Project Presentation\""));

    let state = AppState::hydrate(store, false);
    assert_eq!(state.classes().len(), 1);
    assert_eq!(state.exams()[0].kind, ExamType::ProjectPresentation);
    assert_eq!(state.exams()[0].time, hm(14, 0));
    assert_eq!(state.username(), "Ada");
    assert_eq!(state.user().school, "Analytical College");
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.accent_preset().primary, "#0d9488");
}

#[test]
fn test_corrupt_values_fall_back_to_defaults() {
    let store = MemoryStore::new()
        .with_entry(KEY_CLASSES, "{not json")
        .with_entry(KEY_ASSIGNMENTS, "42")
        .with_entry(KEY_THEME, "sepia")
        .with_entry(KEY_ACCENT, "neon");

    let state = AppState::hydrate(store, true);
    assert!(state.classes().is_empty());
    assert!(state.assignments().is_empty());
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.accent_color(), AccentColor::Violet);
}

#[test]
fn test_legacy_username_hydrates_profile() {
    let store = MemoryStore::new().with_entry(KEY_USER, "\"Grace\"");
    let state = AppState::hydrate(store, false);

    assert!(state.is_signed_in());
    assert_eq!(state.username(), "Grace");
    assert_eq!(state.user().email, "");
}

#[test]
fn test_stored_theme_wins_over_preference() {
    let store = MemoryStore::new().with_entry(KEY_THEME, "light");
    let state = AppState::hydrate(store, true);
    assert_eq!(state.theme(), Theme::Light);
}

#[test]
fn test_empty_class_id_reads_as_none() {
    let raw = r#"[{"id":"a1","title":"Lab","description":"","classId":"","dueDate":"2026-10-20","priority":"Low","status":"Completed"}]"#;
    let state = AppState::hydrate(MemoryStore::new().with_entry(KEY_ASSIGNMENTS, raw), false);

    let a = &state.assignments()[0];
    assert!(a.class_id.is_none());
    assert_eq!(a.status, Status::Completed);
    assert_eq!(a.priority, Priority::Low);
}

#[test]
fn test_profile_patch_and_sign_out() {
    let mut state = empty_state();
    state.sign_in(UserProfile {
        name: "Ada".into(),
        school: "Analytical College".into(),
        email: "ada@example.com".into(),
    });

    state.update_user_profile(ProfilePatch {
        school: Some("Difference Institute".into()),
        ..ProfilePatch::default()
    });
    assert_eq!(state.username(), "Ada");
    assert_eq!(state.user().school, "Difference Institute");

    state.sign_out();
    assert!(!state.is_signed_in());
    assert!(state.store().get(KEY_USER).unwrap().is_none());
}

#[test]
fn test_toggle_theme_is_immediate() {
    let mut state = empty_state();
    assert_eq!(state.theme(), Theme::Light);
    assert_eq!(state.toggle_theme(), Theme::Dark);
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.toggle_theme(), Theme::Light);
}

#[test]
fn test_blank_slot_time_keeps_the_other_classes() {
    let raw = r#"[
        {"id":"c1","name":"Math","teacher":"","room":"B12",
         "schedule":[{"day":"Monday","startTime":"09:00","endTime":"10:30"}]},
        {"id":"c2","name":"Art","teacher":"","room":"",
         "schedule":[{"day":"Tuesday","startTime":"","endTime":""}]}
    ]"#;
    let state = AppState::hydrate(MemoryStore::new().with_entry(KEY_CLASSES, raw), false);

    assert_eq!(state.classes().len(), 2);
    let math = &state.classes()[0];
    assert_eq!(math.schedule, vec![ScheduleSlot::new(Day::Monday, hm(9, 0), hm(10, 30))]);
    let art = &state.classes()[1];
    assert_eq!(art.name, "Art");
    assert!(art.schedule.is_empty());
}

#[test]
fn test_unreadable_entry_does_not_drop_the_collection() {
    let raw = r#"[
        {"id":"a1","title":"Essay","dueDate":"2026-10-20"},
        {"id":"a2","title":"No date"},
        {"id":"a3","title":"Lab","dueDate":"2026-10-22","status":"Completed"}
    ]"#;
    let state = AppState::hydrate(MemoryStore::new().with_entry(KEY_ASSIGNMENTS, raw), false);

    let titles: Vec<&str> = state.assignments().iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["Essay", "Lab"]);
    assert_eq!(state.assignments()[1].status, Status::Completed);
}

#[test]
fn test_numeric_ids_and_class_refs_are_read_as_strings() {
    let classes = r#"[{"id":1760000000000,"name":"Math","schedule":[]}]"#;
    let assignments = r#"[{"id":1760000000005,"title":"Sheet 1","classId":1760000000000,
        "dueDate":"2026-10-20","priority":"High","status":"Pending"}]"#;
    let store = MemoryStore::new()
        .with_entry(KEY_CLASSES, classes)
        .with_entry(KEY_ASSIGNMENTS, assignments);
    let mut state = AppState::hydrate(store, false);

    let a = &state.assignments()[0];
    assert_eq!(a.id, "1760000000005");
    assert_eq!(a.class_id.as_deref(), Some("1760000000000"));
    assert_eq!(state.classes()[0].id, "1760000000000");

    assert_eq!(
        state.toggle_assignment_status("1760000000005"),
        Some(Status::Completed)
    );
}
