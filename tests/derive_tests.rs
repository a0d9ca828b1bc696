use chrono::{NaiveDate, NaiveTime};
use studydesk::core::AppState;
use studydesk::core::derive::{
    AssignmentFilter, Dashboard, ExamUrgency, class_name, days_remaining, exam_urgency,
    exams_by_date, pending_count, sorted_assignments, todays_schedule, upcoming_assignments,
    upcoming_exams,
};
use studydesk::models::{
    Assignment, ClassEntry, Day, Exam, ExamType, Priority, ScheduleSlot, Status, UserProfile,
};
use studydesk::store::MemoryStore;

// 2026-10-18 is a Sunday
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn day(offset: i64) -> NaiveDate {
    today() + chrono::Duration::days(offset)
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn class(id: &str, name: &str, slots: Vec<ScheduleSlot>) -> ClassEntry {
    ClassEntry {
        id: id.into(),
        name: name.into(),
        teacher: String::new(),
        room: String::new(),
        schedule: slots,
    }
}

fn assignment(id: &str, due: NaiveDate, status: Status) -> Assignment {
    Assignment {
        id: id.into(),
        title: format!("task {id}"),
        description: String::new(),
        class_id: None,
        due_date: due,
        priority: Priority::Medium,
        status,
    }
}

fn exam(id: &str, date: NaiveDate, time: NaiveTime) -> Exam {
    Exam {
        id: id.into(),
        title: format!("exam {id}"),
        class_id: None,
        date,
        time,
        topics: String::new(),
        kind: ExamType::Final,
    }
}

#[test]
fn test_todays_schedule_sorted_by_start() {
    let classes = vec![
        class("a", "Late", vec![ScheduleSlot::new(Day::Sunday, hm(14, 0), hm(15, 0))]),
        class("b", "Monday only", vec![ScheduleSlot::new(Day::Monday, hm(8, 0), hm(9, 0))]),
        class(
            "c",
            "Early",
            vec![
                ScheduleSlot::new(Day::Tuesday, hm(7, 0), hm(8, 0)),
                ScheduleSlot::new(Day::Sunday, hm(9, 0), hm(10, 0)),
            ],
        ),
    ];

    let schedule = todays_schedule(&classes, today());
    let names: Vec<&str> = schedule.iter().map(|t| t.class.name.as_str()).collect();
    assert_eq!(names, ["Early", "Late"]);
    assert_eq!(schedule[0].slot.start_time, hm(9, 0));
}

#[test]
fn test_todays_schedule_empty_when_no_match() {
    let classes = vec![class("b", "Math", vec![ScheduleSlot::new(Day::Monday, hm(8, 0), hm(9, 0))])];
    assert!(todays_schedule(&classes, today()).is_empty());
}

#[test]
fn test_upcoming_assignments_filters_and_limits() {
    let assignments = vec![
        assignment("past", day(-1), Status::Pending),
        assignment("done", day(1), Status::Completed),
        assignment("d6", day(6), Status::Pending),
        assignment("d0", day(0), Status::Pending),
        assignment("d2", day(2), Status::Pending),
        assignment("d5", day(5), Status::Pending),
        assignment("d3", day(3), Status::Pending),
        assignment("d4", day(4), Status::Pending),
    ];

    let ids: Vec<&str> = upcoming_assignments(&assignments, today())
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(ids, ["d0", "d2", "d3", "d4", "d5"]);
}

#[test]
fn test_upcoming_exams_ordered_and_truncated() {
    let exams = vec![
        exam("past", day(-2), hm(9, 0)),
        exam("later-same-day", day(1), hm(15, 0)),
        exam("earlier-same-day", day(1), hm(8, 0)),
        exam("today", day(0), hm(18, 0)),
        exam("far", day(30), hm(9, 0)),
    ];

    let ids: Vec<&str> = upcoming_exams(&exams, today())
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, ["today", "earlier-same-day", "later-same-day"]);

    let all: Vec<&str> = exams_by_date(&exams).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(all.len(), 5);
    assert_eq!(all[0], "past");
    assert_eq!(all[4], "far");
}

#[test]
fn test_days_remaining_and_urgency() {
    assert_eq!(days_remaining(day(0), today()), 0);
    assert_eq!(days_remaining(day(3), today()), 3);
    assert_eq!(days_remaining(day(-2), today()), -2);

    assert_eq!(exam_urgency(day(-1), today()), ExamUrgency::Past);
    assert_eq!(exam_urgency(day(0), today()), ExamUrgency::Urgent);
    assert_eq!(exam_urgency(day(3), today()), ExamUrgency::Urgent);
    assert_eq!(exam_urgency(day(4), today()), ExamUrgency::Upcoming);
}

#[test]
fn test_class_name_falls_back_to_general() {
    let classes = vec![class("c1", "Physics", vec![])];
    assert_eq!(class_name(&classes, Some("c1")), "Physics");
    assert_eq!(class_name(&classes, Some("gone")), "General");
    assert_eq!(class_name(&classes, None), "General");
}

#[test]
fn test_sorted_assignments_pending_first() {
    let assignments = vec![
        assignment("c-early", day(-5), Status::Completed),
        assignment("p-late", day(9), Status::Pending),
        assignment("p-early", day(-1), Status::Pending),
    ];

    let all: Vec<&str> = sorted_assignments(&assignments, AssignmentFilter::All)
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(all, ["p-early", "p-late", "c-early"]);

    let done = sorted_assignments(&assignments, AssignmentFilter::Completed);
    assert_eq!(done.len(), 1);
    assert_eq!(pending_count(&assignments), 2);
}

#[test]
fn test_dashboard_aggregates_state() {
    let mut state = AppState::hydrate(MemoryStore::new(), false);
    state.sign_in(UserProfile {
        name: "Ada".into(),
        school: "College".into(),
        email: "ada@example.com".into(),
    });

    let dash = Dashboard::build(&state, today());
    assert_eq!(dash.day, Day::Sunday);
    assert_eq!(dash.date_label, "Sunday, October 18th");
    assert_eq!(dash.greeting_name, "Ada");
    assert!(dash.classes.is_empty());
    assert!(dash.due_soon.is_empty());
    assert_eq!(dash.pending_count, 0);
    assert_eq!(dash.upcoming_exam_count, 0);
    assert!(dash.next_exam().is_none());
}
