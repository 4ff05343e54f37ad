//! 활동 기록 용량과 순서 테스트.
use bcn_engineering_suite::category::Category;
use bcn_engineering_suite::history::{ActivityLog, CAPACITY};
use chrono::{Local, TimeZone};

#[test]
fn keeps_newest_five_entries_first() {
    let mut log = ActivityLog::new();
    for i in 1..=6 {
        log.record(Category::Length, &format!("{i} Meters"), &format!("{i} Feet"));
    }
    assert_eq!(log.len(), CAPACITY);
    let inputs: Vec<&str> = log.entries().map(|e| e.input.as_str()).collect();
    assert_eq!(
        inputs,
        vec!["6 Meters", "5 Meters", "4 Meters", "3 Meters", "2 Meters"]
    );
    assert_eq!(log.latest().map(|e| e.result.as_str()), Some("6 Feet"));
}

#[test]
fn ids_increase_within_the_same_millisecond() {
    let mut log = ActivityLog::new();
    let at = Local
        .with_ymd_and_hms(2024, 3, 1, 15, 45, 0)
        .single()
        .expect("unambiguous local time");
    let a = log.record_at(at, Category::Pressure, "1 PSI", "0.068948 Bar");
    let b = log.record_at(at, Category::Pressure, "2 PSI", "0.137895 Bar");
    let a_id: i64 = a.id.parse().expect("numeric id");
    let b_id: i64 = b.id.parse().expect("numeric id");
    assert!(b_id > a_id);
    assert_eq!(a.timestamp, "03:45 PM");
    assert_eq!(a.module, Category::Pressure);
}

#[test]
fn new_log_is_empty() {
    let log = ActivityLog::new();
    assert!(log.is_empty());
    assert!(log.latest().is_none());
}
