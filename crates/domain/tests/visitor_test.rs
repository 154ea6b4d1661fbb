use ferrous_visits_domain::denylist::normalize_denylist;
use ferrous_visits_domain::visitor::NO_RECORD;
use ferrous_visits_domain::{VisitOutcome, VisitRecord, VisitorStats};

fn record(id: i64, visit_time: &str) -> VisitRecord {
    VisitRecord {
        id,
        address: "203.0.113.7".to_string(),
        visit_time: visit_time.to_string(),
        remark: String::new(),
    }
}

#[test]
fn test_stats_without_records_use_sentinel() {
    let stats = VisitorStats::new(0, Vec::new());

    assert_eq!(stats.total_count, 0);
    assert_eq!(stats.last_visit, NO_RECORD);
    assert!(stats.records.is_empty());
}

#[test]
fn test_stats_last_visit_is_first_record() {
    let stats = VisitorStats::new(
        2,
        vec![record(2, "2024-05-02 10:00:00"), record(1, "2024-05-01 10:00:00")],
    );

    assert_eq!(stats.total_count, 2);
    assert_eq!(stats.last_visit, "2024-05-02 10:00:00");
}

#[test]
fn test_visit_outcome_is_recorded() {
    let recorded = VisitOutcome::Recorded {
        address: "203.0.113.7".to_string(),
        visit_time: "2024-05-02 10:00:00".to_string(),
    };
    let restricted = VisitOutcome::Restricted {
        address: "203.0.113.7".to_string(),
    };

    assert!(recorded.is_recorded());
    assert!(!restricted.is_recorded());
}

#[test]
fn test_normalize_denylist_trims_and_dedups() {
    let normalized = normalize_denylist([" 203.0.113.7", "203.0.113.7 ", "", "  ", "198.51.100.1"]);

    assert_eq!(normalized, vec!["198.51.100.1".to_string(), "203.0.113.7".to_string()]);
}
