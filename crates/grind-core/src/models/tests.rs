
use jiff::Timestamp;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    models::{Plan, PlanKind, Question},
    TrackerError,
};

fn create_test_plan(size: usize) -> Plan {
    let questions = (1..=size)
        .map(|i| Question::new(i.to_string(), format!("Question {i}")).unwrap())
        .collect();
    Plan::new("Test Plan", questions).unwrap()
}

fn ts(second: i64) -> Timestamp {
    Timestamp::from_second(second).unwrap()
}

#[test]
fn test_question_new_defaults_to_unsolved() {
    let question = Question::new("42", "Trapping Rain Water").unwrap();
    assert!(!question.completed);
    assert_eq!(question.completed_at, None);
}

#[test]
fn test_question_new_rejects_blank_fields() {
    match Question::new("  ", "Name") {
        Err(TrackerError::InvalidInput { field, .. }) => assert_eq!(field, "id"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
    match Question::new("1", "") {
        Err(TrackerError::InvalidInput { field, .. }) => assert_eq!(field, "name"),
        other => panic!("Expected InvalidInput error, got {other:?}"),
    }
}

#[test]
fn test_plan_new_rejects_duplicate_ids() {
    let questions = vec![
        Question::new("1", "One").unwrap(),
        Question::new("1", "Uno").unwrap(),
    ];
    assert!(matches!(
        Plan::new("Dupes", questions),
        Err(TrackerError::InvalidInput { .. })
    ));
}

#[test]
fn test_unsolved_plus_completed_equals_total() {
    let mut plan = create_test_plan(10);
    plan.mark_complete(&["2", "5", "9"], ts(1_700_000_000));

    assert_eq!(plan.total_count(), 10);
    assert_eq!(plan.completed_count(), 3);
    assert_eq!(
        plan.unsolved_questions().len() + plan.completed_count(),
        plan.total_count()
    );
}

#[test]
fn test_unsolved_questions_preserve_order() {
    let mut plan = create_test_plan(5);
    plan.mark_complete(&["2", "4"], ts(1_700_000_000));
    assert_eq!(plan.unsolved_questions(), vec!["1", "3", "5"]);
}

#[test]
fn test_mark_complete_sets_timestamp() {
    let mut plan = create_test_plan(3);
    let now = ts(1_700_000_000);
    let report = plan.mark_complete(&["2"], now);

    assert_eq!(report.marked(), 1);
    assert_eq!(report.newly_completed, vec!["2".to_string()]);
    let question = plan.question("2").unwrap();
    assert!(question.completed);
    assert_eq!(question.completed_at, Some(now));
}

#[test]
fn test_mark_unknown_id_is_ignored() {
    let mut plan = create_test_plan(3);
    let before = plan.clone();
    let report = plan.mark_complete(&["404"], ts(1_700_000_000));

    assert_eq!(report.marked(), 0);
    assert!(!report.changed());
    assert_eq!(report.unknown, vec!["404".to_string()]);
    assert_eq!(plan, before);
}

#[test]
fn test_mark_complete_is_idempotent() {
    let mut plan = create_test_plan(3);
    plan.mark_complete(&["1"], ts(1_700_000_000));
    let after_first = plan.clone();

    let report = plan.mark_complete(&["1"], ts(1_700_086_400));
    assert_eq!(plan, after_first);
    assert_eq!(report.already_completed, vec!["1".to_string()]);
    assert_eq!(report.marked(), 1);
    assert!(!report.changed());
}

#[test]
fn test_mark_complete_reports_unknown_once() {
    let mut plan = create_test_plan(2);
    let report = plan.mark_complete(&["1", "x", "x", "1"], ts(1_700_000_000));
    assert_eq!(report.newly_completed, vec!["1".to_string()]);
    assert_eq!(report.unknown, vec!["x".to_string()]);
}

#[test]
fn test_sample_unsolved_oversampling_returns_all() {
    let mut plan = create_test_plan(6);
    plan.mark_complete(&["1", "6"], ts(1_700_000_000));
    let mut rng = StdRng::seed_from_u64(7);

    let mut sampled = plan.sample_unsolved(100, &mut rng);
    sampled.sort_unstable();
    assert_eq!(sampled, vec!["2", "3", "4", "5"]);
}

#[test]
fn test_sample_unsolved_returns_distinct_unsolved_ids() {
    let mut plan = create_test_plan(20);
    plan.mark_complete(&["3", "7"], ts(1_700_000_000));
    let mut rng = StdRng::seed_from_u64(42);

    let sampled = plan.sample_unsolved(5, &mut rng);
    assert_eq!(sampled.len(), 5);
    let mut unique = sampled.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), 5);
    assert!(sampled.iter().all(|id| *id != "3" && *id != "7"));
}

#[test]
fn test_sample_unsolved_empty_plan() {
    let plan = Plan::new("Empty", Vec::new()).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(plan.sample_unsolved(3, &mut rng).is_empty());
}

#[test]
fn test_validate_rejects_timestamp_without_completion() {
    let mut plan = create_test_plan(2);
    plan.questions[0].completed_at = Some(ts(1_700_000_000));
    assert!(matches!(plan.validate(), Err(TrackerError::Parse { .. })));
}

#[test]
fn test_validate_accepts_legacy_completion_without_timestamp() {
    let mut plan = create_test_plan(2);
    plan.questions[0].completed = true;
    assert!(plan.validate().is_ok());
}

#[test]
fn test_validate_rejects_duplicates() {
    let mut plan = create_test_plan(2);
    plan.questions[1].id = "1".to_string();
    assert!(matches!(plan.validate(), Err(TrackerError::Parse { .. })));
}

#[test]
fn test_plan_kind_slugs_and_parsing() {
    assert_eq!(PlanKind::TopInterview150.slug(), "top-interview-150");
    assert_eq!(
        PlanKind::TopInterview150.plan_file_name(),
        "top-interview-150.json"
    );
    assert_eq!(
        PlanKind::LeetCode75.raw_file_name(),
        "leetcode-75-raw.json"
    );
    assert_eq!(
        serde_json::from_str::<PlanKind>(r#""30-days-of-javascript""#).unwrap(),
        PlanKind::ThirtyDaysOfJavascript
    );
    assert!(serde_json::from_str::<PlanKind>(r#""blind-75""#).is_err());
}

#[test]
fn test_plan_kind_display_matches_slug() {
    for kind in PlanKind::ALL {
        assert_eq!(kind.to_string(), kind.slug());
    }
}
