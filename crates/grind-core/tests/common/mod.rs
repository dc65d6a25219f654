use std::{fs, path::Path};

use grind_core::{PlanKind, Tracker, TrackerBuilder};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Helper function to create a tracker with isolated plans and data
/// directories
pub fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let tracker = TrackerBuilder::new()
        .with_plans_dir(Some(temp_dir.path().join("plans")))
        .with_data_dir(Some(temp_dir.path().join("data")))
        .build()
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Raw `studyPlanV2Detail` document with two sub-groups (2 + 3 questions)
pub fn raw_plan() -> Value {
    json!({
        "data": {
            "studyPlanV2Detail": {
                "slug": "top-interview-150",
                "name": "Top Interview 150",
                "planSubGroups": [
                    { "name": "Array / String", "questions": [
                        { "title": "Merge Sorted Array", "id": "88", "titleSlug": "merge-sorted-array" },
                        { "title": "Remove Element", "id": "27", "titleSlug": "remove-element" }
                    ]},
                    { "name": "Two Pointers", "questions": [
                        { "title": "Valid Palindrome", "id": "125" },
                        { "title": "Is Subsequence", "id": "392" },
                        { "title": "Two Sum II - Input Array Is Sorted", "id": "167" }
                    ]}
                ]
            }
        }
    })
}

/// Writes the raw document where `init` looks for it.
pub fn write_raw_plan(data_dir: &Path, kind: PlanKind, raw: &Value) {
    fs::create_dir_all(data_dir).expect("Failed to create data dir");
    fs::write(
        data_dir.join(kind.raw_file_name()),
        serde_json::to_string_pretty(raw).expect("Failed to serialize raw plan"),
    )
    .expect("Failed to write raw plan");
}
