//! Integration tests for gesture script replay.

use std::fs;
use std::path::PathBuf;

use fieldmap_cli::script::{Gesture, load_script, replay};
use fieldmap_map::{FlowState, MappingSession};
use fieldmap_model::{ChangeRecord, MappingFixture};

fn temp_script_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    path.push(format!("fieldmap_{name}_{}_{stamp}.json", std::process::id()));
    path
}

fn demo_session() -> MappingSession {
    MappingSession::from_fixture(&MappingFixture::demo()).expect("demo session")
}

#[test]
fn replays_demo_walkthrough_from_file() {
    let path = temp_script_path("walkthrough");
    fs::write(
        &path,
        r#"[
            { "action": "connect", "source": "source-1", "target": "target-2" },
            { "action": "disconnect", "edges": ["edge-2"] },
            { "action": "open" },
            { "action": "commit" },
            { "action": "open" },
            { "action": "cancel" }
        ]"#,
    )
    .expect("write script");

    let gestures = load_script(&path).expect("load script");
    let mut session = demo_session();
    let report = replay(&mut session, &gestures);

    assert_eq!(report.reviews.len(), 2);
    assert_eq!(report.reviews[0].len(), 2);
    assert!(report.reviews[1].is_empty());
    assert_eq!(report.commits.len(), 1);
    assert_eq!(
        report.commits[0].changes,
        vec![
            ChangeRecord::added("source_system", "entity_type"),
            ChangeRecord::removed("Brand", "business_name_legal_name"),
        ]
    );
    assert!(report.pending.is_empty());
    assert_eq!(report.final_state, FlowState::Idle);
    assert_eq!(report.ignored, 0);

    let edge_ids: Vec<&str> = report.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(edge_ids, vec!["edge-3", "edge-4"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn counts_gestures_dropped_during_review() {
    let gestures = vec![
        Gesture::Open,
        Gesture::Connect {
            source: "source-7".into(),
            target: "target-6".into(),
        },
        Gesture::Disconnect {
            edges: vec!["edge-1".into()],
        },
    ];
    let mut session = demo_session();
    let report = replay(&mut session, &gestures);

    assert_eq!(report.ignored, 2);
    assert_eq!(report.edges.len(), 3);
    assert_eq!(report.final_state, FlowState::Reviewing);
    assert!(report.commits.is_empty());
}

#[test]
fn uncommitted_changes_stay_pending() {
    let gestures = vec![
        Gesture::Connect {
            source: "source-6".into(),
            target: "target-3".into(),
        },
        Gesture::Open,
        Gesture::Cancel,
    ];
    let mut session = demo_session();
    let report = replay(&mut session, &gestures);

    assert_eq!(
        report.pending,
        vec![ChangeRecord::added("business_name", "business_name_dba")]
    );
    assert_eq!(report.pending_summary.added, 1);
    assert!(report.commits.is_empty());
}

#[test]
fn report_serializes_to_json() {
    let gestures = vec![
        Gesture::Disconnect {
            edges: vec!["edge-3".into()],
        },
        Gesture::Open,
        Gesture::Commit,
    ];
    let mut session = demo_session();
    let report = replay(&mut session, &gestures);
    let json = serde_json::to_value(&report).expect("serialize report");

    assert_eq!(json["commits"][0]["sequence"], 1);
    insta::assert_json_snapshot!(json["commits"][0]["changes"], @r#"
    [
      {
        "kind": "remove",
        "source_name": "customer_prospect_ind",
        "target_name": "cust_id"
      }
    ]
    "#);
    assert_eq!(json["final_state"], "idle");
    assert_eq!(json["edges"][0]["origin"], "seeded");
}

#[test]
fn missing_script_reports_path() {
    let path = temp_script_path("missing");
    let err = load_script(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read script"));
}
