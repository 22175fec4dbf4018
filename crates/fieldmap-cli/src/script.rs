//! Scripted gesture replay.
//!
//! A script is a JSON array of gestures, applied in order to a session:
//!
//! ```json
//! [
//!   { "action": "connect", "source": "source-1", "target": "target-2" },
//!   { "action": "disconnect", "edges": ["edge-2"] },
//!   { "action": "open" },
//!   { "action": "commit" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fieldmap_map::{
    ChangeSummary, CollectingSink, CommitBatch, CommitSink, FlowState, LoggingSink,
    MappingSession, ReviewView,
};
use fieldmap_model::{ChangeRecord, Edge, EdgeId, FieldId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

/// One user gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Gesture {
    Connect { source: FieldId, target: FieldId },
    Disconnect { edges: Vec<EdgeId> },
    Open,
    Cancel,
    Commit,
}

/// Read a gesture script from disk.
pub fn load_script(path: &Path) -> Result<Vec<Gesture>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse script {}", path.display()))
}

/// What a replay produced.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Edges after the last gesture.
    pub edges: Vec<Edge>,
    /// Every review dialog that was opened, in order.
    pub reviews: Vec<ReviewView>,
    /// Every committed batch, in order.
    pub commits: Vec<CommitBatch>,
    /// Changes still waiting for a commit.
    pub pending: Vec<ChangeRecord>,
    pub pending_summary: ChangeSummary,
    /// Gestures dropped because the review dialog was open.
    pub ignored: usize,
    /// Whether the script ended with the dialog open.
    pub final_state: FlowState,
}

/// Logs each commit and keeps a copy for the report.
#[derive(Debug, Default)]
struct ReplaySink {
    logged: LoggingSink,
    collected: CollectingSink,
}

impl CommitSink for ReplaySink {
    fn deliver(&mut self, batch: CommitBatch) {
        self.logged.deliver(batch.clone());
        self.collected.deliver(batch);
    }
}

/// Apply `gestures` to `session` in order.
pub fn replay(session: &mut MappingSession, gestures: &[Gesture]) -> ReplayReport {
    let _span = info_span!("replay", gestures = gestures.len()).entered();
    let mut sink = ReplaySink::default();
    let mut reviews = Vec::new();
    let mut ignored = 0;

    for (step, gesture) in gestures.iter().enumerate() {
        debug!(step, ?gesture, "applying gesture");
        match gesture {
            Gesture::Connect { source, target } => {
                if session.on_connect(source.clone(), target.clone()).is_none() {
                    ignored += 1;
                }
            }
            Gesture::Disconnect { edges } => {
                if session.flow_state() == FlowState::Reviewing {
                    ignored += 1;
                }
                session.on_edges_delete(edges.iter().cloned());
            }
            Gesture::Open => reviews.push(session.open_review().clone()),
            Gesture::Cancel => {
                session.cancel_review();
            }
            Gesture::Commit => {
                session.commit_review(&mut sink);
            }
        }
    }

    ReplayReport {
        edges: session.edges().to_vec(),
        reviews,
        commits: sink.collected.into_batches(),
        pending: session.change_log().snapshot(),
        pending_summary: session.change_log().summary(),
        ignored,
        final_state: session.flow_state(),
    }
}
