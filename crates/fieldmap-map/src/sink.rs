//! Receivers for committed change batches.
//!
//! The core's obligation ends at handing over the ordered snapshot. Storage,
//! retries and failure reporting belong to the sink.

use fieldmap_model::ChangeRecord;
use serde::Serialize;
use tracing::info;

/// A committed snapshot of the change log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitBatch {
    /// 1-based commit number within the session.
    pub sequence: u64,
    /// Changes in append order.
    pub changes: Vec<ChangeRecord>,
}

/// Collaborator that receives each commit exactly once.
pub trait CommitSink {
    fn deliver(&mut self, batch: CommitBatch);
}

/// Writes committed changes to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl CommitSink for LoggingSink {
    fn deliver(&mut self, batch: CommitBatch) {
        info!(
            commit = batch.sequence,
            changes = batch.changes.len(),
            "saving mapping changes"
        );
        for change in &batch.changes {
            info!(
                commit = batch.sequence,
                kind = %change.kind,
                source = %change.source_name,
                target = %change.target_name,
                "{change}"
            );
        }
    }
}

/// Keeps every delivered batch in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    batches: Vec<CommitBatch>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batches(&self) -> &[CommitBatch] {
        &self.batches
    }

    pub fn into_batches(self) -> Vec<CommitBatch> {
        self.batches
    }
}

impl CommitSink for CollectingSink {
    fn deliver(&mut self, batch: CommitBatch) {
        self.batches.push(batch);
    }
}
