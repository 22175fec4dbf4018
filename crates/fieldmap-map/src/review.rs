//! Confirmation flow: review the pending changes, then commit or cancel.
//!
//! A two-state machine. `open` moves Idle → Reviewing and captures the
//! change log; `cancel` returns to Idle without touching anything; `commit`
//! hands the log to a [`CommitSink`], clears it, and returns to Idle.

use std::fmt;

use fieldmap_model::ChangeRecord;
use serde::Serialize;
use tracing::{debug, info};

use crate::log::{ChangeLog, ChangeSummary};
use crate::sink::{CommitBatch, CommitSink};

/// Whether the review dialog is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowState {
    #[default]
    Idle,
    Reviewing,
}

/// What the review dialog displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewView {
    changes: Vec<ChangeRecord>,
}

impl ReviewView {
    pub const TITLE: &'static str = "Confirm Mapping Changes";
    pub const NO_CHANGES: &'static str = "No changes have been made to the mapping.";

    pub fn new(changes: Vec<ChangeRecord>) -> Self {
        Self { changes }
    }

    pub fn changes(&self) -> &[ChangeRecord] {
        &self.changes
    }

    /// True when the dialog should show the "no changes" message.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn summary(&self) -> ChangeSummary {
        ChangeSummary::of(&self.changes)
    }

    /// One display line per change, or the single "no changes" line.
    pub fn lines(&self) -> Vec<String> {
        if self.changes.is_empty() {
            return vec![Self::NO_CHANGES.to_string()];
        }
        self.changes.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ReviewView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::TITLE)?;
        for line in self.lines() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// Receipt for a commit that reached the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitReceipt {
    pub sequence: u64,
    pub delivered: usize,
}

/// The review/commit gate.
#[derive(Debug, Clone, Default)]
pub struct ConfirmationFlow {
    state: FlowState,
    view: Option<ReviewView>,
    commits: u64,
}

impl ConfirmationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_reviewing(&self) -> bool {
        self.state == FlowState::Reviewing
    }

    /// The open dialog's contents, if reviewing.
    pub fn view(&self) -> Option<&ReviewView> {
        self.view.as_ref()
    }

    /// Number of commits delivered so far.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// Open the dialog on a snapshot of the log.
    ///
    /// Opening while already reviewing refreshes the snapshot.
    pub fn open(&mut self, log: &ChangeLog) -> &ReviewView {
        debug!(changes = log.len(), "opening mapping review");
        self.state = FlowState::Reviewing;
        self.view.insert(ReviewView::new(log.snapshot()))
    }

    /// Close the dialog without changing anything. Returns false if idle.
    pub fn cancel(&mut self) -> bool {
        if !self.is_reviewing() {
            return false;
        }
        debug!("mapping review cancelled");
        self.close();
        true
    }

    /// Deliver the log to `sink`, clear it, and close the dialog.
    ///
    /// Does nothing and returns `None` when no review is open.
    pub fn commit(
        &mut self,
        log: &mut ChangeLog,
        sink: &mut dyn CommitSink,
    ) -> Option<CommitReceipt> {
        if !self.is_reviewing() {
            debug!("commit ignored: no review open");
            return None;
        }
        self.commits += 1;
        let batch = CommitBatch {
            sequence: self.commits,
            changes: log.snapshot(),
        };
        let delivered = batch.changes.len();
        sink.deliver(batch);
        log.clear();
        self.close();

        info!(commit = self.commits, delivered, "mapping changes committed");
        Some(CommitReceipt {
            sequence: self.commits,
            delivered,
        })
    }

    fn close(&mut self) {
        self.state = FlowState::Idle;
        self.view = None;
    }
}
