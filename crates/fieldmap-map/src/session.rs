//! Session scope tying the registry, engine, change log and review gate together.
//!
//! This is the surface a diagram renderer talks to: it raises
//! [`MappingSession::on_connect`] and [`MappingSession::on_edges_delete`] for
//! user gestures, redraws from [`MappingSession::edges`] whenever
//! [`MappingSession::revision`] moves, and shows the review dialog while
//! [`MappingSession::flow_state`] is `Reviewing`.

use fieldmap_model::{Edge, EdgeId, FieldId, FieldRegistry, MappingFixture, ModelError};
use tracing::{info_span, warn};

use crate::engine::MappingEngine;
use crate::log::ChangeLog;
use crate::review::{CommitReceipt, ConfirmationFlow, FlowState, ReviewView};
use crate::sink::CommitSink;

/// One mapping review session.
#[derive(Debug, Clone)]
pub struct MappingSession {
    registry: FieldRegistry,
    engine: MappingEngine,
    log: ChangeLog,
    flow: ConfirmationFlow,
}

impl MappingSession {
    /// Start a session from a registry and the edges it begins with.
    pub fn new(registry: FieldRegistry, edges: Vec<Edge>) -> Result<Self, ModelError> {
        Ok(Self {
            registry,
            engine: MappingEngine::with_edges(edges)?,
            log: ChangeLog::new(),
            flow: ConfirmationFlow::new(),
        })
    }

    pub fn from_fixture(fixture: &MappingFixture) -> Result<Self, ModelError> {
        Self::new(fixture.registry()?, fixture.edges.clone())
    }

    /// Connect gesture. Returns the new edge id.
    ///
    /// Ignored (returns `None`) while the review dialog is open.
    pub fn on_connect(
        &mut self,
        source: impl Into<FieldId>,
        target: impl Into<FieldId>,
    ) -> Option<EdgeId> {
        let (source, target) = (source.into(), target.into());
        let _span = info_span!("connect", source = %source, target = %target).entered();
        if self.flow.is_reviewing() {
            warn!("connect ignored while reviewing changes");
            return None;
        }
        let connection = self.engine.connect(&self.registry, source, target);
        self.log.append(connection.record);
        Some(connection.edge.id)
    }

    /// Delete gesture for one or more edges. Returns how many were removed.
    ///
    /// Ignored (returns 0) while the review dialog is open.
    pub fn on_edges_delete<I, T>(&mut self, edge_ids: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Into<EdgeId>,
    {
        let _span = info_span!("edges_delete").entered();
        if self.flow.is_reviewing() {
            warn!("edge delete ignored while reviewing changes");
            return 0;
        }
        let removed = self
            .engine
            .disconnect(&self.registry, edge_ids.into_iter().map(Into::into));
        let count = removed.len();
        self.log
            .extend(removed.into_iter().map(|disconnection| disconnection.record));
        count
    }

    /// Open the review dialog.
    pub fn open_review(&mut self) -> &ReviewView {
        self.flow.open(&self.log)
    }

    /// Close the review dialog without committing.
    pub fn cancel_review(&mut self) -> bool {
        self.flow.cancel()
    }

    /// Commit the reviewed changes to `sink` and clear the log.
    pub fn commit_review(&mut self, sink: &mut dyn CommitSink) -> Option<CommitReceipt> {
        self.flow.commit(&mut self.log, sink)
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &MappingEngine {
        &self.engine
    }

    /// Current edges in display order.
    pub fn edges(&self) -> &[Edge] {
        self.engine.edges()
    }

    pub fn change_log(&self) -> &ChangeLog {
        &self.log
    }

    pub fn flow_state(&self) -> FlowState {
        self.flow.state()
    }

    /// The open review dialog, if any.
    pub fn review(&self) -> Option<&ReviewView> {
        self.flow.view()
    }

    /// Edge-set revision; changes after every effective mutation.
    pub fn revision(&self) -> u64 {
        self.engine.revision()
    }
}
