//! Mapping engine: the current edge set and the gestures that mutate it.
//!
//! The engine enforces a single outgoing edge per source field. Connecting a
//! source that already has an edge silently replaces that edge; fan-in on a
//! target is unrestricted. Neither gesture can fail: unknown field ids are
//! applied literally and missing edge ids are ignored.

use std::collections::{HashMap, HashSet};

use fieldmap_model::{ChangeRecord, Edge, EdgeId, FieldId, FieldRegistry, ModelError};
use tracing::debug;

/// Result of a connect gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// The edge that was inserted.
    pub edge: Edge,
    /// The previous edge from the same source, if one was evicted.
    ///
    /// Eviction is not a logged change; only `record` is.
    pub replaced: Option<Edge>,
    /// The `add` record for the change log.
    pub record: ChangeRecord,
}

/// One edge removed by a disconnect gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disconnection {
    pub edge: Edge,
    /// The `remove` record for the change log.
    pub record: ChangeRecord,
}

/// Owns the edge set of a mapping session.
#[derive(Debug, Clone)]
pub struct MappingEngine {
    /// Edges in display order.
    edges: Vec<Edge>,
    /// Source field id -> id of its single outgoing edge.
    by_source: HashMap<FieldId, EdgeId>,
    /// Next sequence number for synthesized `edge-N` ids.
    next_sequence: u64,
    /// Bumped on every effective mutation so renderers know to redraw.
    revision: u64,
}

impl MappingEngine {
    /// An engine with no edges.
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            by_source: HashMap::new(),
            next_sequence: 1,
            revision: 0,
        }
    }

    /// Seed the engine with the edges present at session start.
    ///
    /// Seeds must already satisfy the edge-set invariants: unique edge ids
    /// and at most one edge per source.
    pub fn with_edges(edges: Vec<Edge>) -> Result<Self, ModelError> {
        let mut ids = HashSet::new();
        let mut by_source: HashMap<FieldId, EdgeId> = HashMap::new();
        for edge in &edges {
            if !ids.insert(edge.id.clone()) {
                return Err(ModelError::DuplicateEdge {
                    id: edge.id.to_string(),
                });
            }
            if let Some(first) = by_source.insert(edge.source.clone(), edge.id.clone()) {
                return Err(ModelError::FanOut {
                    source_id: edge.source.to_string(),
                    first: first.to_string(),
                    second: edge.id.to_string(),
                });
            }
        }

        let highest = edges
            .iter()
            .filter_map(|edge| edge.id.sequence())
            .max()
            .unwrap_or(0);
        let next_sequence = highest
            .max(edges.len() as u64)
            .checked_add(1)
            .unwrap_or(1);

        debug!(edges = edges.len(), next_sequence, "seeded mapping engine");
        Ok(Self {
            edges,
            by_source,
            next_sequence,
            revision: 0,
        })
    }

    /// Connect `source` to `target`, replacing any edge already leaving `source`.
    ///
    /// Always succeeds. Self-loops and repeats of an existing pair are
    /// accepted and still produce an `add` record.
    pub fn connect(
        &mut self,
        registry: &FieldRegistry,
        source: FieldId,
        target: FieldId,
    ) -> Connection {
        let id = self.allocate_id();
        let replaced = self
            .by_source
            .get(&source)
            .cloned()
            .and_then(|prior| self.take_edge(&prior));

        let record = ChangeRecord::added(
            registry.field_name(&source),
            registry.field_name(&target),
        );
        let edge = Edge::drawn(id, source, target);
        self.by_source.insert(edge.source.clone(), edge.id.clone());
        self.edges.push(edge.clone());
        self.revision += 1;

        debug!(
            edge = %edge.id,
            source = %edge.source,
            target = %edge.target,
            replaced = replaced.as_ref().map(|e| e.id.as_str()),
            "connected"
        );
        Connection {
            edge,
            replaced,
            record,
        }
    }

    /// Remove every listed edge that is present, in input order.
    ///
    /// Ids not in the set are skipped without a record. Names are resolved
    /// at removal time.
    pub fn disconnect<I>(&mut self, registry: &FieldRegistry, edge_ids: I) -> Vec<Disconnection>
    where
        I: IntoIterator<Item = EdgeId>,
    {
        let mut removed = Vec::new();
        for id in edge_ids {
            let Some(edge) = self.take_edge(&id) else {
                debug!(edge = %id, "disconnect ignored unknown edge");
                continue;
            };
            let record = ChangeRecord::removed(
                registry.field_name(&edge.source),
                registry.field_name(&edge.target),
            );
            debug!(
                edge = %edge.id,
                source = %edge.source,
                target = %edge.target,
                "disconnected"
            );
            removed.push(Disconnection { edge, record });
        }
        if !removed.is_empty() {
            self.revision += 1;
        }
        removed
    }

    /// Current edges in display order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| &edge.id == id)
    }

    /// The single outgoing edge of a source field.
    pub fn edge_from(&self, source: &FieldId) -> Option<&Edge> {
        self.by_source.get(source).and_then(|id| self.edge(id))
    }

    /// All edges pointing at a target field.
    pub fn edges_into<'a>(&'a self, target: &'a FieldId) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |edge| &edge.target == target)
    }

    pub fn contains(&self, id: &EdgeId) -> bool {
        self.edge(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Counter that changes whenever the edge set does.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Next free `edge-N` id. The counter wraps to 1 past `u64::MAX`, so
    /// candidates are checked against the live edge set.
    fn allocate_id(&mut self) -> EdgeId {
        loop {
            let id = EdgeId::numbered(self.next_sequence);
            self.next_sequence = self.next_sequence.checked_add(1).unwrap_or(1);
            if !self.contains(&id) {
                return id;
            }
        }
    }

    fn take_edge(&mut self, id: &EdgeId) -> Option<Edge> {
        let index = self.edges.iter().position(|edge| &edge.id == id)?;
        let edge = self.edges.remove(index);
        if self.by_source.get(&edge.source) == Some(&edge.id) {
            self.by_source.remove(&edge.source);
        }
        Some(edge)
    }
}

impl Default for MappingEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use fieldmap_model::{ChangeKind, EdgeOrigin, Field};

    use super::*;

    fn registry() -> FieldRegistry {
        FieldRegistry::new(
            vec![
                Field::new("s1", "phone", "text"),
                Field::new("s2", "cell", "text"),
            ],
            vec![
                Field::new("t1", "business_phone_primary", "varchar(100)"),
                Field::new("t2", "business_phone_mobile", "text"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn new_engine_allocates_from_edge_1() {
        let mut engine = MappingEngine::new();
        let connection = engine.connect(&registry(), "s1".into(), "t1".into());
        assert_eq!(connection.edge.id.as_str(), "edge-1");
        assert_eq!(connection.edge.origin, EdgeOrigin::Drawn);
        assert_eq!(connection.replaced, None);
        assert_eq!(engine.revision(), 1);
    }

    #[test]
    fn seeding_rejects_fan_out() {
        let err = MappingEngine::with_edges(vec![
            Edge::seeded("edge-1", "s1", "t1"),
            Edge::seeded("edge-2", "s1", "t2"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::FanOut {
                source_id: "s1".to_string(),
                first: "edge-1".to_string(),
                second: "edge-2".to_string(),
            }
        );
    }

    #[test]
    fn seeding_rejects_duplicate_edge_ids() {
        let err = MappingEngine::with_edges(vec![
            Edge::seeded("edge-1", "s1", "t1"),
            Edge::seeded("edge-1", "s2", "t2"),
        ])
        .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateEdge { .. }));
    }

    #[test]
    fn synthesized_ids_skip_past_seeded_ones() {
        let mut engine = MappingEngine::with_edges(vec![
            Edge::seeded("edge-7", "s1", "t1"),
            Edge::seeded("custom", "s2", "t2"),
        ])
        .unwrap();
        let connection = engine.connect(&registry(), "s1".into(), "t2".into());
        assert_eq!(connection.edge.id.as_str(), "edge-8");
    }

    #[test]
    fn synthesized_ids_never_reuse_removed_ones() {
        let registry = registry();
        let mut engine = MappingEngine::new();
        let first = engine.connect(&registry, "s1".into(), "t1".into()).edge.id;
        engine.disconnect(&registry, [first.clone()]);
        let second = engine.connect(&registry, "s2".into(), "t1".into()).edge.id;
        assert_ne!(first, second);
    }

    #[test]
    fn seed_at_u64_max_wraps_to_free_ids() {
        let registry = registry();
        let mut engine = MappingEngine::with_edges(vec![
            Edge::seeded("edge-18446744073709551615", "s1", "t1"),
            Edge::seeded("edge-1", "s2", "t2"),
        ])
        .unwrap();
        let first = engine.connect(&registry, "s3".into(), "t1".into()).edge.id;
        let second = engine.connect(&registry, "s4".into(), "t1".into()).edge.id;
        assert_eq!(first.as_str(), "edge-2");
        assert_eq!(second.as_str(), "edge-3");
        assert_eq!(engine.len(), 4);
    }

    #[test]
    fn counter_reaching_u64_max_keeps_ids_unique() {
        let registry = registry();
        let mut engine = MappingEngine::with_edges(vec![
            Edge::seeded("edge-18446744073709551614", "s1", "t1"),
            Edge::seeded("edge-1", "s2", "t2"),
        ])
        .unwrap();
        let first = engine.connect(&registry, "s3".into(), "t1".into()).edge.id;
        let second = engine.connect(&registry, "s4".into(), "t2".into()).edge.id;
        assert_eq!(first.as_str(), "edge-18446744073709551615");
        assert_eq!(second.as_str(), "edge-2");

        let mut ids: Vec<&str> = engine.edges().iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), engine.len());
    }

    #[test]
    fn fan_in_is_allowed() {
        let registry = registry();
        let mut engine = MappingEngine::new();
        engine.connect(&registry, "s1".into(), "t1".into());
        engine.connect(&registry, "s2".into(), "t1".into());
        let target = FieldId::from("t1");
        assert_eq!(engine.edges_into(&target).count(), 2);
    }

    #[test]
    fn self_loop_is_accepted_and_recorded() {
        let mut engine = MappingEngine::new();
        let connection = engine.connect(&registry(), "s1".into(), "s1".into());
        assert_eq!(connection.record, ChangeRecord::added("phone", "phone"));
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn unknown_ids_are_applied_literally() {
        let mut engine = MappingEngine::new();
        let connection = engine.connect(&registry(), "ghost".into(), "t2".into());
        assert_eq!(
            connection.record,
            ChangeRecord::added("ghost", "business_phone_mobile")
        );
        assert!(engine.edge_from(&"ghost".into()).is_some());
    }

    #[test]
    fn duplicate_id_in_one_batch_is_removed_once() {
        let registry = registry();
        let mut engine = MappingEngine::new();
        let id = engine.connect(&registry, "s1".into(), "t1".into()).edge.id;
        let removed = engine.disconnect(&registry, [id.clone(), id]);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].record.kind, ChangeKind::Remove);
        assert!(engine.is_empty());
    }

    #[test]
    fn empty_disconnect_leaves_revision_unchanged() {
        let registry = registry();
        let mut engine = MappingEngine::new();
        engine.connect(&registry, "s1".into(), "t1".into());
        let before = engine.revision();
        assert!(engine.disconnect(&registry, [EdgeId::from("nope")]).is_empty());
        assert_eq!(engine.revision(), before);
    }
}
