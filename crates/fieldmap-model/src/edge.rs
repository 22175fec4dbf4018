use serde::{Deserialize, Serialize};

use crate::ids::{EdgeId, FieldId};

/// Where an edge came from.
///
/// Renderers draw seeded edges as settled mappings and drawn edges as
/// pending ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeOrigin {
    /// Present when the session started.
    #[default]
    Seeded,
    /// Created by a connect gesture during this session.
    Drawn,
}

/// A directed connection from a source field to a target field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: FieldId,
    pub target: FieldId,
    #[serde(default)]
    pub origin: EdgeOrigin,
}

impl Edge {
    /// A seeded edge, as supplied at session start.
    pub fn seeded(
        id: impl Into<EdgeId>,
        source: impl Into<FieldId>,
        target: impl Into<FieldId>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            origin: EdgeOrigin::Seeded,
        }
    }

    /// An edge created by a connect gesture.
    pub fn drawn(id: EdgeId, source: FieldId, target: FieldId) -> Self {
        Self {
            id,
            source,
            target,
            origin: EdgeOrigin::Drawn,
        }
    }
}
