//! Error types for building mapping models.

use thiserror::Error;

use crate::field::FieldSide;

/// Errors raised while assembling a registry or seeding an edge set.
///
/// Runtime gestures (connect, disconnect) never produce these; only the
/// construction of a session from its inputs is validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A field was declared with an empty id.
    #[error("{side} field '{name}' has an empty id")]
    EmptyFieldId { side: FieldSide, name: String },

    /// Two fields on the same side share an id.
    #[error("duplicate {side} field id: {id}")]
    DuplicateField { side: FieldSide, id: String },

    /// Two seeded edges share an id.
    #[error("duplicate edge id: {id}")]
    DuplicateEdge { id: String },

    /// Two seeded edges leave the same source field.
    #[error("source '{source_id}' has more than one outgoing edge ({first}, {second})")]
    FanOut {
        source_id: String,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
