//! Data model for reviewing a source-to-target field mapping.
//!
//! - [`field`]: fields, sides, and the id → name registry
//! - [`edge`]: directed source → target connections
//! - [`change`]: audit records of connect/disconnect intents
//! - [`fixture`]: serializable session inputs

pub mod change;
pub mod edge;
pub mod error;
pub mod field;
pub mod fixture;
pub mod ids;

pub use change::{ChangeKind, ChangeRecord};
pub use edge::{Edge, EdgeOrigin};
pub use error::{ModelError, Result};
pub use field::{Field, FieldRegistry, FieldSide};
pub use fixture::MappingFixture;
pub use ids::{EdgeId, FieldId};
