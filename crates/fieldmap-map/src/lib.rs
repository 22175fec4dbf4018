//! Mapping-edge state machine for reviewing a source-to-target field mapping.
//!
//! - [`engine`]: the edge set, connect and disconnect
//! - [`log`]: the change log accumulated between commits
//! - [`review`]: the open → commit/cancel confirmation flow
//! - [`sink`]: receivers for committed change batches
//! - [`session`]: one session wiring the above to a field registry

pub mod engine;
pub mod log;
pub mod review;
pub mod session;
pub mod sink;

pub use engine::{Connection, Disconnection, MappingEngine};
pub use log::{ChangeLog, ChangeSummary};
pub use review::{CommitReceipt, ConfirmationFlow, FlowState, ReviewView};
pub use session::MappingSession;
pub use sink::{CollectingSink, CommitBatch, CommitSink, LoggingSink};
