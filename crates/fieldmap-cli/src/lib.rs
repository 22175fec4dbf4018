//! Library components of the `fieldmap` CLI.

pub mod logging;
pub mod script;
