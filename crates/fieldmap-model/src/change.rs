//! Change records kept in the mapping audit log.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of mapping change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Add,
    Remove,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Add => "add",
            ChangeKind::Remove => "remove",
        }
    }

    /// Verb shown in the review dialog.
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Add => "Added",
            ChangeKind::Remove => "Removed",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One connect or disconnect intent, recorded with field display names.
///
/// Names are resolved when the record is created, so a record stays readable
/// even if it outlives the edge it describes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub source_name: String,
    pub target_name: String,
}

impl ChangeRecord {
    pub fn new(
        kind: ChangeKind,
        source_name: impl Into<String>,
        target_name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            source_name: source_name.into(),
            target_name: target_name.into(),
        }
    }

    pub fn added(source_name: impl Into<String>, target_name: impl Into<String>) -> Self {
        Self::new(ChangeKind::Add, source_name, target_name)
    }

    pub fn removed(source_name: impl Into<String>, target_name: impl Into<String>) -> Self {
        Self::new(ChangeKind::Remove, source_name, target_name)
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} mapping: {} → {}",
            self.kind.label(),
            self.source_name,
            self.target_name
        )
    }
}
