#![deny(unsafe_code)]

use std::fmt;

/// Identifier of a source or target field.
///
/// Ids are opaque: anything raised by the diagram is accepted, including ids
/// that match no registered field.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FieldId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of an edge in the mapping diagram (`edge-1`, `edge-2`, ...).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    /// Prefix used for synthesized edge ids.
    pub const PREFIX: &'static str = "edge-";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build the canonical id for the given sequence number.
    pub fn numbered(n: u64) -> Self {
        Self(format!("{}{n}", Self::PREFIX))
    }

    /// Sequence number of a canonical `edge-N` id, if this is one.
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EdgeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_edge_ids_round_trip_their_sequence() {
        let id = EdgeId::numbered(12);
        assert_eq!(id.as_str(), "edge-12");
        assert_eq!(id.sequence(), Some(12));
    }

    #[test]
    fn non_canonical_edge_ids_have_no_sequence() {
        assert_eq!(EdgeId::from("edge-x").sequence(), None);
        assert_eq!(EdgeId::from("e1").sequence(), None);
        assert_eq!(EdgeId::from("edge-").sequence(), None);
    }
}
