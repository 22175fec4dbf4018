//! Source and target field definitions and the registry that resolves them.
//!
//! The registry is built once per session and never changes afterwards. Its
//! main job is turning field ids into the display names recorded in the
//! change log.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::FieldId;

/// Which column of the diagram a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSide {
    Source,
    Target,
}

impl FieldSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSide::Source => "source",
            FieldSide::Target => "target",
        }
    }
}

impl fmt::Display for FieldSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, typed attribute of the source or target schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Unique id within its side (e.g. `source-1`).
    pub id: FieldId,
    /// Display name (e.g. `source_system`).
    pub name: String,
    /// Declared type as written in the schema (e.g. `varchar(100)`).
    #[serde(rename = "type")]
    pub data_type: String,
}

impl Field {
    pub fn new(
        id: impl Into<FieldId>,
        name: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// Immutable source and target field lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRegistry {
    source: Vec<Field>,
    target: Vec<Field>,
}

impl FieldRegistry {
    /// Build a registry, rejecting empty ids and ids repeated within a side.
    ///
    /// The same id may appear once on each side; lookups prefer the source
    /// side in that case.
    pub fn new(source: Vec<Field>, target: Vec<Field>) -> Result<Self> {
        check_side(FieldSide::Source, &source)?;
        check_side(FieldSide::Target, &target)?;
        Ok(Self { source, target })
    }

    pub fn source_fields(&self) -> &[Field] {
        &self.source
    }

    pub fn target_fields(&self) -> &[Field] {
        &self.target
    }

    /// Fields of one side, in declaration order.
    pub fn fields(&self, side: FieldSide) -> &[Field] {
        match side {
            FieldSide::Source => &self.source,
            FieldSide::Target => &self.target,
        }
    }

    /// Look up a field on either side.
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.source
            .iter()
            .chain(self.target.iter())
            .find(|field| &field.id == id)
    }

    /// Which side a field id belongs to.
    pub fn side_of(&self, id: &FieldId) -> Option<FieldSide> {
        if self.source.iter().any(|field| &field.id == id) {
            Some(FieldSide::Source)
        } else if self.target.iter().any(|field| &field.id == id) {
            Some(FieldSide::Target)
        } else {
            None
        }
    }

    /// Display name for a field id.
    ///
    /// Unknown ids resolve to themselves so a raw id is shown instead of
    /// failing.
    pub fn field_name<'a>(&'a self, id: &'a FieldId) -> &'a str {
        self.field(id).map_or(id.as_str(), |field| field.name.as_str())
    }

    /// Total number of fields across both sides.
    pub fn len(&self) -> usize {
        self.source.len() + self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.target.is_empty()
    }
}

fn check_side(side: FieldSide, fields: &[Field]) -> Result<()> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.id.as_str().trim().is_empty() {
            return Err(ModelError::EmptyFieldId {
                side,
                name: field.name.clone(),
            });
        }
        if !seen.insert(&field.id) {
            return Err(ModelError::DuplicateField {
                side,
                id: field.id.to_string(),
            });
        }
    }
    Ok(())
}
