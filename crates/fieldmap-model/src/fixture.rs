//! Session inputs: the two field lists plus the seeded edges.
//!
//! Fixtures are plain serde types so callers can load them from JSON:
//!
//! ```json
//! {
//!   "source_fields": [{ "id": "source-1", "name": "source_system", "type": "text" }],
//!   "target_fields": [{ "id": "target-9", "name": "source_system", "type": "text" }],
//!   "edges": [{ "id": "edge-1", "source": "source-1", "target": "target-9" }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::error::Result;
use crate::field::{Field, FieldRegistry};

/// Everything needed to start a mapping session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingFixture {
    pub source_fields: Vec<Field>,
    pub target_fields: Vec<Field>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl MappingFixture {
    /// Validate the field lists and build the registry.
    pub fn registry(&self) -> Result<FieldRegistry> {
        FieldRegistry::new(self.source_fields.clone(), self.target_fields.clone())
    }

    /// Built-in customer schema used by the CLI when no fixture is given.
    pub fn demo() -> Self {
        let source_fields = vec![
            Field::new("source-1", "source_system", "text"),
            Field::new("source-2", "Brand", "varchar"),
            Field::new("source-3", "source_system_id", "integer"),
            Field::new("source-4", "deluxe_pickup_date", "text"),
            Field::new("source-5", "customer_prospect_ind", "varchar"),
            Field::new("source-6", "business_name", "text"),
            Field::new("source-7", "phone", "text"),
            Field::new("source-8", "cell", "text"),
            Field::new("source-9", "business_type", "text"),
            Field::new("source-10", "lob_cd", "text"),
        ];
        let target_fields = vec![
            Field::new("target-1", "cust_id", "text"),
            Field::new("target-2", "entity_type", "varchar(100)"),
            Field::new("target-3", "business_name_dba", "integer"),
            Field::new("target-4", "business_name_legal_name", "varchar(100)"),
            Field::new("target-5", "business_name_alternative", "array"),
            Field::new("target-6", "business_phone_primary", "varchar(100)"),
            Field::new("target-7", "business_phone_secondary", "varchar(100)"),
            Field::new("target-8", "business_phone_mobile", "text"),
            Field::new("target-9", "source_system", "text"),
            Field::new("target-10", "business_phone_mobile", "text"),
        ];
        let edges = vec![
            Edge::seeded("edge-1", "source-1", "target-9"),
            Edge::seeded("edge-2", "source-2", "target-4"),
            Edge::seeded("edge-3", "source-5", "target-1"),
        ];
        Self {
            source_fields,
            target_fields,
            edges,
        }
    }
}
