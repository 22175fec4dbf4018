//! Tests for fieldmap-model types.

use fieldmap_model::{
    ChangeKind, ChangeRecord, Edge, EdgeOrigin, FieldSide, MappingFixture, ModelError,
};

#[test]
fn demo_fixture_builds_a_registry() {
    let fixture = MappingFixture::demo();
    let registry = fixture.registry().expect("demo registry");

    assert_eq!(registry.source_fields().len(), 10);
    assert_eq!(registry.target_fields().len(), 10);
    assert_eq!(registry.field_name(&"source-1".into()), "source_system");
    assert_eq!(registry.field_name(&"target-2".into()), "entity_type");
    assert_eq!(registry.side_of(&"target-9".into()), Some(FieldSide::Target));
    assert_eq!(fixture.edges.len(), 3);
}

#[test]
fn fixture_parses_from_json() {
    let json = r#"{
        "source_fields": [
            { "id": "s1", "name": "phone", "type": "text" }
        ],
        "target_fields": [
            { "id": "t1", "name": "business_phone_primary", "type": "varchar(100)" }
        ],
        "edges": [
            { "id": "edge-1", "source": "s1", "target": "t1" }
        ]
    }"#;
    let fixture: MappingFixture = serde_json::from_str(json).expect("parse fixture");

    assert_eq!(fixture.source_fields[0].data_type, "text");
    assert_eq!(fixture.edges[0], Edge::seeded("edge-1", "s1", "t1"));
    assert_eq!(fixture.edges[0].origin, EdgeOrigin::Seeded);
}

#[test]
fn fixture_edges_default_to_empty() {
    let json = r#"{ "source_fields": [], "target_fields": [] }"#;
    let fixture: MappingFixture = serde_json::from_str(json).expect("parse fixture");
    assert!(fixture.edges.is_empty());
}

#[test]
fn fixture_with_duplicate_target_ids_is_rejected() {
    let json = r#"{
        "source_fields": [],
        "target_fields": [
            { "id": "t1", "name": "a", "type": "text" },
            { "id": "t1", "name": "b", "type": "text" }
        ]
    }"#;
    let fixture: MappingFixture = serde_json::from_str(json).expect("parse fixture");
    let err = fixture.registry().unwrap_err();
    assert!(matches!(
        err,
        ModelError::DuplicateField {
            side: FieldSide::Target,
            ..
        }
    ));
}

#[test]
fn change_record_serializes_with_lowercase_kind() {
    let record = ChangeRecord::added("source_system", "entity_type");
    let json = serde_json::to_value(&record).expect("serialize record");

    assert_eq!(json["kind"], "add");
    assert_eq!(json["source_name"], "source_system");
    assert_eq!(json["target_name"], "entity_type");

    let back: ChangeRecord = serde_json::from_value(json).expect("deserialize record");
    assert_eq!(back.kind, ChangeKind::Add);
}
