use crate::Project;

use serde_json::json;

#[test]
fn test_deserialize_full_record() {
    let project: Project = serde_json::from_value(json!({
        "id": "p-1",
        "title": "Horizon Residence",
        "location": "Los Angeles, CA",
        "year": "2024",
        "tags": ["Residential", "Concrete", "Glass"],
        "image_url": "https://cdn.example.com/horizon.jpg",
        "description": "Hillside home in board-formed concrete."
    }))
    .unwrap();

    assert_eq!(project.id, "p-1");
    assert_eq!(project.title, "Horizon Residence");
    assert_eq!(project.tags.len(), 3);
    assert!(project.has_tags());
}

#[test]
fn test_missing_tags_defaults_to_empty() {
    let project: Project = serde_json::from_value(json!({
        "id": "p-2",
        "title": "Atrium Offices"
    }))
    .unwrap();

    assert!(project.tags.is_empty());
    assert!(!project.has_tags());
    assert!(project.location.is_none());
    assert!(project.year.is_none());
}

#[test]
fn test_serialize_omits_absent_optionals() {
    let project: Project = serde_json::from_value(json!({
        "id": "p-3",
        "title": "Gallery Annex"
    }))
    .unwrap();

    let body = serde_json::to_value(&project).unwrap();
    assert_eq!(body, json!({"id": "p-3", "title": "Gallery Annex", "tags": []}));
}
