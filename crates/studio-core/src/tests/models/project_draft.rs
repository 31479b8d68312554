use crate::{CoreError, ProjectDraft};

use serde_json::json;

fn draft() -> ProjectDraft {
    ProjectDraft {
        title: "Courtyard House".to_string(),
        location: "Scottsdale, AZ".to_string(),
        year: "2021".to_string(),
        tags: "Residential, Passive Design".to_string(),
        image_url: String::new(),
        description: String::new(),
    }
}

#[test]
fn test_empty_title_is_rejected() {
    let mut d = draft();
    d.title = "   ".to_string();

    let result = d.to_new_project();
    assert!(matches!(result, Err(CoreError::MissingTitle { .. })));
    assert_eq!(
        result.unwrap_err().user_message(),
        "Please provide a project title."
    );
}

#[test]
fn test_normalization_splits_tags_and_drops_blanks() {
    let mut d = draft();
    d.tags = "Residential, Timber, , Minimal".to_string();

    let record = d.to_new_project().unwrap();
    assert_eq!(record.tags, vec!["Residential", "Timber", "Minimal"]);
}

#[test]
fn test_blank_optionals_omitted_from_body() {
    let record = draft().to_new_project().unwrap();

    let body = serde_json::to_value(&record).unwrap();
    assert_eq!(
        body,
        json!({
            "title": "Courtyard House",
            "location": "Scottsdale, AZ",
            "year": "2021",
            "tags": ["Residential", "Passive Design"]
        })
    );
}

#[test]
fn test_clear_resets_every_field() {
    let mut d = draft();
    d.clear();
    assert_eq!(d, ProjectDraft::default());
}
