use crate::Inquiry;

use serde_json::json;

#[test]
fn test_from_fields_trims_required_fields() {
    let inquiry = Inquiry::from_fields(" Jane ", " jane@x.com", "Hi\n", "");

    assert_eq!(inquiry.name, "Jane");
    assert_eq!(inquiry.email, "jane@x.com");
    assert_eq!(inquiry.message, "Hi");
}

#[test]
fn test_blank_phone_is_absent() {
    let inquiry = Inquiry::from_fields("Jane", "jane@x.com", "Hi", "   ");
    assert!(inquiry.phone.is_none());

    let body = serde_json::to_value(&inquiry).unwrap();
    assert!(body.get("phone").is_none());
    assert_eq!(
        body,
        json!({"name": "Jane", "email": "jane@x.com", "message": "Hi"})
    );
}

#[test]
fn test_phone_kept_when_present() {
    let inquiry = Inquiry::from_fields("Jane", "jane@x.com", "Hi", " +1 (555) 123-4567 ");
    assert_eq!(inquiry.phone.as_deref(), Some("+1 (555) 123-4567"));

    let body = serde_json::to_value(&inquiry).unwrap();
    assert_eq!(body["phone"], "+1 (555) 123-4567");
}
