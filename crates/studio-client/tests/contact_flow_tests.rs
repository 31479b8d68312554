//! Integration tests for the contact submission flow using a wiremock backend

use studio_client::{
    Client, ContactForm, ContactStatus, NOT_CONFIGURED_MESSAGE, SEND_FAILED_MESSAGE,
};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.name = "Jane".to_string();
    form.email = "jane@x.com".to_string();
    form.message = "Hi".to_string();
    form
}

#[tokio::test]
async fn test_valid_submission_posts_once_without_phone_key() {
    let mock_server = MockServer::start().await;

    // Exact body: the three required fields and no phone key when the
    // phone field was left blank.
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .and(body_json(json!({
            "name": "Jane",
            "email": "jane@x.com",
            "message": "Hi"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let mut form = filled_form();
    form.submit(Some(&client)).await;

    assert_eq!(*form.status(), ContactStatus::Sent);
    assert!(form.status().message().is_some());

    // Success clears every draft field.
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.message.is_empty());
    assert!(form.phone.is_empty());
}

#[tokio::test]
async fn test_phone_included_when_present() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .and(body_json(json!({
            "name": "Jane",
            "email": "jane@x.com",
            "message": "Hi",
            "phone": "+1 (555) 123-4567"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let mut form = filled_form();
    form.phone = " +1 (555) 123-4567 ".to_string();
    form.submit(Some(&client)).await;

    assert_eq!(*form.status(), ContactStatus::Sent);
}

#[tokio::test]
async fn test_empty_fields_rejected_without_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());

    for (name, email, message) in [
        ("", "jane@x.com", "Hi"),
        ("Jane", "   ", "Hi"),
        ("Jane", "jane@x.com", "\t\n"),
    ] {
        let mut form = ContactForm::new();
        form.name = name.to_string();
        form.email = email.to_string();
        form.message = message.to_string();
        form.submit(Some(&client)).await;

        assert_eq!(
            form.status().message(),
            Some("Please fill in all fields."),
            "expected rejection for {:?}",
            (name, email, message)
        );
    }
}

#[tokio::test]
async fn test_bad_email_shape_rejected_without_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());

    for email in ["abc", "a@b", "jane@x"] {
        let mut form = filled_form();
        form.email = email.to_string();
        form.submit(Some(&client)).await;

        assert_eq!(
            form.status().message(),
            Some("Please enter a valid email address."),
            "expected rejection for {:?}",
            email
        );
    }
}

#[tokio::test]
async fn test_missing_backend_fails_closed() {
    let mut form = filled_form();
    form.submit(None).await;

    assert_eq!(
        *form.status(),
        ContactStatus::Failed {
            message: NOT_CONFIGURED_MESSAGE.to_string()
        }
    );
    // The draft is preserved for a later retry.
    assert_eq!(form.name, "Jane");
}

#[tokio::test]
async fn test_server_error_yields_generic_message_and_keeps_draft() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let mut form = filled_form();
    form.submit(Some(&client)).await;

    assert_eq!(
        *form.status(),
        ContactStatus::Failed {
            message: SEND_FAILED_MESSAGE.to_string()
        }
    );
    assert_eq!(form.name, "Jane");
    assert_eq!(form.message, "Hi");
}

#[tokio::test]
async fn test_transport_failure_yields_generic_message() {
    // Nothing listens here.
    let client = Client::new("http://127.0.0.1:9");

    let mut form = filled_form();
    form.submit(Some(&client)).await;

    assert_eq!(
        *form.status(),
        ContactStatus::Failed {
            message: SEND_FAILED_MESSAGE.to_string()
        }
    );
}

#[tokio::test]
async fn test_retrigger_after_failure_revalidates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());

    let mut form = ContactForm::new();
    form.submit(Some(&client)).await;
    assert_eq!(form.status().message(), Some("Please fill in all fields."));

    // Fix the draft and re-trigger: the old message is replaced and the
    // submission goes out.
    form.name = "Jane".to_string();
    form.email = "jane@x.com".to_string();
    form.message = "Hi".to_string();
    form.submit(Some(&client)).await;

    assert_eq!(*form.status(), ContactStatus::Sent);
}
