use super::*;
use crate::state::contact::{ContactFields, template_params};

fn params() -> TemplateParams {
    let fields = ContactFields {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello".to_owned(),
        ..ContactFields::default()
    };
    template_params(&fields, "owner@example.com")
}

#[test]
fn send_request_serializes_emailjs_shape() {
    let config = RelayConfig::default();
    let params = params();
    let body = serde_json::to_value(send_request(&config, &params)).unwrap_or_default();

    assert_eq!(body["service_id"], "service_ohlluu");
    assert_eq!(body["template_id"], "template_ohlluu");
    assert_eq!(body["user_id"], "YOUR_PUBLIC_KEY");
    assert_eq!(body["template_params"]["from_name"], "Ada");
    assert_eq!(body["template_params"]["company"], "Not specified");
    assert_eq!(body["template_params"]["to_email"], "owner@example.com");
}

#[test]
fn classify_response_accepts_2xx() {
    assert_eq!(
        classify_response(200, "OK".to_owned()),
        Ok(RelayResponse { status: 200, text: "OK".to_owned() })
    );
}

#[test]
fn classify_response_rejects_other_statuses() {
    assert_eq!(
        classify_response(400, "The user ID is invalid".to_owned()),
        Err(RelayError::Status { status: 400, text: "The user ID is invalid".to_owned() })
    );
}

#[test]
fn relay_error_messages_are_readable() {
    assert_eq!(RelayError::Transport("offline".to_owned()).to_string(), "relay request failed: offline");
    assert_eq!(
        RelayError::Status { status: 500, text: "boom".to_owned() }.to_string(),
        "relay rejected message: 500 boom"
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_relay_is_unavailable() {
    let outcome = futures::executor::block_on(EmailJsRelay.send(&RelayConfig::default(), &params()));
    assert_eq!(outcome, Err(RelayError::Unavailable));
}
