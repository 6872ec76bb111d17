//! Email relay client for the contact form.
//!
//! Browser (`csr`): a real `POST` to the EmailJS REST endpoint via
//! `gloo-net`. Native builds get a relay that always reports itself
//! unavailable, so nothing is ever sent from tests by accident.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to a `RelayError` variant; the form shows one generic
//! banner for all of them and logs the specific cause.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use serde::Serialize;

use crate::config::RelayConfig;
use crate::state::contact::TemplateParams;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Successful relay reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay rejected message: {status} {text}")]
    Status { status: u16, text: String },
    #[error("relay not available outside the browser")]
    Unavailable,
}

/// Request body the EmailJS send endpoint expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

#[must_use]
pub fn send_request<'a>(config: &'a RelayConfig, params: &'a TemplateParams) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: params,
    }
}

/// Map an HTTP reply to the relay outcome.
///
/// # Errors
///
/// Any non-2xx status becomes `RelayError::Status`.
pub fn classify_response(status: u16, text: String) -> Result<RelayResponse, RelayError> {
    if (200..300).contains(&status) {
        Ok(RelayResponse { status, text })
    } else {
        Err(RelayError::Status { status, text })
    }
}

/// Anything that can deliver a contact message. Each call resolves to
/// exactly one outcome; there is no cancellation.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, config: &RelayConfig, params: &TemplateParams) -> Result<RelayResponse, RelayError>;
}

/// EmailJS over HTTPS.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmailJsRelay;

impl EmailRelay for EmailJsRelay {
    async fn send(&self, config: &RelayConfig, params: &TemplateParams) -> Result<RelayResponse, RelayError> {
        #[cfg(feature = "csr")]
        {
            if config.is_placeholder() {
                log::warn!("email relay is using placeholder credentials");
            }
            let body = send_request(config, params);
            let resp = gloo_net::http::Request::post(EMAILJS_SEND_URL)
                .json(&body)
                .map_err(|e| RelayError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            classify_response(status, text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (config, params);
            Err(RelayError::Unavailable)
        }
    }
}
