//! Form relay submission
//!
//! A validated quote request is posted once, as multipart/form-data, to the
//! hosted form relay. Any 2xx counts as delivered; everything else is a
//! failure the visitor may retry by hand.

use super::attachment::Attachment;
use super::ServiceType;
use crate::Result;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

pub const SUCCESS_TITLE: &str = "Mensagem enviada!";
pub const SUCCESS_DESCRIPTION: &str = "Entrarei em contato em breve. Obrigada!";
pub const FAILURE_TITLE: &str = "Erro ao enviar";
pub const FAILURE_DESCRIPTION: &str = "Tente novamente ou entre em contato por outro meio.";

/// Trimmed, validated form contents ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotePayload {
    pub nome: String,
    pub contato: String,
    pub tipo: ServiceType,
    pub mensagem: String,
    pub attachment: Option<Attachment>,
}

/// Why a submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Connection, TLS, or protocol failure before a response arrived
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The relay answered with a non-success status
    #[error("relay answered with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The attachment vanished or became unreadable after it was chosen
    #[error("attachment could not be read: {0}")]
    Attachment(#[from] std::io::Error),
}

/// Formspree-style error body
#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    errors: Vec<RelayErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct RelayErrorEntry {
    message: String,
}

/// HTTP client for the form relay endpoint
#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: Client,
    endpoint: String,
}

impl QuoteClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post the quote request. Single attempt, no retry.
    pub async fn submit(&self, payload: &QuotePayload) -> std::result::Result<(), SubmitError> {
        let form = build_multipart(payload).await?;

        tracing::info!(
            endpoint = %self.endpoint,
            tipo = payload.tipo.value(),
            has_attachment = payload.attachment.is_some(),
            "submitting quote request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "quote request delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let detail = relay_error_detail(&body);
        tracing::warn!(status = status.as_u16(), detail = ?detail, "form relay rejected quote request");
        Err(SubmitError::Status {
            status: status.as_u16(),
            detail,
        })
    }
}

async fn build_multipart(payload: &QuotePayload) -> std::result::Result<Form, SubmitError> {
    let mut form = Form::new()
        .text("nome", payload.nome.clone())
        .text("contato", payload.contato.clone())
        .text("tipo", payload.tipo.value())
        .text("mensagem", payload.mensagem.clone());

    if let Some(attachment) = &payload.attachment {
        let bytes = tokio::fs::read(&attachment.path).await?;
        let part = Part::bytes(bytes)
            .file_name(attachment.file_name.clone())
            .mime_str(attachment.mime_type())?;
        form = form.part("attachment", part);
    }

    Ok(form)
}

/// Join the relay's error messages, if the body carries any
fn relay_error_detail(body: &str) -> Option<String> {
    let parsed: RelayErrorBody = serde_json::from_str(body).ok()?;
    let messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn payload() -> QuotePayload {
        QuotePayload {
            nome: "Ana".to_string(),
            contato: "ana@x.com".to_string(),
            tipo: ServiceType::Site,
            mensagem: "Preciso de um site".to_string(),
            attachment: None,
        }
    }

    #[test]
    fn test_relay_error_detail() {
        let body = r#"{"errors":[{"code":"TYPE_EMAIL","field":"email","message":"should be an email"},{"message":"form not found"}]}"#;
        assert_eq!(
            relay_error_detail(body).as_deref(),
            Some("should be an email; form not found")
        );
        assert_eq!(relay_error_detail("<html>"), None);
        assert_eq!(relay_error_detail(r#"{"errors":[]}"#), None);
    }

    #[tokio::test]
    async fn test_posts_multipart_fields() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/f/test")
                    .header("accept", "application/json")
                    .body_contains("name=\"nome\"")
                    .body_contains("Ana")
                    .body_contains("name=\"contato\"")
                    .body_contains("ana@x.com")
                    .body_contains("name=\"tipo\"")
                    .body_contains("name=\"mensagem\"")
                    .body_contains("Preciso de um site");
                then.status(200).json_body(serde_json::json!({"ok": true}));
            })
            .await;

        let client = QuoteClient::new(server.url("/f/test")).unwrap();
        client.submit(&payload()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/f/test");
                then.status(422)
                    .json_body(serde_json::json!({"errors": [{"message": "form disabled"}]}));
            })
            .await;

        let client = QuoteClient::new(server.url("/f/test")).unwrap();
        let err = client.submit(&payload()).await.unwrap_err();
        match err {
            SubmitError::Status { status, detail } => {
                assert_eq!(status, 422);
                assert_eq!(detail.as_deref(), Some("form disabled"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_error() {
        // Nothing listens on port 9 of the loopback interface
        let client = QuoteClient::new("http://127.0.0.1:9/f/test").unwrap();
        let err = client.submit(&payload()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
    }

    #[tokio::test]
    async fn test_missing_attachment_fails_before_sending() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/f/test");
                then.status(200);
            })
            .await;

        let mut payload = payload();
        payload.attachment = Some(Attachment {
            path: "/definitely/not/here.pdf".into(),
            file_name: "here.pdf".to_string(),
            size: 1,
        });

        let client = QuoteClient::new(server.url("/f/test")).unwrap();
        let err = client.submit(&payload).await.unwrap_err();
        assert!(matches!(err, SubmitError::Attachment(_)));
        mock.assert_hits_async(0).await;
    }
}
