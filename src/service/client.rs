//! Blocking HTTP client for the chat service wire protocol.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::session::{ChatReply, SessionSummary};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("chat service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("chat service returned status {status}")]
    UnexpectedStatus { status: u16 },
}

/// Synchronous port to the chat service endpoints.
pub trait ChatService {
    /// Exchanges one user message for a reply via `POST /api/chat`.
    fn send_chat(&self, message: &str) -> Result<ChatReply, ServiceError>;

    /// Fetches the end-of-session report via `GET /api/summary`.
    fn fetch_summary(&self) -> Result<SessionSummary, ServiceError>;
}

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponseBody {
    reply: String,
    // Absent when the service has nothing to flag.
    #[serde(default)]
    intervention: bool,
    #[serde(default)]
    intervention_text: String,
}

#[derive(Deserialize)]
struct SummaryResponseBody {
    dominant_mood: String,
    avg_score: f64,
    summary: String,
}

#[derive(Debug, Clone)]
pub struct HttpChatService {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl HttpChatService {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        let http = reqwest::blocking::Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ChatService for HttpChatService {
    fn send_chat(&self, message: &str) -> Result<ChatReply, ServiceError> {
        let response = self
            .http
            .post(self.endpoint("/api/chat"))
            .json(&ChatRequestBody { message })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body: ChatResponseBody = response.json()?;
        Ok(ChatReply {
            text: body.reply,
            intervention: body.intervention.then_some(body.intervention_text),
        })
    }

    fn fetch_summary(&self) -> Result<SessionSummary, ServiceError> {
        let response = self.http.get(self.endpoint("/api/summary")).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body: SummaryResponseBody = response.json()?;
        Ok(SessionSummary {
            dominant_mood: body.dominant_mood,
            avg_score: body.avg_score,
            summary: body.summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_for(server: &mockito::ServerGuard) -> HttpChatService {
        HttpChatService::new(server.url()).expect("client must build")
    }

    #[test]
    fn send_chat_posts_json_message_and_decodes_reply() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/chat")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"message": "Hello"}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"reply":"Hi there!","intervention":false,"intervention_text":""}"#)
            .create();

        let reply = service_for(&server)
            .send_chat("Hello")
            .expect("chat exchange must succeed");

        assert_eq!(reply.text, "Hi there!");
        assert_eq!(reply.intervention, None);
        mock.assert();
    }

    #[test]
    fn send_chat_surfaces_flagged_intervention() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_body(
                r#"{"reply":"ok","intervention":true,"intervention_text":"Try deep breathing"}"#,
            )
            .create();

        let reply = service_for(&server)
            .send_chat("rough day")
            .expect("chat exchange must succeed");

        assert_eq!(reply.text, "ok");
        assert_eq!(reply.intervention, Some("Try deep breathing".to_owned()));
    }

    #[test]
    fn send_chat_tolerates_absent_intervention_fields() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_body(r#"{"reply":"Hi there!"}"#)
            .create();

        let reply = service_for(&server)
            .send_chat("Hello")
            .expect("chat exchange must succeed");

        assert_eq!(reply.intervention, None);
    }

    #[test]
    fn send_chat_rejects_error_status() {
        let mut server = mockito::Server::new();
        server.mock("POST", "/api/chat").with_status(500).create();

        let result = service_for(&server).send_chat("Hello");

        assert!(matches!(
            result,
            Err(ServiceError::UnexpectedStatus { status: 500 })
        ));
    }

    #[test]
    fn send_chat_rejects_non_json_body() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create();

        let result = service_for(&server).send_chat("Hello");

        assert!(matches!(result, Err(ServiceError::Transport(_))));
    }

    #[test]
    fn fetch_summary_decodes_session_report() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/summary")
            .with_status(200)
            .with_body(r#"{"dominant_mood":"calm","avg_score":7.2,"summary":"Keep it up"}"#)
            .create();

        let summary = service_for(&server)
            .fetch_summary()
            .expect("summary fetch must succeed");

        assert_eq!(summary.dominant_mood, "calm");
        assert_eq!(summary.avg_score, 7.2);
        assert_eq!(summary.summary, "Keep it up");
    }

    #[test]
    fn fetch_summary_rejects_error_status() {
        let mut server = mockito::Server::new();
        server.mock("GET", "/api/summary").with_status(503).create();

        let result = service_for(&server).fetch_summary();

        assert!(matches!(
            result,
            Err(ServiceError::UnexpectedStatus { status: 503 })
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/summary")
            .with_status(200)
            .with_body(r#"{"dominant_mood":"calm","avg_score":0.0,"summary":"ok"}"#)
            .create();

        let service = HttpChatService::new(format!("{}/", server.url())).expect("client must build");

        assert!(service.fetch_summary().is_ok());
    }
}
