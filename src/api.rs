use crate::constants::CHAT_ENDPOINT;
use crate::errors::{ObrolanError, ObrolanResult};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Instant;

/// Sends one message to the backend and returns the reply text.
///
/// `Ok(None)` means the backend answered with JSON that carries no usable
/// `reply` field (absent, null, empty, or the wrong type) — the caller
/// renders the fallback bubble for that case. The HTTP status is not
/// consulted: the backend pairs its error statuses with JSON bodies lacking
/// `reply`, which already maps to the fallback.
pub async fn send_chat_message(
    client: &Client,
    base_url: &str,
    message: &str,
) -> ObrolanResult<Option<String>> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), CHAT_ENDPOINT);
    let payload = json!({ "message": message });

    let started = Instant::now();
    let response = client
        .post(&url)
        .json(&payload)
        .send()
        .await
        .map_err(|e| ObrolanError::api_error(format!("Request failed: {}", e)))?;

    let status = response.status();
    let body: Value = response
        .json()
        .await
        .map_err(|e| ObrolanError::api_error(format!("Failed to parse backend response: {}", e)))?;

    log::info!(
        "{} - Status: {} - Time: {}ms",
        url,
        status.as_u16(),
        started.elapsed().as_millis()
    );

    if let Some(error) = body["error"].as_str() {
        log::warn!("Backend reported an error: {}", error);
    }

    Ok(body["reply"]
        .as_str()
        .filter(|reply| !reply.is_empty())
        .map(|reply| reply.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_reply_is_extracted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "message": "Hi" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "Hello" })))
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let reply = send_chat_message(&client, &mock_server.uri(), "Hi")
            .await
            .unwrap();
        assert_eq!(reply, Some("Hello".to_string()));
    }

    #[tokio::test]
    async fn test_missing_reply_field_is_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let reply = send_chat_message(&client, &mock_server.uri(), "Hi")
            .await
            .unwrap();
        assert_eq!(reply, None);
    }

    #[tokio::test]
    async fn test_null_and_empty_replies_are_none() {
        for body in [json!({ "reply": null }), json!({ "reply": "" })] {
            let mock_server = MockServer::start().await;

            Mock::given(method("POST"))
                .and(path("/chat"))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .mount(&mock_server)
                .await;

            let client = Client::new();
            let reply = send_chat_message(&client, &mock_server.uri(), "Hi")
                .await
                .unwrap();
            assert_eq!(reply, None);
        }
    }

    #[tokio::test]
    async fn test_error_body_with_error_status_is_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "error": "model unavailable" })),
            )
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let reply = send_chat_message(&client, &mock_server.uri(), "Hi")
            .await
            .unwrap();
        assert_eq!(reply, None);
    }

    #[tokio::test]
    async fn test_non_json_body_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = Client::new();
        let result = send_chat_message(&client, &mock_server.uri(), "Hi").await;
        assert!(matches!(result, Err(ObrolanError::Api(_))));
    }
}
