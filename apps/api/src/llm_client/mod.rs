/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// All LLM interactions MUST go through this module, either via `LlmClient`
/// or via the `ChatModel` trait it implements.
///
/// Model: mixtral-8x7b-32768 (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// The model used for all recommendation calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "mixtral-8x7b-32768";
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 1.0;
const MAX_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A non-streaming chat-completion request with the fixed generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: &'static str,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub stream: bool,
}

impl ChatRequest {
    /// Builds a system + user exchange.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            model: MODEL,
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
            stream: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
pub struct ReplyMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletion {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Anything that can answer a chat request with a single piece of text.
///
/// `LlmClient` is the production implementation; tests swap in scripted models.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError>;
}

/// HTTP client for Groq's chat-completions endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Makes exactly one call to the chat-completions endpoint.
    /// No retries: a failed call is reported to the caller as-is.
    pub async fn call(&self, request: &ChatRequest) -> Result<ChatCompletion, LlmError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let completion: ChatCompletion = serde_json::from_str(&body)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl ChatModel for LlmClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let completion = self.call(request).await?;
        completion
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": MODEL,
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160 }
        })
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "Kaggle Warriors\nAI Beginners";
        assert_eq!(strip_json_fences(input), input);
    }

    #[test]
    fn test_chat_request_serializes_generation_parameters() {
        let request = ChatRequest::new("be brief", "{\"pythonLevel\":\"Expert\"}");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], json!(MODEL));
        assert_eq!(value["temperature"], json!(0.7));
        assert_eq!(value["top_p"], json!(1.0));
        assert_eq!(value["max_tokens"], json!(500));
        assert_eq!(value["stream"], json!(false));
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "be brief");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "{\"pythonLevel\":\"Expert\"}");
    }

    #[test]
    fn test_completion_text_ignores_blank_content() {
        let completion: ChatCompletion =
            serde_json::from_value(completion_body("   ")).unwrap();
        assert!(completion.text().is_none());
    }

    #[tokio::test]
    async fn test_complete_posts_bearer_authenticated_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer gsk_test"))
            .and(body_partial_json(json!({
                "model": MODEL,
                "max_tokens": 500,
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("hello")))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::new("gsk_test", format!("{}/", server.uri()));
        let text = client
            .complete(&ChatRequest::new("system", "user"))
            .await
            .unwrap();

        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_error_status_extracts_api_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": { "message": "Invalid API Key", "type": "invalid_request_error" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::new("bad-key", server.uri());
        let err = client
            .complete(&ChatRequest::new("system", "user"))
            .await
            .unwrap_err();

        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API Key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::new("gsk_test", server.uri());
        let err = client
            .complete(&ChatRequest::new("system", "user"))
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::Api { status: 503, ref message } if message == "upstream overloaded"));
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::new("gsk_test", server.uri());
        let err = client
            .complete(&ChatRequest::new("system", "user"))
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[tokio::test]
    async fn test_missing_content_is_empty_content_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": null } }]
            })))
            .mount(&server)
            .await;

        let client = LlmClient::new("gsk_test", server.uri());
        let err = client
            .complete(&ChatRequest::new("system", "user"))
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::EmptyContent));
    }
}
