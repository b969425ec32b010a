//! OpenAI LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for the OpenAI
//! Responses API, with the hosted web-search tool.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::http::{ensure_success, env_key};
use crate::domain::Role;
use crate::error::Result;
use crate::port::outbound::llm::{GenerationRequest, Llm};

/// OpenAI Responses API endpoint.
const API_URL: &str = "https://api.openai.com/v1/responses";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI API client.
#[derive(Debug)]
pub struct OpenAi {
    /// HTTP client for API requests.
    client: Client,
    /// API key for authentication.
    api_key: String,
    /// Model identifier (e.g., "gpt-4o").
    model: String,
    /// Maximum tokens to generate in the response.
    max_tokens: u32,
    /// Sampling temperature (0.0 to 2.0).
    temperature: f64,
}

impl OpenAi {
    /// Create a new OpenAI client with explicit configuration.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
        temperature: f64,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            temperature,
        }
    }

    /// Create a client from the `OPENAI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = env_key(&[API_KEY_ENV])?;
        Ok(Self::new(api_key, model, 4096, 0.2))
    }

    fn build_request(&self, request: &GenerationRequest) -> Request {
        Request {
            model: self.model.clone(),
            instructions: request.system_instruction.clone(),
            input: request
                .turns
                .iter()
                .map(|turn| Message {
                    role: match turn.role {
                        Role::User => "user",
                        Role::Model => "assistant",
                    },
                    content: turn.text.clone(),
                })
                .collect(),
            tools: if request.web_search {
                vec![Tool { kind: "web_search" }]
            } else {
                Vec::new()
            },
            max_output_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

#[derive(Serialize)]
struct Request {
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
    input: Vec<Message>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    max_output_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct Tool {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    output: Vec<OutputItem>,
}

/// One output item; only `message` items carry text.
#[derive(Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentItem>,
}

#[derive(Deserialize)]
struct ContentItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl Response {
    fn text(self) -> String {
        self.output
            .into_iter()
            .flat_map(|item| item.content)
            .filter(|c| c.kind == "output_text")
            .filter_map(|c| c.text)
            .collect()
    }
}

#[async_trait]
impl Llm for OpenAi {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&self.build_request(request))
            .send()
            .await?;

        let response = ensure_success(self.name(), response)
            .await?
            .json::<Response>()
            .await?;

        Ok(response.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::outbound::llm::Turn;

    fn client() -> OpenAi {
        OpenAi::new("test-api-key", "gpt-4o", 4096, 0.2)
    }

    // ==================== Request/Response Serialization Tests ====================

    #[test]
    fn test_request_serialization() {
        let request = GenerationRequest::prompt("Hello, world!")
            .with_system_instruction("Be brief.")
            .with_web_search(true);

        let json = serde_json::to_value(client().build_request(&request)).unwrap();

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["instructions"], "Be brief.");
        assert_eq!(json["max_output_tokens"], 4096);
        assert_eq!(json["temperature"], 0.2);
        assert_eq!(json["input"][0]["role"], "user");
        assert_eq!(json["input"][0]["content"], "Hello, world!");
        assert_eq!(json["tools"][0]["type"], "web_search");
    }

    #[test]
    fn test_model_turns_map_to_assistant() {
        let request =
            GenerationRequest::conversation(vec![Turn::user("q"), Turn::model("a")]);

        let json = serde_json::to_value(client().build_request(&request)).unwrap();

        assert_eq!(json["input"][1]["role"], "assistant");
        assert!(json.get("tools").is_none());
        assert!(json.get("instructions").is_none());
    }

    #[test]
    fn test_response_skips_search_calls() {
        let json = r#"{
            "id": "resp_123",
            "output": [
                {"type": "web_search_call", "id": "ws_1", "status": "completed"},
                {
                    "type": "message",
                    "role": "assistant",
                    "content": [
                        {"type": "output_text", "text": "First part. ", "annotations": []},
                        {"type": "output_text", "text": "Second part.", "annotations": []}
                    ]
                }
            ]
        }"#;

        let response: Response = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), "First part. Second part.");
    }

    #[test]
    fn test_response_without_output_is_empty() {
        let response: Response = serde_json::from_str(r#"{"id": "resp_1"}"#).unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn test_malformed_response_wrong_output_type() {
        let result: std::result::Result<Response, _> =
            serde_json::from_str(r#"{"output": "not an array"}"#);
        assert!(result.is_err());
    }

    // ==================== Client Construction Tests ====================

    #[test]
    fn test_client_identity() {
        let client = client();
        assert_eq!(client.name(), "openai");
        assert_eq!(client.model(), "gpt-4o");
        assert_eq!(client.max_tokens, 4096);
    }

    #[test]
    fn test_api_url_is_valid() {
        assert!(API_URL.starts_with("https://"));
        assert!(API_URL.ends_with("/v1/responses"));
    }
}
