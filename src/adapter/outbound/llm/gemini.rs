//! Google Gemini LLM client.
//!
//! Implements the [`Llm`] trait on the Generative Language
//! `generateContent` endpoint, with Google Search grounding.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http::{ensure_success, env_key};
use crate::domain::Role;
use crate::error::Result;
use crate::port::outbound::llm::{GenerationRequest, Llm};

/// Generative Language API base URL.
const API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Environment variables holding the API key, in lookup order.
pub const API_KEY_ENV: &[&str] = &["API_KEY", "GEMINI_API_KEY"];

/// Gemini API client.
#[derive(Debug)]
pub struct Gemini {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl Gemini {
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

    /// Create a client from `API_KEY` or `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither environment variable is set.
    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = env_key(API_KEY_ENV)?;
        Ok(Self::new(api_key, model, 8192, 0.2))
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/v1beta/models/{}:generateContent", self.model)
    }

    fn build_request(&self, request: &GenerationRequest) -> Request {
        Request {
            system_instruction: request.system_instruction.as_ref().map(|text| Content {
                role: None,
                parts: vec![Part { text: text.clone() }],
            }),
            contents: request
                .turns
                .iter()
                .map(|turn| Content {
                    role: Some(match turn.role {
                        Role::User => "user",
                        Role::Model => "model",
                    }),
                    parts: vec![Part {
                        text: turn.text.clone(),
                    }],
                })
                .collect(),
            tools: if request.web_search {
                vec![Tool {
                    google_search: GoogleSearch {},
                }]
            } else {
                Vec::new()
            },
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_tokens,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl Response {
    /// Text parts of the first candidate, joined.
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Llm for Gemini {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let body = self.build_request(request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let text = ensure_success(self.name(), response)
            .await?
            .json::<Response>()
            .await?
            .text();

        debug!(model = %self.model, chars = text.len(), "Gemini response received");
        Ok(text)
    }
}
