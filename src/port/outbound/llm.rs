//! Generative-model port for discovery and research adapters.
//!
//! Defines a provider-neutral request shape: an optional system
//! instruction, one or more conversation turns, and a switch for
//! web-search grounding.

use async_trait::async_trait;

use crate::domain::Role;
use crate::error::Result;

/// One conversation turn sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// A single non-streaming generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Persona and standing rules for the model.
    pub system_instruction: Option<String>,
    /// Conversation so far; the last turn is the one to answer.
    pub turns: Vec<Turn>,
    /// Ground the answer in live web search results.
    pub web_search: bool,
}

impl GenerationRequest {
    /// A request with a single user prompt.
    #[must_use]
    pub fn prompt(text: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::user(text)],
            ..Self::default()
        }
    }

    /// A request carrying a whole conversation.
    #[must_use]
    pub fn conversation(turns: Vec<Turn>) -> Self {
        Self {
            turns,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    #[must_use]
    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }

    /// Text of the final user turn, if any.
    #[must_use]
    pub fn last_prompt(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.role == Role::User)
            .map(|t| t.text.as_str())
    }
}

/// Client for generative text models.
///
/// Implementations wrap specific providers (Gemini, OpenAI, Anthropic) and
/// handle authentication and response decoding. One instance is built at
/// startup and shared; implementations must be `Send + Sync`.
///
/// # Errors
///
/// [`generate`](Self::generate) returns an error for transport failures,
/// non-success provider replies, or undecodable responses.
#[async_trait]
pub trait Llm: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Model identifier sent to the provider.
    fn model(&self) -> &str;

    /// Issue one generation request and return the response text.
    ///
    /// An empty string means the provider answered without any text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}
