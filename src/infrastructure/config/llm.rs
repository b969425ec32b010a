//! LLM provider configuration.
//!
//! Provides configuration for the generative-model providers used for
//! market discovery and the Research Lab.

use serde::Deserialize;

/// LLM provider configuration.
///
/// Configures which LLM provider to use and provider-specific settings.
/// API keys are read from environment variables at runtime: `API_KEY` or
/// `GEMINI_API_KEY`, `OPENAI_API_KEY`, `ANTHROPIC_API_KEY`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LlmConfig {
    /// LLM provider to use.
    ///
    /// Defaults to Gemini.
    #[serde(default)]
    pub provider: LlmProvider,

    /// Gemini-specific settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// OpenAI-specific settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Anthropic-specific settings.
    #[serde(default)]
    pub anthropic: AnthropicConfig,
}

impl LlmConfig {
    /// Whether the active provider grounds answers in web search.
    #[must_use]
    pub fn web_search(&self) -> bool {
        match self.provider {
            LlmProvider::Gemini => self.gemini.web_search,
            LlmProvider::OpenAi => self.openai.web_search,
            LlmProvider::Anthropic => self.anthropic.web_search,
        }
    }

    /// Model identifier of the active provider.
    #[must_use]
    pub fn model(&self) -> &str {
        match self.provider {
            LlmProvider::Gemini => &self.gemini.model,
            LlmProvider::OpenAi => &self.openai.model,
            LlmProvider::Anthropic => &self.anthropic.model,
        }
    }
}

/// LLM provider selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Google Gemini models with Google Search grounding.
    #[default]
    Gemini,
    /// OpenAI models through the Responses API.
    OpenAi,
    /// Anthropic Claude models.
    Anthropic,
}

impl LlmProvider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
        }
    }
}

/// Gemini-specific configuration.
///
/// Requires `API_KEY` or `GEMINI_API_KEY`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// Model identifier.
    ///
    /// Defaults to "gemini-2.5-flash".
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Sampling temperature for generation.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response.
    #[serde(default = "default_gemini_max_tokens")]
    pub max_tokens: u32,

    /// Attach the Google Search tool to requests.
    #[serde(default = "default_web_search")]
    pub web_search: bool,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_gemini_model(),
            temperature: default_temperature(),
            max_tokens: default_gemini_max_tokens(),
            web_search: default_web_search(),
        }
    }
}

/// OpenAI-specific configuration.
///
/// Settings for OpenAI API. Requires `OPENAI_API_KEY` environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// Model identifier.
    ///
    /// Defaults to "gpt-4o".
    #[serde(default = "default_openai_model")]
    pub model: String,

    /// Sampling temperature for generation.
    ///
    /// Lower values produce more deterministic output.
    /// Defaults to 0.2.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens in the response.
    ///
    /// Limits response length to control costs. Defaults to 4096.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_web_search")]
    pub web_search: bool,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            web_search: default_web_search(),
        }
    }
}

/// Anthropic-specific configuration.
///
/// Settings for Anthropic Claude API. Requires `ANTHROPIC_API_KEY`
/// environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    /// Model identifier.
    ///
    /// Defaults to "claude-sonnet-4-5".
    #[serde(default = "default_anthropic_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_web_search")]
    pub web_search: bool,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: default_anthropic_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            web_search: default_web_search(),
        }
    }
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".into()
}

fn default_openai_model() -> String {
    "gpt-4o".into()
}

fn default_anthropic_model() -> String {
    "claude-sonnet-4-5".into()
}

fn default_temperature() -> f64 {
    0.2
}

const fn default_gemini_max_tokens() -> u32 {
    8192
}

const fn default_max_tokens() -> u32 {
    4096
}

const fn default_web_search() -> bool {
    true
}
