//! LLM adapter modules.
//!
//! Provides implementations of the [`Llm`](crate::port::outbound::llm::Llm) trait
//! for Google Gemini, OpenAI and Anthropic Claude. Each adapter maps the
//! provider-neutral request onto the provider's REST API, including its
//! web-search tool.

pub mod anthropic;
pub mod gemini;
mod http;
pub mod openai;

pub use anthropic::Anthropic;
pub use gemini::Gemini;
pub use http::env_key;
pub use openai::OpenAi;
