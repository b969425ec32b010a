//! Infrastructure configuration modules.

pub mod llm;
pub mod logging;
pub mod settings;
