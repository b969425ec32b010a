//! CLI module graph.

pub mod command;
pub mod config;
pub mod detail;
pub mod diagnostic;
pub mod matrix;
pub mod operator;
pub mod output;
pub mod paths;
pub mod research;
pub mod source;
