//! Handlers for the Research Lab commands (`ask`, `lab`).

use std::path::Path;

use dialoguer::Input;
use serde_json::json;

use crate::adapter::inbound::cli::{operator, output};
use crate::application::research::ResearchLab;
use crate::domain::ChatMessage;
use crate::error::Result;

/// Words that end an interactive session.
const EXIT_WORDS: &[&str] = &["exit", "quit"];

/// Execute `ask`: one question, one answer.
pub async fn execute_ask(question: &str, config_path: &Path) -> Result<()> {
    let config_toml = operator::read_optional_config_toml(config_path)?;
    let session = operator::operator().open_session(config_toml.as_deref())?;

    let answer = ask(&session.research, question).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "ask",
            "question": question,
            "answer": answer,
        }));
        return Ok(());
    }

    print_answer(&answer);
    Ok(())
}

/// Execute `lab`: an interactive conversation until empty input or `exit`.
pub async fn execute_lab(config_path: &Path) -> Result<()> {
    let config_toml = operator::read_optional_config_toml(config_path)?;
    let session = operator::operator().open_session(config_toml.as_deref())?;
    let lab = &session.research;

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Research Lab");
    output::note("Ask about competitors, pricing or clinical capacity.");
    output::hint("empty line or `exit` to quit, `reset` to clear history");

    loop {
        let question: String = Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()?;
        let question = question.trim();

        if question.is_empty() || EXIT_WORDS.contains(&question.to_ascii_lowercase().as_str()) {
            break;
        }
        if question.eq_ignore_ascii_case("reset") {
            lab.reset();
            output::success("History cleared");
            continue;
        }

        match ask(lab, question).await {
            Ok(answer) => print_answer(&answer),
            Err(e) => output::error(&format!("Research Lab request failed: {e}")),
        }
    }

    output::note(&format!("{} messages exchanged", lab.history().len()));
    Ok(())
}

async fn ask(lab: &ResearchLab, question: &str) -> Result<ChatMessage> {
    let pb = output::spinner("Researching...");
    match lab.ask(question).await {
        Ok(answer) => {
            pb.finish_and_clear();
            Ok(answer)
        }
        Err(e) => {
            output::spinner_fail(&pb, "Request failed");
            Err(e)
        }
    }
}

fn print_answer(answer: &ChatMessage) {
    output::section("analyst");
    output::lines(&answer.text);
    if output::verbosity() > 0 {
        output::note(&answer.timestamp.to_rfc3339());
    }
}
