//! Research Lab: free-form questions answered with web-grounded generation.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::application::client::LlmHandle;
use crate::application::market::SYSTEM_INSTRUCTION;
use crate::domain::{ChatMessage, Role};
use crate::error::Result;
use crate::port::outbound::llm::{GenerationRequest, Llm, Turn};

/// A running conversation with the research analyst persona.
#[derive(Debug)]
pub struct ResearchLab {
    llm: LlmHandle,
    history: Mutex<Vec<ChatMessage>>,
    web_search: bool,
}

impl ResearchLab {
    #[must_use]
    pub fn new(llm: LlmHandle) -> Self {
        Self {
            llm,
            history: Mutex::new(Vec::new()),
            web_search: true,
        }
    }

    #[must_use]
    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }

    /// Swap in a client built from new credentials.
    pub fn rebind(&self, llm: Arc<dyn Llm>) {
        self.llm.rebind(llm);
    }

    /// Ask a question in the context of the conversation so far.
    ///
    /// On success both the question and the answer are appended to the
    /// history. On failure the history is left as it was.
    ///
    /// # Errors
    ///
    /// Returns an error when no client is bound or the model call fails.
    pub async fn ask(&self, question: &str) -> Result<ChatMessage> {
        let question = ChatMessage::user(question.trim());
        let request = self.request(&question);
        let llm = self.llm.current()?;

        debug!(provider = llm.name(), turns = request.turns.len(), "Research Lab request");
        let answer = match llm.generate(&request).await {
            Ok(text) => ChatMessage::model(text),
            Err(e) => {
                warn!(error = %e, "Research Lab request failed");
                return Err(e);
            }
        };

        let mut history = self.history.lock();
        history.push(question);
        history.push(answer.clone());
        Ok(answer)
    }

    #[must_use]
    pub fn history(&self) -> Vec<ChatMessage> {
        self.history.lock().clone()
    }

    pub fn reset(&self) {
        self.history.lock().clear();
    }

    fn request(&self, question: &ChatMessage) -> GenerationRequest {
        let history = self.history.lock();
        let turns = history
            .iter()
            .chain(std::iter::once(question))
            .map(|m| match m.role {
                Role::User => Turn::user(m.text.clone()),
                Role::Model => Turn::model(m.text.clone()),
            })
            .collect();

        GenerationRequest::conversation(turns)
            .with_system_instruction(SYSTEM_INSTRUCTION)
            .with_web_search(self.web_search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::llm::{FailingLlm, ScriptedLlm};

    #[tokio::test]
    async fn ask_appends_both_turns() {
        let llm = Arc::new(ScriptedLlm::new("Aspen leads Tier 0."));
        let lab = ResearchLab::new(LlmHandle::new(Some(llm.clone())));

        let answer = lab.ask("Who prices lowest?").await.unwrap();

        assert_eq!(answer.role, Role::Model);
        assert_eq!(answer.text, "Aspen leads Tier 0.");
        let history = lab.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, Role::User);
        assert_eq!(history[0].text, "Who prices lowest?");

        let requests = llm.requests();
        assert!(requests[0].web_search);
        assert_eq!(requests[0].system_instruction.as_deref(), Some(SYSTEM_INSTRUCTION));
    }

    #[tokio::test]
    async fn follow_up_sends_full_history() {
        let llm = Arc::new(ScriptedLlm::with_replies(vec!["first".into(), "second".into()]));
        let lab = ResearchLab::new(LlmHandle::new(Some(llm.clone())));

        lab.ask("one").await.unwrap();
        lab.ask("two").await.unwrap();

        let requests = llm.requests();
        let turns = &requests[1].turns;
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0], Turn::user("one"));
        assert_eq!(turns[1], Turn::model("first"));
        assert_eq!(turns[2], Turn::user("two"));
    }

    #[tokio::test]
    async fn failure_keeps_history_unchanged() {
        let lab = ResearchLab::new(LlmHandle::new(Some(Arc::new(FailingLlm::new("timeout")))));

        assert!(lab.ask("anything").await.is_err());
        assert!(lab.history().is_empty());
    }

    #[tokio::test]
    async fn unbound_client_errors() {
        let lab = ResearchLab::new(LlmHandle::unbound());
        assert!(lab.ask("anything").await.is_err());
    }

    #[tokio::test]
    async fn rebind_and_reset() {
        let lab = ResearchLab::new(LlmHandle::unbound());
        lab.rebind(Arc::new(ScriptedLlm::new("ok")));

        lab.ask("hello").await.unwrap();
        assert_eq!(lab.history().len(), 2);

        lab.reset();
        assert!(lab.history().is_empty());
    }
}
