//! Mock [`Llm`] implementations for testing.
//!
//! - [`ScriptedLlm`] - Returns queued replies, repeating the last one, and
//!   records every request it receives.
//! - [`FailingLlm`] - Every call fails with a connection error.
//! - [`DelayedLlm`] - Wraps another client and sleeps before answering.
//!   Best for: overlapping-request tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::outbound::llm::{GenerationRequest, Llm};

// ---------------------------------------------------------------------------
// ScriptedLlm
// ---------------------------------------------------------------------------

/// A mock model with canned replies.
///
/// Each call pops the next reply; once one reply remains it is returned
/// for every further call.
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedLlm {
    pub fn new(reply: impl Into<String>) -> Self {
        Self::with_replies(vec![reply.into()])
    }

    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request received so far, in call order.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.requests.lock().push(request.clone());
        let mut replies = self.replies.lock();
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        };
        Ok(reply.unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// FailingLlm
// ---------------------------------------------------------------------------

/// A mock model whose every call fails.
pub struct FailingLlm {
    message: String,
}

impl FailingLlm {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl Llm for FailingLlm {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn model(&self) -> &str {
        "failing-model"
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
        Err(Error::Connection(self.message.clone()))
    }
}

// ---------------------------------------------------------------------------
// DelayedLlm
// ---------------------------------------------------------------------------

/// Delegates to an inner model after a fixed delay.
pub struct DelayedLlm {
    inner: Arc<dyn Llm>,
    delay: Duration,
}

impl DelayedLlm {
    pub fn new(inner: Arc<dyn Llm>, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl Llm for DelayedLlm {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn model(&self) -> &str {
        self.inner.model()
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        self.inner.generate(request).await
    }
}
