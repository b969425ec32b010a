//! Shared, explicitly rebindable handle to the generative-model client.
//!
//! One client is built at startup. Credentials change only through
//! [`LlmHandle::rebind`], never by reconstructing a client per request.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

/// Cloneable handle; all clones observe the same bound client.
#[derive(Clone, Default)]
pub struct LlmHandle {
    inner: Arc<RwLock<Option<Arc<dyn Llm>>>>,
}

impl LlmHandle {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn Llm>>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(llm)),
        }
    }

    /// A handle with no client; every request fails soft.
    #[must_use]
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Swap in a new client, e.g. after the API key changed.
    pub fn rebind(&self, llm: Arc<dyn Llm>) {
        *self.inner.write() = Some(llm);
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.inner.read().is_some()
    }

    /// The currently bound client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] when no client is bound.
    pub fn current(&self) -> Result<Arc<dyn Llm>> {
        self.inner.read().clone().ok_or_else(|| {
            Error::Connection("no generative model client configured (is the API key set?)".into())
        })
    }
}

impl std::fmt::Debug for LlmHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let provider = self.inner.read().as_ref().map(|llm| llm.name());
        f.debug_struct("LlmHandle").field("provider", &provider).finish()
    }
}
