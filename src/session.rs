//! Prompt session: backend plus cancel-handling policy
//!
//! Every prompt runs against a [`Session`], which owns the backend and the
//! single cancel-handler slot. The slot replaces a process-global registry:
//! the handler travels with the session instead of hiding in static state,
//! while keeping the same semantics - the last registration wins and there is
//! no unregister.

use crate::{
    backend::{term::TermBackend, PromptBackend},
    error::{Error, Result},
    outcome::Outcome,
    output,
};

/// Context shared by every prompt and group in one interview.
pub struct Session<B = TermBackend> {
    backend: B,
    on_cancel: Option<Box<dyn Fn()>>,
}

impl Session<TermBackend> {
    /// Creates a session against the default terminal backend.
    pub fn new() -> Self {
        Self::with_backend(TermBackend::new())
    }
}

impl Default for Session<TermBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: PromptBackend> Session<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend, on_cancel: None }
    }

    /// Registers the cancel handler, replacing any previous one.
    ///
    /// The handler runs once for every cancelled prompt, before the
    /// cancellation is surfaced to the caller. It persists for the lifetime
    /// of the session.
    pub fn on_cancel<F: Fn() + 'static>(&mut self, handler: F) {
        self.on_cancel = Some(Box::new(handler));
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Applies the uniform post-run policy to a prompt outcome.
    ///
    /// A submitted value passes through untouched. A cancellation invokes the
    /// registered handler and is then surfaced so that a sequencer can
    /// observe it. Without a handler the cancellation is a hard, typed
    /// failure: resuming silently would hand an invalid value to application
    /// code.
    pub(crate) fn settle<T>(&self, outcome: Outcome<T>) -> Result<Outcome<T>> {
        match outcome {
            Outcome::Value(value) => Ok(Outcome::Value(value)),
            Outcome::Cancelled => match &self.on_cancel {
                Some(handler) => {
                    handler();
                    Ok(Outcome::Cancelled)
                }
                None => {
                    log::warn!("prompt cancelled with no cancel handler registered");
                    output::cancel(
                        "Cancel handler not registered. Call Session::on_cancel first.",
                    );
                    Err(Error::UnhandledCancel)
                }
            },
        }
    }
}
