//! Yes/no confirmation prompt

use crate::{
    backend::{ConfirmSpec, PromptBackend},
    error::{Error, Result},
    outcome::Outcome,
    session::Session,
};

/// Builder for a confirmation prompt.
pub struct Confirm {
    message: String,
    active: String,
    inactive: String,
    initial_value: bool,
}

impl Confirm {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            active: "Yes".to_string(),
            inactive: "No".to_string(),
            initial_value: true,
        }
    }

    /// Label for the affirmative choice.
    pub fn active(mut self, label: impl Into<String>) -> Self {
        self.active = label.into();
        self
    }

    /// Label for the negative choice.
    pub fn inactive(mut self, label: impl Into<String>) -> Self {
        self.inactive = label.into();
        self
    }

    pub fn initial_value(mut self, value: bool) -> Self {
        self.initial_value = value;
        self
    }

    fn spec(self) -> ConfirmSpec {
        ConfirmSpec {
            message: self.message,
            active: self.active,
            inactive: self.inactive,
            initial_value: self.initial_value,
        }
    }

    /// Runs the prompt and applies the session's cancel policy, surfacing a
    /// cancellation as an observable outcome.
    pub fn run<B: PromptBackend>(self, session: &Session<B>) -> Result<Outcome<bool>> {
        let outcome = session.backend().run_confirm(&self.spec())?;
        session.settle(outcome)
    }

    /// Runs the prompt, propagating a cancellation as a typed failure.
    pub fn prompt<B: PromptBackend>(self, session: &Session<B>) -> Result<bool> {
        match self.run(session)? {
            Outcome::Value(value) => Ok(value),
            Outcome::Cancelled => Err(Error::Cancelled),
        }
    }

    /// Like [`Confirm::prompt`], transforming the submitted value through a
    /// formatter. The formatter never sees a cancelled prompt.
    pub fn prompt_map<B: PromptBackend, R>(
        self,
        session: &Session<B>,
        format: impl FnOnce(bool) -> R,
    ) -> Result<R> {
        self.prompt(session).map(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_affirmative_yes_no() {
        let spec = Confirm::new("Continue?").spec();
        assert_eq!(spec.active, "Yes");
        assert_eq!(spec.inactive, "No");
        assert!(spec.initial_value);
    }

    #[test]
    fn test_custom_labels() {
        let spec =
            Confirm::new("Deploy?").active("Ship it").inactive("Hold").initial_value(false).spec();
        assert_eq!(spec.active, "Ship it");
        assert_eq!(spec.inactive, "Hold");
        assert!(!spec.initial_value);
    }
}
