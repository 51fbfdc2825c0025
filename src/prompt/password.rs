//! Masked input prompt

use crate::{
    backend::{PasswordSpec, PromptBackend, Validator},
    error::{Error, Result},
    outcome::Outcome,
    session::Session,
    theme,
};

/// Builder for a masked input prompt.
pub struct Password {
    message: String,
    mask: char,
    validate: Option<Validator>,
}

impl Password {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mask: theme::symbols().password_mask,
            validate: None,
        }
    }

    /// Mask glyph for backends that draw their own frames.
    pub fn mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    /// Rejects input with `Some(message)`; the engine re-prompts.
    pub fn validate<F>(mut self, validate: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.validate = Some(Box::new(validate));
        self
    }

    fn spec(self) -> PasswordSpec {
        PasswordSpec { message: self.message, mask: self.mask, validate: self.validate }
    }

    /// Runs the prompt and applies the session's cancel policy, surfacing a
    /// cancellation as an observable outcome.
    pub fn run<B: PromptBackend>(self, session: &Session<B>) -> Result<Outcome<String>> {
        let outcome = session.backend().run_password(&self.spec())?;
        session.settle(outcome)
    }

    /// Runs the prompt, propagating a cancellation as a typed failure.
    pub fn prompt<B: PromptBackend>(self, session: &Session<B>) -> Result<String> {
        match self.run(session)? {
            Outcome::Value(value) => Ok(value),
            Outcome::Cancelled => Err(Error::Cancelled),
        }
    }

    /// Like [`Password::prompt`], transforming the submitted value through a
    /// formatter. The formatter never sees a cancelled prompt.
    pub fn prompt_map<B: PromptBackend, R>(
        self,
        session: &Session<B>,
        format: impl FnOnce(String) -> R,
    ) -> Result<R> {
        self.prompt(session).map(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_carries_mask_and_validator() {
        let spec = Password::new("Token")
            .mask('#')
            .validate(|input| (input.len() < 8).then(|| "Too short.".to_string()))
            .spec();

        assert_eq!(spec.message, "Token");
        assert_eq!(spec.mask, '#');
        let validate = spec.validate.expect("validator");
        assert_eq!(validate("short"), Some("Too short.".to_string()));
        assert_eq!(validate("long enough"), None);
    }
}
