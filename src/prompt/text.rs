//! Free-text input prompt

use crate::{
    backend::{PromptBackend, TextSpec, Validator},
    error::{Error, Result},
    outcome::Outcome,
    session::Session,
};

/// Builder for a free-text prompt.
pub struct Text {
    message: String,
    placeholder: Option<String>,
    default_value: Option<String>,
    initial_value: Option<String>,
    validate: Option<Validator>,
}

impl Text {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            placeholder: None,
            default_value: None,
            initial_value: None,
            validate: None,
        }
    }

    /// Ghost text shown while the input is empty.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Value returned when the human submits an empty line.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Pre-filled editable input.
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
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

    fn spec(self) -> TextSpec {
        TextSpec {
            message: self.message,
            placeholder: self.placeholder,
            default_value: self.default_value,
            initial_value: self.initial_value,
            validate: self.validate,
        }
    }

    /// Runs the prompt and applies the session's cancel policy, surfacing a
    /// cancellation as an observable outcome.
    pub fn run<B: PromptBackend>(self, session: &Session<B>) -> Result<Outcome<String>> {
        let outcome = session.backend().run_text(&self.spec())?;
        session.settle(outcome)
    }

    /// Runs the prompt, propagating a cancellation as a typed failure.
    pub fn prompt<B: PromptBackend>(self, session: &Session<B>) -> Result<String> {
        match self.run(session)? {
            Outcome::Value(value) => Ok(value),
            Outcome::Cancelled => Err(Error::Cancelled),
        }
    }

    /// Like [`Text::prompt`], transforming the submitted value through a
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
    fn test_spec_carries_configuration() {
        let spec = Text::new("Name")
            .placeholder("my-app")
            .default_value("demo")
            .initial_value("dem")
            .validate(|input| input.is_empty().then(|| "Required.".to_string()))
            .spec();

        assert_eq!(spec.message, "Name");
        assert_eq!(spec.placeholder.as_deref(), Some("my-app"));
        assert_eq!(spec.default_value.as_deref(), Some("demo"));
        assert_eq!(spec.initial_value.as_deref(), Some("dem"));
        let validate = spec.validate.expect("validator");
        assert_eq!(validate(""), Some("Required.".to_string()));
        assert_eq!(validate("x"), None);
    }
}
