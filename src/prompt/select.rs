//! Single-selection prompts: by cursor and by key shortcut

use super::option::Opt;
use crate::{
    backend::{ItemSpec, PromptBackend, SelectSpec},
    error::{Error, Result},
    outcome::Outcome,
    session::Session,
};

pub(super) fn item_specs<V>(options: &[Opt<V>]) -> Vec<ItemSpec> {
    options
        .iter()
        .map(|option| ItemSpec {
            label: option.label.clone(),
            hint: option.hint.clone(),
            key: None,
            header: false,
        })
        .collect()
}

fn keyed_item_specs<V: ToString>(options: &[Opt<V>]) -> Result<Vec<ItemSpec>> {
    options
        .iter()
        .map(|option| {
            let shortcut = option.value.to_string();
            let mut chars = shortcut.chars();
            let key = match (chars.next(), chars.next()) {
                (Some(key), None) => key,
                _ => {
                    return Err(Error::InvalidConfig(format!(
                        "select key option '{shortcut}' must be a single character"
                    )))
                }
            };
            Ok(ItemSpec {
                label: option.label.clone(),
                hint: option.hint.clone(),
                key: Some(key),
                header: false,
            })
        })
        .collect()
}

/// Builder for a cursor-driven single selection.
pub struct Select<V> {
    message: String,
    options: Vec<Opt<V>>,
    initial_value: Option<V>,
}

impl<V: Clone + PartialEq> Select<V> {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), options: Vec::new(), initial_value: None }
    }

    pub fn options(mut self, options: Vec<Opt<V>>) -> Self {
        self.options = options;
        self
    }

    pub fn option(mut self, option: Opt<V>) -> Self {
        self.options.push(option);
        self
    }

    /// Option the cursor starts on.
    pub fn initial_value(mut self, value: V) -> Self {
        self.initial_value = Some(value);
        self
    }

    fn spec(&self) -> Result<SelectSpec> {
        if self.options.is_empty() {
            return Err(Error::InvalidConfig(
                "select requires at least one option".to_string(),
            ));
        }
        let initial = self.initial_value.as_ref().and_then(|value| {
            self.options.iter().position(|option| &option.value == value)
        });
        Ok(SelectSpec {
            message: self.message.clone(),
            items: item_specs(&self.options),
            initial,
        })
    }

    /// Runs the prompt and applies the session's cancel policy, surfacing a
    /// cancellation as an observable outcome.
    pub fn run<B: PromptBackend>(self, session: &Session<B>) -> Result<Outcome<V>> {
        let spec = self.spec()?;
        let outcome = session.backend().run_select(&spec)?;
        let outcome = outcome.map(|index| self.options[index].value.clone());
        session.settle(outcome)
    }

    /// Runs the prompt, propagating a cancellation as a typed failure.
    pub fn prompt<B: PromptBackend>(self, session: &Session<B>) -> Result<V> {
        match self.run(session)? {
            Outcome::Value(value) => Ok(value),
            Outcome::Cancelled => Err(Error::Cancelled),
        }
    }

    /// Like [`Select::prompt`], transforming the selected value through a
    /// formatter. The formatter never sees a cancelled prompt.
    pub fn prompt_map<B: PromptBackend, R>(
        self,
        session: &Session<B>,
        format: impl FnOnce(V) -> R,
    ) -> Result<R> {
        self.prompt(session).map(format)
    }
}

/// Builder for a single selection driven by one-key shortcuts.
///
/// Each option's value doubles as its shortcut, so values must render to a
/// single character.
pub struct SelectKey<V> {
    message: String,
    options: Vec<Opt<V>>,
}

impl<V: Clone + ToString> SelectKey<V> {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), options: Vec::new() }
    }

    pub fn options(mut self, options: Vec<Opt<V>>) -> Self {
        self.options = options;
        self
    }

    pub fn option(mut self, option: Opt<V>) -> Self {
        self.options.push(option);
        self
    }

    fn spec(&self) -> Result<SelectSpec> {
        if self.options.is_empty() {
            return Err(Error::InvalidConfig(
                "select requires at least one option".to_string(),
            ));
        }
        Ok(SelectSpec {
            message: self.message.clone(),
            items: keyed_item_specs(&self.options)?,
            initial: None,
        })
    }

    /// Runs the prompt and applies the session's cancel policy, surfacing a
    /// cancellation as an observable outcome.
    pub fn run<B: PromptBackend>(self, session: &Session<B>) -> Result<Outcome<V>> {
        let spec = self.spec()?;
        let outcome = session.backend().run_select_key(&spec)?;
        let outcome = outcome.map(|index| self.options[index].value.clone());
        session.settle(outcome)
    }

    /// Runs the prompt, propagating a cancellation as a typed failure.
    pub fn prompt<B: PromptBackend>(self, session: &Session<B>) -> Result<V> {
        match self.run(session)? {
            Outcome::Value(value) => Ok(value),
            Outcome::Cancelled => Err(Error::Cancelled),
        }
    }

    /// Like [`SelectKey::prompt`], transforming the selected value through a
    /// formatter. The formatter never sees a cancelled prompt.
    pub fn prompt_map<B: PromptBackend, R>(
        self,
        session: &Session<B>,
        format: impl FnOnce(V) -> R,
    ) -> Result<R> {
        self.prompt(session).map(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_resolves_initial_cursor() {
        let spec = Select::new("Flavor")
            .option(Opt::new("ts", "TypeScript"))
            .option(Opt::new("js", "JavaScript").hint("legacy"))
            .initial_value("js")
            .spec()
            .unwrap();

        assert_eq!(spec.initial, Some(1));
        assert_eq!(spec.items[1].hint.as_deref(), Some("legacy"));
    }

    #[test]
    fn test_empty_options_are_rejected() {
        let err = Select::<&str>::new("Flavor").spec().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_select_key_derives_shortcuts_from_values() {
        let spec = SelectKey::new("Continue?")
            .option(Opt::new("y", "Yes"))
            .option(Opt::new("n", "No"))
            .spec()
            .unwrap();

        assert_eq!(spec.items[0].key, Some('y'));
        assert_eq!(spec.items[1].key, Some('n'));
    }

    #[test]
    fn test_select_key_rejects_multi_character_values() {
        let err = SelectKey::new("Continue?")
            .option(Opt::new("yes", "Yes"))
            .spec()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
