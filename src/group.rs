//! Ordered prompt sequencing
//!
//! A group runs named steps one at a time, in declaration order, threading
//! the growing result map into each subsequent step. A cancelled step does
//! not abort the sequence when the group has a recovery hook: the step is
//! recorded as `"canceled"`, the hook observes the partial map and the next
//! step runs. Errors are different - any step error propagates unmodified
//! and the partial map is discarded.

use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    backend::{term::TermBackend, PromptBackend},
    error::{Error, Result},
    outcome::Outcome,
    session::Session,
};

/// Literal recorded for a cancelled step when the group has a recovery hook.
pub const CANCELED: &str = "canceled";

type Step<'a, B> =
    Box<dyn FnMut(&Session<B>, &GroupResults) -> Result<Outcome<Value>> + 'a>;
type RecoveryHook<'a> = Box<dyn FnMut(&GroupResults) + 'a>;

/// Accumulated results of a group run, keyed by step name in declaration
/// order. A written key is never overwritten.
#[derive(Debug, Default)]
pub struct GroupResults {
    entries: IndexMap<String, Outcome<Value>>,
}

impl GroupResults {
    /// The step's submitted value, if the step ran and was not cancelled.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.entries.get(name) {
            Some(Outcome::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// The step's raw outcome, if the step ran.
    pub fn outcome(&self, name: &str) -> Option<&Outcome<Value>> {
        self.entries.get(name)
    }

    pub fn is_cancelled(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(Outcome::Cancelled))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The results as a JSON object; cancelled steps become `null`.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (name, outcome) in &self.entries {
            let value = match outcome {
                Outcome::Value(value) => value.clone(),
                Outcome::Cancelled => Value::Null,
            };
            map.insert(name.clone(), value);
        }
        Value::Object(map)
    }

    fn insert(&mut self, name: String, outcome: Outcome<Value>) {
        self.entries.entry(name).or_insert(outcome);
    }
}

/// Builder for an ordered, named sequence of prompt steps.
pub struct Group<'a, B = TermBackend> {
    session: &'a Session<B>,
    steps: Vec<(String, Step<'a, B>)>,
    on_cancel: Option<RecoveryHook<'a>>,
}

impl<'a, B: PromptBackend> Group<'a, B> {
    pub fn new(session: &'a Session<B>) -> Self {
        Self { session, steps: Vec::new(), on_cancel: None }
    }

    /// Appends a named step. The step observes the results accumulated so
    /// far - never its own future key - and resolves to a value or a
    /// cancellation.
    pub fn step<F>(mut self, name: impl Into<String>, step: F) -> Self
    where
        F: FnMut(&Session<B>, &GroupResults) -> Result<Outcome<Value>> + 'a,
    {
        self.steps.push((name.into(), Box::new(step)));
        self
    }

    /// Installs the recovery hook invoked whenever a step is cancelled. With
    /// a hook in place the sequence continues past cancelled steps; the hook
    /// decides per group what to do with the partial results.
    pub fn on_cancel<F: FnMut(&GroupResults) + 'a>(mut self, hook: F) -> Self {
        self.on_cancel = Some(Box::new(hook));
        self
    }

    /// Runs every step in declaration order and returns the completed map.
    pub fn run(self) -> Result<GroupResults> {
        let Group { session, steps, mut on_cancel } = self;

        {
            let mut seen = std::collections::HashSet::new();
            for (name, _) in &steps {
                if !seen.insert(name.as_str()) {
                    return Err(Error::InvalidConfig(format!(
                        "duplicate group step name '{name}'"
                    )));
                }
            }
        }

        let mut results = GroupResults::default();
        for (name, mut step) in steps {
            match step(session, &results)? {
                Outcome::Cancelled => {
                    log::debug!("group step '{name}' was cancelled");
                    match on_cancel.as_mut() {
                        Some(hook) => {
                            results.insert(
                                name,
                                Outcome::Value(Value::String(CANCELED.to_string())),
                            );
                            hook(&results);
                        }
                        None => results.insert(name, Outcome::Cancelled),
                    }
                }
                Outcome::Value(value) => results.insert(name, Outcome::Value(value)),
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_written_keys_are_never_overwritten() {
        let mut results = GroupResults::default();
        results.insert("name".to_string(), Outcome::Value(json!("first")));
        results.insert("name".to_string(), Outcome::Value(json!("second")));
        assert_eq!(results.get("name"), Some(&json!("first")));
    }

    #[test]
    fn test_to_json_replaces_cancellations_with_null() {
        let mut results = GroupResults::default();
        results.insert("name".to_string(), Outcome::Value(json!("Ann")));
        results.insert("token".to_string(), Outcome::Cancelled);
        assert_eq!(results.to_json(), json!({ "name": "Ann", "token": null }));
    }

    #[test]
    fn test_get_hides_cancelled_steps() {
        let mut results = GroupResults::default();
        results.insert("token".to_string(), Outcome::Cancelled);
        assert_eq!(results.get("token"), None);
        assert!(results.is_cancelled("token"));
        assert_eq!(results.outcome("token"), Some(&Outcome::Cancelled));
    }
}
