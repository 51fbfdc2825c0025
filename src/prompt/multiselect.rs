//! Multi-selection prompts: flat and grouped
//!
//! Both kinds default to `required`, so an empty selection at submit time
//! keeps the engine in its error state instead of submitting. The grouped
//! variant presents header rows; picking a header stands for every leaf of
//! that group, but what is stored is always the flat leaf set.

use super::{
    option::{GroupedOpts, Opt},
    select::item_specs,
};
use crate::{
    backend::{ItemSpec, MultiSelectSpec, PromptBackend},
    error::{Error, Result},
    outcome::Outcome,
    session::Session,
};

fn push_unique<V: PartialEq>(selected: &mut Vec<V>, value: V) {
    if !selected.contains(&value) {
        selected.push(value);
    }
}

/// Builder for a flat multi selection.
pub struct MultiSelect<V> {
    message: String,
    options: Vec<Opt<V>>,
    initial_values: Vec<V>,
    required: bool,
    cursor_at: Option<V>,
}

impl<V: Clone + PartialEq> MultiSelect<V> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            options: Vec::new(),
            initial_values: Vec::new(),
            required: true,
            cursor_at: None,
        }
    }

    pub fn options(mut self, options: Vec<Opt<V>>) -> Self {
        self.options = options;
        self
    }

    pub fn option(mut self, option: Opt<V>) -> Self {
        self.options.push(option);
        self
    }

    /// Values pre-selected when the prompt opens.
    pub fn initial_values(mut self, values: Vec<V>) -> Self {
        self.initial_values = values;
        self
    }

    /// Whether an empty selection re-prompts instead of submitting.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Option the cursor starts on.
    pub fn cursor_at(mut self, value: V) -> Self {
        self.cursor_at = Some(value);
        self
    }

    fn spec(&self) -> Result<MultiSelectSpec> {
        if self.options.is_empty() {
            return Err(Error::InvalidConfig(
                "multi-select requires at least one option".to_string(),
            ));
        }
        let defaults = self
            .options
            .iter()
            .map(|option| self.initial_values.contains(&option.value))
            .collect();
        let cursor = self
            .cursor_at
            .as_ref()
            .and_then(|value| {
                self.options.iter().position(|option| &option.value == value)
            })
            .unwrap_or(0);
        Ok(MultiSelectSpec {
            message: self.message.clone(),
            items: item_specs(&self.options),
            defaults,
            required: self.required,
            cursor,
        })
    }

    /// Runs the prompt and applies the session's cancel policy, surfacing a
    /// cancellation as an observable outcome.
    pub fn run<B: PromptBackend>(self, session: &Session<B>) -> Result<Outcome<Vec<V>>> {
        let spec = self.spec()?;
        let outcome = session.backend().run_multi_select(&spec)?;
        let outcome = outcome.map(|indices| {
            let mut selected = Vec::new();
            for index in indices {
                push_unique(&mut selected, self.options[index].value.clone());
            }
            selected
        });
        session.settle(outcome)
    }

    /// Runs the prompt, propagating a cancellation as a typed failure.
    pub fn prompt<B: PromptBackend>(self, session: &Session<B>) -> Result<Vec<V>> {
        match self.run(session)? {
            Outcome::Value(values) => Ok(values),
            Outcome::Cancelled => Err(Error::Cancelled),
        }
    }

    /// Like [`MultiSelect::prompt`], transforming the selected values through
    /// a formatter. The formatter never sees a cancelled prompt.
    pub fn prompt_map<B: PromptBackend, R>(
        self,
        session: &Session<B>,
        format: impl FnOnce(Vec<V>) -> R,
    ) -> Result<R> {
        self.prompt(session).map(format)
    }
}

enum Row<'a, V> {
    Header(&'a str),
    Leaf(&'a Opt<V>),
}

/// Builder for a multi selection arranged under group headers.
pub struct GroupMultiSelect<V> {
    message: String,
    options: GroupedOpts<V>,
    initial_values: Vec<V>,
    required: bool,
    cursor_at: Option<V>,
}

impl<V: Clone + PartialEq> GroupMultiSelect<V> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            options: GroupedOpts::new(),
            initial_values: Vec::new(),
            required: true,
            cursor_at: None,
        }
    }

    pub fn options(mut self, options: GroupedOpts<V>) -> Self {
        self.options = options;
        self
    }

    /// Values pre-selected when the prompt opens.
    pub fn initial_values(mut self, values: Vec<V>) -> Self {
        self.initial_values = values;
        self
    }

    /// Whether an empty selection re-prompts instead of submitting.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Leaf option the cursor starts on.
    pub fn cursor_at(mut self, value: V) -> Self {
        self.cursor_at = Some(value);
        self
    }

    fn rows(&self) -> Vec<Row<'_, V>> {
        let mut rows = Vec::new();
        for (group, leaves) in self.options.iter() {
            rows.push(Row::Header(group));
            for option in leaves {
                rows.push(Row::Leaf(option));
            }
        }
        rows
    }

    fn spec(&self, rows: &[Row<'_, V>]) -> Result<MultiSelectSpec> {
        if self.options.is_empty() {
            return Err(Error::InvalidConfig(
                "grouped multi-select requires at least one group".to_string(),
            ));
        }
        let items = rows
            .iter()
            .map(|row| match row {
                Row::Header(group) => ItemSpec {
                    label: group.to_string(),
                    hint: None,
                    key: None,
                    header: true,
                },
                Row::Leaf(option) => ItemSpec {
                    label: option.label.clone(),
                    hint: option.hint.clone(),
                    key: None,
                    header: false,
                },
            })
            .collect();
        // Header rows start pre-selected exactly when their group is already
        // fully selected; the stored selection stays leaves-only either way.
        let defaults = rows
            .iter()
            .map(|row| match row {
                Row::Header(group) => {
                    self.options.is_group_selected(group, &self.initial_values)
                }
                Row::Leaf(option) => self.initial_values.contains(&option.value),
            })
            .collect();
        let cursor = self
            .cursor_at
            .as_ref()
            .and_then(|value| {
                rows.iter().position(
                    |row| matches!(row, Row::Leaf(option) if &option.value == value),
                )
            })
            .unwrap_or(0);
        Ok(MultiSelectSpec {
            message: self.message.clone(),
            items,
            defaults,
            required: self.required,
            cursor,
        })
    }

    /// Runs the prompt and applies the session's cancel policy, surfacing a
    /// cancellation as an observable outcome. A picked header expands to
    /// every leaf of its group.
    pub fn run<B: PromptBackend>(self, session: &Session<B>) -> Result<Outcome<Vec<V>>> {
        let rows = self.rows();
        let spec = self.spec(&rows)?;
        let outcome = session.backend().run_multi_select(&spec)?;
        let outcome = outcome.map(|indices| {
            let mut selected = Vec::new();
            for index in indices {
                match &rows[index] {
                    Row::Header(group) => {
                        if let Some(leaves) = self.options.get(group) {
                            for option in leaves {
                                push_unique(&mut selected, option.value.clone());
                            }
                        }
                    }
                    Row::Leaf(option) => push_unique(&mut selected, option.value.clone()),
                }
            }
            selected
        });
        session.settle(outcome)
    }

    /// Runs the prompt, propagating a cancellation as a typed failure.
    pub fn prompt<B: PromptBackend>(self, session: &Session<B>) -> Result<Vec<V>> {
        match self.run(session)? {
            Outcome::Value(values) => Ok(values),
            Outcome::Cancelled => Err(Error::Cancelled),
        }
    }

    /// Like [`GroupMultiSelect::prompt`], transforming the selected values
    /// through a formatter. The formatter never sees a cancelled prompt.
    pub fn prompt_map<B: PromptBackend, R>(
        self,
        session: &Session<B>,
        format: impl FnOnce(Vec<V>) -> R,
    ) -> Result<R> {
        self.prompt(session).map(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_select_defaults_to_required() {
        let spec = MultiSelect::new("Tools").option(Opt::of("cargo")).spec().unwrap();
        assert!(spec.required);
    }

    #[test]
    fn test_initial_values_become_defaults() {
        let spec = MultiSelect::new("Tools")
            .options(vec![Opt::of("cargo"), Opt::of("make"), Opt::of("just")])
            .initial_values(vec!["make"])
            .cursor_at("just")
            .spec()
            .unwrap();

        assert_eq!(spec.defaults, vec![false, true, false]);
        assert_eq!(spec.cursor, 2);
    }

    #[test]
    fn test_grouped_rows_interleave_headers_and_leaves() {
        let prompt = GroupMultiSelect::new("Tools").options(
            GroupedOpts::new()
                .group("build", vec![Opt::of("cargo"), Opt::of("make")])
                .group("test", vec![Opt::of("nextest")]),
        );
        let rows = prompt.rows();
        let spec = prompt.spec(&rows).unwrap();

        let labels: Vec<&str> =
            spec.items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["build", "cargo", "make", "test", "nextest"]);
        assert_eq!(
            spec.items.iter().map(|item| item.header).collect::<Vec<_>>(),
            vec![true, false, false, true, false]
        );
    }

    #[test]
    fn test_fully_selected_group_preselects_its_header() {
        let prompt = GroupMultiSelect::new("Tools")
            .options(
                GroupedOpts::new()
                    .group("build", vec![Opt::of("cargo"), Opt::of("make")])
                    .group("test", vec![Opt::of("nextest")]),
            )
            .initial_values(vec!["cargo", "make"]);
        let rows = prompt.rows();
        let spec = prompt.spec(&rows).unwrap();

        assert_eq!(spec.defaults, vec![true, true, true, false, false]);
    }
}
