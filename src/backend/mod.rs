//! The prompt engine boundary
//!
//! This module defines the contract between the prompt adapters and the
//! collaborator that owns keystroke handling, raw-mode management and frame
//! rendering. The adapters never talk to a terminal directly; they build a
//! spec describing one prompt and hand it to a runner trait.
//!
//! The module is structured in layers:
//! - spec structs: immutable, per-invocation prompt descriptions
//! - runner traits: one abstract interface per prompt kind
//! - `term`: the concrete implementation on top of dialoguer

use crate::{error::Result, outcome::Outcome};

pub mod term;

/// Lifecycle states a prompt engine moves through while the human interacts
/// with it. Exposed to render callbacks only; the adapters never observe
/// intermediate states, they see the final [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Initial,
    Active,
    /// A validator rejected the current input; the engine re-prompts.
    Error,
    Submit,
    Cancel,
}

/// Validates candidate input. `Some(message)` keeps the prompt in its error
/// state and re-prompts; `None` lets the submit go through. A validation
/// failure is never surfaced as an `Err`.
pub type Validator = Box<dyn Fn(&str) -> Option<String>>;

/// Configuration for free-text input.
pub struct TextSpec {
    pub message: String,
    pub placeholder: Option<String>,
    /// Returned when the human submits an empty line.
    pub default_value: Option<String>,
    /// Pre-filled editable input.
    pub initial_value: Option<String>,
    pub validate: Option<Validator>,
}

/// Configuration for masked input.
pub struct PasswordSpec {
    pub message: String,
    /// Mask glyph; backends without custom masking may ignore it.
    pub mask: char,
    pub validate: Option<Validator>,
}

/// Configuration for a yes/no style confirmation.
pub struct ConfirmSpec {
    pub message: String,
    /// Label for the affirmative choice.
    pub active: String,
    /// Label for the negative choice.
    pub inactive: String,
    pub initial_value: bool,
}

/// One selectable row inside a selection prompt.
#[derive(Debug, Clone)]
pub struct ItemSpec {
    pub label: String,
    pub hint: Option<String>,
    /// Single-key shortcut, for the select-by-key prompt.
    pub key: Option<char>,
    /// Group header row inside a grouped multi-select.
    pub header: bool,
}

/// Configuration for single selection, with or without key shortcuts.
#[derive(Debug)]
pub struct SelectSpec {
    pub message: String,
    pub items: Vec<ItemSpec>,
    pub initial: Option<usize>,
}

/// Configuration for multi selection, flat or grouped.
pub struct MultiSelectSpec {
    pub message: String,
    pub items: Vec<ItemSpec>,
    /// Pre-selected state per item; same length as `items`.
    pub defaults: Vec<bool>,
    /// An empty selection at submit time re-prompts instead of submitting.
    pub required: bool,
    /// Initial cursor row.
    pub cursor: usize,
}

/// Submit-time check shared by the multi-select runners. `Some(message)`
/// means the engine must stay in its error state and re-prompt.
pub fn selection_error(required: bool, selected: usize) -> Option<String> {
    if required && selected == 0 {
        Some("Please select at least one option.".to_string())
    } else {
        None
    }
}

/// Abstract interface for free-text input.
pub trait TextRunner {
    fn run_text(&self, spec: &TextSpec) -> Result<Outcome<String>>;
}

/// Abstract interface for masked input.
pub trait PasswordRunner {
    fn run_password(&self, spec: &PasswordSpec) -> Result<Outcome<String>>;
}

/// Abstract interface for confirmations.
pub trait ConfirmRunner {
    fn run_confirm(&self, spec: &ConfirmSpec) -> Result<Outcome<bool>>;
}

/// Abstract interface for single selection; resolves to an item index.
pub trait SelectRunner {
    fn run_select(&self, spec: &SelectSpec) -> Result<Outcome<usize>>;
}

/// Abstract interface for single selection by key shortcut.
pub trait SelectKeyRunner {
    fn run_select_key(&self, spec: &SelectSpec) -> Result<Outcome<usize>>;
}

/// Abstract interface for multi selection; resolves to item indices.
pub trait MultiSelectRunner {
    fn run_multi_select(&self, spec: &MultiSelectSpec) -> Result<Outcome<Vec<usize>>>;
}

/// Combined interface that provides every prompt kind
pub trait PromptBackend:
    TextRunner
    + PasswordRunner
    + ConfirmRunner
    + SelectRunner
    + SelectKeyRunner
    + MultiSelectRunner
{
}

// Blanket implementation for any type that implements all runner interfaces
impl<T> PromptBackend for T where
    T: TextRunner
        + PasswordRunner
        + ConfirmRunner
        + SelectRunner
        + SelectKeyRunner
        + MultiSelectRunner
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_empty_selection_stays_in_error_state() {
        assert!(selection_error(true, 0).is_some());
    }

    #[test]
    fn test_selection_error_accepts_non_empty_or_optional() {
        assert_eq!(selection_error(true, 2), None);
        assert_eq!(selection_error(false, 0), None);
    }
}
