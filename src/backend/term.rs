//! Dialoguer-based implementation of the runner interfaces
//!
//! This module provides the concrete prompt engine used by default: each
//! runner maps its spec onto a dialoguer widget. Dismissal comes back in two
//! shapes depending on the widget: `Esc` resolves `interact_opt` to `None`,
//! and `Ctrl-C` surfaces as an interrupted read. Both become
//! [`Outcome::Cancelled`].

use std::io;

use console::{style, Key, Term};
use dialoguer::{Confirm, Input, MultiSelect, Password, Select};

use super::{
    selection_error, ConfirmSpec, ItemSpec, MultiSelectSpec, PasswordSpec, SelectSpec,
    State, TextSpec,
};
use crate::{error::Result, outcome::Outcome, theme};

/// Dialoguer-based implementation of every runner interface
pub struct TermBackend;

impl TermBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TermBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps an interrupted read (`Ctrl-C`) to a cancellation.
fn interrupted<T>(result: dialoguer::Result<T>) -> Result<Outcome<T>> {
    match result {
        Ok(value) => Ok(Outcome::Value(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
            Ok(Outcome::Cancelled)
        }
        Err(err) => Err(err.into()),
    }
}

/// Maps `Esc` (`interact_opt` returning `None`) and `Ctrl-C` to a cancellation.
fn escapable<T>(result: dialoguer::Result<Option<T>>) -> Result<Outcome<T>> {
    match result {
        Ok(Some(value)) => Ok(Outcome::Value(value)),
        Ok(None) => Ok(Outcome::Cancelled),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
            Ok(Outcome::Cancelled)
        }
        Err(err) => Err(err.into()),
    }
}

fn item_label(item: &ItemSpec) -> String {
    let mut label = if item.header {
        style(item.label.as_str()).bold().to_string()
    } else {
        item.label.clone()
    };
    if let Some(hint) = &item.hint {
        label = format!("{label} {}", style(format!("({hint})")).dim());
    }
    label
}

fn prompt_line(message: &str, placeholder: Option<&str>) -> String {
    match placeholder {
        Some(placeholder) if !placeholder.is_empty() => {
            format!("{message} {}", style(format!("({placeholder})")).dim())
        }
        _ => message.to_string(),
    }
}

fn report_error(message: &str) -> Result<()> {
    let symbols = theme::symbols();
    Term::stderr().write_line(&format!(
        "{}  {}",
        style(symbols.step_error).yellow(),
        style(message).yellow()
    ))?;
    Ok(())
}

impl super::TextRunner for TermBackend {
    fn run_text(&self, spec: &TextSpec) -> Result<Outcome<String>> {
        let mut input = Input::<String>::new()
            .with_prompt(prompt_line(&spec.message, spec.placeholder.as_deref()));

        if let Some(default_value) = &spec.default_value {
            input = input.default(default_value.clone());
        }
        if let Some(initial_value) = &spec.initial_value {
            input = input.with_initial_text(initial_value.clone());
        }
        if let Some(validate) = &spec.validate {
            input = input.validate_with(|candidate: &String| -> std::result::Result<(), String> {
                match validate(candidate) {
                    Some(message) => Err(message),
                    None => Ok(()),
                }
            });
        }

        interrupted(input.interact_text())
    }
}

impl super::PasswordRunner for TermBackend {
    // dialoguer masks with its own glyph; `spec.mask` is for rendering
    // backends that draw their own frames.
    fn run_password(&self, spec: &PasswordSpec) -> Result<Outcome<String>> {
        loop {
            let entered = interrupted(
                Password::new()
                    .with_prompt(spec.message.as_str())
                    .allow_empty_password(true)
                    .interact(),
            )?;

            let value = match entered {
                Outcome::Value(value) => value,
                Outcome::Cancelled => return Ok(Outcome::Cancelled),
            };

            if let Some(validate) = &spec.validate {
                if let Some(message) = validate(&value) {
                    report_error(&message)?;
                    continue;
                }
            }

            return Ok(Outcome::Value(value));
        }
    }
}

impl super::ConfirmRunner for TermBackend {
    fn run_confirm(&self, spec: &ConfirmSpec) -> Result<Outcome<bool>> {
        let message = if spec.active == "Yes" && spec.inactive == "No" {
            spec.message.clone()
        } else {
            format!(
                "{} {}",
                spec.message,
                style(format!("({} / {})", spec.active, spec.inactive)).dim()
            )
        };

        escapable(
            Confirm::new()
                .with_prompt(message)
                .default(spec.initial_value)
                .interact_opt(),
        )
    }
}

impl super::SelectRunner for TermBackend {
    fn run_select(&self, spec: &SelectSpec) -> Result<Outcome<usize>> {
        let labels: Vec<String> = spec.items.iter().map(item_label).collect();

        escapable(
            Select::new()
                .with_prompt(spec.message.as_str())
                .items(&labels)
                .default(spec.initial.unwrap_or(0))
                .interact_opt(),
        )
    }
}

impl super::SelectKeyRunner for TermBackend {
    fn run_select_key(&self, spec: &SelectSpec) -> Result<Outcome<usize>> {
        let symbols = theme::symbols();
        let term = Term::stderr();

        term.write_line(&format!(
            "{}  {}",
            theme::step_symbol(State::Active),
            spec.message
        ))?;
        for item in &spec.items {
            let badge = item.key.map(|key| format!(" {key} ")).unwrap_or_default();
            term.write_line(&format!(
                "{}  {} {}",
                style(symbols.bar).cyan(),
                style(badge).reverse(),
                item_label(item)
            ))?;
        }

        loop {
            match term.read_key() {
                Ok(Key::Escape) => return Ok(Outcome::Cancelled),
                Ok(Key::Char(pressed)) => {
                    if let Some(index) =
                        spec.items.iter().position(|item| item.key == Some(pressed))
                    {
                        term.write_line(&format!(
                            "{}  {}",
                            style(symbols.bar_end).cyan(),
                            style(spec.items[index].label.as_str()).dim()
                        ))?;
                        return Ok(Outcome::Value(index));
                    }
                }
                Ok(_) => {}
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                    return Ok(Outcome::Cancelled)
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl super::MultiSelectRunner for TermBackend {
    // dialoguer has no cursor positioning for multi-select; `spec.cursor` is
    // for rendering backends that draw their own frames.
    fn run_multi_select(&self, spec: &MultiSelectSpec) -> Result<Outcome<Vec<usize>>> {
        let labels: Vec<String> = spec.items.iter().map(item_label).collect();

        loop {
            let picked = escapable(
                MultiSelect::new()
                    .with_prompt(spec.message.as_str())
                    .items(&labels)
                    .defaults(&spec.defaults)
                    .interact_opt(),
            )?;

            let indices = match picked {
                Outcome::Value(indices) => indices,
                Outcome::Cancelled => return Ok(Outcome::Cancelled),
            };

            match selection_error(spec.required, indices.len()) {
                Some(message) => report_error(&message)?,
                None => return Ok(Outcome::Value(indices)),
            }
        }
    }
}
