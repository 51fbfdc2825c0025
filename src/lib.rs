/// The prompt engine boundary and its dialoguer implementation.
pub mod backend;

/// Defines custom error types.
pub mod error;

/// Ordered prompt sequencing with partial-result recovery.
pub mod group;

/// Cancellation-aware prompt results.
pub mod outcome;

/// Framed auxiliary output: banners, notes and log lines.
pub mod output;

/// Single-prompt adapters for each prompt kind.
pub mod prompt;

/// Prompt session: backend plus cancel-handling policy.
pub mod session;

/// Thread-backed progress spinner.
pub mod spinner;

/// Symbols and state styling for framed output.
pub mod theme;

pub use backend::term::TermBackend;
pub use error::{Error, Result};
pub use group::{Group, GroupResults, CANCELED};
pub use outcome::Outcome;
pub use prompt::{
    Confirm, GroupMultiSelect, GroupedOpts, MultiSelect, Opt, Password, Select,
    SelectKey, Text,
};
pub use session::Session;
pub use spinner::{spinner, Spinner};
