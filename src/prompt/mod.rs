//! Single-prompt adapters
//!
//! One builder per prompt kind, each applying the same post-run policy: run
//! the engine, hand the outcome to the session's cancel handling, then either
//! surface the cancellation or return the submitted value (optionally through
//! a formatter).
//!
//! The module is structured in layers:
//! - `option`: selectable options and group arrangements
//! - one module per prompt kind wrapping the runner interfaces in `backend`

pub mod confirm;
pub mod multiselect;
pub mod option;
pub mod password;
pub mod select;
pub mod text;

pub use confirm::Confirm;
pub use multiselect::{GroupMultiSelect, MultiSelect};
pub use option::{GroupedOpts, Opt};
pub use password::Password;
pub use select::{Select, SelectKey};
pub use text::Text;
