//! Symbols and state styling for framed terminal output
//!
//! The glyph table is picked once per process: box-drawing characters when
//! the environment advertises a UTF-8 capable terminal, ASCII fallbacks
//! otherwise.

use std::sync::OnceLock;

use console::{style, StyledObject};

use crate::backend::State;

/// Glyphs used by the framed output and the default renderers.
pub struct Symbols {
    pub bar_start: &'static str,
    pub bar: &'static str,
    pub bar_end: &'static str,
    pub bar_h: &'static str,

    pub step_active: &'static str,
    pub step_cancel: &'static str,
    pub step_error: &'static str,
    pub step_submit: &'static str,

    pub radio_active: &'static str,
    pub radio_inactive: &'static str,
    pub checkbox_active: &'static str,
    pub checkbox_selected: &'static str,
    pub checkbox_inactive: &'static str,
    pub password_mask: char,

    pub corner_top_right: &'static str,
    pub connect_left: &'static str,
    pub corner_bottom_right: &'static str,

    pub info: &'static str,
    pub success: &'static str,
    pub warn: &'static str,
    pub error: &'static str,

    pub spin_frames: &'static [&'static str],
    pub spin_delay_ms: u64,
}

const UNICODE: Symbols = Symbols {
    bar_start: "┌",
    bar: "│",
    bar_end: "└",
    bar_h: "─",
    step_active: "◆",
    step_cancel: "■",
    step_error: "▲",
    step_submit: "◇",
    radio_active: "●",
    radio_inactive: "○",
    checkbox_active: "◻",
    checkbox_selected: "◼",
    checkbox_inactive: "◻",
    password_mask: '▪',
    corner_top_right: "╮",
    connect_left: "├",
    corner_bottom_right: "╯",
    info: "●",
    success: "◆",
    warn: "▲",
    error: "■",
    spin_frames: &["◒", "◐", "◓", "◑"],
    spin_delay_ms: 80,
};

const ASCII: Symbols = Symbols {
    bar_start: "T",
    bar: "|",
    bar_end: "-",
    bar_h: "-",
    step_active: "*",
    step_cancel: "x",
    step_error: "x",
    step_submit: "o",
    radio_active: ">",
    radio_inactive: " ",
    checkbox_active: "[.]",
    checkbox_selected: "[+]",
    checkbox_inactive: "[ ]",
    password_mask: '*',
    corner_top_right: "+",
    connect_left: "+",
    corner_bottom_right: "+",
    info: ".",
    success: "*",
    warn: "!",
    error: "x",
    spin_frames: &[".", "o", "O", "0"],
    spin_delay_ms: 120,
};

fn unicode_supported() -> bool {
    if cfg!(windows) {
        return std::env::var_os("WT_SESSION").is_some()
            || std::env::var("TERM_PROGRAM").is_ok_and(|term| term == "vscode");
    }

    ["LC_ALL", "LC_CTYPE", "LANG"].iter().any(|name| {
        std::env::var(name).is_ok_and(|value| value.to_uppercase().contains("UTF"))
    })
}

/// The glyph table for this process.
pub fn symbols() -> &'static Symbols {
    static SYMBOLS: OnceLock<&'static Symbols> = OnceLock::new();
    SYMBOLS.get_or_init(|| if unicode_supported() { &UNICODE } else { &ASCII })
}

/// Colored step glyph for a prompt engine state.
pub fn step_symbol(state: State) -> StyledObject<&'static str> {
    let symbols = symbols();
    match state {
        State::Initial | State::Active => style(symbols.step_active).cyan(),
        State::Cancel => style(symbols.step_cancel).red(),
        State::Error => style(symbols.step_error).yellow(),
        State::Submit => style(symbols.step_submit).green(),
    }
}
