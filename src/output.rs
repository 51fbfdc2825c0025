//! Framed auxiliary output
//!
//! Banner and log helpers that share the prompt frame: a dim vertical bar
//! down the left edge, opened by [`intro`] and closed by [`outro`]. None of
//! these affect prompt control flow.

use console::{measure_text_width, style};

use crate::theme;

/// Opens the frame with a title.
pub fn intro(title: &str) {
    let symbols = theme::symbols();
    println!("{}  {}", style(symbols.bar_start).dim(), title);
}

/// Closes the frame with a final message.
pub fn outro(message: &str) {
    let symbols = theme::symbols();
    println!(
        "{}\n{}  {}\n",
        style(symbols.bar).dim(),
        style(symbols.bar_end).dim(),
        message
    );
}

/// Closes the frame with a dismissal banner.
pub fn cancel(message: &str) {
    let symbols = theme::symbols();
    println!("{}  {}\n", style(symbols.bar_end).dim(), style(message).red());
}

/// Prints a titled box attached to the frame.
pub fn note(message: &str, title: &str) {
    let symbols = theme::symbols();

    let mut lines: Vec<&str> = vec![""];
    lines.extend(message.lines());
    lines.push("");

    let width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0)
        .max(measure_text_width(title))
        + 2;

    println!(
        "{}\n{}  {} {}",
        style(symbols.bar).dim(),
        style(symbols.step_submit).green(),
        title,
        style(format!(
            "{}{}",
            symbols.bar_h.repeat(width.saturating_sub(measure_text_width(title) + 1)),
            symbols.corner_top_right
        ))
        .dim()
    );
    for line in &lines {
        println!(
            "{}  {}{}{}",
            style(symbols.bar).dim(),
            style(*line).dim(),
            " ".repeat(width - measure_text_width(line)),
            style(symbols.bar).dim()
        );
    }
    println!(
        "{}",
        style(format!(
            "{}{}{}",
            symbols.connect_left,
            symbols.bar_h.repeat(width + 2),
            symbols.corner_bottom_right
        ))
        .dim()
    );
}

/// Log-style single messages attached to the frame.
pub mod log {
    use console::style;

    use crate::theme;

    /// Prints a message under the frame bar with a leading symbol.
    pub fn message(text: &str, symbol: &str) {
        let symbols = theme::symbols();
        let mut parts = vec![style(symbols.bar).dim().to_string()];
        if !text.is_empty() {
            let mut lines = text.lines();
            if let Some(first) = lines.next() {
                parts.push(format!("{symbol}  {first}"));
            }
            for line in lines {
                parts.push(format!("{}  {line}", style(symbols.bar).dim()));
            }
        }
        println!("{}", parts.join("\n"));
    }

    pub fn info(text: &str) {
        message(text, &style(theme::symbols().info).blue().to_string());
    }

    pub fn success(text: &str) {
        message(text, &style(theme::symbols().success).green().to_string());
    }

    pub fn step(text: &str) {
        message(text, &style(theme::symbols().step_submit).green().to_string());
    }

    pub fn warn(text: &str) {
        message(text, &style(theme::symbols().warn).yellow().to_string());
    }

    /// Alias for [`warn`].
    pub fn warning(text: &str) {
        warn(text);
    }

    pub fn error(text: &str) {
        message(text, &style(theme::symbols().error).red().to_string());
    }
}
