//! Thread-backed progress spinner
//!
//! Cosmetic only: the spinner shares the output frame but never touches
//! prompt control flow. `start` spawns a draw thread, `stop` signals it,
//! joins it and rewrites the line with the submit glyph.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use console::{style, Term};

use crate::theme;

pub struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

/// Creates an idle spinner.
pub fn spinner() -> Spinner {
    Spinner::new()
}

impl Spinner {
    pub fn new() -> Self {
        Self { running: Arc::new(AtomicBool::new(false)), handle: None }
    }

    /// Starts drawing. Trailing dots in the message are replaced by the
    /// animated ellipsis.
    pub fn start(&mut self, message: &str) {
        self.halt();

        let symbols = theme::symbols();
        let message = message.trim_end_matches('.').to_string();
        let running = Arc::clone(&self.running);
        running.store(true, Ordering::SeqCst);

        let term = Term::stderr();
        let _ = term.write_line(&style(symbols.bar).dim().to_string());

        let frames = symbols.spin_frames;
        let delay = Duration::from_millis(symbols.spin_delay_ms);
        self.handle = Some(thread::spawn(move || {
            let term = Term::stderr();
            let mut tick = 0usize;
            while running.load(Ordering::SeqCst) {
                let frame = frames[tick % frames.len()];
                let dots = ".".repeat((tick / frames.len()) % 4);
                let _ = term.clear_line();
                let _ = term
                    .write_str(&format!("{}  {message}{dots}", style(frame).magenta()));
                tick += 1;
                thread::sleep(delay);
            }
            let _ = term.clear_line();
        }));
    }

    /// Stops drawing and rewrites the line with a final message.
    pub fn stop(&mut self, message: &str) {
        self.halt();
        let symbols = theme::symbols();
        let term = Term::stderr();
        let _ = term.write_line(&format!(
            "{}  {message}",
            style(symbols.step_submit).green()
        ));
    }

    fn halt(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.halt();
    }
}
