//! Blocking console prompts: the confirmation and quantity collaborators.
//!
//! Delete and stock-movement flows block on the user's answer, mirroring the
//! admin page's `confirm()`/`prompt()` dialogs. The controller never sees
//! this trait — it only consumes the returned boolean/number.

use std::io::{self, BufRead, Write};

pub trait Prompts {
    /// Read one line of input; `None` on end of input.
    fn line(&mut self, prompt: &str) -> Option<String>;

    /// Yes/no confirmation; anything but an affirmative answer declines.
    fn confirm(&mut self, message: &str) -> bool {
        match self.line(&format!("{message} [s/N] ")) {
            Some(answer) => matches!(
                answer.trim().to_lowercase().as_str(),
                "s" | "si" | "sí" | "y" | "yes"
            ),
            None => false,
        }
    }

    /// Numeric quantity; `None` on end of input. Unparseable input becomes 0
    /// (as the page's `parseFloat(...) || 0` does) and is left for the
    /// controller to reject.
    fn quantity(&mut self, message: &str) -> Option<f64> {
        let answer = self.line(message)?;
        Some(answer.trim().parse::<f64>().unwrap_or(0.0))
    }
}

/// Prompts over stdin, echoing the prompt text to stdout.
#[derive(Debug, Default)]
pub struct StdinPrompts;

impl Prompts for StdinPrompts {
    fn line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}
