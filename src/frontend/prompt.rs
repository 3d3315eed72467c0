//! Blocking alert and confirmation dialogs.

use std::io::{self, BufRead, Write};

pub trait Prompt: Send + Sync {
    /// Shows `message` and waits until it has been seen.
    fn alert(&self, message: &str);

    /// Asks a yes/no question; anything but an explicit yes is a no.
    fn confirm(&self, message: &str) -> bool;
}

/// Prompts on the terminal: alerts go to stdout, answers come from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt {
    /// Answer every confirmation with yes without asking.
    pub assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for TerminalPrompt {
    fn alert(&self, message: &str) {
        println!("{message}");
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
