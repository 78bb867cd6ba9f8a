//! stdin/stdout prompter.

use std::io::{self, BufRead, Write};

use bmsget_core::Prompter;

/// Blocking line-oriented prompts on the controlling terminal.
pub struct StdioPrompter;

impl StdioPrompter {
    fn read_line(&self) -> String {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim().to_string()
    }
}

impl Prompter for StdioPrompter {
    fn prompt_line(&self, message: &str, default: &str) -> String {
        if default.is_empty() {
            print!("{}: ", message);
        } else {
            print!("{} [{}]: ", message, default);
        }
        io::stdout().flush().ok();
        let answer = self.read_line();
        if answer.is_empty() {
            default.to_string()
        } else {
            answer
        }
    }

    fn confirm(&self, message: &str, default: bool) -> bool {
        let hint = if default { "Y/n" } else { "y/N" };
        print!("{} [{}]: ", message, hint);
        io::stdout().flush().ok();
        match self.read_line().to_ascii_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        }
    }

    fn notice(&self, message: &str) {
        println!("{}", message);
    }
}
