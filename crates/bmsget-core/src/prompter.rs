//! Operator interaction seam.

/// Interactive prompts used by the download and amplify flows.
///
/// The CLI implements this over stdin/stdout; tests substitute a
/// scripted implementation.
pub trait Prompter {
    /// Show a message and read one line; empty input yields `default`.
    fn prompt_line(&self, message: &str, default: &str) -> String;

    /// Ask a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> bool;

    /// Display a message to the operator.
    fn notice(&self, message: &str);
}
