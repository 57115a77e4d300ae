pub mod console_ui;
pub mod mock_ui;

use anyhow::Result;

/// Interactive surface the launcher talks to.
///
/// Every call blocks until the user has answered, so prompts issued one
/// after another are answered strictly in that order. A dismissed prompt is
/// reported as `None`, never as an error.
pub trait Prompter {
    /// Single selection among `options`
    fn show_choice(&self, options: &[String], placeholder: &str) -> Result<Option<String>>;
    /// Free text input
    fn show_text_prompt(&self, placeholder: &str) -> Result<Option<String>>;
    /// Warning with one remediation action; returns the action if it was chosen
    fn show_warning(&self, text: &str, action_label: &str) -> Result<Option<String>>;
    fn show_error(&self, text: &str);
}

impl<P: Prompter + ?Sized> Prompter for &P {
    fn show_choice(&self, options: &[String], placeholder: &str) -> Result<Option<String>> {
        (**self).show_choice(options, placeholder)
    }

    fn show_text_prompt(&self, placeholder: &str) -> Result<Option<String>> {
        (**self).show_text_prompt(placeholder)
    }

    fn show_warning(&self, text: &str, action_label: &str) -> Result<Option<String>> {
        (**self).show_warning(text, action_label)
    }

    fn show_error(&self, text: &str) {
        (**self).show_error(text)
    }
}

pub use console_ui::ConsoleUi;
pub use mock_ui::MockUi;
