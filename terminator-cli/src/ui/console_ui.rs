use anyhow::{Result, anyhow};
use log::{debug, error, info, warn};
use skim::prelude::*;
use std::io::{self, BufRead, Cursor, Write};

use super::Prompter;

/// Prompts on the controlling terminal: skim for choices, plain lines for text.
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }

    fn read_answer(&self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            debug!("Input closed while waiting for an answer");
            println!();
            return Ok(None);
        }

        Ok(Some(input.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Selection from a finished skim run; `None` means skim never started
fn selected_name(output: Option<SkimOutput>) -> Result<Option<String>> {
    let Some(output) = output else {
        error!("Skim failed to start");
        return Err(anyhow!("Selection failed: the picker could not be started"));
    };

    // ESC, Ctrl-C and friends
    if output.is_abort {
        info!("User aborted selection");
        return Ok(None);
    }

    Ok(output
        .selected_items
        .first()
        .map(|item| item.output().to_string()))
}

impl Prompter for ConsoleUi {
    fn show_choice(&self, options: &[String], placeholder: &str) -> Result<Option<String>> {
        let prompt = format!("{}> ", placeholder);
        let skim_options = SkimOptionsBuilder::default()
            .height(Some("50%"))
            .multi(false)
            .prompt(Some(prompt.as_str()))
            .build()
            .map_err(|e| anyhow!("Failed to configure picker: {}", e))?;

        let item_reader = SkimItemReader::default();
        let items = item_reader.of_bufread(Cursor::new(options.join("\n")));

        selected_name(Skim::run_with(&skim_options, Some(items)))
    }

    fn show_text_prompt(&self, placeholder: &str) -> Result<Option<String>> {
        self.read_answer(&format!("{}: ", placeholder))
    }

    fn show_warning(&self, text: &str, action_label: &str) -> Result<Option<String>> {
        warn!("{}", text);
        eprintln!("Warning: {}", text);

        let answer = self.read_answer(&format!("{}? (y/N): ", action_label))?;
        let chosen = answer
            .map(|a| a.trim().to_lowercase())
            .is_some_and(|a| a == "y" || a == "yes");

        Ok(chosen.then(|| action_label.to_string()))
    }

    fn show_error(&self, text: &str) {
        error!("{}", text);
        eprintln!("Error: {}", text);
    }
}
