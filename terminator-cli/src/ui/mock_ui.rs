use anyhow::Result;
use std::cell::RefCell;
use std::collections::VecDeque;

use super::Prompter;

/// Scripted prompter. Answers are consumed in the order they were queued;
/// an empty queue answers like a dismissed prompt.
#[derive(Debug, Default)]
pub struct MockUi {
    choice_answers: RefCell<VecDeque<Option<String>>>,
    text_answers: RefCell<VecDeque<Option<String>>>,
    warning_answers: RefCell<VecDeque<Option<String>>>,
    pub choice_calls: RefCell<Vec<(Vec<String>, String)>>,
    pub text_prompt_calls: RefCell<Vec<String>>,
    pub warning_calls: RefCell<Vec<(String, String)>>,
    pub error_calls: RefCell<Vec<String>>,
}

impl MockUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_choice(&self, answer: Option<&str>) {
        self.choice_answers
            .borrow_mut()
            .push_back(answer.map(str::to_string));
    }

    pub fn expect_text(&self, answer: Option<&str>) {
        self.text_answers
            .borrow_mut()
            .push_back(answer.map(str::to_string));
    }

    pub fn expect_warning_action(&self, answer: Option<&str>) {
        self.warning_answers
            .borrow_mut()
            .push_back(answer.map(str::to_string));
    }

    pub fn choice_call_count(&self) -> usize {
        self.choice_calls.borrow().len()
    }

    pub fn text_prompt_call_count(&self) -> usize {
        self.text_prompt_calls.borrow().len()
    }

    pub fn warning_call_count(&self) -> usize {
        self.warning_calls.borrow().len()
    }

    pub fn error_call_count(&self) -> usize {
        self.error_calls.borrow().len()
    }

    pub fn get_choice_calls(&self) -> Vec<(Vec<String>, String)> {
        self.choice_calls.borrow().clone()
    }

    pub fn get_text_prompt_calls(&self) -> Vec<String> {
        self.text_prompt_calls.borrow().clone()
    }

    pub fn get_warning_calls(&self) -> Vec<(String, String)> {
        self.warning_calls.borrow().clone()
    }

    pub fn get_error_calls(&self) -> Vec<String> {
        self.error_calls.borrow().clone()
    }
}

impl Prompter for MockUi {
    fn show_choice(&self, options: &[String], placeholder: &str) -> Result<Option<String>> {
        self.choice_calls
            .borrow_mut()
            .push((options.to_vec(), placeholder.to_string()));
        Ok(self.choice_answers.borrow_mut().pop_front().flatten())
    }

    fn show_text_prompt(&self, placeholder: &str) -> Result<Option<String>> {
        self.text_prompt_calls
            .borrow_mut()
            .push(placeholder.to_string());
        Ok(self.text_answers.borrow_mut().pop_front().flatten())
    }

    fn show_warning(&self, text: &str, action_label: &str) -> Result<Option<String>> {
        self.warning_calls
            .borrow_mut()
            .push((text.to_string(), action_label.to_string()));
        Ok(self.warning_answers.borrow_mut().pop_front().flatten())
    }

    fn show_error(&self, text: &str) {
        self.error_calls.borrow_mut().push(text.to_string());
    }
}
