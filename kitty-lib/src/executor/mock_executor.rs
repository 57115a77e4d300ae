use anyhow::Result;
use std::cell::RefCell;

use crate::commands::focus_window::KittenFocusWindowCommand;
use crate::commands::launch::KittenLaunchCommand;
use crate::executor::CommandExecutor;
use crate::types::{KittyCommandResult, KittyLaunchResponse};

#[derive(Debug)]
pub struct MockExecutor {
    pub launch_calls: RefCell<Vec<KittenLaunchCommand>>,
    pub focus_window_calls: RefCell<Vec<KittenFocusWindowCommand>>,
    pub launch_responses: RefCell<Vec<Result<KittyCommandResult<KittyLaunchResponse>>>>,
    pub focus_window_responses: RefCell<Vec<Result<KittyCommandResult<()>>>>,
    next_window_id: RefCell<u32>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self {
            launch_calls: RefCell::new(Vec::new()),
            focus_window_calls: RefCell::new(Vec::new()),
            launch_responses: RefCell::new(Vec::new()),
            focus_window_responses: RefCell::new(Vec::new()),
            next_window_id: RefCell::new(1),
        }
    }

    pub fn expect_launch_response(
        &self,
        response: Result<KittyCommandResult<KittyLaunchResponse>>,
    ) {
        self.launch_responses.borrow_mut().push(response);
    }

    pub fn expect_focus_window_response(&self, response: Result<KittyCommandResult<()>>) {
        self.focus_window_responses.borrow_mut().push(response);
    }

    pub fn launch_call_count(&self) -> usize {
        self.launch_calls.borrow().len()
    }

    pub fn focus_window_call_count(&self) -> usize {
        self.focus_window_calls.borrow().len()
    }

    pub fn get_launch_calls(&self) -> Vec<KittenLaunchCommand> {
        self.launch_calls.borrow().clone()
    }

    pub fn get_focus_window_calls(&self) -> Vec<KittenFocusWindowCommand> {
        self.focus_window_calls.borrow().clone()
    }
}

impl CommandExecutor for &MockExecutor {
    fn launch(
        &self,
        command: KittenLaunchCommand,
    ) -> Result<KittyCommandResult<KittyLaunchResponse>> {
        self.launch_calls.borrow_mut().push(command);
        // Without a scripted response every launch gets a fresh window id
        self.launch_responses.borrow_mut().pop().unwrap_or_else(|| {
            let mut next = self.next_window_id.borrow_mut();
            let window_id = *next;
            *next += 1;
            Ok(KittyCommandResult::success(KittyLaunchResponse {
                window_id: Some(window_id),
            }))
        })
    }

    fn focus_window(&self, command: KittenFocusWindowCommand) -> Result<KittyCommandResult<()>> {
        self.focus_window_calls.borrow_mut().push(command);
        self.focus_window_responses
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| Ok(KittyCommandResult::success(())))
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}
