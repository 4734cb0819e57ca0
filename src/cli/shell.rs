//! Interactive menu loop
//!
//! Reads menu choices and field values line by line from any `BufRead`,
//! validates numeric input and dispatches to the [`TaskManager`]. All user
//! facing text goes to the supplied writer so the loop can be driven from
//! tests with in-memory buffers.

use super::config::ShellConfig;
use crate::task::{Priority, TaskError, TaskManager};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use thiserror::Error;
use tracing::{debug, info};

const MENU: &str = "\nTask Manager Menu:\n\
                    1. Add Task\n\
                    2. Remove Task\n\
                    3. Announce Tasks\n\
                    4. List All Tasks\n\
                    5. Exit\n";

const CHOICE_PROMPT: &str = "Enter your choice: ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{input}' is not a number")]
    NotANumber { input: String },
}

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTask,
    RemoveTask,
    AnnounceTasks,
    ListTasks,
    Exit,
    Unknown(i64),
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Self {
        match number {
            1 => MenuChoice::AddTask,
            2 => MenuChoice::RemoveTask,
            3 => MenuChoice::AnnounceTasks,
            4 => MenuChoice::ListTasks,
            5 => MenuChoice::Exit,
            other => MenuChoice::Unknown(other),
        }
    }
}

/// Parse the longest leading `[+-]?digits` prefix of a line as an integer.
///
/// Leading whitespace is skipped and anything after the digits is ignored,
/// so `4x` reads as 4. Input with no leading digits is malformed.
pub fn parse_number(line: &str) -> Result<i64, InputError> {
    let malformed = || InputError::NotANumber {
        input: line.trim().to_string(),
    };

    let trimmed = line.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digit_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_len == 0 {
        return Err(malformed());
    }

    trimmed[..sign_len + digit_len]
        .parse()
        .map_err(|_| malformed())
}

pub fn parse_menu_choice(line: &str) -> Result<MenuChoice, InputError> {
    parse_number(line).map(MenuChoice::from_number)
}

/// Console front end for a single [`TaskManager`]
pub struct Shell<R, W> {
    manager: TaskManager,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            manager: TaskManager::new(),
            input,
            output,
            config,
        }
    }

    pub fn manager(&self) -> &TaskManager {
        &self.manager
    }

    /// Consume the shell and hand back its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until Exit is chosen or the input is closed
    pub fn run(&mut self) -> Result<()> {
        info!("Starting interactive task menu");

        loop {
            if self.config.show_menu {
                write!(self.output, "{}", MENU)?;
            }
            let Some(line) = self.prompt_number(CHOICE_PROMPT)? else {
                info!("Input closed, leaving task menu");
                break;
            };

            let choice = match parse_menu_choice(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    debug!("Rejected menu input: {}", e);
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a number between 1 and 5."
                    )?;
                    continue;
                }
            };

            if self.dispatch(choice)?.is_break() {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>> {
        debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::AddTask => self.add_task(),
            MenuChoice::RemoveTask => self.remove_task(),
            MenuChoice::AnnounceTasks => self.announce_tasks(),
            MenuChoice::ListTasks => {
                self.manager.list_tasks(&mut self.output)?;
                Ok(ControlFlow::Continue(()))
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting Task Manager.")?;
                Ok(ControlFlow::Break(()))
            }
            MenuChoice::Unknown(_) => {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    fn add_task(&mut self) -> Result<ControlFlow<()>> {
        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(selector) =
            self.prompt_number("Enter priority (1 = HIGH, 2 = MEDIUM, 3 = LOW): ")?
        else {
            return Ok(ControlFlow::Break(()));
        };
        let priority = parse_number(&selector).map_or(Priority::None, Priority::from_number);

        match self.manager.add_task(description, priority) {
            Ok(()) => writeln!(self.output, "Task added successfully.")?,
            Err(TaskError::InvalidPriority { .. }) => {
                writeln!(self.output, "Invalid priority. Task not added.")?
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn remove_task(&mut self) -> Result<ControlFlow<()>> {
        let Some(description) = self.prompt("Enter task description to remove: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let removed = self.manager.remove_task(&description);
        if self.config.report_removed_count {
            writeln!(self.output, "Removed {} task(s).", removed)?;
        } else {
            writeln!(self.output, "Task removed successfully.")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn announce_tasks(&mut self) -> Result<ControlFlow<()>> {
        let Some(line) = self.prompt_number("Enter number of tasks to announce: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        match parse_number(&line) {
            Ok(count) => {
                self.manager.announce_tasks(count, &mut self.output)?;
            }
            Err(e) => {
                debug!("Rejected announce count: {}", e);
                writeln!(self.output, "Invalid input. Please enter a valid number.")?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Write a prompt and read one line. `None` means the input is closed.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        self.read_line()
    }

    /// Like [`Self::prompt`], but blank lines are skipped while waiting for a
    /// number.
    fn prompt_number(&mut self, text: &str) -> Result<Option<String>> {
        let mut line = self.prompt(text)?;
        while line.as_deref().is_some_and(|l| l.trim().is_empty()) {
            line = self.read_line()?;
        }
        Ok(line)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
