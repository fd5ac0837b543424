//! Console views and the shared command loop

mod args;
mod element_view;
mod main_view;

use std::io::{BufRead, Write};

use wf_core::Controller;

use crate::command::CommandRegistry;
use crate::console::Console;
use crate::error::CliError;
use crate::palette;

pub use element_view::{ElementKind, FaceKind, LineKind, run_element_view};
pub use main_view::run_main_view;

/// Controller and console shared by every view
pub struct Session<R, W> {
    pub controller: Controller,
    pub console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(controller: Controller, console: Console<R, W>) -> Self {
        Self {
            controller,
            console,
        }
    }
}

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Leave the current view
    Leave,
}

pub type Handler<R, W> = fn(&mut Session<R, W>, &[&str]) -> Result<Flow, CliError>;

/// Read and dispatch commands until a handler leaves or input ends.
///
/// `help` is always available. Non-fatal errors are printed and the loop
/// continues.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    prompt: &str,
    registry: &CommandRegistry<Handler<R, W>>,
) -> Result<(), CliError> {
    while let Some(line) = session.console.ask(prompt)? {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            continue;
        };
        let args: Vec<&str> = words.collect();

        if name == "help" {
            print_help(session, registry)?;
            continue;
        }

        let result = match registry.find(name) {
            Some(entry) => (entry.handler)(session, &args).map_err(|e| (e, Some(entry))),
            None => Err((CliError::UnknownCommand(name.to_string()), None)),
        };

        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Leave) => return Ok(()),
            Err((error, _)) if error.is_fatal() => return Err(error),
            Err((CliError::Usage, Some(entry))) => {
                tracing::debug!("Bad arguments for '{}': {:?}", entry.name, args);
                session
                    .console
                    .error(format!("usage: {}", entry.synopsis()))?;
            }
            Err((error, _)) => session.console.error(error)?,
        }
    }
    Ok(())
}

fn print_help<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    registry: &CommandRegistry<Handler<R, W>>,
) -> Result<(), CliError> {
    let width = registry
        .entries()
        .iter()
        .map(|e| e.synopsis().len())
        .max()
        .unwrap_or(0)
        .max("help".len());

    let console = &mut session.console;
    console.println_colored(palette::FG_PURPLE, "Commands:")?;
    for entry in registry.entries() {
        console.println(format!(
            "  {:width$}  {}",
            entry.synopsis(),
            entry.description
        ))?;
    }
    console.println(format!("  {:width$}  {}", "help", "Show this list."))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::palette::Palette;

    pub const CORNER: &str = "\
n corner
p 0 0 0
p 1 0 0
p 0 1 0
p 0 0 1
l 1 2
l 1 3
l 1 4
f 2 3 4
";

    pub fn session(input: &str) -> Session<&[u8], Vec<u8>> {
        Session::new(
            Controller::new(),
            Console::new(input.as_bytes(), Vec::new(), Palette::plain()),
        )
    }

    pub fn output(session: &Session<&[u8], Vec<u8>>) -> String {
        String::from_utf8_lossy(session.console.output()).into_owned()
    }
}
