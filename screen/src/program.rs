// program.rs - Parsed command lists and running them against a screen

use std::str::FromStr;

use log::{debug, info};

use crate::command::Command;
use crate::error::{LineError, ScreenError};
use crate::grid::Screen;

/// A command together with the input line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub line_no: usize,
    pub line: String,
    pub command: Command,
}

impl Step {
    fn fail(&self, source: ScreenError) -> LineError {
        LineError { line_no: self.line_no, line: self.line.clone(), source }
    }
}

/// Ordered commands parsed from text, one per non-blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    steps: Vec<Step>,
}

impl FromStr for Program {
    type Err = LineError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_lines(text.lines())
    }
}

impl Program {
    /// Parses lines in order; the first malformed one aborts the parse.
    pub fn parse_lines<I, S>(lines: I) -> Result<Self, LineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut steps = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            let command = line.parse().map_err(|source| LineError {
                line_no: index + 1,
                line: line.to_string(),
                source,
            })?;
            steps.push(Step { line_no: index + 1, line: line.to_string(), command });
        }
        debug!("parsed {} commands", steps.len());
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Screen {
    /// Applies every step in order, stopping at the first failure.
    ///
    /// `on_step` sees the screen after each successful command, which is how
    /// callers animate a run without the screen knowing about output.
    pub fn run_with<F>(&mut self, program: &Program, mut on_step: F) -> Result<(), LineError>
    where
        F: FnMut(&Step, &Screen),
    {
        for step in program.steps() {
            self.apply(&step.command).map_err(|source| step.fail(source))?;
            on_step(step, self);
        }
        info!("ran {} commands, {} pixels lit", program.len(), self.count_lit());
        Ok(())
    }

    pub fn run(&mut self, program: &Program) -> Result<(), LineError> {
        self.run_with(program, |_, _| {})
    }
}

/// Steps through a program one command at a time.
///
/// Holds the screen it draws on; `reset` clears it back to dark.
#[derive(Debug, Clone)]
pub struct Playback {
    program: Program,
    screen: Screen,
    cursor: usize,
    error: Option<LineError>,
}

impl Playback {
    pub fn new(program: Program, width: usize, height: usize) -> Self {
        Self {
            program,
            screen: Screen::new(width, height),
            cursor: 0,
            error: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Number of commands applied so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The step applied most recently, if any.
    pub fn last_step(&self) -> Option<&Step> {
        self.cursor.checked_sub(1).and_then(|i| self.program.steps.get(i))
    }

    pub fn error(&self) -> Option<&LineError> {
        self.error.as_ref()
    }

    /// True once every command ran or one of them failed.
    pub fn is_finished(&self) -> bool {
        self.error.is_some() || self.cursor >= self.program.len()
    }

    /// Applies the next command. Returns `false` when there was nothing to do.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        let step = &self.program.steps[self.cursor];
        match self.screen.apply(&step.command) {
            Ok(()) => self.cursor += 1,
            Err(source) => {
                let err = step.fail(source);
                log::error!("{err}: {}", err.source);
                self.error = Some(err);
            }
        }
        true
    }

    pub fn reset(&mut self) {
        self.screen = Screen::new(self.screen.width(), self.screen.height());
        self.cursor = 0;
        self.error = None;
    }
}
