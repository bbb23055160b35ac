//! Interactive prompt loop.
//!
//! The session is a small state machine driven by lines of input. It only
//! ever calls the pure engine; a new rule replaces the old value instead of
//! mutating it.

use std::io::{self, BufRead, Write};

use ringca_core::{Automaton, Grid, RuleTable};
use tracing::{debug, info, warn};

use crate::diagnostics::describe;
use crate::render::GridRenderer;

/// Where the session is in its prompt loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Waiting for an initial configuration, `I` or `Q`.
    AwaitingCommand,
    /// `I` was entered; the next line is a replacement rule.
    AwaitingRule,
    /// An initial configuration was entered and is about to run.
    RunningSimulation(String),
    /// Quit requested or input exhausted.
    Terminated,
}

/// Counters reported when the session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub runs: usize,
    pub rejected: usize,
    pub rules_loaded: usize,
}

/// Prompt loop over a reader and a writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    rule: RuleTable,
    generations: usize,
    renderer: Box<dyn GridRenderer>,
    state: State,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session waiting for its first command.
    pub fn new(
        input: R,
        output: W,
        rule: RuleTable,
        generations: usize,
        renderer: Box<dyn GridRenderer>,
    ) -> Self {
        Self {
            input,
            output,
            rule,
            generations,
            renderer,
            state: State::AwaitingCommand,
            summary: SessionSummary::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Rule used for the next run.
    pub fn rule(&self) -> &RuleTable {
        &self.rule
    }

    /// Drive the loop until the user quits or input runs out.
    pub fn run(mut self) -> io::Result<SessionSummary> {
        while self.state != State::Terminated {
            self.advance()?;
        }
        self.output.flush()?;
        info!(
            runs = self.summary.runs,
            rejected = self.summary.rejected,
            "session finished"
        );
        Ok(self.summary)
    }

    /// Perform one transition.
    pub fn advance(&mut self) -> io::Result<()> {
        let next = match std::mem::replace(&mut self.state, State::Terminated) {
            State::AwaitingCommand => self.await_command()?,
            State::AwaitingRule => self.await_rule()?,
            State::RunningSimulation(initial) => self.run_simulation(&initial)?,
            State::Terminated => State::Terminated,
        };
        debug!(state = ?next, "session transition");
        self.state = next;
        Ok(())
    }

    fn await_command(&mut self) -> io::Result<State> {
        let minimum = self.rule.radius().width();
        write!(
            self.output,
            "Please enter a bit string at least {minimum} bits long, I to enter a new CA, or Q to quit: "
        )?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return self.farewell();
        };
        match line.as_str() {
            "" | "Q" | "q" => self.farewell(),
            "I" | "i" => Ok(State::AwaitingRule),
            _ => Ok(State::RunningSimulation(line)),
        }
    }

    fn await_rule(&mut self) -> io::Result<State> {
        let radius = self.rule.radius();
        write!(
            self.output,
            "Please enter a bit string that is exactly {} bits long: ",
            radius.table_len()
        )?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return self.farewell();
        };
        match RuleTable::with_radius(&line, radius) {
            Ok(rule) => {
                self.rule = rule;
                self.summary.rules_loaded += 1;
                info!(radius = radius.value(), "rule replaced");
                writeln!(self.output, "\nThank you.\nNow running CA = {}", self.rule)?;
            }
            Err(err) => {
                self.summary.rejected += 1;
                warn!(error = %err, "rule rejected");
                writeln!(self.output, "\n{}\n", describe(&err))?;
            }
        }
        Ok(State::AwaitingCommand)
    }

    fn run_simulation(&mut self, initial: &str) -> io::Result<State> {
        match simulate(self.rule, initial, self.generations) {
            Ok(grid) => {
                self.summary.runs += 1;
                info!(width = grid.width(), generations = grid.generations(), "simulation complete");
                self.renderer.render(&grid, &mut self.output)?;
            }
            Err(err) => {
                self.summary.rejected += 1;
                warn!(error = %err, "input rejected");
                writeln!(self.output, "\n{}\n", describe(&err))?;
            }
        }
        Ok(State::AwaitingCommand)
    }

    fn farewell(&mut self) -> io::Result<State> {
        writeln!(self.output, "\n\nThank you for using the CA viewer.\n")?;
        Ok(State::Terminated)
    }

    /// Next line without its terminator, or `None` at end of input.
    ///
    /// Invalid UTF-8 becomes U+FFFD so it is rejected as a non-binary cell
    /// instead of ending the session.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }
}

/// Build an automaton from a bit-string and run it.
pub fn simulate(rule: RuleTable, initial: &str, generations: usize) -> ringca_core::Result<Grid> {
    Automaton::from_bits(rule, initial)?.run(generations)
}
