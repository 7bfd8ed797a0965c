//! Interactive session: one scheduler, line commands over stdin.
//!
//! Nothing is written to disk; the tasks live as long as the session.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use taskpick_core::{project_timeline, Scheduler, SearchQuery, SortKey};
use tracing::debug;

use crate::config::Config;
use crate::render;

pub const HELP: &str = "\
commands:
  add <description> | <YYYY-MM-DD HH:MM> | <priority> | <type> | <minutes>
  list [deadline|priority|type]
  optimize <minutes>
  search <keyword or YYYY-MM-DD>
  timeline
  help
  quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

pub struct Session {
    scheduler: Scheduler,
    config: Config,
}

impl Session {
    pub fn new(scheduler: Scheduler, config: Config) -> Self {
        Self { scheduler, config }
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Run one command line. Errors leave the scheduler unchanged.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let line = line.trim();
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        debug!(cmd, "session command");

        let out = match cmd {
            "" => String::new(),
            "help" | "?" => HELP.to_string(),
            "quit" | "exit" => return Ok(Outcome::Quit),
            "add" => self.add(rest)?,
            "list" => {
                let key = if rest.is_empty() {
                    self.config.display.default_sort
                } else {
                    rest.parse::<SortKey>()?
                };
                render::task_table(&self.scheduler.get_sorted_tasks(key))
            }
            "optimize" => {
                let minutes: i64 = rest
                    .parse()
                    .with_context(|| format!("'{rest}' is not a whole number of minutes"))?;
                self.config.check_budget(minutes)?;
                render::selection(&self.scheduler.optimize_summary(minutes)?)
            }
            "search" => {
                let query = SearchQuery::from_input(rest)?;
                render::search_results(&self.scheduler.search_task(&query))
            }
            "timeline" => {
                let now = self.config.local_now()?;
                render::timeline(&project_timeline(self.scheduler.tasks(), now))
            }
            other => bail!("unknown command '{other}' (try 'help')"),
        };
        Ok(Outcome::Output(out))
    }

    fn add(&mut self, args: &str) -> Result<String> {
        let fields: Vec<&str> = args.split('|').map(str::trim).collect();
        let &[description, deadline, priority, task_type, duration] = fields.as_slice() else {
            bail!("add needs 5 fields separated by '|' (got {})", fields.len());
        };

        let priority: i64 = priority
            .parse()
            .with_context(|| format!("priority '{priority}' is not an integer"))?;
        let duration: i64 = duration
            .parse()
            .with_context(|| format!("duration '{duration}' is not a whole number of minutes"))?;

        let task = self
            .scheduler
            .create_task(description, deadline, priority, task_type, duration)?;
        Ok(format!("added {task}\n"))
    }

    /// Read commands until `quit` or end of input. Command errors are
    /// reported and the loop keeps going.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        write!(output, "taskpick session ({} tasks). Type 'help' for commands.\n> ", self.scheduler.len())?;
        output.flush().ok();

        for line in input.lines() {
            let line = line.context("read command")?;
            match self.execute(&line) {
                Ok(Outcome::Quit) => return Ok(()),
                Ok(Outcome::Output(text)) => write!(output, "{text}")?,
                Err(e) => writeln!(output, "error: {e:#}")?,
            }
            write!(output, "> ")?;
            output.flush().ok();
        }
        Ok(())
    }
}
