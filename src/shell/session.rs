//! Shell session
//!
//! Drives the interpreter from a line source and writes replies to an
//! output sink.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::Arc;

use crate::command::{Interpreter, Reply};
use crate::config::Config;
use crate::error::{NestError, Result};
use crate::registry::Registry;

/// Outcome of a finished script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands executed (blank lines and comments excluded)
    pub executed: usize,

    /// Commands that failed
    pub failed: usize,
}

impl fmt::Display for ScriptSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Script finished: {} commands, {} failed",
            self.executed, self.failed
        )
    }
}

/// What happened to one input line
enum LineOutcome {
    /// Blank line or comment
    Skipped,

    /// Command succeeded
    Replied(Reply),

    /// `exit`
    Exit,

    /// Command failed
    Failed(NestError),
}

/// Interactive / batch front-end over an [`Interpreter`]
///
/// Replies and error messages go to `output`; diagnostics go through
/// `tracing`.
pub struct Shell<W: Write> {
    /// Session configuration
    config: Config,

    /// Executes parsed lines
    interpreter: Interpreter,

    /// Where replies and error messages are written
    output: W,
}

impl<W: Write> Shell<W> {
    /// Create a shell over a registry
    pub fn new(config: Config, registry: Arc<Registry>, output: W) -> Self {
        let interpreter = Interpreter::new(registry, config.default_backend);
        Self {
            config,
            interpreter,
            output,
        }
    }

    /// Run an interactive session until `exit` or end of input
    ///
    /// Failed commands are reported and the session continues. Only an
    /// error reading `input` or writing `output` ends the session early.
    pub fn run_interactive<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut line = String::new();

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("End of input");
                break;
            }
            let trimmed = line.trim();

            if self.is_script_path(trimmed) {
                match self.run_script(Path::new(trimmed)) {
                    Ok(summary) => writeln!(self.output, "{}", summary)?,
                    Err(e) => writeln!(self.output, "error: {}", e)?,
                }
                continue;
            }

            match self.evaluate(trimmed) {
                LineOutcome::Skipped => {}
                LineOutcome::Replied(reply) => writeln!(self.output, "{}", reply)?,
                LineOutcome::Exit => {
                    tracing::debug!("Exit requested");
                    break;
                }
                LineOutcome::Failed(e) => writeln!(self.output, "error: {}", e)?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Run every line of a script file
    ///
    /// `exit` ends the script early. A failing line is reported and skipped,
    /// unless `stop_on_error` is set, in which case its error is returned.
    pub fn run_script(&mut self, path: &Path) -> Result<ScriptSummary> {
        let file = File::open(path)?;
        tracing::info!(path = %path.display(), "Running script");

        let mut summary = ScriptSummary::default();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            match self.evaluate(&line) {
                LineOutcome::Skipped => {}
                LineOutcome::Replied(reply) => {
                    summary.executed += 1;
                    writeln!(self.output, "{}", reply)?;
                }
                LineOutcome::Exit => {
                    tracing::debug!(line = line_number, "Script exited early");
                    break;
                }
                LineOutcome::Failed(e) => {
                    summary.executed += 1;
                    summary.failed += 1;
                    tracing::warn!(line = line_number, error = %e, "Script command failed");

                    if self.config.stop_on_error {
                        return Err(e);
                    }
                    writeln!(self.output, "error: line {}: {}", line_number, e)?;
                }
            }
        }

        self.output.flush()?;
        Ok(summary)
    }

    /// Execute one line without printing anything
    fn evaluate(&self, line: &str) -> LineOutcome {
        match self.interpreter.execute_line(line) {
            Ok(None) => LineOutcome::Skipped,
            Ok(Some(Reply::Exit)) => LineOutcome::Exit,
            Ok(Some(reply)) => LineOutcome::Replied(reply),
            Err(e) => LineOutcome::Failed(e),
        }
    }

    /// A single token ending in the script extension
    fn is_script_path(&self, line: &str) -> bool {
        let extension = self.config.script_extension.as_str();
        !extension.is_empty()
            && line.ends_with(extension)
            && line.split_whitespace().count() == 1
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The interpreter behind this shell
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Consume the shell, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
