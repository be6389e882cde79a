//! The console prompt loop.
//!
//! Asks for both rectangles field by field, re-prompting until each value
//! is valid, prints the comparison report and offers to start over.
//! End of input at any prompt ends the session cleanly.

use std::io::{self, BufRead, Write};

use rectlink_core::config::Config;
use rectlink_core::Rectangle;

use crate::input::{self, InputError, SPEC_FIELDS};

const INTRO: &str =
    "Use this application to calculate data about the relationships between two rectangles.";
const AGAIN_PROMPT: &str = "Check additional rectangles? (Y or N): ";

pub fn execute(config: &Config) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(stdin.lock(), stdout.lock(), config) {
        rectlink_core::log_error!("interactive session failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Runs the prompt loop until the user declines to continue or input ends.
pub fn run<R: BufRead, W: Write>(input: R, output: W, config: &Config) -> io::Result<()> {
    let mut session = Session { input, output };
    writeln!(session.output, "{INTRO}")?;

    let labels = config.report.labels();
    loop {
        let Some(first) = session.read_rectangle(labels[0])? else {
            return Ok(());
        };
        let Some(second) = session.read_rectangle(labels[1])? else {
            return Ok(());
        };

        let comparison = super::run_comparison(labels, &first, &second);
        let report = super::render(&comparison, config.report.format).map_err(io::Error::other)?;
        writeln!(session.output, "{report}")?;

        match session.ask(AGAIN_PROMPT, input::parse_yes_no)? {
            Some(true) => continue,
            _ => return Ok(()),
        }
    }
}

struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Reads all four fields, starting over when they do not form a
    /// rectangle that fits in `i64`.
    fn read_rectangle(&mut self, label: &str) -> io::Result<Option<Rectangle>> {
        loop {
            let Some((length, width, x, y)) = self.read_fields(label)? else {
                rectlink_core::log_warn!("input ended before rectangle {label} was complete");
                return Ok(None);
            };
            match input::checked_rectangle(length, width, x, y) {
                Ok(rect) => return Ok(Some(rect)),
                Err(e) => {
                    rectlink_core::log_debug!("rejected rectangle {label}: {e}");
                    writeln!(self.output, "Invalid input; {e}. Please try again...")?;
                }
            }
        }
    }

    fn read_fields(&mut self, label: &str) -> io::Result<Option<(i64, i64, i64, i64)>> {
        let [length, width, x, y] = SPEC_FIELDS;

        let Some(length) = self.ask_field(label, length, input::parse_dimension)? else {
            return Ok(None);
        };
        let Some(width) = self.ask_field(label, width, input::parse_dimension)? else {
            return Ok(None);
        };
        let Some(x) = self.ask_field(label, x, input::parse_coordinate)? else {
            return Ok(None);
        };
        let Some(y) = self.ask_field(label, y, input::parse_coordinate)? else {
            return Ok(None);
        };

        Ok(Some((length, width, x, y)))
    }

    fn ask_field(
        &mut self,
        label: &str,
        field: &'static str,
        parse: fn(&'static str, &str) -> Result<i64, InputError>,
    ) -> io::Result<Option<i64>> {
        let prompt = format!("Enter Rectangle {label} {field}: ");
        self.ask(&prompt, |answer| parse(field, answer))
    }

    /// Prompts until `parse` accepts the answer. `None` on end of input.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    rectlink_core::log_debug!("rejected input: {e}");
                    writeln!(self.output, "Invalid input; {e}. Please try again...")?;
                }
            }
        }
    }
}
