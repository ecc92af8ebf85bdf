//! Line-oriented terminal access.
//!
//! The story and the shop only talk to the player through [`Console`], so a
//! session can run against the real terminal or against a fixed script.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;

use crate::config::GameConfig;
use crate::error::{FictionError, FictionResult};

/// A place to read player input from and write game text to.
pub trait Console {
    /// Show `prompt` and block until the player enters a line.
    ///
    /// Returns the line without its trailing newline. End of input and
    /// interrupts are returned as errors so callers can shut down.
    fn read_line(&mut self, prompt: &str) -> FictionResult<String>;

    /// Write a line of plain output.
    fn say(&mut self, text: &str);

    /// Write a line the player should notice, such as an error.
    fn warn(&mut self, text: &str) {
        self.say(text);
    }

    /// Tell a narrative passage, optionally waiting for Enter afterwards.
    fn narrate(&mut self, text: &str, _pause: bool) -> FictionResult<()> {
        self.say(text);
        Ok(())
    }
}

/// Console on standard input and output.
pub struct StdConsole {
    fast: bool,
    delay: Duration,
}

impl StdConsole {
    /// Create a console honouring the fast mode and delay of `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            fast: config.fast,
            delay: config.delay(),
        }
    }

    fn read_raw(&mut self) -> FictionResult<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => Err(FictionError::EndOfInput),
            Ok(_) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> FictionResult<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        self.read_raw()
    }

    fn say(&mut self, text: &str) {
        println!("{text}");
    }

    fn warn(&mut self, text: &str) {
        println!("{}", text.yellow());
    }

    fn narrate(&mut self, text: &str, pause: bool) -> FictionResult<()> {
        if self.fast {
            println!("{text}");
            return Ok(());
        }

        let mut stdout = io::stdout();
        for ch in text.chars() {
            write!(stdout, "{ch}")?;
            stdout.flush()?;
            thread::sleep(self.delay);
        }
        writeln!(stdout)?;

        if pause {
            print!("{}", "Press Enter to continue...".dimmed());
            stdout.flush()?;
            // A closed stdin here is left for the next real prompt to report.
            match self.read_raw() {
                Ok(_) | Err(FictionError::EndOfInput) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

/// Console that replays a fixed list of input lines and records output.
///
/// Running out of input behaves like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Create a console that will answer prompts with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// All output joined with newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Input lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> FictionResult<String> {
        self.prompts.push(prompt.to_string());
        self.input.pop_front().ok_or(FictionError::EndOfInput)
    }

    fn say(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
