//! Line-oriented input and output for the game loop.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use crate::constants::MAX_INPUT_ATTEMPTS;

pub trait Presenter {
    fn show(&mut self, text: &str);

    /// Asks the player to pick one of `options`. Always returns a valid
    /// 1-based index.
    fn choose(&mut self, prompt: &str, options: &[String]) -> usize;

    fn pause(&mut self);
}

/// Accepts either a 1-based number or a case-insensitive fragment of an
/// option. Returns the 1-based index.
pub fn parse_choice(input: &str, options: &[String]) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(n) = input.parse::<usize>() {
        return (1..=options.len()).contains(&n).then_some(n);
    }
    let needle = input.to_lowercase();
    options
        .iter()
        .position(|option| option.to_lowercase().contains(&needle))
        .map(|i| i + 1)
}

pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl TerminalPresenter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), true)
    }
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W, styled: bool) -> Self {
        Self {
            input,
            output,
            styled,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, line: impl std::fmt::Display) {
        // Output failures are not recoverable here, the next read will tell.
        let _ = writeln!(self.output, "{}", line);
    }

    fn read_line(&mut self) -> Option<String> {
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn show(&mut self, text: &str) {
        self.write_line(text);
    }

    fn choose(&mut self, prompt: &str, options: &[String]) -> usize {
        if self.styled {
            self.write_line(prompt.bold().cyan());
        } else {
            self.write_line(prompt);
        }
        for (i, option) in options.iter().enumerate() {
            if self.styled {
                self.write_line(format!("  {} {}", format!("{}.", i + 1).yellow(), option));
            } else {
                self.write_line(format!("  {}. {}", i + 1, option));
            }
        }

        for _ in 0..MAX_INPUT_ATTEMPTS {
            let _ = write!(self.output, "> ");
            let Some(line) = self.read_line() else {
                // Input closed: nothing will ever arrive.
                return 1;
            };
            if let Some(choice) = parse_choice(&line, options) {
                return choice;
            }
            let warning = format!("Invalid choice. Enter 1-{} or part of an option.", options.len());
            if self.styled {
                self.write_line(warning.red());
            } else {
                self.write_line(warning);
            }
        }

        self.write_line("Too many invalid attempts, picking option 1.");
        1
    }

    fn pause(&mut self) {
        self.write_line("(press Enter)");
        let _ = self.read_line();
    }
}

/// Replays canned answers. Once they run out every prompt gets option 1.
#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    answers: VecDeque<String>,
    pub lines: Vec<String>,
    pub prompts: Vec<String>,
    pub pauses: u32,
}

impl ScriptedPresenter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            lines: Vec::new(),
            prompts: Vec::new(),
            pauses: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }
}

impl Presenter for ScriptedPresenter {
    fn show(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn choose(&mut self, prompt: &str, options: &[String]) -> usize {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .and_then(|answer| parse_choice(&answer, options))
            .unwrap_or(1)
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }
}
