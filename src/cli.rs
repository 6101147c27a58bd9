use crate::error::GameError;
use crate::game_state::GameInterface;
use crate::scorer::Feedback;
use clap::Parser;
use std::io::{BufRead, Write};

/// Bulls and cows: guess the 4-digit code with no repeated digits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for the secret code (same seed, same code)
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Play in the full-screen terminal interface
    #[arg(short = 't', long = "tui")]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub const PROMPT: &str = "Guess: ";
pub const VICTORY_MESSAGE: &str = "Correct! You win!";

#[must_use]
pub fn length_error_message(expected: usize) -> String {
    format!("Your guess must have {expected} digits.")
}

/// Read one line, dropping only its `\n` or `\r\n` terminator.
/// Returns `Ok(None)` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, GameError> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(Some(input))
}

/// Line-oriented console front end.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_guess(&mut self) -> Result<Option<String>, GameError> {
        write!(self.writer, "{PROMPT}")?;
        self.writer.flush()?;
        read_line(&mut self.reader)
    }

    fn display_length_error(&mut self, expected: usize) -> Result<(), GameError> {
        writeln!(self.writer, "{}", length_error_message(expected))?;
        Ok(())
    }

    fn display_feedback(&mut self, _guess: &str, feedback: &Feedback) -> Result<(), GameError> {
        writeln!(self.writer, "{feedback}")?;
        Ok(())
    }

    fn display_victory(&mut self) -> Result<(), GameError> {
        writeln!(self.writer, "{VICTORY_MESSAGE}")?;
        self.writer.flush()?;
        Ok(())
    }
}
