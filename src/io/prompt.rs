//! Interactive prompts
//!
//! The two blocking reads: the starting hit-point value and the
//! post-battle quit loop. Both run over generic readers and writers so
//! tests can drive them with in-memory buffers.

use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

/// Errors from the interactive prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream ended before the prompt was satisfied.
    #[error("input stream closed")]
    InputClosed,
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Ask for the player's starting hit points.
///
/// Malformed lines are discarded and the prompt repeats until a
/// parseable integer arrives. Zero and negative values are accepted
/// as-is.
pub fn read_hit_points<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<i32, PromptError> {
    loop {
        writeln!(output, "What hp do you want?")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        match line.trim().parse::<i32>() {
            Ok(hp) => return Ok(hp),
            Err(_) => debug!("ignoring non-numeric hit-point input {:?}", line.trim()),
        }
    }
}

/// Block until a line reading exactly `q` arrives. Every other line is
/// discarded silently.
pub fn wait_for_quit<R: BufRead>(input: &mut R) -> Result<(), PromptError> {
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // A closed stream can never produce the quit token.
            return Err(PromptError::InputClosed);
        }
        if line.trim() == "q" {
            return Ok(());
        }
        debug!("ignoring input {:?}", line.trim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn test_read_hit_points_parses_first_valid_integer() {
        let mut input = Cursor::new("42\n");
        let mut output = Vec::new();
        let hp = read_hit_points(&mut input, &mut output).unwrap();
        assert_eq!(hp, 42);
        assert_eq!(String::from_utf8(output).unwrap(), "What hp do you want?\n");
    }

    #[test]
    fn test_read_hit_points_reprompts_past_garbage() {
        let mut input = Cursor::new("lots\n-7\n");
        let mut output = Vec::new();
        let hp = read_hit_points(&mut input, &mut output).unwrap();
        assert_eq!(hp, -7); // negatives are accepted unvalidated
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("What hp do you want?").count(), 2);
    }

    #[test]
    fn test_read_hit_points_reports_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(matches!(
            read_hit_points(&mut input, &mut output),
            Err(PromptError::InputClosed)
        ));
    }

    #[test]
    fn test_wait_for_quit_discards_everything_but_q() {
        let mut input = Cursor::new("hello\nno\nq\nunread\n");
        wait_for_quit(&mut input).unwrap();
        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "unread\n"); // stopped on the third line
    }

    #[test]
    fn test_wait_for_quit_requires_exact_token() {
        let mut input = Cursor::new("quit\nqq\nQ\nq\n");
        wait_for_quit(&mut input).unwrap();

        let mut input = Cursor::new("never\n");
        assert!(matches!(
            wait_for_quit(&mut input),
            Err(PromptError::InputClosed)
        ));
    }
}
