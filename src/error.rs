// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! The error type shared by every puzzle

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::intcode::{InterpreterError, ParseProgramError};

/// Anything that can go wrong while solving a puzzle
#[derive(Debug, Error)]
pub enum Error {
    /// The input file couldn't be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// the file that was being read
        path: PathBuf,
        /// what went wrong
        source: io::Error,
    },
    /// The input was supposed to be an Intcode program, but wasn't
    #[error(transparent)]
    ParseProgram(#[from] ParseProgramError),
    /// The Intcode interpreter failed
    #[error(transparent)]
    Interpreter(#[from] InterpreterError),
    /// A number in the input couldn't be parsed
    #[error("line {line}: {text:?} is not a valid integer: {source}")]
    InvalidInt {
        /// one-based line number
        line: usize,
        /// the text that failed to parse
        text: String,
        /// the underlying parse failure
        source: ParseIntError,
    },
    /// A line of input didn't have the expected shape
    #[error("line {line}: {reason}")]
    Malformed {
        /// one-based line number
        line: usize,
        /// what was expected
        reason: &'static str,
    },
    /// An Intcode program produced output that doesn't fit the puzzle
    #[error("unexpected intcode output: {0}")]
    UnexpectedOutput(String),
    /// The search for an answer came up empty
    #[error("no solution found: {0}")]
    NoSolution(&'static str),
    /// There's no solution for the requested puzzle
    #[error("{year} day {day} is not implemented")]
    Unimplemented {
        /// puzzle year
        year: u16,
        /// puzzle day
        day: u8,
    },
}

/// A [`Result`](std::result::Result) defaulting to this crate's [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Parse `text` found on one-based line `line` as an integer
pub(crate) fn parse_int<T>(text: &str, line: usize) -> Result<T>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    text.trim().parse().map_err(|source| Error::InvalidInt {
        line,
        text: text.to_owned(),
        source,
    })
}
