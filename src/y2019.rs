// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Advent of Code 2019](https://adventofcode.com/2019)
//!
//! Every puzzle here runs an Intcode program from its input with the [interpreter].
//!
//! [interpreter]: crate::intcode

pub mod day02;
pub mod day05;
pub mod day07;
pub mod day09;
pub mod day11;
pub mod day19;

use crate::Result;
use crate::intcode::{Interpreter, parse_program};

/// Build an interpreter from the comma-separated program in `input`
fn load(input: &str) -> Result<Interpreter> {
    Ok(Interpreter::new(parse_program(input)?))
}
