// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [1202 Program Alarm](https://adventofcode.com/2019/day/2)

use super::load;
use crate::intcode::prelude::*;
use crate::{Error, Result};

const TARGET: i64 = 19_690_720;

/// Run `base` with the given noun and verb, returning what ends up at address `0`
fn run_with(base: &Interpreter, noun: i64, verb: i64) -> Result<i64> {
    let mut interp = base.clone();
    interp[1] = noun;
    interp[2] = verb;
    let (output, state) = interp.run_through_inputs(empty())?;
    if state != State::Halted || !output.is_empty() {
        return Err(Error::UnexpectedOutput(format!(
            "expected to halt silently, got {output:?} and {state:?}"
        )));
    }
    Ok(interp[0])
}

/// The value left at address `0` after restoring the "1202 program alarm" state
pub fn part1(input: &str) -> Result<i64> {
    run_with(&load(input)?, 12, 2)
}

/// `100 * noun + verb` for the noun and verb that produce `19690720`
pub fn part2(input: &str) -> Result<i64> {
    let base = load(input)?;
    for noun in 0..=99 {
        for verb in 0..=99 {
            match run_with(&base, noun, verb) {
                Ok(TARGET) => {
                    log::debug!("found noun {noun} and verb {verb}");
                    return Ok(100 * noun + verb);
                }
                Ok(_) => {}
                // a pair that crashes the program can't be the right one
                Err(Error::Interpreter(err)) => {
                    log::trace!("noun {noun} and verb {verb} failed: {err}");
                }
                Err(err) => return Err(err),
            }
        }
    }
    Err(Error::NoSolution("no noun and verb produce 19690720"))
}
