// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Sunny with a Chance of Asteroids](https://adventofcode.com/2019/day/5)
//!
//! The Thermal Environment Supervision Terminal runs a series of self-tests, reporting `0` for
//! each one that passes, then reports a diagnostic code.

use super::load;
use crate::intcode::prelude::*;
use crate::{Error, Result};

/// Run the diagnostic program for the system with the given ID
fn diagnose(input: &str, system_id: i64) -> Result<i64> {
    let (mut outputs, state) = load(input)?.run_through_inputs([system_id])?;
    if state != State::Halted {
        return Err(Error::UnexpectedOutput(
            "diagnostic program asked for more input".into(),
        ));
    }
    let diagnostic = outputs
        .pop()
        .ok_or_else(|| Error::UnexpectedOutput("no diagnostic code".into()))?;
    if let Some(failed) = outputs.iter().position(|&out| out != 0) {
        return Err(Error::UnexpectedOutput(format!(
            "self-test {failed} failed with {}",
            outputs[failed]
        )));
    }
    log::debug!("{} self-tests passed", outputs.len());
    Ok(diagnostic)
}

/// The diagnostic code for the ship's air conditioner unit, system ID `1`
pub fn part1(input: &str) -> Result<i64> {
    diagnose(input, 1)
}

/// The diagnostic code for the ship's thermal radiator controller, system ID `5`
pub fn part2(input: &str) -> Result<i64> {
    diagnose(input, 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Outputs 999 if the input is below 8, 1000 if it equals 8, or 1001 if it's greater than 8
    const COMPARE_TO_EIGHT: &str = "3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,\
1106,0,36,98,0,0,1002,21,125,20,4,20,1105,1,46,104,999,1105,1,46,1101,1000,1,20,4,20,1105,1,46,98,99";

    #[test]
    fn echoes_system_id() {
        assert_eq!(part1("3,0,4,0,99").unwrap(), 1);
        assert_eq!(part2("3,0,4,0,99").unwrap(), 5);
    }

    #[test]
    fn larger_example() {
        assert_eq!(part1(COMPARE_TO_EIGHT).unwrap(), 999);
        assert_eq!(part2(COMPARE_TO_EIGHT).unwrap(), 999);
        assert_eq!(diagnose(COMPARE_TO_EIGHT, 8).unwrap(), 1000);
        assert_eq!(diagnose(COMPARE_TO_EIGHT, 9).unwrap(), 1001);
    }

    #[test]
    fn failed_self_test() {
        assert!(matches!(
            part1("104,0,104,3,104,42,99"),
            Err(Error::UnexpectedOutput(_))
        ));
        assert_eq!(part1("104,0,104,0,104,42,99").unwrap(), 42);
        assert!(matches!(part1("99"), Err(Error::UnexpectedOutput(_))));
    }
}
