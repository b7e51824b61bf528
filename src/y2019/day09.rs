// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Sensor Boost](https://adventofcode.com/2019/day/9)

use super::load;
use crate::intcode::prelude::*;
use crate::{Error, Result};

/// Run the BOOST program in the given mode, which should output exactly one keycode or coordinate
fn boost(input: &str, mode: i64) -> Result<i64> {
    let (output, state) = load(input)?.run_through_inputs([mode])?;
    match (&output[..], state) {
        (&[value], State::Halted) => Ok(value),
        // anything else is a list of malfunctioning opcodes
        _ => Err(Error::UnexpectedOutput(format!(
            "BOOST reported {output:?} and stopped {state:?}"
        ))),
    }
}

/// The BOOST keycode produced in test mode
pub fn part1(input: &str) -> Result<i64> {
    boost(input, 1)
}

/// The coordinates of the distress signal, found in sensor boost mode
pub fn part2(input: &str) -> Result<i64> {
    boost(input, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_numbers() {
        assert_eq!(part1("104,1125899906842624,99").unwrap(), 1_125_899_906_842_624);
        let product = part2("1102,34915192,34915192,7,4,7,99,0").unwrap();
        assert_eq!(product.to_string().len(), 16);
    }

    #[test]
    fn relative_input() {
        // reads the mode into relative address 3 (absolute 1003), then outputs it
        assert_eq!(part2("109,1000,203,3,204,3,99").unwrap(), 2);
    }

    #[test]
    fn malfunction_report() {
        assert!(matches!(
            part1("104,203,104,0,99"),
            Err(Error::UnexpectedOutput(_))
        ));
    }
}
