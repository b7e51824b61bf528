// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Not Quite Lisp](https://adventofcode.com/2015/day/1)
//!
//! Santa follows the instructions one character at a time: `(` means up one floor, and `)` means
//! down one floor.

use crate::{Error, Result};

/// How each character moves Santa. Anything else (like a trailing newline) doesn't move him.
fn moves(input: &str) -> impl Iterator<Item = i64> + '_ {
    input.chars().map(|c| match c {
        '(' => 1,
        ')' => -1,
        _ => 0,
    })
}

/// The floor Santa ends up on
pub fn part1(input: &str) -> Result<i64> {
    Ok(moves(input).sum())
}

/// The one-based position of the character that first sends Santa into the basement
pub fn part2(input: &str) -> Result<usize> {
    moves(input)
        .scan(0, |floor, step| {
            *floor += step;
            Some(*floor)
        })
        .position(|floor| floor == -1)
        .map(|i| i + 1)
        .ok_or(Error::NoSolution("Santa never enters the basement"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part1_examples() {
        for (input, floor) in [
            ("(())", 0),
            ("()()", 0),
            ("(((", 3),
            ("(()(()(", 3),
            ("))(((((", 3),
            ("())", -1),
            ("))(", -1),
            (")))", -3),
            (")())())", -3),
        ] {
            assert_eq!(part1(input).unwrap(), floor, "{input}");
        }
    }

    #[test]
    fn part2_examples() {
        assert_eq!(part2(")").unwrap(), 1);
        assert_eq!(part2("()())").unwrap(), 5);
        assert_eq!(part2("(()))\n").unwrap(), 5);
    }

    #[test]
    fn never_reaching_basement() {
        assert!(matches!(part2("(()"), Err(Error::NoSolution(_))));
    }
}
