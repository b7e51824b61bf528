// SPDX-FileCopyrightText: 2024 - 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD
#![warn(missing_docs)]

//! Solutions to [Advent of Code] puzzles, along with the [Intcode] interpreter that the 2019
//! puzzles share
//!
//! Each puzzle lives in its own module under its year, and has a `part1` and a `part2` function
//! which take the puzzle input and return the answer. The [puzzle] module keeps a registry of
//! them all, which is what the `aoc` binary uses to find the right one to run.
//!
//! # Example
//!
//! ```rust
//! use aoc::y2015::day02;
//! assert_eq!(day02::part1("2x3x4\n1x1x10\n").unwrap(), 58 + 43);
//! ```
//!
//! [Advent of Code]: https://adventofcode.com
//! [Intcode]: https://esolangs.org/wiki/Intcode

mod error;
pub mod intcode;
pub mod puzzle;

pub mod y2015;
pub mod y2018;
pub mod y2019;

pub use error::{Error, Result};
