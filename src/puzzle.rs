// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! The calling convention shared by every puzzle, and the registry of implemented puzzles
//!
//! Every puzzle module exposes a `part1` and a `part2` function, each taking the puzzle input as
//! a string slice and returning something that converts into an [Answer].
//!
//! ```
//! use aoc::puzzle::{Answer, Part, find};
//! let puzzle = find(2015, 1).unwrap();
//! assert_eq!(puzzle.solve(Part::One, "(()(()(").unwrap(), Answer::Int(3));
//! ```

use std::fmt::{self, Display};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// The answer to one part of a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Most answers are numbers
    Int(i64),
    /// Some answers have to be read off of a rendered image
    Text(String),
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) if s.contains('\n') => write!(f, "\n{s}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Answer {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

// anything too big for an i64 is kept as its decimal text, so nothing is lost
macro_rules! int_answer {
    ($($t: ty),+) => {$(
        impl From<$t> for Answer {
            fn from(n: $t) -> Self {
                i64::try_from(n).map_or_else(|_| Self::Text(n.to_string()), Self::Int)
            }
        }
    )+};
}

int_answer!(u32, u64, usize);

/// Which half of a puzzle to solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// The first part
    One,
    /// The second part, unlocked after solving the first
    Two,
}

impl Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("1"),
            Self::Two => f.write_str("2"),
        }
    }
}

/// A function solving one part of a puzzle
pub type Solver = fn(&str) -> Result<Answer>;

/// An implemented puzzle
#[derive(Debug, Clone, Copy)]
pub struct Puzzle {
    /// The year of the event the puzzle is from
    pub year: u16,
    /// The day of the event the puzzle is from
    pub day: u8,
    /// The puzzle's title
    pub title: &'static str,
    part1: Solver,
    part2: Solver,
}

impl Puzzle {
    /// Solve `part` of the puzzle for `input`
    pub fn solve(&self, part: Part, input: &str) -> Result<Answer> {
        log::debug!("solving {self} part {part}");
        match part {
            Part::One => (self.part1)(input),
            Part::Two => (self.part2)(input),
        }
    }

    /// Where the input is expected to be found, relative to `input_dir`
    ///
    /// ```
    /// # use std::path::Path;
    /// let puzzle = aoc::puzzle::find(2019, 9).unwrap();
    /// assert_eq!(
    ///     puzzle.input_path(Path::new("inputs")),
    ///     Path::new("inputs/2019/09/input.txt")
    /// );
    /// ```
    pub fn input_path(&self, input_dir: &Path) -> PathBuf {
        input_dir
            .join(self.year.to_string())
            .join(format!("{:02}", self.day))
            .join("input.txt")
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {:02} ({})", self.year, self.day, self.title)
    }
}

macro_rules! puzzles {
    ($($year: literal day $day: literal => $y: ident::$d: ident, $title: literal;)+) => {
        /// Every implemented puzzle, in chronological order
        pub static PUZZLES: &[Puzzle] = &[$(
            Puzzle {
                year: $year,
                day: $day,
                title: $title,
                part1: |input| crate::$y::$d::part1(input).map(Answer::from),
                part2: |input| crate::$y::$d::part2(input).map(Answer::from),
            },
        )+];
    };
}

puzzles! {
    2015 day 1 => y2015::day01, "Not Quite Lisp";
    2015 day 2 => y2015::day02, "I Was Told There Would Be No Math";
    2018 day 23 => y2018::day23, "Experimental Emergency Teleportation";
    2019 day 2 => y2019::day02, "1202 Program Alarm";
    2019 day 5 => y2019::day05, "Sunny with a Chance of Asteroids";
    2019 day 7 => y2019::day07, "Amplification Circuit";
    2019 day 9 => y2019::day09, "Sensor Boost";
    2019 day 11 => y2019::day11, "Space Police";
    2019 day 19 => y2019::day19, "Tractor Beam";
}

/// Look up the puzzle for `year` and `day`
pub fn find(year: u16, day: u8) -> Result<&'static Puzzle> {
    PUZZLES
        .iter()
        .find(|p| p.year == year && p.day == day)
        .ok_or(Error::Unimplemented { year, day })
}

/// Every implemented puzzle from `year`
pub fn for_year(year: u16) -> impl Iterator<Item = &'static Puzzle> {
    PUZZLES.iter().filter(move |p| p.year == year)
}

/// Read a puzzle input, keeping track of the path if that fails
pub fn read_input(path: &Path) -> Result<String> {
    log::info!("reading input from {}", path.display());
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}
