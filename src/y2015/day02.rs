// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [I Was Told There Would Be No Math](https://adventofcode.com/2015/day/2)
//!
//! Each line of input gives the dimensions of a present as `LxWxH`.

use crate::error::parse_int;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Present {
    /// dimensions, sorted from smallest to largest
    dims: [u64; 3],
}

impl Present {
    fn parse(line: &str, line_no: usize) -> Result<Self> {
        let mut parts = line.trim().split('x');
        let mut dims = [0; 3];
        for dim in &mut dims {
            let text = parts.next().ok_or(Error::Malformed {
                line: line_no,
                reason: "expected three dimensions",
            })?;
            *dim = parse_int(text, line_no)?;
        }
        if parts.next().is_some() {
            return Err(Error::Malformed {
                line: line_no,
                reason: "expected exactly three dimensions",
            });
        }
        dims.sort_unstable();
        Ok(Self { dims })
    }

    fn paper(self) -> u64 {
        let [a, b, c] = self.dims;
        2 * (a * b + b * c + c * a) + a * b
    }

    fn ribbon(self) -> u64 {
        let [a, b, c] = self.dims;
        2 * (a + b) + a * b * c
    }
}

fn presents(input: &str) -> impl Iterator<Item = Result<Present>> + '_ {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Present::parse(line, i + 1))
}

/// Total square feet of wrapping paper: each present's surface area, plus slack equal to the area
/// of its smallest side
pub fn part1(input: &str) -> Result<u64> {
    presents(input).map(|p| p.map(Present::paper)).sum()
}

/// Total feet of ribbon: the smallest perimeter of each present, plus its volume for the bow
pub fn part2(input: &str) -> Result<u64> {
    presents(input).map(|p| p.map(Present::ribbon)).sum()
}
