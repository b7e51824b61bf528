// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Tractor Beam](https://adventofcode.com/2019/day/19)
//!
//! The drone system is an Intcode program which takes an `x` and a `y` coordinate, then outputs
//! `1` if the tractor beam affects that point, or `0` if it doesn't. Each program run checks only
//! one point.

use super::load;
use crate::intcode::prelude::*;
use crate::{Error, Result};

const SCAN_SIZE: i64 = 50;
const SHIP_SIZE: i64 = 100;

/// Rows to give up after when looking for somewhere the ship fits
const MAX_ROW: i64 = 10_000;
/// How far right of the emitter the beam's left edge can be, per row down
const MAX_EDGE_SLOPE: i64 = 10;

/// Deploy a drone to `(x, y)` with a fresh copy of `drones`
fn deploy(drones: &Interpreter, x: i64, y: i64) -> Result<bool> {
    let (output, state) = drones.clone().run_through_inputs([x, y])?;
    match (&output[..], state) {
        (&[0], State::Halted) => Ok(false),
        (&[1], State::Halted) => Ok(true),
        _ => Err(Error::UnexpectedOutput(format!(
            "drone at ({x}, {y}) reported {output:?} and stopped {state:?}"
        ))),
    }
}

/// Count the affected points with `0 <= x < size` and `0 <= y < size`
fn affected_points(mut beam: impl FnMut(i64, i64) -> Result<bool>, size: i64) -> Result<usize> {
    let mut count = 0;
    for y in 0..size {
        for x in 0..size {
            if beam(x, y)? {
                count += 1;
            }
        }
    }
    Ok(count)
}

/// Find the `size` by `size` square closest to the emitter that fits entirely in the beam,
/// returning `x * 10000 + y` for its top-left corner.
///
/// Rather than mapping out the whole beam, this follows its left edge down, one row at a time,
/// treating each row as the bottom row of the square. The square fits as soon as the point `size -
/// 1` above and to the right of the edge is in the beam too.
fn closest_fit(mut beam: impl FnMut(i64, i64) -> Result<bool>, size: i64) -> Result<i64> {
    let mut left = 0;
    for bottom in (size - 1)..MAX_ROW {
        // close to the emitter, some rows miss the beam entirely
        let mut edge = None;
        for x in left..=MAX_EDGE_SLOPE * (bottom + 1) {
            if beam(x, bottom)? {
                edge = Some(x);
                break;
            }
        }
        let Some(x) = edge else {
            continue;
        };
        left = x;
        let top = bottom - (size - 1);
        if beam(x + size - 1, top)? {
            log::debug!("{size}x{size} square fits with its top-left corner at ({x}, {top})");
            return Ok(x * 10_000 + top);
        }
    }
    Err(Error::NoSolution("the beam never got wide enough"))
}

/// The number of points affected by the tractor beam in the 50x50 area closest to the emitter
pub fn part1(input: &str) -> Result<usize> {
    let drones = load(input)?;
    affected_points(|x, y| deploy(&drones, x, y), SCAN_SIZE)
}

/// Where Santa's 100x100 ship fits in the beam, closest to the emitter, as `x * 10000 + y`
pub fn part2(input: &str) -> Result<i64> {
    let drones = load(input)?;
    closest_fit(|x, y| deploy(&drones, x, y), SHIP_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A beam covering every point with `x <= y <= 2x`
    const WEDGE: &str = "3,100,3,101,7,101,100,102,1002,100,2,103,7,103,101,104,\
1,102,104,105,1008,105,0,107,4,107,99";

    fn wedge(x: i64, y: i64) -> Result<bool> {
        Ok(x <= y && y <= 2 * x)
    }

    #[test]
    fn drone_program() {
        let drones = load(WEDGE).unwrap();
        for (x, y) in [(0, 0), (3, 4), (3, 6), (3, 7), (4, 3), (10, 20), (10, 21)] {
            assert_eq!(deploy(&drones, x, y).unwrap(), wedge(x, y).unwrap(), "({x}, {y})");
        }
    }

    #[test]
    fn scanning() {
        assert_eq!(affected_points(wedge, 50).unwrap(), 650);
        assert_eq!(part1(WEDGE).unwrap(), 650);
    }

    #[test]
    fn fitting() {
        assert_eq!(closest_fit(wedge, 10).unwrap(), 18 * 10_000 + 27);
        assert_eq!(part2(WEDGE).unwrap(), 198 * 10_000 + 297);
    }

    #[test]
    fn gappy_beam() {
        // a narrow beam that skips rows near the emitter
        let beam = |x: i64, y: i64| Ok((y == 0 && x == 0) || (y >= 5 && 3 * x >= y && 2 * x <= y));
        assert_eq!(closest_fit(beam, 2).unwrap(), closest_fit_brute_force(beam, 2));
    }

    fn closest_fit_brute_force(beam: impl Fn(i64, i64) -> Result<bool>, size: i64) -> i64 {
        let fits = |x: i64, y: i64| {
            (0..size).all(|dy| (0..size).all(|dx| beam(x + dx, y + dy).unwrap()))
        };
        (0..200)
            .find_map(|y| (0..200).find(|&x| fits(x, y)).map(|x| x * 10_000 + y))
            .unwrap()
    }

    #[test]
    fn broken_drone() {
        assert!(matches!(
            part1("3,0,3,0,104,2,99"),
            Err(Error::UnexpectedOutput(_))
        ));
    }
}
