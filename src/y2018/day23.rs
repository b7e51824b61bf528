// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Experimental Emergency Teleportation](https://adventofcode.com/2018/day/23)
//!
//! Each line of input describes a nanobot as `pos=<X,Y,Z>, r=R`: a position in 3D space, and
//! a signal radius measured in Manhattan distance.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::parse_int;
use crate::{Error, Result};

static NANOBOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^pos=<\s*(-?\d+),\s*(-?\d+),\s*(-?\d+)>,\s*r=(\d+)$").expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Nanobot {
    pos: [i64; 3],
    radius: i64,
}

fn manhattan(a: [i64; 3], b: [i64; 3]) -> i64 {
    a.iter().zip(b).map(|(a, b)| (a - b).abs()).sum()
}

impl Nanobot {
    fn parse(line: &str, line_no: usize) -> Result<Self> {
        let caps = NANOBOT.captures(line.trim()).ok_or(Error::Malformed {
            line: line_no,
            reason: "expected `pos=<X,Y,Z>, r=R`",
        })?;
        Ok(Self {
            pos: [
                parse_int(&caps[1], line_no)?,
                parse_int(&caps[2], line_no)?,
                parse_int(&caps[3], line_no)?,
            ],
            radius: parse_int(&caps[4], line_no)?,
        })
    }

    fn in_range(&self, point: [i64; 3]) -> bool {
        manhattan(self.pos, point) <= self.radius
    }

    /// Whether any point of `cube` is in range
    fn reaches(&self, cube: &Cube) -> bool {
        cube.distance_to(self.pos) <= self.radius
    }
}

fn parse(input: &str) -> Result<Vec<Nanobot>> {
    let bots = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Nanobot::parse(line, i + 1))
        .collect::<Result<Vec<_>>>()?;
    if bots.is_empty() {
        return Err(Error::NoSolution("there are no nanobots"));
    }
    Ok(bots)
}

/// An axis-aligned cube of points, `size` wide along each axis, starting at `min`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cube {
    min: [i64; 3],
    size: i64,
}

impl Cube {
    /// The smallest cube with a power-of-two size containing every point in range of any bot
    fn enclosing(bots: &[Nanobot]) -> Self {
        let mut min = [i64::MAX; 3];
        let mut max = [i64::MIN; 3];
        for bot in bots {
            for axis in 0..3 {
                min[axis] = min[axis].min(bot.pos[axis] - bot.radius);
                max[axis] = max[axis].max(bot.pos[axis] + bot.radius);
            }
        }
        let span = (0..3).map(|axis| max[axis] - min[axis] + 1).max().unwrap_or(1);
        let mut size = 1;
        while size < span {
            size *= 2;
        }
        Self { min, size }
    }

    /// Manhattan distance from `point` to the closest point within the cube
    fn distance_to(&self, point: [i64; 3]) -> i64 {
        (0..3)
            .map(|axis| {
                let lo = self.min[axis];
                let hi = lo + self.size - 1;
                let p = point[axis];
                if p < lo {
                    lo - p
                } else if p > hi {
                    p - hi
                } else {
                    0
                }
            })
            .sum()
    }

    fn octants(self) -> impl Iterator<Item = Self> {
        let half = self.size / 2;
        (0..8).map(move |i| {
            let mut min = self.min;
            for (axis, corner) in min.iter_mut().enumerate() {
                if i & (1 << axis) != 0 {
                    *corner += half;
                }
            }
            Self { min, size: half }
        })
    }
}

/// A cube waiting to be searched, ordered so that the most promising one is the greatest
#[derive(Debug, PartialEq, Eq)]
struct Candidate {
    /// number of bots whose range reaches into the cube, an upper bound for any point in it
    reaching: usize,
    cube: Cube,
    from_origin: i64,
}

impl Candidate {
    fn new(cube: Cube, bots: &[Nanobot]) -> Self {
        Self {
            reaching: bots.iter().filter(|bot| bot.reaches(&cube)).count(),
            from_origin: cube.distance_to([0; 3]),
            cube,
        }
    }

    fn key(&self) -> (usize, Reverse<i64>, Reverse<i64>) {
        (self.reaching, Reverse(self.from_origin), Reverse(self.cube.size))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key()
            .cmp(&other.key())
            .then_with(|| other.cube.min.cmp(&self.cube.min))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// How many nanobots are in range of the one with the largest signal radius, including itself
pub fn part1(input: &str) -> Result<usize> {
    let bots = parse(input)?;
    let strongest = bots
        .iter()
        .max_by_key(|bot| bot.radius)
        .ok_or(Error::NoSolution("there are no nanobots"))?;
    Ok(bots.iter().filter(|bot| strongest.in_range(bot.pos)).count())
}

/// The shortest Manhattan distance from the origin to a point in range of as many nanobots as
/// possible
///
/// Searches an octree best-first: cubes are split into octants until a single point is reached.
/// Since the number of bots reaching a cube can only shrink, and its distance from the origin can
/// only grow, when splitting it, the first single point to come off of the queue is the answer.
pub fn part2(input: &str) -> Result<i64> {
    let bots = parse(input)?;
    let mut queue = BinaryHeap::from([Candidate::new(Cube::enclosing(&bots), &bots)]);
    while let Some(candidate) = queue.pop() {
        if candidate.cube.size == 1 {
            log::debug!(
                "{:?} is in range of {} nanobots",
                candidate.cube.min,
                candidate.reaching
            );
            return Ok(candidate.from_origin);
        }
        queue.extend(
            candidate
                .cube
                .octants()
                .map(|cube| Candidate::new(cube, &bots)),
        );
    }
    Err(Error::NoSolution("ran out of cubes to search"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PART1_EXAMPLE: &str = "\
pos=<0,0,0>, r=4
pos=<1,0,0>, r=1
pos=<4,0,0>, r=3
pos=<0,2,0>, r=1
pos=<0,5,0>, r=3
pos=<0,0,3>, r=1
pos=<1,1,1>, r=1
pos=<1,1,2>, r=1
pos=<1,3,1>, r=1
";

    const PART2_EXAMPLE: &str = "\
pos=<10,12,12>, r=2
pos=<12,14,12>, r=2
pos=<16,12,12>, r=4
pos=<14,14,14>, r=6
pos=<50,50,50>, r=200
pos=<10,10,10>, r=5
";

    fn bot(x: i64, y: i64, z: i64, radius: i64) -> Nanobot {
        Nanobot {
            pos: [x, y, z],
            radius,
        }
    }

    #[test]
    fn parsing() {
        assert_eq!(
            Nanobot::parse("pos=<1,-2,3>, r=10", 1).unwrap(),
            bot(1, -2, 3, 10)
        );
        assert!(matches!(
            Nanobot::parse("pos=<1,2>, r=10", 4),
            Err(Error::Malformed { line: 4, .. })
        ));
    }

    #[test]
    fn distances() {
        let a = bot(1, 2, 3, 10);
        let b = bot(2, 3, 5, 10);
        assert_eq!(manhattan(a.pos, b.pos), 4);
        assert_eq!(manhattan(b.pos, a.pos), 4);
    }

    #[test]
    fn ranges() {
        let origin = bot(0, 0, 0, 4);
        assert!(origin.in_range([1, 0, 0]));
        assert!(origin.in_range([4, 0, 0]));
        assert!(origin.in_range([0, 2, 0]));
        assert!(!origin.in_range([0, 5, 0]));
    }

    #[test]
    fn cube_distance() {
        let cube = Cube {
            min: [0, 0, 0],
            size: 4,
        };
        assert_eq!(cube.distance_to([2, 1, 3]), 0);
        assert_eq!(cube.distance_to([5, -1, 3]), 3);
        assert_eq!(cube.octants().count(), 8);
        assert!(cube.octants().all(|c| c.size == 2));
        assert!(cube.octants().any(|c| c.min == [2, 2, 2]));
    }

    #[test]
    fn part1_example() {
        assert_eq!(part1(PART1_EXAMPLE).unwrap(), 7);
    }

    #[test]
    fn part2_example() {
        assert_eq!(part2(PART2_EXAMPLE).unwrap(), 36);
    }

    #[test]
    fn best_point_between_origin_and_bots() {
        assert_eq!(part2("pos=<10,0,0>, r=5\n").unwrap(), 5);
        assert_eq!(part2("pos=<10,0,0>, r=6\npos=<11,0,0>, r=7\n").unwrap(), 4);
        assert_eq!(part2("pos=<-10,-3,7>, r=4\n").unwrap(), 16);
    }

    #[test]
    fn enclosing_cube_covers_ranges() {
        let cube = Cube::enclosing(&[bot(10, 0, 0, 5)]);
        assert_eq!(cube.distance_to([5, 0, 0]), 0);
        assert_eq!(cube.distance_to([10, -5, 5]), 0);
        assert_eq!(cube.size, 16);
    }

    #[test]
    fn no_bots() {
        assert!(matches!(part1("\n"), Err(Error::NoSolution(_))));
    }
}
