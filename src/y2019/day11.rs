// SPDX-FileCopyrightText: 2024 - 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Space Police](https://adventofcode.com/2019/day/11)
//!
//! An emergency hull painting robot is driven by an Intcode program: it's given the color of the
//! panel it's on, and replies with the color to paint it and which way to turn before moving
//! forward one panel.

use std::collections::HashMap;

use itertools::Itertools;

use super::load;
use crate::intcode::State;
use crate::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
enum PanelColor {
    Black { repainted: bool },
    White,
}

impl Default for PanelColor {
    fn default() -> Self {
        Self::Black { repainted: false }
    }
}

impl PanelColor {
    fn report(self) -> i64 {
        i64::from(self == Self::White)
    }

    fn paint(&mut self, color: i64) -> Result<()> {
        *self = match color {
            0 => Self::Black { repainted: true },
            1 => Self::White,
            _ => {
                return Err(Error::UnexpectedOutput(format!(
                    "invalid paint color {color}"
                )));
            }
        };
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    fn rotate_left(&mut self) {
        *self = match self {
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
            Self::Right => Self::Up,
        }
    }

    fn rotate_right(&mut self) {
        *self = match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
struct Location {
    x: i32,
    y: i32,
}

impl std::ops::AddAssign<Direction> for Location {
    fn add_assign(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.y -= 1,
            Direction::Right => self.x += 1,
            Direction::Down => self.y += 1,
            Direction::Left => self.x -= 1,
        }
    }
}

/// Drive the robot until its brain halts, starting on a panel of color `start`.
///
/// `brain` is given the color of the current panel, and returns whatever it output along with the
/// state it stopped in.
fn paint_hull(
    mut brain: impl FnMut(i64) -> Result<(Vec<i64>, State)>,
    start: PanelColor,
) -> Result<HashMap<Location, PanelColor>> {
    let mut panels = HashMap::from([(Location::default(), start)]);
    let mut location = Location::default();
    let mut direction = Direction::Up;

    loop {
        let (outputs, state) = brain(panels.entry(location).or_default().report())?;
        if outputs.len() % 2 != 0 {
            return Err(Error::UnexpectedOutput(format!(
                "robot output wasn't in pairs: {outputs:?}"
            )));
        }
        for (color, turn) in outputs.into_iter().tuples() {
            panels.entry(location).or_default().paint(color)?;
            match turn {
                0 => direction.rotate_left(),
                1 => direction.rotate_right(),
                i => {
                    return Err(Error::UnexpectedOutput(format!(
                        "invalid direction code {i}"
                    )));
                }
            }
            location += direction;
        }
        if state == State::Halted {
            break Ok(panels);
        }
    }
}

/// Drive the robot with the Intcode program in `input`
fn run_robot(input: &str, start: PanelColor) -> Result<HashMap<Location, PanelColor>> {
    let mut interpreter = load(input)?;
    paint_hull(
        |color| Ok(interpreter.run_through_inputs([color])?),
        start,
    )
}

/// Draw the white panels, one row per line, trimming trailing blank space
fn render(panels: &HashMap<Location, PanelColor>) -> String {
    let white: Vec<Location> = panels
        .iter()
        .filter(|&(_, &color)| color == PanelColor::White)
        .map(|(&location, _)| location)
        .collect();
    let (Some((min_x, max_x)), Some((min_y, max_y))) = (
        white.iter().map(|l| l.x).minmax().into_option(),
        white.iter().map(|l| l.y).minmax().into_option(),
    ) else {
        return String::new();
    };

    (min_y..=max_y)
        .map(|y| {
            let row: String = (min_x..=max_x)
                .map(|x| {
                    if white.contains(&Location { x, y }) {
                        '#'
                    } else {
                        ' '
                    }
                })
                .collect();
            row.trim_end().to_owned()
        })
        .join("\n")
}

/// The number of panels painted at least once, starting on a black panel
pub fn part1(input: &str) -> Result<usize> {
    let panels = run_robot(input, PanelColor::default())?;
    Ok(panels
        .into_values()
        .filter(|&color| color != PanelColor::default())
        .count())
}

/// The registration identifier painted when starting on a white panel
pub fn part2(input: &str) -> Result<String> {
    let panels = run_robot(input, PanelColor::White)?;
    log::debug!("robot visited {} panels", panels.len());
    Ok(render(&panels))
}
