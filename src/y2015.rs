// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Advent of Code 2015](https://adventofcode.com/2015)

pub mod day01;
pub mod day02;
