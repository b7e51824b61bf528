// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Advent of Code 2018](https://adventofcode.com/2018)

pub mod day23;
