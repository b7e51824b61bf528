// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Solve Advent of Code puzzles, reading inputs from the conventional place on disk

use std::error::Error;
use std::path::PathBuf;

use aoc::puzzle::{self, Part, Puzzle};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

#[derive(PartialEq, Clone, Copy, ValueEnum)]
enum PartArg {
    #[value(name = "1", alias("one"))]
    One,
    #[value(name = "2", alias("two"))]
    Two,
}

impl From<PartArg> for Part {
    fn from(part: PartArg) -> Self {
        match part {
            PartArg::One => Part::One,
            PartArg::Two => Part::Two,
        }
    }
}

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

const INPUT_DIR_HELP: &str =
    "Directory holding puzzle inputs\ninputs are read from <INPUT_DIR>/<YEAR>/<DAY>/input.txt";

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Advent of Code solutions", long_about = None)]
struct Args {
    #[arg(help = "The year of the event")]
    year: u16,
    #[arg(help = "The day to solve\nsolves every implemented day of the year if unset")]
    day: Option<u8>,
    #[arg(help = "Only solve one part")]
    #[arg(short, long)]
    part: Option<PartArg>,
    #[arg(help = "Read the input from this file instead")]
    #[arg(short, long, requires = "day")]
    input: Option<PathBuf>,
    #[arg(help = INPUT_DIR_HELP.split_at(31).0)]
    #[arg(long_help = INPUT_DIR_HELP)]
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    input_dir: PathBuf,
    #[arg(help = "Log more, can be repeated")]
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn parts(&self) -> Vec<Part> {
        match self.part {
            Some(part) => vec![part.into()],
            None => vec![Part::One, Part::Two],
        }
    }
}

fn run(puzzle: &Puzzle, args: &Args) -> Result<(), Box<dyn Error>> {
    let path = match args.input.as_deref() {
        Some(path) => path.to_owned(),
        None => puzzle.input_path(&args.input_dir),
    };
    let input = puzzle::read_input(&path)?;
    for part in args.parts() {
        let answer = puzzle.solve(part, &input)?;
        println!("{} day {:02} part {part}: {answer}", puzzle.year, puzzle.day);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let puzzles: Vec<&Puzzle> = match args.day {
        Some(day) => vec![puzzle::find(args.year, day)?],
        None => puzzle::for_year(args.year).collect(),
    };
    if puzzles.is_empty() {
        return Err(format!("no puzzles from {} are implemented", args.year).into());
    }
    for puzzle in puzzles {
        run(puzzle, &args)?;
    }
    Ok(())
}
