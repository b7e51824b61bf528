// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! [Amplification Circuit](https://adventofcode.com/2019/day/7)
//!
//! Five amplifiers, each running a copy of the same program, are wired in series. Each is first
//! given its phase setting, then the signal from the previous amplifier (or `0` for the first).

use std::ops::RangeInclusive;

use itertools::Itertools;

use super::load;
use crate::intcode::prelude::*;
use crate::{Error, Result};

const AMPLIFIERS: usize = 5;

/// Run each amplifier until it needs more input or halts, returning the signal it passes on.
fn amplify(amp: &mut Interpreter, inputs: impl IntoIterator<Item = i64>) -> Result<(i64, State)> {
    let (outputs, state) = amp.run_through_inputs(inputs)?;
    match outputs[..] {
        [signal] => Ok((signal, state)),
        _ => Err(Error::UnexpectedOutput(format!(
            "amplifier should output exactly one signal at a time, got {outputs:?}"
        ))),
    }
}

/// Wire up the amplifiers with `phases` in a single chain
fn chain(template: &Interpreter, phases: &[i64]) -> Result<i64> {
    phases.iter().try_fold(0, |signal, &phase| {
        amplify(&mut template.clone(), [phase, signal]).map(|(signal, _)| signal)
    })
}

/// Wire up the amplifiers with `phases` so the last feeds back into the first, and keep the
/// signal going around until the last one halts
fn feedback_loop(template: &Interpreter, phases: &[i64]) -> Result<i64> {
    let mut amps = vec![template.clone(); phases.len()];
    for (amp, &phase) in amps.iter_mut().zip(phases) {
        let (outputs, state) = amp.run_through_inputs([phase])?;
        if state != State::Awaiting || !outputs.is_empty() {
            return Err(Error::UnexpectedOutput(
                "amplifier didn't wait for a signal after its phase setting".into(),
            ));
        }
    }

    let mut signal = 0;
    loop {
        let mut halted = false;
        for amp in &mut amps {
            let (next, state) = amplify(amp, [signal])?;
            signal = next;
            halted = state == State::Halted;
        }
        if halted {
            break Ok(signal);
        }
    }
}

/// Try every ordering of the phase settings in `phases`, returning the strongest final signal
fn best_signal(
    input: &str,
    phases: RangeInclusive<i64>,
    run: fn(&Interpreter, &[i64]) -> Result<i64>,
) -> Result<i64> {
    let template = load(input)?;
    let mut best: Option<(i64, Vec<i64>)> = None;
    for order in phases.permutations(AMPLIFIERS) {
        let signal = run(&template, &order)?;
        if best.as_ref().is_none_or(|(strongest, _)| signal > *strongest) {
            best = Some((signal, order));
        }
    }
    let (signal, order) = best.ok_or(Error::NoSolution("not enough phase settings"))?;
    log::debug!("strongest signal {signal} comes from phase settings {order:?}");
    Ok(signal)
}

/// The highest signal that can be sent to the thrusters with the amplifiers in series
pub fn part1(input: &str) -> Result<i64> {
    best_signal(input, 0..=4, chain)
}

/// The highest signal that can be sent to the thrusters with the amplifiers in a feedback loop
pub fn part2(input: &str) -> Result<i64> {
    best_signal(input, 5..=9, feedback_loop)
}
