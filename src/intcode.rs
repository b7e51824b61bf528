// SPDX-FileCopyrightText: 2024 - 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! The Intcode interpreter shared by the 2019 puzzles
//!
//! The interpreter is fully functional, with all of the [Opcodes] and [Parameter Modes] defined in
//! the completed Intcode computer for [Day 9].
//!
//! # Example
//!
//! ```rust
//! use aoc::intcode::prelude::*;
//! let mut interpreter = Interpreter::new(vec![104, 1024, 99]);
//!
//! assert_eq!(
//!     interpreter.run_through_inputs(empty()).unwrap(),
//!     (vec![1024], State::Halted)
//! );
//! ```
//!
//! A program that needs input it was not given stops in the [Awaiting](State::Awaiting) state,
//! and picks up where it left off on the next call:
//!
//! ```rust
//! use aoc::intcode::prelude::*;
//! let mut interpreter = Interpreter::new(parse_program("3,9,1001,9,5,9,4,9,99,0").unwrap());
//!
//! assert_eq!(interpreter.run_through_inputs(empty()), Ok((vec![], State::Awaiting)));
//! assert_eq!(interpreter.run_through_inputs([37]), Ok((vec![42], State::Halted)));
//! ```
//!
//! [Opcodes]: https://esolangs.org/wiki/Intcode#Opcodes
//! [Parameter Modes]: https://esolangs.org/wiki/Intcode#Parameter_Modes
//! [Day 9]: https://adventofcode.com/2019/day/9

mod internals;
mod mmu;
pub mod trace;

use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::ops::{Index, IndexMut};

use log::Level;
use thiserror::Error;

use mmu::PagedMemory;
use trace::{Trace, TracedInstr};

/// A small module that re-exports items needed when working with the Intcode interpreter
pub mod prelude {
    pub use super::{Interpreter, State, StepOutcome, parse_program};
    pub use std::iter::empty;
}

/// The state of the interpreter, returned whenever it has stopped.
///
/// [Awaiting](State::Awaiting) means that there are more instructions to execute, but all input
/// has been consumed and the next instruction requires input.
///
/// [Halted](State::Halted) means that a `HALT` instruction has been executed. Once it's been
/// returned, no more instructions will be executed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum State {
    /// Execution is awaiting input
    Awaiting,
    /// Execution has halted
    Halted,
}

/// The result of successfully executing a single instruction
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StepOutcome {
    /// The instruction ran, and there's more to run
    Running,
    /// The interpreter can't continue without outside help, or at all
    Stopped(State),
}

/// An attempt was made to access memory at a negative address
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("attempted to access negative address {0}")]
pub struct NegativeMemAccess(pub i64);

/// An error occured when executing an Intcode instruction
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum InterpreterError {
    /// An invalid opcode was encountered
    #[error("encountered unrecognized opcode in instruction {0}")]
    UnrecognizedOpcode(i64),
    /// An unknown parameter mode was encountered
    #[error("encountered unknown parameter mode {mode} in instruction {op}")]
    UnknownMode {
        /// the full instruction
        op: i64,
        /// the offending mode digit
        mode: i64,
    },
    /// A negative memory address was encountered
    #[error(transparent)]
    NegativeMemAccess(#[from] NegativeMemAccess),
    /// An instruction tried to write to an immediate destination
    #[error("instruction attempted to write to immediate {0}")]
    WriteToImmediate(i64),
    /// A jump instruction tried to move the instruction pointer to a negative address
    #[error("attempted to jump to negative address {0}")]
    JumpToNegative(i64),
    /// An instruction's arithmetic, or an address it computed, overflowed an `i64`
    #[error("arithmetic overflow in instruction {0}")]
    Overflow(i64),
    /// An earlier error left the interpreter in an unusable state
    #[error("interpreter was poisoned by an earlier error")]
    Poisoned,
}

/// Failed to parse the comma-separated text of an Intcode program
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("entry {index} of intcode program ({text:?}) is not an integer: {source}")]
pub struct ParseProgramError {
    /// zero-based position of the bad entry
    pub index: usize,
    /// the bad entry itself
    pub text: String,
    /// the underlying parse failure
    pub source: ParseIntError,
}

/// Parse a program in the comma-separated format puzzle inputs use
///
/// ```
/// # use aoc::intcode::parse_program;
/// assert_eq!(parse_program(" 1,-2, 99\n").unwrap(), vec![1, -2, 99]);
/// assert_eq!(parse_program("1,two,3").unwrap_err().index, 1);
/// ```
pub fn parse_program(src: &str) -> Result<Vec<i64>, ParseProgramError> {
    src.trim()
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(index, text)| {
            text.parse().map_err(|source| ParseProgramError {
                index,
                text: text.to_owned(),
                source,
            })
        })
        .collect()
}

/// An Intcode opcode
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[allow(missing_docs, reason = "trivial")]
pub enum OpCode {
    Add = 1,
    Mul = 2,
    In = 3,
    Out = 4,
    Jnz = 5,
    Jz = 6,
    Lt = 7,
    Eq = 8,
    Rbo = 9,
    Halt = 99,
}

impl OpCode {
    /// The number of parameters the instruction takes
    pub const fn param_count(self) -> usize {
        match self {
            Self::Add | Self::Mul | Self::Lt | Self::Eq => 3,
            Self::Jnz | Self::Jz => 2,
            Self::In | Self::Out | Self::Rbo => 1,
            Self::Halt => 0,
        }
    }
}

impl TryFrom<i64> for OpCode {
    type Error = i64;

    fn try_from(i: i64) -> Result<Self, i64> {
        match i {
            1 => Ok(Self::Add),
            2 => Ok(Self::Mul),
            3 => Ok(Self::In),
            4 => Ok(Self::Out),
            5 => Ok(Self::Jnz),
            6 => Ok(Self::Jz),
            7 => Ok(Self::Lt),
            8 => Ok(Self::Eq),
            9 => Ok(Self::Rbo),
            99 => Ok(Self::Halt),
            _ => Err(i),
        }
    }
}

impl Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::In => "IN",
            Self::Out => "OUT",
            Self::Jnz => "JNZ",
            Self::Jz => "JZ",
            Self::Lt => "LT",
            Self::Eq => "EQ",
            Self::Rbo => "RBO",
            Self::Halt => "HALT",
        })
    }
}

/// Parameter mode for Intcode instruction
///
/// Intcode instruction parameters each have a mode:  [positional], [immediate], or [relative].
///
/// When executing an intcode instruction, the instruction's parameters are interpreted in
/// accordance with their associated modes.
///
/// [positional]: ParamMode::Positional
/// [immediate]: ParamMode::Immediate
/// [relative]: ParamMode::Relative
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ParamMode {
    /// Positional Mode
    ///
    /// A parameter in positional mode evaluates to the value at the address specified by the
    /// parameter.
    Positional = 0,
    /// Immediate Mode
    ///
    /// A parameter in immediate mode evaluates directly to the value specified. Instructions which
    /// write to memory may not use immediate mode for their destinations.
    #[doc(alias = "#")]
    Immediate = 1,
    /// Relative Mode
    ///
    /// A parameter in relative mode evaluates to the value at the address specified by the
    /// parameter, added to the [Relative Base], which starts out as `0` but can be modified
    /// throughout the program's execution.
    ///
    /// [Relative Base]: https://adventofcode.com/2019/day/9
    #[doc(alias = "@")]
    Relative = 2,
}

impl ParamMode {
    /// Pull the modes of all three parameters out of the instruction `op`
    ///
    /// Only the hundreds, thousands, and ten thousands places are looked at.
    pub fn extract(op: i64) -> Result<[Self; 3], InterpreterError> {
        let mode = |place: i64| {
            let digit = (op / place) % 10;
            Self::try_from(digit).map_err(|mode| InterpreterError::UnknownMode { op, mode })
        };
        Ok([mode(100)?, mode(1000)?, mode(10_000)?])
    }
}

impl TryFrom<i64> for ParamMode {
    type Error = i64;

    fn try_from(i: i64) -> Result<Self, i64> {
        match i {
            0 => Ok(Self::Positional),
            1 => Ok(Self::Immediate),
            2 => Ok(Self::Relative),
            _ => Err(i),
        }
    }
}

impl Display for ParamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional => Ok(()),
            Self::Immediate => f.write_str("#"),
            Self::Relative => f.write_str("@"),
        }
    }
}

/// An Intcode interpreter, which can optionally keep a [Trace] of the instructions it executes.
///
/// Every executed instruction is also reported through the [log] crate at the `trace` level.
#[derive(Debug, Clone)]
pub struct Interpreter {
    index: i64,
    rel_offset: i64,
    code: PagedMemory,
    poisoned: bool,
    trace: Option<Trace>,
}

// the trace is a record of the past, not part of the machine's state
impl PartialEq for Interpreter {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.rel_offset == other.rel_offset
            && self.poisoned == other.poisoned
            && self.code == other.code
    }
}

impl Index<i64> for Interpreter {
    type Output = i64;

    fn index(&self, i: i64) -> &i64 {
        &self.code[i]
    }
}

impl IndexMut<i64> for Interpreter {
    fn index_mut(&mut self, i: i64) -> &mut i64 {
        &mut self.code[i]
    }
}

impl Interpreter {
    /// Create a new interpreter. Collects `code` into the starting memory state.
    pub fn new(code: impl IntoIterator<Item = i64>) -> Self {
        Self {
            index: 0,
            rel_offset: 0,
            code: code.into_iter().collect(),
            poisoned: false,
            trace: None,
        }
    }

    /// Get the memory at `address`
    #[doc(alias = "peek")]
    pub fn mem_get(&self, address: i64) -> Result<i64, NegativeMemAccess> {
        if address < 0 {
            Err(NegativeMemAccess(address))
        } else {
            Ok(self.code[address])
        }
    }

    /// Manually set a memory location
    #[doc(alias("poke", "write"))]
    pub fn mem_override(&mut self, address: i64, value: i64) -> Result<(), NegativeMemAccess> {
        if address < 0 {
            return Err(NegativeMemAccess(address));
        }
        self.code[address] = value;
        Ok(())
    }

    /// The address of the next instruction to execute
    pub fn instr_ptr(&self) -> i64 {
        self.index
    }

    /// The current relative base
    pub fn rel_base(&self) -> i64 {
        self.rel_offset
    }

    /// Whether an error has left the interpreter unable to continue
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Consume the interpreter, returning a dense copy of its memory from address `0` through
    /// the end of the last memory page with anything other than zeroes in it.
    pub fn into_memory(self) -> Vec<i64> {
        self.code.to_dense()
    }

    /// Execute a single instruction, pulling input from `inputs` if it's an `IN` instruction and
    /// pushing to `outputs` if it's an `OUT` instruction.
    ///
    /// If the instruction needs input and `inputs` is exhausted, nothing changes and
    /// [`StepOutcome::Stopped(State::Awaiting)`](StepOutcome::Stopped) is returned.
    ///
    /// If an error occurs, the interpreter is marked as poisoned, and any further attempt to
    /// execute instructions fails with [`InterpreterError::Poisoned`].
    pub fn exec_instruction(
        &mut self,
        inputs: &mut impl Iterator<Item = i64>,
        outputs: &mut Vec<i64>,
    ) -> Result<StepOutcome, InterpreterError> {
        if self.poisoned {
            return Err(InterpreterError::Poisoned);
        }
        let (opcode, modes) = Self::parse_op(self.code[self.index]).inspect_err(|_| {
            self.poisoned = true;
        })?;

        match opcode {
            OpCode::Add => self.op3(modes, i64::checked_add),
            OpCode::Mul => self.op3(modes, i64::checked_mul),
            OpCode::Lt => self.op3(modes, |a, b| Some(i64::from(a < b))),
            OpCode::Eq => self.op3(modes, |a, b| Some(i64::from(a == b))),
            OpCode::Jnz => self.jump(modes, |v| v != 0),
            OpCode::Jz => self.jump(modes, |v| v == 0),
            OpCode::In => {
                let dest = self.resolve_dest(modes[0], 1)?;
                let Some(input) = inputs.next() else {
                    return Ok(StepOutcome::Stopped(State::Awaiting));
                };
                self.record(&[(self.code[self.index + 1], input)]);
                self.code[dest] = input;
                self.index = self.checked(self.index.checked_add(2))?;
                Ok(StepOutcome::Running)
            }
            OpCode::Out => {
                let val = self.resolve_param(modes[0], 1)?;
                self.record(&[(self.code[self.index + 1], val)]);
                outputs.push(val);
                self.index = self.checked(self.index.checked_add(2))?;
                Ok(StepOutcome::Running)
            }
            OpCode::Rbo => {
                let val = self.resolve_param(modes[0], 1)?;
                let rel_offset = self.checked(self.rel_offset.checked_add(val))?;
                self.record(&[(self.code[self.index + 1], val)]);
                self.rel_offset = rel_offset;
                self.index = self.checked(self.index.checked_add(2))?;
                Ok(StepOutcome::Running)
            }
            OpCode::Halt => {
                self.record(&[]);
                Ok(StepOutcome::Stopped(State::Halted))
            }
        }
    }

    /// Execute until either the program halts, or it tries to read nonexistent input.
    /// Returns `Ok((v, s))`, where `v` is a [`Vec<i64>`] containing all outputs that it found,
    /// and `s` is the [`State`] at the time it stopped.
    ///
    /// On error, it will return an [`InterpreterError`] that reflects the error.
    pub fn run_through_inputs(
        &mut self,
        inputs: impl IntoIterator<Item = i64>,
    ) -> Result<(Vec<i64>, State), InterpreterError> {
        let mut outputs = Vec::new();
        let mut inputs = inputs.into_iter();
        loop {
            if let StepOutcome::Stopped(state) = self.exec_instruction(&mut inputs, &mut outputs)? {
                break Ok((outputs, state));
            }
        }
    }

    /// Pre-compute as much as possible - that is, run everything up to, but not including, the
    /// first `IN`, `OUT`, or `HALT` instruction, bubbling up any errors that occur.
    ///
    /// An instruction that can't be decoded is an error here too, and poisons the interpreter.
    pub fn precompute(&mut self) -> Result<(), InterpreterError> {
        if self.poisoned {
            return Err(InterpreterError::Poisoned);
        }
        loop {
            let (opcode, _) = Self::parse_op(self.code[self.index]).inspect_err(|_| {
                self.poisoned = true;
            })?;
            if matches!(opcode, OpCode::In | OpCode::Out | OpCode::Halt) {
                break Ok(());
            }
            self.exec_instruction(&mut std::iter::empty(), &mut Vec::new())?;
        }
    }

    /// Note the instruction about to be executed in the active trace and the log.
    ///
    /// `resolved` pairs each raw parameter with what it resolved to.
    fn record(&mut self, resolved: &[(i64, i64)]) {
        let logging = log::log_enabled!(Level::Trace);
        if self.trace.is_none() && !logging {
            return;
        }
        let instr = TracedInstr::build(
            self.code[self.index],
            self.index,
            self.rel_offset,
            resolved,
        );
        if logging {
            log::trace!("{instr}");
        }
        if let Some(trace) = self.trace.as_mut() {
            trace.0.push(instr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::*;
    use pretty_assertions::assert_eq;

    /// Example program from day 9, which takes no input and outputs its own code
    #[test]
    fn quine() {
        let quine_code = vec![
            109, 1, 204, -1, 1001, 100, 1, 100, 1008, 100, 16, 101, 1006, 101, 0, 99,
        ];
        let mut interpreter = Interpreter::new(quine_code.clone());
        let (outputs, State::Halted) = interpreter.run_through_inputs(empty()).unwrap() else {
            panic!("Did not halt");
        };
        assert_eq!(quine_code, outputs);
    }

    /// Ensure that stopping due to missing input leaves the interpreter in a sane state that can
    /// be recovered from
    #[test]
    fn missing_input_recoverable() {
        let mut interpreter = Interpreter::new(vec![3, 10, 4, 10, 99]);
        let old_state = interpreter.clone();

        let stalled_run = interpreter.run_through_inputs(empty());

        assert_eq!(stalled_run, Ok((vec![], State::Awaiting)));
        assert_eq!(interpreter, old_state);

        // make sure that interpreter can still be used
        assert_eq!(
            interpreter.run_through_inputs(vec![1]),
            Ok((vec![1], State::Halted))
        );
    }

    #[test]
    fn halted_stays_halted() {
        let mut interpreter = Interpreter::new([104, 5, 99]);
        assert_eq!(interpreter.run_through_inputs(empty()), Ok((vec![5], State::Halted)));
        assert_eq!(interpreter.run_through_inputs([1, 2]), Ok((vec![], State::Halted)));
        assert_eq!(interpreter.instr_ptr(), 2);
    }

    #[test]
    fn errors_poison() {
        let mut interpreter = Interpreter::new([1101, 1, 1, 5, 42]);
        assert_eq!(
            interpreter.run_through_inputs(empty()),
            Err(InterpreterError::UnrecognizedOpcode(42))
        );
        assert!(interpreter.is_poisoned());
        assert_eq!(
            interpreter.run_through_inputs(empty()),
            Err(InterpreterError::Poisoned)
        );
    }

    #[test]
    fn write_to_immediate() {
        let mut interpreter = Interpreter::new([11101, 1, 1, 7, 99]);
        assert_eq!(
            interpreter.run_through_inputs(empty()),
            Err(InterpreterError::WriteToImmediate(7))
        );
    }

    #[test]
    fn negative_access() {
        let mut interpreter = Interpreter::new([4, -3, 99]);
        assert_eq!(
            interpreter.run_through_inputs(empty()),
            Err(InterpreterError::NegativeMemAccess(NegativeMemAccess(-3)))
        );
        let mut interpreter = Interpreter::new([109, -4, 204, 1, 99]);
        assert_eq!(
            interpreter.run_through_inputs(empty()),
            Err(InterpreterError::NegativeMemAccess(NegativeMemAccess(-3)))
        );
        assert_eq!(
            Interpreter::new([99]).mem_get(-1),
            Err(NegativeMemAccess(-1))
        );
    }

    #[test]
    fn negative_jump() {
        let mut interpreter = Interpreter::new([1105, 1, -1]);
        assert_eq!(
            interpreter.run_through_inputs(empty()),
            Err(InterpreterError::JumpToNegative(-1))
        );
    }

    #[test]
    fn bad_mode() {
        let mut interpreter = Interpreter::new([301, 0, 0, 0, 99]);
        assert_eq!(
            interpreter.run_through_inputs(empty()),
            Err(InterpreterError::UnknownMode { op: 301, mode: 3 })
        );
    }

    #[test]
    fn precompute_stops_before_io() {
        let mut interpreter = Interpreter::new([1101, 2, 3, 11, 1102, 4, 5, 12, 4, 11, 99, 0, 0]);
        interpreter.precompute().unwrap();
        assert_eq!(interpreter.instr_ptr(), 8);
        assert_eq!((interpreter[11], interpreter[12]), (5, 20));
        assert_eq!(
            interpreter.run_through_inputs(empty()),
            Ok((vec![5], State::Halted))
        );
    }

    #[test]
    fn precompute_reports_bad_instructions() {
        let mut interpreter = Interpreter::new([1101, 1, 1, 5, 42]);
        assert_eq!(
            interpreter.precompute(),
            Err(InterpreterError::UnrecognizedOpcode(42))
        );
        assert!(interpreter.is_poisoned());
        assert_eq!(interpreter.precompute(), Err(InterpreterError::Poisoned));

        let mut interpreter = Interpreter::new([1101, 1, 1, 5, 404, 0]);
        assert_eq!(
            interpreter.precompute(),
            Err(InterpreterError::UnknownMode { op: 404, mode: 4 })
        );
    }

    #[test]
    fn overflow_is_an_error() {
        for (program, op) in [
            (vec![1101, i64::MAX, 1, 0, 99], 1101),
            (vec![1102, i64::MIN, -1, 0, 99], 1102),
            (vec![109, i64::MAX, 109, 1, 99], 109),
            (vec![109, i64::MAX, 204, 1, 99], 204),
        ] {
            let mut interpreter = Interpreter::new(program.clone());
            assert_eq!(
                interpreter.run_through_inputs(empty()),
                Err(InterpreterError::Overflow(op)),
                "{program:?}"
            );
            assert!(interpreter.is_poisoned());
        }
        // the relative base is left alone when adjusting it would overflow
        let mut interpreter = Interpreter::new([109, i64::MAX, 109, 1, 99]);
        let _ = interpreter.run_through_inputs(empty());
        assert_eq!(interpreter.rel_base(), i64::MAX);
    }

    #[test]
    fn memory_grows_past_program() {
        let mut interpreter = Interpreter::new([1102, 6, 7, 1000, 99]);
        interpreter.run_through_inputs(empty()).unwrap();
        assert_eq!(interpreter.mem_get(1000), Ok(42));
        let memory = interpreter.into_memory();
        assert_eq!(memory.len(), 1024);
        assert_eq!(&memory[..5], &[1102, 6, 7, 1000, 99]);
    }
}
