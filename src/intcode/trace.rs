// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Tracing of executed instructions
//!
//! See [Interpreter::start_trace]
use std::fmt::{self, Debug, Display};

use super::{Interpreter, OpCode, ParamMode};

#[derive(Clone, Copy, PartialEq, Eq)]
struct PackedModes(u8);

impl PackedModes {
    const fn pack(modes: [ParamMode; 3]) -> Self {
        Self(modes[0] as u8 | ((modes[1] as u8) << 2) | ((modes[2] as u8) << 4))
    }

    const fn unpack(self) -> [ParamMode; 3] {
        const fn unpack_bit_pair(bit_pair: u8) -> ParamMode {
            match bit_pair {
                0b00 => ParamMode::Positional,
                0b01 => ParamMode::Immediate,
                0b10 => ParamMode::Relative,
                _ => unreachable!(),
            }
        }
        [
            unpack_bit_pair(self.0 & 0b11),
            unpack_bit_pair((self.0 >> 2) & 0b11),
            unpack_bit_pair((self.0 >> 4) & 0b11),
        ]
    }
}

/// A parameter of a traced instruction, as it appeared in memory and what it resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolved {
    /// the parameter's int in memory
    pub raw: i64,
    /// the value the instruction used. For destinations, this is the value that was stored.
    pub value: i64,
}

/// An opaque type containing information about what instruction was executed, which can be queried
/// with its various methods, or converted into a [String] using its [Display] impl.
#[derive(Clone, PartialEq, Eq)]
pub struct TracedInstr {
    op_int: i64,
    instr_ptr: i64,
    rel_base: i64,
    opcode: OpCode,
    packed_modes: PackedModes,
    params: [Resolved; 3],
}

impl TracedInstr {
    /// Return the relative base at the time the traced instruction was executed
    pub fn rel_base(&self) -> i64 {
        self.rel_base
    }

    /// Return the instruction pointer's position when the traced instruction was executed
    pub fn instr_ptr(&self) -> i64 {
        self.instr_ptr
    }

    /// Return the actual integer of the traced instruction
    pub fn op_int(&self) -> i64 {
        self.op_int
    }

    /// Return the opcode of the traced instruction
    pub fn op_code(&self) -> OpCode {
        self.opcode
    }

    /// Return an array of the parameter modes of the traced instruction
    pub fn param_modes(&self) -> [ParamMode; 3] {
        self.packed_modes.unpack()
    }

    /// The instruction's parameters, as many as its opcode takes
    pub fn params(&self) -> &[Resolved] {
        &self.params[..self.opcode.param_count()]
    }

    /// If the instruction stored a value, return that value
    pub fn stored_val(&self) -> Option<i64> {
        match self.opcode {
            OpCode::Add | OpCode::Mul | OpCode::Lt | OpCode::Eq => Some(self.params[2].value),
            OpCode::In => Some(self.params[0].value),
            _ => None,
        }
    }

    pub(super) fn build(
        op_int: i64,
        instr_ptr: i64,
        rel_base: i64,
        resolved_params: &[(i64, i64)],
    ) -> Self {
        let (opcode, modes) =
            Interpreter::parse_op(op_int).expect("only built for successfully parsed ops");
        debug_assert_eq!(resolved_params.len(), opcode.param_count());
        let mut params = [Resolved::default(); 3];
        for (param, &(raw, value)) in params.iter_mut().zip(resolved_params) {
            *param = Resolved { raw, value };
        }
        Self {
            op_int,
            instr_ptr,
            rel_base,
            opcode,
            packed_modes: PackedModes::pack(modes),
            params,
        }
    }
}

impl Interpreter {
    /// Begin a [Trace] of executed instructions. If a trace is already running, this replaces that
    /// trace and returns it in a [`Some`], otherwise, it returns [`None`].
    ///
    /// # Example
    /// ```
    /// # use aoc::intcode::prelude::*;
    /// let mut interp = Interpreter::new([1101, 90, 9, 4, 99]);
    /// interp.start_trace();
    /// interp.run_through_inputs(empty()).unwrap();
    /// let trace = interp.end_trace().unwrap();
    /// assert_eq!(trace.0.len(), 2);
    /// assert_eq!(trace.0[0].stored_val(), Some(99));
    /// ```
    pub fn start_trace(&mut self) -> Option<Trace> {
        self.trace.replace(Trace::default())
    }

    /// Stop tracing executed instructions into a [Trace]. If no trace was active, returns [`None`]
    ///
    /// see [Interpreter::start_trace]
    pub fn end_trace(&mut self) -> Option<Trace> {
        self.trace.take()
    }

    /// Get a view of the current trace
    pub fn show_trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }
}

/// A log of instructions that an [Interpreter] has executed since a call to
/// [Interpreter::start_trace]
///
/// see [Interpreter::start_trace]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Trace(pub Vec<TracedInstr>);

impl Debug for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedInstr")
            .field("op_int", &self.op_int)
            .field("instr_ptr", &self.instr_ptr)
            .field("rel_base", &self.rel_base)
            .field("opcode", &self.opcode)
            .field("modes", &self.packed_modes.unpack())
            .field("params", &self.params())
            .finish()
    }
}

impl Display for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ip: {:>8} | rbo: {:>5} | {:05} [{}",
            self.instr_ptr, self.rel_base, self.op_int, self.opcode
        )?;
        let modes = self.packed_modes.unpack();
        for (i, (mode, Resolved { raw, value })) in modes.iter().zip(self.params()).enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{mode}{raw} => {value}")?;
        }
        if self.opcode == OpCode::Rbo {
            write!(
                f,
                " (went from {} to {})",
                self.rel_base,
                self.rel_base + self.params[0].value
            )?;
        }
        write!(f, "]")
    }
}
