// SPDX-FileCopyrightText: 2024 - 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use super::*;

impl Interpreter {
    // Given a 5 digit number, digits ABCDE are used as follows:
    // DE is the two-digit opcode
    // C is the 1st parameter's mode
    // B is the 2nd parameter's mode
    // A is the 3rd parameter's mode
    //
    // So *0*1202 would be parsed as follows:
    //
    // Opcode 02 is multiply
    // C=2: 1st parameter is in relative mode
    // B=1: 2nd parameter is in immediate mode
    // A=0: 3rd parameter is in positional mode
    pub(crate) fn parse_op(op: i64) -> Result<(OpCode, [ParamMode; 3]), InterpreterError> {
        Ok((
            OpCode::try_from(op % 100).map_err(|_| InterpreterError::UnrecognizedOpcode(op))?,
            ParamMode::extract(op)?,
        ))
    }

    /// Unwraps the result of checked arithmetic, marking the interpreter as poisoned on overflow
    pub(crate) fn checked(&mut self, result: Option<i64>) -> Result<i64, InterpreterError> {
        result.ok_or_else(|| {
            self.poisoned = true;
            InterpreterError::Overflow(self.code[self.index])
        })
    }

    /// Reads memory at `address`, marking the interpreter as poisoned if it's negative
    fn checked_read(&mut self, address: i64) -> Result<i64, InterpreterError> {
        Ok(self.mem_get(address).inspect_err(|_| self.poisoned = true)?)
    }

    /// The raw parameter `offset` ints past the instruction pointer
    fn raw_param(&mut self, offset: i64) -> Result<i64, InterpreterError> {
        let address = self.checked(self.index.checked_add(offset))?;
        Ok(self.code[address])
    }

    /// Processes the parameter `offset` ints past the instruction pointer into a concrete value
    /// using the method appropriate for `mode`.
    pub(crate) fn resolve_param(
        &mut self,
        mode: ParamMode,
        offset: i64,
    ) -> Result<i64, InterpreterError> {
        let raw = self.raw_param(offset)?;
        match mode {
            ParamMode::Positional => self.checked_read(raw),
            ParamMode::Immediate => Ok(raw),
            ParamMode::Relative => {
                let address = self.checked(raw.checked_add(self.rel_offset))?;
                self.checked_read(address)
            }
        }
    }

    /// Turns the parameter `offset` ints past the instruction pointer into the address it refers
    /// to, according to `mode`.
    /// If that address would be negative, or if `mode` is [ParamMode::Immediate], it instead marks
    /// `self` as poisoned and returns the error
    pub(crate) fn resolve_dest(
        &mut self,
        mode: ParamMode,
        offset: i64,
    ) -> Result<i64, InterpreterError> {
        let raw = self.raw_param(offset)?;
        let resolved = match mode {
            ParamMode::Positional => raw,
            ParamMode::Relative => self.checked(raw.checked_add(self.rel_offset))?,
            ParamMode::Immediate => {
                self.poisoned = true;
                return Err(InterpreterError::WriteToImmediate(raw));
            }
        };
        if resolved < 0 {
            self.poisoned = true;
            return Err(NegativeMemAccess(resolved).into());
        }
        Ok(resolved)
    }

    /// common logic of all 4 instructions that take 3 parameters
    ///
    /// `operation` returns `None` if it overflowed.
    pub(crate) fn op3(
        &mut self,
        modes: [ParamMode; 3],
        operation: impl Fn(i64, i64) -> Option<i64>,
    ) -> Result<StepOutcome, InterpreterError> {
        let a = self.resolve_param(modes[0], 1)?;
        let b = self.resolve_param(modes[1], 2)?;
        let dest = self.resolve_dest(modes[2], 3)?;
        let val = self.checked(operation(a, b))?;
        self.record(&[
            (self.code[self.index + 1], a),
            (self.code[self.index + 2], b),
            (self.code[self.index + 3], val),
        ]);
        self.code[dest] = val;
        self.index = self.checked(self.index.checked_add(4))?;
        Ok(StepOutcome::Running)
    }

    /// common logic of both conditional jumps
    pub(crate) fn jump(
        &mut self,
        modes: [ParamMode; 3],
        condition: impl Fn(i64) -> bool,
    ) -> Result<StepOutcome, InterpreterError> {
        let expr = self.resolve_param(modes[0], 1)?;
        let dest = self.resolve_param(modes[1], 2)?;
        self.record(&[
            (self.code[self.index + 1], expr),
            (self.code[self.index + 2], dest),
        ]);
        if condition(expr) {
            if dest < 0 {
                self.poisoned = true;
                return Err(InterpreterError::JumpToNegative(dest));
            }
            self.index = dest;
        } else {
            self.index = self.checked(self.index.checked_add(3))?;
        }
        Ok(StepOutcome::Running)
    }
}
