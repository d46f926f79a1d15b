//! Instruction Execution.
//!
//! This module implements the single-cycle fetch/decode/execute loop. Each step:
//! 1. **Clock:** Advances the logical clock used for LRU ordering.
//! 2. **Fetch/Decode:** Reads `memory[pc % MEM_SIZE]` and decodes it once.
//! 3. **Execute:** Applies the instruction; `lw`/`sw` are first resolved through
//!    the cache hierarchy and the resulting events are reported.
//! 4. **Post-step:** Forces `$0` back to zero.

use super::{Cpu, RunState};
use crate::common::constants::LINK_REG;
use crate::common::error::SimError;
use crate::core::units::cache::{AccessEvent, AccessLog};
use crate::isa::{Instruction, decode};
use crate::soc::Memory;

impl Cpu {
    /// Executes one instruction.
    ///
    /// Cache events produced by a load or store are counted in
    /// [`Cpu::stats`] and passed to `log` before the instruction completes.
    /// Stepping a halted CPU does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] if the fetched word is not a valid
    /// instruction. The clock has advanced but no other state has changed.
    pub fn step<L: AccessLog + ?Sized>(&mut self, log: &mut L) -> Result<RunState, SimError> {
        if self.is_halted() {
            return Ok(RunState::Halted);
        }

        self.clock += 1;
        let pc = self.pc;
        let word = self.memory.read(pc as usize);
        let inst = decode(word).map_err(|source| SimError::Decode { pc, source })?;
        tracing::debug!(pc, clock = self.clock, %inst, "execute");

        self.stats.record_instruction(&inst);
        self.execute(inst, pc, log);
        self.regs.clear_zero();
        Ok(self.state)
    }

    /// Runs until the program halts.
    ///
    /// There is no step limit; a program that never executes a self-jump runs
    /// forever.
    ///
    /// # Errors
    ///
    /// Returns the first [`SimError`] raised by [`Cpu::step`].
    pub fn run<L: AccessLog + ?Sized>(&mut self, log: &mut L) -> Result<(), SimError> {
        while self.step(log)? == RunState::Running {}
        tracing::info!(
            instructions = self.stats.instructions,
            pc = self.pc,
            regs = %self.regs,
            "halted"
        );
        Ok(())
    }

    fn execute<L: AccessLog + ?Sized>(&mut self, inst: Instruction, pc: u16, log: &mut L) {
        let next = pc.wrapping_add(1);
        self.pc = match inst {
            Instruction::Alu {
                op,
                dst,
                src_a,
                src_b,
            } => {
                let val = op.apply(self.regs.read(src_a), self.regs.read(src_b));
                self.regs.write(dst, val);
                next
            }
            Instruction::Jr { src } => self.regs.read(src),
            Instruction::Addi { dst, src, imm } => {
                self.regs.write(dst, self.regs.read(src).wrapping_add(imm));
                next
            }
            Instruction::J { target } => {
                if target == pc {
                    self.state = RunState::Halted;
                    pc
                } else {
                    target
                }
            }
            Instruction::Jal { target } => {
                self.regs.write(LINK_REG, next);
                target
            }
            Instruction::Lw { dst, base, imm } => {
                let addr = self.effective_address(base, imm);
                let events = self.caches.load(addr, pc, self.clock);
                self.report(&events, log);
                self.regs.write(dst, self.memory.read(addr as usize));
                next
            }
            Instruction::Sw { src, base, imm } => {
                let addr = self.effective_address(base, imm);
                let events = self.caches.store(addr, pc, self.clock);
                self.report(&events, log);
                self.memory.write(addr as usize, self.regs.read(src));
                next
            }
            Instruction::Jeq { src_a, src_b, imm } => {
                if self.regs.read(src_a) == self.regs.read(src_b) {
                    next.wrapping_add(imm)
                } else {
                    next
                }
            }
            Instruction::Slti { dst, src, imm } => {
                self.regs.write(dst, u16::from(self.regs.read(src) < imm));
                next
            }
        };
    }

    /// `(regs[base] + imm) mod MEM_SIZE`.
    fn effective_address(&self, base: usize, imm: u16) -> u16 {
        Memory::wrap(self.regs.read(base).wrapping_add(imm) as usize) as u16
    }

    fn report<L: AccessLog + ?Sized>(&mut self, events: &[AccessEvent], log: &mut L) {
        for event in events {
            self.stats.record_event(event);
            log.record(event);
        }
    }
}
