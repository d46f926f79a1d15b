//! # CPU Execution Tests
//!
//! Per-instruction semantics of the fetch/decode/execute step.

use e20_core::common::SimError;
use e20_core::common::error::DecodeError;
use e20_core::config::CacheLevelId::L1;
use e20_core::core::RunState;
use e20_core::core::units::cache::AccessOutcome::{Miss, Store};
use rstest::rstest;

use crate::common::builder::instruction as asm;
use crate::common::harness::TestContext;

#[test]
fn addi_and_add() {
    let mut ctx = TestContext::with_program(&[
        asm::addi(1, 0, 5),
        asm::addi(2, 0, 7),
        asm::add(3, 1, 2),
        asm::halt_at(3),
    ]);
    ctx.run();
    assert_eq!(ctx.reg(3), 12);
    assert_eq!(ctx.cpu.pc, 3);
}

#[rstest]
#[case(asm::add(3, 1, 2), 0xFFFF_u16.wrapping_add(2))]
#[case(asm::sub(3, 1, 2), 0xFFFD)]
#[case(asm::or(3, 1, 2), 0xFFFF)]
#[case(asm::and(3, 1, 2), 0x0002)]
#[case(asm::slt(3, 1, 2), 0)]
fn reg_reg_arithmetic_wraps_and_compares_unsigned(#[case] word: u16, #[case] expected: u16) {
    let mut ctx = TestContext::with_program(&[word])
        .with_reg(1, 0xFFFF)
        .with_reg(2, 2);
    let _ = ctx.step().unwrap();
    assert_eq!(ctx.reg(3), expected);
    assert_eq!(ctx.cpu.pc, 1);
}

#[test]
fn slt_true_when_less() {
    let mut ctx = TestContext::with_program(&[asm::slt(3, 1, 2)])
        .with_reg(1, 1)
        .with_reg(2, 2);
    let _ = ctx.step().unwrap();
    assert_eq!(ctx.reg(3), 1);
}

#[test]
fn zero_register_ignores_writes() {
    let mut ctx = TestContext::with_program(&[
        asm::addi(0, 0, 5),
        asm::add(1, 0, 0),
        asm::halt_at(2),
    ]);
    ctx.run();
    assert_eq!(ctx.reg(0), 0);
    assert_eq!(ctx.reg(1), 0);
    assert_eq!(ctx.cpu.regs.snapshot()[0], 0);
}

#[test]
fn addi_zero_is_a_no_op() {
    let mut ctx = TestContext::with_program(&[asm::addi(4, 4, 0)]).with_reg(4, 1234);
    let _ = ctx.step().unwrap();
    assert_eq!(ctx.reg(4), 1234);
    assert_eq!(ctx.cpu.pc, 1);
}

#[test]
fn addi_negative_immediate() {
    let mut ctx = TestContext::with_program(&[asm::addi(2, 1, -64)]).with_reg(1, 10);
    let _ = ctx.step().unwrap();
    assert_eq!(ctx.reg(2), 10u16.wrapping_sub(64));
}

#[test]
fn slti_compares_unsigned_against_extended_immediate() {
    // -1 extends to 0xFFFF, so any other value is below it.
    let mut ctx = TestContext::with_program(&[asm::slti(2, 1, -1), asm::slti(3, 4, 1)])
        .with_reg(1, 5)
        .with_reg(4, 0xFFFF);
    ctx.step_n(2);
    assert_eq!(ctx.reg(2), 1);
    assert_eq!(ctx.reg(3), 0);
}

#[test]
fn jeq_taken_is_relative_to_next_pc() {
    let mut ctx = TestContext::with_program(&[asm::jeq(1, 2, 2)])
        .with_reg(1, 9)
        .with_reg(2, 9);
    let _ = ctx.step().unwrap();
    assert_eq!(ctx.cpu.pc, 3);
}

#[test]
fn jeq_not_taken_falls_through() {
    let mut ctx = TestContext::with_program(&[asm::jeq(1, 2, 2)]).with_reg(1, 9);
    let _ = ctx.step().unwrap();
    assert_eq!(ctx.cpu.pc, 1);
}

#[test]
fn jeq_backwards() {
    let mut ctx = TestContext::with_program(&[asm::addi(0, 0, 0), asm::jeq(0, 0, -2)]);
    ctx.step_n(2);
    assert_eq!(ctx.cpu.pc, 0);
}

#[test]
fn jr_jumps_to_register_value() {
    let mut ctx = TestContext::with_program(&[asm::jr(3)]).with_reg(3, 100);
    let _ = ctx.step().unwrap();
    assert_eq!(ctx.cpu.pc, 100);
}

#[test]
fn jal_links_next_pc() {
    let mut ctx = TestContext::with_program(&[asm::addi(0, 0, 0), asm::jal(40)]);
    ctx.step_n(2);
    assert_eq!(ctx.cpu.pc, 40);
    assert_eq!(ctx.reg(7), 2);
}

#[test]
fn j_elsewhere_keeps_running() {
    let mut ctx = TestContext::with_program(&[asm::j(5)]);
    assert_eq!(ctx.step(), Ok(RunState::Running));
    assert_eq!(ctx.cpu.pc, 5);
    assert!(!ctx.cpu.is_halted());
}

#[test]
fn self_jump_halts() {
    let mut ctx = TestContext::with_program(&[asm::halt_at(0)]);
    assert_eq!(ctx.step(), Ok(RunState::Halted));
    assert!(ctx.cpu.is_halted());
    assert_eq!(ctx.cpu.pc, 0);

    // Further steps do nothing.
    assert_eq!(ctx.step(), Ok(RunState::Halted));
    assert_eq!(ctx.cpu.clock, 1);
}

#[test]
fn pc_is_not_wrapped_but_fetch_is() {
    let mut ctx = TestContext::with_program(&[asm::j(8191)]);
    ctx.cpu.memory.write(8191, asm::addi(1, 0, 9));
    ctx.step_n(2);
    assert_eq!(ctx.cpu.pc, 8192);
    assert_eq!(ctx.reg(1), 9);

    // Fetches ram[0] again; `j 8191` from pc 8192 is not a self-jump.
    assert_eq!(ctx.step(), Ok(RunState::Running));
    assert_eq!(ctx.cpu.pc, 8191);
}

#[test]
fn lw_reads_memory_and_reports_access() {
    let mut ctx = TestContext::with_program(&[asm::lw(2, 1, 3)])
        .with_reg(1, 10)
        .with_data(13, 0xBEEF);
    let _ = ctx.step().unwrap();
    assert_eq!(ctx.reg(2), 0xBEEF);
    assert_eq!(ctx.trace(), vec![(L1, Miss, 13)]);
    assert_eq!(ctx.events[0].pc, 0);
}

#[test]
fn effective_address_wraps_to_memory_size() {
    let mut ctx = TestContext::with_program(&[asm::lw(2, 0, -1)]).with_data(8191, 42);
    let _ = ctx.step().unwrap();
    assert_eq!(ctx.reg(2), 42);
    assert_eq!(ctx.events[0].addr, 8191);
}

#[test]
fn sw_writes_memory_and_reports_store() {
    let mut ctx = TestContext::with_program(&[asm::sw(1, 2, -2)])
        .with_reg(1, 77)
        .with_reg(2, 30);
    let _ = ctx.step().unwrap();
    assert_eq!(ctx.cpu.memory.read(28), 77);
    assert_eq!(ctx.trace(), vec![(L1, Store, 28)]);
}

#[test]
fn clock_counts_every_instruction() {
    let mut ctx = TestContext::with_program(&[
        asm::addi(1, 0, 1),
        asm::lw(2, 0, 0),
        asm::halt_at(2),
    ]);
    ctx.run();
    assert_eq!(ctx.cpu.clock, 3);
}

#[test]
fn undefined_funct_stops_with_decode_error() {
    let bad = asm::reg_funct(1, 2, 3, 0b1010);
    let mut ctx = TestContext::with_program(&[asm::addi(1, 0, 1), bad]);
    let _ = ctx.step().unwrap();
    assert_eq!(
        ctx.step(),
        Err(SimError::Decode {
            pc: 1,
            source: DecodeError::UnknownFunct {
                word: bad,
                funct: 0b1010
            }
        })
    );
    assert_eq!(ctx.reg(1), 1);
    assert_eq!(ctx.cpu.pc, 1);
}
