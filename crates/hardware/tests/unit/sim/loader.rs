//! # Machine-Code Loader Tests
//!
//! Parsing of `ram[N] = 16'b...;` lines, sequencing rules, and file input.

use std::io::Write;

use e20_core::common::LoadError;
use e20_core::sim::{load_file, load_machine_code};
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::{self as asm, machine_code};

#[test]
fn loads_sequential_words() {
    let words = [asm::addi(1, 0, 5), asm::sw(1, 0, 20), asm::halt_at(2)];
    let mem = load_machine_code(&machine_code(&words)).unwrap();
    assert_eq!(&mem.as_slice()[..3], &words[..]);
    assert_eq!(mem.read(3), 0);
}

#[test]
fn ignores_trailing_comments() {
    let text = "ram[0] = 16'b0010000010000101;  // addi $1,$0,5\n\
                ram[1] = 16'b0100000000000001;\t\t// halt\n";
    let mem = load_machine_code(text).unwrap();
    assert_eq!(mem.read(0), asm::addi(1, 0, 5));
    assert_eq!(mem.read(1), asm::halt_at(1));
}

#[test]
fn accepts_crlf_line_endings() {
    let mem = load_machine_code("ram[0] = 16'b0000000000000001;\r\n").unwrap();
    assert_eq!(mem.read(0), 1);
}

#[test]
fn empty_input_is_empty_memory() {
    let mem = load_machine_code("").unwrap();
    assert!(mem.as_slice().iter().all(|&w| w == 0));
}

#[test]
fn rejects_malformed_line() {
    let err = load_machine_code("ram[0] = 16'b0;\nnot machine code\n").unwrap_err();
    match err {
        LoadError::Malformed { line, text } => {
            assert_eq!(line, 2);
            assert_eq!(text, "not machine code");
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn rejects_non_binary_digits() {
    assert!(matches!(
        load_machine_code("ram[0] = 16'b0102;\n"),
        Err(LoadError::Malformed { line: 1, .. })
    ));
}

#[test]
fn rejects_blank_line() {
    assert!(matches!(
        load_machine_code("ram[0] = 16'b0;\n\nram[1] = 16'b0;\n"),
        Err(LoadError::Malformed { line: 2, .. })
    ));
}

#[test]
fn rejects_gap_in_addresses() {
    let text = "ram[0] = 16'b0;\nram[2] = 16'b0;\n";
    assert!(matches!(
        load_machine_code(text),
        Err(LoadError::OutOfSequence {
            expected: 1,
            found: 2
        })
    ));
}

#[test]
fn rejects_program_not_starting_at_zero() {
    assert!(matches!(
        load_machine_code("ram[1] = 16'b0;\n"),
        Err(LoadError::OutOfSequence {
            expected: 0,
            found: 1
        })
    ));
}

#[test]
fn rejects_program_larger_than_memory() {
    let text: String = (0..=8192)
        .map(|i| format!("ram[{i}] = 16'b0;\n"))
        .collect();
    assert!(matches!(
        load_machine_code(&text),
        Err(LoadError::ProgramTooLarge { addr: 8192 })
    ));
}

#[test]
fn fills_all_of_memory() {
    let text: String = (0..8192)
        .map(|i| format!("ram[{i}] = 16'b{:016b};\n", i as u16))
        .collect();
    let mem = load_machine_code(&text).unwrap();
    assert_eq!(mem.read(8191), 8191);
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(machine_code(&[asm::halt_at(0)]).as_bytes())
        .unwrap();
    let mem = load_file(file.path()).unwrap();
    assert_eq!(mem.read(0), asm::halt_at(0));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(dir.path().join("missing.bin")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}
