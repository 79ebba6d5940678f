//! Instruction Disassembler Unit Tests.
//!
//! Verifies the assembler text produced for every layout, the radix and
//! branch-resolution options, and listing-line formatting.

use bonjour_isa::config::{DisasmConfig, ImmediateRadix};
use bonjour_isa::decode;
use bonjour_isa::isa::disasm::{disassemble, format_instruction, format_line};
use rstest::rstest;

use crate::common::builder::{bytes, f1, f2, f3};

// ══════════════════════════════════════════════════════════
// 1. Default formatting per layout
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(bytes(f1(0x04, 0, 0), &[]), "ret")]
#[case(bytes(f1(0x19, 0, 0), &[]), "jsr $fp")]
#[case(bytes(f1(0x02, 1, 15), &[]), "mov $sp, $r13")]
#[case(vec![0x05, 0x23], "add $r0, $r1")]
#[case(bytes(f1(0x01, 2, 0), &[0xDE, 0xAD, 0xBE, 0xEF]), "ldi.l $r0, 0xdeadbeef")]
#[case(bytes(f1(0x30, 0, 0), &[0, 0, 0, 0x10]), "swi 0x10")]
#[case(bytes(f1(0x03, 0, 0), &[0, 0, 0x10, 0]), "jsra 0x1000")]
#[case(bytes(f1(0x0b, 2, 3), &[]), "st.l ($r0), $r1")]
#[case(bytes(f1(0x0a, 2, 3), &[]), "ld.l $r0, ($r1)")]
#[case(bytes(f1(0x09, 5, 0), &[0, 0, 0x20, 0]), "sta.l 0x2000, $r3")]
#[case(bytes(f1(0x0d, 2, 3), &[0xFF, 0xFC]), "sto.l -4($r0), $r1")]
#[case(bytes(f1(0x0c, 4, 5), &[0x00, 0x08]), "ldo.l $r2, 8($r3)")]
#[case(bytes(f2(0, 2, 0xFF), &[]), "inc $r0, 0xff")]
#[case(bytes(f2(3, 1, 0x07), &[]), "ssr $sp, 0x7")]
fn default_text(#[case] buf: Vec<u8>, #[case] expected: &str) {
    assert_eq!(disassemble(&buf, 0), expected);
}

#[test]
fn branch_target_resolved_from_offset() {
    let mut buf = vec![0x0F, 0x00, 0x0F, 0x00];
    buf.extend(bytes(f3(0x00, 4), &[]));
    assert_eq!(disassemble(&buf, 4), "beq 0xa");
}

#[test]
fn invalid_and_truncated_render_as_bad() {
    assert_eq!(disassemble(&[0x00, 0x00], 0), "bad");
    assert_eq!(disassemble(&[0x05], 0), "bad");
    assert_eq!(disassemble(&[0x01, 0x20, 0x00], 0), "bad");
}

// ══════════════════════════════════════════════════════════
// 2. Options
// ══════════════════════════════════════════════════════════

#[test]
fn decimal_radix() {
    let config = DisasmConfig {
        immediate_radix: ImmediateRadix::Decimal,
        ..DisasmConfig::default()
    };
    let inst = decode(&bytes(f1(0x01, 2, 0), &[0, 0, 0, 0x10]), 0).unwrap();
    assert_eq!(format_instruction(&inst, 0, &config), "ldi.l $r0, 16");

    let inst = decode(&bytes(f2(1, 3, 200), &[]), 0).unwrap();
    assert_eq!(format_instruction(&inst, 0, &config), "dec $r1, 200");
}

#[test]
fn unresolved_branches_print_relative_to_current() {
    let config = DisasmConfig {
        resolve_branch_targets: false,
        ..DisasmConfig::default()
    };
    let inst = decode(&bytes(f3(0x01, 4), &[]), 0).unwrap();
    assert_eq!(format_instruction(&inst, 0x100, &config), "bne .+6");

    let inst = decode(&bytes(f3(0x01, -6), &[]), 0).unwrap();
    assert_eq!(format_instruction(&inst, 0x100, &config), "bne .-4");
}

#[test]
fn resolved_branch_uses_address() {
    let inst = decode(&bytes(f3(0x09, -2), &[]), 0).unwrap();
    assert_eq!(
        format_instruction(&inst, 0x8000, &DisasmConfig::default()),
        "bleu 0x8000"
    );
}

// ══════════════════════════════════════════════════════════
// 3. Listing lines
// ══════════════════════════════════════════════════════════

#[test]
fn listing_line_without_raw_bytes() {
    let buf = [0x05, 0x23];
    let inst = decode(&buf, 0).unwrap();
    assert_eq!(
        format_line(&inst, &buf, 0x40, &DisasmConfig::default()),
        "00000040:  add $r0, $r1"
    );
}

#[test]
fn listing_line_with_raw_bytes() {
    let config = DisasmConfig {
        show_raw_bytes: true,
        ..DisasmConfig::default()
    };
    let buf = bytes(f1(0x01, 2, 0), &[0, 0, 0, 0x10, 0x99]);
    let inst = decode(&buf, 0).unwrap();
    let line = format_line(&inst, &buf, 0, &config);
    assert!(line.starts_with("00000000:  01 20 00 00 00 10 "), "got '{line}'");
    assert!(line.ends_with("ldi.l $r0, 0x10"), "got '{line}'");
    assert!(!line.contains("99"), "trailing byte leaked into '{line}'");
}
