//! Register File Tests.
//!
//! Verifies the 18-slot layout, assembler names, 4-bit field addressing and
//! the calling-convention aliases exposed to debugger collaborators.

use bonjour_isa::common::reg::NUM_REGS;
use bonjour_isa::isa::abi::{REG_ARG1, REG_ARGN, REG_CC, REG_FP, REG_PC, REG_RET1, REG_SP};
use bonjour_isa::Register;
use rstest::rstest;

#[test]
fn register_file_has_eighteen_slots() {
    assert_eq!(NUM_REGS, 18);
    assert_eq!(Register::ALL.len(), NUM_REGS);
    for (i, r) in Register::ALL.iter().enumerate() {
        assert_eq!(r.index(), i);
        assert_eq!(Register::from_index(i), Some(*r));
    }
    assert_eq!(Register::from_index(18), None);
}

#[rstest]
#[case(Register::Fp, 0, "$fp")]
#[case(Register::Sp, 1, "$sp")]
#[case(Register::R0, 2, "$r0")]
#[case(Register::R1, 3, "$r1")]
#[case(Register::R13, 15, "$r13")]
#[case(Register::Pc, 16, "$pc")]
#[case(Register::Cc, 17, "$cc")]
fn register_numbering_and_names(#[case] reg: Register, #[case] index: usize, #[case] name: &str) {
    assert_eq!(reg.index(), index);
    assert_eq!(reg.name(), name);
    assert_eq!(reg.to_string(), name);
    assert_eq!(Register::from_name(name), Some(reg));
}

#[test]
fn unknown_register_names() {
    assert_eq!(Register::from_name("$r14"), None);
    assert_eq!(Register::from_name("r0"), None);
    assert_eq!(Register::from_name(""), None);
}

#[test]
fn instruction_fields_address_first_sixteen_slots() {
    for field in 0u8..16 {
        let reg = Register::from_field(field);
        assert_eq!(reg.index(), usize::from(field));
        assert!(reg.is_addressable());
    }
    assert_eq!(Register::from_field(0x12), Register::R0);
    assert!(!Register::Pc.is_addressable());
    assert!(!Register::Cc.is_addressable());
}

#[test]
fn calling_convention_aliases() {
    assert_eq!(REG_FP.index(), 0);
    assert_eq!(REG_SP.index(), 1);
    assert_eq!(REG_RET1, REG_ARG1);
    assert_eq!(REG_ARG1.index(), 2);
    assert_eq!(REG_ARGN.index(), 3);
    assert_eq!(REG_PC.index(), 16);
    assert_eq!(REG_CC.index(), 17);
}

#[test]
fn register_serializes_by_variant_name() {
    let json = serde_json::to_string(&Register::R0).unwrap();
    assert_eq!(json, "\"R0\"");
    let back: Register = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Register::R0);
}
