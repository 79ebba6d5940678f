//! Instruction Disassembler for the bonjour ISA.
//!
//! Renders decoded instructions as assembler text for listings, tracing
//! and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use bonjour_isa::isa::disasm::disassemble;
//! assert_eq!(disassemble(&[0x05, 0x23], 0), "add $r0, $r1");
//! ```

use std::fmt::Write as _;

use crate::common::reg::Register;
use crate::config::{DisasmConfig, ImmediateRadix};
use crate::isa::decode::decode;
use crate::isa::form::Layout;
use crate::isa::instruction::{DecodedInstruction, Operand};
use crate::isa::opcodes::BAD_MNEMONIC;

/// Returns the assembler name for a 4-bit register field.
#[inline]
const fn reg(field: u8) -> &'static str {
    Register::from_field(field).name()
}

/// Disassembles the instruction at `offset` with default formatting.
///
/// The instruction is assumed to live at address `offset`. Returns `"bad"`
/// for invalid or truncated encodings.
pub fn disassemble(bytes: &[u8], offset: usize) -> String {
    decode(bytes, offset).map_or_else(
        |_| BAD_MNEMONIC.to_owned(),
        |inst| format_instruction(&inst, offset as u64, &DisasmConfig::default()),
    )
}

/// Formats a decoded instruction located at `address`.
///
/// # Arguments
///
/// * `inst` - The decoded instruction.
/// * `address` - Address of the instruction's leading word, used to resolve branch targets.
/// * `config` - Formatting options.
pub fn format_instruction(
    inst: &DecodedInstruction,
    address: u64,
    config: &DisasmConfig,
) -> String {
    let imm = |v: i64| match config.immediate_radix {
        ImmediateRadix::Hex => format!("{:#x}", v as u32),
        ImmediateRadix::Decimal => v.to_string(),
    };
    let ops = &inst.operands;
    let mn = inst.mnemonic;

    match (inst.layout, ops.as_slice()) {
        (Layout::Narg, []) => mn.to_owned(),
        (Layout::A, [Operand::Register(a)]) => format!("{mn} {}", reg(*a)),
        (Layout::AB, [Operand::Register(a), Operand::Register(b)]) => {
            format!("{mn} {}, {}", reg(*a), reg(*b))
        }
        (Layout::A4, [Operand::Register(a), Operand::Immediate(v)]) => {
            format!("{mn} {}, {}", reg(*a), imm(*v))
        }
        (Layout::F4 | Layout::M, [Operand::Immediate(v)]) => format!("{mn} {}", imm(*v)),
        (Layout::AiB, [Operand::Register(a), Operand::Register(b)]) => {
            format!("{mn} ({}), {}", reg(*a), reg(*b))
        }
        (Layout::ABi, [Operand::Register(a), Operand::Register(b)]) => {
            format!("{mn} {}, ({})", reg(*a), reg(*b))
        }
        (Layout::F4A, [Operand::Immediate(v), Operand::Register(a)]) => {
            format!("{mn} {}, {}", imm(*v), reg(*a))
        }
        (Layout::AiB2, [Operand::Immediate(off), Operand::Register(a), Operand::Register(b)]) => {
            format!("{mn} {off}({}), {}", reg(*a), reg(*b))
        }
        (Layout::ABi2, [Operand::Register(a), Operand::Immediate(off), Operand::Register(b)]) => {
            format!("{mn} {}, {off}({})", reg(*a), reg(*b))
        }
        (Layout::A8V, [Operand::Register(a), Operand::Immediate(v)]) => {
            format!("{mn} {}, {}", reg(*a), imm(*v))
        }
        (Layout::PcRel, [Operand::Displacement(d)]) => inst
            .branch_target(address)
            .filter(|_| config.resolve_branch_targets)
            .map_or_else(
                || format!("{mn} .{:+}", d + 2),
                |target| format!("{mn} {target:#x}"),
            ),
        _ => BAD_MNEMONIC.to_owned(),
    }
}

/// Formats a listing line: address, optional raw bytes, then the instruction text.
pub fn format_line(
    inst: &DecodedInstruction,
    bytes: &[u8],
    address: u64,
    config: &DisasmConfig,
) -> String {
    let mut line = format!("{address:08x}:  ");
    if config.show_raw_bytes {
        let mut raw = String::new();
        for b in bytes.iter().take(inst.len) {
            let _ = write!(raw, "{b:02x} ");
        }
        let _ = write!(line, "{raw:<18}");
    }
    line.push_str(&format_instruction(inst, address, config));
    line
}
