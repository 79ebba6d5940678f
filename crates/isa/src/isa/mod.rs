//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode tables, the form and layout model, and the decoding,
//! encoding and disassembly logic for the bonjour 16-bit instruction set.
//!
//! # Forms
//!
//! * Form 1: `0ooooooo aaaabbbb`, optionally followed by a 2- or 4-byte operand.
//! * Form 2: `10ooaaaa vvvvvvvv`.
//! * Form 3: `11oooovv vvvvvvvv`.

/// Calling-convention register aliases.
pub mod abi;

/// Instruction decoding for all three forms.
pub mod decode;

/// Instruction disassembler for listings and diagnostics.
pub mod disasm;

/// Instruction encoding (mnemonic and operands to bytes).
pub mod encode;

/// Instruction forms and operand layout tags.
pub mod form;

/// Field extraction, operands and the decoded instruction record.
pub mod instruction;

/// Static per-form opcode tables.
pub mod opcodes;

/// Linear-sweep decoding over a byte buffer.
pub mod stream;

/// Process-wide opcode table with forward and reverse lookup.
pub mod table;
