//! Bonjour 16-bit instruction set decoder and encoder.
//!
//! This crate implements the bit-level encoding of the bonjour ISA:
//! 1. **Opcode Table:** Dense per-form tables mapping encodings to layouts and mnemonics.
//! 2. **Decoder:** Big-endian byte streams to structured instruction records.
//! 3. **Encoder:** Mnemonics and operands back to bytes, exactly inverting the decoder.
//! 4. **Disassembly:** Assembler-text formatting and linear-sweep listings.
//! 5. **Registers:** The 18-slot register file exposed to debugger and runtime collaborators.

/// Common types and constants (field layout, errors, registers).
pub mod common;
/// Disassembly and stream configuration.
pub mod config;
/// Instruction set (forms, tables, decode, encode, disassembly).
pub mod isa;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Error types returned by the decoder and encoder.
pub use crate::common::{DecodeError, EncodeError, Register};
/// Decode entry point.
pub use crate::isa::decode::decode;
/// Encode entry points.
pub use crate::isa::encode::{encode, encode_into};
/// Instruction model.
pub use crate::isa::form::{Form, Layout};
pub use crate::isa::instruction::{DecodedInstruction, Operand};
/// Opcode table.
pub use crate::isa::opcodes::OpcodeEntry;
pub use crate::isa::table::OpcodeTable;
