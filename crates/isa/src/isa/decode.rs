//! Bonjour Instruction Decoder.
//!
//! This module decodes a byte stream into structured [`DecodedInstruction`]
//! records. It classifies the leading big-endian 16-bit word into one of the
//! three forms, looks the opcode up in the dense table, extracts the register
//! fields the layout uses and consumes any trailing 2- or 4-byte operand.

use crate::common::constants::WORD_BYTES;
use crate::common::error::DecodeError;
use crate::isa::form::Layout;
use crate::isa::instruction::{DecodedInstruction, InstructionWord, Operand};
use crate::isa::table::OpcodeTable;

/// Decodes the instruction starting at `offset` in `bytes`.
///
/// # Arguments
///
/// * `bytes` - The buffer holding the instruction stream.
/// * `offset` - Position of the leading word within `bytes`.
///
/// # Errors
///
/// * [`DecodeError::TruncatedInput`] if the leading word or its trailing
///   operand bytes run past the end of `bytes`.
/// * [`DecodeError::InvalidOpcode`] if the word selects a `BAD` table entry.
pub fn decode(bytes: &[u8], offset: usize) -> Result<DecodedInstruction, DecodeError> {
    let word = read_word(bytes, offset)?;
    let form = word.form();
    let opcode = word.opcode();
    let entry = OpcodeTable::global().lookup_by_encoding(form, opcode);

    if entry.is_bad() {
        return Err(DecodeError::InvalidOpcode {
            form,
            opcode,
            word,
            offset,
        });
    }

    let layout = entry.layout;
    let trailing = match layout.extra_bytes() {
        4 => i64::from(u32::from_be_bytes(read_trailing(bytes, offset)?)),
        2 => i64::from(i16::from_be_bytes(read_trailing(bytes, offset)?)),
        _ => 0,
    };

    Ok(DecodedInstruction {
        raw: word,
        form,
        opcode,
        mnemonic: entry.mnemonic,
        layout,
        operands: operands(word, layout, trailing),
        len: layout.encoded_len(),
    })
}

/// Reads the big-endian leading word at `offset`.
fn read_word(bytes: &[u8], offset: usize) -> Result<u16, DecodeError> {
    match bytes.get(offset..).and_then(|rest| rest.get(..WORD_BYTES)) {
        Some(&[hi, lo]) => Ok(u16::from_be_bytes([hi, lo])),
        _ => Err(DecodeError::TruncatedInput {
            offset,
            needed: WORD_BYTES,
            available: bytes.len().saturating_sub(offset),
        }),
    }
}

/// Reads the `N` operand bytes following the leading word at `offset`.
fn read_trailing<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N], DecodeError> {
    bytes
        .get(offset + WORD_BYTES..)
        .and_then(<[u8]>::first_chunk::<N>)
        .copied()
        .ok_or_else(|| DecodeError::TruncatedInput {
            offset,
            needed: WORD_BYTES + N,
            available: bytes.len().saturating_sub(offset),
        })
}

/// Builds the operand list for `layout` from the leading word and the
/// already-extended trailing value (ignored by layouts without one).
fn operands(word: u16, layout: Layout, trailing: i64) -> Vec<Operand> {
    let a = || Operand::Register(word.f1_reg_a());
    let b = || Operand::Register(word.f1_reg_b());
    let value = Operand::Immediate(trailing);

    match layout {
        Layout::Narg | Layout::Bad => Vec::new(),
        Layout::A => vec![a()],
        Layout::AB | Layout::AiB | Layout::ABi => vec![a(), b()],
        Layout::A4 => vec![a(), value],
        Layout::F4 | Layout::M => vec![value],
        Layout::F4A => vec![value, a()],
        Layout::AiB2 => vec![value, a(), b()],
        Layout::ABi2 => vec![a(), value, b()],
        Layout::A8V => vec![
            Operand::Register(word.f2_reg_a()),
            Operand::Immediate(i64::from(word.f2_value())),
        ],
        Layout::PcRel => vec![Operand::Displacement(i64::from(word.f3_displacement()))],
    }
}
