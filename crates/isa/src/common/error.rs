//! Decode, encode and configuration errors.
//!
//! This module defines the error taxonomy of the core. It provides:
//! 1. **Decode Errors:** Truncated input and invalid (reserved or unassigned) opcodes.
//! 2. **Encode Errors:** Unknown mnemonics, operand shape violations and out-of-range values.
//! 3. **Configuration Errors:** Failures while loading a [`Config`](crate::Config).
//!
//! Every variant carries enough context (form, raw word, offset, operand position)
//! for a caller to print a precise diagnostic.

use thiserror::Error;

use crate::isa::form::Form;

/// Errors produced while decoding a byte stream.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Not enough bytes for the leading word or its trailing operand bytes.
    ///
    /// Recoverable: the caller may re-buffer and retry. Input is never padded.
    #[error("truncated input at offset {offset:#x}: need {needed} bytes, {available} available")]
    TruncatedInput {
        /// Offset of the instruction being decoded.
        offset: usize,
        /// Total bytes the instruction needs from `offset`.
        needed: usize,
        /// Bytes actually available from `offset`.
        available: usize,
    },

    /// The leading word selects a `BAD` table entry.
    #[error("invalid {form} opcode {opcode:#04x} (word {word:#06x}) at offset {offset:#x}")]
    InvalidOpcode {
        /// Form selected by the top bits.
        form: Form,
        /// Form-local opcode value.
        opcode: u8,
        /// Raw leading 16-bit word.
        word: u16,
        /// Offset of the word in the input.
        offset: usize,
    },
}

impl DecodeError {
    /// Offset of the instruction that failed to decode.
    pub const fn offset(&self) -> usize {
        match self {
            Self::TruncatedInput { offset, .. } | Self::InvalidOpcode { offset, .. } => *offset,
        }
    }
}

/// Errors produced while encoding an instruction.
///
/// All variants reject the whole request; no bytes are emitted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// No encodable table entry carries this mnemonic.
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// Operand count or kind does not match the layout, or a register index is out of range.
    #[error("`{mnemonic}`: {reason}")]
    OperandMismatch {
        /// Mnemonic being encoded.
        mnemonic: &'static str,
        /// What was wrong with the operands.
        reason: String,
    },

    /// An immediate, offset or displacement does not fit its field.
    #[error("`{mnemonic}`: operand {position} value {value} outside {min}..={max}")]
    ValueOutOfRange {
        /// Mnemonic being encoded.
        mnemonic: &'static str,
        /// Zero-based operand position.
        position: usize,
        /// Offending value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
}

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a [`Config`](crate::Config).
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
