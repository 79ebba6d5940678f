//! Linear-sweep instruction stream.
//!
//! Walks a byte buffer front to back, decoding one instruction per step and
//! advancing by its length. After an invalid opcode the sweep skips a single
//! 16-bit word (when configured to continue) so it can resynchronise on the
//! next instruction; truncated input always ends the sweep.

use crate::common::constants::WORD_BYTES;
use crate::common::error::DecodeError;
use crate::config::{Config, StreamConfig};
use crate::isa::decode::decode;
use crate::isa::disasm::format_line;
use crate::isa::instruction::DecodedInstruction;

/// One step of a sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamItem {
    /// Buffer offset of the instruction.
    pub offset: usize,
    /// Load address of the instruction (`base_address + offset`).
    pub address: u64,
    /// Decode result.
    pub result: Result<DecodedInstruction, DecodeError>,
}

/// Iterator over the instructions of a buffer.
#[derive(Debug)]
pub struct InstructionStream<'a> {
    bytes: &'a [u8],
    offset: usize,
    config: StreamConfig,
    done: bool,
}

impl<'a> InstructionStream<'a> {
    /// Creates a stream over `bytes` starting at offset 0.
    pub const fn new(bytes: &'a [u8], config: StreamConfig) -> Self {
        Self::starting_at(bytes, 0, config)
    }

    /// Creates a stream over `bytes` starting at `offset`.
    pub const fn starting_at(bytes: &'a [u8], offset: usize, config: StreamConfig) -> Self {
        Self {
            bytes,
            offset,
            config,
            done: false,
        }
    }

    /// Current buffer offset.
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for InstructionStream<'_> {
    type Item = StreamItem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.bytes.len() {
            return None;
        }

        let offset = self.offset;
        let address = self.config.base_address.wrapping_add(offset as u64);
        let result = decode(self.bytes, offset);

        match &result {
            Ok(inst) => {
                tracing::trace!(address, mnemonic = inst.mnemonic, len = inst.len, "decoded");
                self.offset += inst.len;
            }
            Err(err @ DecodeError::InvalidOpcode { .. }) => {
                tracing::debug!(address, %err, "invalid encoding in sweep");
                if self.config.continue_on_invalid {
                    self.offset += WORD_BYTES;
                } else {
                    self.done = true;
                }
            }
            Err(err @ DecodeError::TruncatedInput { .. }) => {
                tracing::debug!(address, %err, "sweep ended on truncated instruction");
                self.done = true;
            }
        }

        Some(StreamItem {
            offset,
            address,
            result,
        })
    }
}

/// Produces a full text listing of `bytes`, one line per instruction.
///
/// Invalid encodings are listed as `bad`; a truncated tail is listed as
/// `(truncated)`.
pub fn listing(bytes: &[u8], config: &Config) -> Vec<String> {
    InstructionStream::new(bytes, config.stream.clone())
        .map(|item| match item.result {
            Ok(inst) => format_line(&inst, &bytes[item.offset..], item.address, &config.disasm),
            Err(DecodeError::InvalidOpcode { word, .. }) => {
                if config.disasm.show_raw_bytes {
                    let [hi, lo] = word.to_be_bytes();
                    let raw = format!("{hi:02x} {lo:02x} ");
                    format!("{:08x}:  {raw:<18}bad", item.address)
                } else {
                    format!("{:08x}:  bad", item.address)
                }
            }
            Err(DecodeError::TruncatedInput { .. }) => {
                format!("{:08x}:  (truncated)", item.address)
            }
        })
        .collect()
}
