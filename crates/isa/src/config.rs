//! Configuration for disassembly output and stream sweeps.
//!
//! This module defines the configuration structures consumed by the
//! disassembly formatter and the instruction stream. It provides:
//! 1. **Defaults:** Baseline formatting choices and the default load address.
//! 2. **Structures:** `Config` with its `disasm` and `stream` sections.
//! 3. **Enums:** The radix used to print immediates.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Address of buffer offset 0 when sweeping a stream.
    pub const BASE_ADDRESS: u64 = 0;

    /// Print PC-relative branches as absolute targets.
    pub const RESOLVE_BRANCH_TARGETS: bool = true;

    /// Prefix listing lines with the encoded bytes.
    pub const SHOW_RAW_BYTES: bool = false;

    /// Keep sweeping past invalid encodings.
    pub const CONTINUE_ON_INVALID: bool = true;
}

/// Radix used when printing immediates and absolute addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ImmediateRadix {
    /// `0x`-prefixed hexadecimal.
    #[default]
    #[serde(alias = "hex", alias = "HEX")]
    Hex,
    /// Signed decimal.
    #[serde(alias = "decimal", alias = "dec")]
    Decimal,
}

/// Root configuration.
///
/// # Example
///
/// ```
/// use bonjour_isa::config::{Config, ImmediateRadix};
///
/// let json = r#"{
///     "disasm": { "immediate_radix": "Decimal", "show_raw_bytes": true },
///     "stream": { "base_address": 4096 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.disasm.immediate_radix, ImmediateRadix::Decimal);
/// assert!(config.disasm.show_raw_bytes);
/// assert!(config.disasm.resolve_branch_targets);
/// assert_eq!(config.stream.base_address, 0x1000);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Disassembly formatting options
    pub disasm: DisasmConfig,
    /// Linear-sweep options
    pub stream: StreamConfig,
}

impl Config {
    /// Parses a configuration from a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] if the document is not valid JSON or has mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Disassembly formatting options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisasmConfig {
    /// Radix for immediates and absolute addresses. 2-byte offsets are always decimal.
    pub immediate_radix: ImmediateRadix,

    /// Print branch targets (`beq 0x104`) instead of raw displacements (`beq .+2`)
    pub resolve_branch_targets: bool,

    /// Prefix each listing line with the instruction's encoded bytes
    pub show_raw_bytes: bool,
}

impl Default for DisasmConfig {
    fn default() -> Self {
        Self {
            immediate_radix: ImmediateRadix::default(),
            resolve_branch_targets: defaults::RESOLVE_BRANCH_TARGETS,
            show_raw_bytes: defaults::SHOW_RAW_BYTES,
        }
    }
}

/// Linear-sweep options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Address that buffer offset 0 is loaded at
    pub base_address: u64,

    /// After an invalid opcode, skip one word and keep going instead of stopping
    pub continue_on_invalid: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            base_address: defaults::BASE_ADDRESS,
            continue_on_invalid: defaults::CONTINUE_ON_INVALID,
        }
    }
}
