//! Common types and constants shared by the decoder and encoder.
//!
//! This module provides the building blocks used across the crate:
//! 1. **Constants:** Field widths, masks and shifts of the three instruction forms.
//! 2. **Error Handling:** Decode, encode and configuration error types.
//! 3. **Registers:** The 18-slot register file boundary datum.

/// Field widths, masks and shifts.
pub mod constants;

/// Error types.
pub mod error;

/// Register file layout and names.
pub mod reg;

pub use constants::WORD_BYTES;
pub use error::{ConfigError, DecodeError, EncodeError};
pub use reg::{NUM_REGS, Register};
