//! ISA-wide constants.
//!
//! Widths, masks and shifts for the three 16-bit instruction forms. All bit
//! positions count from the least-significant bit of the leading word.

/// Size of the leading instruction word in bytes.
pub const WORD_BYTES: usize = 2;

/// Number of addressable 4-bit register fields.
pub const REGISTER_FIELD_COUNT: u8 = 16;

/// Mask for a 4-bit register field.
pub const REG_MASK: u16 = 0xF;

/// Form 1 selector mask (bit 15).
pub const FORM1_SELECT_MASK: u16 = 0x8000;

/// Form 2/3 selector mask (bits 15-14).
pub const FORM23_SELECT_MASK: u16 = 0xC000;

/// Selector bits for Form 2 (`10`).
pub const FORM2_SELECT: u16 = 0x8000;

/// Selector bits for Form 3 (`11`).
pub const FORM3_SELECT: u16 = 0xC000;

/// Form 1 opcode shift (bits 14-8).
///
/// Form 1 layout: `0ooooooo aaaabbbb`
pub const FORM1_OPCODE_SHIFT: u32 = 8;

/// Form 1 opcode mask (7 bits).
pub const FORM1_OPCODE_MASK: u16 = 0x7F;

/// Form 1 register A shift (bits 7-4).
pub const FORM1_REG_A_SHIFT: u32 = 4;

/// Form 2 opcode shift (bits 13-12).
///
/// Form 2 layout: `10ooaaaa vvvvvvvv`
pub const FORM2_OPCODE_SHIFT: u32 = 12;

/// Form 2 opcode mask (2 bits).
pub const FORM2_OPCODE_MASK: u16 = 0x3;

/// Form 2 register A shift (bits 11-8).
pub const FORM2_REG_A_SHIFT: u32 = 8;

/// Form 2 value mask (bits 7-0).
pub const FORM2_VALUE_MASK: u16 = 0xFF;

/// Form 3 opcode shift (bits 13-10).
///
/// Form 3 layout: `11oooovv vvvvvvvv`
pub const FORM3_OPCODE_SHIFT: u32 = 10;

/// Form 3 opcode mask (4 bits).
pub const FORM3_OPCODE_MASK: u16 = 0xF;

/// Form 3 displacement mask (bits 9-0).
pub const FORM3_DISP_MASK: u16 = 0x3FF;

/// Width of the Form 3 displacement field in bits.
pub const FORM3_DISP_BITS: u32 = 10;

/// Smallest encodable PC-relative displacement.
pub const PCREL_MIN: i64 = -(1 << (FORM3_DISP_BITS - 1));

/// Largest encodable PC-relative displacement.
pub const PCREL_MAX: i64 = (1 << (FORM3_DISP_BITS - 1)) - 1;
