//! Bonjour Instruction Encoder.
//!
//! The inverse of [`decode`](crate::isa::decode::decode): resolves a mnemonic
//! through the opcode table, validates the operands against the entry's
//! layout and packs the leading word plus any trailing bytes, big-endian.
//! Encoding either yields the complete byte sequence or an error; nothing is
//! emitted for a rejected request.

use crate::common::constants::{
    FORM1_OPCODE_SHIFT, FORM1_REG_A_SHIFT, FORM2_OPCODE_SHIFT, FORM2_REG_A_SHIFT, FORM2_SELECT,
    FORM3_DISP_MASK, FORM3_OPCODE_SHIFT, FORM3_SELECT, PCREL_MAX, PCREL_MIN,
    REGISTER_FIELD_COUNT,
};
use crate::common::error::EncodeError;
use crate::isa::form::{Form, Layout};
use crate::isa::instruction::Operand;
use crate::isa::opcodes::OpcodeEntry;
use crate::isa::table::OpcodeTable;

/// What a single operand position accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    /// Register field A.
    RegA,
    /// Register field B.
    RegB,
    /// Trailing 4-byte immediate or address.
    Imm32,
    /// Trailing 2-byte offset.
    Off16,
    /// Form 2 packed 8-bit value.
    Imm8,
    /// Form 3 packed 10-bit displacement.
    Disp10,
}

impl Slot {
    const fn kind(self) -> &'static str {
        match self {
            Self::RegA | Self::RegB => "register",
            Self::Imm32 | Self::Off16 | Self::Imm8 => "immediate",
            Self::Disp10 => "displacement",
        }
    }

    /// Accepted value range for value slots. Matches the range `decode`
    /// produces for the field, so every accepted value reads back unchanged.
    const fn range(self) -> (i64, i64) {
        match self {
            Self::Imm32 => (0, u32::MAX as i64),
            Self::Off16 => (i16::MIN as i64, i16::MAX as i64),
            Self::Imm8 => (0, u8::MAX as i64),
            Self::Disp10 => (PCREL_MIN, PCREL_MAX),
            Self::RegA | Self::RegB => (0, REGISTER_FIELD_COUNT as i64 - 1),
        }
    }
}

/// Operand slots for `layout`, in assembler order.
const fn slots(layout: Layout) -> &'static [Slot] {
    match layout {
        Layout::Narg | Layout::Bad => &[],
        Layout::A => &[Slot::RegA],
        Layout::AB | Layout::AiB | Layout::ABi => &[Slot::RegA, Slot::RegB],
        Layout::A4 => &[Slot::RegA, Slot::Imm32],
        Layout::F4 | Layout::M => &[Slot::Imm32],
        Layout::F4A => &[Slot::Imm32, Slot::RegA],
        Layout::AiB2 => &[Slot::Off16, Slot::RegA, Slot::RegB],
        Layout::ABi2 => &[Slot::RegA, Slot::Off16, Slot::RegB],
        Layout::A8V => &[Slot::RegA, Slot::Imm8],
        Layout::PcRel => &[Slot::Disp10],
    }
}

/// Field values collected from validated operands.
#[derive(Default)]
struct Fields {
    reg_a: u16,
    reg_b: u16,
    value: i64,
}

/// Encodes `mnemonic` with `operands` into a fresh byte vector.
///
/// # Arguments
///
/// * `mnemonic` - Canonical, case-sensitive mnemonic such as `"add"` or `"ldo.l"`.
/// * `operands` - Operands in assembler order for the mnemonic's layout.
///
/// # Errors
///
/// * [`EncodeError::UnknownMnemonic`] if no encodable entry has this name.
/// * [`EncodeError::OperandMismatch`] on a wrong operand count or kind, or a
///   register index outside 0-15.
/// * [`EncodeError::ValueOutOfRange`] if a value does not fit its field.
pub fn encode(mnemonic: &str, operands: &[Operand]) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(6);
    let _ = encode_into(&mut out, mnemonic, operands)?;
    Ok(out)
}

/// Encodes `mnemonic` with `operands`, appending the bytes to `out`.
///
/// Returns the number of bytes appended. On error `out` is left untouched.
///
/// # Errors
///
/// Same as [`encode`].
pub fn encode_into(
    out: &mut Vec<u8>,
    mnemonic: &str,
    operands: &[Operand],
) -> Result<usize, EncodeError> {
    let (form, entry) = OpcodeTable::global()
        .lookup_by_mnemonic(mnemonic)
        .ok_or_else(|| EncodeError::UnknownMnemonic(mnemonic.to_owned()))?;
    let fields = validate(entry, operands)?;

    let start = out.len();
    match form {
        Form::One => {
            let word = (u16::from(entry.opcode) << FORM1_OPCODE_SHIFT)
                | (fields.reg_a << FORM1_REG_A_SHIFT)
                | fields.reg_b;
            out.extend_from_slice(&word.to_be_bytes());
            match entry.layout.extra_bytes() {
                4 => out.extend_from_slice(&(fields.value as u32).to_be_bytes()),
                2 => out.extend_from_slice(&(fields.value as u16).to_be_bytes()),
                _ => {}
            }
        }
        Form::Two => {
            let word = FORM2_SELECT
                | (u16::from(entry.opcode) << FORM2_OPCODE_SHIFT)
                | (fields.reg_a << FORM2_REG_A_SHIFT)
                | (fields.value as u16 & 0xFF);
            out.extend_from_slice(&word.to_be_bytes());
        }
        Form::Three => {
            let word = FORM3_SELECT
                | (u16::from(entry.opcode) << FORM3_OPCODE_SHIFT)
                | (fields.value as u16 & FORM3_DISP_MASK);
            out.extend_from_slice(&word.to_be_bytes());
        }
    }
    Ok(out.len() - start)
}

/// Checks operand count, kinds and ranges against the entry's layout.
fn validate(entry: &OpcodeEntry, operands: &[Operand]) -> Result<Fields, EncodeError> {
    let expected = slots(entry.layout);
    if operands.len() != expected.len() {
        return Err(EncodeError::OperandMismatch {
            mnemonic: entry.mnemonic,
            reason: format!(
                "expected {} operand(s) for layout {}, got {}",
                expected.len(),
                entry.layout,
                operands.len()
            ),
        });
    }

    let mut fields = Fields::default();
    for (position, (slot, operand)) in expected.iter().zip(operands).enumerate() {
        match (*slot, *operand) {
            (Slot::RegA | Slot::RegB, Operand::Register(r)) => {
                if r >= REGISTER_FIELD_COUNT {
                    return Err(EncodeError::OperandMismatch {
                        mnemonic: entry.mnemonic,
                        reason: format!("operand {position}: register index {r} outside 0-15"),
                    });
                }
                if *slot == Slot::RegA {
                    fields.reg_a = u16::from(r);
                } else {
                    fields.reg_b = u16::from(r);
                }
            }
            (Slot::Imm32 | Slot::Off16 | Slot::Imm8, Operand::Immediate(v))
            | (Slot::Disp10, Operand::Displacement(v)) => {
                let (min, max) = slot.range();
                if !(min..=max).contains(&v) {
                    return Err(EncodeError::ValueOutOfRange {
                        mnemonic: entry.mnemonic,
                        position,
                        value: v,
                        min,
                        max,
                    });
                }
                fields.value = v;
            }
            (slot, operand) => {
                return Err(EncodeError::OperandMismatch {
                    mnemonic: entry.mnemonic,
                    reason: format!(
                        "operand {position}: expected {}, got {}",
                        slot.kind(),
                        operand.kind()
                    ),
                });
            }
        }
    }
    Ok(fields)
}
