//! Instruction field extraction and the decoded instruction record.
//!
//! Provides the [`InstructionWord`] trait for pulling form-specific fields out
//! of a 16-bit leading word, the [`Operand`] type shared by the decoder and
//! encoder, and the [`DecodedInstruction`] record returned by the decoder.

use serde::{Deserialize, Serialize};

use crate::common::constants::{
    FORM1_OPCODE_MASK, FORM1_OPCODE_SHIFT, FORM1_REG_A_SHIFT, FORM2_OPCODE_MASK,
    FORM2_OPCODE_SHIFT, FORM2_REG_A_SHIFT, FORM2_VALUE_MASK, FORM3_DISP_BITS, FORM3_DISP_MASK,
    FORM3_OPCODE_MASK, FORM3_OPCODE_SHIFT, REG_MASK, WORD_BYTES,
};
use crate::common::reg::Register;
use crate::isa::form::{Form, Layout};

/// Field extraction for 16-bit leading words.
///
/// Each accessor assumes the word has already been classified into the form
/// the accessor belongs to; none of them check the selector bits.
pub trait InstructionWord {
    /// Form selected by the top bits.
    fn form(&self) -> Form;

    /// Form-local opcode, whichever form the word belongs to.
    fn opcode(&self) -> u8;

    /// Form 1 register A (bits 7-4).
    fn f1_reg_a(&self) -> u8;

    /// Form 1 register B (bits 3-0).
    fn f1_reg_b(&self) -> u8;

    /// Form 2 register A (bits 11-8).
    fn f2_reg_a(&self) -> u8;

    /// Form 2 zero-extended 8-bit value (bits 7-0).
    fn f2_value(&self) -> u8;

    /// Form 3 sign-extended 10-bit displacement (bits 9-0).
    fn f3_displacement(&self) -> i16;
}

impl InstructionWord for u16 {
    #[inline(always)]
    fn form(&self) -> Form {
        Form::of(*self)
    }

    #[inline(always)]
    fn opcode(&self) -> u8 {
        match Form::of(*self) {
            Form::One => ((self >> FORM1_OPCODE_SHIFT) & FORM1_OPCODE_MASK) as u8,
            Form::Two => ((self >> FORM2_OPCODE_SHIFT) & FORM2_OPCODE_MASK) as u8,
            Form::Three => ((self >> FORM3_OPCODE_SHIFT) & FORM3_OPCODE_MASK) as u8,
        }
    }

    #[inline(always)]
    fn f1_reg_a(&self) -> u8 {
        ((self >> FORM1_REG_A_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn f1_reg_b(&self) -> u8 {
        (self & REG_MASK) as u8
    }

    #[inline(always)]
    fn f2_reg_a(&self) -> u8 {
        ((self >> FORM2_REG_A_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn f2_value(&self) -> u8 {
        (self & FORM2_VALUE_MASK) as u8
    }

    #[inline(always)]
    fn f3_displacement(&self) -> i16 {
        sign_extend(self & FORM3_DISP_MASK, FORM3_DISP_BITS)
    }
}

/// Sign extends the low `bits` of `val` to a 16-bit signed integer.
#[inline(always)]
pub(crate) const fn sign_extend(val: u16, bits: u32) -> i16 {
    let shift = u16::BITS - bits;
    ((val << shift) as i16) >> shift
}

/// A single instruction operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    /// Register field index (0-15 for an encodable operand).
    Register(u8),
    /// Immediate value, absolute address or 2-byte offset.
    Immediate(i64),
    /// PC-relative displacement in bytes, measured from the next instruction.
    Displacement(i64),
}

impl Operand {
    /// Register operand naming `reg`.
    pub const fn reg(reg: Register) -> Self {
        Self::Register(reg as u8)
    }

    /// Short name of the operand kind, used in diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Register(_) => "register",
            Self::Immediate(_) => "immediate",
            Self::Displacement(_) => "displacement",
        }
    }
}

/// Structured result of decoding one instruction.
///
/// Operands are stored in assembler order for the layout; see
/// [`Layout`] for the shape each tag implies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedInstruction {
    /// Raw leading 16-bit word.
    pub raw: u16,
    /// Instruction form.
    pub form: Form,
    /// Form-local opcode.
    pub opcode: u8,
    /// Canonical mnemonic.
    pub mnemonic: &'static str,
    /// Operand layout.
    pub layout: Layout,
    /// Operands in assembler order.
    pub operands: Vec<Operand>,
    /// Total encoded length in bytes (2, 4 or 6).
    pub len: usize,
}

impl DecodedInstruction {
    /// Register A, for layouts that use it.
    pub fn reg_a(&self) -> Option<u8> {
        match self.layout {
            Layout::A
            | Layout::AB
            | Layout::A4
            | Layout::AiB
            | Layout::ABi
            | Layout::A8V
            | Layout::ABi2 => self.register_at(0),
            Layout::F4A | Layout::AiB2 => self.register_at(1),
            Layout::Narg | Layout::F4 | Layout::M | Layout::PcRel | Layout::Bad => None,
        }
    }

    /// Register B, for layouts that use it.
    pub fn reg_b(&self) -> Option<u8> {
        match self.layout {
            Layout::AB | Layout::AiB | Layout::ABi => self.register_at(1),
            Layout::AiB2 | Layout::ABi2 => self.register_at(2),
            _ => None,
        }
    }

    /// The immediate, address, offset or displacement operand, if any.
    pub fn value(&self) -> Option<i64> {
        self.operands.iter().find_map(|op| match *op {
            Operand::Immediate(v) | Operand::Displacement(v) => Some(v),
            Operand::Register(_) => None,
        })
    }

    /// Branch target for a `PCREL` instruction located at `address`.
    ///
    /// The displacement is relative to the following instruction.
    pub fn branch_target(&self, address: u64) -> Option<u64> {
        self.operands.iter().find_map(|op| match *op {
            Operand::Displacement(d) => {
                Some(address.wrapping_add(WORD_BYTES as u64).wrapping_add_signed(d))
            }
            _ => None,
        })
    }

    fn register_at(&self, position: usize) -> Option<u8> {
        match self.operands.get(position) {
            Some(Operand::Register(r)) => Some(*r),
            _ => None,
        }
    }
}
