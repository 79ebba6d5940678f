//! Instruction forms and operand layout tags.
//!
//! The top one or two bits of every leading word select one of three forms;
//! each table entry then carries a layout tag describing which operand fields
//! the opcode consumes and how many bytes follow the leading word.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::constants::{FORM1_SELECT_MASK, FORM2_SELECT, FORM23_SELECT_MASK};

/// One of the three top-level instruction encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Form {
    /// `0ooooooo aaaabbbb`: 7-bit opcode, two register fields, optional trailing bytes.
    One,
    /// `10ooaaaa vvvvvvvv`: 2-bit opcode, register A and an 8-bit value.
    Two,
    /// `11oooovv vvvvvvvv`: 4-bit opcode and a 10-bit signed displacement.
    Three,
}

impl Form {
    /// All forms, lowest first.
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    /// Classifies a leading word by its top bits.
    #[inline]
    pub const fn of(word: u16) -> Self {
        if word & FORM1_SELECT_MASK == 0 {
            Self::One
        } else if word & FORM23_SELECT_MASK == FORM2_SELECT {
            Self::Two
        } else {
            Self::Three
        }
    }

    /// Number of opcodes (table entries) in this form.
    pub const fn table_len(self) -> usize {
        match self {
            Self::One => 128,
            Self::Two => 4,
            Self::Three => 16,
        }
    }

    /// 1-based form number as used in the encoding diagrams.
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "form {}", self.number())
    }
}

/// Operand shape of a table entry.
///
/// "Indirect" registers are used as pointers: `st.l ($r0), $r1` stores `$r1`
/// at the address held in `$r0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// No operands.
    Narg,
    /// Register A only.
    A,
    /// Registers A and B.
    AB,
    /// Register A and a trailing 4-byte immediate.
    A4,
    /// Trailing 4-byte immediate only.
    F4,
    /// Trailing 4-byte absolute address only.
    M,
    /// Indirect register A and register B.
    AiB,
    /// Register A and indirect register B.
    ABi,
    /// Trailing 4-byte address followed by register A.
    F4A,
    /// Indirect register A plus a trailing 2-byte offset, and register B.
    AiB2,
    /// Register A, and indirect register B plus a trailing 2-byte offset.
    ABi2,
    /// Register A and an 8-bit value packed in the leading word (form 2).
    A8V,
    /// 10-bit signed displacement packed in the leading word (form 3).
    PcRel,
    /// Reserved or unassigned encoding.
    Bad,
}

impl Layout {
    /// Bytes that follow the leading word.
    pub const fn extra_bytes(self) -> usize {
        match self {
            Self::A4 | Self::F4 | Self::M | Self::F4A => 4,
            Self::AiB2 | Self::ABi2 => 2,
            Self::Narg
            | Self::A
            | Self::AB
            | Self::AiB
            | Self::ABi
            | Self::A8V
            | Self::PcRel
            | Self::Bad => 0,
        }
    }

    /// Total encoded length in bytes.
    pub const fn encoded_len(self) -> usize {
        2 + self.extra_bytes()
    }

    /// Number of operands in assembler order.
    pub const fn arity(self) -> usize {
        match self {
            Self::Narg | Self::Bad => 0,
            Self::A | Self::F4 | Self::M | Self::PcRel => 1,
            Self::AB | Self::A4 | Self::AiB | Self::ABi | Self::F4A | Self::A8V => 2,
            Self::AiB2 | Self::ABi2 => 3,
        }
    }

    /// Whether this tag marks an invalid encoding.
    pub const fn is_bad(self) -> bool {
        matches!(self, Self::Bad)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Narg => "NARG",
            Self::A => "A",
            Self::AB => "AB",
            Self::A4 => "A4",
            Self::F4 => "F4",
            Self::M => "M",
            Self::AiB => "AiB",
            Self::ABi => "ABi",
            Self::F4A => "F4A",
            Self::AiB2 => "AiB2",
            Self::ABi2 => "ABi2",
            Self::A8V => "A8V",
            Self::PcRel => "PCREL",
            Self::Bad => "BAD",
        };
        f.write_str(tag)
    }
}
