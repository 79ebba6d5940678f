//! Register file layout.
//!
//! The bonjour register file has 18 slots. Slots 0-15 are addressable from
//! the 4-bit register fields of an instruction word; the program counter and
//! condition-code register are only reachable by external collaborators such
//! as a debugger stub.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Total number of register slots (16 addressable plus `$pc` and `$cc`).
pub const NUM_REGS: usize = 18;

/// Assembler names for every register slot, indexed by slot number.
const REG_NAMES: [&str; NUM_REGS] = [
    "$fp", "$sp", "$r0", "$r1", "$r2", "$r3", "$r4", "$r5", "$r6", "$r7", "$r8", "$r9", "$r10",
    "$r11", "$r12", "$r13", "$pc", "$cc",
];

/// A slot of the bonjour register file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    /// Frame pointer.
    Fp = 0,
    /// Stack pointer.
    Sp = 1,
    /// `$r0`, first argument and first return value.
    R0 = 2,
    /// `$r1`, second argument.
    R1 = 3,
    /// `$r2`.
    R2 = 4,
    /// `$r3`.
    R3 = 5,
    /// `$r4`.
    R4 = 6,
    /// `$r5`.
    R5 = 7,
    /// `$r6`.
    R6 = 8,
    /// `$r7`.
    R7 = 9,
    /// `$r8`.
    R8 = 10,
    /// `$r9`.
    R9 = 11,
    /// `$r10`.
    R10 = 12,
    /// `$r11`.
    R11 = 13,
    /// `$r12`.
    R12 = 14,
    /// `$r13`.
    R13 = 15,
    /// Program counter.
    Pc = 16,
    /// Condition-code register.
    Cc = 17,
}

impl Register {
    /// All registers in slot order.
    pub const ALL: [Self; NUM_REGS] = [
        Self::Fp,
        Self::Sp,
        Self::R0,
        Self::R1,
        Self::R2,
        Self::R3,
        Self::R4,
        Self::R5,
        Self::R6,
        Self::R7,
        Self::R8,
        Self::R9,
        Self::R10,
        Self::R11,
        Self::R12,
        Self::R13,
        Self::Pc,
        Self::Cc,
    ];

    /// Returns the register in slot `index`, or `None` past slot 17.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_REGS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the register addressed by a 4-bit instruction field.
    ///
    /// Only the low nibble of `field` is used, so this never fails.
    pub const fn from_field(field: u8) -> Self {
        Self::ALL[(field & 0xF) as usize]
    }

    /// Slot number of this register.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether an instruction's 4-bit register field can name this register.
    pub const fn is_addressable(self) -> bool {
        (self as u8) < 16
    }

    /// Assembler name, e.g. `$fp` or `$r3`.
    pub const fn name(self) -> &'static str {
        REG_NAMES[self as usize]
    }

    /// Looks a register up by its assembler name.
    pub fn from_name(name: &str) -> Option<Self> {
        REG_NAMES
            .iter()
            .position(|n| *n == name)
            .and_then(Self::from_index)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
