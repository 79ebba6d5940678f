//! Bonjour opcode tables.
//!
//! One dense table per form. Index position equals the raw form-local opcode
//! value; every slot has an entry, with reserved and unassigned encodings
//! carrying [`Layout::Bad`].

use serde::Serialize;

use crate::isa::form::Layout;

/// Mnemonic shared by every `BAD` entry.
pub const BAD_MNEMONIC: &str = "bad";

/// A single opcode table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct OpcodeEntry {
    /// Form-local opcode value (equals the entry's table index).
    pub opcode: u8,
    /// Operand layout.
    pub layout: Layout,
    /// Canonical mnemonic.
    pub mnemonic: &'static str,
}

impl OpcodeEntry {
    const fn new(opcode: u8, layout: Layout, mnemonic: &'static str) -> Self {
        Self {
            opcode,
            layout,
            mnemonic,
        }
    }

    const fn bad(opcode: u8) -> Self {
        Self::new(opcode, Layout::Bad, BAD_MNEMONIC)
    }

    /// Whether this entry is a reserved or unassigned encoding.
    pub const fn is_bad(&self) -> bool {
        self.layout.is_bad()
    }
}

/// Assigned form 1 opcodes. Every slot not listed here is `BAD`.
const FORM1_ASSIGNED: [OpcodeEntry; 54] = [
    OpcodeEntry::new(0x01, Layout::A4, "ldi.l"),
    OpcodeEntry::new(0x02, Layout::AB, "mov"),
    OpcodeEntry::new(0x03, Layout::M, "jsra"),
    OpcodeEntry::new(0x04, Layout::Narg, "ret"),
    OpcodeEntry::new(0x05, Layout::AB, "add"),
    OpcodeEntry::new(0x06, Layout::AB, "push"),
    OpcodeEntry::new(0x07, Layout::AB, "pop"),
    OpcodeEntry::new(0x08, Layout::A4, "lda.l"),
    OpcodeEntry::new(0x09, Layout::F4A, "sta.l"),
    OpcodeEntry::new(0x0a, Layout::ABi, "ld.l"),
    OpcodeEntry::new(0x0b, Layout::AiB, "st.l"),
    OpcodeEntry::new(0x0c, Layout::ABi2, "ldo.l"),
    OpcodeEntry::new(0x0d, Layout::AiB2, "sto.l"),
    OpcodeEntry::new(0x0e, Layout::AB, "cmp"),
    OpcodeEntry::new(0x0f, Layout::Narg, "nop"),
    OpcodeEntry::new(0x10, Layout::AB, "sex.b"),
    OpcodeEntry::new(0x11, Layout::AB, "sex.s"),
    OpcodeEntry::new(0x12, Layout::AB, "zex.b"),
    OpcodeEntry::new(0x13, Layout::AB, "zex.s"),
    OpcodeEntry::new(0x14, Layout::AB, "umul.x"),
    OpcodeEntry::new(0x15, Layout::AB, "mul.x"),
    OpcodeEntry::new(0x19, Layout::A, "jsr"),
    OpcodeEntry::new(0x1a, Layout::M, "jmpa"),
    OpcodeEntry::new(0x1b, Layout::A4, "ldi.b"),
    OpcodeEntry::new(0x1c, Layout::ABi, "ld.b"),
    OpcodeEntry::new(0x1d, Layout::A4, "lda.b"),
    OpcodeEntry::new(0x1e, Layout::AiB, "st.b"),
    OpcodeEntry::new(0x1f, Layout::F4A, "sta.b"),
    OpcodeEntry::new(0x20, Layout::A4, "ldi.s"),
    OpcodeEntry::new(0x21, Layout::ABi, "ld.s"),
    OpcodeEntry::new(0x22, Layout::A4, "lda.s"),
    OpcodeEntry::new(0x23, Layout::AiB, "st.s"),
    OpcodeEntry::new(0x24, Layout::F4A, "sta.s"),
    OpcodeEntry::new(0x25, Layout::A, "jmp"),
    OpcodeEntry::new(0x26, Layout::AB, "and"),
    OpcodeEntry::new(0x27, Layout::AB, "lshr"),
    OpcodeEntry::new(0x28, Layout::AB, "ashl"),
    OpcodeEntry::new(0x29, Layout::AB, "sub"),
    OpcodeEntry::new(0x2a, Layout::AB, "neg"),
    OpcodeEntry::new(0x2b, Layout::AB, "or"),
    OpcodeEntry::new(0x2c, Layout::AB, "not"),
    OpcodeEntry::new(0x2d, Layout::AB, "ashr"),
    OpcodeEntry::new(0x2e, Layout::AB, "xor"),
    OpcodeEntry::new(0x2f, Layout::AB, "mul"),
    OpcodeEntry::new(0x30, Layout::F4, "swi"),
    OpcodeEntry::new(0x31, Layout::AB, "div"),
    OpcodeEntry::new(0x32, Layout::AB, "udiv"),
    OpcodeEntry::new(0x33, Layout::AB, "mod"),
    OpcodeEntry::new(0x34, Layout::AB, "umod"),
    OpcodeEntry::new(0x35, Layout::Narg, "brk"),
    OpcodeEntry::new(0x36, Layout::ABi2, "ldo.b"),
    OpcodeEntry::new(0x37, Layout::AiB2, "sto.b"),
    OpcodeEntry::new(0x38, Layout::ABi2, "ldo.s"),
    OpcodeEntry::new(0x39, Layout::AiB2, "sto.s"),
];

/// Form 1 table (128 entries). Opcode `0x00` is reserved as bad.
pub static FORM1: [OpcodeEntry; 128] = build_form1();

/// Form 2 table (4 entries).
pub static FORM2: [OpcodeEntry; 4] = [
    OpcodeEntry::new(0x0, Layout::A8V, "inc"),
    OpcodeEntry::new(0x1, Layout::A8V, "dec"),
    OpcodeEntry::new(0x2, Layout::A8V, "gsr"),
    OpcodeEntry::new(0x3, Layout::A8V, "ssr"),
];

/// Form 3 table (16 entries). Opcodes `0xa`-`0xf` are reserved as bad.
pub static FORM3: [OpcodeEntry; 16] = [
    OpcodeEntry::new(0x0, Layout::PcRel, "beq"),
    OpcodeEntry::new(0x1, Layout::PcRel, "bne"),
    OpcodeEntry::new(0x2, Layout::PcRel, "blt"),
    OpcodeEntry::new(0x3, Layout::PcRel, "bgt"),
    OpcodeEntry::new(0x4, Layout::PcRel, "bltu"),
    OpcodeEntry::new(0x5, Layout::PcRel, "bgtu"),
    OpcodeEntry::new(0x6, Layout::PcRel, "bge"),
    OpcodeEntry::new(0x7, Layout::PcRel, "ble"),
    OpcodeEntry::new(0x8, Layout::PcRel, "bgeu"),
    OpcodeEntry::new(0x9, Layout::PcRel, "bleu"),
    OpcodeEntry::bad(0xa),
    OpcodeEntry::bad(0xb),
    OpcodeEntry::bad(0xc),
    OpcodeEntry::bad(0xd),
    OpcodeEntry::bad(0xe),
    OpcodeEntry::bad(0xf),
];

/// Expands the assigned form 1 opcodes into the dense 128-entry table.
const fn build_form1() -> [OpcodeEntry; 128] {
    let mut table = [OpcodeEntry::bad(0); 128];
    let mut i = 0;
    while i < table.len() {
        table[i] = OpcodeEntry::bad(i as u8);
        i += 1;
    }
    let mut j = 0;
    while j < FORM1_ASSIGNED.len() {
        let entry = FORM1_ASSIGNED[j];
        table[entry.opcode as usize] = entry;
        j += 1;
    }
    table
}
