//! Process-wide opcode table.
//!
//! Wraps the three static per-form tables with O(1) encoding lookup and a
//! reverse index from mnemonic to encoding. The table is built on first use,
//! never mutated afterwards, and shared by reference across threads.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::common::constants::{FORM1_OPCODE_MASK, FORM2_OPCODE_MASK, FORM3_OPCODE_MASK};
use crate::isa::form::Form;
use crate::isa::opcodes::{FORM1, FORM2, FORM3, OpcodeEntry};

static TABLE: LazyLock<OpcodeTable> = LazyLock::new(OpcodeTable::build);

/// Read-only mapping between encodings and mnemonics.
#[derive(Debug)]
pub struct OpcodeTable {
    forms: [&'static [OpcodeEntry]; 3],
    by_mnemonic: HashMap<&'static str, (Form, u8)>,
}

impl OpcodeTable {
    /// Returns the process-wide table.
    pub fn global() -> &'static Self {
        &TABLE
    }

    fn build() -> Self {
        let table = Self::from_tables(&FORM1, &FORM2, &FORM3);
        tracing::debug!(mnemonics = table.mnemonic_count(), "built bonjour opcode table");
        table
    }

    /// Indexes the given per-form tables. Each table must be direct-indexed
    /// by opcode.
    pub(crate) fn from_tables(
        form1: &'static [OpcodeEntry],
        form2: &'static [OpcodeEntry],
        form3: &'static [OpcodeEntry],
    ) -> Self {
        let forms = [form1, form2, form3];
        let mut by_mnemonic = HashMap::new();
        // Forms and opcodes are visited in ascending order, so the first
        // insertion of a mnemonic is the lowest-form, lowest-opcode match.
        for form in Form::ALL {
            for entry in forms[form_index(form)].iter().filter(|e| !e.is_bad()) {
                let _ = by_mnemonic
                    .entry(entry.mnemonic)
                    .or_insert((form, entry.opcode));
            }
        }
        Self { forms, by_mnemonic }
    }

    /// All entries of `form`, indexed by opcode.
    pub const fn entries(&self, form: Form) -> &'static [OpcodeEntry] {
        self.forms[form_index(form)]
    }

    /// Looks an entry up by form and form-local opcode.
    ///
    /// The opcode is masked to the form's width, so every call yields an entry
    /// (possibly a `BAD` one).
    #[inline]
    pub fn lookup_by_encoding(&self, form: Form, opcode: u8) -> &'static OpcodeEntry {
        let mask = match form {
            Form::One => FORM1_OPCODE_MASK,
            Form::Two => FORM2_OPCODE_MASK,
            Form::Three => FORM3_OPCODE_MASK,
        };
        &self.entries(form)[(u16::from(opcode) & mask) as usize]
    }

    /// Looks an encodable entry up by its exact, case-sensitive mnemonic.
    ///
    /// `BAD` entries are never returned.
    pub fn lookup_by_mnemonic(&self, mnemonic: &str) -> Option<(Form, &'static OpcodeEntry)> {
        self.by_mnemonic
            .get(mnemonic)
            .map(|&(form, opcode)| (form, self.lookup_by_encoding(form, opcode)))
    }

    /// Number of encodable (non-`BAD`) mnemonics.
    pub fn mnemonic_count(&self) -> usize {
        self.by_mnemonic.len()
    }
}

/// Position of `form` in the per-form table array.
const fn form_index(form: Form) -> usize {
    form.number() as usize - 1
}
