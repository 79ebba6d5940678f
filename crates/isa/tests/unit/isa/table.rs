//! Opcode Table Tests.
//!
//! Verifies that the dense per-form tables are total and direct-indexed,
//! that reserved slots carry the `BAD` sentinel, and that reverse lookup by
//! mnemonic is exact and deterministic.

use bonjour_isa::isa::opcodes::{BAD_MNEMONIC, FORM1, FORM2, FORM3};
use bonjour_isa::{Form, Layout, OpcodeTable};
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// 1. Table fidelity
// ══════════════════════════════════════════════════════════

#[test]
fn table_sizes_match_forms() {
    assert_eq!(FORM1.len(), 128);
    assert_eq!(FORM2.len(), 4);
    assert_eq!(FORM3.len(), 16);
    for form in Form::ALL {
        assert_eq!(OpcodeTable::global().entries(form).len(), form.table_len());
    }
}

#[test]
fn lookup_by_encoding_returns_entry_at_index() {
    let table = OpcodeTable::global();
    for form in Form::ALL {
        let entries = table.entries(form);
        for (i, expected) in entries.iter().enumerate() {
            let got = table.lookup_by_encoding(form, i as u8);
            assert_eq!(got.opcode as usize, i, "{form} slot {i} has opcode {:#x}", got.opcode);
            assert!(std::ptr::eq(got, expected), "{form} slot {i} not direct-indexed");
        }
    }
}

#[test]
fn lookup_by_encoding_masks_to_form_width() {
    let table = OpcodeTable::global();
    assert_eq!(table.lookup_by_encoding(Form::Two, 0x06).mnemonic, "gsr");
    assert_eq!(table.lookup_by_encoding(Form::Three, 0x13).mnemonic, "bgt");
    assert_eq!(table.lookup_by_encoding(Form::One, 0x85).mnemonic, "add");
}

#[test]
fn assigned_entry_counts() {
    let assigned = |t: &[bonjour_isa::OpcodeEntry]| t.iter().filter(|e| !e.is_bad()).count();
    assert_eq!(assigned(&FORM1), 54);
    assert_eq!(assigned(&FORM2), 4);
    assert_eq!(assigned(&FORM3), 10);
    assert_eq!(OpcodeTable::global().mnemonic_count(), 68);
}

// ══════════════════════════════════════════════════════════
// 2. Reserved slots
// ══════════════════════════════════════════════════════════

#[test]
fn reserved_form1_slots_are_bad() {
    let reserved = [0x00usize, 0x16, 0x17, 0x18]
        .into_iter()
        .chain(0x3a..=0x7f);
    for op in reserved {
        let entry = &FORM1[op];
        assert_eq!(entry.layout, Layout::Bad, "form 1 opcode {op:#x} should be BAD");
        assert_eq!(entry.mnemonic, BAD_MNEMONIC);
    }
}

#[test]
fn reserved_form3_slots_are_bad() {
    for op in 0x0a..=0x0f {
        assert!(FORM3[op].is_bad(), "form 3 opcode {op:#x} should be BAD");
    }
    assert!(FORM3[..0x0a].iter().all(|e| e.layout == Layout::PcRel));
}

#[test]
fn form2_is_all_a8v() {
    assert!(FORM2.iter().all(|e| e.layout == Layout::A8V));
}

// ══════════════════════════════════════════════════════════
// 3. Reverse lookup
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("ldi.l", Form::One, 0x01, Layout::A4)]
#[case("add", Form::One, 0x05, Layout::AB)]
#[case("jsra", Form::One, 0x03, Layout::M)]
#[case("sta.l", Form::One, 0x09, Layout::F4A)]
#[case("sto.s", Form::One, 0x39, Layout::AiB2)]
#[case("swi", Form::One, 0x30, Layout::F4)]
#[case("gsr", Form::Two, 0x02, Layout::A8V)]
#[case("beq", Form::Three, 0x00, Layout::PcRel)]
#[case("bleu", Form::Three, 0x09, Layout::PcRel)]
fn lookup_by_mnemonic_finds_entry(
    #[case] mnemonic: &str,
    #[case] form: Form,
    #[case] opcode: u8,
    #[case] layout: Layout,
) {
    let (got_form, entry) = OpcodeTable::global()
        .lookup_by_mnemonic(mnemonic)
        .unwrap_or_else(|| panic!("`{mnemonic}` not found"));
    assert_eq!(got_form, form);
    assert_eq!(entry.opcode, opcode);
    assert_eq!(entry.layout, layout);
    assert_eq!(entry.mnemonic, mnemonic);
}

#[rstest]
#[case("ADD")]
#[case("Add")]
#[case("add ")]
#[case("bad")]
#[case("")]
#[case("ldi")]
fn lookup_by_mnemonic_rejects(#[case] mnemonic: &str) {
    assert!(OpcodeTable::global().lookup_by_mnemonic(mnemonic).is_none());
}

#[test]
fn every_assigned_mnemonic_resolves_to_itself() {
    let table = OpcodeTable::global();
    for form in Form::ALL {
        for entry in table.entries(form).iter().filter(|e| !e.is_bad()) {
            let (f, found) = table
                .lookup_by_mnemonic(entry.mnemonic)
                .unwrap_or_else(|| panic!("`{}` missing from reverse index", entry.mnemonic));
            assert_eq!((f, found.opcode), (form, entry.opcode));
        }
    }
}

// ══════════════════════════════════════════════════════════
// 4. Shared access
// ══════════════════════════════════════════════════════════

#[test]
fn global_table_is_shared_across_threads() {
    let first: *const OpcodeTable = OpcodeTable::global();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    let table = OpcodeTable::global();
                    let ok = table
                        .lookup_by_mnemonic("mov")
                        .is_some_and(|(_, e)| e.opcode == 0x02);
                    (table as *const OpcodeTable as usize, ok)
                })
            })
            .collect();
        for h in handles {
            let (addr, ok) = h.join().unwrap_or((0, false));
            assert!(ok);
            assert_eq!(addr, first as usize);
        }
    });
}

#[test]
fn public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OpcodeTable>();
    assert_send_sync::<bonjour_isa::DecodedInstruction>();
    assert_send_sync::<bonjour_isa::Operand>();
    assert_send_sync::<bonjour_isa::config::Config>();
}
