use hexagon_rs::render::{render, render_packet};
use hexagon_rs::{Opcode, Packet, Packets, RenderConfig, Session, Slot};
use pretty_assertions::assert_eq;

const MORE: u32 = 0b01 << 14;
const END: u32 = 0b11 << 14;

/// Extender whose payload, once shifted, is `value` (low 6 bits ignored).
fn enc_immext(value: u32, parse: u32) -> u32 {
    let v = value >> 6;
    ((v >> 14) << 16) | parse | (v & 0x3fff)
}

fn enc_addi(d: u32, s: u32, imm: u32, parse: u32) -> u32 {
    let i = imm & 0xffff;
    0xb000_0000 | ((i >> 9) << 21) | (s << 16) | parse | ((i & 0x1ff) << 5) | d
}

fn enc_add(d: u32, s: u32, t: u32, parse: u32) -> u32 {
    0xf300_0000 | (s << 16) | parse | (t << 8) | d
}

fn enc_jump(off: u32, parse: u32) -> u32 {
    let i = (off >> 2) & 0x3f_ffff;
    0x5800_0000 | ((i >> 13) << 16) | parse | ((i & 0x1fff) << 1)
}

fn enc_duplex(class: u32, high: u32, low: u32) -> u32 {
    ((class >> 1) << 29) | ((class & 1) << 13) | (high << 16) | low
}

fn packets(words: &[u32], base: u32) -> Vec<Packet> {
    let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    Packets::new(&bytes, base).collect()
}

fn lines(words: &[u32]) -> Vec<String> {
    let cfg = RenderConfig::default();
    packets(words, 0x2000).iter().flat_map(|p| render_packet(p, &cfg)).collect()
}

#[test]
fn extender_merges_into_next_immediate() {
    let ps = packets(&[enc_immext(0x1000, MORE), enc_addi(2, 3, 0x23, END)], 0);
    let insns: Vec<_> = ps[0].instructions().collect();
    assert_eq!(insns[0].opcode, Opcode::ImmExt);
    assert_eq!(insns[0].extension, Some(0x1000));
    let imm = insns[1].operands[2].as_imm().unwrap();
    assert_eq!(imm.value, 0x1023);
    assert!(imm.is_extended());
    assert_eq!(insns[1].extension, Some(0x1000));
}

#[test]
fn extender_never_renders_as_its_own_line() {
    let out = lines(&[enc_immext(0x1000, MORE), enc_addi(2, 3, 0x23, END)]);
    assert_eq!(out, vec!["[ R2 = add(R3,##0x1023)"]);
    let cfg = RenderConfig { imm_hash: false, ..RenderConfig::default() };
    let ps = packets(&[enc_immext(0x1000, MORE), enc_addi(2, 3, 0x23, END)], 0);
    assert_eq!(render_packet(&ps[0], &cfg), vec!["[ R2 = add(R3,#0x1023)"]);
}

#[test]
fn extender_in_isolation_shows_its_payload() {
    let ps = packets(&[enc_immext(0x1000, MORE)], 0);
    let insn = ps[0].instructions().next().unwrap();
    assert_eq!(render(insn, &RenderConfig::default()), "immext(##0x1000)");
}

#[test]
fn extended_branch_target_is_pc_relative() {
    let out = lines(&[enc_immext(0x1000, MORE), enc_jump(0x10, END)]);
    // payload | (raw & 0x3f) where raw = 0x10 >> 2
    assert_eq!(out, vec!["[ jump 0x3004"]);
}

#[test]
fn non_extendable_successor_drops_extension() {
    let ps = packets(&[enc_immext(0x1000, MORE), enc_add(1, 2, 3, MORE), enc_addi(4, 5, 1, END)], 0);
    let insns: Vec<_> = ps[0].instructions().collect();
    assert_eq!(insns[1].extension, None);
    // not carried over to the instruction after
    let imm = insns[2].operands[2].as_imm().unwrap();
    assert_eq!(imm.value, 1);
    assert!(!imm.is_extended());
}

#[test]
fn second_extender_replaces_first() {
    let ps = packets(
        &[enc_immext(0x1000, MORE), enc_immext(0x8000, MORE), enc_addi(1, 1, 2, END)],
        0,
    );
    let insns: Vec<_> = ps[0].instructions().collect();
    assert_eq!(insns[2].operands[2].as_imm().unwrap().value, 0x8002);
}

#[test]
fn pending_extender_does_not_cross_packets() {
    let ps = packets(&[enc_immext(0x1000, END), enc_addi(1, 1, 2, END)], 0);
    assert_eq!(ps.len(), 2);
    let imm = ps[1].instructions().next().unwrap().operands[2].as_imm().unwrap();
    assert_eq!(imm.value, 2);
    // only the extender in its packet: still shown
    assert_eq!(render_packet(&ps[0], &RenderConfig::default()), vec!["[ immext(##0x1000)"]);
}

#[test]
fn extender_before_duplex_applies_to_high_half() {
    // class 3: high R1 = #u6 (0x21), low R0 = #u6 (0x3)
    let d = enc_duplex(3, 0b010_100001_0001, 0b010_000011_0000);
    let ps = packets(&[enc_immext(0x1000, MORE), d], 0);
    let insns: Vec<_> = ps[0].instructions().collect();
    assert_eq!(insns[1].operands[1].as_imm().unwrap().value, 3);
    assert_eq!(insns[2].operands[1].as_imm().unwrap().value, 0x1021);
    assert_eq!(
        render_packet(&ps[0], &RenderConfig::default()),
        vec!["/ R0 = #0x3", "\\ R1 = ##0x1021"]
    );
}

#[test]
fn session_continues_extension_across_calls() {
    let mut s = Session::new().unwrap();
    let ext = enc_immext(0x1000, MORE).to_le_bytes();
    let add = enc_addi(2, 3, 0x23, END).to_le_bytes();
    let first = s.disassemble(&ext, 0x100).unwrap();
    assert_eq!(first.text, "/ immext(##0x1000)");
    let Slot::Single(insn) = s.decode(&add, 0x104).unwrap() else { panic!("expected a single slot") };
    assert_eq!(insn.extension, Some(0x1000));
    assert_eq!(render(&insn, &RenderConfig::default()), "R2 = add(R3,##0x1023)");
}
