use hexagon_rs::extract::ExtractContext;
use hexagon_rs::render::render;
use hexagon_rs::{Decoder, HexagonDecoder, InstructionWord, RenderConfig, Slot};
use pretty_assertions::assert_eq;

const END: u32 = 0b11 << 14;

fn enc_addi(d: u32, s: u32, imm: i32) -> u32 {
    let i = imm as u32 & 0xffff;
    0xb000_0000 | ((i >> 9) << 21) | (s << 16) | END | ((i & 0x1ff) << 5) | d
}

fn enc_loadw(d: u32, s: u32, byte_off: i32) -> u32 {
    let i = (byte_off >> 2) as u32 & 0x7ff;
    0x9180_0000 | ((i >> 9) << 25) | (s << 16) | END | ((i & 0x1ff) << 5) | d
}

fn enc_tfrcrr(d: u32, s: u32) -> u32 {
    0x6a00_0000 | (s << 16) | END | d
}

fn enc_jumpt(p: u32, taken: bool, off: i32) -> u32 {
    let i = (off >> 2) as u32 & 0x7fff;
    0x5c00_0000
        | ((i >> 13) << 22)
        | (((i >> 8) & 0x1f) << 16)
        | END
        | (((i >> 7) & 1) << 13)
        | ((taken as u32) << 12)
        | (p << 8)
        | ((i & 0x7f) << 1)
}

fn enc_cmpeqi(p: u32, s: u32, imm: i32) -> u32 {
    let i = imm as u32 & 0x3ff;
    0x7500_0000 | ((i >> 9) << 21) | (s << 16) | END | ((i & 0x1ff) << 5) | p
}

fn text_at(word: u32, addr: u32, cfg: &RenderConfig) -> String {
    let ctx = ExtractContext { packet_addr: addr, extension: None };
    match HexagonDecoder::new().decode(InstructionWord::new(word, addr), &ctx).slot {
        Slot::Single(insn) => render(&insn, cfg),
        Slot::Duplex { .. } => panic!("unexpected duplex"),
    }
}

fn text(word: u32) -> String {
    text_at(word, 0, &RenderConfig::default())
}

#[test]
fn disasm_alu_and_memory() {
    assert_eq!(text(enc_addi(2, 3, -5)), "R2 = add(R3,#-0x5)");
    assert_eq!(text(enc_addi(0, 0, 0x7fff)), "R0 = add(R0,#0x7fff)");
    assert_eq!(text(enc_loadw(0, 1, 8)), "R0 = memw(R1+#0x8)");
    assert_eq!(text(enc_loadw(0, 1, -4)), "R0 = memw(R1+#-0x4)");
    assert_eq!(text(enc_cmpeqi(0, 2, 7)), "P0 = cmp.eq(R2,#0x7)");
    assert_eq!(text(0x7f00_c000), "nop");
    assert_eq!(text(0xa800_c000), "barrier");
    assert_eq!(text(0x961e_c01e), "dealloc_return");
    assert_eq!(text(0xa09d_c002), "allocframe(#0x10)");
}

#[test]
fn register_aliases_toggle() {
    let alias = RenderConfig::default();
    let plain = RenderConfig { reg_alias: false, ..RenderConfig::default() };
    let w = enc_loadw(0, 29, 16);
    assert_eq!(text_at(w, 0, &alias), "R0 = memw(SP+#0x10)");
    assert_eq!(text_at(w, 0, &plain), "R0 = memw(R29+#0x10)");
    assert_eq!(text_at(enc_tfrcrr(0, 9), 0, &alias), "R0 = PC");
    assert_eq!(text_at(enc_tfrcrr(0, 9), 0, &plain), "R0 = C9");
    assert_eq!(text_at(enc_tfrcrr(1, 8), 0, &alias), "R1 = USR");
}

#[test]
fn reserved_control_register_is_a_placeholder() {
    assert_eq!(text(enc_tfrcrr(0, 5)), "R0 = <err>");
    assert_eq!(text(enc_tfrcrr(0, 24)), "R0 = <err>");
}

#[test]
fn conditional_branch_targets_are_packet_relative() {
    let cfg = RenderConfig::default();
    assert_eq!(text_at(enc_jumpt(1, true, 0x10), 0x1000, &cfg), "if (P1) jump:t 0x1010");
    assert_eq!(text_at(enc_jumpt(0, false, -8), 0x1000, &cfg), "if (P0) jump:nt 0xff8");
}

#[test]
fn immediate_display_options() {
    let w = enc_addi(2, 3, -5);
    let unsigned = RenderConfig { imm_sign: false, ..RenderConfig::default() };
    assert_eq!(text_at(w, 0, &unsigned), "R2 = add(R3,#0xfffffffb)");
    // narrow immediates keep a single # either way
    let nohash = RenderConfig { imm_hash: false, ..RenderConfig::default() };
    assert_eq!(text_at(w, 0, &nohash), "R2 = add(R3,#-0x5)");
}

#[test]
fn rendering_is_deterministic() {
    let cfg = RenderConfig::default();
    for w in [enc_addi(1, 2, 3), enc_jumpt(2, false, 0x40), 0x7f00_c000, 0x2000_c000] {
        assert_eq!(text_at(w, 0x400, &cfg), text_at(w, 0x400, &cfg));
    }
}
