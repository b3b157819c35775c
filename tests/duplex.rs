use hexagon_rs::duplex::DuplexHalf;
use hexagon_rs::extract::ExtractContext;
use hexagon_rs::render::{render, render_packet};
use hexagon_rs::{Decoder, DecodedInstruction, HexagonDecoder, InstructionWord, Opcode, Packets, RenderConfig, Slot};
use pretty_assertions::assert_eq;

fn enc_duplex(class: u32, high: u32, low: u32) -> u32 {
    ((class >> 1) << 29) | ((class & 1) << 13) | (high << 16) | low
}

fn halves(word: u32, addr: u32) -> (DecodedInstruction, DecodedInstruction) {
    let out = HexagonDecoder::new().decode(InstructionWord::new(word, addr), &ExtractContext::default());
    match out.slot {
        Slot::Duplex { low, high } => (low, high),
        Slot::Single(insn) => panic!("expected a duplex, got {:?}", insn.opcode),
    }
}

fn texts(word: u32) -> (String, String) {
    let cfg = RenderConfig::default();
    let (low, high) = halves(word, 0);
    (render(&low, &cfg), render(&high, &cfg))
}

#[test]
fn reserved_class_gives_two_invalid_halves() {
    let (low, high) = halves(enc_duplex(0xf, 0x1fff, 0x1fff), 0x400);
    for (insn, addr, half) in [(&low, 0x400, DuplexHalf::Low), (&high, 0x402, DuplexHalf::High)] {
        assert!(insn.is_invalid());
        assert_eq!(insn.size, 2);
        assert_eq!(insn.addr, addr);
        assert_eq!(insn.duplex, Some(half));
        assert_eq!(render(insn, &RenderConfig::default()), "invalid");
    }
}

#[test]
fn sub_registers_map_to_upper_bank() {
    // class 3 (A/A)
    let (low, high) = texts(enc_duplex(0x3, 0x1d14, 0x108f));
    assert_eq!(low, "R23 = R16");
    assert_eq!(high, "R17:16 = combine(#0,R1)");
}

#[test]
fn stack_relative_halves() {
    // class 0xd: low S2, high L2
    let (low, high) = texts(enc_duplex(0xd, 0x1c21, 0x0bf8));
    assert_eq!(low, "memd(SP+#-0x8) = R1:0");
    assert_eq!(high, "R1 = memw(SP+#0x8)");

    let plain = RenderConfig { reg_alias: false, ..RenderConfig::default() };
    let (l, _) = halves(enc_duplex(0xd, 0x1c21, 0x0bf8), 0);
    assert_eq!(render(&l, &plain), "memd(R29+#-0x8) = R1:0");
}

#[test]
fn implicit_predicate_and_link_register() {
    // class 2 (L2/L2): low deallocframe, high conditional return jump
    let (low, high) = halves(enc_duplex(0x2, 0x1fc6, 0x1f00), 0);
    assert_eq!(low.opcode, Opcode::SL2Deallocframe);
    assert_eq!(high.opcode, Opcode::SL2Jumpr31Tnew);
    let cfg = RenderConfig::default();
    assert_eq!(render(&low, &cfg), "deallocframe");
    assert_eq!(render(&high, &cfg), "if (P0.new) jumpr:nt LR");
}

#[test]
fn duplex_lines_inside_a_packet() {
    let w = enc_duplex(0xd, 0x1c21, 0x0bf8);
    let bytes = w.to_le_bytes();
    let packets: Vec<_> = Packets::new(&bytes, 0x100).collect();
    assert_eq!(packets.len(), 1);
    assert_eq!(packets[0].size(), 4);
    assert_eq!(
        render_packet(&packets[0], &RenderConfig::default()),
        vec!["/ memd(SP+#-0x8) = R1:0", "\\ R1 = memw(SP+#0x8)"]
    );
}
