use hexagon_rs::config::{IMM_HASH, REG_ALIAS, SDK};
use hexagon_rs::{disassemble, DisasmError, RenderConfig, Session};
use pretty_assertions::assert_eq;

const NOP_MORE: u32 = 0x7f00_4000;
const NOP_END: u32 = 0x7f00_c000;

fn bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Walk `buf` from `base` the way a host would, advancing by each result's size.
fn walk(session: &mut Session, buf: &[u8], base: u32) -> Vec<(u32, String, u32)> {
    let mut out = Vec::new();
    let mut off = 0usize;
    while off < buf.len() {
        let pc = base + off as u32;
        let d = session.disassemble(&buf[off..], pc).unwrap();
        out.push((pc, d.text, d.size));
        off += d.size as usize;
    }
    out
}

#[test]
fn sizes_are_four_or_two_plus_two() {
    // nop, then class 3 duplex (R0 = R1; R1 = #2)
    let duplex = (1 << 29) | (1 << 13) | (0b010_000010_0001 << 16) | 0b1_0000_0001_0000;
    let buf = bytes(&[NOP_MORE, duplex]);
    let mut s = Session::new().unwrap();
    assert_eq!(
        walk(&mut s, &buf, 0x1000),
        vec![
            (0x1000, "/ nop".to_string(), 4),
            (0x1004, "| R0 = R1".to_string(), 2),
            (0x1006, "\\ R1 = #0x2".to_string(), 2),
        ]
    );
}

#[test]
fn sequential_calls_share_the_packet() {
    let buf = bytes(&[NOP_MORE, NOP_END]);
    let mut s = Session::new().unwrap();
    assert_eq!(s.disassemble(&buf, 0x100).unwrap().text, "/ nop");
    assert_eq!(s.disassemble(&buf[4..], 0x104).unwrap().text, "\\ nop");
    // a jump elsewhere starts over
    assert_eq!(s.disassemble(&buf, 0x100).unwrap().text, "/ nop");
    assert_eq!(s.disassemble(&buf[4..], 0x200).unwrap().text, "[ nop");
}

#[test]
fn repeated_calls_are_deterministic() {
    let buf = bytes(&[NOP_END]);
    let mut s = Session::new().unwrap();
    let first = s.disassemble(&buf, 0x40).unwrap();
    for _ in 0..3 {
        assert_eq!(s.disassemble(&buf, 0x40).unwrap(), first);
    }
}

#[test]
fn short_buffers() {
    let mut s = Session::new().unwrap();
    assert_eq!(
        s.disassemble(&[0x00, 0xc0], 0x10).unwrap_err(),
        DisasmError::ShortBuffer { pc: 0x10, need: 4, got: 2 }
    );
    assert_eq!(
        s.disassemble(&[], 0x10).unwrap_err(),
        DisasmError::ShortBuffer { pc: 0x10, need: 4, got: 0 }
    );

    // the high half of a duplex only needs two bytes
    let duplex: u32 = (1 << 29) | (1 << 13) | (0b010_000010_0001 << 16) | 0b1_0000_0001_0000;
    let buf = duplex.to_le_bytes();
    assert_eq!(s.disassemble(&buf, 0x20).unwrap().size, 2);
    assert_eq!(
        s.disassemble(&buf[3..], 0x22).unwrap_err(),
        DisasmError::ShortBuffer { pc: 0x22, need: 2, got: 1 }
    );
    assert_eq!(s.disassemble(&buf[2..], 0x22).unwrap().text, "\\ R1 = #0x2");
}

#[test]
fn no_session() {
    assert_eq!(disassemble(None, &bytes(&[NOP_END]), 0), Err(DisasmError::NoSession));
    let mut s = Session::new().unwrap();
    assert_eq!(disassemble(Some(&mut s), &bytes(&[NOP_END]), 0).unwrap().text, "[ nop");
}

#[test]
fn options_take_effect_on_next_call() {
    // R0 = memw(SP+#0x10)
    let load = bytes(&[0x9180_c000 | (29 << 16) | (4 << 5)]);
    let mut s = Session::new().unwrap();
    assert_eq!(s.disassemble(&load, 0).unwrap().text, "[ R0 = memw(SP+#0x10)");
    s.set_option(REG_ALIAS, false).unwrap();
    s.set_option(SDK, true).unwrap();
    assert_eq!(s.disassemble(&load, 0).unwrap().text, "{ R0 = memw(R29+#0x10) }");
    assert!(matches!(s.set_option("bogus", true), Err(DisasmError::Config(_))));
}

#[test]
fn session_from_render_config() {
    let cfg = RenderConfig { imm_hash: false, ..RenderConfig::default() };
    let s = Session::with_config(&cfg).unwrap();
    assert_eq!(s.render_config(), cfg);
    assert_eq!(s.config().get(IMM_HASH), Ok(false));
}

#[test]
fn sdk_braces_close_on_an_invalid_last_word() {
    let buf = bytes(&[NOP_MORE, 0x2000_c000]);
    let mut s = Session::new().unwrap();
    s.set_option(SDK, true).unwrap();
    let lines: Vec<_> = walk(&mut s, &buf, 0).into_iter().map(|(_, text, _)| text).collect();
    assert_eq!(lines, vec!["{ nop", "  invalid }"]);
}
