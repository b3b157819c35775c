//! Text rendering of decoded instructions and packets.

use crate::config::RenderConfig;
use crate::decoder::{DecodedInstruction, PacketPosition};
use crate::operand::{Imm, Operand, Pred, PredSense};
use crate::packet::{Packet, PacketFlags};

pub const INVALID: &str = "invalid";
const RESERVED: &str = "<err>";

pub fn render_imm(imm: &Imm, cfg: &RenderConfig) -> String {
    // branch targets are addresses
    if imm.is_pcrel() {
        return format!("{:#x}", imm.value);
    }
    let prefix = if cfg.imm_hash && imm.width >= 32 { "##" } else { "#" };
    if cfg.imm_sign && imm.is_negative() {
        format!("{prefix}-{:#x}", (imm.value as i32).unsigned_abs())
    } else {
        format!("{prefix}{:#x}", imm.value)
    }
}

fn render_pred(pred: &Pred) -> String {
    let n = pred.reg;
    match pred.sense {
        PredSense::True => format!("P{n}"),
        PredSense::False => format!("!P{n}"),
        PredSense::TrueNew => format!("P{n}.new"),
        PredSense::FalseNew => format!("!P{n}.new"),
    }
}

pub fn render_operand(op: &Operand, cfg: &RenderConfig) -> String {
    match op {
        Operand::Reg(reg) => reg.name(cfg.reg_alias),
        Operand::Imm(imm) => render_imm(imm, cfg),
        Operand::Pred(pred) => render_pred(pred),
        Operand::Hint { taken: true } => ":t".to_string(),
        Operand::Hint { taken: false } => ":nt".to_string(),
        Operand::Reserved { .. } => RESERVED.to_string(),
    }
}

/// Instruction text without packet decoration.
pub fn render(insn: &DecodedInstruction, cfg: &RenderConfig) -> String {
    if insn.is_invalid() {
        return INVALID.to_string();
    }
    let mut out = String::with_capacity(insn.syntax.len() + 16);
    let mut rest = insn.syntax;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let Some(close) = tail.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        match tail[..close].parse::<usize>().ok().and_then(|i| insn.operands.get(i)) {
            Some(op) => out.push_str(&render_operand(op, cfg)),
            None => out.push_str(RESERVED),
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    out
}

fn loop_suffix(position: PacketPosition) -> Option<&'static str> {
    let l0 = position.contains(PacketPosition::ENDLOOP0);
    let l1 = position.contains(PacketPosition::ENDLOOP1);
    match (l0, l1) {
        (true, true) => Some("endloop01"),
        (true, false) => Some("endloop0"),
        (false, true) => Some("endloop1"),
        (false, false) => None,
    }
}

/// Add the packet gutter (or SDK braces) for an instruction at `position`.
pub fn decorate(text: &str, position: PacketPosition, cfg: &RenderConfig) -> String {
    let first = position.contains(PacketPosition::FIRST);
    let last = position.contains(PacketPosition::LAST);
    let endloop = if last { loop_suffix(position) } else { None };
    if cfg.sdk {
        let open = if first { "{ " } else { "  " };
        let close = if last { " }" } else { "" };
        match endloop {
            Some(l) => format!("{open}{text}{close}:{l}"),
            None => format!("{open}{text}{close}"),
        }
    } else {
        let gutter = match (first, last) {
            (true, true) => "[ ",
            (true, false) => "/ ",
            (false, true) => "\\ ",
            (false, false) => "| ",
        };
        match endloop {
            Some(l) => format!("{gutter}{text}  < {l}"),
            None => format!("{gutter}{text}"),
        }
    }
}

/// One line for a single decoded entry, using the position it was decoded with.
///
/// Invalid entries keep their gutter or braces so packet brackets stay balanced.
pub fn render_line(insn: &DecodedInstruction, cfg: &RenderConfig) -> String {
    decorate(&render(insn, cfg), insn.position, cfg)
}

/// Lines for a whole packet, one per visible instruction.
///
/// Extenders are folded into the instruction they extend; the next line takes
/// over their place in the packet.
pub fn render_packet(packet: &Packet, cfg: &RenderConfig) -> Vec<String> {
    let mut visible: Vec<&DecodedInstruction> =
        packet.instructions().filter(|insn| !insn.is_extender()).collect();
    if visible.is_empty() {
        visible = packet.instructions().collect();
    }
    let mut loops = PacketPosition::empty();
    loops.set(PacketPosition::ENDLOOP0, packet.flags.contains(PacketFlags::ENDLOOP0));
    loops.set(PacketPosition::ENDLOOP1, packet.flags.contains(PacketFlags::ENDLOOP1));
    let last = visible.len().saturating_sub(1);
    visible
        .iter()
        .enumerate()
        .map(|(i, insn)| {
            let text = render(insn, cfg);
            let mut position = PacketPosition::empty();
            position.set(PacketPosition::FIRST, i == 0);
            if i == last {
                position |= PacketPosition::LAST | loops;
            }
            decorate(&text, position, cfg)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::ImmFlags;
    use pretty_assertions::assert_eq;

    fn imm(value: i32, width: u8, flags: ImmFlags) -> Imm {
        Imm { value: value as u32, width, flags }
    }

    #[test]
    fn immediate_styles() {
        let mut cfg = RenderConfig::default();
        let neg = imm(-5, 16, ImmFlags::SIGNED);
        assert_eq!(render_imm(&neg, &cfg), "#-0x5");
        cfg.imm_sign = false;
        assert_eq!(render_imm(&neg, &cfg), "#0xfffffffb");

        let wide = imm(0x1023, 32, ImmFlags::EXTENDED);
        cfg = RenderConfig::default();
        assert_eq!(render_imm(&wide, &cfg), "##0x1023");
        cfg.imm_hash = false;
        assert_eq!(render_imm(&wide, &cfg), "#0x1023");

        let target = imm(0x2000, 24, ImmFlags::SIGNED | ImmFlags::PCREL);
        assert_eq!(render_imm(&target, &cfg), "0x2000");
    }

    #[test]
    fn gutters() {
        let cfg = RenderConfig::default();
        let f = PacketPosition::FIRST;
        let l = PacketPosition::LAST;
        assert_eq!(decorate("nop", f | l, &cfg), "[ nop");
        assert_eq!(decorate("nop", f, &cfg), "/ nop");
        assert_eq!(decorate("nop", PacketPosition::empty(), &cfg), "| nop");
        assert_eq!(decorate("nop", l | PacketPosition::ENDLOOP0, &cfg), "\\ nop  < endloop0");
        let sdk = RenderConfig { sdk: true, ..RenderConfig::default() };
        assert_eq!(decorate("nop", f | l, &sdk), "{ nop }");
        assert_eq!(decorate("nop", f, &sdk), "{ nop");
        assert_eq!(decorate("nop", l | PacketPosition::ENDLOOP0 | PacketPosition::ENDLOOP1, &sdk), "  nop }:endloop01");
    }

    #[test]
    fn predicates() {
        let p = |sense| render_pred(&Pred { reg: 2, sense });
        assert_eq!(p(PredSense::True), "P2");
        assert_eq!(p(PredSense::False), "!P2");
        assert_eq!(p(PredSense::TrueNew), "P2.new");
        assert_eq!(p(PredSense::FalseNew), "!P2.new");
    }
}
