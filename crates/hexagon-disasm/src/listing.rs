use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use hexagon_rs::duplex::DuplexHalf;
use hexagon_rs::operand::Operand;
use hexagon_rs::packet::{Packet, PacketFlags};
use hexagon_rs::render::{render, render_packet};
use hexagon_rs::{DecodedInstruction, DisasmError, Opcode, Packets, RenderConfig, Session};

use crate::model::Image;

/// Linear listing of `[start, end)`, one line per decoded entry.
///
/// Goes through the session, so duplex halves advance the cursor by 2 and
/// consecutive words share packet context.
pub fn range_listing(img: &Image, session: &mut Session, start: u32, end: u32, show_bytes: bool) -> Result<String> {
    let mut buf = String::new();
    let mut pc = start;
    while pc < end {
        let Some(bytes) = img.bytes_from(pc) else {
            let _ = writeln!(buf, "{pc:#010x}: <oob>");
            break;
        };
        let d = match session.disassemble(bytes, pc) {
            Ok(d) => d,
            Err(DisasmError::ShortBuffer { got, .. }) => {
                let _ = writeln!(buf, "{pc:#010x}: <short: {got} bytes>");
                break;
            }
            Err(e) => return Err(e.into()),
        };
        let _ = write!(buf, "{pc:#010x}: ");
        if show_bytes {
            for b in bytes.iter().take(d.size as usize) {
                let _ = write!(buf, "{b:02x} ");
            }
            if d.size == 2 {
                buf.push_str("      ");
            }
            buf.push_str("  ");
        }
        let _ = writeln!(buf, "{}", d.text);
        pc = pc.wrapping_add(d.size);
    }
    Ok(buf)
}

#[derive(Debug, Clone, Serialize)]
pub struct InstructionOut {
    pub addr: u32,
    pub opcode: Opcode,
    pub size: u32,
    pub text: String,
    pub branch: bool,
    pub extension: Option<u32>,
    pub duplex: Option<DuplexHalf>,
    pub operands: Vec<Operand>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PacketOut {
    pub addr: u32,
    pub size: u32,
    pub truncated: bool,
    pub endloop0: bool,
    pub endloop1: bool,
    pub lines: Vec<String>,
    pub instructions: Vec<InstructionOut>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub config: RenderConfig,
    pub packets: Vec<PacketOut>,
}

fn instruction_out(insn: &DecodedInstruction, cfg: &RenderConfig) -> InstructionOut {
    InstructionOut {
        addr: insn.addr,
        opcode: insn.opcode,
        size: insn.size,
        text: render(insn, cfg),
        branch: insn.opcode.is_branch(),
        extension: insn.extension,
        duplex: insn.duplex,
        operands: insn.operands.clone(),
    }
}

pub fn packet_out(packet: &Packet, cfg: &RenderConfig) -> PacketOut {
    PacketOut {
        addr: packet.addr,
        size: packet.size(),
        truncated: packet.is_truncated(),
        endloop0: packet.flags.contains(PacketFlags::ENDLOOP0),
        endloop1: packet.flags.contains(PacketFlags::ENDLOOP1),
        lines: render_packet(packet, cfg),
        instructions: packet.instructions().map(|i| instruction_out(i, cfg)).collect(),
    }
}

/// Every packet of every segment.
pub fn packet_report(img: &Image, cfg: &RenderConfig) -> Report {
    let packets: Vec<PacketOut> = img
        .segments
        .iter()
        .flat_map(|s| Packets::new(&s.bytes, s.base))
        .map(|p| packet_out(&p, cfg))
        .collect();
    let truncated = packets.iter().filter(|p| p.truncated).count();
    tracing::debug!("{} packets decoded, {truncated} truncated", packets.len());
    Report { config: *cfg, packets }
}

pub fn packet_text(report: &Report) -> String {
    let mut buf = String::new();
    for p in &report.packets {
        for (i, line) in p.lines.iter().enumerate() {
            if i == 0 {
                let _ = writeln!(buf, "{:#010x}:  {line}", p.addr);
            } else {
                let _ = writeln!(buf, "{:12} {line}", "");
            }
        }
    }
    buf
}
