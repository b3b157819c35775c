//! Operand extraction for a matched encoding.

use crate::bits::{gather, sign_extend};
use crate::isa::{Encoding, FieldKind};
use crate::operand::{Imm, ImmFlags, Operand, Pred};

/// Bits of the raw field kept below an extender payload.
pub const EXTENDER_LOW_MASK: u32 = 0x3f;

/// Per-instruction inputs that do not come from the word itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractContext {
    /// Address of the first word of the enclosing packet.
    pub packet_addr: u32,
    /// Pending constant-extender payload, already shifted into place.
    pub extension: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub operands: Vec<Operand>,
    /// The extension in the context was merged into an operand.
    pub extension_used: bool,
}

/// Pull every operand of `enc` out of `bits`, in field order.
///
/// Reserved register encodings become [`Operand::Reserved`]; nothing here fails.
pub fn extract(enc: &Encoding, bits: u32, ctx: &ExtractContext) -> Extraction {
    let mut extension = ctx.extension;
    let mut operands = Vec::with_capacity(enc.fields.len());
    for field in enc.fields {
        let raw = gather(bits, field.mask);
        let op = match field.kind {
            FieldKind::Reg(class) => match class.decode(raw) {
                Some(reg) => Operand::Reg(reg),
                None => Operand::Reserved { raw },
            },
            FieldKind::ImplicitReg(reg) => Operand::Reg(reg),
            FieldKind::Pred(sense) => Operand::Pred(Pred { reg: raw as u8, sense }),
            FieldKind::ImplicitPred(sense) => Operand::Pred(Pred { reg: 0, sense }),
            FieldKind::Hint => Operand::Hint { taken: raw != 0 },
            FieldKind::Imm { flags, shift } => {
                let ext = if flags.contains(ImmFlags::EXTENDABLE) {
                    extension.take()
                } else {
                    None
                };
                let imm = immediate(raw, field.mask.count_ones(), flags, shift, ext);
                Operand::Imm(pc_adjust(imm, ctx.packet_addr))
            }
        };
        operands.push(op);
    }
    Extraction {
        operands,
        extension_used: ctx.extension.is_some() && extension.is_none(),
    }
}

fn immediate(raw: u32, width: u32, flags: ImmFlags, shift: u8, ext: Option<u32>) -> Imm {
    match ext {
        // extended immediates are unscaled
        Some(payload) => Imm {
            value: payload | (raw & EXTENDER_LOW_MASK),
            width: 32,
            flags: flags | ImmFlags::EXTENDED,
        },
        None => {
            let value = if flags.contains(ImmFlags::SIGNED) {
                sign_extend(raw, width)
            } else {
                raw
            };
            Imm {
                value: value << shift,
                width: (width + shift as u32) as u8,
                flags,
            }
        }
    }
}

fn pc_adjust(imm: Imm, packet_addr: u32) -> Imm {
    if imm.is_pcrel() {
        Imm { value: imm.value.wrapping_add(packet_addr), ..imm }
    } else {
        imm
    }
}
