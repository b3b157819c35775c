use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::regs::Reg;

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImmFlags: u8 {
const SIGNED = 1 << 0;
const EXTENDABLE = 1 << 1; // may take a constant extender
const PCREL = 1 << 2; // value is a branch target
const EXTENDED = 1 << 3; // a constant extender was merged in
}
}

/// Sense of a predicate guarding a conditional instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredSense {
    True,
    False,
    TrueNew,
    FalseNew,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pred {
    pub reg: u8,
    pub sense: PredSense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Imm {
    /// Two's-complement value after scaling, extension and pc adjustment.
    pub value: u32,
    /// Significant width in bits; 32 once extended.
    pub width: u8,
    pub flags: ImmFlags,
}

impl Imm {
    pub fn is_negative(&self) -> bool {
        self.flags.contains(ImmFlags::SIGNED) && (self.value as i32) < 0
    }

    pub fn is_pcrel(&self) -> bool {
        self.flags.contains(ImmFlags::PCREL)
    }

    pub fn is_extended(&self) -> bool {
        self.flags.contains(ImmFlags::EXTENDED)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operand {
    Reg(Reg),
    Imm(Imm),
    Pred(Pred),
    /// Static branch prediction hint (`:t` / `:nt`).
    Hint { taken: bool },
    /// Field value with no defined meaning; rendered as a placeholder.
    Reserved { raw: u32 },
}

impl Operand {
    pub fn as_imm(&self) -> Option<&Imm> {
        match self {
            Operand::Imm(imm) => Some(imm),
            _ => None,
        }
    }

    pub fn as_reg(&self) -> Option<&Reg> {
        match self {
            Operand::Reg(r) => Some(r),
            _ => None,
        }
    }
}
