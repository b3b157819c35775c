//! Encoding descriptors for the Hexagon V6x instruction set.
//!
//! Each encoding is written as a bit string, most significant bit first, in
//! the style of the architecture manual:
//!
//! - `0`/`1` are fixed bits and form the match mask/pattern,
//! - `P` marks the two packet-parse bits, `-` a don't-care bit,
//! - any other letter names an operand field; all bits with the same letter
//!   are gathered (high to low) into that field's raw value,
//! - `_` is a separator and occupies no bit.
//!
//! Tables are ordered: the first matching entry wins, so alias encodings
//! with more fixed bits sit in front of the general form they overlap.

pub mod duplex;
pub mod normal;

use crate::opcode::Opcode;
use crate::operand::{ImmFlags, PredSense};
use crate::regs::{Reg, RegField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Reg(RegField),
    /// Predicate register guarding the instruction.
    Pred(PredSense),
    /// One bit selecting `:t` / `:nt`.
    Hint,
    Imm { flags: ImmFlags, shift: u8 },
    /// Operands implied by the opcode; they occupy no bits.
    ImplicitReg(Reg),
    ImplicitPred(PredSense),
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub mask: u32,
    pub kind: FieldKind,
}

#[derive(Debug)]
pub struct Encoding {
    pub opcode: Opcode,
    pub bits: &'static str,
    pub mask: u32,
    pub pattern: u32,
    /// Operand `N` is substituted for `{N}`.
    pub syntax: &'static str,
    pub fields: &'static [Field],
}

impl Encoding {
    pub fn matches(&self, word: u32) -> bool {
        word & self.mask == self.pattern
    }

    pub fn is_extendable(&self) -> bool {
        self.fields.iter().any(|f| {
            matches!(f.kind, FieldKind::Imm { flags, .. } if flags.contains(ImmFlags::EXTENDABLE))
        })
    }
}

/// Turn a bit string into `(mask, pattern)`; panics at compile time on a width mismatch.
pub const fn parse_pattern(pat: &[u8], width: usize) -> (u32, u32) {
    let mut mask = 0u32;
    let mut pattern = 0u32;
    let mut n = 0usize;
    let mut i = 0usize;
    while i < pat.len() {
        let c = pat[i];
        i += 1;
        if c == b'_' {
            continue;
        }
        assert!(n < width, "encoding string too long");
        let pos = width - 1 - n;
        n += 1;
        match c {
            b'0' => mask |= 1 << pos,
            b'1' => {
                mask |= 1 << pos;
                pattern |= 1 << pos;
            }
            _ => {}
        }
    }
    assert!(n == width, "encoding string too short");
    (mask, pattern)
}

/// Mask of all bits labelled `letter`.
pub const fn letter_mask(pat: &[u8], letter: u8) -> u32 {
    let mut width = 0usize;
    let mut i = 0usize;
    while i < pat.len() {
        if pat[i] != b'_' {
            width += 1;
        }
        i += 1;
    }
    let mut mask = 0u32;
    let mut n = 0usize;
    i = 0;
    while i < pat.len() {
        let c = pat[i];
        i += 1;
        if c == b'_' {
            continue;
        }
        if c == letter {
            mask |= 1 << (width - 1 - n);
        }
        n += 1;
    }
    mask
}

pub(crate) const R: FieldKind = FieldKind::Reg(RegField::Int);
pub(crate) const RR: FieldKind = FieldKind::Reg(RegField::Double);
pub(crate) const PR: FieldKind = FieldKind::Reg(RegField::Pred);
pub(crate) const CR: FieldKind = FieldKind::Reg(RegField::Ctr);
pub(crate) const CRR: FieldKind = FieldKind::Reg(RegField::Ctr64);
pub(crate) const MR: FieldKind = FieldKind::Reg(RegField::Mod);
pub(crate) const SR: FieldKind = FieldKind::Reg(RegField::SubInt);
pub(crate) const SRR: FieldKind = FieldKind::Reg(RegField::SubDouble);

pub(crate) const PT: FieldKind = FieldKind::Pred(PredSense::True);
pub(crate) const PF: FieldKind = FieldKind::Pred(PredSense::False);
pub(crate) const PTN: FieldKind = FieldKind::Pred(PredSense::TrueNew);
pub(crate) const PFN: FieldKind = FieldKind::Pred(PredSense::FalseNew);
pub(crate) const HINT: FieldKind = FieldKind::Hint;

pub(crate) const fn u(shift: u8) -> FieldKind {
    FieldKind::Imm { flags: ImmFlags::empty(), shift }
}

pub(crate) const fn s(shift: u8) -> FieldKind {
    FieldKind::Imm { flags: ImmFlags::SIGNED, shift }
}

pub(crate) const fn u_ext(shift: u8) -> FieldKind {
    FieldKind::Imm { flags: ImmFlags::EXTENDABLE, shift }
}

pub(crate) const fn s_ext(shift: u8) -> FieldKind {
    FieldKind::Imm { flags: ImmFlags::SIGNED.union(ImmFlags::EXTENDABLE), shift }
}

pub(crate) const fn pcrel(shift: u8) -> FieldKind {
    FieldKind::Imm {
        flags: ImmFlags::SIGNED.union(ImmFlags::EXTENDABLE).union(ImmFlags::PCREL),
        shift,
    }
}

pub(crate) const fn implicit(reg: Reg) -> FieldKind {
    FieldKind::ImplicitReg(reg)
}

pub(crate) const fn implicit_pred(sense: PredSense) -> FieldKind {
    FieldKind::ImplicitPred(sense)
}

/// Build an [`Encoding`]: `enc!(width, Opcode, "bits", "syntax", 'letter' => kind, ...)`.
///
/// Implicit operands use the letter `'_'`, which never labels a bit.
macro_rules! enc {
    ($width:expr, $op:ident, $bits:literal, $syntax:literal $(, $letter:literal => $kind:expr)* $(,)?) => {
        $crate::isa::Encoding {
            opcode: $crate::opcode::Opcode::$op,
            bits: $bits,
            mask: $crate::isa::parse_pattern($bits.as_bytes(), $width).0,
            pattern: $crate::isa::parse_pattern($bits.as_bytes(), $width).1,
            syntax: $syntax,
            fields: &[$($crate::isa::Field {
                mask: $crate::isa::letter_mask($bits.as_bytes(), $letter as u8),
                kind: $kind,
            }),*],
        }
    };
}

pub(crate) use enc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_parsing() {
        let (mask, pattern) = parse_pattern(b"1111_0011_000s_ssss_PP-t_tttt_---d_dddd", 32);
        assert_eq!(mask, 0xffe0_0000);
        assert_eq!(pattern, 0xf300_0000);
        assert_eq!(letter_mask(b"1111_0011_000s_ssss_PP-t_tttt_---d_dddd", b'd'), 0x1f);
        assert_eq!(letter_mask(b"1111_0011_000s_ssss_PP-t_tttt_---d_dddd", b'_'), 0);
        let (mask, pattern) = parse_pattern(b"1_0000_ssss_dddd", 13);
        assert_eq!(mask, 0x1f00);
        assert_eq!(pattern, 0x1000);
    }

    #[test]
    fn tables_are_well_formed() {
        for table in [normal::NORMAL, duplex::L1, duplex::L2, duplex::S1, duplex::S2, duplex::A] {
            for enc in table {
                // operand bits never overlap fixed bits or each other
                let mut seen = enc.mask;
                for f in enc.fields {
                    assert_eq!(seen & f.mask, 0, "{:?} has overlapping fields", enc.opcode);
                    seen |= f.mask;
                }
                // every placeholder refers to a field
                for (i, _) in enc.fields.iter().enumerate() {
                    let used = enc.syntax.contains(&format!("{{{i}}}"));
                    assert!(used, "{:?} never renders operand {i}", enc.opcode);
                }
                assert_eq!(enc.matches(enc.pattern), true);
            }
        }
    }
}
