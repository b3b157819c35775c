use serde::{Deserialize, Serialize};

/// Register file a decoded register belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegClass {
    Int,
    Double,
    Pred,
    Ctr,
    Ctr64,
    Mod,
}

/// How a register number is packed into an instruction field.
///
/// The sub-instruction classes only reach part of the register file and
/// are remapped to their `Int`/`Double` counterparts on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegField {
    Int,
    Double,
    Pred,
    Ctr,
    Ctr64,
    Mod,
    SubInt,
    SubDouble,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reg {
    pub class: RegClass,
    /// Register number; pairs use the number of their low (even) half.
    pub num: u8,
}

const CTR_ALIASES: [Option<&str>; 32] = [
    Some("SA0"),
    Some("LC0"),
    Some("SA1"),
    Some("LC1"),
    Some("P3:0"),
    None,
    Some("M0"),
    Some("M1"),
    Some("USR"),
    Some("PC"),
    Some("UGP"),
    Some("GP"),
    Some("CS0"),
    Some("CS1"),
    Some("UPCYCLELO"),
    Some("UPCYCLEHI"),
    Some("FRAMELIMIT"),
    Some("FRAMEKEY"),
    Some("PKTCOUNTLO"),
    Some("PKTCOUNTHI"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some("UTIMERLO"),
    Some("UTIMERHI"),
];

fn ctr_reserved(n: u32) -> bool {
    n == 5 || (20..=29).contains(&n)
}

impl Reg {
    pub const fn int(num: u8) -> Self {
        Self { class: RegClass::Int, num }
    }

    pub const fn double(num: u8) -> Self {
        Self { class: RegClass::Double, num }
    }

    pub const fn pred(num: u8) -> Self {
        Self { class: RegClass::Pred, num }
    }

    pub const fn ctr(num: u8) -> Self {
        Self { class: RegClass::Ctr, num }
    }

    /// Name without aliasing, e.g. `R29`, `R1:0`, `C9`.
    pub fn canonical_name(&self) -> String {
        let n = self.num;
        match self.class {
            RegClass::Int => format!("R{n}"),
            RegClass::Double => format!("R{}:{n}", n + 1),
            RegClass::Pred => format!("P{n}"),
            RegClass::Ctr => format!("C{n}"),
            RegClass::Ctr64 => format!("C{}:{n}", n + 1),
            RegClass::Mod => format!("M{n}"),
        }
    }

    /// Architecture-defined friendly name, if the register has one.
    pub fn alias(&self) -> Option<&'static str> {
        match (self.class, self.num) {
            (RegClass::Int, 29) => Some("SP"),
            (RegClass::Int, 30) => Some("FP"),
            (RegClass::Int, 31) => Some("LR"),
            (RegClass::Double, 30) => Some("LR:FP"),
            (RegClass::Ctr, n) => CTR_ALIASES.get(n as usize).copied().flatten(),
            (RegClass::Ctr64, 0) => Some("LC0:SA0"),
            (RegClass::Ctr64, 2) => Some("LC1:SA1"),
            (RegClass::Ctr64, 6) => Some("M1:0"),
            (RegClass::Ctr64, 12) => Some("CS1:0"),
            (RegClass::Ctr64, 14) => Some("UPCYCLE"),
            (RegClass::Ctr64, 18) => Some("PKTCOUNT"),
            (RegClass::Ctr64, 30) => Some("UTIMER"),
            _ => None,
        }
    }

    pub fn name(&self, use_alias: bool) -> String {
        match self.alias() {
            Some(a) if use_alias => a.to_string(),
            _ => self.canonical_name(),
        }
    }
}

impl RegField {
    /// Map raw field bits to a register; `None` for reserved encodings.
    pub fn decode(self, raw: u32) -> Option<Reg> {
        let reg = |class, num: u32| Some(Reg { class, num: num as u8 });
        match self {
            RegField::Int if raw < 32 => reg(RegClass::Int, raw),
            RegField::Double if raw < 32 && raw % 2 == 0 => reg(RegClass::Double, raw),
            RegField::Pred if raw < 4 => reg(RegClass::Pred, raw),
            RegField::Ctr if raw < 32 && !ctr_reserved(raw) => reg(RegClass::Ctr, raw),
            RegField::Ctr64 if raw < 32 && raw % 2 == 0 && !ctr_reserved(raw + 1) && !ctr_reserved(raw) => {
                reg(RegClass::Ctr64, raw)
            }
            RegField::Mod if raw < 2 => reg(RegClass::Mod, raw),
            // R0-R7, R16-R23
            RegField::SubInt if raw < 16 => reg(RegClass::Int, if raw < 8 { raw } else { raw + 8 }),
            // R1:0..R7:6, R17:16..R23:22
            RegField::SubDouble if raw < 8 => {
                reg(RegClass::Double, if raw < 4 { raw * 2 } else { raw * 2 + 8 })
            }
            _ => None,
        }
    }
}
