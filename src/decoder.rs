use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::duplex::{split, DuplexHalf, SubWord};
use crate::extract::{extract, ExtractContext};
use crate::isa::Encoding;
use crate::matcher::{classify, iclass, parse_bits, Match, PARSE_DUPLEX, PARSE_END};
use crate::opcode::Opcode;
use crate::operand::Operand;

/// One 32-bit word and where it was fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionWord {
    pub word: u32,
    pub addr: u32,
}

impl InstructionWord {
    pub fn new(word: u32, addr: u32) -> Self {
        Self { word, addr }
    }

    /// Little-endian word at the start of `buf`; `None` if fewer than 4 bytes.
    pub fn from_le_bytes(buf: &[u8], addr: u32) -> Option<Self> {
        let bytes: [u8; 4] = buf.get(..4)?.try_into().ok()?;
        Some(Self::new(u32::from_le_bytes(bytes), addr))
    }

    pub fn parse_bits(&self) -> u32 {
        parse_bits(self.word)
    }

    pub fn iclass(&self) -> u32 {
        iclass(self.word)
    }

    pub fn is_duplex(&self) -> bool {
        self.word != 0 && self.parse_bits() == PARSE_DUPLEX
    }

    /// Constant extenders are the non-duplex ICLASS 0 words.
    pub fn is_extender(&self) -> bool {
        self.parse_bits() != PARSE_DUPLEX && self.iclass() == 0
    }

    /// Parse bits `11`, or `00` (duplexes always end the packet).
    pub fn is_packet_end(&self) -> bool {
        matches!(self.parse_bits(), PARSE_END | PARSE_DUPLEX)
    }
}

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PacketPosition: u8 {
const FIRST = 1 << 0;
const LAST = 1 << 1; // carries the packet-end marker
const ENDLOOP0 = 1 << 2;
const ENDLOOP1 = 1 << 3;
}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedInstruction {
    pub addr: u32,
    pub opcode: Opcode,
    pub operands: Vec<Operand>,
    /// Bytes this entry accounts for: 4, or 2 for each duplex half.
    pub size: u32,
    pub position: PacketPosition,
    /// Extender payload: the pending value on an `immext`, the merged one elsewhere.
    pub extension: Option<u32>,
    pub duplex: Option<DuplexHalf>,
    #[serde(skip)]
    pub syntax: &'static str,
}

impl DecodedInstruction {
    pub fn invalid(addr: u32, size: u32) -> Self {
        Self {
            addr,
            opcode: Opcode::Invalid,
            operands: Vec::new(),
            size,
            position: PacketPosition::empty(),
            extension: None,
            duplex: None,
            syntax: "invalid",
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.opcode.is_invalid()
    }

    pub fn is_extender(&self) -> bool {
        self.opcode.is_extender()
    }

    pub fn is_first(&self) -> bool {
        self.position.contains(PacketPosition::FIRST)
    }

    pub fn is_last(&self) -> bool {
        self.position.contains(PacketPosition::LAST)
    }
}

/// What one packet slot (one 32-bit word) decodes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    Single(DecodedInstruction),
    /// Low half first.
    Duplex {
        low: DecodedInstruction,
        high: DecodedInstruction,
    },
}

impl Slot {
    pub fn iter(&self) -> impl Iterator<Item = &DecodedInstruction> {
        let (first, second) = match self {
            Slot::Single(insn) => (insn, None),
            Slot::Duplex { low, high } => (low, Some(high)),
        };
        std::iter::once(first).chain(second)
    }

    pub fn first_mut(&mut self) -> &mut DecodedInstruction {
        match self {
            Slot::Single(insn) => insn,
            Slot::Duplex { low, .. } => low,
        }
    }

    pub fn last_mut(&mut self) -> &mut DecodedInstruction {
        match self {
            Slot::Single(insn) => insn,
            Slot::Duplex { high, .. } => high,
        }
    }

    pub fn last(&self) -> &DecodedInstruction {
        match self {
            Slot::Single(insn) => insn,
            Slot::Duplex { high, .. } => high,
        }
    }

    pub fn is_extender(&self) -> bool {
        matches!(self, Slot::Single(insn) if insn.is_extender())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDecode {
    pub slot: Slot,
    /// The context's extension was merged into an operand.
    pub extension_used: bool,
}

/// Decodes one word in isolation; packet bookkeeping lives in the caller.
pub trait Decoder {
    fn decode(&self, word: InstructionWord, ctx: &ExtractContext) -> WordDecode;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HexagonDecoder;

impl HexagonDecoder {
    pub fn new() -> Self {
        Self
    }

    fn instruction(
        enc: &'static Encoding,
        bits: u32,
        addr: u32,
        size: u32,
        ctx: &ExtractContext,
    ) -> (DecodedInstruction, bool) {
        let ex = extract(enc, bits, ctx);
        let extension = if enc.opcode.is_extender() {
            ex.operands.first().and_then(Operand::as_imm).map(|imm| imm.value)
        } else if ex.extension_used {
            ctx.extension
        } else {
            None
        };
        let insn = DecodedInstruction {
            addr,
            opcode: enc.opcode,
            operands: ex.operands,
            size,
            position: PacketPosition::empty(),
            extension,
            duplex: None,
            syntax: enc.syntax,
        };
        (insn, ex.extension_used)
    }

    fn sub_instruction(
        sub: &SubWord,
        half: DuplexHalf,
        addr: u32,
        ctx: &ExtractContext,
    ) -> (DecodedInstruction, bool) {
        let (mut insn, used) = match sub.encoding {
            Some(enc) => Self::instruction(enc, sub.bits, addr, 2, ctx),
            None => (DecodedInstruction::invalid(addr, 2), false),
        };
        insn.duplex = Some(half);
        (insn, used)
    }
}

impl Decoder for HexagonDecoder {
    fn decode(&self, word: InstructionWord, ctx: &ExtractContext) -> WordDecode {
        tracing::trace!("decode {:#010x} at {:#x}", word.word, word.addr);
        match classify(word.word) {
            Match::Normal(enc) | Match::Extender(enc) => {
                let (insn, extension_used) = Self::instruction(enc, word.word, word.addr, 4, ctx);
                WordDecode { slot: Slot::Single(insn), extension_used }
            }
            Match::Duplex { .. } => {
                let d = split(word.word);
                // an extender ahead of a duplex belongs to the slot 1 (high) half
                let low_ctx = ExtractContext { extension: None, ..*ctx };
                let (low, _) = Self::sub_instruction(&d.low, DuplexHalf::Low, word.addr, &low_ctx);
                let (high, extension_used) =
                    Self::sub_instruction(&d.high, DuplexHalf::High, word.addr.wrapping_add(2), ctx);
                WordDecode { slot: Slot::Duplex { low, high }, extension_used }
            }
            Match::Invalid => WordDecode {
                slot: Slot::Single(DecodedInstruction::invalid(word.addr, 4)),
                extension_used: false,
            },
        }
    }
}
