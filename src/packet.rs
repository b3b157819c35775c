//! Grouping decoded words into VLIW packets.

use bitflags::bitflags;
use serde::Serialize;

use crate::decoder::{Decoder, DecodedInstruction, HexagonDecoder, InstructionWord, PacketPosition, Slot};
use crate::extender::ExtenderState;
use crate::extract::ExtractContext;
use crate::matcher::PARSE_LOOP_END;

/// Architectural limit on words per packet.
pub const MAX_SLOTS: usize = 4;

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PacketFlags: u8 {
const ENDLOOP0 = 1 << 0;
const ENDLOOP1 = 1 << 1;
const TRUNCATED = 1 << 2; // closed without an end marker
}
}

impl PacketFlags {
    fn position(self) -> PacketPosition {
        let mut pos = PacketPosition::empty();
        pos.set(PacketPosition::ENDLOOP0, self.contains(PacketFlags::ENDLOOP0));
        pos.set(PacketPosition::ENDLOOP1, self.contains(PacketFlags::ENDLOOP1));
        pos
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Packet {
    pub addr: u32,
    pub slots: Vec<Slot>,
    pub flags: PacketFlags,
}

impl Packet {
    /// Every decoded entry, duplex halves low first.
    pub fn instructions(&self) -> impl Iterator<Item = &DecodedInstruction> {
        self.slots.iter().flat_map(Slot::iter)
    }

    pub fn size(&self) -> u32 {
        self.slots.len() as u32 * 4
    }

    pub fn is_truncated(&self) -> bool {
        self.flags.contains(PacketFlags::TRUNCATED)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblerState {
    Start,
    Continuing,
    Done,
}

/// Result of feeding one word to the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub slot: Slot,
    /// This word closed the packet.
    pub closed: bool,
    pub flags: PacketFlags,
}

/// Word-at-a-time packet state machine.
///
/// Owns the extender state for the packet being built, so it never outlives
/// the packet.
#[derive(Debug)]
pub struct PacketAssembler<D: Decoder = HexagonDecoder> {
    decoder: D,
    state: AssemblerState,
    packet_addr: u32,
    slots: usize,
    flags: PacketFlags,
    extender: ExtenderState,
}

impl Default for PacketAssembler<HexagonDecoder> {
    fn default() -> Self {
        Self::new()
    }
}

impl PacketAssembler<HexagonDecoder> {
    pub fn new() -> Self {
        Self::with_decoder(HexagonDecoder::new())
    }
}

impl<D: Decoder> PacketAssembler<D> {
    pub fn with_decoder(decoder: D) -> Self {
        Self {
            decoder,
            state: AssemblerState::Start,
            packet_addr: 0,
            slots: 0,
            flags: PacketFlags::empty(),
            extender: ExtenderState::Idle,
        }
    }

    pub fn state(&self) -> AssemblerState {
        self.state
    }

    /// Address of the packet currently open (or last closed).
    pub fn packet_addr(&self) -> u32 {
        self.packet_addr
    }

    /// Abandon the open packet; the next word starts a new one.
    pub fn reset(&mut self) {
        self.extender.close();
        self.state = AssemblerState::Start;
        self.slots = 0;
        self.flags = PacketFlags::empty();
    }

    pub fn push(&mut self, word: InstructionWord) -> Step {
        if self.state != AssemblerState::Continuing {
            self.state = AssemblerState::Start;
            self.packet_addr = word.addr;
            self.slots = 0;
            self.flags = PacketFlags::empty();
        }
        let index = self.slots;
        if word.parse_bits() == PARSE_LOOP_END {
            match index {
                0 => self.flags |= PacketFlags::ENDLOOP0,
                1 => self.flags |= PacketFlags::ENDLOOP1,
                _ => {}
            }
        }

        let mut slot = if word.is_extender() {
            self.extender.begin(word.word, word.addr);
            let ctx = ExtractContext { packet_addr: self.packet_addr, extension: None };
            self.decoder.decode(word, &ctx).slot
        } else {
            let extension = self.extender.take();
            let ctx = ExtractContext { packet_addr: self.packet_addr, extension };
            let out = self.decoder.decode(word, &ctx);
            ExtenderState::settle(extension, out.extension_used, word.addr);
            out.slot
        };

        if index == 0 {
            slot.first_mut().position |= PacketPosition::FIRST;
        }
        self.slots += 1;
        let ended = word.is_packet_end();
        let closed = ended || self.slots == MAX_SLOTS;
        if closed {
            if !ended {
                tracing::debug!(
                    "packet at {:#x} has no end marker after {MAX_SLOTS} words; force-closed",
                    self.packet_addr
                );
                self.flags |= PacketFlags::TRUNCATED;
            }
            slot.last_mut().position |= PacketPosition::LAST | self.flags.position();
            self.extender.close();
            self.state = AssemblerState::Done;
        } else {
            self.state = AssemblerState::Continuing;
        }
        Step { slot, closed, flags: self.flags }
    }

    /// End of input: force-close an open packet. Returns its flags if one was open.
    pub fn finish(&mut self) -> Option<PacketFlags> {
        if self.state != AssemblerState::Continuing {
            return None;
        }
        tracing::debug!("input ended inside packet at {:#x}; force-closed", self.packet_addr);
        self.flags |= PacketFlags::TRUNCATED;
        self.extender.close();
        self.state = AssemblerState::Done;
        Some(self.flags)
    }
}

/// Packets decoded from a little-endian byte buffer.
///
/// Trailing bytes shorter than a word are ignored.
pub struct Packets<'a, D: Decoder = HexagonDecoder> {
    bytes: &'a [u8],
    addr: u32,
    assembler: PacketAssembler<D>,
}

impl<'a> Packets<'a> {
    pub fn new(bytes: &'a [u8], base: u32) -> Self {
        Self::with_decoder(bytes, base, HexagonDecoder::new())
    }
}

impl<'a, D: Decoder> Packets<'a, D> {
    pub fn with_decoder(bytes: &'a [u8], base: u32, decoder: D) -> Self {
        Self { bytes, addr: base, assembler: PacketAssembler::with_decoder(decoder) }
    }
}

impl<D: Decoder> Iterator for Packets<'_, D> {
    type Item = Packet;

    fn next(&mut self) -> Option<Packet> {
        let mut slots: Vec<Slot> = Vec::with_capacity(MAX_SLOTS);
        let mut addr = self.addr;
        loop {
            let Some(word) = InstructionWord::from_le_bytes(self.bytes, self.addr) else {
                let flags = self.assembler.finish()?;
                if let Some(last) = slots.last_mut() {
                    last.last_mut().position |= PacketPosition::LAST | flags.position();
                }
                return Some(Packet { addr, slots, flags });
            };
            self.bytes = &self.bytes[4..];
            self.addr = self.addr.wrapping_add(4);
            let step = self.assembler.push(word);
            if slots.is_empty() {
                addr = self.assembler.packet_addr();
            }
            slots.push(step.slot);
            if step.closed {
                return Some(Packet { addr, slots, flags: step.flags });
            }
        }
    }
}
