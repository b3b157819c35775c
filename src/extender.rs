//! Constant-extender (`immext`) tracking within a packet.
//!
//! An extender carries the upper 26 bits of a 32-bit immediate for the next
//! instruction. Whatever does not get consumed by that instruction is dropped:
//! a second extender, a non-extendable instruction, an invalid word or the
//! end of the packet all discard the pending value.

use crate::bits::gather;

/// Payload bits of an extender word: 27:16 and 13:0.
pub const PAYLOAD_MASK: u32 = 0x0fff_3fff;
pub const PAYLOAD_SHIFT: u32 = 6;

/// Extension value carried by an extender word, shifted into place.
pub fn payload(word: u32) -> u32 {
    gather(word, PAYLOAD_MASK) << PAYLOAD_SHIFT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtenderState {
    #[default]
    Idle,
    Pending {
        value: u32,
        /// Address of the extender word.
        addr: u32,
    },
}

impl ExtenderState {
    /// Record the extender at `addr`; a value still pending is dropped.
    pub fn begin(&mut self, word: u32, addr: u32) {
        if let ExtenderState::Pending { addr: prev, .. } = *self {
            tracing::debug!("extender at {prev:#x} followed by another extender at {addr:#x}; dropped");
        }
        *self = ExtenderState::Pending { value: payload(word), addr };
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ExtenderState::Pending { .. })
    }

    pub fn pending(&self) -> Option<u32> {
        match *self {
            ExtenderState::Pending { value, .. } => Some(value),
            ExtenderState::Idle => None,
        }
    }

    /// Hand the pending value to the next instruction and return to idle.
    pub fn take(&mut self) -> Option<u32> {
        let value = self.pending();
        *self = ExtenderState::Idle;
        value
    }

    /// Report the outcome of offering `value` to the instruction at `addr`.
    pub fn settle(value: Option<u32>, used: bool, addr: u32) {
        if let (Some(value), false) = (value, used) {
            tracing::debug!("extension {value:#x} not used by instruction at {addr:#x}; dropped");
        }
    }

    /// Packet boundary: discard anything still pending.
    pub fn close(&mut self) {
        if let ExtenderState::Pending { value, addr } = *self {
            tracing::debug!("extension {value:#x} from {addr:#x} pending at packet end; dropped");
        }
        *self = ExtenderState::Idle;
    }
}
