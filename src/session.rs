//! Disassembly entry point.
//!
//! A [`Session`] owns the option store and the packet context carried between
//! calls. Calls at consecutive addresses continue the current packet; any
//! other address starts a new one.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, ConfigStore, OptionNode, RenderConfig};
use crate::decoder::{DecodedInstruction, InstructionWord, Slot};
use crate::packet::PacketAssembler;
use crate::render::render_line;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisasmError {
    #[error("short buffer at {pc:#010x}: need {need} bytes, got {got}")]
    ShortBuffer { pc: u32, need: usize, got: usize },
    #[error("no disassembler session")]
    NoSession,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Rendered text for one call and how far the caller should advance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disassembly {
    pub text: String,
    pub size: u32,
}

#[derive(Debug)]
pub struct Session {
    config: ConfigStore,
    assembler: PacketAssembler,
    /// Address that continues the open packet.
    next_pc: Option<u32>,
    /// High half of the last duplex, handed out at its own address.
    pending_high: Option<DecodedInstruction>,
}

impl Session {
    pub fn new() -> Result<Self, DisasmError> {
        Ok(Self {
            config: ConfigStore::new()?,
            assembler: PacketAssembler::new(),
            next_pc: None,
            pending_high: None,
        })
    }

    pub fn with_config(cfg: &RenderConfig) -> Result<Self, DisasmError> {
        let session = Self::new()?;
        session.config.apply(cfg)?;
        Ok(session)
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn render_config(&self) -> RenderConfig {
        self.config.snapshot()
    }

    pub fn set_option(&self, name: &str, value: bool) -> Result<(), DisasmError> {
        Ok(self.config.set(name, value)?)
    }

    /// Reconcile an externally held option node with the session's own.
    pub fn update_option(&self, node: Option<&Arc<OptionNode>>) -> Result<(), DisasmError> {
        Ok(self.config.update(node)?)
    }

    /// Decode the slot at `pc` from the start of `buf`.
    ///
    /// A duplex yields both halves; the next call at `pc + 2` returns the high
    /// half on its own.
    pub fn decode(&mut self, buf: &[u8], pc: u32) -> Result<Slot, DisasmError> {
        if let Some(high) = self.pending_high.take() {
            if high.addr == pc {
                if buf.len() < 2 {
                    self.pending_high = Some(high);
                    return Err(DisasmError::ShortBuffer { pc, need: 2, got: buf.len() });
                }
                return Ok(Slot::Single(high));
            }
        }
        let word = InstructionWord::from_le_bytes(buf, pc)
            .ok_or(DisasmError::ShortBuffer { pc, need: 4, got: buf.len() })?;
        if self.next_pc != Some(pc) {
            self.assembler.reset();
        }
        let step = self.assembler.push(word);
        self.next_pc = if step.closed { None } else { Some(pc.wrapping_add(4)) };
        if let Slot::Duplex { high, .. } = &step.slot {
            self.pending_high = Some(high.clone());
        }
        Ok(step.slot)
    }

    /// Decode and render the entry at `pc`.
    pub fn disassemble(&mut self, buf: &[u8], pc: u32) -> Result<Disassembly, DisasmError> {
        let cfg = self.render_config();
        let slot = self.decode(buf, pc)?;
        let insn = match &slot {
            Slot::Single(insn) => insn,
            Slot::Duplex { low, .. } => low,
        };
        Ok(Disassembly { text: render_line(insn, &cfg), size: insn.size })
    }
}

/// Entry point for hosts that may not have set up a session.
pub fn disassemble(session: Option<&mut Session>, buf: &[u8], pc: u32) -> Result<Disassembly, DisasmError> {
    session.ok_or(DisasmError::NoSession)?.disassemble(buf, pc)
}
