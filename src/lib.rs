pub mod bits;
pub mod config;
pub mod decoder;
pub mod duplex;
pub mod extender;
pub mod extract;
pub mod isa;
pub mod matcher;
pub mod opcode;
pub mod operand;
pub mod packet;
pub mod regs;
pub mod render;
pub mod session;

pub use config::{ConfigError, ConfigStore, OptionNode, RenderConfig};
pub use decoder::{DecodedInstruction, Decoder, HexagonDecoder, InstructionWord, PacketPosition, Slot};
pub use opcode::Opcode;
pub use packet::{Packet, PacketAssembler, Packets};
pub use session::{disassemble, DisasmError, Disassembly, Session};
