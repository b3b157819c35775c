pub mod listing;
pub mod model;

pub use listing::{packet_out, packet_report, packet_text, range_listing, InstructionOut, PacketOut, Report};
pub use model::{load_raw_bin, Image, Segment};
