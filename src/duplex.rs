//! Splitting a duplex word into its two sub-instructions.

use serde::{Deserialize, Serialize};

use crate::bits::mask;
use crate::isa::{duplex::class_groups, Encoding};
use crate::matcher::{duplex_class, find};

/// Which 13-bit half of a duplex an instruction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplexHalf {
    /// Bits 12:0, slot 0; listed first.
    Low,
    /// Bits 28:16, slot 1.
    High,
}

#[derive(Debug, Clone, Copy)]
pub struct SubWord {
    pub bits: u32,
    /// `None` when the half matches nothing in its group or the class is reserved.
    pub encoding: Option<&'static Encoding>,
}

#[derive(Debug, Clone, Copy)]
pub struct Duplex {
    pub class: u32,
    pub low: SubWord,
    pub high: SubWord,
}

impl Duplex {
    pub fn half(&self, half: DuplexHalf) -> &SubWord {
        match half {
            DuplexHalf::Low => &self.low,
            DuplexHalf::High => &self.high,
        }
    }
}

pub fn split(word: u32) -> Duplex {
    let sub_mask = mask::<u16>(13);
    let low_bits = (word as u16 & sub_mask) as u32;
    let high_bits = ((word >> 16) as u16 & sub_mask) as u32;
    let class = duplex_class(word);
    let (low, high) = match class_groups(class) {
        Some((lo, hi)) => (find(lo.table(), low_bits), find(hi.table(), high_bits)),
        None => {
            tracing::trace!("reserved duplex class in {word:#010x}");
            (None, None)
        }
    };
    Duplex {
        class,
        low: SubWord { bits: low_bits, encoding: low },
        high: SubWord { bits: high_bits, encoding: high },
    }
}
