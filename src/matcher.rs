//! First-match lookup of a word against the ordered encoding tables.

use crate::bits::extract;
use crate::isa::{normal::NORMAL, Encoding};

/// Parse field value `00`: the word is a duplex and ends its packet.
pub const PARSE_DUPLEX: u32 = 0b00;
/// Parse field value `10`: not last; marks a hardware-loop end in slot 0 or 1.
pub const PARSE_LOOP_END: u32 = 0b10;
/// Parse field value `11`: last word of the packet.
pub const PARSE_END: u32 = 0b11;

pub fn parse_bits(word: u32) -> u32 {
    extract(word, 14, 2)
}

pub fn iclass(word: u32) -> u32 {
    extract(word, 28, 4)
}

/// Duplex class: ICLASS bits 31:29 on top of bit 13.
pub fn duplex_class(word: u32) -> u32 {
    (extract(word, 29, 3) << 1) | extract(word, 13, 1)
}

/// What a 32-bit word is, before operands are looked at.
#[derive(Debug, Clone, Copy)]
pub enum Match {
    Normal(&'static Encoding),
    Extender(&'static Encoding),
    Duplex { class: u32 },
    Invalid,
}

impl Match {
    pub fn encoding(&self) -> Option<&'static Encoding> {
        match *self {
            Match::Normal(enc) | Match::Extender(enc) => Some(enc),
            _ => None,
        }
    }
}

/// First entry of `table` whose fixed bits agree with `bits`.
pub fn find(table: &'static [Encoding], bits: u32) -> Option<&'static Encoding> {
    table.iter().find(|enc| enc.matches(bits))
}

pub fn classify(word: u32) -> Match {
    if word == 0 {
        return Match::Invalid;
    }
    if parse_bits(word) == PARSE_DUPLEX {
        return Match::Duplex { class: duplex_class(word) };
    }
    match find(NORMAL, word) {
        Some(enc) if enc.opcode.is_extender() => Match::Extender(enc),
        Some(enc) => Match::Normal(enc),
        None => Match::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::Opcode;

    #[test]
    fn classes() {
        assert!(matches!(classify(0), Match::Invalid));
        assert!(matches!(classify(0x0000_4000), Match::Extender(_)));
        assert!(matches!(classify(0x7f00_c000), Match::Normal(e) if e.opcode == Opcode::A2Nop));
        // parse bits 00, ICLASS 0b111, bit 13 set
        assert!(matches!(classify(0xe000_2000), Match::Duplex { class: 0xf }));
        assert!(matches!(classify(0x0000_0001), Match::Duplex { class: 0 }));
    }

    #[test]
    fn unmatched_word_is_invalid() {
        // ICLASS 2 has no entries
        assert!(matches!(classify(0x2000_c000), Match::Invalid));
    }
}
