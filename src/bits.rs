//! Bit-group access on instruction words.

use bitvec::prelude::*;
use num_traits::PrimInt;

/// Low `width` bits set, for any primitive integer.
pub fn mask<T: PrimInt>(width: u32) -> T {
    let total = T::zero().count_zeros();
    if width >= total {
        !T::zero()
    } else {
        (T::one() << width as usize) - T::one()
    }
}

/// Extract `width` bits starting at bit `offset` (bit 0 = LSB).
///
/// `offset + width` past bit 32 is a caller bug and panics.
pub fn extract(word: u32, offset: u32, width: u32) -> u32 {
    assert!(
        offset + width <= 32,
        "bit range {offset}+{width} exceeds a 32-bit word"
    );
    if width == 0 {
        return 0;
    }
    let (lo, hi) = (offset as usize, (offset + width) as usize);
    word.view_bits::<Lsb0>()[lo..hi].load_le::<u32>()
}

/// Single bit at `pos`.
pub fn bit(word: u32, pos: u32) -> bool {
    extract(word, pos, 1) != 0
}

/// Concatenate the bits of `word` selected by `field_mask`, most significant first.
///
/// Hexagon scatters immediates across several runs of the word; the runs are
/// packed together in their original order.
pub fn gather(word: u32, field_mask: u32) -> u32 {
    let bits = word.view_bits::<Lsb0>();
    field_mask
        .view_bits::<Lsb0>()
        .iter_ones()
        .rev()
        .fold(0u32, |acc, pos| (acc << 1) | bits[pos] as u32)
}

/// Sign-extend the low `width` bits of `value` to 32 bits.
pub fn sign_extend(value: u32, width: u32) -> u32 {
    match width {
        0 => 0,
        w if w >= 32 => value,
        _ => {
            let s = 32 - width;
            ((value << s) as i32 >> s) as u32
        }
    }
}
