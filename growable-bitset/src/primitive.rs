//! 32-bit word operations the bitset is built from.
//!
//! Freely adapted from Sean Eron Anderson's public-domain "Bit Twiddling Hacks".

use crate::Error;

/// Number of set bits in `word`, clearing the lowest one per iteration.
pub const fn count(mut word: u32) -> u32 {
    let mut count = 0;
    while word != 0 {
        word &= word - 1;
        count += 1;
    }
    count
}

/// Index of the highest set bit, found by halving the search window.
///
/// Returns 0 for a zero word, which is indistinguishable from bit 0 being set.
/// Use [`msb`] when `word` may be zero.
pub const fn msb_unchecked(mut word: u32) -> u32 {
    let mut r = ((word >> 16 != 0) as u32) << 4;
    word >>= r;
    let mut s = ((word >> 8 != 0) as u32) << 3;
    word >>= s;
    r |= s;
    s = ((word >> 4 != 0) as u32) << 2;
    word >>= s;
    r |= s;
    s = ((word >> 2 != 0) as u32) << 1;
    word >>= s;
    r |= s;
    r | (word >> 1)
}

pub fn msb(word: u32) -> Result<u32, Error> {
    match word {
        0 => Err(Error::ZeroWord),
        _ => Ok(msb_unchecked(word)),
    }
}

/// Index of the lowest set bit. Returns 0 for a zero word; see [`lsb`].
pub const fn lsb_unchecked(word: u32) -> u32 {
    msb_of_power_of_2(word & word.wrapping_neg())
}

pub fn lsb(word: u32) -> Result<u32, Error> {
    match word {
        0 => Err(Error::ZeroWord),
        _ => Ok(lsb_unchecked(word)),
    }
}

/// Index of the only set bit of `word`.
///
/// The result is meaningless unless `word` is a power of two.
pub const fn msb_of_power_of_2(word: u32) -> u32 {
    let mut r = (word & 0xAAAA_AAAA != 0) as u32;
    r |= ((word & 0xFFFF_0000 != 0) as u32) << 4;
    r |= ((word & 0xFF00_FF00 != 0) as u32) << 3;
    r |= ((word & 0xF0F0_F0F0 != 0) as u32) << 2;
    r |= ((word & 0xCCCC_CCCC != 0) as u32) << 1;
    r
}

pub const fn is_power_of_2(word: u32) -> bool {
    word != 0 && word & (word - 1) == 0
}

/// Reverses the bit order of `word`.
pub const fn reverse(mut word: u32) -> u32 {
    word = word << 16 | word >> 16;
    word = (word & 0x00FF_00FF) << 8 | (word & 0xFF00_FF00) >> 8;
    word = (word & 0x0F0F_0F0F) << 4 | (word & 0xF0F0_F0F0) >> 4;
    word = (word & 0x3333_3333) << 2 | (word & 0xCCCC_CCCC) >> 2;
    (word & 0x5555_5555) << 1 | (word & 0xAAAA_AAAA) >> 1
}

/// Morton code of the low 16 bits of `x` and `y`.
///
/// Bits of `x` land on even positions, bits of `y` on odd positions.
pub const fn interleave(x: u32, y: u32) -> u32 {
    spread(x) | spread(y) << 1
}

const fn spread(mut v: u32) -> u32 {
    v &= 0x0000_FFFF;
    v = (v | v << 8) & 0x00FF_00FF;
    v = (v | v << 4) & 0x0F0F_0F0F;
    v = (v | v << 2) & 0x3333_3333;
    (v | v << 1) & 0x5555_5555
}

/// Renders `word` as `0b`-prefixed binary, from its highest set bit down.
///
/// At least `min_width` digits are shown (at most 32), and never fewer than one.
pub fn to_binary_string(word: u32, min_width: u32) -> String {
    let width = (u32::BITS - word.leading_zeros())
        .max(min_width.min(u32::BITS))
        .max(1) as usize;
    format!("0b{word:0width$b}")
}
