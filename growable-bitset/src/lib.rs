//! A growable set of non-negative integers, packed into 32-bit words.
//!
//! Word `i`, bit `j` holds membership of `32 * i + j`. The word sequence grows
//! on demand and every index past its end reads as clear.
//!
//! A [`Bitset`] is not internally synchronized; wrap it with external locking
//! for multi-threaded mutation.

pub mod bitset;
mod error;
pub mod primitive;

pub use bitset::{difference, intersection, union, Bitset, Iter, MIN_WORDS, WORD_BITS};
pub use error::Error;
