use core::hash::{Hash, Hasher};

use tracing::trace;

use crate::primitive;

mod algebra;
mod display;
mod iter;
mod ops;
mod try_from;

pub use algebra::{difference, intersection, union};
pub use iter::Iter;

/// Bits per backing word.
pub const WORD_BITS: u32 = u32::BITS;
/// Words held by an empty bitset.
pub const MIN_WORDS: usize = 2;

/// A growable set of `u32`s stored as packed 32-bit words.
///
/// Word `i`, bit `j` is set iff `32 * i + j` is a member. Indices past the end of
/// the word sequence are clear, so trailing zero words never change the set.
#[derive(Clone, Debug)]
pub struct Bitset {
    words: Vec<u32>,
}

const fn word_index(n: u32) -> usize {
    (n >> 5) as usize
}

const fn bit_mask(n: u32) -> u32 {
    1 << (n & (WORD_BITS - 1))
}

impl Bitset {
    pub fn empty() -> Self {
        Self {
            words: vec![0; MIN_WORDS],
        }
    }

    /// An empty bitset holding elements below `bits` without reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        let len = bits.div_ceil(WORD_BITS as usize).max(MIN_WORDS);
        Self {
            words: vec![0; len],
        }
    }

    pub fn singleton(n: u32) -> Self {
        let mut bitset = Self::empty();
        bitset.put(n);
        bitset
    }

    pub fn from_elements(elements: impl IntoIterator<Item = u32>) -> Self {
        let mut bitset = Self::empty();
        elements.into_iter().for_each(|n| {
            bitset.put(n);
        });
        bitset
    }

    /// The elements `0..32` given directly by the bits of `word`.
    pub fn from_word(word: u32) -> Self {
        Self {
            words: vec![word, 0],
        }
    }

    /// Adopts a raw word sequence, padding it to [`MIN_WORDS`].
    pub fn from_words(mut words: Vec<u32>) -> Self {
        if words.len() < MIN_WORDS {
            words.resize(MIN_WORDS, 0);
        }
        Self { words }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// The words up to and including the last nonzero one.
    fn significant_words(&self) -> &[u32] {
        let len = self
            .words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |i| i + 1);
        &self.words[..len]
    }

    fn grow_to(&mut self, len: usize) {
        if self.words.len() < len {
            trace!(from = self.words.len(), to = len, "growing bitset words");
            self.words.resize(len, 0);
        }
    }

    pub fn put(&mut self, n: u32) -> &mut Self {
        let i = word_index(n);
        self.grow_to(i + 1);
        self.words[i] |= bit_mask(n);
        self
    }

    pub fn flip(&mut self, n: u32) -> &mut Self {
        let i = word_index(n);
        self.grow_to(i + 1);
        self.words[i] ^= bit_mask(n);
        self
    }

    /// Clears `n`. Elements past the end of the word sequence are already absent.
    pub fn remove(&mut self, n: u32) -> &mut Self {
        if let Some(word) = self.words.get_mut(word_index(n)) {
            *word &= !bit_mask(n);
        }
        self
    }

    pub fn has(&self, n: u32) -> bool {
        self.words
            .get(word_index(n))
            .is_some_and(|word| word & bit_mask(n) != 0)
    }

    pub fn reset(&mut self) -> &mut Self {
        trace!(len = self.words.len(), "resetting bitset");
        self.words.clear();
        self.words.resize(MIN_WORDS, 0);
        self
    }

    /// Drops trailing zero words, keeping at least [`MIN_WORDS`].
    pub fn trim(&mut self) -> &mut Self {
        let len = self.significant_words().len().max(MIN_WORDS);
        if len < self.words.len() {
            trace!(from = self.words.len(), to = len, "trimming bitset words");
            self.words.truncate(len);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn max(&self) -> Option<u32> {
        self.words
            .iter()
            .enumerate()
            .rev()
            .find(|(_, &w)| w != 0)
            .map(|(i, &w)| (i as u32) << 5 | primitive::msb_unchecked(w))
    }

    pub fn min(&self) -> Option<u32> {
        self.words
            .iter()
            .enumerate()
            .find(|(_, &w)| w != 0)
            .map(|(i, &w)| ((i as u32) << 5) + primitive::lsb_unchecked(w))
    }

    pub fn count(&self) -> usize {
        self.words
            .iter()
            .map(|&w| primitive::count(w) as usize)
            .sum()
    }

    pub fn is_singleton(&self) -> bool {
        let mut count = 0;
        for &w in &self.words {
            count += primitive::count(w);
            if count > 1 {
                return false;
            }
        }
        count == 1
    }
}

impl Default for Bitset {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Bitset {
    fn eq(&self, other: &Self) -> bool {
        self.significant_words() == other.significant_words()
    }
}

impl Eq for Bitset {}

impl Hash for Bitset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}
