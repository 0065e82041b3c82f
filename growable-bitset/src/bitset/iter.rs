use core::iter::{Enumerate, FusedIterator};
use core::slice;

use bit_iter::BitIter;

use super::Bitset;

/// Ascending iterator over the elements of a [`Bitset`].
#[derive(Clone)]
pub struct Iter<'a> {
    words: Enumerate<slice::Iter<'a, u32>>,
    base: u32,
    bits: BitIter<u32>,
}

impl<'a> Iter<'a> {
    fn new(words: &'a [u32]) -> Self {
        Self {
            words: words.iter().enumerate(),
            base: 0,
            bits: BitIter::from(0u32),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        loop {
            if let Some(j) = self.bits.next() {
                return Some(self.base | j as u32);
            }
            let (i, &word) = self.words.next()?;
            self.base = (i as u32) << 5;
            self.bits = BitIter::from(word);
        }
    }
}

impl FusedIterator for Iter<'_> {}

impl Bitset {
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.words)
    }

    /// Calls `f` on every element in ascending order.
    pub fn each(&self, f: impl FnMut(u32)) {
        self.iter().for_each(f)
    }

    /// Applies `f(element, rank)` to every element in ascending order.
    pub fn map<T>(&self, mut f: impl FnMut(u32, usize) -> T) -> Vec<T> {
        self.iter()
            .enumerate()
            .map(|(rank, n)| f(n, rank))
            .collect()
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.map(|n, _| n)
    }
}

impl<'a> IntoIterator for &'a Bitset {
    type Item = u32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<u32> for Bitset {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl Extend<u32> for Bitset {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        iter.into_iter().for_each(|n| {
            self.put(n);
        });
    }
}

impl<'a> Extend<&'a u32> for Bitset {
    fn extend<I: IntoIterator<Item = &'a u32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
