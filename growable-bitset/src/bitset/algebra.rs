use tracing::trace;

use super::Bitset;

impl Bitset {
    /// `self := self ∪ that`. Words of `that` past the end of `self` are copied.
    pub fn union(&mut self, that: &Self) -> &mut Self {
        let m = self.words.len();
        if m < that.words.len() {
            trace!(from = m, to = that.words.len(), "growing bitset words");
            self.words.extend_from_slice(&that.words[m..]);
        }
        self.words[..m]
            .iter_mut()
            .zip(&that.words)
            .for_each(|(a, b)| *a |= b);
        self
    }

    /// `self := self ∩ that`. Words of `self` past the end of `that` are dropped.
    pub fn intersect(&mut self, that: &Self) -> &mut Self {
        let n = that.words.len();
        if self.words.len() > n {
            trace!(from = self.words.len(), to = n, "truncating bitset words");
            self.words.truncate(n);
        }
        self.words
            .iter_mut()
            .zip(&that.words)
            .for_each(|(a, b)| *a &= b);
        self
    }

    /// `self := self \ that`. The length of `self` never changes.
    pub fn difference(&mut self, that: &Self) -> &mut Self {
        self.words
            .iter_mut()
            .zip(&that.words)
            .for_each(|(a, b)| *a &= !b);
        self
    }

    /// Whether `that ⊆ self`.
    pub fn has_subset(&self, that: &Self) -> bool {
        let (m, n) = (self.words.len(), that.words.len());
        let overlap = m.min(n);
        let covered = self.words[..overlap]
            .iter()
            .zip(&that.words[..overlap])
            .all(|(&a, &b)| b & a == b);
        if !covered {
            return false;
        }
        if m >= n {
            return true;
        }
        that.words[overlap..].iter().all(|&b| b == 0)
    }

    pub fn is_subset_of(&self, that: &Self) -> bool {
        that.has_subset(self)
    }
}

pub fn union(a: &Bitset, b: &Bitset) -> Bitset {
    let mut result = a.clone();
    result.union(b);
    result
}

pub fn intersection(a: &Bitset, b: &Bitset) -> Bitset {
    let mut result = a.clone();
    result.intersect(b);
    result
}

pub fn difference(a: &Bitset, b: &Bitset) -> Bitset {
    let mut result = a.clone();
    result.difference(b);
    result
}
