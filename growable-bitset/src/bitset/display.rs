use core::fmt::Display;

use itertools::Itertools;

use super::Bitset;

impl Display for Bitset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().format(","))
    }
}
