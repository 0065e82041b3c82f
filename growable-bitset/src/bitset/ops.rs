use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

use super::{algebra, Bitset};

impl BitOr for &Bitset {
    type Output = Bitset;

    fn bitor(self, rhs: Self) -> Bitset {
        algebra::union(self, rhs)
    }
}

impl BitAnd for &Bitset {
    type Output = Bitset;

    fn bitand(self, rhs: Self) -> Bitset {
        algebra::intersection(self, rhs)
    }
}

impl Sub for &Bitset {
    type Output = Bitset;

    fn sub(self, rhs: Self) -> Bitset {
        algebra::difference(self, rhs)
    }
}

impl BitOrAssign<&Bitset> for Bitset {
    fn bitor_assign(&mut self, rhs: &Bitset) {
        self.union(rhs);
    }
}

impl BitAndAssign<&Bitset> for Bitset {
    fn bitand_assign(&mut self, rhs: &Bitset) {
        self.intersect(rhs);
    }
}

impl SubAssign<&Bitset> for Bitset {
    fn sub_assign(&mut self, rhs: &Bitset) {
        self.difference(rhs);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn operators_agree_with_the_free_functions() {
        let a = Bitset::from_elements([0, 33, 900]);
        let b = Bitset::from_elements([33, 34]);
        assert_eq!(&a | &b, algebra::union(&a, &b));
        assert_eq!(&a & &b, algebra::intersection(&a, &b));
        assert_eq!(&a - &b, algebra::difference(&a, &b));
    }

    #[test]
    fn assigning_operators_mutate_the_left_hand_side() {
        let b = Bitset::from_elements([33, 34]);
        let mut a = Bitset::from_elements([0, 33, 900]);
        a |= &b;
        assert_eq!(a.to_vec(), vec![0, 33, 34, 900]);
        a -= &b;
        assert_eq!(a.to_vec(), vec![0, 900]);
        a &= &Bitset::singleton(900);
        assert_eq!(a.to_vec(), vec![900]);
    }
}
