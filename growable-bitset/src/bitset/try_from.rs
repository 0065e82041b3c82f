use core::fmt::Display;

use num_traits::ToPrimitive;

use crate::Error;

use super::Bitset;

/// Checks that `n` is a valid element, i.e. lies in `0..=u32::MAX`.
pub(crate) fn within_bounds<T: ToPrimitive + Display>(n: &T) -> Result<u32, Error> {
    n.to_u32().ok_or_else(|| Error::InvalidArgument(n.to_string()))
}

impl<T: ToPrimitive + Display> TryFrom<&[T]> for Bitset {
    type Error = Error;

    fn try_from(value: &[T]) -> Result<Self, Self::Error> {
        value.iter().try_fold(Self::empty(), |mut bitset, n| {
            bitset.put(within_bounds(n)?);
            Ok(bitset)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn signed_elements_in_range_build_the_same_set() -> eyre::Result<()> {
        let bitset = Bitset::try_from(&[3i64, 40, 140, 40][..])?;
        assert_eq!(bitset, Bitset::from_elements([3, 40, 140]));
        Ok(())
    }

    #[test]
    fn negative_elements_are_rejected() {
        let bitset = Bitset::try_from(&[1i32, -5, 2][..]);
        assert_eq!(bitset, Err(Error::InvalidArgument("-5".to_string())));
    }

    #[test]
    fn elements_above_u32_max_are_rejected() {
        let too_big = u64::from(u32::MAX) + 1;
        let bitset = Bitset::try_from(&[0u64, too_big][..]);
        assert_eq!(bitset, Err(Error::InvalidArgument(too_big.to_string())));
    }

    #[test]
    fn error_messages_name_the_offending_value() {
        let err = within_bounds(&-1i8).unwrap_err();
        assert_eq!(err.to_string(), "invalid element -1: expected an integer in 0..=4294967295");
    }
}
