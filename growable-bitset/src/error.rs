use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value is negative or does not fit in a `u32`.
    #[error("invalid element {0}: expected an integer in 0..=4294967295")]
    InvalidArgument(String),
    /// `msb`/`lsb` of a word with no set bits.
    #[error("word has no set bits")]
    ZeroWord,
}
