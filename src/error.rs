//!Errors produced at the boundaries of the hasher.
//!
//!Hashing itself never fails, only seed derivation, format parsing and hasher construction do.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
///Error type of this crate.
pub enum Error {
    ///Seed material element does not fit into a byte.
    #[error("seed element at index {index} does not fit into a byte")]
    SeedElementOutOfRange {
        ///Position of offending element.
        index: usize,
    },
    ///Seed string contains character other than ASCII decimal digit.
    #[error("seed character {found:?} at index {index} is not a decimal digit")]
    SeedNotDigit {
        ///Position of offending character.
        index: usize,
        ///Offending character.
        found: char,
    },
    ///Digest format name is neither `raw`, `hex` nor `bigint`.
    #[error("unknown digest format, expected one of: raw, hex, bigint")]
    UnknownFormat,
    ///Transfer window cannot hold single block.
    #[error("transfer window of {0} bytes is smaller than 32 byte block")]
    WindowTooSmall(usize),
}
