use thiserror::Error;

use crate::header::CAR_HEADER_LEN;

#[derive(Debug, Error)]
pub enum Error {
    /// Image length is not a power of two in the 8 KiB..=1 MiB range.
    #[error("input size of {len} is not appropriate")]
    Size { len: usize },

    /// Size passed validation but has no cartridge type entry.
    #[error("unable to determine type for size {len}")]
    Classification { len: usize },

    /// Auto fixup found banks whose detection area looks like real data.
    #[error("cannot reliably fixup/patch ROM ({} unsafe bank(s))", .banks.len())]
    FixupSafety { banks: Vec<usize> },

    #[error("invalid rcfix '{0}' (expected auto, never or always)")]
    InvalidFixupMode(String),

    /// Container buffer is shorter than the 16-byte header.
    #[error("header expected {} bytes, got {actual}", CAR_HEADER_LEN)]
    TooShort { actual: usize },

    /// Magic tag ("CART") is missing.
    #[error("missing CART magic bytes")]
    InvalidMagic,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
