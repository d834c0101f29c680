//! Size validation for raw cartridge images.
//!
//! Cartridge ROMs come in power-of-two sizes between 8 KiB and 1 MiB. Anything
//! else cannot be mapped onto a real bank-switching scheme, so it is rejected
//! before any other step looks at the data.

use crate::error::{Error, Result};

/// Size of one cartridge bank in bytes.
pub const BANK_SIZE: usize = 8 * 1024;

/// Smallest accepted image, in KiB.
pub const MIN_KIB: usize = 8;
/// Largest accepted image, in KiB.
pub const MAX_KIB: usize = 1024;

/// Returns `true` when `len` bytes is a valid cartridge image size.
pub fn is_valid_size(len: usize) -> bool {
    len.is_power_of_two() && (MIN_KIB..=MAX_KIB).contains(&(len >> 10))
}

/// Validates `len` and returns the image size in KiB.
pub fn validate_size(len: usize) -> Result<usize> {
    if !is_valid_size(len) {
        return Err(Error::Size { len });
    }
    Ok(len >> 10)
}
