//! CAR container header.
//!
//! Every `.car` file starts with a 16 byte header followed directly by the raw
//! ROM image:
//!
//! | Offset | Size | Content                               |
//! |--------|------|---------------------------------------|
//! | 0      | 4    | `"CART"`                              |
//! | 4      | 3    | reserved, zero                        |
//! | 7      | 1    | cartridge type code                   |
//! | 8      | 4    | checksum, big-endian                  |
//! | 12     | 4    | reserved, zero                        |
//!
//! [`CarHeader::to_bytes`] builds that layout and [`CarHeader::parse`] reads
//! it back from an existing container.

use crate::cart_type::CartridgeType;
use crate::error::{Error, Result};

pub const CAR_MAGIC: &[u8; 4] = b"CART";

/// Size of the fixed CAR header in bytes.
pub const CAR_HEADER_LEN: usize = 16;

const TYPE_OFFSET: usize = 7;
const CHECKSUM_OFFSET: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarHeader {
    /// Raw type code from byte 7.
    pub type_code: u8,
    /// Byte sum of the image that follows the header.
    pub checksum: u32,
}

impl CarHeader {
    pub fn new(cart_type: CartridgeType, checksum: u32) -> Self {
        Self {
            type_code: cart_type.code,
            checksum,
        }
    }

    /// Encodes the header; reserved bytes are always zero.
    pub fn to_bytes(&self) -> [u8; CAR_HEADER_LEN] {
        let mut bytes = [0u8; CAR_HEADER_LEN];
        bytes[..4].copy_from_slice(CAR_MAGIC);
        bytes[TYPE_OFFSET] = self.type_code;
        bytes[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 4].copy_from_slice(&self.checksum.to_be_bytes());
        bytes
    }

    /// Parse a CAR header from the start of `bytes`.
    ///
    /// Reserved bytes are not checked.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < CAR_HEADER_LEN {
            return Err(Error::TooShort {
                actual: bytes.len(),
            });
        }

        if &bytes[0..4] != CAR_MAGIC {
            return Err(Error::InvalidMagic);
        }

        let mut checksum = [0u8; 4];
        checksum.copy_from_slice(&bytes[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 4]);

        Ok(Self {
            type_code: bytes[TYPE_OFFSET],
            checksum: u32::from_be_bytes(checksum),
        })
    }

    /// Known cartridge type for [`Self::type_code`], if any.
    pub fn cartridge_type(&self) -> Option<CartridgeType> {
        CartridgeType::from_code(self.type_code)
    }
}
