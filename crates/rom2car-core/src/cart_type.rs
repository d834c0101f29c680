//! Cartridge type classification.
//!
//! Type codes follow the numbering used by the atari800 emulator's `cart.txt`.
//! Only the plain "standard" and XEGS bank-switching layouts are produced, one
//! per accepted image size.

use core::fmt;

use phf::phf_map;

use crate::error::{Error, Result};

/// Cartridge memory-mapping scheme stored in byte 7 of the container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CartridgeType {
    /// Numeric type code written into the header.
    pub code: u8,
    /// Human readable name of the layout.
    pub name: &'static str,
}

static TYPES_BY_KIB: phf::Map<u32, CartridgeType> = phf_map! {
    8u32 => CartridgeType { code: 1, name: "Standard 8 KB" },
    16u32 => CartridgeType { code: 2, name: "Standard 16 KB" },
    32u32 => CartridgeType { code: 12, name: "XEGS 32 KB" },
    64u32 => CartridgeType { code: 13, name: "XEGS (banks 0-7) 64 KB" },
    128u32 => CartridgeType { code: 14, name: "XEGS (banks 0-15) 128 KB" },
    256u32 => CartridgeType { code: 23, name: "XEGS (banks 0-31) 256 KB" },
    512u32 => CartridgeType { code: 24, name: "XEGS (banks 0-63) 512 KB" },
    1024u32 => CartridgeType { code: 25, name: "XEGS (banks 0-127) 1 MB" },
};

impl CartridgeType {
    /// Looks up the type for an image of `kib` kilobytes.
    pub fn from_kib(kib: usize) -> Result<Self> {
        u32::try_from(kib)
            .ok()
            .and_then(|key| TYPES_BY_KIB.get(&key))
            .copied()
            .ok_or(Error::Classification {
                len: kib.saturating_mul(1024),
            })
    }

    /// Reverse lookup used when decoding an existing container.
    pub fn from_code(code: u8) -> Option<Self> {
        TYPES_BY_KIB.values().find(|ty| ty.code == code).copied()
    }
}

impl fmt::Display for CartridgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (type {})", self.name, self.code)
    }
}
