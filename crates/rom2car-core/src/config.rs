use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// How the right-cartridge detection byte is handled.
///
/// The 400/800 "OS A" treats a zero at `$9FFC` as a right cartridge being
/// present, so images destined for that machine need the byte forced non-zero
/// in every bank that can be mapped there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FixupMode {
    /// Patch only when the surrounding bytes look like padding; fail otherwise.
    #[default]
    Auto,
    /// Leave the image untouched.
    Never,
    /// Patch every zero detection byte without checking its surroundings.
    Always,
}

impl FromStr for FixupMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "never" | "no" => Ok(Self::Never),
            "always" | "yes" => Ok(Self::Always),
            _ => Err(Error::InvalidFixupMode(s.to_string())),
        }
    }
}

impl fmt::Display for FixupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FixupMode::Auto => "auto",
            FixupMode::Never => "never",
            FixupMode::Always => "always",
        };
        f.write_str(s)
    }
}

/// Per-run settings consumed by [`crate::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertConfig {
    pub fixup: FixupMode,
}

impl ConvertConfig {
    pub fn new(fixup: FixupMode) -> Self {
        Self { fixup }
    }
}
