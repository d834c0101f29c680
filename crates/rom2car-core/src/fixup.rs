//! Right-cartridge detection fixup.
//!
//! On the 400/800 "OS A" a zero at `$9FFC` means "right cartridge present" and
//! the OS tries to boot it, which usually hangs. Every bank except the last one
//! (the left cartridge, mapped at `$A000`) can end up at `$8000`, so the byte at
//! local offset `0x1FFC` of those banks is forced to `0xFF` when it is zero.

use std::ops::RangeInclusive;

use tracing::{debug, warn};

use crate::config::FixupMode;
use crate::error::{Error, Result};
use crate::image::BANK_SIZE;

/// Bank-local offset of the right-cartridge detection byte.
pub const DETECT_OFFSET: usize = 0x1FFC;

/// Bank-local window inspected in [`FixupMode::Auto`] before patching.
pub const SAFETY_WINDOW: RangeInclusive<usize> = 0x1FF0..=0x1FFF;

/// Value written over a zero detection byte.
pub const PATCH_VALUE: u8 = 0xFF;

/// Outcome of one fixup pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixupReport {
    /// Absolute offsets that were changed from `0x00` to [`PATCH_VALUE`].
    pub patched: Vec<usize>,
    /// Absolute bank offsets whose safety window contained non-zero bytes.
    pub unsafe_banks: Vec<usize>,
}

impl FixupReport {
    pub fn is_safe(&self) -> bool {
        self.unsafe_banks.is_empty()
    }
}

/// Scans every bank but the last and patches zero detection bytes in place.
///
/// Flagged banks are still patched; the caller decides whether the report is
/// acceptable. [`FixupMode::Never`] returns an empty report without scanning.
pub fn scan_and_patch(image: &mut [u8], mode: FixupMode) -> FixupReport {
    let mut report = FixupReport::default();
    if mode == FixupMode::Never {
        return report;
    }

    let end = image.len().saturating_sub(BANK_SIZE);
    for bank in (0..end).step_by(BANK_SIZE) {
        let detect = bank + DETECT_OFFSET;
        if image[detect] != 0 {
            continue;
        }

        if mode == FixupMode::Auto {
            let window = (bank + SAFETY_WINDOW.start())..=(bank + SAFETY_WINDOW.end());
            let non_zero = image[window].iter().filter(|&&b| b != 0).count();
            if non_zero > 0 {
                warn!("rcfix auto; saw {non_zero} non-zero byte(s) near {detect:#07x}");
                report.unsafe_banks.push(bank);
            }
        }

        image[detect] = PATCH_VALUE;
        report.patched.push(detect);
        debug!("unzeroed {detect:#07x}");
    }

    report
}

/// Runs [`scan_and_patch`] and turns flagged banks into [`Error::FixupSafety`].
pub fn apply(image: &mut [u8], mode: FixupMode) -> Result<FixupReport> {
    let report = scan_and_patch(image, mode);
    if !report.is_safe() {
        return Err(Error::FixupSafety {
            banks: report.unsafe_banks,
        });
    }
    Ok(report)
}
