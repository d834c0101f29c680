use std::ffi::OsString;
use std::path::{Path, PathBuf};

const ROM_SUFFIX: &str = ".rom";
const CAR_SUFFIX: &str = ".car";

/// Derives the output name from the input: a trailing `.rom` (any case) is
/// replaced by `.car`, anything else gets `.car` appended.
///
/// A path that is nothing but `.rom` has no suffix to strip.
pub fn derive_output(input: &Path) -> PathBuf {
    let stem = input
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|_| input.as_os_str() != ROM_SUFFIX)
        .and_then(|name| {
            let split = name.len().checked_sub(ROM_SUFFIX.len())?;
            let suffix = name.get(split..)?;
            suffix.eq_ignore_ascii_case(ROM_SUFFIX).then(|| &name[..split])
        });
    if let Some(stem) = stem {
        return input.with_file_name(format!("{stem}{CAR_SUFFIX}"));
    }

    let mut name = OsString::from(input.as_os_str());
    name.push(CAR_SUFFIX);
    PathBuf::from(name)
}
