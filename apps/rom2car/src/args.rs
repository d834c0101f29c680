use std::path::PathBuf;

use clap::Parser;
use rom2car_core::FixupMode;
use tracing::Level;

/// Convert a '.ROM' cartridge dump into a '.CAR' file for emulators.
///
/// Adds the CAR header (type + checksum) and, unless disabled, patches the
/// right-cartridge detection byte so images boot on "OS A".
#[derive(Parser, Debug)]
#[command(name = "rom2car", author, version, about, long_about = None)]
pub struct Args {
    /// Raw ROM image to convert
    pub input: PathBuf,

    /// Output filename (derived from the input name when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fix 'OS A' right-cartridge detection (auto/never/always)
    #[arg(long, default_value = "auto")]
    pub rcfix: FixupMode,

    /// Show debugging output (implies --verbose)
    #[arg(long)]
    pub debug: bool,

    /// Be verbose
    #[arg(long)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error); overrides --debug/--verbose
    #[arg(long)]
    pub log_level: Option<Level>,
}

impl Args {
    pub fn max_level(&self) -> Level {
        if let Some(level) = self.log_level {
            level
        } else if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rom2car").chain(argv.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn defaults() {
        let args = parse(&["game.rom"]);
        assert_eq!(args.input, PathBuf::from("game.rom"));
        assert_eq!(args.output, None);
        assert_eq!(args.rcfix, FixupMode::Auto);
        assert_eq!(args.max_level(), Level::WARN);
    }

    #[test]
    fn rcfix_accepts_aliases() {
        assert_eq!(parse(&["--rcfix", "NO", "a.rom"]).rcfix, FixupMode::Never);
        assert_eq!(parse(&["--rcfix", "yes", "a.rom"]).rcfix, FixupMode::Always);
        assert!(Args::try_parse_from(["rom2car", "--rcfix", "maybe", "a.rom"]).is_err());
    }

    #[test]
    fn debug_implies_verbose() {
        assert_eq!(parse(&["--debug", "a.rom"]).max_level(), Level::DEBUG);
        assert_eq!(parse(&["--verbose", "a.rom"]).max_level(), Level::INFO);
        assert_eq!(
            parse(&["--debug", "--log-level", "error", "a.rom"]).max_level(),
            Level::ERROR
        );
    }

    #[test]
    fn exactly_one_input() {
        assert!(Args::try_parse_from(["rom2car"]).is_err());
        assert!(Args::try_parse_from(["rom2car", "a.rom", "b.rom"]).is_err());
    }
}
