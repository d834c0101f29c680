//! Conversion engine for turning raw cartridge ROM dumps into CAR containers.
//!
//! ```no_run
//! use rom2car_core::{ConvertConfig, FixupMode, convert};
//!
//! let rom = std::fs::read("game.rom")?;
//! let car = convert(rom, &ConvertConfig::new(FixupMode::Auto))?;
//! std::fs::write("game.car", car.to_bytes())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cart_type;
pub mod checksum;
pub mod config;
pub mod container;
pub mod error;
pub mod fixup;
pub mod header;
pub mod image;

pub use cart_type::CartridgeType;
pub use config::{ConvertConfig, FixupMode};
pub use container::{Container, convert};
pub use error::{Error, Result};
pub use fixup::FixupReport;
pub use header::{CAR_HEADER_LEN, CarHeader};
