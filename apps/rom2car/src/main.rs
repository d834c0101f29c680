mod args;
mod output;

use std::fs::{self, File};
use std::io::BufWriter;

use anyhow::{Context, Result};
use clap::Parser;
use rom2car_core::{ConvertConfig, convert};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.max_level())
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| output::derive_output(&args.input));

    let rom = fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    info!("read '{}' size {}", args.input.display(), rom.len());

    // Nothing touches the output path until conversion has fully succeeded.
    let car = convert(rom, &ConvertConfig::new(args.rcfix))?;

    let file = File::create(&output).with_context(|| format!("creating {}", output.display()))?;
    car.write_to(BufWriter::new(file))
        .with_context(|| format!("writing {}", output.display()))?;
    info!("wrote '{}' size {}", output.display(), car.encoded_len());

    Ok(())
}
