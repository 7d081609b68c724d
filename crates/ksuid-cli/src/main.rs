#![doc = include_str!("../README.md")]

mod config;
mod format;
mod telemetry;

use clap::Parser;
use config::{CliArgs, Config};
use format::write_id;
use std::io::{self, BufWriter, Write};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_telemetry()?;
    tracing::debug!(?config, "resolved configuration");

    let mut out = BufWriter::new(io::stdout().lock());
    let written = write_ids(&mut out, config)?;

    tracing::debug!(count = written, "wrote KSUIDs");
    Ok(())
}

/// Writes each KSUID of the run to `out` as soon as it is produced.
fn write_ids<W: Write>(out: &mut W, config: Config) -> anyhow::Result<usize> {
    let mut written = 0;
    for id in config.source.ids() {
        write_id(out, &id?, config.format, config.verbose)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
