use chrono::{DateTime, Utc};
use clap::ValueEnum;
use core::fmt;
use ksuid::Ksuid;
use std::io::{self, Write};

/// How each KSUID is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The 27-character text form.
    #[default]
    String,
    /// A multi-line breakdown of every representation and component.
    Inspect,
    /// The embedded timestamp as a UTC date and time.
    Time,
    /// The corrected timestamp as an integer.
    Timestamp,
    /// The 16 payload bytes, written as binary.
    Payload,
    /// The 20-byte binary form, written as binary.
    Raw,
}

/// Writes `id` to `out` in the requested format.
///
/// With `verbose`, the line is prefixed with the KSUID's text form.
pub fn write_id<W: Write>(
    out: &mut W,
    id: &Ksuid,
    format: Format,
    verbose: bool,
) -> io::Result<()> {
    if verbose {
        write!(out, "{id}: ")?;
    }
    match format {
        Format::String => writeln!(out, "{id}"),
        Format::Inspect => write_inspect(out, id),
        Format::Time => writeln!(out, "{}", Time(id)),
        Format::Timestamp => writeln!(out, "{}", id.timestamp()),
        Format::Payload => out.write_all(&id.payload()),
        Format::Raw => out.write_all(id.as_bytes()),
    }
}

fn write_inspect<W: Write>(out: &mut W, id: &Ksuid) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "REPRESENTATION:")?;
    writeln!(out)?;
    writeln!(out, "  String: {id}")?;
    writeln!(out, "     Raw: {}", UpperHex(id.as_bytes()))?;
    writeln!(out)?;
    writeln!(out, "COMPONENTS:")?;
    writeln!(out)?;
    writeln!(out, "       Time: {}", Time(id))?;
    writeln!(out, "  Timestamp: {}", id.timestamp())?;
    writeln!(out, "    Payload: {}", UpperHex(&id.payload()))?;
    writeln!(out)
}

struct Time<'a>(&'a Ksuid);

impl fmt::Display for Time<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let datetime = DateTime::<Utc>::from(self.0.datetime());
        write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S %Z"))
    }
}

struct UpperHex<'a>(&'a [u8]);

impl fmt::Display for UpperHex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{b:02X}"))
    }
}
