use crate::format::Format;
use anyhow::bail;
use clap::Parser;
use ksuid::{Ksuid, Sequence};

/// Command-line arguments for the `ksuid` binary.
///
/// Every option can also be set through the environment variable named in its
/// help text, or through a `.env` file in the working directory.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ksuid",
    version,
    about = "Generate and inspect K-Sortable Unique Identifiers"
)]
pub struct CliArgs {
    /// Number of KSUIDs to generate when none are given.
    ///
    /// Environment variable: `KSUID_COUNT`
    #[arg(short = 'n', long, env = "KSUID_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Output format.
    ///
    /// Environment variable: `KSUID_FORMAT`
    #[arg(short, long, env = "KSUID_FORMAT", value_enum, default_value_t = Format::String)]
    pub format: Format,

    /// Derive every generated KSUID from a single seed so they sort in output
    /// order.
    #[arg(short, long, default_value_t = false)]
    pub sequence: bool,

    /// Prefix each output line with the KSUID it describes.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// KSUIDs to inspect instead of generating new ones.
    #[arg(value_name = "KSUID")]
    pub ids: Vec<Ksuid>,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub format: Format,
    pub verbose: bool,
}

/// Where the KSUIDs for a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Given(Vec<Ksuid>),
    Random { count: usize },
    Sequence { count: usize },
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("KSUID_COUNT must be greater than 0");
        }

        let source = if !args.ids.is_empty() {
            if args.sequence {
                bail!("--sequence cannot be combined with explicit KSUIDs");
            }
            Source::Given(args.ids)
        } else if args.sequence {
            if args.count > Sequence::MAX_LEN as usize {
                bail!(
                    "KSUID_COUNT ({}) exceeds the identifiers one sequence can produce (max = {})",
                    args.count,
                    Sequence::MAX_LEN
                );
            }
            Source::Sequence { count: args.count }
        } else {
            Source::Random { count: args.count }
        };

        Ok(Self {
            source,
            format: args.format,
            verbose: args.verbose,
        })
    }
}

impl Source {
    /// Yields the KSUIDs for this run, generating each one on demand.
    ///
    /// A failing entropy source surfaces as an `Err` item.
    pub fn ids(self) -> Box<dyn Iterator<Item = ksuid::Result<Ksuid>>> {
        match self {
            Self::Given(ids) => Box::new(ids.into_iter().map(Ok)),
            Self::Random { count } => Box::new((0..count).map(|_| Ksuid::try_new())),
            Self::Sequence { count } => match Sequence::try_new() {
                Ok(seq) => Box::new(seq.take(count).map(Ok)),
                Err(err) => Box::new(core::iter::once(Err(err))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &str = "0ujtsYcgvSTl8PAuAdqWYSMnLOv";

    fn parse(args: &[&str]) -> Result<Config, anyhow::Error> {
        let args = CliArgs::try_parse_from(core::iter::once("ksuid").chain(args.iter().copied()))?;
        Config::try_from(args)
    }

    #[test]
    fn defaults_to_one_random_string() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.source, Source::Random { count: 1 });
        assert_eq!(config.format, Format::String);
        assert!(!config.verbose);
    }

    #[test]
    fn parses_flags() {
        let config = parse(&["-n", "3", "-f", "inspect", "-v"]).unwrap();
        assert_eq!(config.source, Source::Random { count: 3 });
        assert_eq!(config.format, Format::Inspect);
        assert!(config.verbose);

        let config = parse(&["--count", "5", "--sequence", "--format", "raw"]).unwrap();
        assert_eq!(config.source, Source::Sequence { count: 5 });
        assert_eq!(config.format, Format::Raw);
    }

    #[test]
    fn positional_ids_bind_through_from_str() {
        let config = parse(&[KNOWN, "aWgEPTl1tmebfsQzFP4bxwgy80V"]).unwrap();
        assert_eq!(
            config.source,
            Source::Given(vec![Ksuid::parse(KNOWN).unwrap(), Ksuid::MAX])
        );
    }

    #[test]
    fn rejects_malformed_ids() {
        let err = parse(&["not-a-ksuid"]).unwrap_err();
        assert!(err.to_string().contains("invalid size"), "{err}");

        let err = parse(&["aWgEPTl1tmebfsQzFP4bxwgy80W"]).unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum"), "{err}");
    }

    #[test]
    fn rejects_zero_count() {
        let err = parse(&["-n", "0"]).unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn rejects_oversized_sequence() {
        assert!(parse(&["-s", "-n", "65536"]).is_ok());
        let err = parse(&["-s", "-n", "65537"]).unwrap_err();
        assert!(err.to_string().contains("max = 65536"), "{err}");
    }

    #[test]
    fn rejects_sequence_with_ids() {
        assert!(parse(&["-s", KNOWN]).is_err());
    }

    #[test]
    fn yields_ids_from_each_source() {
        let given = vec![Ksuid::MAX, Ksuid::NIL];
        let ids: ksuid::Result<Vec<_>> = Source::Given(given.clone()).ids().collect();
        assert_eq!(ids.unwrap(), given);

        let random: Vec<_> = Source::Random { count: 4 }
            .ids()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(random.len(), 4);
        assert!(random.iter().all(|id| !id.is_nil()));

        let seq: Vec<_> = Source::Sequence { count: 100 }
            .ids()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(seq.len(), 100);
        assert!(seq.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn generates_lazily() {
        let mut ids = Source::Random { count: usize::MAX }.ids();
        for _ in 0..3 {
            assert!(ids.next().unwrap().is_ok());
        }
        assert_eq!(Source::Sequence { count: 65_536 }.ids().take(2).count(), 2);
    }
}
