//! CLI tool to list the MLCC price book sorted by one field.
//!
//! Usage:
//!   pricebook                 sort by brand name
//!   pricebook -p              sort by shelf price
//!   pricebook --source FILE   read a local copy instead of the published URL

use clap::{Args, Parser};
use pricebook::{Config, DEFAULT_SOURCE_URL, MalformedPolicy, SortField, run};
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

/// List the Michigan liquor price book with price per mL and per mL of alcohol.
#[derive(Parser)]
#[command(name = "pricebook")]
struct Cli {
    #[command(flatten)]
    sort: SortFlags,

    /// URL or path of the price book
    #[arg(long, env = "PRICEBOOK_SOURCE", default_value = DEFAULT_SOURCE_URL)]
    source: String,

    /// Stop at the first malformed line instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Show source, sort field, and record counts on stderr
    #[arg(long)]
    verbose: bool,
}

#[derive(Args)]
#[group(multiple = false)]
#[command(next_help_heading = "Sorting methods")]
struct SortFlags {
    /// Sort by price (ascending)
    #[arg(short = 'p', long)]
    price: bool,

    /// Sort by proof (ascending)
    #[arg(short = 'P', long)]
    proof: bool,

    /// Sort by volume (ascending)
    #[arg(short = 'v', long)]
    volume: bool,

    /// Sort by type
    #[arg(short = 't', long = "type")]
    kind: bool,

    /// Sort by name (default)
    #[arg(short = 'n', long)]
    name: bool,

    /// Sort by price/volume (ascending)
    #[arg(short = 'V', long)]
    price_per_volume: bool,

    /// Sort by price/quantity of alcohol (ascending)
    #[arg(short = 'a', long)]
    price_per_alcohol: bool,

    /// Sort by field name
    #[arg(long, value_name = "NAME", value_parser = SortField::from_name)]
    sort: Option<SortField>,
}

impl SortFlags {
    fn selected(&self) -> SortField {
        if let Some(field) = self.sort {
            return field;
        }
        let flags = [
            (self.price, SortField::Price),
            (self.proof, SortField::Proof),
            (self.volume, SortField::Volume),
            (self.kind, SortField::Type),
            (self.name, SortField::Name),
            (self.price_per_volume, SortField::PricePerVolume),
            (self.price_per_alcohol, SortField::PricePerAlcohol),
        ];
        flags
            .into_iter()
            .find_map(|(set, field)| set.then_some(field))
            .unwrap_or_default()
    }
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            source: self.source.clone(),
            sort: self.sort.selected(),
            policy: if self.strict {
                MalformedPolicy::Abort
            } else {
                MalformedPolicy::Skip
            },
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "pricebook=debug"
    } else {
        "pricebook=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.config();

    if cli.verbose {
        eprintln!("Source:  {}", config.source);
        eprintln!("Sort:    {}", config.sort.name());
    }

    let output = match run(&config) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    for line in &output.lines {
        if let Err(e) = writeln!(stdout, "{line}") {
            if e.kind() == io::ErrorKind::BrokenPipe {
                break;
            }
            eprintln!("Error writing output: {e}");
            process::exit(1);
        }
    }

    if !output.skipped.is_empty() {
        eprintln!("Skipped {} malformed line(s)", output.skipped.len());
    }
    if cli.verbose {
        eprintln!("Records: {}", output.lines.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let mut argv = vec!["pricebook", "--source", "webprbk.txt"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)
    }

    #[test]
    fn test_default_sort_is_name() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.config().sort, SortField::Name);
        assert_eq!(cli.config().policy, MalformedPolicy::Skip);
    }

    #[test]
    fn test_short_flags() {
        let cases = [
            ("-p", SortField::Price),
            ("-P", SortField::Proof),
            ("-v", SortField::Volume),
            ("-t", SortField::Type),
            ("-n", SortField::Name),
            ("-V", SortField::PricePerVolume),
            ("-a", SortField::PricePerAlcohol),
        ];
        for (flag, expected) in cases {
            assert_eq!(parse(&[flag]).unwrap().config().sort, expected, "{flag}");
        }
    }

    #[test]
    fn test_long_flags() {
        let cli = parse(&["--price-per-alcohol"]).unwrap();
        assert_eq!(cli.config().sort, SortField::PricePerAlcohol);
        let cli = parse(&["--type"]).unwrap();
        assert_eq!(cli.config().sort, SortField::Type);
        let cli = parse(&["--sort", "price-per-volume"]).unwrap();
        assert_eq!(cli.config().sort, SortField::PricePerVolume);
    }

    #[test]
    fn test_flags_are_mutually_exclusive() {
        assert!(parse(&["-p", "-v"]).is_err());
        assert!(parse(&["--sort", "price", "-n"]).is_err());
    }

    #[test]
    fn test_unknown_sort_name_rejected() {
        let err = parse(&["--sort", "color"]).err().unwrap();
        assert!(err.to_string().contains("unknown sort field"));
    }

    #[test]
    fn test_strict_sets_abort_policy() {
        let cli = parse(&["--strict"]).unwrap();
        assert_eq!(cli.config().policy, MalformedPolicy::Abort);
        assert_eq!(cli.config().source, "webprbk.txt");
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
