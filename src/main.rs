//! wadspline command-line interface.
//!
//! ```sh
//! wadspline random 42            # ABI-encoded test vector on stdout
//! wadspline bulk                 # massive_spline.csv reference table
//! wadspline lookup table.csv 1500000000000000000
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use wadspline::configuration::Configuration;
use wadspline::encoding::abiencoder::to_hex;
use wadspline::encoding::csvtable::{read_segments, write_segments};
use wadspline::fixture::fixturegenerator::FixtureGenerator;
use wadspline::fixture::segmenttable::SegmentTable;
use wadspline::math::fixedpoint::fixedpoint::FixedPoint;

#[derive(Parser)]
#[command(name = "wadspline")]
#[command(about = "Fixed-point natural cubic spline fixture generator")]
#[command(version)]
struct Cli {
    /// JSON file overriding the generation defaults.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random ABI-encoded test vector for the given seed.
    Random {
        /// The random seed.
        seed: u64,
    },
    /// Write the bulk reference table as CSV.
    Bulk {
        /// Output file (overrides the configuration).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Number of segments (overrides the configuration).
        #[arg(short, long)]
        segments: Option<usize>,
        /// Random seed (overrides the configuration).
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the segments of a CSV table that contain a fixed-point x.
    Lookup {
        /// CSV table written by `bulk`.
        table: PathBuf,
        /// Query point as a WAD-scaled integer.
        x: String,
    },
}

fn load_configuration(path: Option<&PathBuf>) -> Result<Configuration> {
    match path {
        Some(path) => Configuration::from_reader(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(Configuration::new()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut configuration = load_configuration(cli.config.as_ref())?;

    match cli.command {
        Commands::Random { seed } => {
            let fixture = FixtureGenerator::new(&configuration)
                .generate_random(seed)
                .with_context(|| format!("generating test vector for seed {}", seed))?;
            let encoded = fixture.encode()?;

            let mut stdout = std::io::stdout().lock();
            stdout.write_all(to_hex(&encoded).as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Commands::Bulk { output, segments, seed } => {
            if let Some(output) = output {
                configuration.bulk_output = output;
            }
            if let Some(segments) = segments {
                configuration.bulk_segments = segments;
            }
            if let Some(seed) = seed {
                configuration.bulk_seed = seed;
            }
            configuration.validate()?;

            let fixture = FixtureGenerator::new(&configuration)
                .generate_bulk()
                .context("generating bulk reference spline")?;
            let (y, y_fixed) = fixture.example(configuration.example_x)?;
            let x_fixed = FixedPoint::from_f64(configuration.example_x)?;

            write_segments(&configuration.bulk_output, fixture.segments())
                .with_context(|| format!("writing {}", configuration.bulk_output.display()))?;

            println!("Example:");
            println!("x = {} ({})", configuration.example_x, x_fixed);
            // exact WAD value where it fits rust_decimal, else the float
            let y_real = y_fixed.to_decimal().map_or_else(|| y.to_string(), |d| d.normalize().to_string());
            println!("y = {} ({})", y_real, y_fixed);
            Ok(())
        }
        Commands::Lookup { table, x } => {
            let x: FixedPoint = x.parse().context("parsing query point")?;
            let segments = read_segments(&table)
                .with_context(|| format!("reading {}", table.display()))?;
            let table = SegmentTable::new(segments)?;

            let covering = table.covering(&x);
            if covering.is_empty() {
                anyhow::bail!(
                    "x = {} lies outside the table range [{}, {}]",
                    x,
                    table.min_x(),
                    table.max_x()
                );
            }
            println!("Evaluator segment: {}", table.locate(&x));
            for (index, segment) in covering {
                let row: Vec<String> = segment.fields().iter().map(|field| field.to_string()).collect();
                println!("Spline Segment {}:", index);
                println!("[{}]", row.join(", "));
            }
            Ok(())
        }
    }
}
