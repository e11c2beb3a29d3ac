//! rand_stream - pipe generator output to external statistical test suites
//!
//! ```text
//! rand_stream 1 | dieharder -a -g 200
//! ```
//!
//! Not a test in itself: it writes an endless stream of raw draws to stdout
//! (or `--count` draws) so tools such as dieharder can judge its quality.

use anyhow::{Context, Result};
use beam_random::{Acg, GeneratorConfig};
use clap::{Parser, ValueEnum};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// 4 native-endian bytes per draw
    Raw,
    /// One `0x%08x` line per draw
    Hex,
}

/// Stream random numbers from the ACG generator to stdout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Generator seed (overrides the config file; default 0)
    seed: Option<u32>,

    /// Minimum additive state size (overrides the config file; default 100)
    #[arg(long)]
    size: Option<usize>,

    /// Stop after this many draws instead of running until stdout closes
    #[arg(long)]
    count: Option<u64>,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Raw)]
    format: OutputFormat,

    /// JSON file with a generator config (`{"seed": 1, "min_size": 100}`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print generator parameters and totals to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Config file (or defaults) with command-line overrides applied
fn resolve_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("loading generator config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(size) = args.size {
        config.min_size = size;
    }
    Ok(config)
}

/// Write draws until `count` is reached or the writer fails
fn write_stream<W: Write>(
    rng: &mut Acg,
    out: &mut W,
    count: Option<u64>,
    format: OutputFormat,
) -> io::Result<u64> {
    let mut written = 0u64;
    while count.map_or(true, |n| written < n) {
        let x = rng.next_u32();
        match format {
            OutputFormat::Raw => out.write_all(&x.to_ne_bytes())?,
            OutputFormat::Hex => writeln!(out, "{:#010x}", x)?,
        }
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    eprintln!("Random Seed: {}", config.seed);

    let mut rng = config.build();
    if args.verbose {
        eprintln!(
            "[rand_stream] state_size={} tail_length={} aux_size={} format={:?}",
            rng.state_size(),
            rng.tail_length(),
            rng.aux_size(),
            args.format
        );
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match write_stream(&mut rng, &mut out, args.count, args.format) {
        Ok(n) => {
            if args.verbose {
                eprintln!("[rand_stream] wrote {} draws", n);
            }
            Ok(())
        }
        // Consumer closed the pipe; normal end of an endless stream
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            if args.verbose {
                eprintln!("[rand_stream] output closed");
            }
            Ok(())
        }
        Err(e) => Err(e).context("writing random stream to stdout"),
    }
}
