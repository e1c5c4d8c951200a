use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use connectivity::pairs::parse_pairs;
use connectivity::{
    saturate_sizes, Engine, Recorder, RunReport, SaturationConfig, SaturationReport, StepRecord,
    Variant,
};

mod demo;
mod trace;

use trace::TextTrace;

/// Dynamic connectivity CLI: run, compare and stress union-find variants
#[derive(Parser)]
#[command(name = "connectivity", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Connect pairs read from a file or stdin, tracing every step
    Run {
        /// Variant: qf, qu, wqu, wqu-ph, wqu-pc
        #[arg(short, long, default_value = "wqu")]
        variant: Variant,
        /// Number of sites
        #[arg(short = 'n', long, default_value_t = 10)]
        sites: usize,
        /// Pair file, one "p q" per line ('#' comments); stdin if omitted
        #[arg(short, long)]
        input: Option<String>,
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
        /// Verify the forest invariants after the run
        #[arg(long)]
        check: bool,
        /// Suppress progress messages on stderr
        #[arg(short, long)]
        quiet: bool,
    },
    /// Run the same pairs through every variant and tabulate the cost
    Compare {
        /// Number of sites
        #[arg(short = 'n', long, default_value_t = 10)]
        sites: usize,
        /// Pair file; stdin if omitted
        #[arg(short, long)]
        input: Option<String>,
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Merge random pairs until one component remains, per size
    Saturate {
        /// TOML config with variant, sizes and seed
        #[arg(long)]
        config: Option<String>,
        /// Variant override
        #[arg(short, long)]
        variant: Option<Variant>,
        /// Comma-separated sizes, e.g. "1000,10000"
        #[arg(long)]
        sizes: Option<String>,
        /// Fixed seed; random if neither flag nor config sets one
        #[arg(long)]
        seed: Option<u64>,
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
        /// Suppress progress messages on stderr
        #[arg(short, long)]
        quiet: bool,
    },
    /// Replay the textbook exercise inputs
    Demo,
}

#[derive(Serialize)]
struct RunOutput {
    variant: Variant,
    sites: usize,
    steps: Vec<StepRecord>,
    report: RunReport,
}

#[derive(Serialize)]
struct CompareRow {
    variant: Variant,
    merges: usize,
    total_accesses: u64,
    components: usize,
    max_depth: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            variant,
            sites,
            input,
            format,
            pretty,
            check,
            quiet,
        } => cmd_run(variant, sites, input.as_deref(), &format, pretty, check, quiet),
        Command::Compare {
            sites,
            input,
            format,
            pretty,
        } => cmd_compare(sites, input.as_deref(), &format, pretty),
        Command::Saturate {
            config,
            variant,
            sizes,
            seed,
            format,
            pretty,
            quiet,
        } => cmd_saturate(
            config.as_deref(),
            variant,
            sizes.as_deref(),
            seed,
            &format,
            pretty,
            quiet,
        ),
        Command::Demo => cmd_demo(),
    }
}

/// Read pairs from `path`, or from stdin when `None`.
fn load_pairs(path: Option<&str>) -> Result<Vec<(usize, usize)>> {
    let text = match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read pairs from stdin")?;
            buf
        }
    };
    let source = path.unwrap_or("<stdin>");
    parse_pairs(&text).with_context(|| format!("invalid pair in {source}"))
}

/// Parse a size list like "1000,10000,100000".
fn parse_sizes(spec: &str) -> Result<Vec<usize>> {
    spec.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<usize>()
                .with_context(|| format!("invalid size '{part}'"))
        })
        .collect()
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn cmd_run(
    variant: Variant,
    sites: usize,
    input: Option<&str>,
    format: &str,
    pretty: bool,
    check: bool,
    quiet: bool,
) -> Result<()> {
    let pairs = load_pairs(input)?;
    if !quiet {
        eprintln!("running {} pairs through {variant} on {sites} sites", pairs.len());
    }

    match format {
        "text" => {
            let stdout = io::stdout();
            let mut engine = Engine::with_observer(variant, sites, TextTrace::new(stdout.lock()))?;
            let report = engine.run(pairs)?;
            if check {
                engine.validate().context("invariant check failed")?;
            }
            engine
                .into_observer()
                .finish()
                .context("failed to write trace")?;
            println!("total accesses: {}", report.total_accesses);
        }
        "json" => {
            let mut engine = Engine::with_observer(variant, sites, Recorder::new())?;
            let report = engine.run(pairs)?;
            if check {
                engine.validate().context("invariant check failed")?;
            }
            let output = RunOutput {
                variant,
                sites,
                steps: engine.into_observer().steps,
                report,
            };
            println!("{}", to_json(&output, pretty)?);
        }
        other => bail!("unknown format '{other}' (expected text or json)"),
    }
    Ok(())
}

fn cmd_compare(sites: usize, input: Option<&str>, format: &str, pretty: bool) -> Result<()> {
    let pairs = load_pairs(input)?;

    let mut rows = Vec::with_capacity(Variant::ALL.len());
    for variant in Variant::ALL {
        let mut engine = Engine::new(variant, sites)?;
        let report = engine.run(pairs.iter().copied())?;
        rows.push(CompareRow {
            variant,
            merges: report.merges,
            total_accesses: report.total_accesses,
            components: engine.component_count(),
            max_depth: engine.max_depth(),
        });
    }

    match format {
        "text" => {
            println!(
                "{:<8} {:>8} {:>12} {:>10} {:>9}",
                "Variant", "Merges", "Accesses", "Components", "MaxDepth"
            );
            println!("{}", "-".repeat(51));
            for row in &rows {
                println!(
                    "{:<8} {:>8} {:>12} {:>10} {:>9}",
                    row.variant.name(),
                    row.merges,
                    row.total_accesses,
                    row.components,
                    row.max_depth,
                );
            }
        }
        "json" => println!("{}", to_json(&rows, pretty)?),
        other => bail!("unknown format '{other}' (expected text or json)"),
    }
    Ok(())
}

fn cmd_saturate(
    config_path: Option<&str>,
    variant: Option<Variant>,
    sizes: Option<&str>,
    seed: Option<u64>,
    format: &str,
    pretty: bool,
    quiet: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {path}"))?;
            SaturationConfig::from_toml(&toml_str)
                .with_context(|| format!("parsing config from {path}"))?
        }
        None => SaturationConfig::default(),
    };
    if let Some(variant) = variant {
        config.variant = variant;
    }
    if let Some(sizes) = sizes {
        config.sizes = parse_sizes(sizes)?;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    // Pin the seed so it can be reported and reproduced.
    config.seed = Some(config.resolve_seed());

    if !quiet {
        eprintln!(
            "saturating {} sizes with {} (seed {})",
            config.sizes.len(),
            config.variant,
            config.seed.unwrap_or_default()
        );
    }

    let reports: Vec<SaturationReport> = saturate_sizes(&config)?;

    match format {
        "text" => {
            for r in &reports {
                println!(
                    "N = {} edges = {} ({:.3} x 0.5 N ln N)",
                    r.len,
                    r.edges,
                    r.edge_ratio()
                );
            }
        }
        "json" => println!("{}", to_json(&reports, pretty)?),
        other => bail!("unknown format '{other}' (expected text or json)"),
    }
    Ok(())
}

fn cmd_demo() -> Result<()> {
    let stdout = io::stdout();
    for ex in demo::EXERCISES {
        println!("{}:", ex.title);
        let mut engine =
            Engine::with_observer(ex.variant, demo::SITES, TextTrace::new(stdout.lock()))?;
        let report = engine.run(ex.pairs.iter().copied())?;
        engine
            .into_observer()
            .finish()
            .context("failed to write trace")?;
        println!("total accesses: {}\n", report.total_accesses);
    }
    Ok(())
}
