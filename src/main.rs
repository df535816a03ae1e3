use anyhow::{bail, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::io::Write;

use mismatch_window::io::{self, SequencePair};
use mismatch_window::render::{self, WindowReport};
use mismatch_window::window::{self, Strategy};

#[derive(Parser, Debug)]
#[command(
    name = "mismatch-window",
    author,
    version,
    about = "Longest window over two equal-length sequences with fewer mismatches than a threshold"
)]
struct Cli {
    /// First sequence (read from stdin when both sequences are omitted)
    first: Option<String>,
    /// Second sequence
    second: Option<String>,
    /// Read the first two records of a FASTA file instead
    #[arg(short = 'f', long = "fasta", conflicts_with_all = ["first", "second"])]
    fasta: Option<String>,
    /// Exclusive upper bound on mismatches inside the window
    #[arg(short = 'k', long = "threshold", default_value_t = 3)]
    threshold: usize,
    /// Symbol printed at mismatching positions
    #[arg(long = "placeholder", default_value_t = render::PLACEHOLDER)]
    placeholder: char,
    /// Scan engine: `sliding` is O(N), `exhaustive` rescans every window; both pick the same window
    #[arg(long = "strategy", value_enum, default_value_t = StrategyArg::Sliding)]
    strategy: StrategyArg,
    /// Output line: the masked window, or a JSON report with start, length and mismatch count
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StrategyArg {
    Sliding,
    Exhaustive,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Sliding => Strategy::Sliding,
            StrategyArg::Exhaustive => Strategy::Exhaustive,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Error
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let pair = load_input(&cli)?;
    let line = run(&pair, cli.threshold, cli.strategy.into(), cli.placeholder, cli.format)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", line)?;
    Ok(())
}

fn load_input(cli: &Cli) -> Result<SequencePair> {
    match (&cli.fasta, &cli.first, &cli.second) {
        (Some(path), _, _) => {
            log::info!("input: FASTA file '{}'", path);
            let fh = std::fs::File::open(path)
                .map_err(|e| anyhow::anyhow!("cannot open FASTA file '{}': {}", path, e))?;
            io::read_fasta_pair(std::io::BufReader::new(fh))
        }
        (None, Some(first), Some(second)) => {
            log::info!("input: command-line arguments");
            Ok(SequencePair::from_strs(first, second))
        }
        (None, Some(_), None) => bail!("second sequence is missing"),
        (None, None, _) => {
            log::info!("input: two lines from stdin");
            io::read_line_pair(std::io::stdin().lock())
        }
    }
}

/// 搜索并格式化结果行；任何错误都在输出前返回
fn run(
    pair: &SequencePair,
    threshold: usize,
    strategy: Strategy,
    placeholder: char,
    format: OutputFormat,
) -> Result<String> {
    let (a, b) = (&pair.first[..], &pair.second[..]);
    log::info!(
        "lengths: {} / {}, strategy: {:?}, threshold: {}",
        a.len(),
        b.len(),
        strategy,
        threshold
    );

    let best = window::find_best_window_with(a, b, threshold, strategy)?;
    let report = WindowReport::build(a, b, best, placeholder)?;
    if best.is_empty() {
        log::debug!("no non-empty window has fewer than {} mismatches", threshold);
    }
    log::debug!(
        "best window: start={} length={} mismatches={}",
        report.start,
        report.length,
        report.mismatches
    );

    let line = match format {
        OutputFormat::Text => report.rendered,
        OutputFormat::Json => serde_json::to_string(&report)?,
    };
    Ok(line)
}
