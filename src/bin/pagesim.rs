//! Command-line front end for the simulator.
//!
//! Owns everything the core refuses to do: parsing the reference string,
//! choosing an algorithm, and printing the rendered trace or comparison.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use pagesim::{compare_all, report, simulate, PageId, PolicyKind};

/// Simulate FIFO, LRU, and Optimal page replacement over a reference string.
#[derive(Debug, Parser)]
#[command(name = "pagesim", version, about)]
struct Cli {
    /// Page reference string, space- or comma-separated (e.g. "1 2 3 4 1 2 5")
    reference_string: String,

    /// Number of physical memory frames
    #[arg(short, long)]
    frames: usize,

    /// Replacement algorithm to simulate
    #[arg(short, long, value_enum, default_value = "fifo")]
    algorithm: Algorithm,

    /// Run all three algorithms and print a fault comparison
    #[arg(long, conflicts_with = "algorithm")]
    compare: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Fifo,
    Lru,
    Optimal,
}

impl From<Algorithm> for PolicyKind {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Fifo => PolicyKind::Fifo,
            Algorithm::Lru => PolicyKind::Lru,
            Algorithm::Optimal => PolicyKind::Optimal,
        }
    }
}

/// Parse a space- or comma-separated list of page numbers.
fn parse_reference_string(input: &str) -> Result<Vec<PageId>, String> {
    input
        .split([' ', ',', '\t'])
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u64>()
                .map(PageId::new)
                .map_err(|_| format!("invalid page number: {token:?}"))
        })
        .collect()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let pages = match parse_reference_string(&cli.reference_string) {
        Ok(pages) => pages,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let rendered = if cli.compare {
        compare_all(&pages, cli.frames).map(|cmp| report::render_comparison(&cmp))
    } else {
        simulate(cli.algorithm.into(), &pages, cli.frames).map(|result| {
            format!(
                "{}\n{}",
                report::render_trace(&result),
                report::render_summary(&result)
            )
        })
    };

    match rendered {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
