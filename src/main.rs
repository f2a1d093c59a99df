use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use std::io::{self, Read, Write};

use twobreak::{
    cycle_to_chromosome, parse_chromosome, parse_edges, parse_genome, two_break_genome_graph,
    two_break_neighbourhood, two_break_on_genome, Cycle, GenomeGraph, TwoBreakEffect,
};

/// twobreak - Breakpoint-graph operations on signed genomes
///
/// Genomes are written as `(+1 -2 +3)(-4 +5)`, edge sets as `(2, 3), (4, 5)`.
/// When the text argument is omitted it is read from --input or stdin.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,

    /// Read the genome/edge text from this file instead of stdin
    #[clap(short = 'i', long = "input", global = true)]
    input: Option<String>,

    /// Output file (stdout if not specified)
    #[clap(short = 'o', long = "output", global = true)]
    output: Option<String>,

    /// Number of threads for parallel processing (default: all cores)
    #[clap(short = 't', long = "threads", global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[clap(short = 'q', long = "quiet", global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the node cycle of one chromosome
    Cycle {
        /// Chromosome, e.g. "(+1 -2 +3)"
        chromosome: Option<String>,
    },

    /// Decode a node cycle back into a chromosome
    Chromosome {
        /// Node sequence, e.g. 1 2 4 3 5 6
        #[clap(required = true)]
        nodes: Vec<u64>,
    },

    /// Print the colored edges of a genome
    Edges {
        /// Genome, e.g. "(+1 -2 +3)(-4 +5)"
        genome: Option<String>,
    },

    /// Reconstruct a genome from colored edges
    Genome {
        /// Edge set, e.g. "(2, 4), (3, 1)"
        edges: Option<String>,
    },

    /// Replace edges (a, b) and (c, d) with (a, c) and (b, d)
    TwoBreak {
        /// Genome (or edge set with --edges)
        text: Option<String>,

        #[clap(short = 'a')]
        a: u64,

        #[clap(short = 'b')]
        b: u64,

        #[clap(short = 'c')]
        c: u64,

        #[clap(short = 'd')]
        d: u64,

        /// Treat the input as an edge set and print the resulting edge set
        #[clap(long = "edges")]
        edges: bool,
    },

    /// List every two-break of a genome with its effect
    Neighbours {
        /// Genome, e.g. "(+1 -2 +3)(-4 +5)"
        genome: Option<String>,
    },
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Inline argument, else the --input file, else stdin
fn read_text(inline: Option<String>, input: Option<&str>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text);
    }
    if let Some(path) = input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {path}"));
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

fn run(command: Command, input: Option<&str>, output: &mut dyn Write) -> Result<()> {
    match command {
        Command::Cycle { chromosome } => {
            let text = read_text(chromosome, input)?;
            let chromosome = parse_chromosome(text.trim()).context("Invalid chromosome")?;
            writeln!(output, "{}", chromosome.to_cycle())?;
        }
        Command::Chromosome { nodes } => {
            let cycle = Cycle::from_values(&nodes).context("Invalid node sequence")?;
            let chromosome = cycle_to_chromosome(&cycle).context("Invalid node sequence")?;
            writeln!(output, "{chromosome}")?;
        }
        Command::Edges { genome } => {
            let text = read_text(genome, input)?;
            let genome = parse_genome(&text).context("Invalid genome")?;
            writeln!(output, "{}", GenomeGraph::from_genome(&genome))?;
        }
        Command::Genome { edges } => {
            let text = read_text(edges, input)?;
            let graph = parse_edges(&text).context("Invalid edge set")?;
            let genome = graph.to_genome().context("Edge set is not a genome graph")?;
            writeln!(output, "{genome}")?;
        }
        Command::TwoBreak {
            text,
            a,
            b,
            c,
            d,
            edges,
        } => {
            let text = read_text(text, input)?;
            let failed = || format!("Cannot apply two-break {a} {b} {c} {d}");
            if edges {
                let graph = parse_edges(&text).context("Invalid edge set")?;
                let after = two_break_genome_graph(&graph, a, b, c, d).with_context(failed)?;
                let effect = TwoBreakEffect::from_counts(graph.cycle_count(), after.cycle_count());
                info!("Two-break {a} {b} {c} {d} is a {effect}");
                writeln!(output, "{after}")?;
            } else {
                let genome = parse_genome(&text).context("Invalid genome")?;
                let after = two_break_on_genome(&genome, a, b, c, d).with_context(failed)?;
                let effect =
                    TwoBreakEffect::from_counts(genome.chromosome_count(), after.chromosome_count());
                info!("Two-break {a} {b} {c} {d} is a {effect}");
                writeln!(output, "{after}")?;
            }
        }
        Command::Neighbours { genome } => {
            let text = read_text(genome, input)?;
            let genome = parse_genome(&text).context("Invalid genome")?;
            let candidates = two_break_neighbourhood(&genome)?;
            info!("{} two-breaks from {}", candidates.len(), genome);

            for candidate in candidates {
                let [a, b, c, d] = candidate.nodes;
                writeln!(
                    output,
                    "{a}\t{b}\t{c}\t{d}\t{}\t{}",
                    candidate.effect, candidate.genome
                )?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    // Set up rayon thread pool
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let mut output: Box<dyn Write> = if let Some(ref path) = args.output {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file {path}"))?,
        )
    } else {
        Box::new(io::stdout())
    };

    run(args.command, args.input.as_deref(), &mut output)?;
    output.flush()?;
    Ok(())
}
