/// The two-break operator
///
/// A two-break removes colored edges `(a, b)` and `(c, d)` and inserts
/// `(a, c)` and `(b, d)`. Whether that fuses two chromosomes, splits one, or
/// reverses a segment follows from the edge topology alone; the operator
/// itself never looks at it.
use crate::error::{GraphError, Result};
use crate::genome::Genome;
use crate::genome_graph::{ColoredEdge, GenomeGraph};
use indexmap::IndexSet;
use log::debug;
use rayon::prelude::*;
use std::fmt;

impl GenomeGraph {
    /// Replace `(a, b)` and `(c, d)` with `(a, c)` and `(b, d)`
    ///
    /// Returns a new graph; `self` is left as it was. The inserted edges take
    /// the positions of the removed ones.
    pub fn two_break(&self, a: u64, b: u64, c: u64, d: u64) -> Result<GenomeGraph> {
        let removed_first = self.find_edge(a, b)?;
        let removed_second = self.find_edge(c, d)?;
        if removed_first == removed_second {
            return Err(GraphError::RepeatedEdge(a, b));
        }

        // Lookups keep the caller's orientation: first = a, second = b
        let inserted_first = ColoredEdge::new(removed_first.first, removed_second.first);
        let inserted_second = ColoredEdge::new(removed_first.second, removed_second.second);

        let edges: IndexSet<ColoredEdge> = self
            .edges()
            .map(|edge| {
                if *edge == removed_first {
                    inserted_first
                } else if *edge == removed_second {
                    inserted_second
                } else {
                    *edge
                }
            })
            .collect();

        debug!("Two-break ({a}, {b}), ({c}, {d}) -> ({a}, {c}), ({b}, {d})");
        Ok(GenomeGraph::from_matching(edges))
    }

    /// Look up edge `(u, v)` in either orientation
    fn find_edge(&self, u: u64, v: u64) -> Result<ColoredEdge> {
        ColoredEdge::from_values(u, v)
            .filter(|edge| self.contains(edge))
            .ok_or(GraphError::EdgeNotFound(u, v))
    }
}

/// Apply a two-break to an edge set
pub fn two_break_genome_graph(
    graph: &GenomeGraph,
    a: u64,
    b: u64,
    c: u64,
    d: u64,
) -> Result<GenomeGraph> {
    graph.two_break(a, b, c, d)
}

/// Apply a two-break to a genome through its colored edges
pub fn two_break_on_genome(genome: &Genome, a: u64, b: u64, c: u64, d: u64) -> Result<Genome> {
    GenomeGraph::from_genome(genome)
        .two_break(a, b, c, d)?
        .to_genome()
}

/// Structural outcome of a two-break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwoBreakEffect {
    Fusion,   // two chromosomes joined into one
    Fission,  // one chromosome split into two
    Reversal, // chromosome count unchanged
}

impl fmt::Display for TwoBreakEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TwoBreakEffect::Fusion => "fusion",
            TwoBreakEffect::Fission => "fission",
            TwoBreakEffect::Reversal => "reversal",
        };
        write!(f, "{name}")
    }
}

impl TwoBreakEffect {
    /// Effect of a two-break that turns `before` chromosomes into `after`
    pub fn from_counts(before: usize, after: usize) -> Self {
        match after.cmp(&before) {
            std::cmp::Ordering::Less => TwoBreakEffect::Fusion,
            std::cmp::Ordering::Greater => TwoBreakEffect::Fission,
            std::cmp::Ordering::Equal => TwoBreakEffect::Reversal,
        }
    }
}

fn effect_between(before_cycles: usize, after: &GenomeGraph) -> TwoBreakEffect {
    TwoBreakEffect::from_counts(before_cycles, after.cycle_count())
}

/// Classify the two-break `(a, b), (c, d) -> (a, c), (b, d)` without keeping its result
pub fn classify_two_break(
    graph: &GenomeGraph,
    a: u64,
    b: u64,
    c: u64,
    d: u64,
) -> Result<TwoBreakEffect> {
    let after = graph.two_break(a, b, c, d)?;
    Ok(effect_between(graph.cycle_count(), &after))
}

/// One two-break applicable to a genome, with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoBreakCandidate {
    pub nodes: [u64; 4],
    pub effect: TwoBreakEffect,
    pub genome: Genome,
}

/// Every two-break of a genome: both reconnections of every pair of edges
///
/// Candidates are evaluated in parallel, each on its own copy of the edge
/// set, and returned in edge-pair order.
pub fn two_break_neighbourhood(genome: &Genome) -> Result<Vec<TwoBreakCandidate>> {
    let graph = GenomeGraph::from_genome(genome);
    let before_cycles = graph.cycle_count();
    let edges: Vec<(u64, u64)> = graph.values();

    let mut moves = Vec::with_capacity(edges.len() * edges.len().saturating_sub(1));
    for (i, &(a, b)) in edges.iter().enumerate() {
        for &(c, d) in &edges[i + 1..] {
            moves.push([a, b, c, d]);
            moves.push([a, b, d, c]);
        }
    }
    debug!(
        "Evaluating {} two-breaks over {} colored edges",
        moves.len(),
        edges.len()
    );

    moves
        .into_par_iter()
        .map(|[a, b, c, d]| -> Result<TwoBreakCandidate> {
            let after = graph.two_break(a, b, c, d)?;
            Ok(TwoBreakCandidate {
                nodes: [a, b, c, d],
                effect: effect_between(before_cycles, &after),
                genome: after.to_genome()?,
            })
        })
        .collect()
}
