/// Property-based tests for the breakpoint-graph engine
///
/// Uses proptest to verify the invariants that must hold for every genome:
/// round trips through cycles and colored edges, the perfect matching after
/// two-breaks, and the involution of a two-break with its reverse.
use proptest::prelude::*;
use std::collections::HashMap;
use twobreak::{
    chromosome_to_cycle, colored_edges, cycle_to_chromosome, graph_to_genome,
    two_break_genome_graph, Genome, GenomeGraph,
};

/// Random genome: a signed permutation of 1..=n cut into chromosomes
fn genome_strategy(max_blocks: i64) -> impl Strategy<Value = Genome> {
    (1..=max_blocks)
        .prop_flat_map(|n| {
            (
                Just((1..=n).collect::<Vec<i64>>()).prop_shuffle(),
                prop::collection::vec(any::<bool>(), n as usize),
                prop::collection::vec(prop::bool::weighted(0.2), n as usize),
            )
        })
        .prop_map(|(ids, signs, cuts)| {
            let mut chromosomes = Vec::new();
            let mut current = Vec::new();
            for ((id, forward), cut) in ids.into_iter().zip(signs).zip(cuts) {
                current.push(if forward { id } else { -id });
                if cut {
                    chromosomes.push(std::mem::take(&mut current));
                }
            }
            if !current.is_empty() {
                chromosomes.push(current);
            }
            Genome::from_values(&chromosomes).unwrap()
        })
}

/// Genome together with two distinct edge indices of its graph
fn genome_with_edge_pair() -> impl Strategy<Value = (Genome, usize, usize)> {
    genome_strategy(30)
        .prop_filter("need two edges", |g| g.block_count() >= 2)
        .prop_flat_map(|g| {
            let n = g.block_count();
            (Just(g), 0..n, 1..n)
        })
        .prop_map(|(g, i, offset)| {
            let n = g.block_count();
            (g, i, (i + offset) % n)
        })
}

fn degree_of_every_node(graph: &GenomeGraph) -> HashMap<u64, usize> {
    let mut degree = HashMap::new();
    for (u, v) in graph.values() {
        *degree.entry(u).or_insert(0) += 1;
        *degree.entry(v).or_insert(0) += 1;
    }
    degree
}

/// Property: a chromosome survives chromosome -> cycle -> chromosome unchanged
#[test]
fn prop_cycle_round_trip() {
    proptest!(|(genome in genome_strategy(40))| {
        for chromosome in genome.chromosomes() {
            let cycle = chromosome_to_cycle(chromosome);
            prop_assert_eq!(cycle.len(), 2 * chromosome.len());
            let decoded = cycle_to_chromosome(&cycle).unwrap();
            prop_assert_eq!(&decoded, chromosome);
        }
    });
}

/// Property: genome -> colored edges -> genome stays in the same equivalence class
#[test]
fn prop_graph_round_trip() {
    proptest!(|(genome in genome_strategy(40))| {
        let graph = colored_edges(&genome);
        prop_assert_eq!(graph.len(), genome.block_count());

        let rebuilt = graph_to_genome(&graph).unwrap();
        prop_assert_eq!(rebuilt.chromosome_count(), genome.chromosome_count());
        prop_assert!(rebuilt.is_equivalent(&genome),
            "{} rebuilt as {}", genome, rebuilt);
    });
}

/// Property: every node lies on exactly one colored edge
#[test]
fn prop_colored_edges_perfect_matching() {
    proptest!(|(genome in genome_strategy(40))| {
        let degree = degree_of_every_node(&colored_edges(&genome));
        prop_assert_eq!(degree.len(), 2 * genome.block_count());
        prop_assert!(degree.values().all(|&d| d == 1));
    });
}

/// Property: a two-break keeps the perfect matching and every block
#[test]
fn prop_two_break_preserves_matching() {
    proptest!(|((genome, i, j) in genome_with_edge_pair(), swap in any::<bool>())| {
        let graph = colored_edges(&genome);
        let edges = graph.values();
        let (a, b) = edges[i];
        let (c, d) = if swap { (edges[j].1, edges[j].0) } else { edges[j] };

        let after = two_break_genome_graph(&graph, a, b, c, d).unwrap();
        let degree = degree_of_every_node(&after);
        prop_assert_eq!(after.len(), graph.len());
        prop_assert_eq!(degree.len(), 2 * genome.block_count());
        prop_assert!(degree.values().all(|&d| d == 1));

        let rebuilt = graph_to_genome(&after).unwrap();
        prop_assert_eq!(rebuilt.block_count(), genome.block_count());

        // Chromosome count changes by at most one
        let delta = rebuilt.chromosome_count() as i64 - genome.chromosome_count() as i64;
        prop_assert!(delta.abs() <= 1);
    });
}

/// Property: (a, b, c, d) followed by (a, c, b, d) restores the edge set
#[test]
fn prop_two_break_involution() {
    proptest!(|((genome, i, j) in genome_with_edge_pair())| {
        let graph = colored_edges(&genome);
        let edges = graph.values();
        let (a, b) = edges[i];
        let (c, d) = edges[j];

        let once = two_break_genome_graph(&graph, a, b, c, d).unwrap();
        let twice = two_break_genome_graph(&once, a, c, b, d).unwrap();
        prop_assert_eq!(twice, graph);
    });
}

/// Property: a failed two-break leaves the edge set untouched
#[test]
fn prop_missing_edge_rejected() {
    proptest!(|(genome in genome_strategy(20))| {
        let graph = colored_edges(&genome);
        let before = graph.clone();
        // Tail and head of one block are never joined by a colored edge
        // unless the block is alone on its chromosome
        let lonely = genome.chromosomes().iter().any(|c| c.len() == 1);
        prop_assume!(!lonely);

        let (c, d) = graph.values()[0];
        prop_assert!(two_break_genome_graph(&graph, 1, 2, c, d).is_err());
        prop_assert_eq!(graph, before);
    });
}
