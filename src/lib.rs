// Library exports for twobreak
pub mod block;
pub mod cycle;
pub mod error;
pub mod genome;
pub mod genome_graph;
pub mod notation;
pub mod two_break;
pub mod union_find;

pub use block::{nodes_of, Node, SignedBlock, MAX_BLOCK_ID};
pub use cycle::{chromosome_to_cycle, cycle_to_chromosome, Cycle};
pub use error::{GraphError, Result};
pub use genome::{Chromosome, Genome};
pub use genome_graph::{colored_edges, graph_to_genome, ColoredEdge, GenomeGraph};
pub use notation::{parse_chromosome, parse_edges, parse_genome};
pub use two_break::{
    classify_two_break, two_break_genome_graph, two_break_neighbourhood, two_break_on_genome,
    TwoBreakCandidate, TwoBreakEffect,
};
