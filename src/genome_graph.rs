/// Colored edges of a genome and reconstruction of a genome from them
///
/// Each chromosome contributes one edge per block, joining the exiting node
/// of a block to the entering node of the next one (wrapping around). In a
/// valid genome graph every node lies on exactly one colored edge, so the
/// colored edges together with the implicit block edges form disjoint cycles,
/// one per chromosome.
use crate::block::Node;
use crate::cycle::Cycle;
use crate::error::{GraphError, Result};
use crate::genome::Genome;
use crate::union_find::UnionFind;
use indexmap::IndexSet;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An unordered adjacency between two block ends
///
/// `(u, v)` and `(v, u)` compare and hash equal; the stored order is kept
/// for display and for the direction in which a chromosome is read back.
#[derive(Debug, Clone, Copy)]
pub struct ColoredEdge {
    pub first: Node,
    pub second: Node,
}

impl ColoredEdge {
    pub fn new(first: Node, second: Node) -> Self {
        ColoredEdge { first, second }
    }

    /// Edge from raw node values; `None` if either is 0
    pub fn from_values(first: u64, second: u64) -> Option<Self> {
        Some(ColoredEdge::new(Node::new(first)?, Node::new(second)?))
    }

    /// True if this edge joins `u` and `v` in either order
    pub fn joins(&self, u: Node, v: Node) -> bool {
        (self.first == u && self.second == v) || (self.first == v && self.second == u)
    }

    pub fn values(&self) -> (u64, u64) {
        (self.first.value(), self.second.value())
    }

    fn key(&self) -> (Node, Node) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }
}

impl PartialEq for ColoredEdge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ColoredEdge {}

impl Hash for ColoredEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for ColoredEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// The colored-edge set of one genome
///
/// Construction guarantees that no node lies on more than one edge, so every
/// edit built on top of it keeps the perfect matching intact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenomeGraph {
    edges: IndexSet<ColoredEdge>,
}

impl GenomeGraph {
    /// Build a genome graph, rejecting any node matched more than once
    pub fn new(edges: Vec<ColoredEdge>) -> Result<Self> {
        let mut matched = HashSet::with_capacity(2 * edges.len());
        for edge in &edges {
            for node in [edge.first, edge.second] {
                if !matched.insert(node) {
                    return Err(GraphError::UnmatchedNode { node: node.value() });
                }
            }
        }
        Ok(GenomeGraph {
            edges: edges.into_iter().collect(),
        })
    }

    /// Build a genome graph from raw node pairs
    pub fn from_values(pairs: &[(u64, u64)]) -> Result<Self> {
        let edges = pairs
            .iter()
            .map(|&(u, v)| {
                ColoredEdge::from_values(u, v).ok_or_else(|| GraphError::UnmatchedNode {
                    node: if Node::new(u).is_none() { u } else { v },
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(edges)
    }

    /// Wrap edges already known to form a matching
    pub(crate) fn from_matching(edges: IndexSet<ColoredEdge>) -> Self {
        GenomeGraph { edges }
    }

    pub fn edges(&self) -> impl Iterator<Item = &ColoredEdge> + '_ {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, edge: &ColoredEdge) -> bool {
        self.edges.contains(edge)
    }

    /// Raw node pairs in iteration order
    pub fn values(&self) -> Vec<(u64, u64)> {
        self.edges.iter().map(|e| e.values()).collect()
    }

    /// Colored-edge neighbour of every matched node
    fn adjacency(&self) -> HashMap<Node, Node> {
        let mut adjacency = HashMap::with_capacity(2 * self.edges.len());
        for edge in &self.edges {
            adjacency.insert(edge.first, edge.second);
            adjacency.insert(edge.second, edge.first);
        }
        adjacency
    }

    /// Colored edges of every chromosome in the genome
    pub fn from_genome(genome: &Genome) -> Self {
        let mut edges = IndexSet::with_capacity(genome.block_count());
        for chromosome in genome.chromosomes() {
            let cycle = chromosome.to_cycle();
            let nodes = cycle.nodes();
            for k in 0..chromosome.len() {
                let exiting = nodes[2 * k + 1];
                let entering = nodes[(2 * k + 2) % nodes.len()];
                edges.insert(ColoredEdge::new(exiting, entering));
            }
        }
        debug!(
            "Built {} colored edges from {} chromosomes",
            edges.len(),
            genome.chromosome_count()
        );
        GenomeGraph::from_matching(edges)
    }

    /// Walk the edge set back into chromosomes
    ///
    /// Each walk starts at the second node of the first unvisited edge, which
    /// is the entering node of its block, and alternates block edges with
    /// colored edges until it reaches that node again. Chromosomes come out in
    /// edge order, each rotated so its smallest block is first.
    pub fn to_genome(&self) -> Result<Genome> {
        let adjacency = self.adjacency();
        let mut visited: HashSet<Node> = HashSet::with_capacity(adjacency.len());
        let mut chromosomes = Vec::new();

        for edge in &self.edges {
            let start = edge.second;
            if visited.contains(&start) {
                continue;
            }

            let mut nodes = Vec::new();
            let mut entering = start;
            loop {
                let exiting = entering.partner();
                visited.insert(entering);
                visited.insert(exiting);
                nodes.push(entering);
                nodes.push(exiting);

                let next = *adjacency.get(&exiting).ok_or(GraphError::BrokenCycle {
                    start: start.value(),
                    stuck: exiting.value(),
                })?;
                if next == start {
                    break;
                }
                if visited.contains(&next) {
                    return Err(GraphError::BrokenCycle {
                        start: start.value(),
                        stuck: next.value(),
                    });
                }
                entering = next;
            }

            trace!("Closed walk from node {} over {} nodes", start, nodes.len());
            let chromosome = Cycle::new(nodes).to_chromosome()?;
            chromosomes.push(chromosome.rotated_to_min());
        }

        debug!(
            "Reconstructed {} chromosomes from {} colored edges",
            chromosomes.len(),
            self.edges.len()
        );
        Genome::new(chromosomes)
    }

    /// Number of chromosome-cycles, counting blocks joined by colored edges
    pub fn cycle_count(&self) -> usize {
        let mut index: HashMap<u64, usize> = HashMap::with_capacity(self.edges.len());
        for edge in &self.edges {
            for node in [edge.first, edge.second] {
                let next = index.len();
                index.entry(node.block_id()).or_insert(next);
            }
        }

        let mut sets = UnionFind::new(index.len());
        for edge in &self.edges {
            sets.union(
                index[&edge.first.block_id()],
                index[&edge.second.block_id()],
            );
        }
        sets.set_count()
    }
}

impl fmt::Display for GenomeGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{edge}")?;
        }
        Ok(())
    }
}

/// Colored edges of a genome
pub fn colored_edges(genome: &Genome) -> GenomeGraph {
    GenomeGraph::from_genome(genome)
}

/// Genome encoded by a colored-edge set
pub fn graph_to_genome(graph: &GenomeGraph) -> Result<Genome> {
    graph.to_genome()
}
