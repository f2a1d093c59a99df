/// Conversion between a chromosome and its node-level cycle
///
/// A chromosome of `n` blocks unrolls to `2n` nodes, each block contributing
/// its entering node followed by its exiting node.
use crate::block::{block_of, Node};
use crate::error::{GraphError, Result};
use crate::genome::Chromosome;
use std::collections::HashSet;
use std::fmt;

/// Node sequence of one circular chromosome
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle(Vec<Node>);

impl Cycle {
    /// Wrap a node sequence; decoding validates it
    pub fn new(nodes: Vec<Node>) -> Self {
        Cycle(nodes)
    }

    /// Build a cycle from raw node values, rejecting values that are not block ends
    pub fn from_values(values: &[u64]) -> Result<Self> {
        let nodes = values
            .iter()
            .map(|&v| {
                Node::new(v).ok_or_else(|| {
                    GraphError::malformed_cycle(format!("node {v} is not a block end"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Cycle(nodes))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> Vec<u64> {
        self.0.iter().map(|n| n.value()).collect()
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.0
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, ")")
    }
}

impl Chromosome {
    /// Unroll into the cycle of entering/exiting nodes
    pub fn to_cycle(&self) -> Cycle {
        let mut nodes = Vec::with_capacity(2 * self.len());
        for block in self.blocks() {
            let (entering, exiting) = block.nodes();
            nodes.push(entering);
            nodes.push(exiting);
        }
        Cycle(nodes)
    }
}

impl Cycle {
    /// Decode back into a chromosome
    pub fn to_chromosome(&self) -> Result<Chromosome> {
        if self.0.is_empty() {
            return Err(GraphError::malformed_cycle("cycle has no nodes"));
        }
        if self.0.len() % 2 != 0 {
            return Err(GraphError::malformed_cycle(format!(
                "cycle has odd length {}",
                self.0.len()
            )));
        }

        let mut blocks = Vec::with_capacity(self.0.len() / 2);
        let mut seen = HashSet::with_capacity(self.0.len() / 2);
        for pair in self.0.chunks_exact(2) {
            let block = block_of(pair[0], pair[1]).ok_or_else(|| {
                GraphError::malformed_cycle(format!(
                    "nodes {} and {} are not the two ends of one block",
                    pair[0], pair[1]
                ))
            })?;
            if !seen.insert(block.id()) {
                return Err(GraphError::malformed_cycle(format!(
                    "block {} occurs twice",
                    block.id()
                )));
            }
            blocks.push(block);
        }
        Chromosome::new(blocks)
    }
}

/// Cycle of a chromosome; zero block ids are rejected when the chromosome is built
pub fn chromosome_to_cycle(chromosome: &Chromosome) -> Cycle {
    chromosome.to_cycle()
}

/// Chromosome encoded by a cycle
pub fn cycle_to_chromosome(cycle: &Cycle) -> Result<Chromosome> {
    cycle.to_chromosome()
}
