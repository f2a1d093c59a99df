//! Error types for the breakpoint-graph engine.
//!
//! Input-shape errors are raised at the boundary of each conversion;
//! graph-consistency errors are raised while matching or walking an edge set.

use thiserror::Error;

/// Errors raised by the genome/graph conversions and the two-break operator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A signed block with id 0, or an id too large for its nodes
    #[error("invalid block: block ids must be non-zero and at most 9223372036854775807")]
    InvalidBlock,

    /// The same block id appears twice in one genome
    #[error("block {0} appears more than once in the genome")]
    DuplicateBlock(u64),

    /// A node sequence that does not decode to a chromosome
    #[error("malformed cycle: {message}")]
    MalformedCycle { message: String },

    /// A node that is not matched by exactly one colored edge
    #[error("node {node} is not matched by exactly one colored edge")]
    UnmatchedNode { node: u64 },

    /// A cycle walk that could not return to its start node
    #[error("walk starting at node {start} does not close: node {stuck} has no colored edge")]
    BrokenCycle { start: u64, stuck: u64 },

    /// A two-break names an edge that is absent from the edge set
    #[error("edge ({0}, {1}) not found in genome graph")]
    EdgeNotFound(u64, u64),

    /// A two-break names the same edge twice
    #[error("two-break requires two distinct edges, got ({0}, {1}) twice")]
    RepeatedEdge(u64, u64),

    /// Text that does not follow genome or edge-set notation
    #[error("cannot parse {kind} notation at: {input:?}")]
    Notation { kind: &'static str, input: String },
}

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    /// Create a malformed cycle error
    pub fn malformed_cycle(message: impl Into<String>) -> Self {
        Self::MalformedCycle {
            message: message.into(),
        }
    }

    /// Create a notation error, keeping a short excerpt of the rejected input
    pub fn notation(kind: &'static str, input: &str) -> Self {
        let excerpt: String = input.chars().take(40).collect();
        Self::Notation {
            kind,
            input: excerpt,
        }
    }
}
