/// Synteny blocks and their oriented graph nodes
///
/// Block `i` owns exactly two nodes: its tail `2i-1` and its head `2i`.
/// A signed block fixes which of the two is entered first when a chromosome
/// is read left to right.
use crate::error::{GraphError, Result};
use std::fmt;

/// Largest block id whose nodes and signed value both fit: `2i` in a `u64`, `-i` in an `i64`
pub const MAX_BLOCK_ID: u64 = i64::MAX as u64;

/// A synteny block with orientation: `+i` or `-i`, never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignedBlock(i64);

impl SignedBlock {
    /// Create a signed block, rejecting id 0 and ids above `MAX_BLOCK_ID`
    pub fn new(value: i64) -> Result<Self> {
        if value == 0 || value.unsigned_abs() > MAX_BLOCK_ID {
            return Err(GraphError::InvalidBlock);
        }
        Ok(SignedBlock(value))
    }

    /// Unsigned block identifier
    pub fn id(&self) -> u64 {
        self.0.unsigned_abs()
    }

    pub fn is_forward(&self) -> bool {
        self.0 > 0
    }

    /// Signed integer value
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Same block read in the opposite direction
    pub fn flipped(&self) -> Self {
        SignedBlock(-self.0)
    }

    /// Entering and exiting node of this block
    pub fn nodes(&self) -> (Node, Node) {
        let id = self.id();
        if self.is_forward() {
            (Node::tail(id), Node::head(id))
        } else {
            (Node::head(id), Node::tail(id))
        }
    }
}

impl TryFrom<i64> for SignedBlock {
    type Error = GraphError;

    fn try_from(value: i64) -> Result<Self> {
        SignedBlock::new(value)
    }
}

impl fmt::Display for SignedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// One end of a synteny block: odd nodes are tails, even nodes are heads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node(u64);

impl Node {
    /// Create a node, rejecting 0 and nodes of blocks above `MAX_BLOCK_ID`
    pub fn new(value: u64) -> Option<Self> {
        (value != 0 && value.div_ceil(2) <= MAX_BLOCK_ID).then_some(Node(value))
    }

    /// Tail node `2i-1` of block `i`
    pub fn tail(block_id: u64) -> Self {
        Node(2 * block_id - 1)
    }

    /// Head node `2i` of block `i`
    pub fn head(block_id: u64) -> Self {
        Node(2 * block_id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Id of the block this node belongs to
    pub fn block_id(&self) -> u64 {
        self.0.div_ceil(2)
    }

    pub fn is_head(&self) -> bool {
        self.0 % 2 == 0
    }

    pub fn is_tail(&self) -> bool {
        !self.is_head()
    }

    /// The other node of the same block
    pub fn partner(&self) -> Node {
        if self.is_head() {
            Node(self.0 - 1)
        } else {
            Node(self.0 + 1)
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Oriented node pair of a signed block: `+i -> (2i-1, 2i)`, `-i -> (2i, 2i-1)`
pub fn nodes_of(block: SignedBlock) -> (Node, Node) {
    block.nodes()
}

/// Decode an adjacent node pair back into the signed block it came from
pub(crate) fn block_of(entering: Node, exiting: Node) -> Option<SignedBlock> {
    if entering.partner() != exiting {
        return None;
    }
    let id = entering.block_id() as i64;
    if entering < exiting {
        Some(SignedBlock(id))
    } else {
        Some(SignedBlock(-id))
    }
}
