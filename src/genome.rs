/// Chromosomes and genomes as signed permutations of synteny blocks
///
/// Both types are validated on construction: chromosomes are non-empty and
/// never repeat a block, genomes never repeat a block across chromosomes.
/// Chromosomes are circular, so rotations and reversed readings describe the
/// same chromosome; `canonical` picks one representative.
use crate::block::SignedBlock;
use crate::error::{GraphError, Result};
use std::collections::HashSet;
use std::fmt;

/// A circular chromosome: a non-empty sequence of distinct signed blocks
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    blocks: Vec<SignedBlock>,
}

impl Chromosome {
    /// Build a chromosome from signed blocks
    pub fn new(blocks: Vec<SignedBlock>) -> Result<Self> {
        if blocks.is_empty() {
            return Err(GraphError::malformed_cycle("chromosome has no blocks"));
        }
        let mut seen = HashSet::with_capacity(blocks.len());
        for block in &blocks {
            if !seen.insert(block.id()) {
                return Err(GraphError::DuplicateBlock(block.id()));
            }
        }
        Ok(Chromosome { blocks })
    }

    /// Build a chromosome from raw signed integers, rejecting zero ids
    pub fn from_values(values: &[i64]) -> Result<Self> {
        let blocks = values
            .iter()
            .map(|&v| SignedBlock::new(v))
            .collect::<Result<Vec<_>>>()?;
        Self::new(blocks)
    }

    pub fn blocks(&self) -> &[SignedBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Signed integer values in order
    pub fn values(&self) -> Vec<i64> {
        self.blocks.iter().map(|b| b.value()).collect()
    }

    /// Rotate so the block with the smallest id comes first
    pub fn rotated_to_min(&self) -> Chromosome {
        let start = self
            .blocks
            .iter()
            .enumerate()
            .min_by_key(|(_, b)| b.id())
            .map(|(i, _)| i)
            .unwrap_or(0);
        let mut blocks = Vec::with_capacity(self.blocks.len());
        blocks.extend_from_slice(&self.blocks[start..]);
        blocks.extend_from_slice(&self.blocks[..start]);
        Chromosome { blocks }
    }

    /// The same circular chromosome read in the opposite direction
    pub fn reversed(&self) -> Chromosome {
        let blocks = self.blocks.iter().rev().map(|b| b.flipped()).collect();
        Chromosome { blocks }
    }

    /// Representative of the rotation/reading-direction class:
    /// smallest block first, and that block forward
    pub fn canonical(&self) -> Chromosome {
        let rotated = self.rotated_to_min();
        if rotated.blocks[0].is_forward() {
            rotated
        } else {
            rotated.reversed().rotated_to_min()
        }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{block}")?;
        }
        write!(f, ")")
    }
}

/// A genome: chromosomes with globally unique block ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Genome {
    chromosomes: Vec<Chromosome>,
}

impl Genome {
    /// Build a genome, rejecting blocks shared between chromosomes
    pub fn new(chromosomes: Vec<Chromosome>) -> Result<Self> {
        let mut seen = HashSet::new();
        for chromosome in &chromosomes {
            for block in chromosome.blocks() {
                if !seen.insert(block.id()) {
                    return Err(GraphError::DuplicateBlock(block.id()));
                }
            }
        }
        Ok(Genome { chromosomes })
    }

    /// Build a genome from nested raw signed integers
    pub fn from_values(chromosomes: &[Vec<i64>]) -> Result<Self> {
        let chromosomes = chromosomes
            .iter()
            .map(|c| Chromosome::from_values(c))
            .collect::<Result<Vec<_>>>()?;
        Self::new(chromosomes)
    }

    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    pub fn chromosome_count(&self) -> usize {
        self.chromosomes.len()
    }

    /// Total number of blocks over all chromosomes
    pub fn block_count(&self) -> usize {
        self.chromosomes.iter().map(|c| c.len()).sum()
    }

    /// Nested signed integer values
    pub fn values(&self) -> Vec<Vec<i64>> {
        self.chromosomes.iter().map(|c| c.values()).collect()
    }

    /// Canonical chromosomes sorted by their first block
    pub fn canonical(&self) -> Genome {
        let mut chromosomes: Vec<Chromosome> =
            self.chromosomes.iter().map(|c| c.canonical()).collect();
        chromosomes.sort_by_key(|c| c.blocks()[0].id());
        Genome { chromosomes }
    }

    /// True when both genomes describe the same set of circular chromosomes
    pub fn is_equivalent(&self, other: &Genome) -> bool {
        self.canonical() == other.canonical()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chromosome in &self.chromosomes {
            write!(f, "{chromosome}")?;
        }
        Ok(())
    }
}
