/// Text notation for genomes and colored-edge sets
///
/// Genomes are written one parenthesised chromosome at a time with signed
/// blocks separated by whitespace, e.g. `(+1 -2 +3)(-4 +5)`. Edge sets are
/// comma-separated node pairs, e.g. `(2, 3), (4, 5), (6, 1)`. The `Display`
/// impls of the value types print the same notation.
use crate::error::{GraphError, Result};
use crate::genome::{Chromosome, Genome};
use crate::genome_graph::GenomeGraph;
use nom::{
    branch::alt,
    character::complete::{char, digit1, multispace0, multispace1, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    multi::{many0, separated_list0, separated_list1},
    sequence::{delimited, pair, preceded, separated_pair, terminated},
    IResult,
};
use std::str::FromStr;

fn signed_block(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), str::parse::<i64>)(input)
}

fn node(input: &str) -> IResult<&str, u64> {
    map_res(digit1, str::parse::<u64>)(input)
}

fn chromosome(input: &str) -> IResult<&str, Vec<i64>> {
    delimited(
        terminated(char('('), multispace0),
        separated_list1(multispace1, signed_block),
        preceded(multispace0, char(')')),
    )(input)
}

fn genome(input: &str) -> IResult<&str, Vec<Vec<i64>>> {
    preceded(multispace0, many0(terminated(chromosome, multispace0)))(input)
}

/// A comma with optional whitespace around it, or bare whitespace
fn separator(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(delimited(multispace0, char(','), multispace0)),
        multispace1,
    ))(input)
}

fn edge(input: &str) -> IResult<&str, (u64, u64)> {
    delimited(
        terminated(char('('), multispace0),
        separated_pair(node, separator, node),
        preceded(multispace0, char(')')),
    )(input)
}

fn edges(input: &str) -> IResult<&str, Vec<(u64, u64)>> {
    delimited(
        multispace0,
        separated_list0(separator, edge),
        multispace0,
    )(input)
}

fn run<'a, T>(
    kind: &'static str,
    parser: impl FnMut(&'a str) -> IResult<&'a str, T>,
    text: &'a str,
) -> Result<T> {
    match all_consuming(parser)(text) {
        Ok((_, value)) => Ok(value),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(GraphError::notation(kind, e.input))
        }
        Err(nom::Err::Incomplete(_)) => Err(GraphError::notation(kind, text)),
    }
}

/// Parse a genome such as `(+1 -2 +3)(-4 +5)`
pub fn parse_genome(text: &str) -> Result<Genome> {
    let values = run("genome", genome, text)?;
    Genome::from_values(&values)
}

/// Parse a single chromosome such as `(+1 -2 +3)`
pub fn parse_chromosome(text: &str) -> Result<Chromosome> {
    let values = run(
        "chromosome",
        delimited(multispace0, chromosome, multispace0),
        text,
    )?;
    Chromosome::from_values(&values)
}

/// Parse a colored-edge set such as `(2, 3), (4, 5), (6, 1)`
pub fn parse_edges(text: &str) -> Result<GenomeGraph> {
    let pairs = run("edge set", edges, text)?;
    GenomeGraph::from_values(&pairs)
}

impl FromStr for Genome {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        parse_genome(s)
    }
}

impl FromStr for Chromosome {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        parse_chromosome(s)
    }
}

impl FromStr for GenomeGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        parse_edges(s)
    }
}
