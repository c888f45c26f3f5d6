//! Line based record parsing.
//!
//! Records are whitespace-delimited, one per line. Blank lines and lines starting with `#`
//! are skipped, but still counted for line numbers.

use std::str::FromStr;

use arcgraph_core::{Position, Weight};

use crate::errors::{LoadError, Result};

/// `name x y` line of a node list.
#[derive(Clone, PartialEq, Debug)]
pub struct NodeRecord {
    pub name: String,
    pub position: Position,
    pub line: usize,
}

/// `from to weight` line of an arc list. Endpoints are node slot indices.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ArcRecord {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
    pub line: usize,
}

/// Parse a node list.
pub fn parse_nodes(text: &str) -> Result<Vec<NodeRecord>> {
    records(text, 3)
        .map(|res| -> Result<NodeRecord> {
            let (line, fields) = res?;
            let x = coordinate(line, fields[1])?;
            let y = coordinate(line, fields[2])?;
            Ok(NodeRecord {
                name: fields[0].to_string(),
                position: Position::new(x, y),
                line,
            })
        })
        .collect()
}

/// Parse an arc list.
pub fn parse_arcs(text: &str) -> Result<Vec<ArcRecord>> {
    records(text, 3)
        .map(|res| -> Result<ArcRecord> {
            let (line, fields) = res?;
            Ok(ArcRecord {
                from: number(line, fields[0])?,
                to: number(line, fields[1])?,
                weight: number(line, fields[2])?,
                line,
            })
        })
        .collect()
}

/// Non-empty, non-comment lines split into exactly `expected` fields, with their line numbers.
fn records(text: &str, expected: usize) -> impl Iterator<Item = Result<(usize, Vec<&str>)>> + '_ {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(move |(line, text)| {
            let fields = text.split_whitespace().collect::<Vec<_>>();
            if fields.len() == expected {
                Ok((line, fields))
            } else {
                Err(LoadError::FieldCount { line, expected, found: fields.len() })
            }
        })
}

fn number<T: FromStr>(line: usize, text: &str) -> Result<T> {
    text.parse().map_err(|_| LoadError::BadNumber { line, text: text.to_string() })
}

fn coordinate(line: usize, text: &str) -> Result<f64> {
    let value: f64 = number(line, text)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LoadError::BadNumber { line, text: text.to_string() })
    }
}
