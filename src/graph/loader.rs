//! Text loaders for edge-list graph files.
//!
//! Two formats are supported:
//!
//! - Plain edge lists, one `from to weight` triple per line, 0-based ids.
//! - DIMACS `.gr` shortest-path files (`c` comments, a `p sp n m` problem
//!   line, `a from to weight` arc lines). DIMACS ids are 1-based and are
//!   shifted to the library's 0-based convention on load.
//!
//! The core engines accept an already materialized [`DirectedGraph`]; these
//! loaders are the thin collaborator layer in front of them.

use crate::graph::{DirectedGraph, Graph, Weight};
use crate::{Error, Result};
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

fn malformed(line: usize, reason: impl Into<String>) -> Error {
    Error::MalformedGraph {
        line,
        reason: reason.into(),
    }
}

fn parse_field<T: FromStr>(field: &str, line: usize, what: &str) -> Result<T> {
    field
        .parse()
        .map_err(|_| malformed(line, format!("invalid {what}: {field:?}")))
}

/// Reads a plain edge list (`from to weight` per line, 0-based ids).
///
/// Blank lines are skipped. The vertex count is one past the largest id
/// seen, so isolated trailing vertices cannot be expressed in this format.
pub fn read_edge_list<W, R>(reader: R) -> Result<DirectedGraph<W>>
where
    W: Weight + FromStr,
    R: BufRead,
{
    let mut edges: Vec<(usize, usize, W)> = Vec::new();
    let mut max_id = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let from: usize = match fields.next() {
            Some(f) => parse_field(f, line_no, "source id")?,
            None => continue,
        };
        let to: usize = fields
            .next()
            .ok_or_else(|| malformed(line_no, "missing target id"))
            .and_then(|f| parse_field(f, line_no, "target id"))?;
        let weight: W = fields
            .next()
            .ok_or_else(|| malformed(line_no, "missing weight"))
            .and_then(|f| parse_field(f, line_no, "weight"))?;
        if fields.next().is_some() {
            return Err(malformed(line_no, "trailing fields after weight"));
        }

        max_id = max_id.max(from).max(to);
        edges.push((from, to, weight));
    }

    if edges.is_empty() {
        return Err(malformed(0, "no edges found"));
    }

    let mut graph = DirectedGraph::with_vertices(max_id + 1);
    for (from, to, weight) in edges {
        graph.add_edge(from, to, weight)?;
    }

    info!(
        "loaded edge list: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads a DIMACS `.gr` shortest-path file, shifting ids to 0-based.
pub fn read_dimacs<W, R>(reader: R) -> Result<DirectedGraph<W>>
where
    W: Weight + FromStr,
    R: BufRead,
{
    let mut graph: Option<DirectedGraph<W>> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();

        match trimmed.chars().next() {
            None | Some('c') => continue,
            Some('p') => {
                let fields: Vec<&str> = trimmed.split_whitespace().collect();
                if fields.len() != 4 || fields[1] != "sp" {
                    return Err(malformed(line_no, "expected problem line `p sp <n> <m>`"));
                }
                let vertices: usize = parse_field(fields[2], line_no, "vertex count")?;
                graph = Some(DirectedGraph::with_vertices(vertices));
            }
            Some('a') => {
                let graph = graph
                    .as_mut()
                    .ok_or_else(|| malformed(line_no, "arc line before problem line"))?;
                let fields: Vec<&str> = trimmed.split_whitespace().collect();
                if fields.len() != 4 {
                    return Err(malformed(line_no, "expected arc line `a <from> <to> <weight>`"));
                }
                let from: usize = parse_field(fields[1], line_no, "source id")?;
                let to: usize = parse_field(fields[2], line_no, "target id")?;
                let weight: W = parse_field(fields[3], line_no, "weight")?;
                if from == 0 || to == 0 {
                    return Err(malformed(line_no, "DIMACS ids are 1-based"));
                }
                graph.add_edge(from - 1, to - 1, weight)?;
            }
            Some(other) => {
                return Err(malformed(line_no, format!("unknown line type {other:?}")));
            }
        }
    }

    let graph = graph.ok_or_else(|| malformed(0, "no problem line found"))?;
    info!(
        "loaded DIMACS graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Loads a graph file, picking the format from the extension (`.gr` means
/// DIMACS, anything else a plain edge list).
pub fn load_graph<W>(path: impl AsRef<Path>) -> Result<DirectedGraph<W>>
where
    W: Weight + FromStr,
{
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    if path.extension().is_some_and(|ext| ext == "gr") {
        read_dimacs(reader)
    } else {
        read_edge_list(reader)
    }
}
