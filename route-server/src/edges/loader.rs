//! CSV edge list parser.
//!
//! The format has no header row. Rows starting with `#` are comments and
//! blank rows are ignored. Fields are trimmed and columns beyond the
//! fourth are ignored. Each row must describe a valid edge: non-empty
//! station names and finite, non-negative distance and time.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::domain::Edge;

use super::error::EdgeListError;

/// Parse an edge list from any reader.
///
/// Stops at the first invalid row; the error carries its line number.
pub fn parse_edges<R: Read>(reader: R) -> Result<Vec<Edge>, EdgeListError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut edges = Vec::new();

    for row in csv_reader.records() {
        let record = row?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.iter().all(str::is_empty) {
            continue;
        }

        edges.push(parse_record(&record, line)?);
    }

    debug!(edges = edges.len(), "Parsed edge list");
    Ok(edges)
}

/// Parse an edge list held in memory.
///
/// # Examples
///
/// ```
/// use route_server::edges::parse_edges_str;
///
/// let edges = parse_edges_str("# a, b, km, min\nBugis, Lavender, 1.1, 5\n").unwrap();
/// assert_eq!(edges.len(), 1);
/// assert_eq!(edges[0].a.as_str(), "Bugis");
/// ```
pub fn parse_edges_str(text: &str) -> Result<Vec<Edge>, EdgeListError> {
    parse_edges(text.as_bytes())
}

/// Load an edge list from a CSV file.
pub fn load_edges(path: impl AsRef<Path>) -> Result<Vec<Edge>, EdgeListError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let edges = parse_edges(file)?;

    info!(path = %path.display(), edges = edges.len(), "Loaded edge list");
    Ok(edges)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Edge, EdgeListError> {
    if record.len() < 4 {
        return Err(EdgeListError::MissingField {
            line,
            found: record.len(),
        });
    }

    let distance_km = parse_number(&record[2], "distance", line)?;
    let time_min = parse_number(&record[3], "time", line)?;

    let edge = Edge::new(&record[0], &record[1], distance_km, time_min);
    edge.validate()
        .map_err(|source| EdgeListError::InvalidEdge { line, source })?;

    Ok(edge)
}

fn parse_number(value: &str, field: &'static str, line: u64) -> Result<f64, EdgeListError> {
    value.parse().map_err(|_| EdgeListError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}
