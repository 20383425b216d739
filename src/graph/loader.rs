//! Tab-separated edge-list loader.
//!
//! ## Format
//!
//! - First line: `NUM_NODES<TAB>NUM_EDGES`. Both must be non-negative
//!   integers; they are informational only and a mismatch with the edges
//!   actually read is logged, not rejected.
//! - Every following line: two node identifiers separated by a tab. A run
//!   of three spaces is accepted in place of a tab. Extra fields are
//!   ignored and blank lines are skipped.
//!
//! ## Example
//! ```text
//! 4	2
//! 1	2
//! 3	4
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use super::adjacency::AdjacencyGraph;
use super::types::MutableGraph;
use crate::error::{IndSetError, Result};

/// Declared sizes from the header line.
struct Header {
    nodes: usize,
    edges: usize,
}

/// Loads an edge-list file into a graph with `String` node identifiers.
///
/// ## Errors
/// - [`IndSetError::Io`]: the file cannot be opened or read
/// - [`IndSetError::Parse`]: missing or non-numeric header, or an edge
///   line with fewer than two identifiers
///
/// ## Example
/// ```no_run
/// use u_indset::graph::{load_edge_list, MutableGraph};
///
/// let graph = load_edge_list("samples/ran50.txt")?;
/// println!("{} nodes, {} edges", graph.node_count(), graph.edge_count());
/// # Ok::<(), u_indset::IndSetError>(())
/// ```
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<AdjacencyGraph<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IndSetError::io(path, e))?;
    let graph = parse_lines(BufReader::new(file), path)?;
    info!(
        "loaded '{}': {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parses edge-list content from any buffered reader.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<AdjacencyGraph<String>> {
    parse_lines(reader, Path::new("<reader>"))
}

fn parse_lines<R: BufRead>(reader: R, origin: &Path) -> Result<AdjacencyGraph<String>> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => parse_header(&line.map_err(|e| IndSetError::io(origin, e))?)?,
        None => return Err(IndSetError::parse(1, "missing NUM_NODES/NUM_EDGES header")),
    };

    let mut graph = AdjacencyGraph::new();
    let mut edge_lines = 0usize;

    for (index, line) in lines.enumerate() {
        let line_num = index + 2;
        let line = line.map_err(|e| IndSetError::io(origin, e))?;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_fields(&line);
        if fields.len() < 2 {
            return Err(IndSetError::parse(
                line_num,
                format!("expected two node identifiers, got '{}'", line.trim()),
            ));
        }

        graph.add_edge(fields[0].to_string(), fields[1].to_string());
        edge_lines += 1;
    }

    if header.edges != edge_lines {
        warn!(
            "header declares {} edges but {} edge lines were read",
            header.edges, edge_lines
        );
    }
    if header.nodes != graph.node_count() {
        warn!(
            "header declares {} nodes but {} distinct nodes were read",
            header.nodes,
            graph.node_count()
        );
    }

    Ok(graph)
}

fn parse_header(line: &str) -> Result<Header> {
    let fields = split_fields(line);
    if fields.len() < 2 {
        return Err(IndSetError::parse(
            1,
            format!("expected 'NUM_NODES<TAB>NUM_EDGES', got '{}'", line.trim()),
        ));
    }

    let count = |field: &str, name: &str| {
        field.parse::<usize>().map_err(|_| {
            IndSetError::parse(1, format!("{name} must be a non-negative integer, got '{field}'"))
        })
    };

    Ok(Header {
        nodes: count(fields[0], "NUM_NODES")?,
        edges: count(fields[1], "NUM_EDGES")?,
    })
}

/// Splits a line on tabs, treating three consecutive spaces as a tab.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    for chunk in line.split('\t') {
        for field in chunk.split("   ") {
            let field = field.trim();
            if !field.is_empty() {
                fields.push(field);
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn parse(content: &str) -> Result<AdjacencyGraph<String>> {
        parse_edge_list(Cursor::new(content))
    }

    fn create_temp_graph(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_parse_tab_separated() {
        let graph = parse("3\t2\nA\tB\nB\tC\n").unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.are_adjacent(&"A".to_string(), &"B".to_string()));
        assert!(graph.are_adjacent(&"C".to_string(), &"B".to_string()));
    }

    #[test]
    fn test_three_spaces_act_as_tab() {
        let graph = parse("2\t1\n10   42\n").unwrap();
        assert!(graph.are_adjacent(&"10".to_string(), &"42".to_string()));
    }

    #[test]
    fn test_header_three_spaces() {
        let graph = parse("2   1\n1\t2").unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let graph = parse("4\t2\n1\t2\n\n3\t4\n\n").unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let graph = parse("2\t1\n1\t2\t0.5\n").unwrap();
        assert_eq!(graph.nodes(), vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_header_counts_not_enforced() {
        let graph = parse("100\t999\n1\t2\n").unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_header_only() {
        let graph = parse("0\t0\n").unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_missing_header() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, IndSetError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_non_numeric_header() {
        let err = parse("A\tB\nA\tB\n").unwrap_err();
        assert!(matches!(err, IndSetError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_single_field_edge_line() {
        let err = parse("2\t1\n1\t2\nlonely\n").unwrap_err();
        match err {
            IndSetError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("lonely"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let file = create_temp_graph("4\t2\n1\t2\n3\t4\n");
        let graph = load_edge_list(file.path()).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_edge_list("/nonexistent/graph.txt").unwrap_err();
        assert!(matches!(err, IndSetError::Io { .. }));
    }
}
