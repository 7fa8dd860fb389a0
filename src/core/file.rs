use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, warn};

use crate::{errors::KgCoreError, Hypergraph, VertexId};

/// Loads a hypergraph from a text file, one hyperedge per line.
///
/// Empty lines and lines starting with `#` are ignored. Tokens are
/// comma-separated when the line contains a comma, whitespace-separated
/// otherwise. Each token parses as a non-negative integer vertex id;
/// malformed tokens are logged and skipped. Duplicate vertices within a
/// line collapse, duplicate lines are preserved.
pub fn load_hypergraph<P>(path: P) -> Result<Hypergraph, KgCoreError>
where
    P: AsRef<Path>,
{
    let file = File::open(&path).map_err(|source| KgCoreError::InputOpen {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut hypergraph = Hypergraph::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = if line.contains(',') {
            line.split(',').map(str::trim).collect()
        } else {
            line.split_whitespace().collect()
        };

        let mut vertices = Vec::with_capacity(tokens.len());

        for token in tokens {
            if token.is_empty() {
                continue;
            }

            match token.parse::<usize>() {
                Ok(id) => vertices.push(VertexId(id)),
                Err(_) => {
                    warn!("Skipping malformed token {token:?} on line {}", index + 1);
                }
            }
        }

        if vertices.is_empty() {
            continue;
        }

        hypergraph.add_hyperedge(vertices);
    }

    debug!(
        "Loaded {} vertices and {} hyperedges",
        hypergraph.count_vertices(),
        hypergraph.count_hyperedges()
    );

    Ok(hypergraph)
}
