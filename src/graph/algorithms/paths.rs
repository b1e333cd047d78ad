//! Simple-path enumeration.

use crate::{
    graph::{Graph, VertexId, Walk},
    Result,
};

/// Enumerates every simple path from `source` to `destination`.
///
/// Paths are found by a backtracking depth-first search that never revisits a vertex on
/// the current path, so the number of results, and the running time, can be exponential
/// in the vertex count. Paths come out in adjacency order. When `source` equals
/// `destination` the result is the single zero-length walk.
///
/// The graph is assumed simple: a neighbour listed twice because of parallel edges
/// produces the same path twice, and self-loops are ignored.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidIndex`] if either endpoint is out of range.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{algorithms::all_paths_between, AdjacencyList, Graph, GraphConfig, VertexId};
///
/// // Square 0-1-2-3-0
/// let mut graph = AdjacencyList::create_empty_graph(4, GraphConfig::simple());
/// for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
///     graph.add_edge(VertexId::new(u), VertexId::new(v))?;
/// }
///
/// let paths = all_paths_between(&graph, VertexId::new(0), VertexId::new(2))?;
/// assert_eq!(paths.len(), 2);
/// assert!(paths.iter().all(|p| p.length() == 2));
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub fn all_paths_between<G: Graph>(
    graph: &G,
    source: VertexId,
    destination: VertexId,
) -> Result<Vec<Walk>> {
    graph.core().check_vertex(source)?;
    graph.core().check_vertex(destination)?;

    let mut search = PathSearch {
        destination,
        on_path: vec![false; graph.vertex_count()],
        path: vec![source],
        found: Vec::new(),
    };
    search.extend(graph, source)?;

    log::debug!(
        "{} simple paths from {source} to {destination}",
        search.found.len()
    );
    Ok(search.found)
}

/// Returns one simple path from `source` to `destination`, if any exists.
///
/// This is the last path produced by [`all_paths_between`].
///
/// # Errors
///
/// Returns [`crate::Error::InvalidIndex`] if either endpoint is out of range.
pub fn walk_between<G: Graph>(
    graph: &G,
    source: VertexId,
    destination: VertexId,
) -> Result<Option<Walk>> {
    Ok(all_paths_between(graph, source, destination)?.pop())
}

/// Backtracking state of [`all_paths_between`].
struct PathSearch {
    destination: VertexId,
    on_path: Vec<bool>,
    path: Vec<VertexId>,
    found: Vec<Walk>,
}

impl PathSearch {
    fn extend<G: Graph>(&mut self, graph: &G, current: VertexId) -> Result<()> {
        if current == self.destination {
            self.found.push(Walk::new(graph, &self.path)?);
            return Ok(());
        }

        self.on_path[current.index()] = true;
        for next in graph.neighbors(current) {
            if self.on_path[next.index()] {
                continue;
            }

            self.path.push(next);
            self.extend(graph, next)?;
            self.path.pop();
        }
        self.on_path[current.index()] = false;

        Ok(())
    }
}
