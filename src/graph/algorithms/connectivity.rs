//! Connectivity and circuit tests for undirected graphs.
//!
//! These analyses treat the graph as undirected. On a directed graph they answer for
//! the out-edge structure only, which is rarely what a caller wants; the results are
//! documented as unspecified there.

use crate::graph::{
    algorithms::traversal::{depth_first_search, dfs},
    Graph, VertexId,
};

/// Returns `true` if every vertex is reachable from vertex 0.
///
/// The empty graph is not connected.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{algorithms::is_connected, AdjacencyList, Graph, GraphConfig, VertexId};
///
/// let mut graph = AdjacencyList::create_empty_graph(3, GraphConfig::default());
/// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
/// assert!(!is_connected(&graph));
///
/// graph.add_edge(VertexId::new(2), VertexId::new(1))?;
/// assert!(is_connected(&graph));
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[must_use]
pub fn is_connected<G: Graph>(graph: &G) -> bool {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return false;
    }

    let reached = dfs(graph, VertexId::new(0)).count();
    log::debug!("connectivity: {reached} of {vertex_count} vertices reachable from v0");
    reached == vertex_count
}

/// Returns the number of connected components.
#[must_use]
pub fn components<G: Graph>(graph: &G) -> usize {
    depth_first_search(graph).component_count()
}

/// Returns `true` if the graph contains a circuit.
///
/// A connected graph is a tree exactly when it has one edge fewer than it has
/// vertices. With a single component the graph has a circuit iff that count is off.
/// With several components the test is applied to the subgraph induced by each
/// component, and the graph is circuit-free only if every component passes it.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{algorithms::contains_circuit, AdjacencyList, Graph, GraphConfig, VertexId};
///
/// // Two components: a path 0-1 and a triangle 2-3-4
/// let mut graph = AdjacencyList::create_empty_graph(5, GraphConfig::default());
/// for (u, v) in [(0, 1), (2, 3), (3, 4)] {
///     graph.add_edge(VertexId::new(u), VertexId::new(v))?;
/// }
/// assert!(!contains_circuit(&graph));
///
/// graph.add_edge(VertexId::new(4), VertexId::new(2))?;
/// assert!(contains_circuit(&graph));
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[must_use]
pub fn contains_circuit<G: Graph>(graph: &G) -> bool {
    let forest = depth_first_search(graph);
    let count = forest.component_count();

    if count <= 1 {
        return graph.edge_count() + count != graph.vertex_count();
    }

    // The subgraph induced by a component holds every edge touching it
    let mut vertices = vec![0usize; count];
    let mut edges = vec![0usize; count];
    for vertex in graph.vertex_ids() {
        vertices[forest.component_of(vertex)] += 1;
    }
    for edge in graph.edges() {
        let (a, _) = edge.endpoints();
        edges[forest.component_of(a)] += 1;
    }

    let trees = (0..count)
        .filter(|&c| edges[c] + 1 == vertices[c])
        .count();
    log::debug!("circuit test: {trees} of {count} components are trees");
    trees != count
}
