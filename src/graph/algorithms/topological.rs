//! Topological ordering of directed acyclic graphs.

use crate::graph::{algorithms::traversal::postorder, Graph, VertexId};

/// Computes a topological ordering of every vertex.
///
/// The order is the reverse of the depth-first post-order over the whole forest: a
/// vertex finishes only after everything reachable from it, so on a DAG every edge
/// `(u, v)` has `u` before `v`.
///
/// Acyclicity is not checked. On a graph with a cycle the result is still a permutation
/// of the vertices, but some edges will point backwards; use
/// [`find_cycle`](crate::algorithms::find_cycle) first when the input is untrusted.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use graphwalk::{algorithms::topological_sort, AdjacencyList, Graph, GraphConfig, VertexId};
///
/// // socks -> shoes, pants -> shoes, pants -> belt
/// let mut graph = AdjacencyList::with_config(GraphConfig::directed());
/// let socks = graph.add_vertex("socks");
/// let pants = graph.add_vertex("pants");
/// let shoes = graph.add_vertex("shoes");
/// let belt = graph.add_vertex("belt");
/// graph.add_edge(socks, shoes)?;
/// graph.add_edge(pants, shoes)?;
/// graph.add_edge(pants, belt)?;
///
/// let order = topological_sort(&graph);
/// let position = |v: VertexId| order.iter().position(|&x| x == v);
/// assert!(position(socks) < position(shoes));
/// assert!(position(pants) < position(belt));
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[must_use]
pub fn topological_sort<G: Graph>(graph: &G) -> Vec<VertexId> {
    let mut order = postorder(graph);
    order.reverse();
    log::debug!("topological order over {} vertices", order.len());
    order
}
