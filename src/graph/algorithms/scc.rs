//! Strongly connected components using Tarjan's algorithm.
//!
//! A strongly connected component is a maximal set of vertices in which every vertex
//! can reach every other. This module finds them in a single depth-first pass and
//! collapses them into their condensation. A separate pass reports plain discovery and
//! low-link values.
//!
//! # Use Cases
//!
//! - **2-SAT**: a formula is unsatisfiable iff a literal and its negation share a component
//! - **Cycle structure**: a component with more than one vertex contains a cycle
//! - **Dependency analysis**: the condensation orders groups of mutually dependent items

use rustc_hash::FxHashSet;

use crate::{
    graph::{Graph, Neighbors, VertexId},
    Error, Result,
};

/// Discovery indices and low-link values from one depth-first pass.
///
/// Discovery indices are 0-based and follow the order vertices are first reached, roots
/// taken in index order. The low-link of a vertex is the smallest discovery index
/// reachable from its depth-first subtree through at most one edge into any vertex
/// already reached, whether or not that vertex's component is still open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowLink {
    discovery: Vec<usize>,
    low_link: Vec<usize>,
}

impl LowLink {
    /// Returns the discovery index of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the analysed graph.
    #[must_use]
    pub fn discovery(&self, vertex: VertexId) -> usize {
        self.discovery[vertex.index()]
    }

    /// Returns the low-link value of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the analysed graph.
    #[must_use]
    pub fn low_link(&self, vertex: VertexId) -> usize {
        self.low_link[vertex.index()]
    }

    /// Returns the low-link values indexed by vertex.
    #[must_use]
    pub fn values(&self) -> &[usize] {
        &self.low_link
    }
}

/// Computes the discovery and low-link values of a directed graph.
///
/// Every edge into a vertex that was already reached lowers the low-link of its tail
/// to the head's discovery index. Unlike [`strongly_connected_components`], cross edges
/// into closed components count too, so `low_link(v) == discovery(v)` only proves that
/// no edge leaves the subtree of `v` backwards.
///
/// # Errors
///
/// Returns [`Error::PreconditionViolation`] if the graph is undirected.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{algorithms::low_link_values, AdjacencyList, Graph, GraphConfig, VertexId};
///
/// // 0 -> 1 -> 2 -> 1, and 0 -> 3 -> 2
/// let mut graph = AdjacencyList::create_empty_graph(4, GraphConfig::directed());
/// let [a, b, c, d] = [0, 1, 2, 3].map(VertexId::new);
/// for (u, v) in [(a, b), (b, c), (c, b), (a, d), (d, c)] {
///     graph.add_edge(u, v)?;
/// }
///
/// let low = low_link_values(&graph)?;
/// assert_eq!(low.values(), &[0, 1, 1, 2]);
/// assert_eq!(low.discovery(d), 3);
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub fn low_link_values<G: Graph>(graph: &G) -> Result<LowLink> {
    require_directed(graph, "low-link values")?;

    let mut state = LowLinkState::new(graph.vertex_count());
    for vertex in graph.vertex_ids() {
        if state.discovery[vertex.index()].is_none() {
            state.visit(graph, vertex);
        }
    }

    Ok(LowLink {
        discovery: state
            .discovery
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect(),
        low_link: state.low_link,
    })
}

/// Internal state for the low-link pass.
struct LowLinkState {
    /// Discovery index for each vertex (None if not yet visited)
    discovery: Vec<Option<usize>>,
    low_link: Vec<usize>,
    time: usize,
}

impl LowLinkState {
    fn new(n: usize) -> Self {
        Self {
            discovery: vec![None; n],
            low_link: vec![0; n],
            time: 0,
        }
    }

    fn visit<G: Neighbors>(&mut self, graph: &G, u: VertexId) {
        let u_idx = u.index();

        self.discovery[u_idx] = Some(self.time);
        self.low_link[u_idx] = self.time;
        self.time += 1;

        for v in graph.neighbors(u) {
            let v_idx = v.index();

            match self.discovery[v_idx] {
                None => {
                    self.visit(graph, v);
                    self.low_link[u_idx] = self.low_link[u_idx].min(self.low_link[v_idx]);
                }
                Some(v_disc) => {
                    self.low_link[u_idx] = self.low_link[u_idx].min(v_disc);
                }
            }
        }
    }
}

/// Computes the strongly connected components of a directed graph.
///
/// Uses Tarjan's algorithm: every vertex gets a discovery index and a low-link value,
/// and an explicit stack holds the vertices whose component is not closed yet. The
/// `on_stack` marks are kept apart from the visited marks, since a finished vertex may
/// still belong to an open component. When `lowlink[v] == index[v]`, `v` roots a
/// component and the stack is popped down to it.
///
/// Components are returned in the order they close, which is a reverse topological
/// order of the condensation: if an edge leads from component A to component B, B
/// comes first. Within a component, vertices appear in pop order.
///
/// # Errors
///
/// Returns [`Error::PreconditionViolation`] if the graph is undirected.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V), with recursion depth up to V
///
/// # Examples
///
/// ```rust
/// use graphwalk::{
///     algorithms::strongly_connected_components, AdjacencyList, Graph, GraphConfig, VertexId,
/// };
///
/// // Cycle 0 -> 1 -> 2 -> 0 feeding into 3
/// let mut graph = AdjacencyList::create_empty_graph(4, GraphConfig::directed());
/// let [a, b, c, d] = [0, 1, 2, 3].map(VertexId::new);
/// for (u, v) in [(a, b), (b, c), (c, a), (c, d)] {
///     graph.add_edge(u, v)?;
/// }
///
/// let sccs = strongly_connected_components(&graph)?;
/// assert_eq!(sccs, vec![vec![d], vec![c, b, a]]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub fn strongly_connected_components<G: Graph>(graph: &G) -> Result<Vec<Vec<VertexId>>> {
    require_directed(graph, "strongly connected components")?;

    let sccs = run_tarjan(graph).sccs;
    log::debug!(
        "{} strongly connected components over {} vertices",
        sccs.len(),
        graph.vertex_count()
    );
    Ok(sccs)
}

fn require_directed<G: Graph>(graph: &G, analysis: &str) -> Result<()> {
    if graph.is_directed() {
        Ok(())
    } else {
        Err(Error::PreconditionViolation(format!(
            "{analysis} need a directed graph"
        )))
    }
}

fn run_tarjan<G: Neighbors>(graph: &G) -> TarjanState {
    let vertex_count = graph.vertex_count();
    let mut state = TarjanState::new(vertex_count);

    for vertex in graph.vertex_ids() {
        if state.index[vertex.index()].is_none() {
            state.strongconnect(graph, vertex);
        }
    }

    state
}

/// Internal state for Tarjan's algorithm.
struct TarjanState {
    /// Discovery index for each vertex (None if not yet visited)
    index: Vec<Option<usize>>,
    /// Lowlink value for each vertex
    lowlink: Vec<usize>,
    /// Whether a vertex is currently on the stack
    on_stack: Vec<bool>,
    /// Vertices of components not closed yet
    stack: Vec<VertexId>,
    /// Current index counter
    current_index: usize,
    /// Closed components, in closing order
    sccs: Vec<Vec<VertexId>>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            current_index: 0,
            sccs: Vec::new(),
        }
    }

    fn strongconnect<G: Neighbors>(&mut self, graph: &G, v: VertexId) {
        let v_idx = v.index();

        self.index[v_idx] = Some(self.current_index);
        self.lowlink[v_idx] = self.current_index;
        self.current_index += 1;
        self.stack.push(v);
        self.on_stack[v_idx] = true;

        for w in graph.neighbors(v) {
            let w_idx = w.index();

            match self.index[w_idx] {
                None => {
                    self.strongconnect(graph, w);
                    self.lowlink[v_idx] = self.lowlink[v_idx].min(self.lowlink[w_idx]);
                }
                // w is still open, hence in the current component
                Some(w_index) if self.on_stack[w_idx] => {
                    self.lowlink[v_idx] = self.lowlink[v_idx].min(w_index);
                }
                Some(_) => {}
            }
        }

        if self.index[v_idx] == Some(self.lowlink[v_idx]) {
            let mut scc = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.on_stack[w.index()] = false;
                scc.push(w);
                if w == v {
                    break;
                }
            }
            self.sccs.push(scc);
        }
    }
}

/// Collapses each strongly connected component to a single node.
///
/// Returns the component position of every vertex (its index in `sccs`) and the
/// deduplicated edges between distinct components, in the order first seen. The
/// resulting graph is always acyclic.
///
/// Every vertex of `graph` must appear in exactly one component of `sccs`.
pub fn condensation<G: Graph>(
    graph: &G,
    sccs: &[Vec<VertexId>],
) -> (Vec<usize>, Vec<(usize, usize)>) {
    let mut vertex_to_scc = vec![0; graph.vertex_count()];
    for (scc_idx, scc) in sccs.iter().enumerate() {
        for &vertex in scc {
            vertex_to_scc[vertex.index()] = scc_idx;
        }
    }

    let mut edges = Vec::new();
    let mut seen = FxHashSet::default();
    for from in graph.vertex_ids() {
        let from_scc = vertex_to_scc[from.index()];
        for to in graph.neighbors(from) {
            let to_scc = vertex_to_scc[to.index()];
            if from_scc != to_scc && seen.insert((from_scc, to_scc)) {
                edges.push((from_scc, to_scc));
            }
        }
    }

    (vertex_to_scc, edges)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{
        algorithms::{condensation, low_link_values, strongly_connected_components},
        AdjacencyList, Error, Graph, GraphConfig, VertexId,
    };

    fn vid(index: usize) -> VertexId {
        VertexId::new(index)
    }

    fn digraph(n: usize, edges: &[(usize, usize)]) -> AdjacencyList {
        let mut graph = AdjacencyList::create_empty_graph(n, GraphConfig::directed());
        for &(u, v) in edges {
            graph.add_edge(vid(u), vid(v)).unwrap();
        }
        graph
    }

    fn as_sets(sccs: &[Vec<VertexId>]) -> Vec<HashSet<usize>> {
        sccs.iter()
            .map(|scc| scc.iter().map(|v| v.index()).collect())
            .collect()
    }

    #[test]
    fn test_scc_empty_graph() {
        let graph = AdjacencyList::with_config(GraphConfig::directed());
        assert_eq!(strongly_connected_components(&graph), Ok(Vec::new()));
    }

    #[test]
    fn test_scc_undirected_is_rejected() {
        let graph = AdjacencyList::new();
        assert!(matches!(
            strongly_connected_components(&graph),
            Err(Error::PreconditionViolation(_))
        ));
        assert!(matches!(
            low_link_values(&graph),
            Err(Error::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_scc_dag_is_singletons() {
        let graph = digraph(3, &[(0, 1), (1, 2)]);
        let sccs = strongly_connected_components(&graph).unwrap();

        assert_eq!(sccs, vec![vec![vid(2)], vec![vid(1)], vec![vid(0)]]);
    }

    #[test]
    fn test_scc_two_cycles() {
        // {0, 1} -> {2, 3}, plus an isolated 4
        let graph = digraph(5, &[(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]);
        let sccs = strongly_connected_components(&graph).unwrap();

        assert_eq!(
            as_sets(&sccs),
            vec![
                HashSet::from([2, 3]),
                HashSet::from([0, 1]),
                HashSet::from([4]),
            ]
        );
    }

    #[test]
    fn test_scc_self_loop() {
        let graph = digraph(2, &[(0, 0), (0, 1)]);
        let sccs = strongly_connected_components(&graph).unwrap();
        assert_eq!(sccs, vec![vec![vid(1)], vec![vid(0)]]);
    }

    #[test]
    fn test_low_link_values() {
        // 0 -> 1 -> 2 -> 0, 2 -> 3
        let graph = digraph(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        let low = low_link_values(&graph).unwrap();

        assert_eq!(low.values(), &[0, 0, 0, 3]);
        assert_eq!(low.discovery(vid(3)), 3);
        assert_eq!(low.discovery(vid(2)), 2);
    }

    #[test]
    fn test_low_link_counts_cross_edges() {
        // 2 is a second root whose only edge crosses into the finished 1
        let graph = digraph(3, &[(0, 1), (2, 1)]);
        let low = low_link_values(&graph).unwrap();

        assert_eq!(low.values(), &[0, 1, 1]);
        assert_eq!(low.discovery(vid(2)), 2);

        // The component search still sees three singletons
        let sccs = strongly_connected_components(&graph).unwrap();
        assert_eq!(sccs.len(), 3);
    }

    #[test]
    fn test_low_link_cross_edge_within_tree() {
        // 1 is finished before 0 -> 2 -> 1 reaches it again
        let graph = digraph(3, &[(0, 1), (0, 2), (2, 1)]);
        let low = low_link_values(&graph).unwrap();
        assert_eq!(low.values(), &[0, 1, 1]);
    }

    #[test]
    fn test_condensation() {
        let graph = digraph(5, &[(0, 1), (1, 0), (1, 2), (0, 2), (2, 3), (3, 2), (3, 4)]);
        let sccs = strongly_connected_components(&graph).unwrap();
        let (vertex_to_scc, edges) = condensation(&graph, &sccs);

        assert_eq!(vertex_to_scc[0], vertex_to_scc[1]);
        assert_eq!(vertex_to_scc[2], vertex_to_scc[3]);
        assert_ne!(vertex_to_scc[0], vertex_to_scc[2]);
        assert_eq!(edges.len(), 2);

        for &(from, to) in &edges {
            // Closing order is reverse topological
            assert!(from > to);
        }
    }
}
