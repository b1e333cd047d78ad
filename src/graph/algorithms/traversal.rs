//! Depth-first traversal.
//!
//! This module provides the traversal engine every structural analysis builds on.
//!
//! # Algorithms
//!
//! - [`depth_first_search`] - Full-forest traversal with edge classification,
//!   timestamps, and component numbering
//! - [`dfs`] - Iterative depth-first search from one vertex (pre-order)
//! - [`postorder`] - Full-forest post-order
//!
//! All state lives in side tables allocated per call, and every traversal uses an
//! explicit stack, so depth is bounded by memory rather than the native call stack.

use strum::EnumCount;

use crate::graph::{
    algorithms::state::{EdgeKind, VisitState},
    Graph, Neighbors, VertexId,
};

/// The result of a full depth-first traversal.
///
/// Every vertex is reached: each unvisited vertex, taken in index order, roots a new
/// tree. Two clocks are recorded per vertex:
///
/// - `entry_order` / `exit_order` count pushes and pops separately, each starting at 1
///   and advancing once per vertex across the whole forest;
/// - `discovery` / `finish` share a single clock that advances on both events, so
///   `discovery < finish` holds for every vertex and the `[discovery, finish]`
///   intervals of two vertices are either nested or disjoint.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{algorithms, AdjacencyList, EdgeKind, Graph, GraphConfig, VertexId};
///
/// // Triangle 0-1-2 and an isolated vertex 3
/// let mut graph = AdjacencyList::create_empty_graph(4, GraphConfig::default());
/// let [a, b, c, d] = [0, 1, 2, 3].map(VertexId::new);
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
/// graph.add_edge(c, a)?;
///
/// let forest = algorithms::depth_first_search(&graph);
/// assert_eq!(forest.component_count(), 2);
/// assert_eq!(forest.count(EdgeKind::Tree), 2);
/// assert_eq!(forest.count(EdgeKind::Back), 1);
/// assert_eq!(forest.component_of(d), 1);
/// assert!(forest.discovery(a) < forest.discovery(c));
/// assert!(forest.finish(c) < forest.finish(a));
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsForest {
    /// Tree roots, in the order they were chosen
    roots: Vec<VertexId>,
    /// 0-based component (tree) number per vertex
    component: Vec<usize>,
    /// 1-based push counter per vertex
    entry_order: Vec<usize>,
    /// 1-based pop counter per vertex
    exit_order: Vec<usize>,
    /// Shared-clock entry time per vertex
    discovery: Vec<usize>,
    /// Shared-clock exit time per vertex
    finish: Vec<usize>,
    /// Classified edges as `(from, to)`, indexed by `EdgeKind as usize`
    edges: [Vec<(VertexId, VertexId)>; EdgeKind::COUNT],
}

impl DfsForest {
    fn new(vertex_count: usize) -> Self {
        DfsForest {
            roots: Vec::new(),
            component: vec![0; vertex_count],
            entry_order: vec![0; vertex_count],
            exit_order: vec![0; vertex_count],
            discovery: vec![0; vertex_count],
            finish: vec![0; vertex_count],
            edges: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Returns the number of trees in the forest.
    ///
    /// For undirected graphs this is the number of connected components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.roots.len()
    }

    /// Returns the tree roots in the order they were chosen.
    #[must_use]
    pub fn roots(&self) -> &[VertexId] {
        &self.roots
    }

    /// Returns the 0-based number of the tree containing `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the traversed graph.
    #[must_use]
    pub fn component_of(&self, vertex: VertexId) -> usize {
        self.component[vertex.index()]
    }

    /// Returns the 1-based push counter value assigned when `vertex` was entered.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the traversed graph.
    #[must_use]
    pub fn entry_order(&self, vertex: VertexId) -> usize {
        self.entry_order[vertex.index()]
    }

    /// Returns the 1-based pop counter value assigned when `vertex` was left.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the traversed graph.
    #[must_use]
    pub fn exit_order(&self, vertex: VertexId) -> usize {
        self.exit_order[vertex.index()]
    }

    /// Returns the shared-clock time at which `vertex` was entered.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the traversed graph.
    #[must_use]
    pub fn discovery(&self, vertex: VertexId) -> usize {
        self.discovery[vertex.index()]
    }

    /// Returns the shared-clock time at which `vertex` was left.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the traversed graph.
    #[must_use]
    pub fn finish(&self, vertex: VertexId) -> usize {
        self.finish[vertex.index()]
    }

    /// Returns the edges of the given class as `(from, to)` pairs, in classification
    /// order.
    #[must_use]
    pub fn edges(&self, kind: EdgeKind) -> &[(VertexId, VertexId)] {
        &self.edges[kind as usize]
    }

    /// Returns the tree edges.
    #[must_use]
    pub fn tree_edges(&self) -> &[(VertexId, VertexId)] {
        self.edges(EdgeKind::Tree)
    }

    /// Returns the back edges.
    #[must_use]
    pub fn back_edges(&self) -> &[(VertexId, VertexId)] {
        self.edges(EdgeKind::Back)
    }

    /// Returns the number of edges of the given class.
    #[must_use]
    pub fn count(&self, kind: EdgeKind) -> usize {
        self.edges[kind as usize].len()
    }

    /// Returns the number of classified edges over all classes.
    ///
    /// Every edge of the graph is classified exactly once, so this equals the edge count.
    #[must_use]
    pub fn classified_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}

/// One vertex on the active path together with its remaining neighbours.
struct Frame<I> {
    vertex: VertexId,
    neighbors: I,
    /// Undirected only: the parent entry still to be skipped in `neighbors`
    arrival: Option<VertexId>,
    /// Undirected only: toggles on each sighting of a self-loop entry
    loop_parity: bool,
}

/// Mutable bookkeeping of one [`depth_first_search`] call.
struct Search {
    forest: DfsForest,
    state: Vec<VisitState>,
    clock: usize,
    pushes: usize,
    pops: usize,
}

impl Search {
    fn enter(&mut self, vertex: VertexId) {
        let i = vertex.index();
        self.state[i] = VisitState::InProgress;
        self.forest.component[i] = self.forest.roots.len() - 1;
        self.forest.entry_order[i] = self.pushes;
        self.forest.discovery[i] = self.clock;
        self.pushes += 1;
        self.clock += 1;
    }

    fn exit(&mut self, vertex: VertexId) {
        let i = vertex.index();
        self.state[i] = VisitState::Done;
        self.forest.exit_order[i] = self.pops;
        self.forest.finish[i] = self.clock;
        self.pops += 1;
        self.clock += 1;
    }

    fn record(&mut self, kind: EdgeKind, from: VertexId, to: VertexId) {
        log::trace!("{kind:?} edge {from} -> {to}");
        self.forest.edges[kind as usize].push((from, to));
    }
}

/// Runs a depth-first search over the whole graph.
///
/// Each unvisited vertex in index order roots a new tree. Edges are classified as:
///
/// - [`EdgeKind::Tree`] when the target is unvisited;
/// - [`EdgeKind::Back`] when the target is in progress (an ancestor, or the vertex
///   itself for a self-loop);
/// - for directed graphs only, [`EdgeKind::Forward`] or [`EdgeKind::Cross`] when the
///   target is done, depending on whether it was discovered after or before the source.
///
/// In undirected graphs every edge is seen from both endpoints but classified once: the
/// entry for the tree edge just arrived on is skipped once (so a parallel edge to the
/// parent is still a back edge), a self-loop yields a single back edge, and sightings
/// of finished vertices are the far side of edges already classified.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the side tables and stack, plus O(E) for the edge lists
#[must_use]
pub fn depth_first_search<G: Graph>(graph: &G) -> DfsForest {
    let vertex_count = graph.vertex_count();
    let directed = graph.is_directed();

    let mut search = Search {
        forest: DfsForest::new(vertex_count),
        state: vec![VisitState::Unvisited; vertex_count],
        clock: 1,
        pushes: 1,
        pops: 1,
    };

    for root in graph.vertex_ids() {
        if search.state[root.index()] != VisitState::Unvisited {
            continue;
        }

        search.forest.roots.push(root);
        search.enter(root);
        let mut stack = vec![Frame {
            vertex: root,
            neighbors: graph.neighbors(root),
            arrival: None,
            loop_parity: false,
        }];

        while let Some(frame) = stack.last_mut() {
            let from = frame.vertex;
            let Some(to) = frame.neighbors.next() else {
                search.exit(from);
                stack.pop();
                continue;
            };

            if !directed {
                if frame.arrival == Some(to) {
                    frame.arrival = None;
                    continue;
                }
                if to == from {
                    frame.loop_parity = !frame.loop_parity;
                    if !frame.loop_parity {
                        continue;
                    }
                }
            }

            match search.state[to.index()] {
                VisitState::Unvisited => {
                    search.record(EdgeKind::Tree, from, to);
                    search.enter(to);
                    stack.push(Frame {
                        vertex: to,
                        neighbors: graph.neighbors(to),
                        arrival: (!directed).then_some(from),
                        loop_parity: false,
                    });
                }
                VisitState::InProgress => search.record(EdgeKind::Back, from, to),
                VisitState::Done if directed => {
                    let kind = if search.forest.discovery(from) < search.forest.discovery(to) {
                        EdgeKind::Forward
                    } else {
                        EdgeKind::Cross
                    };
                    search.record(kind, from, to);
                }
                VisitState::Done => {}
            }
        }
    }

    let forest = search.forest;
    log::debug!(
        "depth-first search over {} vertices: {} trees, {} tree / {} back / {} forward / {} cross edges",
        vertex_count,
        forest.component_count(),
        forest.count(EdgeKind::Tree),
        forest.count(EdgeKind::Back),
        forest.count(EdgeKind::Forward),
        forest.count(EdgeKind::Cross),
    );
    forest
}

/// Depth-first search iterator over the vertices reachable from a start vertex.
///
/// Visits each reachable vertex exactly once in pre-order.
pub struct DfsIterator<'g, G: Neighbors> {
    graph: &'g G,
    stack: Vec<VertexId>,
    visited: Vec<bool>,
}

impl<'g, G: Neighbors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        if start.index() >= vertex_count {
            return DfsIterator {
                graph,
                stack: Vec::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; vertex_count];
        visited[start.index()] = true;

        DfsIterator {
            graph,
            stack: vec![start],
            visited,
        }
    }
}

impl<G: Neighbors> Iterator for DfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.stack.pop()?;

        // Push in reverse so neighbours are visited in adjacency order
        let neighbors: Vec<VertexId> = self.graph.neighbors(vertex).collect();
        for &next in neighbors.iter().rev() {
            if !self.visited[next.index()] {
                self.visited[next.index()] = true;
                self.stack.push(next);
            }
        }

        Some(vertex)
    }
}

/// Returns a depth-first iterator starting from `start`.
///
/// Vertices not reachable from `start` are not visited; an out-of-range start yields
/// nothing.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{algorithms::dfs, AdjacencyList, Graph, GraphConfig, VertexId};
///
/// let mut graph = AdjacencyList::create_empty_graph(4, GraphConfig::directed());
/// let [a, b, c, d] = [0, 1, 2, 3].map(VertexId::new);
/// graph.add_edge(a, b)?;
/// graph.add_edge(b, c)?;
/// graph.add_edge(d, a)?;
///
/// let reached: Vec<VertexId> = dfs(&graph, a).collect();
/// assert_eq!(reached, vec![a, b, c]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub fn dfs<G: Neighbors>(graph: &G, start: VertexId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Computes the post-order of a depth-first traversal of the whole graph.
///
/// Roots are taken in index order, as in [`depth_first_search`]. A vertex appears after
/// every vertex first reached through it.
#[allow(clippy::items_after_statements)]
#[must_use]
pub fn postorder<G: Neighbors>(graph: &G) -> Vec<VertexId> {
    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut result = Vec::with_capacity(vertex_count);

    #[derive(Clone, Copy)]
    enum State {
        Enter,
        Exit,
    }

    for root in graph.vertex_ids() {
        let mut stack = vec![(root, State::Enter)];

        while let Some((vertex, state)) = stack.pop() {
            match state {
                State::Enter => {
                    if visited[vertex.index()] {
                        continue;
                    }
                    visited[vertex.index()] = true;

                    // Exit is processed after every child pushed below
                    stack.push((vertex, State::Exit));

                    let neighbors: Vec<VertexId> = graph.neighbors(vertex).collect();
                    for &next in neighbors.iter().rev() {
                        if !visited[next.index()] {
                            stack.push((next, State::Enter));
                        }
                    }
                }
                State::Exit => result.push(vertex),
            }
        }
    }

    result
}
