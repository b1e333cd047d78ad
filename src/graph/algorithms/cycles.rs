//! Cycle extraction.
//!
//! This module provides three ways to pull a concrete cycle out of a graph:
//!
//! - [`find_cycle`] - the first cycle closed by a back edge of a depth-first search
//! - [`restricted_find_cycle`] - a return path to vertex 0 on graphs of minimum degree 2
//! - [`cycle_from_circuit`] - the cycle closed by one given edge
//!
//! Every cycle is returned as a closed [`Walk`].

use crate::{
    graph::{
        algorithms::state::VisitState, storage::GraphCore, Graph, Neighbors, VertexId, Walk,
    },
    Error, Result,
};

/// Finds a cycle, if the graph has one.
///
/// Runs a depth-first search from every unvisited vertex in index order while keeping the
/// active path. The first back edge `(u, v)` closes the cycle formed by the path from
/// `v` down to `u`, and the walk `v, ..., u, v` is returned. In undirected graphs the
/// tree edge just arrived on does not count as a back edge, but a parallel copy of it
/// does, as does a self-loop.
///
/// Returns `None` when the graph is acyclic (a forest, or a DAG when directed).
///
/// # Examples
///
/// ```rust
/// use graphwalk::{algorithms::find_cycle, AdjacencyList, Graph, GraphConfig, VertexId};
///
/// let mut graph = AdjacencyList::create_empty_graph(4, GraphConfig::default());
/// for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
///     graph.add_edge(VertexId::new(u), VertexId::new(v))?;
/// }
///
/// let cycle = find_cycle(&graph).expect("square has a cycle");
/// assert_eq!(cycle.length(), 4);
/// assert!(cycle.is_closed());
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[must_use]
pub fn find_cycle<G: Graph>(graph: &G) -> Option<Walk> {
    let vertex_count = graph.vertex_count();
    let directed = graph.is_directed();
    let mut state = vec![VisitState::Unvisited; vertex_count];

    for root in graph.vertex_ids() {
        if state[root.index()] != VisitState::Unvisited {
            continue;
        }

        state[root.index()] = VisitState::InProgress;
        let mut path = vec![root];
        let mut stack = vec![(graph.neighbors(root), None::<VertexId>)];

        while let Some((neighbors, arrival)) = stack.last_mut() {
            let Some(next) = neighbors.next() else {
                stack.pop();
                if let Some(done) = path.pop() {
                    state[done.index()] = VisitState::Done;
                }
                continue;
            };

            if *arrival == Some(next) {
                *arrival = None;
                continue;
            }

            match state[next.index()] {
                VisitState::Unvisited => {
                    state[next.index()] = VisitState::InProgress;
                    let from = path.last().copied();
                    path.push(next);
                    stack.push((graph.neighbors(next), from.filter(|_| !directed)));
                }
                VisitState::InProgress => {
                    let start = path.iter().position(|&v| v == next)?;
                    let mut cycle = path[start..].to_vec();
                    cycle.push(next);
                    log::debug!("cycle found through {next}: {} edges", cycle.len() - 1);
                    return Walk::new(graph, &cycle).ok();
                }
                VisitState::Done => {}
            }
        }
    }

    log::debug!("no cycle in a graph of {vertex_count} vertices");
    None
}

/// Finds a cycle through vertex 0 on a graph where every vertex has degree at least 2.
///
/// The search leaves vertex 0 through the second entry of its adjacency list and, at
/// every vertex, only follows neighbours from the second adjacency entry onwards. It
/// backtracks out of dead ends and stops as soon as it steps back onto vertex 0 from a
/// vertex other than 0. The first adjacency entry of each vertex is never followed.
///
/// The returned walk is closed but need not be a simple cycle: when the second entry
/// of the first vertex reached is vertex 0 again, the walk is `0, x, 0`.
///
/// Returns `Ok(None)` if no such return path exists.
///
/// # Errors
///
/// Returns [`Error::PreconditionViolation`] if the graph is empty, some vertex has
/// degree below 2, or vertex 0 has fewer than two adjacency entries.
pub fn restricted_find_cycle<G: Graph>(graph: &G) -> Result<Option<Walk>> {
    if graph.vertex_count() == 0 {
        return Err(Error::PreconditionViolation(
            "the constrained cycle search needs at least one vertex".to_string(),
        ));
    }
    if let Some(vertex) = graph.vertex_ids().find(|&v| graph.vertices()[v.index()].degree() < 2) {
        return Err(Error::PreconditionViolation(format!(
            "every vertex needs degree 2 or more, {vertex} has {}",
            graph.vertices()[vertex.index()].degree()
        )));
    }

    let source = VertexId::new(0);
    let Some(first) = graph.neighbors(source).nth(1) else {
        return Err(Error::PreconditionViolation(format!(
            "{source} needs at least two adjacency entries"
        )));
    };

    let mut search = ReturnSearch {
        source,
        on_path: vec![false; graph.vertex_count()],
        path: vec![source, first],
    };

    if search.explore(graph, first, source) {
        log::debug!("constrained cycle found: {} edges", search.path.len() - 1);
        Walk::new(graph, &search.path).map(Some)
    } else {
        log::debug!("constrained cycle search found no return path to {source}");
        Ok(None)
    }
}

/// Backtracking state of [`restricted_find_cycle`].
struct ReturnSearch {
    source: VertexId,
    on_path: Vec<bool>,
    path: Vec<VertexId>,
}

impl ReturnSearch {
    fn explore<G: Neighbors>(&mut self, graph: &G, current: VertexId, parent: VertexId) -> bool {
        if current == self.source && parent != self.source {
            return true;
        }

        self.on_path[current.index()] = true;
        for next in graph.neighbors(current).skip(1) {
            if self.on_path[next.index()] {
                continue;
            }

            self.path.push(next);
            if self.explore(graph, next, current) {
                return true;
            }
            self.path.pop();
        }
        self.on_path[current.index()] = false;

        false
    }
}

/// Returns the cycle closed by the edge `(u, v)`.
///
/// For undirected graphs this searches for a path from `u` to `v` that does not use the
/// edge itself (a parallel copy is fine) and closes it with the edge, giving the walk
/// `u, ..., v, u`. For directed graphs it searches for a path from `v` back to `u` and
/// prefixes the edge, giving `u, v, ..., u`. A self-loop is its own cycle.
///
/// Returns `Ok(None)` if the edge lies on no cycle.
///
/// # Errors
///
/// Returns [`Error::InvalidIndex`] for an out-of-range endpoint and
/// [`Error::InvalidWalk`] if no edge joins `u` to `v`.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{algorithms::cycle_from_circuit, AdjacencyList, Graph, GraphConfig, VertexId};
///
/// // Triangle 0-1-2 with a pendant vertex 3
/// let mut graph = AdjacencyList::create_empty_graph(4, GraphConfig::default());
/// let [a, b, c, d] = [0, 1, 2, 3].map(VertexId::new);
/// for (u, v) in [(a, b), (b, c), (c, a), (c, d)] {
///     graph.add_edge(u, v)?;
/// }
///
/// let cycle = cycle_from_circuit(&graph, a, b)?.expect("edge a-b is on the triangle");
/// assert_eq!(cycle.vertices(), &[a, c, b, a]);
/// assert!(cycle_from_circuit(&graph, c, d)?.is_none());
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub fn cycle_from_circuit<G: Graph>(graph: &G, u: VertexId, v: VertexId) -> Result<Option<Walk>> {
    let core = graph.core();
    core.check_vertex(u)?;
    core.check_vertex(v)?;
    if core.find_edge_between(u, v).is_none() {
        return Err(Error::InvalidWalk(format!("no edge joins {u} and {v}")));
    }

    if u == v {
        return Walk::new(graph, &[u, u]).map(Some);
    }

    let cycle = if graph.is_directed() {
        path_avoiding(graph, core, v, u, None).map(|path| {
            let mut cycle = Vec::with_capacity(path.len() + 1);
            cycle.push(u);
            cycle.extend(path);
            cycle
        })
    } else {
        path_avoiding(graph, core, u, v, Some(v)).map(|mut path| {
            path.push(u);
            path
        })
    };

    match cycle {
        Some(cycle) => {
            log::debug!("edge {u}-{v} closes a cycle of {} edges", cycle.len() - 1);
            Walk::new(graph, &cycle).map(Some)
        }
        None => Ok(None),
    }
}

/// Depth-first path search from `start` to `target`.
///
/// When `skip` is set, its first occurrence in the adjacency list of `start` is not
/// followed, which excludes one edge `start-skip` from the search.
fn path_avoiding<G: Graph>(
    graph: &G,
    core: &GraphCore,
    start: VertexId,
    target: VertexId,
    skip: Option<VertexId>,
) -> Option<Vec<VertexId>> {
    let vertex_count = core.vertices().len();
    let mut parent: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut visited = vec![false; vertex_count];
    visited[start.index()] = true;

    let mut first: Vec<VertexId> = graph.neighbors(start).collect();
    if let Some(position) = skip.and_then(|s| first.iter().position(|&n| n == s)) {
        first.remove(position);
    }

    let mut stack: Vec<(VertexId, VertexId)> = first.iter().rev().map(|&n| (start, n)).collect();
    while let Some((from, vertex)) = stack.pop() {
        if visited[vertex.index()] {
            continue;
        }
        visited[vertex.index()] = true;
        parent[vertex.index()] = Some(from);

        if vertex == target {
            let mut path = vec![target];
            let mut current = target;
            while let Some(previous) = parent[current.index()] {
                path.push(previous);
                current = previous;
            }
            path.reverse();
            return Some(path);
        }

        let neighbors: Vec<VertexId> = graph.neighbors(vertex).collect();
        for &next in neighbors.iter().rev() {
            if !visited[next.index()] {
                stack.push((vertex, next));
            }
        }
    }

    None
}
