//! Adjacency-list graph representation.
//!
//! This module provides [`AdjacencyList`], the graph representation every algorithm in
//! this crate runs on. Each vertex owns a list of neighbour indices that is kept in
//! lockstep with the edge collection held by the embedded [`GraphCore`]: every edge has
//! a mirrored adjacency entry and vice versa.

use std::fmt;

use crate::{
    graph::{
        edge::{Edge, EdgeId, EdgeKey},
        storage::GraphCore,
        traits::{Graph, GraphBase, Neighbors},
        vertex::{Vertex, VertexId},
    },
    GraphConfig, Result,
};

/// A graph stored as per-vertex neighbour lists.
///
/// Adding the edge `(x, y)` appends `y` to the list of `x` and, for undirected graphs,
/// `x` to the list of `y`. Neighbours appear once per edge, in the order the edges were
/// added, so traversals are deterministic.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{AdjacencyList, Graph, GraphConfig, Neighbors, VertexId};
///
/// let mut graph = AdjacencyList::with_config(GraphConfig::directed());
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// let c = graph.add_vertex("c");
/// graph.add_edge(a, b)?;
/// graph.add_edge(a, c)?;
///
/// let out: Vec<VertexId> = graph.neighbors(a).collect();
/// assert_eq!(out, vec![b, c]);
/// assert!(!graph.is_neighbor(b, a));
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    /// Canonical vertex and edge storage
    core: GraphCore,
    /// Neighbour indices per vertex
    content: Vec<Vec<VertexId>>,
}

impl AdjacencyList {
    /// Creates an empty undirected graph with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the neighbour lists, indexed by vertex.
    #[must_use]
    pub fn content(&self) -> &[Vec<VertexId>] {
        &self.content
    }

    /// Returns the neighbour list of a vertex, or `None` if it does not exist.
    #[must_use]
    pub fn adjacent(&self, vertex: VertexId) -> Option<&[VertexId]> {
        self.content.get(vertex.index()).map(Vec::as_slice)
    }

    /// Removes one occurrence of `target` from the list of `owner`.
    fn unlink(&mut self, owner: VertexId, target: VertexId) {
        let list = &mut self.content[owner.index()];
        if let Some(position) = list.iter().position(|&n| n == target) {
            list.remove(position);
        }
    }
}

impl GraphBase for AdjacencyList {
    fn vertex_count(&self) -> usize {
        self.content.len()
    }
}

impl Neighbors for AdjacencyList {
    fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.content[vertex.index()].iter().copied()
    }
}

impl Graph for AdjacencyList {
    fn with_config(config: GraphConfig) -> Self {
        AdjacencyList {
            core: GraphCore::new(config),
            content: Vec::new(),
        }
    }

    fn core(&self) -> &GraphCore {
        &self.core
    }

    fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        self.content.push(Vec::new());
        self.core.push_vertex(label.into())
    }

    fn insert_edge(&mut self, u: VertexId, v: VertexId, label: Option<String>) -> Result<EdgeId> {
        let id = self.core.push_edge(u, v, label)?;

        self.content[u.index()].push(v);
        if !self.core.is_directed() {
            self.content[v.index()].push(u);
        }
        Ok(id)
    }

    fn remove_edge(&mut self, key: impl Into<EdgeKey>) -> Option<Edge> {
        let key = key.into();
        let id = self.core.find_edge(&key)?;

        // Stored endpoints are (source, target) when directed and (max, min) otherwise,
        // so `a` always holds `b` in its list.
        let (a, b) = self.core.edges()[id.index()].endpoints();
        self.unlink(a, b);
        if !self.core.is_directed() {
            self.unlink(b, a);
        }

        Some(self.core.take_edge(id))
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<Vertex> {
        self.core.check_vertex(vertex)?;

        self.content.remove(vertex.index());
        for list in &mut self.content {
            list.retain(|&n| n != vertex);
            for n in list.iter_mut() {
                if *n > vertex {
                    *n = VertexId::new(n.index() - 1);
                }
            }
        }

        Ok(self.core.take_vertex(vertex))
    }

    fn is_neighbor(&self, u: VertexId, v: VertexId) -> bool {
        self.content
            .get(u.index())
            .is_some_and(|list| list.contains(&v))
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.core, f)
    }
}
