//! Representation-independent graph storage.
//!
//! [`GraphCore`] owns the canonical vertex and edge sequences and the graph
//! configuration. Concrete representations such as
//! [`AdjacencyList`](crate::graph::AdjacencyList) embed a core and keep their own
//! neighbour structure in lockstep with it.
//!
//! The core maintains two invariants:
//!
//! - every edge endpoint is a valid vertex index;
//! - the degree of each vertex equals the number of edge endpoints at it, so a
//!   self-loop counts twice.

use std::fmt;

use crate::{
    graph::{
        edge::{Edge, EdgeId, EdgeKey},
        vertex::{Vertex, VertexId},
    },
    Error, GraphConfig, Result,
};

/// Owned vertex and edge storage shared by every graph representation.
#[derive(Debug, Clone, Default)]
pub struct GraphCore {
    /// Vertices, indexed by `VertexId`
    vertices: Vec<Vertex>,
    /// Edges, indexed by `EdgeId`
    edges: Vec<Edge>,
    /// Construction-time configuration
    config: GraphConfig,
}

impl GraphCore {
    /// Creates empty storage with the given configuration.
    #[must_use]
    pub fn new(config: GraphConfig) -> Self {
        GraphCore {
            vertices: Vec::new(),
            edges: Vec::new(),
            config,
        }
    }

    /// Returns the configuration the graph was built with.
    #[must_use]
    pub const fn config(&self) -> GraphConfig {
        self.config
    }

    /// Returns `true` if edges are directed.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Returns all vertices in index order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns all edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the vertex with the given identifier, if it exists.
    #[must_use]
    pub fn vertex(&self, vertex: VertexId) -> Option<&Vertex> {
        self.vertices.get(vertex.index())
    }

    /// Returns the edge with the given identifier, if it exists.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge.index())
    }

    /// Returns the position of the first edge matching `key`.
    #[must_use]
    pub fn find_edge(&self, key: &EdgeKey) -> Option<EdgeId> {
        let directed = self.is_directed();
        self.edges
            .iter()
            .position(|edge| edge.matches(key, directed))
            .map(EdgeId::new)
    }

    /// Returns the position of the first edge joining `u` and `v`.
    #[must_use]
    pub fn find_edge_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        let directed = self.is_directed();
        self.edges
            .iter()
            .position(|edge| edge.joins(u, v, directed))
            .map(EdgeId::new)
    }

    /// Fails with [`Error::InvalidIndex`] if `vertex` is not in the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] for an out-of-range vertex.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.index() >= self.vertices.len() {
            return Err(Error::InvalidIndex {
                index: vertex.index(),
                count: self.vertices.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn push_vertex(&mut self, label: String) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(label));
        id
    }

    /// Validates an edge against the vertex range and the configuration, then stores it.
    pub(crate) fn push_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        label: Option<String>,
    ) -> Result<EdgeId> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        if u == v && !self.config.allow_self_loops {
            return Err(Error::EdgeRejected(format!(
                "self-loop at {u} on a graph without self-loops"
            )));
        }
        if !self.config.allow_parallel_edges && self.find_edge_between(u, v).is_some() {
            return Err(Error::EdgeRejected(format!(
                "parallel edge {u}-{v} on a graph without parallel edges"
            )));
        }

        self.vertices[u.index()].degree += 1;
        self.vertices[v.index()].degree += 1;

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(u, v, label, self.is_directed()));
        Ok(id)
    }

    pub(crate) fn take_edge(&mut self, edge: EdgeId) -> Edge {
        let removed = self.edges.remove(edge.index());
        let (u, v) = removed.endpoints;
        self.vertices[u.index()].degree -= 1;
        self.vertices[v.index()].degree -= 1;
        removed
    }

    /// Removes a vertex with its incident edges and renumbers everything after it.
    pub(crate) fn take_vertex(&mut self, vertex: VertexId) -> Vertex {
        let mut kept = Vec::with_capacity(self.edges.len());
        for edge in std::mem::take(&mut self.edges) {
            if !edge.contains(vertex) {
                kept.push(edge);
                continue;
            }

            let (a, b) = edge.endpoints;
            for end in [a, b] {
                if end != vertex {
                    self.vertices[end.index()].degree -= 1;
                }
            }
        }

        let shift = |id: VertexId| {
            if id > vertex {
                VertexId::new(id.index() - 1)
            } else {
                id
            }
        };
        for edge in &mut kept {
            edge.endpoints = (shift(edge.endpoints.0), shift(edge.endpoints.1));
        }

        self.edges = kept;
        self.vertices.remove(vertex.index())
    }
}

impl fmt::Display for GraphCore {
    /// Writes a multi-line summary: vertex and edge counts, the `(label, degree)` pairs,
    /// the degree parity split and the total degree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let odd = self.vertices.iter().filter(|v| v.degree % 2 == 1).count();
        let total: usize = self.vertices.iter().map(Vertex::degree).sum();

        let vertices: Vec<String> = self.vertices.iter().map(ToString::to_string).collect();
        let edges: Vec<String> = self
            .edges
            .iter()
            .map(|edge| edge.render(&self.vertices))
            .collect();

        writeln!(f, "Number of vertices: {}", self.vertices.len())?;
        writeln!(f, "Vertices (label, degree): [{}]", vertices.join(", "))?;
        writeln!(f, "Odd Degree Vertices: {odd}")?;
        writeln!(f, "Even Degree Vertices: {}", self.vertices.len() - odd)?;
        writeln!(f, "Total Degree: {total}")?;
        writeln!(f, "Number of edges: {}", self.edges.len())?;
        writeln!(f, "Edges: [{}]", edges.join(", "))
    }
}
