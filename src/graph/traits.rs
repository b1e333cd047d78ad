//! Trait definitions for graph abstractions.
//!
//! This module defines the traits that let algorithms and derived-graph operations work
//! over any graph representation.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Core properties: vertex count and vertex iteration
//! - [`Neighbors`] - Adjacency traversal in the order edges were added
//! - [`Graph`] - The construction contract (`add_vertex`, `add_edge`, `remove_edge`,
//!   `remove_vertex`, `is_neighbor`) plus everything that can be derived from it
//!
//! Representations implement the small required surface; degree queries, bipartite
//! checks, subgraph construction and the factories come for free.

use crate::{
    graph::{
        derived,
        edge::{Edge, EdgeId, EdgeKey},
        generators,
        storage::GraphCore,
        vertex::{Vertex, VertexId},
    },
    GraphConfig, Result,
};

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{AdjacencyList, Graph, GraphBase};
///
/// let mut graph = AdjacencyList::new();
/// graph.add_vertex("A");
/// graph.add_vertex("B");
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.vertex_ids().count(), 2);
/// ```
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers in ascending order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertex_count()).map(VertexId::new)
    }
}

/// Trait for graphs that expose their adjacency.
///
/// For directed graphs the neighbours of `u` are the targets of edges leaving `u`. For
/// undirected graphs they are the other endpoints of every edge at `u`. Parallel edges
/// yield the neighbour once per edge and an undirected self-loop yields the vertex
/// itself twice.
pub trait Neighbors: GraphBase {
    /// Returns an iterator over the neighbours of the given vertex, in edge insertion order.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex in the graph.
    fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}

/// The construction contract shared by every graph representation.
///
/// Implementors store their vertices and edges in a [`GraphCore`] and keep whatever
/// neighbour structure they use consistent with it.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{AdjacencyList, Graph, GraphBase, VertexId};
///
/// let mut graph = AdjacencyList::new();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// graph.add_labeled_edge(a, b, "ab")?;
///
/// assert_eq!(graph.degree(a)?, 1);
/// assert!(graph.is_neighbor(b, a));
///
/// let removed = graph.remove_edge((0, 1, "ab"));
/// assert!(removed.is_some());
/// assert_eq!(graph.edge_count(), 0);
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub trait Graph: GraphBase + Neighbors + Clone + Sized {
    /// Creates an empty graph with the given configuration.
    fn with_config(config: GraphConfig) -> Self;

    /// Returns the representation-independent storage.
    fn core(&self) -> &GraphCore;

    /// Appends a vertex and returns its identifier.
    fn add_vertex(&mut self, label: impl Into<String>) -> VertexId;

    /// Adds an edge between `u` and `v` with an optional label.
    ///
    /// Both endpoint degrees are incremented.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIndex`] if either endpoint is out of range and
    /// [`crate::Error::EdgeRejected`] if the configuration forbids the edge.
    fn insert_edge(&mut self, u: VertexId, v: VertexId, label: Option<String>) -> Result<EdgeId>;

    /// Removes the first edge matching `key`.
    ///
    /// Returns the removed edge, or `None` (leaving the graph untouched) if no edge
    /// matches.
    fn remove_edge(&mut self, key: impl Into<EdgeKey>) -> Option<Edge>;

    /// Removes a vertex and every edge touching it.
    ///
    /// All vertices after it are renumbered down by one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIndex`] if the vertex does not exist.
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<Vertex>;

    /// Returns `true` if an edge leads from `u` to `v`.
    ///
    /// Out-of-range indices are never neighbours.
    fn is_neighbor(&self, u: VertexId, v: VertexId) -> bool;

    /// Adds an unlabeled edge between `u` and `v`.
    ///
    /// # Errors
    ///
    /// See [`Graph::insert_edge`].
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<EdgeId> {
        self.insert_edge(u, v, None)
    }

    /// Adds a labeled edge between `u` and `v`.
    ///
    /// # Errors
    ///
    /// See [`Graph::insert_edge`].
    fn add_labeled_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        label: impl Into<String>,
    ) -> Result<EdgeId> {
        self.insert_edge(u, v, Some(label.into()))
    }

    /// Returns the configuration the graph was built with.
    fn config(&self) -> GraphConfig {
        self.core().config()
    }

    /// Returns `true` if edges are directed.
    fn is_directed(&self) -> bool {
        self.core().is_directed()
    }

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.core().edges().len()
    }

    /// Returns the vertex with the given identifier, if it exists.
    fn vertex(&self, vertex: VertexId) -> Option<&Vertex> {
        self.core().vertex(vertex)
    }

    /// Returns the first vertex carrying `label`, in index order.
    ///
    /// Labels are not unique; identity stays with the [`VertexId`].
    fn find_vertex(&self, label: &str) -> Option<VertexId> {
        self.vertices()
            .iter()
            .position(|vertex| vertex.label() == label)
            .map(VertexId::new)
    }

    /// Returns all vertices in index order.
    fn vertices(&self) -> &[Vertex] {
        self.core().vertices()
    }

    /// Returns all edges in insertion order.
    fn edges(&self) -> &[Edge] {
        self.core().edges()
    }

    /// Returns the degree of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIndex`] if the vertex does not exist.
    fn degree(&self, vertex: VertexId) -> Result<usize> {
        self.core().check_vertex(vertex)?;
        Ok(self.core().vertices()[vertex.index()].degree())
    }

    /// Checks whether `left` and `right` form a bipartition of the graph.
    ///
    /// The two parts must be disjoint, together cover every vertex exactly once, and no
    /// two vertices of the same part (a vertex with itself included) may be adjacent.
    fn is_bipartite(&self, left: &[VertexId], right: &[VertexId]) -> bool {
        derived::is_bipartition(self, left, right)
    }

    /// Checks that a vertex list has no duplicates and only names existing vertices.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertexSet`] describing the first problem found.
    fn validate_vertices(&self, vertices: &[VertexId]) -> Result<()> {
        derived::validate_vertices(self, vertices)
    }

    /// Checks that an edge key list has no duplicates and only names existing edges.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidEdgeSet`] describing the first problem found.
    fn validate_edges(&self, edges: &[EdgeKey]) -> Result<()> {
        derived::validate_edges(self, edges)
    }

    /// Builds the subgraph induced by a vertex set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertexSet`] for duplicated or unknown vertices.
    fn induced_subgraph(&self, vertices: &[VertexId]) -> Result<Self> {
        derived::induced_subgraph(self, vertices)
    }

    /// Builds the subgraph made of the given edges and their endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidEdgeSet`] for duplicated or unknown edges.
    fn edge_induced_subgraph(&self, edges: &[EdgeKey]) -> Result<Self> {
        derived::edge_induced_subgraph(self, edges)
    }

    /// Builds the subgraph with the given vertices and those of the given edges whose
    /// endpoints both belong to the vertex set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertexSet`] or [`crate::Error::InvalidEdgeSet`].
    fn subgraph(&self, vertices: &[VertexId], edges: &[EdgeKey]) -> Result<Self> {
        derived::subgraph(self, vertices, edges)
    }

    /// Builds the graph left after deleting a vertex set and every incident edge.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidVertexSet`] for duplicated or unknown vertices.
    fn subtract_vertices(&self, vertices: &[VertexId]) -> Result<Self> {
        derived::subtract_vertices(self, vertices)
    }

    /// Builds the graph left after deleting an edge set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidEdgeSet`] for duplicated or unknown edges.
    fn subtract_edges(&self, edges: &[EdgeKey]) -> Result<Self> {
        derived::subtract_edges(self, edges)
    }

    /// Creates a graph with `n` isolated vertices labeled `v1` to `vn`.
    fn create_empty_graph(n: usize, config: GraphConfig) -> Self {
        generators::empty(n, config)
    }

    /// Creates the complete undirected graph on `n` vertices.
    fn create_complete_graph(n: usize) -> Self {
        generators::complete(n)
    }

    /// Creates an undirected `k`-regular graph on `n` vertices.
    ///
    /// Returns `None` when `n * k` is odd, since the degree sum of any graph is even.
    fn create_regular_graph(n: usize, k: usize) -> Option<Self> {
        generators::regular(n, k)
    }
}
