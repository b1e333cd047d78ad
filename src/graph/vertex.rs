//! Vertex identifier and vertex data.
//!
//! This module provides [`VertexId`], a strongly-typed identifier for vertices within a
//! graph, and [`Vertex`], the data the graph stores for each of them. Per-traversal state
//! (visit colour, component, timestamps) is never stored on the vertex; the traversal engine
//! keeps it in side tables indexed by [`VertexId`].

use std::fmt;

/// A strongly-typed identifier for vertices within a graph.
///
/// `VertexId` wraps the vertex's position in the graph's vertex sequence. Identifiers are
/// assigned sequentially starting from 0 when vertices are added. Removing a vertex
/// renumbers every vertex after it, so identifiers held across a removal are stale.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{AdjacencyList, Graph, VertexId};
///
/// let mut graph = AdjacencyList::new();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
///
/// assert_eq!(a, VertexId::new(0));
/// assert_eq!(b.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw vertex index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex identifier.
    ///
    /// The index can be used to index into vectors that store per-vertex data, such as
    /// the side tables returned by the traversal engine.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}

/// Data stored by a graph for each vertex.
///
/// The degree is maintained by the graph as edges are added and removed; a self-loop
/// contributes two. Two vertices are never the same vertex merely because their labels
/// match: identity is the [`VertexId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub(crate) label: String,
    pub(crate) degree: usize,
}

impl Vertex {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Vertex {
            label: label.into(),
            degree: 0,
        }
    }

    /// Returns the vertex label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of edge endpoints at this vertex.
    #[must_use]
    pub const fn degree(&self) -> usize {
        self.degree
    }
}

impl fmt::Display for Vertex {
    /// Formats the vertex as `(label, degree)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', {})", self.label, self.degree)
    }
}
