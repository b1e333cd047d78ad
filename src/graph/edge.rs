//! Edge identifier, edge data, and edge lookup keys.
//!
//! This module provides [`EdgeId`], a strongly-typed identifier for an edge's position in
//! the graph's edge sequence, [`Edge`], the stored edge itself, and [`EdgeKey`], the
//! value-based description callers use to find edges (`(u, v)` or `(u, v, label)`).

use std::fmt;

use crate::graph::vertex::{Vertex, VertexId};

/// A strongly-typed identifier for edges within a graph.
///
/// `EdgeId` wraps the edge's position in the graph's edge sequence. Edge IDs are
/// assigned sequentially starting from 0; removing an edge shifts every later edge
/// down by one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// An edge stored in a graph.
///
/// Undirected edges store their endpoints as `(max, min)` so that the same pair always
/// has the same representation. Directed edges keep `(source, target)`.
///
/// Each edge is a distinct entity even when another edge joins the same pair: graphs
/// accept parallel edges unless configured otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub(crate) endpoints: (VertexId, VertexId),
    pub(crate) label: Option<String>,
}

impl Edge {
    pub(crate) fn new(u: VertexId, v: VertexId, label: Option<String>, directed: bool) -> Self {
        let endpoints = if !directed && u < v { (v, u) } else { (u, v) };
        Edge { endpoints, label }
    }

    /// Returns the stored endpoints.
    ///
    /// For directed edges this is `(source, target)`; for undirected edges the larger
    /// index comes first.
    #[must_use]
    pub const fn endpoints(&self) -> (VertexId, VertexId) {
        self.endpoints
    }

    /// Returns the edge label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.endpoints.0 == vertex || self.endpoints.1 == vertex
    }

    /// Returns `true` if both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.endpoints.0 == self.endpoints.1
    }

    /// Returns `true` if this edge joins `u` and `v`.
    ///
    /// Order matters only for directed edges.
    #[must_use]
    pub fn joins(&self, u: VertexId, v: VertexId, directed: bool) -> bool {
        let (a, b) = self.endpoints;
        (a == u && b == v) || (!directed && a == v && b == u)
    }

    /// Returns `true` if this edge matches the key.
    ///
    /// The endpoints must join as in [`Edge::joins`]; when the key carries a label the
    /// edge label must be equal to it.
    #[must_use]
    pub fn matches(&self, key: &EdgeKey, directed: bool) -> bool {
        if !self.joins(key.u, key.v, directed) {
            return false;
        }

        match &key.label {
            Some(label) => self.label.as_deref() == Some(label.as_str()),
            None => true,
        }
    }

    /// Returns the key that uniquely describes this edge's endpoints and label.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            u: self.endpoints.0,
            v: self.endpoints.1,
            label: self.label.clone(),
        }
    }

    /// Renders the edge with the labels of its endpoints, as `label('a', 'b')`.
    ///
    /// Unlabeled edges render as `('a', 'b')`.
    #[must_use]
    pub fn render(&self, vertices: &[Vertex]) -> String {
        let name = |id: VertexId| {
            vertices
                .get(id.index())
                .map_or_else(|| id.to_string(), |v| v.label.clone())
        };

        format!(
            "{}('{}', '{}')",
            self.label.as_deref().unwrap_or(""),
            name(self.endpoints.0),
            name(self.endpoints.1)
        )
    }
}

/// A value-based description of an edge: its endpoints and an optional label.
///
/// Keys are how callers name edges for removal and subgraph selection. A key without a
/// label matches any edge between its endpoints; a key with a label matches only edges
/// carrying exactly that label.
///
/// # Examples
///
/// ```rust
/// use graphwalk::EdgeKey;
///
/// let plain: EdgeKey = (0, 1).into();
/// let labeled: EdgeKey = (0, 1, "bridge").into();
///
/// assert_eq!(plain.label(), None);
/// assert_eq!(labeled.label(), Some("bridge"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub(crate) u: VertexId,
    pub(crate) v: VertexId,
    pub(crate) label: Option<String>,
}

impl EdgeKey {
    /// Creates an unlabeled key for the pair `(u, v)`.
    #[must_use]
    pub const fn new(u: VertexId, v: VertexId) -> Self {
        EdgeKey { u, v, label: None }
    }

    /// Returns a copy of this key restricted to edges with the given label.
    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the endpoints of the key in the order they were given.
    #[must_use]
    pub const fn endpoints(&self) -> (VertexId, VertexId) {
        (self.u, self.v)
    }

    /// Returns the label restriction, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the key with undirected endpoints put in `(max, min)` order.
    pub(crate) fn canonical(&self, directed: bool) -> Self {
        let mut key = self.clone();
        if !directed && key.u < key.v {
            std::mem::swap(&mut key.u, &mut key.v);
        }
        key
    }
}

impl From<(VertexId, VertexId)> for EdgeKey {
    fn from((u, v): (VertexId, VertexId)) -> Self {
        EdgeKey::new(u, v)
    }
}

impl From<(usize, usize)> for EdgeKey {
    fn from((u, v): (usize, usize)) -> Self {
        EdgeKey::new(VertexId::new(u), VertexId::new(v))
    }
}

impl From<(usize, usize, &str)> for EdgeKey {
    fn from((u, v, label): (usize, usize, &str)) -> Self {
        EdgeKey::new(VertexId::new(u), VertexId::new(v)).labeled(label)
    }
}

impl From<(usize, usize, Option<&str>)> for EdgeKey {
    fn from((u, v, label): (usize, usize, Option<&str>)) -> Self {
        EdgeKey {
            u: VertexId::new(u),
            v: VertexId::new(v),
            label: label.map(str::to_string),
        }
    }
}

impl From<&Edge> for EdgeKey {
    fn from(edge: &Edge) -> Self {
        edge.key()
    }
}
