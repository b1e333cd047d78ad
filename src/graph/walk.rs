//! Walks through a graph.
//!
//! A [`Walk`] is an alternating vertex/edge sequence built from a list of vertex
//! identifiers. The edge between each consecutive pair is the first edge of the graph,
//! in insertion order, that joins them. The walk also precomputes its *primitive*: the
//! rendered vertices and edges interleaved, as `('a', 2)`, `('b', 'a')`, `('b', 1)`.
//!
//! A walk is a snapshot. It holds no reference to the graph, so it stays readable after
//! the graph changes, but its identifiers and renderings describe the graph as it was
//! when the walk was built.

use crate::{
    graph::{edge::EdgeId, traits::Graph, vertex::VertexId},
    Error, Result,
};

/// An alternating sequence of vertices and the edges joining them.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{AdjacencyList, Graph, GraphConfig, VertexId, Walk};
///
/// let mut graph = AdjacencyList::create_empty_graph(3, GraphConfig::default());
/// let [a, b, c] = [0, 1, 2].map(VertexId::new);
/// graph.add_edge(a, b)?;
/// graph.add_labeled_edge(b, c, "bc")?;
///
/// let walk = Walk::new(&graph, &[a, b, c])?;
/// assert_eq!(walk.length(), 2);
/// assert_eq!(
///     walk.primitive(false),
///     vec!["('v1', 1)", "('v2', 'v1')", "('v2', 2)", "bc('v3', 'v2')", "('v3', 1)"]
/// );
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
    content: Vec<String>,
}

impl Walk {
    /// Builds a walk along the given vertex sequence.
    ///
    /// Vertices may repeat. For directed graphs each consecutive pair must be joined by
    /// an edge pointing from the first to the second.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] for a vertex outside the graph and
    /// [`Error::InvalidWalk`] for an empty sequence or a consecutive pair with no
    /// connecting edge.
    pub fn new<G: Graph>(graph: &G, vertices: &[VertexId]) -> Result<Walk> {
        if vertices.is_empty() {
            return Err(Error::InvalidWalk("a walk needs at least one vertex".to_string()));
        }
        for &vertex in vertices {
            graph.core().check_vertex(vertex)?;
        }

        let core = graph.core();
        let mut edges = Vec::with_capacity(vertices.len() - 1);
        for pair in vertices.windows(2) {
            let edge = core.find_edge_between(pair[0], pair[1]).ok_or_else(|| {
                Error::InvalidWalk(format!("no edge joins {} and {}", pair[0], pair[1]))
            })?;
            edges.push(edge);
        }

        let mut content = Vec::with_capacity(vertices.len() + edges.len());
        for (i, &vertex) in vertices.iter().enumerate() {
            content.push(core.vertices()[vertex.index()].to_string());
            if let Some(&edge) = edges.get(i) {
                content.push(core.edges()[edge.index()].render(core.vertices()));
            }
        }

        Ok(Walk {
            vertices: vertices.to_vec(),
            edges,
            content,
        })
    }

    /// Returns the vertex sequence.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Returns the edge joining each consecutive pair of vertices.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the number of edges in the walk.
    #[must_use]
    pub fn length(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the walk starts and ends at the same vertex.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }

    /// Returns the rendered vertices and edges in walk order, or reversed.
    #[must_use]
    pub fn primitive(&self, reverse: bool) -> Vec<String> {
        if reverse {
            self.content.iter().rev().cloned().collect()
        } else {
            self.content.clone()
        }
    }

    /// Returns the longest prefix of the walk that repeats no vertex.
    #[must_use]
    pub fn path(&self) -> Walk {
        let mut end = 0;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if self.vertices[..i].contains(vertex) {
                break;
            }
            end = i;
        }
        self.slice(0, end)
    }

    /// Returns the part of the walk from its `i`-th to its `j`-th vertex.
    ///
    /// Returns `None` unless `i < j <= length`, so `section(0, length)` is the whole
    /// walk.
    #[must_use]
    pub fn section(&self, i: usize, j: usize) -> Option<Walk> {
        (i < j && j <= self.length()).then(|| self.slice(i, j))
    }

    fn slice(&self, i: usize, j: usize) -> Walk {
        Walk {
            vertices: self.vertices[i..=j].to_vec(),
            edges: self.edges[i..j].to_vec(),
            content: self.content[2 * i..=2 * j].to_vec(),
        }
    }
}
