//! Graph construction configuration
//!
//! This module provides the options that are fixed when a graph is created:
//! whether edges are directed, and which edge shapes the graph accepts.

/// Configuration for a graph instance
///
/// The configuration is fixed at construction time and carried over to every graph
/// derived from it (subgraphs, subtractions). Edges that the configuration forbids are
/// rejected by [`crate::Graph::add_edge`] with [`crate::Error::EdgeRejected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Whether edges are ordered pairs (source, target)
    pub directed: bool,

    /// Accept edges whose endpoints are the same vertex
    /// A self-loop contributes two to the degree of its vertex
    pub allow_self_loops: bool,

    /// Accept more than one edge between the same pair of vertices
    pub allow_parallel_edges: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::undirected()
    }
}

impl GraphConfig {
    /// Creates an undirected multigraph configuration
    ///
    /// Self-loops and parallel edges are accepted. This is the default.
    #[must_use]
    pub const fn undirected() -> Self {
        Self {
            directed: false,
            allow_self_loops: true,
            allow_parallel_edges: true,
        }
    }

    /// Creates a directed multigraph configuration
    #[must_use]
    pub const fn directed() -> Self {
        Self {
            directed: true,
            allow_self_loops: true,
            allow_parallel_edges: true,
        }
    }

    /// Creates a simple undirected graph configuration
    ///
    /// Rejects self-loops and parallel edges. Path enumeration and the constrained
    /// cycle searches assume graphs of this shape.
    #[must_use]
    pub const fn simple() -> Self {
        Self {
            directed: false,
            allow_self_loops: false,
            allow_parallel_edges: false,
        }
    }

    /// Returns a copy of this configuration with the given directedness
    #[must_use]
    pub const fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Returns a copy of this configuration with self-loops allowed or rejected
    #[must_use]
    pub const fn with_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }

    /// Returns a copy of this configuration with parallel edges allowed or rejected
    #[must_use]
    pub const fn with_parallel_edges(mut self, allow: bool) -> Self {
        self.allow_parallel_edges = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_undirected_multigraph() {
        let config = GraphConfig::default();
        assert!(!config.directed);
        assert!(config.allow_self_loops);
        assert!(config.allow_parallel_edges);
        assert_eq!(config, GraphConfig::undirected());
    }

    #[test]
    fn test_presets() {
        assert!(GraphConfig::directed().directed);

        let simple = GraphConfig::simple();
        assert!(!simple.directed);
        assert!(!simple.allow_self_loops);
        assert!(!simple.allow_parallel_edges);
    }

    #[test]
    fn test_builder_methods() {
        let config = GraphConfig::simple()
            .with_directed(true)
            .with_self_loops(true);

        assert!(config.directed);
        assert!(config.allow_self_loops);
        assert!(!config.allow_parallel_edges);

        let config = config.with_parallel_edges(true);
        assert!(config.allow_parallel_edges);
    }
}
