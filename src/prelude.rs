//! # graphwalk Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits and
//! analyses of the graphwalk library. Import it to get graph construction, traversal and
//! 2-SAT solving in scope with a single glob import.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphwalk operations
pub use crate::Error;

/// The result type used throughout graphwalk
pub use crate::Result;

/// Construction options for new graphs
pub use crate::GraphConfig;

// ================================================================================================
// Graph Model
// ================================================================================================

/// Graph traits; `Graph` provides construction, derived graphs and factories
pub use crate::graph::{Graph, GraphBase, Neighbors};

/// The adjacency-list representation
pub use crate::graph::AdjacencyList;

/// Vertex and edge entities with their identifiers
pub use crate::graph::{Edge, EdgeId, EdgeKey, Vertex, VertexId};

/// Vertex sequences joined by edges
pub use crate::graph::Walk;

// ================================================================================================
// Traversal and Analysis
// ================================================================================================

/// Depth-first search and its result
pub use crate::graph::algorithms::{depth_first_search, dfs, postorder, DfsForest, EdgeKind};

/// Connectivity and circuit detection
pub use crate::graph::algorithms::{components, contains_circuit, is_connected};

/// Cycle and path extraction
pub use crate::graph::algorithms::{
    all_paths_between, cycle_from_circuit, find_cycle, restricted_find_cycle, walk_between,
};

/// Orderings and strongly connected components
pub use crate::graph::algorithms::{
    condensation, low_link_values, strongly_connected_components, topological_sort, LowLink,
};

// ================================================================================================
// Satisfiability
// ================================================================================================

/// 2-SAT solving
pub use crate::twosat::{is_2satisfiable, Assignment, TwoSat};
