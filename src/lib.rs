// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphwalk
//!
//! Directed and undirected graphs over labeled vertices, with a depth-first traversal
//! engine and the structural analyses built on top of it.
//!
//! ## Features
//!
//! - **Graph model** - Labeled vertices, optionally labeled edges, directed or undirected,
//!   with self-loops and parallel edges controlled by [`GraphConfig`]
//! - **Derived graphs** - Induced, edge-induced and explicit subgraphs, vertex and edge
//!   subtraction, bipartition checks
//! - **Walks** - Vertex sequences with their connecting edges, sections and prefixes
//! - **Depth-first search** - Full-forest traversal with entry/exit timestamps, component
//!   numbering and tree/back/forward/cross edge classification
//! - **Analyses** - Connectivity, circuit detection, cycle extraction, simple-path
//!   enumeration, topological order, strongly connected components, low-link values
//! - **2-SAT** - Satisfiability of 2-CNF formulas through the implication graph
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use graphwalk::prelude::*;
//!
//! let mut graph = AdjacencyList::create_empty_graph(3, GraphConfig::default());
//! graph.add_edge(VertexId::new(0), VertexId::new(1))?;
//! graph.add_edge(VertexId::new(1), VertexId::new(2))?;
//!
//! assert!(is_connected(&graph));
//! assert!(!contains_circuit(&graph));
//! # Ok::<(), graphwalk::Error>(())
//! ```
//!
//! ### Building a Graph
//!
//! ```rust
//! use graphwalk::{AdjacencyList, Graph, GraphConfig};
//!
//! let mut graph = AdjacencyList::with_config(GraphConfig::directed());
//! let parse = graph.add_vertex("parse");
//! let check = graph.add_vertex("check");
//! let emit = graph.add_vertex("emit");
//! graph.add_labeled_edge(parse, check, "ast")?;
//! graph.add_labeled_edge(check, emit, "typed ast")?;
//!
//! assert_eq!(graph.degree(check)?, 2);
//! println!("{graph}");
//! # Ok::<(), graphwalk::Error>(())
//! ```
//!
//! ### Traversal
//!
//! ```rust
//! use graphwalk::{algorithms, AdjacencyList, EdgeKind, Graph};
//!
//! let graph = AdjacencyList::create_complete_graph(4);
//! let forest = algorithms::depth_first_search(&graph);
//!
//! assert_eq!(forest.component_count(), 1);
//! assert_eq!(forest.count(EdgeKind::Tree), 3);
//! assert_eq!(forest.count(EdgeKind::Back), 3);
//! ```
//!
//! ### Satisfiability
//!
//! ```rust
//! use graphwalk::is_2satisfiable;
//!
//! let clauses = [(1, 2), (-1, 2), (-2, 3)];
//! let assignment = is_2satisfiable(&clauses)?.expect("satisfiable");
//! assert!(assignment.satisfies(&clauses));
//! # Ok::<(), graphwalk::Error>(())
//! ```
//!
//! ## Logging
//!
//! The library reports through the [`log`](https://docs.rs/log) facade and never installs
//! a logger. Analyses log a summary at `debug` level; the traversal engine logs each
//! classified edge at `trace` level.

mod config;
mod error;

/// Graph entities, representations, walks and algorithms.
///
/// Most types are re-exported at the crate root; see [`graph::algorithms`] for the
/// analyses.
pub mod graph;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphwalk::prelude::*;
///
/// let graph = AdjacencyList::create_complete_graph(3);
/// assert!(find_cycle(&graph).is_some());
/// ```
pub mod prelude;

/// 2-SAT solving through strongly connected components.
pub mod twosat;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{AdjacencyList, Graph, Result, VertexId};
///
/// fn path(n: usize) -> Result<AdjacencyList> {
///     let mut graph = AdjacencyList::create_empty_graph(n, Default::default());
///     for i in 1..n {
///         graph.add_edge(VertexId::new(i - 1), VertexId::new(i))?;
///     }
///     Ok(graph)
/// }
///
/// assert_eq!(path(4)?.edge_count(), 3);
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `graphwalk` Error type
///
/// The main error type for all operations in this crate. Structural misses such as
/// removing an absent edge are reported through `Option` instead.
pub use error::Error;

/// Graph construction options and presets.
pub use config::GraphConfig;

pub use graph::{
    algorithms, AdjacencyList, Edge, EdgeId, EdgeKey, Graph, GraphBase, GraphCore, Neighbors,
    Vertex, VertexId, Walk,
};

/// Traversal bookkeeping shared by the algorithms.
pub use graph::algorithms::{EdgeKind, VisitState};

pub use twosat::{is_2satisfiable, Assignment, TwoSat};
