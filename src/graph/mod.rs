//! Graph infrastructure: entities, representations, and analyses.
//!
//! This module provides directed and undirected graphs built from labeled vertices and
//! optionally labeled edges, together with the traversal engine and structural analyses
//! that run on them.
//!
//! # Architecture
//!
//! - **Core Types**: [`VertexId`], [`EdgeId`], [`Vertex`], [`Edge`], and [`EdgeKey`]
//!   describe the entities. [`GraphCore`] owns them.
//! - **Traits**: [`GraphBase`], [`Neighbors`], and [`Graph`] describe what a
//!   representation must provide; derived graphs and factories are built on top.
//! - **Representations**: [`AdjacencyList`] keeps per-vertex neighbour lists.
//! - **Walks**: [`Walk`] materialises a vertex sequence and its connecting edges.
//! - **Algorithms**: [`algorithms`] holds the depth-first traversal engine and every
//!   analysis derived from it.
//!
//! # Design Principles
//!
//! ## Arena and Index
//!
//! The graph owns dense vertex and edge arrays. Adjacency lists, edges, and walks store
//! indices, never references, so removal only has to renumber.
//!
//! ## Side-Table Traversal State
//!
//! Visit colours, component numbers, and timestamps never live on the vertices. Each
//! analysis allocates fresh side tables indexed by [`VertexId`], so analyses take
//! `&self` and independent calls cannot observe one another.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphwalk::{algorithms, AdjacencyList, Graph, GraphConfig, VertexId};
//!
//! let mut graph = AdjacencyList::create_empty_graph(4, GraphConfig::default());
//! for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
//!     graph.add_edge(VertexId::new(u), VertexId::new(v))?;
//! }
//!
//! assert!(algorithms::is_connected(&graph));
//! assert!(algorithms::contains_circuit(&graph));
//!
//! let cycle = algorithms::find_cycle(&graph).expect("the square is a cycle");
//! assert_eq!(cycle.length(), 4);
//! # Ok::<(), graphwalk::Error>(())
//! ```

mod adjacency;
mod derived;
mod edge;
mod generators;
mod storage;
mod traits;
mod vertex;
mod walk;

pub mod algorithms;

pub use adjacency::AdjacencyList;
pub use edge::{Edge, EdgeId, EdgeKey};
pub use storage::GraphCore;
pub use traits::{Graph, GraphBase, Neighbors};
pub use vertex::{Vertex, VertexId};
pub use walk::Walk;
