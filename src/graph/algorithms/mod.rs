//! Graph algorithms built on depth-first search.
//!
//! Every analysis in this module is a free function over any [`Graph`](crate::Graph)
//! implementation. Analyses only read the graph; their bookkeeping lives in side tables
//! allocated per call.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`depth_first_search`] - Full-forest search with timestamps and edge classification
//! - [`DfsForest`] - Result of the full-forest search
//! - [`dfs`] - Lazy pre-order traversal from one vertex
//! - [`postorder`] - Post-order over the whole forest
//!
//! ## Connectivity
//!
//! - [`is_connected`] - Check that every vertex is reachable from vertex 0
//! - [`components`] - Count connected components
//! - [`contains_circuit`] - Check for a circuit using edge and vertex counts
//!
//! ## Cycles and Paths
//!
//! - [`find_cycle`] - Find a cycle if one exists
//! - [`restricted_find_cycle`] - Look for a closed walk back to vertex 0
//! - [`cycle_from_circuit`] - Close a cycle through a known back edge
//! - [`all_paths_between`] - Enumerate every simple path between two vertices
//! - [`walk_between`] - Return one simple path between two vertices
//!
//! ## Ordering and Components
//!
//! - [`topological_sort`] - Reverse post-order of a DAG
//! - [`strongly_connected_components`] - Tarjan's SCC algorithm
//! - [`low_link_values`] - Tarjan discovery and low-link values
//! - [`condensation`] - Collapse components into an acyclic graph
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS | O(V + E) | General traversal, edge classification |
//! | Connectivity | O(V + E) | Reachability, forest tests |
//! | Topological Sort | O(V + E) | Dependency ordering |
//! | SCC | O(V + E) | Cycle structure, 2-SAT |
//! | All Paths | O(V!) worst case | Small graphs only |
//!
//! # Examples
//!
//! ```rust
//! use graphwalk::{algorithms, AdjacencyList, EdgeKind, Graph, GraphConfig, VertexId};
//!
//! let mut graph = AdjacencyList::create_empty_graph(3, GraphConfig::directed());
//! let [a, b, c] = [0, 1, 2].map(VertexId::new);
//! graph.add_edge(a, b)?;
//! graph.add_edge(b, c)?;
//! graph.add_edge(c, a)?;
//!
//! let order: Vec<VertexId> = algorithms::dfs(&graph, a).collect();
//! assert_eq!(order, vec![a, b, c]);
//!
//! let forest = algorithms::depth_first_search(&graph);
//! assert_eq!(forest.count(EdgeKind::Back), 1);
//!
//! let sccs = algorithms::strongly_connected_components(&graph)?;
//! assert_eq!(sccs.len(), 1);
//! # Ok::<(), graphwalk::Error>(())
//! ```

mod connectivity;
mod cycles;
mod paths;
mod scc;
mod state;
mod topological;
mod traversal;

pub use connectivity::{components, contains_circuit, is_connected};
pub use cycles::{cycle_from_circuit, find_cycle, restricted_find_cycle};
pub use paths::{all_paths_between, walk_between};
pub use scc::{condensation, low_link_values, strongly_connected_components, LowLink};
pub use state::{EdgeKind, VisitState};
pub use topological::topological_sort;
pub use traversal::{depth_first_search, dfs, postorder, DfsForest, DfsIterator};
