use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Structural misses that callers routinely branch on (removing an edge that does not exist,
/// asking for a walk between unconnected vertices) are reported through `Option` instead of
/// this type. The variants below cover genuinely invalid requests and algorithm preconditions
/// whose violation would otherwise produce silently wrong results.
///
/// # Error Categories
///
/// ## Reference Errors
/// - [`Error::InvalidIndex`] - A vertex index outside the graph
/// - [`Error::InvalidVertexSet`] - Duplicated or unknown vertices in a subgraph request
/// - [`Error::InvalidEdgeSet`] - Duplicated or unknown edges in a subgraph request
/// - [`Error::InvalidWalk`] - A vertex sequence that is empty or not joined by edges
///
/// ## Construction Errors
/// - [`Error::EdgeRejected`] - An edge forbidden by the graph's [`crate::GraphConfig`]
///
/// ## Analysis Errors
/// - [`Error::PreconditionViolation`] - An algorithm invoked on an unsuitable graph
///
/// ## Satisfiability Errors
/// - [`Error::InvalidLiteral`] - A 2-SAT literal that names no variable
/// - [`Error::Unsatisfiable`] - A 2-SAT instance without a satisfying assignment
///
/// # Examples
///
/// ```rust
/// use graphwalk::{AdjacencyList, Error, Graph, VertexId};
///
/// let mut graph = AdjacencyList::create_empty_graph(2, Default::default());
/// match graph.add_edge(VertexId::new(0), VertexId::new(5)) {
///     Err(Error::InvalidIndex { index, count }) => {
///         assert_eq!((index, count), (5, 2));
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index does not exist in the graph.
    ///
    /// # Fields
    ///
    /// * `index` - The offending index
    /// * `count` - The number of vertices in the graph at the time of the call
    #[error("Vertex index {index} is out of range for a graph with {count} vertices")]
    InvalidIndex {
        /// The index that was requested
        index: usize,
        /// The vertex count of the graph
        count: usize,
    },

    /// A vertex set handed to a subgraph operation contains duplicates or unknown vertices.
    #[error("Invalid vertex set - {0}")]
    InvalidVertexSet(String),

    /// An edge set handed to a subgraph operation contains duplicates or unknown edges.
    #[error("Invalid edge set - {0}")]
    InvalidEdgeSet(String),

    /// A walk could not be built.
    ///
    /// Either the vertex sequence was empty, or two consecutive vertices are not
    /// joined by an edge of the graph.
    #[error("Invalid walk - {0}")]
    InvalidWalk(String),

    /// The graph configuration does not permit the requested edge.
    ///
    /// Raised for self-loops and parallel edges on graphs configured to reject them.
    #[error("Edge rejected - {0}")]
    EdgeRejected(String),

    /// An algorithm was invoked on a graph that does not meet its precondition.
    ///
    /// Examples are running strongly connected components on an undirected graph, or the
    /// degree-constrained cycle search on a graph with a vertex of degree below two.
    #[error("Precondition violated - {0}")]
    PreconditionViolation(String),

    /// A 2-SAT literal of value zero, which names no variable.
    #[error("Literal {0} does not name a variable")]
    InvalidLiteral(i64),

    /// The 2-SAT instance has no satisfying assignment.
    #[error("The formula is unsatisfiable")]
    Unsatisfiable,
}
