//! Graph factories.

use crate::{
    graph::{traits::Graph, vertex::VertexId},
    GraphConfig,
};

pub(crate) fn empty<G: Graph>(n: usize, config: GraphConfig) -> G {
    let mut graph = G::with_config(config);
    for i in 1..=n {
        graph.add_vertex(format!("v{i}"));
    }
    graph
}

/// Adds an edge the generator knows to be valid for an undirected multigraph.
fn connect<G: Graph>(graph: &mut G, u: usize, v: usize) {
    if let Err(error) = graph.add_edge(VertexId::new(u), VertexId::new(v)) {
        log::warn!("generator edge {u}-{v} rejected: {error}");
    }
}

pub(crate) fn complete<G: Graph>(n: usize) -> G {
    let mut graph = empty::<G>(n, GraphConfig::undirected());
    for i in 0..n {
        for j in i + 1..n {
            connect(&mut graph, i, j);
        }
    }
    graph
}

/// Links every vertex to its successor on the ring `k` times, alternating between the
/// even and the odd starting offsets. Each pass adds one to the degree of every vertex
/// when `n` is even; for odd `n` an even/odd pair of passes adds two.
pub(crate) fn regular<G: Graph>(n: usize, k: usize) -> Option<G> {
    if (n * k) % 2 != 0 {
        return None;
    }

    let mut graph = empty::<G>(n, GraphConfig::undirected());
    for pass in 0..k {
        for i in (pass % 2..n).step_by(2) {
            connect(&mut graph, i, (i + 1) % n);
        }
    }
    Some(graph)
}
