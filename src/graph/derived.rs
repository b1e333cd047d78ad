//! Derived graphs: subgraphs, subtractions, and set validation.
//!
//! Every builder here returns a fresh graph of the same representation and
//! configuration as its input. Vertices keep their labels and relative order; edges
//! keep their labels and relative order. Vertex identifiers in the result are the
//! positions in the new graph, not the source positions.

use rustc_hash::FxHashSet;

use crate::{
    graph::{edge::EdgeKey, traits::Graph, vertex::VertexId},
    Error, Result,
};

pub(crate) fn validate_vertices<G: Graph>(graph: &G, vertices: &[VertexId]) -> Result<()> {
    let mut seen = FxHashSet::default();
    for &vertex in vertices {
        if graph.vertex(vertex).is_none() {
            return Err(Error::InvalidVertexSet(format!(
                "{vertex} is not a vertex of the graph"
            )));
        }
        if !seen.insert(vertex) {
            return Err(Error::InvalidVertexSet(format!("{vertex} is listed twice")));
        }
    }
    Ok(())
}

pub(crate) fn validate_edges<G: Graph>(graph: &G, edges: &[EdgeKey]) -> Result<()> {
    let directed = graph.is_directed();
    let mut seen = FxHashSet::default();
    for key in edges {
        let (u, v) = key.endpoints();
        if graph.core().find_edge(key).is_none() {
            return Err(Error::InvalidEdgeSet(format!(
                "no edge {u}-{v} matches the request"
            )));
        }
        if !seen.insert(key.canonical(directed)) {
            return Err(Error::InvalidEdgeSet(format!("edge {u}-{v} is listed twice")));
        }
    }
    Ok(())
}

/// Returns `true` if any key in `keys` selects the edge at `index`.
fn selected<G: Graph>(graph: &G, index: usize, keys: &[EdgeKey]) -> bool {
    let directed = graph.is_directed();
    let edge = &graph.edges()[index];
    keys.iter().any(|key| edge.matches(key, directed))
}

/// Copies the vertices accepted by `keep` into `target`, returning the old-to-new map.
fn copy_vertices<G: Graph>(
    source: &G,
    target: &mut G,
    keep: impl Fn(VertexId) -> bool,
) -> Vec<Option<VertexId>> {
    source
        .vertex_ids()
        .map(|id| {
            keep(id).then(|| {
                let label = source.vertices()[id.index()].label();
                target.add_vertex(label)
            })
        })
        .collect()
}

/// Copies every edge accepted by `keep` whose endpoints were both carried over.
fn copy_edges<G: Graph>(
    source: &G,
    target: &mut G,
    mapping: &[Option<VertexId>],
    keep: impl Fn(usize) -> bool,
) -> Result<()> {
    for (index, edge) in source.edges().iter().enumerate() {
        if !keep(index) {
            continue;
        }

        let (a, b) = edge.endpoints();
        if let (Some(u), Some(v)) = (mapping[a.index()], mapping[b.index()]) {
            target.insert_edge(u, v, edge.label.clone())?;
        }
    }
    Ok(())
}

pub(crate) fn induced_subgraph<G: Graph>(graph: &G, vertices: &[VertexId]) -> Result<G> {
    validate_vertices(graph, vertices)?;

    let wanted: FxHashSet<VertexId> = vertices.iter().copied().collect();
    let mut result = G::with_config(graph.config());
    let mapping = copy_vertices(graph, &mut result, |id| wanted.contains(&id));
    copy_edges(graph, &mut result, &mapping, |_| true)?;
    Ok(result)
}

pub(crate) fn subtract_vertices<G: Graph>(graph: &G, vertices: &[VertexId]) -> Result<G> {
    validate_vertices(graph, vertices)?;

    let removed: FxHashSet<VertexId> = vertices.iter().copied().collect();
    let mut result = G::with_config(graph.config());
    let mapping = copy_vertices(graph, &mut result, |id| !removed.contains(&id));
    copy_edges(graph, &mut result, &mapping, |_| true)?;
    Ok(result)
}

pub(crate) fn edge_induced_subgraph<G: Graph>(graph: &G, edges: &[EdgeKey]) -> Result<G> {
    validate_edges(graph, edges)?;

    let mut result = G::with_config(graph.config());
    let mut mapping: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];

    for (index, edge) in graph.edges().iter().enumerate() {
        if !selected(graph, index, edges) {
            continue;
        }

        let (a, b) = edge.endpoints();
        for end in [a, b] {
            if mapping[end.index()].is_none() {
                let label = graph.vertices()[end.index()].label();
                mapping[end.index()] = Some(result.add_vertex(label));
            }
        }
    }

    copy_edges(graph, &mut result, &mapping, |index| {
        selected(graph, index, edges)
    })?;
    Ok(result)
}

pub(crate) fn subgraph<G: Graph>(graph: &G, vertices: &[VertexId], edges: &[EdgeKey]) -> Result<G> {
    validate_vertices(graph, vertices)?;
    validate_edges(graph, edges)?;

    let wanted: FxHashSet<VertexId> = vertices.iter().copied().collect();
    let mut result = G::with_config(graph.config());
    let mapping = copy_vertices(graph, &mut result, |id| wanted.contains(&id));
    copy_edges(graph, &mut result, &mapping, |index| {
        selected(graph, index, edges)
    })?;
    Ok(result)
}

pub(crate) fn subtract_edges<G: Graph>(graph: &G, edges: &[EdgeKey]) -> Result<G> {
    validate_edges(graph, edges)?;

    let mut result = graph.clone();
    for key in edges {
        result.remove_edge(key.clone());
    }
    Ok(result)
}

pub(crate) fn is_bipartition<G: Graph>(graph: &G, left: &[VertexId], right: &[VertexId]) -> bool {
    if left.len() + right.len() != graph.vertex_count() {
        return false;
    }

    let mut seen = FxHashSet::default();
    for &vertex in left.iter().chain(right) {
        if graph.vertex(vertex).is_none() || !seen.insert(vertex) {
            return false;
        }
    }

    for part in [left, right] {
        for (n, &u) in part.iter().enumerate() {
            // Starting at `n` itself catches self-loops
            for &v in &part[n..] {
                if graph.is_neighbor(u, v) || graph.is_neighbor(v, u) {
                    return false;
                }
            }
        }
    }

    true
}
