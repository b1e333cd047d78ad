//! Graph construction integration tests.
//!
//! These tests exercise the public construction surface end to end:
//! 1. Build graphs through the factories and `add_vertex` / `add_edge`
//! 2. Mutate them with `remove_edge` / `remove_vertex`
//! 3. Derive subgraphs and subtractions
//! 4. Check the rendered summary and the walk API

use graphwalk::{
    AdjacencyList, EdgeKey, Error, Graph, GraphBase, GraphConfig, Neighbors, VertexId, Walk,
};

fn vid(index: usize) -> VertexId {
    VertexId::new(index)
}

fn vids(indices: &[usize]) -> Vec<VertexId> {
    indices.iter().copied().map(VertexId::new).collect()
}

/// Build a graph with `n` default-labeled vertices and the given edges.
fn graph_with(n: usize, config: GraphConfig, edges: &[(usize, usize)]) -> AdjacencyList {
    let mut graph = AdjacencyList::create_empty_graph(n, config);
    for &(u, v) in edges {
        graph.add_edge(vid(u), vid(v)).unwrap();
    }
    graph
}

fn degrees(graph: &AdjacencyList) -> Vec<usize> {
    graph.vertices().iter().map(|v| v.degree()).collect()
}

#[test]
fn test_empty_graph_factory() {
    let graph = AdjacencyList::create_empty_graph(3, GraphConfig::directed());

    assert!(graph.is_directed());
    assert_eq!(graph.edge_count(), 0);
    let labels: Vec<&str> = graph.vertices().iter().map(|v| v.label()).collect();
    assert_eq!(labels, vec!["v1", "v2", "v3"]);
}

#[test]
fn test_find_vertex_by_label() {
    let mut graph = AdjacencyList::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let again = graph.add_vertex("a");

    assert_eq!(graph.find_vertex("a"), Some(a));
    assert_eq!(graph.find_vertex("b"), Some(b));
    assert_eq!(graph.find_vertex("c"), None);

    // Removing the first "a" leaves the duplicate, renumbered
    graph.remove_vertex(a).unwrap();
    assert_eq!(graph.find_vertex("a"), Some(vid(again.index() - 1)));
}

#[test]
fn test_complete_graph_factory() {
    let graph = AdjacencyList::create_complete_graph(5);

    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 10);
    assert_eq!(degrees(&graph), vec![4; 5]);
    for u in graph.vertex_ids() {
        for v in graph.vertex_ids() {
            assert_eq!(graph.is_neighbor(u, v), u != v);
        }
    }
}

#[test]
fn test_regular_graph_factory() {
    let graph = AdjacencyList::create_regular_graph(6, 3).unwrap();
    assert_eq!(graph.edge_count(), 9);
    assert_eq!(degrees(&graph), vec![3; 6]);

    assert!(AdjacencyList::create_regular_graph(5, 3).is_none());
}

#[test]
fn test_degree_and_neighbors() {
    // Undirected: a self-loop adds two, a parallel edge adds one more
    let mut graph = graph_with(3, GraphConfig::default(), &[(0, 1), (0, 1), (1, 1)]);
    assert_eq!(graph.degree(vid(1)), Ok(4));
    assert_eq!(graph.degree(vid(2)), Ok(0));
    assert_eq!(
        graph.degree(vid(3)),
        Err(Error::InvalidIndex { index: 3, count: 3 })
    );

    let from_zero: Vec<VertexId> = graph.neighbors(vid(0)).collect();
    assert_eq!(from_zero, vids(&[1, 1]));

    graph.add_edge(vid(2), vid(0)).unwrap();
    assert!(graph.is_neighbor(vid(0), vid(2)));
    assert!(graph.is_neighbor(vid(2), vid(0)));
}

#[test]
fn test_directed_neighbors_are_out_edges() {
    let graph = graph_with(3, GraphConfig::directed(), &[(0, 1), (2, 0)]);

    assert!(graph.is_neighbor(vid(0), vid(1)));
    assert!(!graph.is_neighbor(vid(1), vid(0)));
    assert_eq!(graph.neighbors(vid(0)).collect::<Vec<_>>(), vids(&[1]));
    assert_eq!(graph.degree(vid(0)), Ok(2));
}

#[test]
fn test_simple_config_rejects_loops_and_parallels() {
    let mut graph = graph_with(2, GraphConfig::simple(), &[(0, 1)]);

    assert!(matches!(
        graph.add_edge(vid(1), vid(0)),
        Err(Error::EdgeRejected(_))
    ));
    assert!(matches!(
        graph.add_edge(vid(0), vid(0)),
        Err(Error::EdgeRejected(_))
    ));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_remove_edge_by_key() {
    let mut graph = AdjacencyList::create_empty_graph(3, GraphConfig::default());
    graph.add_labeled_edge(vid(0), vid(1), "a").unwrap();
    graph.add_labeled_edge(vid(0), vid(1), "b").unwrap();
    graph.add_edge(vid(1), vid(2)).unwrap();

    // Labels select among parallel edges
    let removed = graph.remove_edge((1, 0, "b")).unwrap();
    assert_eq!(removed.label(), Some("b"));
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.is_neighbor(vid(0), vid(1)));

    // Misses leave the graph untouched
    assert!(graph.remove_edge((0, 2)).is_none());
    assert!(graph.remove_edge((0, 1, "b")).is_none());
    assert_eq!(graph.edge_count(), 2);

    assert!(graph.remove_edge(EdgeKey::new(vid(2), vid(1))).is_some());
    assert_eq!(degrees(&graph), vec![1, 1, 0]);
}

#[test]
fn test_remove_vertex_renumbers() {
    // Path 0-1-2-3 plus chord 0-3
    let mut graph = graph_with(4, GraphConfig::default(), &[(0, 1), (1, 2), (2, 3), (0, 3)]);
    let removed = graph.remove_vertex(vid(1)).unwrap();

    assert_eq!(removed.label(), "v2");
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    let labels: Vec<&str> = graph.vertices().iter().map(|v| v.label()).collect();
    assert_eq!(labels, vec!["v1", "v3", "v4"]);

    // Old vertex 3 is now vertex 2
    assert!(graph.is_neighbor(vid(0), vid(2)));
    assert!(graph.is_neighbor(vid(1), vid(2)));
    assert!(!graph.is_neighbor(vid(0), vid(1)));
    assert_eq!(degrees(&graph), vec![1, 1, 2]);

    assert!(graph.remove_vertex(vid(3)).is_err());
}

#[test]
fn test_induced_subgraph() {
    let graph = graph_with(4, GraphConfig::default(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    let sub = graph.induced_subgraph(&vids(&[0, 1, 3])).unwrap();

    assert_eq!(sub.vertex_count(), 3);
    assert_eq!(sub.edge_count(), 2);
    let labels: Vec<&str> = sub.vertices().iter().map(|v| v.label()).collect();
    assert_eq!(labels, vec!["v1", "v2", "v4"]);
    assert!(sub.is_neighbor(vid(0), vid(1)));
    assert!(sub.is_neighbor(vid(0), vid(2)));
    assert!(!sub.is_neighbor(vid(1), vid(2)));

    assert!(matches!(
        graph.induced_subgraph(&vids(&[0, 0])),
        Err(Error::InvalidVertexSet(_))
    ));
    assert!(matches!(
        graph.induced_subgraph(&vids(&[7])),
        Err(Error::InvalidVertexSet(_))
    ));
}

#[test]
fn test_edge_induced_subgraph() {
    let graph = graph_with(5, GraphConfig::default(), &[(0, 1), (1, 2), (2, 3), (3, 4)]);
    let sub = graph
        .edge_induced_subgraph(&[(2, 1).into(), (4, 3).into()])
        .unwrap();

    assert_eq!(sub.vertex_count(), 4);
    assert_eq!(sub.edge_count(), 2);

    assert!(matches!(
        graph.edge_induced_subgraph(&[(0, 4).into()]),
        Err(Error::InvalidEdgeSet(_))
    ));
    assert!(matches!(
        graph.edge_induced_subgraph(&[(0, 1).into(), (1, 0).into()]),
        Err(Error::InvalidEdgeSet(_))
    ));
}

#[test]
fn test_subgraph_and_subtractions() {
    let graph = graph_with(4, GraphConfig::default(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);

    let sub = graph
        .subgraph(&vids(&[0, 1, 2]), &[(0, 1).into()])
        .unwrap();
    assert_eq!(sub.vertex_count(), 3);
    assert_eq!(sub.edge_count(), 1);

    let without_vertex = graph.subtract_vertices(&vids(&[2])).unwrap();
    assert_eq!(without_vertex.vertex_count(), 3);
    assert_eq!(without_vertex.edge_count(), 2);

    let without_edges = graph.subtract_edges(&[(0, 1).into(), (2, 3).into()]).unwrap();
    assert_eq!(without_edges.vertex_count(), 4);
    assert_eq!(without_edges.edge_count(), 2);
    assert!(!without_edges.is_neighbor(vid(0), vid(1)));

    // The source graph is untouched
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_derived_graphs_keep_direction() {
    let graph = graph_with(3, GraphConfig::directed(), &[(0, 1), (1, 2)]);
    let sub = graph.induced_subgraph(&vids(&[0, 1])).unwrap();

    assert!(sub.is_directed());
    assert!(sub.is_neighbor(vid(0), vid(1)));
    assert!(!sub.is_neighbor(vid(1), vid(0)));
}

#[test]
fn test_is_bipartite() {
    let square = graph_with(4, GraphConfig::default(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert!(square.is_bipartite(&vids(&[0, 2]), &vids(&[1, 3])));
    assert!(!square.is_bipartite(&vids(&[0, 1]), &vids(&[2, 3])));
    assert!(!square.is_bipartite(&vids(&[0, 2]), &vids(&[1])));

    let looped = graph_with(2, GraphConfig::default(), &[(0, 1), (0, 0)]);
    assert!(!looped.is_bipartite(&vids(&[0]), &vids(&[1])));
}

#[test]
fn test_summary_display() {
    let mut graph = AdjacencyList::new();
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    graph.add_labeled_edge(a, b, "x").unwrap();
    graph.add_edge(b, c).unwrap();

    let summary = graph.to_string();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Number of vertices: 3",
            "Vertices (label, degree): [('a', 1), ('b', 2), ('c', 1)]",
            "Odd Degree Vertices: 2",
            "Even Degree Vertices: 1",
            "Total Degree: 4",
            "Number of edges: 2",
            "Edges: [x('b', 'a'), ('c', 'b')]",
        ]
    );
}

#[test]
fn test_walks() {
    let graph = graph_with(4, GraphConfig::default(), &[(0, 1), (1, 2), (2, 0), (2, 3)]);
    let walk = Walk::new(&graph, &vids(&[3, 2, 0, 1, 2])).unwrap();

    assert_eq!(walk.length(), 4);
    assert!(!walk.is_closed());
    assert_eq!(walk.edges().len(), 4);
    assert_eq!(walk.primitive(false).len(), 9);
    assert_eq!(walk.primitive(false)[0], "('v4', 1)");
    assert_eq!(walk.primitive(true)[0], "('v3', 3)");

    let path = walk.path();
    assert_eq!(path.vertices(), &vids(&[3, 2, 0, 1])[..]);

    let section = walk.section(1, 4).unwrap();
    assert!(section.is_closed());
    assert!(walk.section(2, 2).is_none());
    assert!(walk.section(0, 5).is_none());

    assert!(matches!(
        Walk::new(&graph, &vids(&[0, 3])),
        Err(Error::InvalidWalk(_))
    ));
    assert!(matches!(Walk::new(&graph, &[]), Err(Error::InvalidWalk(_))));
}
