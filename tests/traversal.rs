//! Traversal and analysis integration tests.
//!
//! These tests run the analyses through the public API on small hand-checked graphs:
//! 1. Full-forest depth-first search and edge classification
//! 2. Connectivity and circuit detection
//! 3. Cycle extraction and path enumeration
//! 4. Topological order and strongly connected components

use graphwalk::{
    algorithms::{
        all_paths_between, components, condensation, contains_circuit, cycle_from_circuit,
        depth_first_search, dfs, find_cycle, is_connected, low_link_values, postorder,
        restricted_find_cycle, strongly_connected_components, topological_sort, walk_between,
    },
    AdjacencyList, EdgeKind, Error, Graph, GraphBase, GraphConfig, VertexId,
};
use strum::IntoEnumIterator;

fn vid(index: usize) -> VertexId {
    VertexId::new(index)
}

fn vids(indices: &[usize]) -> Vec<VertexId> {
    indices.iter().copied().map(VertexId::new).collect()
}

fn graph_with(n: usize, config: GraphConfig, edges: &[(usize, usize)]) -> AdjacencyList {
    let mut graph = AdjacencyList::create_empty_graph(n, config);
    for &(u, v) in edges {
        graph.add_edge(vid(u), vid(v)).unwrap();
    }
    graph
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_dfs_forest_undirected() {
    init_logging();

    // Square 0-1-2-3-0, edge 4-5, isolated 6
    let graph = graph_with(
        7,
        GraphConfig::default(),
        &[(0, 1), (1, 2), (2, 3), (3, 0), (4, 5)],
    );
    let forest = depth_first_search(&graph);

    assert_eq!(forest.component_count(), 3);
    assert_eq!(forest.roots(), &vids(&[0, 4, 6])[..]);
    assert_eq!(forest.component_of(vid(3)), 0);
    assert_eq!(forest.component_of(vid(5)), 1);
    assert_eq!(forest.component_of(vid(6)), 2);

    assert_eq!(
        forest.tree_edges(),
        &[
            (vid(0), vid(1)),
            (vid(1), vid(2)),
            (vid(2), vid(3)),
            (vid(4), vid(5)),
        ][..]
    );
    assert_eq!(forest.back_edges(), &[(vid(3), vid(0))][..]);
    assert_eq!(forest.count(EdgeKind::Forward), 0);
    assert_eq!(forest.count(EdgeKind::Cross), 0);
    assert_eq!(forest.classified_count(), graph.edge_count());

    // Entry order follows pushes across the whole forest
    let entry: Vec<usize> = graph.vertex_ids().map(|v| forest.entry_order(v)).collect();
    assert_eq!(entry, vec![1, 2, 3, 4, 5, 6, 7]);
    let exit: Vec<usize> = graph.vertex_ids().map(|v| forest.exit_order(v)).collect();
    assert_eq!(exit, vec![4, 3, 2, 1, 6, 5, 7]);
}

#[test]
fn test_dfs_forest_directed_classification() {
    // 0 -> 1 -> 2, 0 -> 2 (forward), 2 -> 0 (back), 3 -> 1 (cross)
    let graph = graph_with(
        4,
        GraphConfig::directed(),
        &[(0, 1), (1, 2), (0, 2), (2, 0), (3, 1)],
    );
    let forest = depth_first_search(&graph);

    assert_eq!(
        forest.edges(EdgeKind::Tree),
        &[(vid(0), vid(1)), (vid(1), vid(2))][..]
    );
    assert_eq!(forest.edges(EdgeKind::Back), &[(vid(2), vid(0))][..]);
    assert_eq!(forest.edges(EdgeKind::Forward), &[(vid(0), vid(2))][..]);
    assert_eq!(forest.edges(EdgeKind::Cross), &[(vid(3), vid(1))][..]);

    let total: usize = EdgeKind::iter().map(|kind| forest.count(kind)).sum();
    assert_eq!(total, graph.edge_count());
}

#[test]
fn test_timestamps_nest() {
    let graph = AdjacencyList::create_complete_graph(5);
    let forest = depth_first_search(&graph);

    for u in graph.vertex_ids() {
        assert!(forest.discovery(u) < forest.finish(u));
        for v in graph.vertex_ids() {
            let (du, fu) = (forest.discovery(u), forest.finish(u));
            let (dv, fv) = (forest.discovery(v), forest.finish(v));
            let nested = (du <= dv && fv <= fu) || (dv <= du && fu <= fv);
            let disjoint = fu < dv || fv < du;
            assert!(nested || disjoint, "{u} and {v} overlap");
        }
    }
}

#[test]
fn test_dfs_iterator_and_postorder() {
    let graph = graph_with(5, GraphConfig::directed(), &[(0, 1), (0, 2), (1, 3), (4, 0)]);

    let reached: Vec<VertexId> = dfs(&graph, vid(0)).collect();
    assert_eq!(reached, vids(&[0, 1, 3, 2]));

    let order = postorder(&graph);
    assert_eq!(order, vids(&[3, 1, 2, 0, 4]));
}

#[test]
fn test_connectivity() {
    let path = graph_with(4, GraphConfig::default(), &[(0, 1), (1, 2), (2, 3)]);
    assert!(is_connected(&path));
    assert_eq!(components(&path), 1);
    assert!(!contains_circuit(&path));

    let split = graph_with(4, GraphConfig::default(), &[(0, 1), (2, 3)]);
    assert!(!is_connected(&split));
    assert_eq!(components(&split), 2);
    assert!(!contains_circuit(&split));

    assert!(!is_connected(&AdjacencyList::new()));
}

#[test]
fn test_circuits_in_regular_graphs() {
    // Every 2-regular graph is a union of cycles
    let ring = AdjacencyList::create_regular_graph(6, 2).unwrap();
    assert!(contains_circuit(&ring));
    assert!(is_connected(&ring));

    let matching = AdjacencyList::create_regular_graph(6, 1).unwrap();
    assert!(!contains_circuit(&matching));
    assert_eq!(components(&matching), 3);
}

#[test]
fn test_find_cycle() {
    let square = graph_with(4, GraphConfig::default(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    let cycle = find_cycle(&square).unwrap();
    assert_eq!(cycle.length(), 4);
    assert!(cycle.is_closed());

    let tree = graph_with(5, GraphConfig::default(), &[(0, 1), (0, 2), (2, 3), (2, 4)]);
    assert!(find_cycle(&tree).is_none());

    let dag = graph_with(3, GraphConfig::directed(), &[(0, 1), (1, 2), (0, 2)]);
    assert!(find_cycle(&dag).is_none());

    let directed_cycle = graph_with(3, GraphConfig::directed(), &[(0, 1), (1, 2), (2, 1)]);
    let cycle = find_cycle(&directed_cycle).unwrap();
    assert_eq!(cycle.vertices(), &vids(&[1, 2, 1])[..]);
}

#[test]
fn test_restricted_find_cycle() {
    // The search skips the first adjacency entry of every vertex, so the square
    // returns straight back along its second edge
    let square = graph_with(4, GraphConfig::default(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    let walk = restricted_find_cycle(&square).unwrap().unwrap();
    assert!(walk.is_closed());
    assert_eq!(walk.vertices(), &vids(&[0, 3, 0])[..]);

    // On a triangle the only way back uses a first entry
    let triangle = AdjacencyList::create_complete_graph(3);
    assert_eq!(restricted_find_cycle(&triangle), Ok(None));

    let path = graph_with(3, GraphConfig::default(), &[(0, 1), (1, 2)]);
    assert!(matches!(
        restricted_find_cycle(&path),
        Err(Error::PreconditionViolation(_))
    ));
    assert!(matches!(
        restricted_find_cycle(&AdjacencyList::new()),
        Err(Error::PreconditionViolation(_))
    ));
}

#[test]
fn test_cycle_from_circuit() {
    let graph = graph_with(5, GraphConfig::default(), &[(0, 1), (1, 2), (2, 3), (3, 0), (3, 4)]);

    let cycle = cycle_from_circuit(&graph, vid(3), vid(0)).unwrap().unwrap();
    assert!(cycle.is_closed());
    assert_eq!(cycle.length(), 4);

    assert_eq!(cycle_from_circuit(&graph, vid(3), vid(4)), Ok(None));
    assert!(matches!(
        cycle_from_circuit(&graph, vid(0), vid(2)),
        Err(Error::InvalidWalk(_))
    ));
}

#[test]
fn test_paths() {
    let graph = graph_with(4, GraphConfig::simple(), &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    let paths = all_paths_between(&graph, vid(0), vid(2)).unwrap();

    let sequences: Vec<Vec<VertexId>> = paths.iter().map(|p| p.vertices().to_vec()).collect();
    assert_eq!(sequences, vec![vids(&[0, 1, 2]), vids(&[0, 3, 2])]);

    let walk = walk_between(&graph, vid(0), vid(2)).unwrap().unwrap();
    assert_eq!(walk.vertices(), &vids(&[0, 3, 2])[..]);
}

#[test]
fn test_topological_sort() {
    let graph = graph_with(
        6,
        GraphConfig::directed(),
        &[(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)],
    );
    let order = topological_sort(&graph);

    assert_eq!(order.len(), 6);
    let mut position = vec![0; 6];
    for (i, v) in order.iter().enumerate() {
        position[v.index()] = i;
    }
    for edge in graph.edges() {
        let (u, v) = edge.endpoints();
        assert!(position[u.index()] < position[v.index()]);
    }
}

#[test]
fn test_strongly_connected_components() {
    // {0, 1, 2} -> {3, 4} -> {5}
    let graph = graph_with(
        6,
        GraphConfig::directed(),
        &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3), (4, 5)],
    );
    let sccs = strongly_connected_components(&graph).unwrap();

    let mut sizes: Vec<usize> = sccs.iter().map(Vec::len).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![1, 2, 3]);

    // Closing order puts sinks first
    assert_eq!(sccs[0], vids(&[5]));

    let (vertex_to_scc, edges) = condensation(&graph, &sccs);
    assert_eq!(vertex_to_scc[0], vertex_to_scc[2]);
    assert_eq!(vertex_to_scc[3], vertex_to_scc[4]);
    assert_eq!(edges.len(), 2);

    // Discovery order 0, 1, 2, 3, 4, 5; the cycles pull low-links back to their heads
    let low = low_link_values(&graph).unwrap();
    assert_eq!(low.values(), &[0, 0, 0, 3, 3, 5]);
    for v in graph.vertex_ids() {
        assert!(low.low_link(v) <= low.discovery(v));
    }

    assert!(matches!(
        strongly_connected_components(&AdjacencyList::create_complete_graph(3)),
        Err(Error::PreconditionViolation(_))
    ));
}
