//! Snapshot tests for the `Display` formatting of PMC results on the named
//! scenarios (S1-S6). Catches accidental changes to `NodeSet`/`NodeSetSet`
//! formatting or to the scenarios' PMC sets themselves.

use insta::assert_snapshot;

use pmc_enum::{Graph, PMCEnumerator};

fn pmcs_display(g: Graph) -> String {
    let mut e = PMCEnumerator::new(g);
    format!("{}", e.get().unwrap())
}

#[test]
fn snapshot_s1_two_isolated_vertices() {
    let g = Graph::new(2);
    assert_snapshot!(pmcs_display(g), @"{{0}, {1}}");
}

#[test]
fn snapshot_s2_single_edge() {
    let mut g = Graph::new(2);
    g.add_edge(0, 1).unwrap();
    assert_snapshot!(pmcs_display(g), @"{{0, 1}}");
}

#[test]
fn snapshot_s3_two_edges_sharing_a_vertex() {
    let mut g = Graph::new(3);
    g.add_edge(0, 1).unwrap();
    g.add_edge(0, 2).unwrap();
    assert_snapshot!(pmcs_display(g), @"{{0, 1}, {0, 2}}");
}

#[test]
fn snapshot_s4_four_cycle() {
    let mut g = Graph::new(4);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(2, 3).unwrap();
    g.add_edge(3, 0).unwrap();
    assert_snapshot!(pmcs_display(g), @"{{0, 1, 2}, {0, 1, 3}, {0, 2, 3}, {1, 2, 3}}");
}

#[test]
fn snapshot_s5_triangle_on_stilts() {
    let mut g = Graph::new(5);
    g.add_edge(0, 3).unwrap();
    g.add_edge(3, 2).unwrap();
    g.add_edge(3, 4).unwrap();
    g.add_edge(2, 4).unwrap();
    g.add_edge(1, 4).unwrap();
    assert_snapshot!(pmcs_display(g), @"{{0, 3}, {1, 4}, {2, 3, 4}}");
}

#[test]
fn snapshot_s6_path_plus_isolated_vertex() {
    let mut g = Graph::new(4);
    g.add_edge(0, 2).unwrap();
    g.add_edge(1, 2).unwrap();
    assert_snapshot!(pmcs_display(g), @"{{0, 2}, {1, 2}, {3}}");
}
