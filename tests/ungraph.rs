/*
 * Copyright (c) 2026 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use named_graph::traits::*;
use named_graph::{classes, UnGraph};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample() -> UnGraph {
    let mut g = UnGraph::new();
    g.add_edge("A", "B");
    g.add_edge("A", "C");
    g.add_edge("B", "D");
    g.add_edge("E", "F");
    g
}

#[test]
fn test_queries() {
    init();
    let g = sample();

    assert_eq!(g.to_string(), "A: B C\nB: A D\nC: A\nD: B\nE: F\nF: E\n");
    assert!(g.has_edge("A", "B"));
    assert!(g.has_edge("B", "A"));
    assert!(!g.has_edge("A", "D"));
    assert_eq!(g.neighbors("A"), vec!["B", "C"]);
    assert_eq!(g.neighbors("E"), vec!["F"]);
    assert_eq!(g.nodes(), vec!["A", "B", "C", "D", "E", "F"]);
    assert_eq!(g.num_nodes(), 6);
    assert_eq!(g.num_edges(), 4);
}

#[test]
fn test_traversal() {
    init();
    let g = sample();

    assert_eq!(g.bfs("A"), vec!["A", "B", "C", "D"]);
    assert_eq!(g.dfs("A"), vec!["A", "B", "D", "C"]);
    assert_eq!(g.bfs("F"), vec!["F", "E"]);
}

#[test]
fn test_connectivity() {
    init();
    let mut g = sample();

    assert!(!g.is_connected());
    assert_eq!(
        g.connected_components(),
        vec![vec!["A", "B", "C", "D"], vec!["E", "F"]]
    );
    assert_eq!(g.shortest_path_unweighted("A", "D"), Some(vec!["A", "B", "D"]));
    assert_eq!(g.shortest_path_unweighted("A", "F"), None);
    assert_eq!(g.shortest_path_unweighted("A", "A"), Some(vec!["A"]));

    g.add_edge("D", "E");
    assert!(g.is_connected());
    assert_eq!(g.connected_components().len(), 1);
    assert_eq!(
        g.shortest_path_unweighted("C", "F"),
        Some(vec!["C", "A", "B", "D", "E", "F"])
    );

    assert!(UnGraph::new().is_connected());
    assert!(UnGraph::new().connected_components().is_empty());
}

#[test]
fn test_remove() {
    init();
    let mut g = sample();
    assert!(!g.has_cycle());

    g.remove_edge("A", "B");
    assert!(!g.has_edge("A", "B"));
    assert!(!g.has_edge("B", "A"));
    assert_eq!(g.to_string(), "A: C\nB: D\nC: A\nD: B\nE: F\nF: E\n");
    assert_eq!(g.connected_components().len(), 3);
}

#[test]
fn test_cycle() {
    init();
    let mut g = UnGraph::new();
    g.add_edge("A", "B");
    g.add_edge("A", "C");
    g.add_edge("B", "D");
    assert!(!g.has_cycle());

    g.add_edge("D", "A");
    assert!(g.has_cycle());

    let g: UnGraph = classes::complete_graph(4);
    assert!(g.has_cycle());
    let g: UnGraph = classes::star(10);
    assert!(!g.has_cycle());
}

#[test]
fn test_long_path() {
    init();
    let n = 100_000;
    let g: UnGraph = classes::path(n);
    assert_eq!(g.dfs("0").len(), n + 1);
    assert!(g.is_connected());
    assert!(!g.has_cycle());
    let end = n.to_string();
    let path = g.shortest_path_unweighted("0", &end).unwrap();
    assert_eq!(path.len(), n + 1);
}
