// Copyright (c) 2016-2026 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Some common graph classes.
//!
//! The nodes of the generated graphs are named by the decimal numbers
//! `"0"`, `"1"`, ... and are created in this order.

use crate::builder::Buildable;

fn name(i: usize) -> String {
    i.to_string()
}

/// Returns a path with `m` edges.
///
/// The path is directed if G is a digraph.
pub fn path<G>(m: usize) -> G
where
    G: Buildable,
{
    let mut g = G::default();
    for i in 0..m {
        g.add_link(&name(i), &name(i + 1));
    }
    g
}

/// Returns a cycle with length `n`.
///
/// The cycle is directed if G is directed
pub fn cycle<G>(n: usize) -> G
where
    G: Buildable,
{
    let mut g = G::default();
    for i in 0..n {
        g.add_link(&name(i), &name((i + 1) % n));
    }
    g
}

/// Returns the complete graph on `n` nodes.
///
/// If G is a digraph, the edges run from smaller to larger numbers.
pub fn complete_graph<G>(n: usize) -> G
where
    G: Buildable,
{
    let mut g = G::default();
    for i in 0..n {
        for j in i + 1..n {
            g.add_link(&name(i), &name(j));
        }
    }
    g
}

/// Returns a star graph with `n` rays.
///
/// The center node is `"0"`, the leaves are `"1"` to `n`. If G is a
/// digraph, the edges are directed away from the center.
pub fn star<G>(n: usize) -> G
where
    G: Buildable,
{
    let mut g = G::default();
    for i in 1..=n {
        g.add_link(&name(0), &name(i));
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Graph;
    use crate::{DiGraph, UnGraph};

    #[test]
    fn test_complete() {
        let g: UnGraph = complete_graph(5);
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.num_edges(), 10);
        for u in g.node_ids() {
            assert_eq!(g.degree(u), 4);
        }
    }

    #[test]
    fn test_cycle() {
        let g: DiGraph = cycle(4);
        assert_eq!(g.nodes(), vec!["0", "1", "2", "3"]);
        assert!(g.has_edge("3", "0"));
        assert!(!g.has_edge("0", "3"));
    }

    #[test]
    fn test_star() {
        let g: UnGraph = star(3);
        assert_eq!(g.neighbors("0"), vec!["1", "2", "3"]);
        assert_eq!(g.neighbors("2"), vec!["0"]);
    }
}
