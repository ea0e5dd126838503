/*
 * Copyright (c) 2017, 2018, 2021, 2022, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start node $s \in
//! V$ to all other nodes in (directed or undirected) graph. Each edge is
//! assigned a non-negative weight (or length) $w \colon E \to \mathbb{Z}_+$.
//!
//! This implementation does not use a priority queue. In each round the
//! unfinished node with the smallest tentative distance is selected by a
//! linear scan over all nodes in insertion order, so ties are broken in
//! favour of the node added first. This gives a running time of
//! $O(|V|^2 + |E|)$, which is fine for the small graphs this crate is
//! meant for and makes the result fully deterministic.
//!
//! # Example
//!
//! ```
//! use named_graph::WeightedGraph;
//! use named_graph::traits::*;
//! use named_graph::shortestpath::dijkstra;
//!
//! let mut g = WeightedGraph::new();
//! g.add_edge("a", "b", 9).unwrap();
//! g.add_edge("a", "c", 2).unwrap();
//! g.add_edge("a", "e", 14).unwrap();
//! g.add_edge("b", "d", 6).unwrap();
//! g.add_edge("c", "d", 8).unwrap();
//! g.add_edge("c", "e", 9).unwrap();
//! g.add_edge("c", "f", 10).unwrap();
//! g.add_edge("d", "f", 15).unwrap();
//! g.add_edge("e", "f", 7).unwrap();
//!
//! let (path, dist) = dijkstra::find_path(&g, g.id("e").unwrap(), g.id("b").unwrap()).unwrap();
//! let path: Vec<_> = path.into_iter().map(|u| g.name(u)).collect();
//! assert_eq!(path, vec!["e", "c", "a", "b"]);
//! assert_eq!(dist, 20);
//! ```

use super::ShortestPath;
use crate::search::path_from_preds;
use crate::traits::Weighted;

use log::trace;
use num_traits::{CheckedAdd, Zero};

/// Compute the distances of all nodes from `src`.
///
/// Returns a vector indexed by node id. The entry of a node is
/// `Some((dist, pred))` if it is reachable from `src`, where `dist` is
/// the length of a shortest path and `pred` the predecessor of the
/// node on this path (`None` for `src` itself). Unreachable nodes have
/// the entry `None`.
///
/// Distances that would overflow the weight type are treated as
/// infinite.
pub fn distances<G>(g: &G, src: usize) -> Vec<Option<(G::Weight, Option<usize>)>>
where
    G: Weighted + ?Sized,
{
    let n = g.node_bound().max(src + 1);
    let mut dist: Vec<Option<(G::Weight, Option<usize>)>> = vec![None; n];
    let mut done = vec![false; n];
    dist[src] = Some((<G::Weight as Zero>::zero(), None));

    loop {
        // select the unfinished node with minimal distance,
        // the first one wins on ties
        let mut best: Option<(usize, G::Weight)> = None;
        for u in g.node_ids() {
            if done[u] {
                continue;
            }
            if let Some((d, _)) = dist[u] {
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((u, d));
                }
            }
        }

        let (u, du) = match best {
            Some(best) => best,
            None => break,
        };
        done[u] = true;
        trace!("dijkstra: settled {} at distance {}", g.name(u), du);

        for i in 0..g.degree(u) {
            let v = g.neighbor(u, i);
            if done[v] {
                continue;
            }
            let dv = match du.checked_add(&g.weight(u, i)) {
                Some(dv) => dv,
                None => continue,
            };
            if dist[v].map_or(true, |(d, _)| dv < d) {
                dist[v] = Some((dv, Some(u)));
            }
        }
    }

    dist
}

/// Run Dijkstra's algorithm and return a shortest path from `src` to `snk`.
///
/// The function returns the nodes on the path (including both end
/// nodes) and its length. If `src == snk` the path consists of this
/// single node and has length zero.
///
/// Returns `None` if `snk` is not reachable from `src`.
pub fn find_path<G>(g: &G, src: usize, snk: usize) -> Option<(Vec<usize>, G::Weight)>
where
    G: Weighted + ?Sized,
{
    let dist = distances(g, src);
    let (cost, _) = dist.get(snk).copied().flatten()?;
    let mut path: Vec<_> = path_from_preds(snk, |u| dist[u].and_then(|(_, p)| p)).collect();
    path.reverse();
    Some((path, cost))
}

/// Same as [`find_path`] for node names.
///
/// A path from a node to itself consists of this single node and has
/// length zero, even if the node is not contained in the graph.
pub(crate) fn find_named_path<'a, G>(g: &'a G, start: &'a str, end: &'a str) -> Option<ShortestPath<'a, G::Weight>>
where
    G: Weighted + ?Sized,
{
    if start == end {
        return Some(ShortestPath {
            path: vec![start],
            cost: <G::Weight as Zero>::zero(),
        });
    }
    let (path, cost) = find_path(g, g.id(start)?, g.id(end)?)?;
    Some(ShortestPath {
        path: path.into_iter().map(|u| g.name(u)).collect(),
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::{distances, find_path};
    use crate::traits::Graph;
    use crate::{WeightedDigraph, WeightedGraph};

    #[test]
    fn test_triangle() {
        let mut g = WeightedGraph::new();
        g.add_edge("a", "b", 1).unwrap();
        g.add_edge("a", "c", 4).unwrap();
        g.add_edge("b", "c", 1).unwrap();

        let id = |name: &str| g.id(name).unwrap();
        let (path, cost) = find_path(&g, id("a"), id("c")).unwrap();
        assert_eq!(path, vec![id("a"), id("b"), id("c")]);
        assert_eq!(cost, 2);

        let dist = distances(&g, id("c"));
        assert_eq!(dist[id("a")], Some((2, Some(id("b")))));
        assert_eq!(dist[id("c")], Some((0, None)));
    }

    #[test]
    fn test_ties() {
        let mut g = WeightedGraph::new();
        g.add_edge("a", "b", 1).unwrap();
        g.add_edge("a", "c", 1).unwrap();
        g.add_edge("c", "d", 1).unwrap();
        g.add_edge("b", "d", 1).unwrap();

        let id = |name: &str| g.id(name).unwrap();
        let (path, cost) = find_path(&g, id("a"), id("d")).unwrap();
        assert_eq!(path, vec![id("a"), id("b"), id("d")]);
        assert_eq!(cost, 2);
    }

    #[test]
    fn test_parallel_edges() {
        let mut g = WeightedGraph::new();
        g.add_edge("a", "b", 5).unwrap();
        g.add_edge("a", "b", 2).unwrap();

        let (_, cost) = find_path(&g, g.id("a").unwrap(), g.id("b").unwrap()).unwrap();
        assert_eq!(cost, 2);
    }

    #[test]
    fn test_overflow() {
        let mut g = WeightedGraph::<u8>::new();
        g.add_edge("a", "b", 200).unwrap();
        g.add_edge("b", "c", 100).unwrap();

        let id = |name: &str| g.id(name).unwrap();
        assert_eq!(find_path(&g, id("a"), id("b")).map(|(_, c)| c), Some(200));
        assert_eq!(find_path(&g, id("a"), id("c")), None);
    }

    #[test]
    fn test_directed() {
        let mut g = WeightedDigraph::new();
        g.add_edge("a", "b", 3).unwrap();
        g.add_edge("b", "c", 3).unwrap();
        g.add_edge("c", "a", 1).unwrap();

        let id = |name: &str| g.id(name).unwrap();
        assert_eq!(find_path(&g, id("a"), id("c")).map(|(_, c)| c), Some(6));
        assert_eq!(find_path(&g, id("c"), id("b")).map(|(_, c)| c), Some(4));
    }
}
