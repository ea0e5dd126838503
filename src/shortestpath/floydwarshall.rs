// Copyright (c) 2016, 2017, 2018, 2020, 2022, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![allow(clippy::type_complexity)]

//! All-Pairs-Shortest-Path algorithm of Floyd and Warshall.

use crate::traits::Weighted;

use num_traits::{CheckedAdd, Zero};

/// Solve the All-Pairs-Shortest-Path-Problem with the algorithm of
/// Floyd and Warshall.
///
/// The adjacency entries are used as stored, so this works for
/// directed and undirected graphs alike. Of several parallel entries
/// the lightest one is used.
///
/// Returns a 2D vector indexed by node ids with entries `(dist, pred)`
/// for each pair of nodes where `dist` is the length of the shortest
/// path and `pred` is the predecessor of the last node. Unreachable
/// pairs (and ids that are not nodes of the graph) have the entry
/// `None`.
///
/// # Example
/// ```
/// use named_graph::WeightedDigraph;
/// use named_graph::traits::*;
/// use named_graph::shortestpath::floydwarshall;
///
/// let mut g = WeightedDigraph::new();
/// for &(u, v, w) in &[("0", "1", 6), ("0", "2", 5),
///                     ("1", "2", 7), ("1", "3", 3), ("1", "4", 2),
///                     ("2", "3", 4), ("3", "4", 8),
///                     ("3", "1", 1),
///                     ("4", "0", 2), ("4", "3", 7)]
/// {
///     g.add_edge(u, v, w).unwrap();
/// }
///
/// let result = floydwarshall::all_pairs(&g);
/// let mut s = [[0; 5]; 5];
/// for (i, v) in result.into_iter().enumerate() {
///     for (j, d) in v.into_iter().enumerate() {
///         s[i][j] = d.unwrap().0;
///     }
/// }
/// assert_eq!(s, [[ 0, 6, 5, 9, 8],
///                [ 4, 0, 7, 3, 2],
///                [ 9, 5, 0, 4, 7],
///                [ 5, 1, 8, 0, 3],
///                [ 2, 8, 7, 7, 0]]);
/// ```
pub fn all_pairs<G>(g: &G) -> Vec<Vec<Option<(G::Weight, usize)>>>
where
    G: Weighted + ?Sized,
{
    let n = g.node_bound();
    let nodes: Vec<usize> = g.node_ids().collect();
    let mut dist: Vec<Vec<Option<(G::Weight, usize)>>> = vec![vec![None; n]; n];

    for &u in &nodes {
        dist[u][u] = Some((<G::Weight as Zero>::zero(), u));
    }

    for &u in &nodes {
        for i in 0..g.degree(u) {
            let v = g.neighbor(u, i);
            let w = g.weight(u, i);
            if dist[u][v].map_or(true, |(d, _)| w < d) {
                dist[u][v] = Some((w, u));
            }
        }
    }

    for &k in &nodes {
        for &u in &nodes {
            if u == k {
                continue;
            }
            if let Some((dist_uk, _)) = dist[u][k] {
                for &v in &nodes {
                    if v == k {
                        continue;
                    }
                    if let Some((dist_kv, pred_kv)) = dist[k][v] {
                        let d = match dist_uk.checked_add(&dist_kv) {
                            Some(d) => d,
                            None => continue,
                        };
                        if dist[u][v].map_or(true, |(x, _)| d < x) {
                            dist[u][v] = Some((d, pred_kv));
                        }
                    }
                }
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::all_pairs;
    use crate::traits::Graph;
    use crate::WeightedGraph;

    #[test]
    fn test_undirected() {
        let mut g = WeightedGraph::<i64>::new();
        g.add_edge("a", "b", 1).unwrap();
        g.add_edge("b", "c", 1).unwrap();
        g.add_edge("a", "c", 4).unwrap();
        g.add_edge("x", "y", 1).unwrap();

        let id = |name: &str| g.id(name).unwrap();
        let dist = all_pairs(&g);
        assert_eq!(dist[id("a")][id("c")], Some((2, id("b"))));
        assert_eq!(dist[id("c")][id("a")], Some((2, id("b"))));
        assert_eq!(dist[id("a")][id("y")], None);
        assert_eq!(dist[id("y")][id("x")], Some((1, id("y"))));
    }
}
