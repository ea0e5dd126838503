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

//! Undirected graph with weighted edges.

use crate::adjlist::{fmt_weighted, AdjList, WeightedEntry};
use crate::algorithms;
use crate::error::{Error, Result};
use crate::mst::kruskal;
use crate::shortestpath::{dijkstra, AllPairs, ShortestPath};
use crate::traits::{Graph, Weighted};

use log::debug;
use num_traits::PrimInt;
use std::fmt;

/// Reject negative weights.
pub(crate) fn check_weight<W>(u: &str, v: &str, weight: W) -> Result<()>
where
    W: PrimInt + fmt::Display,
{
    if weight < W::zero() {
        debug!("rejecting edge {} - {} with negative weight {}", u, v, weight);
        return Err(Error::InvalidWeight {
            from: u.to_string(),
            to: v.to_string(),
            weight: weight.to_string(),
        });
    }
    Ok(())
}

/// An undirected graph with non-negative integral edge weights.
///
/// Each edge `{u,v}` is stored in the adjacency lists of both end
/// nodes with the same weight.
///
/// # Example
///
/// ```
/// use named_graph::{Error, WeightedGraph};
/// use named_graph::traits::*;
///
/// let mut g = WeightedGraph::new();
/// g.add_edge("A", "B", 1).unwrap();
/// g.add_edge("A", "C", 4).unwrap();
/// g.add_edge("B", "C", 1).unwrap();
///
/// let sp = g.dijkstra("A", "C").unwrap();
/// assert_eq!(sp.path, vec!["A", "B", "C"]);
/// assert_eq!(sp.cost, 2);
///
/// assert!(matches!(g.add_edge("C", "D", -1), Err(Error::InvalidWeight { .. })));
/// assert_eq!(g.nodes(), vec!["A", "B", "C"]);
/// ```
#[derive(Clone, Debug)]
pub struct WeightedGraph<W = i64> {
    adj: AdjList<WeightedEntry<W>>,
}

impl<W> Default for WeightedGraph<W> {
    fn default() -> Self {
        WeightedGraph {
            adj: AdjList::default(),
        }
    }
}

impl<W> WeightedGraph<W>
where
    W: PrimInt + fmt::Display,
{
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the edge `{u,v}` with the given weight.
    ///
    /// Returns [`Error::InvalidWeight`] if the weight is negative. In
    /// this case the graph is not modified.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: W) -> Result<()> {
        check_weight(u, v, weight)?;
        let uid = self.adj.intern(u);
        let vid = self.adj.intern(v);
        self.adj.push(uid, WeightedEntry { to: vid, weight });
        self.adj.push(vid, WeightedEntry { to: uid, weight });
        Ok(())
    }

    /// Remove one edge `{u,v}`.
    ///
    /// The first entry for `v` in the list of `u` is removed together
    /// with the first entry for `u` in the list of `v`, whatever their
    /// weights.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        if let (Some(uid), Some(vid)) = (self.adj.id(u), self.adj.id(v)) {
            if self.adj.remove_first(uid, vid).is_some() {
                self.adj.remove_first(vid, uid);
            }
        }
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.adj.num_entries() / 2
    }

    /// Return `true` if the graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        algorithms::has_undirected_cycle(self)
    }

    /// Return a shortest path from `start` to `end` and its length.
    ///
    /// Returns `None` if `end` is not reachable from `start`.
    pub fn dijkstra<'a>(&'a self, start: &'a str, end: &'a str) -> Option<ShortestPath<'a, W>> {
        dijkstra::find_named_path(self, start, end)
    }

    /// Compute the shortest paths between all pairs of nodes.
    ///
    /// # Example
    ///
    /// ```
    /// use named_graph::WeightedGraph;
    ///
    /// let mut g = WeightedGraph::new();
    /// g.add_edge("a", "b", 3).unwrap();
    /// g.add_edge("b", "c", 3).unwrap();
    /// g.add_edge("a", "c", 7).unwrap();
    /// g.add_edge("x", "y", 1).unwrap();
    ///
    /// let ap = g.floyd_warshall();
    /// assert_eq!(ap.distance("c", "a"), Some(6));
    /// assert_eq!(ap.path("a", "c").unwrap().path, vec!["a", "b", "c"]);
    /// assert_eq!(ap.distance("a", "x"), None);
    /// ```
    pub fn floyd_warshall(&self) -> AllPairs<'_, Self> {
        AllPairs::new(self)
    }

    /// Return the edges of a minimum spanning forest.
    ///
    /// # Example
    ///
    /// ```
    /// use named_graph::WeightedGraph;
    ///
    /// let mut g = WeightedGraph::new();
    /// g.add_edge("a", "b", 1).unwrap();
    /// g.add_edge("b", "c", 2).unwrap();
    /// g.add_edge("a", "c", 3).unwrap();
    ///
    /// assert_eq!(g.minimum_spanning_tree(), vec![("a", "b", 1), ("b", "c", 2)]);
    /// ```
    pub fn minimum_spanning_tree(&self) -> Vec<(&str, &str, W)> {
        kruskal(self)
            .into_iter()
            .map(|(u, v, w)| (self.name(u), self.name(v), w))
            .collect()
    }
}

impl<W> Graph for WeightedGraph<W> {
    fn node_bound(&self) -> usize {
        self.adj.node_bound()
    }

    fn contains(&self, u: usize) -> bool {
        self.adj.contains(u)
    }

    fn degree(&self, u: usize) -> usize {
        self.adj.entries(u).len()
    }

    fn neighbor(&self, u: usize, i: usize) -> usize {
        self.adj.entries(u)[i].to
    }

    fn id(&self, name: &str) -> Option<usize> {
        self.adj.id(name).filter(|&u| self.adj.contains(u))
    }

    fn name(&self, u: usize) -> &str {
        self.adj.name(u)
    }
}

impl<W> Weighted for WeightedGraph<W>
where
    W: PrimInt + fmt::Display,
{
    type Weight = W;

    fn weight(&self, u: usize, i: usize) -> W {
        self.adj.entries(u)[i].weight
    }
}

impl<W> fmt::Display for WeightedGraph<W>
where
    W: PrimInt + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_weighted(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::WeightedGraph;
    use crate::traits::*;
    use crate::Error;

    #[test]
    fn test_negative_weight() {
        let mut g = WeightedGraph::<i64>::new();
        g.add_edge("a", "b", 2).unwrap();
        let err = g.add_edge("b", "c", -3).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidWeight {
                from: "b".to_string(),
                to: "c".to_string(),
                weight: "-3".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid weight -3 for edge b - c: weights must be non-negative");
        assert_eq!(g.nodes(), vec!["a", "b"]);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_zero_weight() {
        let mut g = WeightedGraph::<i64>::new();
        g.add_edge("a", "b", 0).unwrap();
        assert_eq!(g.weighted_neighbors("b"), vec![("a", 0)]);
        assert_eq!(g.dijkstra("a", "b").map(|sp| sp.cost), Some(0));
    }

    #[test]
    fn test_display() {
        let mut g = WeightedGraph::<i64>::new();
        g.add_edge("a", "b", 5).unwrap();
        g.add_edge("a", "c", 7).unwrap();
        assert_eq!(g.to_string(), "a: b(5) c(7)\nb: a(5)\nc: a(7)\n");
    }

    #[test]
    fn test_remove_edge() {
        let mut g = WeightedGraph::<u32>::new();
        g.add_edge("a", "b", 5).unwrap();
        g.add_edge("a", "b", 2).unwrap();
        g.remove_edge("b", "a");
        assert_eq!(g.weighted_neighbors("a"), vec![("b", 2)]);
        assert_eq!(g.weighted_neighbors("b"), vec![("a", 2)]);
        assert_eq!(g.dijkstra("a", "b").map(|sp| sp.cost), Some(2));
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let mut g = WeightedGraph::<i64>::new();
        g.add_edge("a", "b", 1).unwrap();
        g.add_edge("c", "d", 1).unwrap();
        assert_eq!(g.dijkstra("a", "d"), None);
        assert_eq!(g.dijkstra("a", "zz"), None);
        let sp = g.dijkstra("zz", "zz").unwrap();
        assert_eq!(sp.path, vec!["zz"]);
        assert_eq!(sp.cost, 0);
    }

    #[test]
    fn test_mst_forest() {
        let mut g = WeightedGraph::<i64>::new();
        g.add_edge("a", "b", 4).unwrap();
        g.add_edge("c", "d", 1).unwrap();
        g.add_edge("b", "a", 2).unwrap();
        assert_eq!(g.minimum_spanning_tree(), vec![("c", "d", 1), ("a", "b", 2)]);
        // the parallel edges form a cycle
        assert!(g.has_cycle());
    }
}
