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

//! Directed graph with weighted edges.

use crate::adjlist::{fmt_weighted, AdjList, WeightedEntry};
use crate::algorithms;
use crate::error::Result;
use crate::shortestpath::{bfs, dijkstra, AllPairs, ShortestPath};
use crate::traits::{Graph, Weighted};
use crate::weightedgraph::check_weight;

use num_traits::PrimInt;
use std::fmt;

/// A directed graph with non-negative integral edge weights.
///
/// # Example
///
/// ```
/// use named_graph::WeightedDigraph;
/// use named_graph::traits::*;
///
/// let mut g = WeightedDigraph::new();
/// g.add_edge("s", "a", 2).unwrap();
/// g.add_edge("s", "b", 5).unwrap();
/// g.add_edge("a", "b", 1).unwrap();
/// g.add_edge("b", "t", 1).unwrap();
///
/// let sp = g.dijkstra("s", "t").unwrap();
/// assert_eq!(sp.path, vec!["s", "a", "b", "t"]);
/// assert_eq!(sp.cost, 4);
/// assert_eq!(g.dijkstra("t", "s"), None);
/// assert_eq!(g.topological_sort(), Some(vec!["s", "a", "b", "t"]));
/// ```
#[derive(Clone, Debug)]
pub struct WeightedDigraph<W = i64> {
    adj: AdjList<WeightedEntry<W>>,
}

impl<W> Default for WeightedDigraph<W> {
    fn default() -> Self {
        WeightedDigraph {
            adj: AdjList::default(),
        }
    }
}

impl<W> WeightedDigraph<W>
where
    W: PrimInt + fmt::Display,
{
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the edge `(u,v)` with the given weight.
    ///
    /// Returns [`Error::InvalidWeight`][crate::Error::InvalidWeight]
    /// if the weight is negative. In this case the graph is not
    /// modified.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: W) -> Result<()> {
        check_weight(u, v, weight)?;
        let uid = self.adj.intern(u);
        let vid = self.adj.intern(v);
        self.adj.push(uid, WeightedEntry { to: vid, weight });
        Ok(())
    }

    /// Remove the first edge `(u,v)` from the list of `u`.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        if let (Some(uid), Some(vid)) = (self.adj.id(u), self.adj.id(v)) {
            self.adj.remove_first(uid, vid);
        }
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.adj.num_entries()
    }

    /// Return `true` if the graph contains a directed cycle.
    pub fn has_cycle(&self) -> bool {
        algorithms::has_directed_cycle(self)
    }

    /// Return the nodes in topological order.
    ///
    /// Returns `None` if the graph contains a cycle.
    pub fn topological_sort(&self) -> Option<Vec<&str>> {
        algorithms::toposort_names(self)
    }

    /// Return a directed path with the minimal number of edges.
    ///
    /// The weights are ignored.
    pub fn shortest_path_unweighted<'a>(&'a self, start: &'a str, end: &'a str) -> Option<Vec<&'a str>> {
        bfs::find_named_path(self, start, end)
    }

    /// Return a shortest directed path from `start` to `end` and its
    /// length.
    ///
    /// Returns `None` if `end` is not reachable from `start`.
    pub fn dijkstra<'a>(&'a self, start: &'a str, end: &'a str) -> Option<ShortestPath<'a, W>> {
        dijkstra::find_named_path(self, start, end)
    }

    /// Compute the shortest directed paths between all pairs of nodes.
    pub fn floyd_warshall(&self) -> AllPairs<'_, Self> {
        AllPairs::new(self)
    }
}

impl<W> Graph for WeightedDigraph<W> {
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

impl<W> Weighted for WeightedDigraph<W>
where
    W: PrimInt + fmt::Display,
{
    type Weight = W;

    fn weight(&self, u: usize, i: usize) -> W {
        self.adj.entries(u)[i].weight
    }
}

impl<W> fmt::Display for WeightedDigraph<W>
where
    W: PrimInt + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_weighted(self, f)
    }
}
