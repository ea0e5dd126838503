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

//! Directed graph without weights.

use crate::adjlist::{fmt_adjacency, AdjList};
use crate::algorithms;
use crate::builder::Buildable;
use crate::shortestpath::bfs;
use crate::traits::Graph;

use std::fmt;

/// A directed graph with named nodes.
///
/// An edge `(u,v)` is only stored in the adjacency list of its source
/// `u`. A node that is only the sink of edges belongs to the graph as
/// long as at least one edge points to it.
///
/// # Example
///
/// ```
/// use named_graph::DiGraph;
/// use named_graph::traits::*;
///
/// let mut g = DiGraph::new();
/// g.add_edge("A", "B");
/// g.add_edge("A", "C");
/// g.add_edge("B", "D");
///
/// assert!(g.has_edge("A", "B"));
/// assert!(!g.has_edge("B", "A"));
/// assert_eq!(g.topological_sort(), Some(vec!["A", "C", "B", "D"]));
///
/// g.add_edge("B", "A");
/// assert!(g.has_cycle());
/// assert_eq!(g.topological_sort(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiGraph {
    adj: AdjList<usize>,
}

impl DiGraph {
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the edge `(u,v)`.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        let uid = self.adj.intern(u);
        let vid = self.adj.intern(v);
        self.adj.push(uid, vid);
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
    /// Returns `None` if `end` is not reachable from `start`.
    pub fn shortest_path_unweighted<'a>(&'a self, start: &'a str, end: &'a str) -> Option<Vec<&'a str>> {
        bfs::find_named_path(self, start, end)
    }
}

impl Graph for DiGraph {
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
        self.adj.entries(u)[i]
    }

    fn id(&self, name: &str) -> Option<usize> {
        self.adj.id(name).filter(|&u| self.adj.contains(u))
    }

    fn name(&self, u: usize) -> &str {
        self.adj.name(u)
    }
}

impl Buildable for DiGraph {
    fn add_link(&mut self, u: &str, v: &str) {
        self.add_edge(u, v)
    }
}

impl fmt::Display for DiGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_adjacency(self, f)
    }
}

impl<'a> Extend<(&'a str, &'a str)> for DiGraph {
    fn extend<I: IntoIterator<Item = (&'a str, &'a str)>>(&mut self, iter: I) {
        for (u, v) in iter {
            self.add_edge(u, v);
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for DiGraph {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut g = DiGraph::new();
        g.extend(iter);
        g
    }
}

#[cfg(test)]
mod tests {
    use super::DiGraph;
    use crate::traits::*;

    #[test]
    fn test_sink_vanishes() {
        let mut g = DiGraph::new();
        g.add_edge("a", "b");
        g.add_edge("c", "b");
        assert_eq!(g.nodes(), vec!["a", "b", "c"]);

        g.remove_edge("a", "b");
        assert_eq!(g.nodes(), vec!["a", "b", "c"]);
        g.remove_edge("c", "b");
        assert_eq!(g.nodes(), vec!["a", "c"]);
        assert!(g.neighbors("b").is_empty());
        assert_eq!(g.bfs("b"), vec!["b"]);

        // the sink comes back with its old position
        g.add_edge("a", "b");
        assert_eq!(g.nodes(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_display() {
        let g: DiGraph = vec![("x", "y"), ("x", "z"), ("y", "z")].into_iter().collect();
        assert_eq!(g.to_string(), "x: y z\ny: z\nz:\n");
    }

    #[test]
    fn test_shortest_path() {
        let g: DiGraph = vec![("a", "b"), ("b", "c"), ("a", "c"), ("c", "d")].into_iter().collect();
        assert_eq!(g.shortest_path_unweighted("a", "d"), Some(vec!["a", "c", "d"]));
        assert_eq!(g.shortest_path_unweighted("d", "a"), None);
    }
}
