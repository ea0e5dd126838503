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

//! Undirected graph without weights.

use crate::adjlist::{fmt_adjacency, AdjList};
use crate::algorithms;
use crate::builder::Buildable;
use crate::shortestpath::bfs;
use crate::traits::Graph;

use std::fmt;

/// An undirected graph with named nodes.
///
/// Each edge `{u,v}` is stored in the adjacency lists of both end
/// nodes. Parallel edges and loops are allowed.
///
/// # Example
///
/// ```
/// use named_graph::UnGraph;
/// use named_graph::traits::*;
///
/// let mut g = UnGraph::new();
/// g.add_edge("a", "b");
/// g.add_edge("b", "c");
/// g.add_edge("e", "f");
///
/// assert!(g.has_edge("b", "a"));
/// assert_eq!(g.bfs("a"), vec!["a", "b", "c"]);
/// assert_eq!(g.connected_components(), vec![vec!["a", "b", "c"], vec!["e", "f"]]);
/// assert_eq!(g.shortest_path_unweighted("a", "c"), Some(vec!["a", "b", "c"]));
/// assert_eq!(g.shortest_path_unweighted("a", "f"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnGraph {
    adj: AdjList<usize>,
}

impl UnGraph {
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the edge `{u,v}`.
    ///
    /// Both nodes are created if they do not exist, yet.
    pub fn add_edge(&mut self, u: &str, v: &str) {
        let uid = self.adj.intern(u);
        let vid = self.adj.intern(v);
        self.adj.push(uid, vid);
        self.adj.push(vid, uid);
    }

    /// Remove one edge `{u,v}`.
    ///
    /// Only the first matching entry in the list of either node is
    /// removed, parallel edges remain. Nothing happens if there is no
    /// such edge.
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

    /// Return a path with the minimal number of edges from `start` to `end`.
    ///
    /// Returns `None` if `end` is not reachable from `start`.
    pub fn shortest_path_unweighted<'a>(&'a self, start: &'a str, end: &'a str) -> Option<Vec<&'a str>> {
        bfs::find_named_path(self, start, end)
    }
}

impl Graph for UnGraph {
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

impl Buildable for UnGraph {
    fn add_link(&mut self, u: &str, v: &str) {
        self.add_edge(u, v)
    }
}

impl fmt::Display for UnGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_adjacency(self, f)
    }
}

impl<'a> Extend<(&'a str, &'a str)> for UnGraph {
    fn extend<I: IntoIterator<Item = (&'a str, &'a str)>>(&mut self, iter: I) {
        for (u, v) in iter {
            self.add_edge(u, v);
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for UnGraph {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut g = UnGraph::new();
        g.extend(iter);
        g
    }
}

#[cfg(test)]
mod tests {
    use super::UnGraph;
    use crate::traits::*;

    #[test]
    fn test_remove_edge() {
        let mut g: UnGraph = vec![("a", "b"), ("a", "b"), ("b", "c")].into_iter().collect();
        assert_eq!(g.num_edges(), 3);

        g.remove_edge("b", "a");
        assert!(g.has_edge("a", "b"));
        assert!(g.has_edge("b", "a"));
        assert_eq!(g.neighbors("b"), vec!["a", "c"]);

        g.remove_edge("a", "b");
        assert!(!g.has_edge("a", "b"));
        assert!(!g.has_edge("b", "a"));
        // "a" owns its (now empty) list
        assert_eq!(g.nodes(), vec!["a", "b", "c"]);

        // removing a missing edge does nothing
        g.remove_edge("a", "c");
        g.remove_edge("x", "y");
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_display() {
        let mut g = UnGraph::new();
        g.add_edge("a", "b");
        g.add_edge("a", "c");
        assert_eq!(format!("{}", g), "a: b c\nb: a\nc: a\n");
        assert_eq!(format!("{}", UnGraph::new()), "");
    }

    #[test]
    fn test_unknown_nodes() {
        let g: UnGraph = vec![("a", "b")].into_iter().collect();
        assert!(g.neighbors("z").is_empty());
        assert!(!g.has_edge("a", "z"));
        assert_eq!(g.bfs("z"), vec!["z"]);
        assert_eq!(g.dfs("z"), vec!["z"]);
        assert_eq!(g.shortest_path_unweighted("z", "z"), Some(vec!["z"]));
        assert_eq!(g.shortest_path_unweighted("a", "z"), None);
    }

    #[test]
    fn test_cycle() {
        let mut g = UnGraph::new();
        g.add_edge("A", "B");
        g.add_edge("A", "C");
        g.add_edge("B", "D");
        assert!(!g.has_cycle());
        g.add_edge("D", "A");
        assert!(g.has_cycle());
    }
}
