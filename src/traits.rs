/*
 * Copyright (c) 2017-2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Traits for graph data structures.
//!
//! All algorithms of this crate are written against two small traits:
//!
//! 1. [`Graph`]: access to the nodes of a graph and to the ordered
//!    adjacency list of each node. Undirected graphs store each edge
//!    in the lists of both of its end nodes, directed graphs only in
//!    the list of the source.
//! 2. [`Weighted`]: additionally, each adjacency entry carries an
//!    integral, non-negative weight.
//!
//! Nodes are identified by their names. Internally each name is mapped
//! to a dense index (the *node id*) when it is first used. Node ids are
//! never reused, so iterating the ids in increasing order visits the
//! nodes in the order of their first appearance.

use crate::algorithms;
use crate::search::{bfs, dfs};

use num_traits::PrimInt;
use std::fmt;

/// A graph iterator over the neighbors of a node.
///
/// Yields the node ids of the adjacency entries in insertion order,
/// including duplicates of parallel edges.
pub struct Neighs<'a, G: ?Sized> {
    g: &'a G,
    u: usize,
    pos: usize,
}

impl<'a, G> Iterator for Neighs<'a, G>
where
    G: Graph + ?Sized,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.pos < self.g.degree(self.u) {
            let v = self.g.neighbor(self.u, self.pos);
            self.pos += 1;
            Some(v)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.g.degree(self.u) - self.pos;
        (n, Some(n))
    }
}

/// Iterator over the ids of all nodes of a graph.
pub struct NodeIds<'a, G: ?Sized> {
    g: &'a G,
    next: usize,
}

impl<'a, G> Iterator for NodeIds<'a, G>
where
    G: Graph + ?Sized,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next < self.g.node_bound() {
            let u = self.next;
            self.next += 1;
            if self.g.contains(u) {
                return Some(u);
            }
        }
        None
    }
}

/// A graph with named nodes and ordered adjacency lists.
///
/// The required methods work on node ids; the provided methods offer
/// the same information (and the common traversal algorithms) in terms
/// of node names.
///
/// # Example
///
/// ```
/// use named_graph::UnGraph;
/// use named_graph::traits::*;
///
/// let mut g = UnGraph::new();
/// g.add_edge("a", "b");
/// g.add_edge("a", "c");
///
/// assert_eq!(g.nodes(), vec!["a", "b", "c"]);
/// assert_eq!(g.neighbors("a"), vec!["b", "c"]);
/// assert!(g.neighbors("x").is_empty());
/// ```
pub trait Graph {
    /// Return an upper bound on the node ids.
    ///
    /// All node ids are strictly smaller than this number.
    fn node_bound(&self) -> usize;

    /// Return `true` if `u` is the id of a node currently in the graph.
    fn contains(&self, u: usize) -> bool;

    /// Return the number of adjacency entries of node `u`.
    ///
    /// This is 0 for ids that do not belong to a node.
    fn degree(&self, u: usize) -> usize;

    /// Return the `i`-th neighbor of node `u`.
    ///
    /// `i` must be smaller than `self.degree(u)`.
    fn neighbor(&self, u: usize, i: usize) -> usize;

    /// Return the id of the node with the given name.
    fn id(&self, name: &str) -> Option<usize>;

    /// Return the name of the node with id `u`.
    fn name(&self, u: usize) -> &str;

    /// Return the number of nodes in the graph.
    fn num_nodes(&self) -> usize {
        self.node_ids().count()
    }

    /// Return an iterator over all node ids in insertion order.
    fn node_ids(&self) -> NodeIds<'_, Self> {
        NodeIds { g: self, next: 0 }
    }

    /// Return an iterator over the neighbor ids of node `u`.
    fn neighs(&self, u: usize) -> Neighs<'_, Self> {
        Neighs { g: self, u, pos: 0 }
    }

    /// Return the names of all nodes in insertion order.
    fn nodes(&self) -> Vec<&str> {
        self.node_ids().map(|u| self.name(u)).collect()
    }

    /// Return the names of the neighbors of `node`.
    ///
    /// The list is empty if `node` is not in the graph.
    fn neighbors(&self, node: &str) -> Vec<&str> {
        match self.id(node) {
            Some(u) => self.neighs(u).map(|v| self.name(v)).collect(),
            None => vec![],
        }
    }

    /// Return `true` if `v` appears in the adjacency list of `u`.
    fn has_edge(&self, u: &str, v: &str) -> bool {
        match (self.id(u), self.id(v)) {
            (Some(u), Some(v)) => self.neighs(u).any(|w| w == v),
            _ => false,
        }
    }

    /// Return the nodes reachable from `start` in breadth-first order.
    ///
    /// The start node is always the first element, even if it is not
    /// contained in the graph.
    fn bfs<'a>(&'a self, start: &'a str) -> Vec<&'a str> {
        match self.id(start) {
            Some(s) => bfs::order(self, s).into_iter().map(|u| self.name(u)).collect(),
            None => vec![start],
        }
    }

    /// Return the nodes reachable from `start` in depth-first pre-order.
    ///
    /// The start node is always the first element, even if it is not
    /// contained in the graph.
    fn dfs<'a>(&'a self, start: &'a str) -> Vec<&'a str> {
        match self.id(start) {
            Some(s) => dfs::preorder(self, s).into_iter().map(|u| self.name(u)).collect(),
            None => vec![start],
        }
    }

    /// Return `true` if all nodes are reachable from the first node.
    ///
    /// The empty graph is connected.
    fn is_connected(&self) -> bool {
        algorithms::is_connected(self)
    }

    /// Partition the nodes into connected components.
    fn connected_components(&self) -> Vec<Vec<&str>> {
        algorithms::components(self)
            .into_iter()
            .map(|comp| comp.into_iter().map(|u| self.name(u)).collect())
            .collect()
    }
}

/// A graph whose adjacency entries carry weights.
pub trait Weighted: Graph {
    /// The type of the edge weights.
    type Weight: PrimInt + fmt::Display;

    /// Return the weight of the `i`-th adjacency entry of node `u`.
    fn weight(&self, u: usize, i: usize) -> Self::Weight;

    /// Return the names and weights of the neighbors of `node`.
    ///
    /// # Example
    ///
    /// ```
    /// use named_graph::WeightedGraph;
    /// use named_graph::traits::*;
    ///
    /// let mut g = WeightedGraph::new();
    /// g.add_edge("a", "b", 3).unwrap();
    /// g.add_edge("a", "c", 5).unwrap();
    ///
    /// assert_eq!(g.weighted_neighbors("a"), vec![("b", 3), ("c", 5)]);
    /// assert_eq!(g.weighted_neighbors("b"), vec![("a", 3)]);
    /// ```
    fn weighted_neighbors(&self, node: &str) -> Vec<(&str, Self::Weight)> {
        match self.id(node) {
            Some(u) => (0..self.degree(u))
                .map(|i| (self.name(self.neighbor(u, i)), self.weight(u, i)))
                .collect(),
            None => vec![],
        }
    }
}
