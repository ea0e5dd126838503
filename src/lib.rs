// Copyright (c) 2015-2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! A small library of in-memory graphs with named nodes.
//!
//! There are four graph types:
//!
//! - [`UnGraph`]: undirected, unweighted,
//! - [`DiGraph`]: directed, unweighted,
//! - [`WeightedGraph`]: undirected with non-negative integral weights,
//! - [`WeightedDigraph`]: directed with non-negative integral weights.
//!
//! Nodes are created implicitly when an edge is added. Adjacency lists
//! keep the insertion order and may contain parallel edges. All
//! algorithms are deterministic: whenever there is a choice, nodes are
//! considered in the order of their first appearance.
//!
//! The algorithms are implemented once against the traits in
//! [`traits`] and can be used on node ids directly (see the modules
//! [`algorithms`], [`search`], [`shortestpath`] and [`mst`]) or through
//! the convenience methods of the graph types, which take and return
//! node names.
//!
//! # Example
//!
//! ```
//! use named_graph::{DiGraph, WeightedGraph};
//! use named_graph::traits::*;
//!
//! let mut g = DiGraph::new();
//! g.add_edge("A", "B");
//! g.add_edge("A", "C");
//! g.add_edge("B", "D");
//! assert_eq!(g.dfs("A"), vec!["A", "B", "D", "C"]);
//! assert_eq!(g.bfs("A"), vec!["A", "B", "C", "D"]);
//! assert!(g.topological_sort().is_some());
//!
//! let mut w = WeightedGraph::new();
//! w.add_edge("A", "B", 1).unwrap();
//! w.add_edge("A", "C", 4).unwrap();
//! w.add_edge("B", "C", 1).unwrap();
//! assert_eq!(w.dijkstra("A", "C").map(|sp| sp.cost), Some(2));
//! ```

// # Data structures

mod adjlist;

pub mod error;
pub use self::error::{Error, Result};

pub mod traits;
pub use self::traits::{Graph, Weighted};

pub mod builder;
pub use self::builder::Buildable;

pub mod ungraph;
pub use self::ungraph::UnGraph;

pub mod digraph;
pub use self::digraph::DiGraph;

pub mod weightedgraph;
pub use self::weightedgraph::WeightedGraph;

pub mod weighteddigraph;
pub use self::weighteddigraph::WeightedDigraph;

/// Graph classes
pub mod classes;

// # Algorithms

pub mod algorithms;
pub mod mst;
pub mod search;
pub mod shortestpath;
pub use self::shortestpath::{AllPairs, ShortestPath};
