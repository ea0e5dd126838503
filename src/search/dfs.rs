/*
 * Copyright (c) 2017, 2018, 2020, 2021, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Depth-first-search.
//!
//! The search is an iterator over [`Event`]s. Each node is reported
//! once when it is entered ([`Event::Discover`]) and once when all its
//! adjacency entries have been handled ([`Event::Finish`]). Entries
//! pointing to an already discovered node are reported as
//! [`Event::Revisit`].
//!
//! Instead of recursion the search keeps an explicit stack of frames,
//! one for each node on the current path, so the depth of the search
//! is only limited by the available memory.
//!
//! # Example
//!
//! ```
//! use named_graph::DiGraph;
//! use named_graph::traits::*;
//! use named_graph::search::dfs::{self, Event};
//!
//! let mut g = DiGraph::new();
//! g.add_edge("a", "b");
//! g.add_edge("b", "c");
//! g.add_edge("a", "c");
//!
//! let events: Vec<_> = dfs::start(&g, g.id("a").unwrap())
//!     .filter_map(|ev| match ev {
//!         Event::Finish(u) => Some(g.name(u)),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(events, vec!["c", "b", "a"]);
//! ```

use crate::traits::Graph;

/// An event of the depth-first search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A node is entered for the first time.
    Discover {
        node: usize,
        /// The node it was reached from (`None` for a start node).
        parent: Option<usize>,
    },
    /// An adjacency entry points to an already discovered node.
    Revisit {
        /// The node whose adjacency list is being scanned.
        node: usize,
        /// The already discovered node.
        neighbor: usize,
        /// The node `node` was reached from.
        parent: Option<usize>,
        /// `true` if `neighbor` is still on the search path (i.e. not
        /// finished, yet).
        active: bool,
    },
    /// All adjacency entries of a node have been handled.
    Finish(usize),
}

struct Frame {
    node: usize,
    parent: Option<usize>,
    pos: usize,
}

/// The DFS iterator.
///
/// A single iterator may be used for several searches (see
/// [`Dfs::start`]); nodes discovered by earlier searches are not
/// entered again.
pub struct Dfs<'a, G: ?Sized> {
    g: &'a G,
    seen: Vec<bool>,
    active: Vec<bool>,
    stack: Vec<Frame>,
    root: Option<usize>,
}

/// Start and return a DFS iterator at node `src`.
pub fn start<G>(g: &G, src: usize) -> Dfs<'_, G>
where
    G: Graph + ?Sized,
{
    let mut dfs = Dfs::new(g);
    dfs.start(src);
    dfs
}

/// Return all nodes reachable from `src` in depth-first pre-order.
///
/// The start node is the first element. The order is the one of the
/// classic recursive algorithm scanning each adjacency list in order.
pub fn preorder<G>(g: &G, src: usize) -> Vec<usize>
where
    G: Graph + ?Sized,
{
    start(g, src)
        .filter_map(|ev| match ev {
            Event::Discover { node, .. } => Some(node),
            _ => None,
        })
        .collect()
}

impl<'a, G> Dfs<'a, G>
where
    G: Graph + ?Sized,
{
    /// Create a new search without a start node.
    pub fn new(g: &'a G) -> Self {
        Dfs {
            g,
            seen: vec![false; g.node_bound()],
            active: vec![false; g.node_bound()],
            stack: vec![],
            root: None,
        }
    }

    /// Start a new search at node `src`.
    ///
    /// Returns `false` (and does nothing) if `src` has already been
    /// discovered. Should only be called once the previous search is
    /// complete, i.e. the iterator returned `None`.
    pub fn start(&mut self, src: usize) -> bool {
        if src >= self.seen.len() {
            self.seen.resize(src + 1, false);
            self.active.resize(src + 1, false);
        }
        if self.seen[src] {
            return false;
        }
        self.seen[src] = true;
        self.active[src] = true;
        self.stack.push(Frame {
            node: src,
            parent: None,
            pos: 0,
        });
        self.root = Some(src);
        true
    }

    /// Return `true` if node `u` has been discovered.
    pub fn is_seen(&self, u: usize) -> bool {
        self.seen.get(u).copied().unwrap_or(false)
    }

    /// Run the current search completely.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }
}

impl<'a, G> Iterator for Dfs<'a, G>
where
    G: Graph + ?Sized,
{
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if let Some(node) = self.root.take() {
            return Some(Event::Discover { node, parent: None });
        }

        let frame = self.stack.last_mut()?;
        let u = frame.node;
        let parent = frame.parent;
        if frame.pos < self.g.degree(u) {
            let v = self.g.neighbor(u, frame.pos);
            frame.pos += 1;
            if self.seen[v] {
                Some(Event::Revisit {
                    node: u,
                    neighbor: v,
                    parent,
                    active: self.active[v],
                })
            } else {
                self.seen[v] = true;
                self.active[v] = true;
                self.stack.push(Frame {
                    node: v,
                    parent: Some(u),
                    pos: 0,
                });
                Some(Event::Discover {
                    node: v,
                    parent: Some(u),
                })
            }
        } else {
            self.stack.pop();
            self.active[u] = false;
            Some(Event::Finish(u))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{preorder, Dfs, Event};
    use crate::classes;
    use crate::traits::Graph;
    use crate::{DiGraph, UnGraph};

    #[test]
    fn test_preorder() {
        let mut g = UnGraph::new();
        g.add_edge("a", "b");
        g.add_edge("a", "c");
        g.add_edge("b", "d");
        g.add_edge("c", "d");

        let names: Vec<_> = preorder(&g, g.id("a").unwrap())
            .into_iter()
            .map(|u| g.name(u))
            .collect();
        assert_eq!(names, vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_multiple_starts() {
        let mut g = DiGraph::new();
        g.add_edge("a", "b");
        g.add_edge("c", "b");

        let mut dfs = Dfs::new(&g);
        assert!(dfs.start(g.id("a").unwrap()));
        assert_eq!(dfs.by_ref().count(), 4);
        assert!(!dfs.start(g.id("b").unwrap()));
        assert!(dfs.start(g.id("c").unwrap()));
        let events: Vec<_> = dfs.by_ref().collect();
        let (b, c) = (g.id("b").unwrap(), g.id("c").unwrap());
        assert_eq!(
            events,
            vec![
                Event::Discover { node: c, parent: None },
                Event::Revisit {
                    node: c,
                    neighbor: b,
                    parent: None,
                    active: false
                },
                Event::Finish(c),
            ]
        );
    }

    #[test]
    fn test_long_chain() {
        let n = 200_000;
        let g: DiGraph = classes::path(n);
        let order = preorder(&g, g.id("0").unwrap());
        assert_eq!(order.len(), n + 1);
        assert_eq!(g.name(order[n]), n.to_string());
    }
}
