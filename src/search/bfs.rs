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

//! Breadth-first-search.
//!
//! # Example
//!
//! ```
//! use named_graph::{classes, UnGraph};
//! use named_graph::traits::*;
//! use named_graph::search::bfs;
//!
//! let g: UnGraph = classes::cycle(7);
//! let src = g.id("0").unwrap();
//! let mut cnt = 0;
//! for (u, _) in bfs::start(&g, src) {
//!     assert_ne!(u, src);
//!     cnt += 1;
//! }
//! assert_eq!(cnt, g.num_nodes() - 1);
//! ```

use crate::traits::Graph;
use std::collections::VecDeque;

/// Start and return a BFS iterator.
///
/// The returned iterator traverses the nodes in breadth-first order.
/// The iterator returns each newly discovered node together with the
/// node it has been discovered from.
///
/// Note that the start node is *not* returned by the iterator.
///
/// # Parameter
/// - `g`: the graph
/// - `src`: the id of the node at which the search should start.
pub fn start<G>(g: &G, src: usize) -> Bfs<'_, G>
where
    G: Graph + ?Sized,
{
    let mut seen = vec![false; g.node_bound().max(src + 1)];
    seen[src] = true;
    let mut queue = VecDeque::new();
    queue.push_back(src);

    Bfs {
        g,
        seen,
        queue,
        cur: None,
    }
}

/// Return all nodes reachable from `src` in breadth-first order.
///
/// The start node is the first element.
pub fn order<G>(g: &G, src: usize) -> Vec<usize>
where
    G: Graph + ?Sized,
{
    std::iter::once(src).chain(start(g, src).map(|(v, _)| v)).collect()
}

/// The BFS iterator.
pub struct Bfs<'a, G: ?Sized> {
    g: &'a G,
    seen: Vec<bool>,
    queue: VecDeque<usize>,
    // node being expanded and position of the next adjacency entry
    cur: Option<(usize, usize)>,
}

impl<'a, G> Iterator for Bfs<'a, G>
where
    G: Graph + ?Sized,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (u, pos) = match self.cur {
                Some(cur) => cur,
                None => (self.queue.pop_front()?, 0),
            };
            if pos < self.g.degree(u) {
                self.cur = Some((u, pos + 1));
                let v = self.g.neighbor(u, pos);
                if !self.seen[v] {
                    self.seen[v] = true;
                    self.queue.push_back(v);
                    return Some((v, u));
                }
            } else {
                self.cur = None;
            }
        }
    }
}

impl<'a, G> Bfs<'a, G>
where
    G: Graph + ?Sized,
{
    /// Run the bfs completely.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }

    /// Return `true` if node `u` has been discovered.
    pub fn is_seen(&self, u: usize) -> bool {
        self.seen.get(u).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::{order, start};
    use crate::traits::Graph;
    use crate::UnGraph;

    #[test]
    fn test_level_order() {
        let mut g = UnGraph::new();
        g.add_edge("a", "b");
        g.add_edge("a", "c");
        g.add_edge("b", "d");
        g.add_edge("c", "d");
        g.add_edge("d", "e");

        let a = g.id("a").unwrap();
        let names: Vec<_> = order(&g, a).into_iter().map(|u| g.name(u)).collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);

        // d is reached from b first
        let preds: Vec<_> = start(&g, a).map(|(v, u)| (g.name(v), g.name(u))).collect();
        assert_eq!(preds, vec![("b", "a"), ("c", "a"), ("d", "b"), ("e", "d")]);
    }

    #[test]
    fn test_run() {
        let mut g = UnGraph::new();
        g.add_edge("a", "b");
        g.add_edge("c", "d");

        let mut bfs = start(&g, g.id("a").unwrap());
        bfs.run();
        assert!(bfs.is_seen(g.id("b").unwrap()));
        assert!(!bfs.is_seen(g.id("c").unwrap()));
    }
}
