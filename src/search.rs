/*
 * Copyright (c) 2019, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! # Graph search algorithms.
//!
//! This module contains the two standard search algorithms on graphs,
//! breadth-first and depth-first search. Both are implemented as
//! iterators that produce the nodes (together with algorithm specific
//! additional information) in the order in which they are visited.
//!
//! The searches work on node ids, see [`Graph`][crate::traits::Graph].
//! Neither search uses recursion, so arbitrarily long chains can be
//! explored.

pub mod bfs;
pub mod dfs;

/// Compute a path from a map of predecessors.
///
/// # Parameters
/// - `dst`: the destination node
/// - `preds(v)`: return the predecessor of node `v` (or `None` if it
///   does not exist)
///
/// # Return
/// An iterator over the nodes on the path starting with `dst` and
/// ending at the first node without predecessor.
///
/// # Example
///
/// ```
/// use named_graph::search::path_from_preds;
///
/// let preds = vec![None, Some(0), Some(1), Some(1)];
/// let path: Vec<_> = path_from_preds(3, |u| preds[u]).collect();
/// assert_eq!(path, vec![3, 1, 0]);
/// ```
pub fn path_from_preds<P>(dst: usize, preds: P) -> impl Iterator<Item = usize>
where
    P: Fn(usize) -> Option<usize>,
{
    PathIter { preds, u: Some(dst) }
}

struct PathIter<P> {
    preds: P,
    u: Option<usize>,
}

impl<P> Iterator for PathIter<P>
where
    P: Fn(usize) -> Option<usize>,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let u = self.u?;
        self.u = (self.preds)(u);
        Some(u)
    }
}
