// Copyright (c) 2016-2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Shortest path algorithms.

pub mod bfs;
pub mod dijkstra;
pub mod floydwarshall;

use crate::search::path_from_preds;
use crate::traits::Weighted;

/// A shortest path between two nodes together with its length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath<'a, W> {
    /// The nodes on the path, starting at the source node.
    pub path: Vec<&'a str>,
    /// The sum of the edge weights along the path.
    pub cost: W,
}

/// Shortest paths between all pairs of nodes.
///
/// This is the result of [`floydwarshall::all_pairs`] bound to the graph
/// it has been computed for.
pub struct AllPairs<'a, G>
where
    G: Weighted + ?Sized,
{
    g: &'a G,
    dist: Vec<Vec<Option<(G::Weight, usize)>>>,
}

impl<'a, G> AllPairs<'a, G>
where
    G: Weighted + ?Sized,
{
    /// Compute all shortest paths of `g`.
    pub fn new(g: &'a G) -> Self {
        AllPairs {
            g,
            dist: floydwarshall::all_pairs(g),
        }
    }

    /// Return the length of a shortest path from `u` to `v`.
    ///
    /// Returns `None` if one of the nodes does not exist or `v` is not
    /// reachable from `u`.
    pub fn distance(&self, u: &str, v: &str) -> Option<G::Weight> {
        let (u, v) = (self.g.id(u)?, self.g.id(v)?);
        self.dist[u][v].map(|(d, _)| d)
    }

    /// Return the nodes on a shortest path from `u` to `v`.
    ///
    /// Returns `None` if one of the nodes does not exist or `v` is not
    /// reachable from `u`.
    pub fn path(&self, u: &str, v: &str) -> Option<ShortestPath<'a, G::Weight>> {
        let g = self.g;
        let (uid, vid) = (g.id(u)?, g.id(v)?);
        let (cost, _) = self.dist[uid][vid]?;
        let dist = &self.dist[uid];
        let mut path: Vec<_> = path_from_preds(vid, |w| if w == uid { None } else { dist[w].map(|(_, p)| p) })
            .map(|w| g.name(w))
            .collect();
        path.reverse();
        Some(ShortestPath { path, cost })
    }
}
