// Copyright (c) 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Shortest paths with respect to the number of edges.

use crate::search::{bfs, path_from_preds};
use crate::traits::Graph;

/// Find a path with the minimal number of edges from `src` to `snk`.
///
/// The breadth-first search stops as soon as `snk` is discovered. The
/// path contains both end nodes. If `src == snk` the path consists of
/// this single node.
///
/// Returns `None` if `snk` is not reachable from `src`.
///
/// # Example
///
/// ```
/// use named_graph::UnGraph;
/// use named_graph::traits::*;
/// use named_graph::shortestpath::bfs;
///
/// let mut g = UnGraph::new();
/// g.add_edge("a", "b");
/// g.add_edge("b", "c");
/// g.add_edge("c", "d");
/// g.add_edge("a", "d");
///
/// let path = bfs::find_path(&g, g.id("a").unwrap(), g.id("c").unwrap()).unwrap();
/// let path: Vec<_> = path.into_iter().map(|u| g.name(u)).collect();
/// assert_eq!(path, vec!["a", "b", "c"]);
/// ```
pub fn find_path<G>(g: &G, src: usize, snk: usize) -> Option<Vec<usize>>
where
    G: Graph + ?Sized,
{
    if src == snk {
        return Some(vec![src]);
    }

    let mut preds = vec![None; g.node_bound()];
    for (v, u) in bfs::start(g, src) {
        preds[v] = Some(u);
        if v == snk {
            let mut path: Vec<_> = path_from_preds(snk, |w| preds[w]).collect();
            path.reverse();
            return Some(path);
        }
    }

    None
}

/// Same as [`find_path`] for node names.
///
/// A path from a node to itself consists of this single node, even if
/// it is not contained in the graph.
pub(crate) fn find_named_path<'a, G>(g: &'a G, start: &'a str, end: &'a str) -> Option<Vec<&'a str>>
where
    G: Graph + ?Sized,
{
    if start == end {
        return Some(vec![start]);
    }
    let path = find_path(g, g.id(start)?, g.id(end)?)?;
    Some(path.into_iter().map(|u| g.name(u)).collect())
}
