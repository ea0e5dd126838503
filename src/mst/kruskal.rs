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

//! Implementation of Kruskal's algorithm

use crate::traits::Weighted;

/// Run Kruskal's algorithm to solve the *Minimum Spanning Tree*
/// problem on an undirected graph.
///
/// The graph must store each edge in the adjacency lists of both end
/// nodes (as undirected graphs do). Each edge is considered once, in
/// the direction from the node with smaller id to the node with larger
/// id; loops are ignored.
///
/// The algorithm actually solves a minimum spanning *forest* problem
/// if the graph is not connected. This can easily be verified by
/// checking the number of returned edges. Edges of equal weight are
/// considered in the order of their end nodes and adjacency entries.
///
/// Returns the edges of the tree as triples `(u, v, weight)` of node
/// ids.
///
/// # Example
///
/// ```
/// use named_graph::WeightedGraph;
/// use named_graph::traits::*;
/// use named_graph::mst::kruskal;
///
/// let mut g = WeightedGraph::new();
/// for &(u, v, w) in &[("a", "b", 9), ("a", "d", 4), ("a", "e", 5), ("a", "h", 7),
///                     ("a", "c", 9), ("b", "c", 2), ("b", "f", 4), ("b", "g", 6),
///                     ("c", "f", 2), ("c", "h", 8), ("d", "e", 1), ("d", "i", 4),
///                     ("e", "h", 9), ("e", "i", 3), ("f", "g", 3), ("f", "h", 9),
///                     ("f", "j", 9), ("g", "j", 9), ("h", "i", 10), ("h", "j", 8),
///                     ("i", "j", 18)]
/// {
///     g.add_edge(u, v, w).unwrap();
/// }
///
/// let tree = kruskal(&g);
/// assert_eq!(tree.iter().map(|&(_, _, w)| w).sum::<i32>(), 38);
///
/// let mut tree = tree
///     .into_iter()
///     .map(|(u, v, _)| {
///         let (u, v) = (g.name(u), g.name(v));
///         if u < v { (u, v) } else { (v, u) }
///     })
///     .collect::<Vec<_>>();
/// tree.sort();
/// assert_eq!(tree, vec![("a", "d"), ("a", "h"), ("b", "c"), ("c", "f"), ("c", "h"),
///                       ("d", "e"), ("e", "i"), ("f", "g"), ("h", "j")]);
/// ```
pub fn kruskal<G>(g: &G) -> Vec<(usize, usize, G::Weight)>
where
    G: Weighted + ?Sized,
{
    let mut edges = vec![];
    for u in g.node_ids() {
        for i in 0..g.degree(u) {
            let v = g.neighbor(u, i);
            if u < v {
                edges.push((u, v, g.weight(u, i)));
            }
        }
    }
    // stable, so ties keep the scan order
    edges.sort_by_key(|&(_, _, w)| w);

    let nnodes = g.num_nodes();
    let mut comps = vec![Component::Root(0); g.node_bound()];
    let mut tree = Vec::with_capacity(nnodes.saturating_sub(1));

    for (u, v, w) in edges {
        let (uroot, udepth) = find_root(&comps, u);
        let (vroot, vdepth) = find_root(&comps, v);
        if uroot != vroot {
            tree.push((u, v, w));
            if nnodes - 1 == tree.len() {
                break;
            }
            if udepth < vdepth {
                comps[uroot] = Component::Node(vroot);
            } else {
                comps[vroot] = Component::Node(uroot);
                if udepth == vdepth {
                    comps[uroot] = Component::Root(udepth + 1);
                }
            }
        }
    }

    tree
}

/// Union-Find data-structure for Kruskal.
#[derive(Clone, Copy)]
enum Component {
    /// The root element with the tree's depth.
    Root(usize),
    /// An inner node with the parent node.
    Node(usize),
}

/// Return the root node and the tree's depth of node `u`.
fn find_root(comps: &[Component], u: usize) -> (usize, usize) {
    let mut v = u;
    loop {
        match comps[v] {
            Component::Node(parent) => v = parent,
            Component::Root(depth) => return (v, depth),
        }
    }
}
