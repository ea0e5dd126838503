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

//! General algorithms working on graphs.
//!
//! All functions work on node ids and follow the adjacency lists as
//! stored. For directed graphs this means that "connected" refers to
//! reachability along the edge directions.

use crate::search::bfs;
use crate::search::dfs::{Dfs, Event};
use crate::traits::Graph;

use log::{debug, trace};

/// Determines if a graph is connected.
///
/// The empty graph is connected. Otherwise a depth-first search is
/// started at the first node and the graph is connected if every node
/// is visited.
///
/// # Example
///
/// ```
/// use named_graph::{algorithms, classes, UnGraph};
///
/// let mut g: UnGraph = classes::cycle(5);
/// assert!(algorithms::is_connected(&g));
///
/// g.add_edge("x", "y");
/// assert!(!algorithms::is_connected(&g));
/// ```
pub fn is_connected<G>(g: &G) -> bool
where
    G: Graph + ?Sized,
{
    let first = match g.node_ids().next() {
        Some(u) => u,
        None => return true,
    };

    let mut dfs = Dfs::new(g);
    dfs.start(first);
    dfs.run();

    g.node_ids().all(|u| dfs.is_seen(u))
}

/// Determines all components of a graph.
///
/// The nodes are scanned in insertion order. Each node that has not
/// been seen, yet, starts a new component, which consists of all
/// unseen nodes reachable from it in breadth-first order.
///
/// The empty graph has no components.
///
/// # Example
///
/// ```
/// use named_graph::{algorithms, UnGraph};
/// use named_graph::traits::*;
///
/// let mut g = UnGraph::new();
/// g.add_edge("a", "b");
/// g.add_edge("c", "d");
/// g.add_edge("b", "e");
///
/// let comps: Vec<Vec<_>> = algorithms::components(&g)
///     .into_iter()
///     .map(|c| c.into_iter().map(|u| g.name(u)).collect())
///     .collect();
/// assert_eq!(comps, vec![vec!["a", "b", "e"], vec!["c", "d"]]);
/// ```
pub fn components<G>(g: &G) -> Vec<Vec<usize>>
where
    G: Graph + ?Sized,
{
    let mut seen = vec![false; g.node_bound()];
    let mut comps = vec![];

    for u in g.node_ids() {
        if seen[u] {
            continue;
        }
        // find all unseen nodes reachable from u
        let mut comp = vec![u];
        seen[u] = true;
        let mut i = 0;
        while i < comp.len() {
            let v = comp[i];
            i += 1;
            for w in g.neighs(v) {
                if !seen[w] {
                    seen[w] = true;
                    comp.push(w);
                }
            }
        }
        trace!("component {} with {} nodes", comps.len(), comp.len());
        comps.push(comp);
    }

    comps
}

/// Determines if an undirected graph contains a cycle.
///
/// A cycle is detected when the depth-first search scans an entry to
/// an already visited node that is not the node it came from. Because
/// both directions of an undirected edge are stored, the entry back to
/// the parent is not a cycle. Parallel edges are still detected as a
/// cycle, because the parent scans its second entry to the child.
///
/// # Example
///
/// ```
/// use named_graph::{algorithms, UnGraph};
///
/// let mut g = UnGraph::new();
/// g.add_edge("a", "b");
/// g.add_edge("a", "c");
/// g.add_edge("b", "d");
/// assert!(!algorithms::has_undirected_cycle(&g));
///
/// g.add_edge("d", "a");
/// assert!(algorithms::has_undirected_cycle(&g));
/// ```
pub fn has_undirected_cycle<G>(g: &G) -> bool
where
    G: Graph + ?Sized,
{
    let mut dfs = Dfs::new(g);
    for u in g.node_ids() {
        if !dfs.start(u) {
            continue;
        }
        for ev in &mut dfs {
            if let Event::Revisit {
                node, neighbor, parent, ..
            } = ev
            {
                if parent != Some(neighbor) {
                    trace!("cycle closed by {} - {}", g.name(node), g.name(neighbor));
                    return true;
                }
            }
        }
    }
    false
}

/// Determines if a directed graph contains a cycle.
///
/// A cycle exists iff the depth-first search finds an edge to a node
/// that is still on the search path (a back edge). Edges to nodes that
/// have already been finished do not close a cycle.
///
/// # Example
///
/// ```
/// use named_graph::{algorithms, DiGraph};
///
/// let mut g = DiGraph::new();
/// g.add_edge("a", "b");
/// g.add_edge("a", "c");
/// g.add_edge("b", "c");
/// assert!(!algorithms::has_directed_cycle(&g));
///
/// g.add_edge("c", "a");
/// assert!(algorithms::has_directed_cycle(&g));
/// ```
pub fn has_directed_cycle<G>(g: &G) -> bool
where
    G: Graph + ?Sized,
{
    let mut dfs = Dfs::new(g);
    for u in g.node_ids() {
        if !dfs.start(u) {
            continue;
        }
        for ev in &mut dfs {
            if let Event::Revisit {
                node,
                neighbor,
                active: true,
                ..
            } = ev
            {
                trace!("back edge {} -> {}", g.name(node), g.name(neighbor));
                return true;
            }
        }
    }
    false
}

/// Compute a topological ordering of a directed graph.
///
/// Returns `None` if the graph contains a cycle. Otherwise the nodes
/// are returned in reverse order of finishing a depth-first search
/// started at every unvisited node (in insertion order). For every
/// edge `(u,v)` the node `u` precedes `v`.
///
/// # Example
///
/// ```
/// use named_graph::{algorithms, DiGraph};
/// use named_graph::traits::*;
///
/// let mut g = DiGraph::new();
/// g.add_edge("shirt", "tie");
/// g.add_edge("tie", "jacket");
/// g.add_edge("trousers", "shoes");
/// g.add_edge("trousers", "jacket");
///
/// let order = algorithms::toposort(&g).unwrap();
/// let names: Vec<_> = order.into_iter().map(|u| g.name(u)).collect();
/// assert_eq!(names, vec!["trousers", "shoes", "shirt", "tie", "jacket"]);
/// ```
pub fn toposort<G>(g: &G) -> Option<Vec<usize>>
where
    G: Graph + ?Sized,
{
    if has_directed_cycle(g) {
        debug!("topological sort impossible, graph contains a cycle");
        return None;
    }

    let mut order = vec![];
    let mut dfs = Dfs::new(g);
    for u in g.node_ids() {
        if !dfs.start(u) {
            continue;
        }
        for ev in &mut dfs {
            if let Event::Finish(v) = ev {
                order.push(v);
            }
        }
    }
    order.reverse();
    Some(order)
}

/// Same as [`toposort`] returning node names.
pub(crate) fn toposort_names<G>(g: &G) -> Option<Vec<&str>>
where
    G: Graph + ?Sized,
{
    let order = toposort(g)?;
    Some(order.into_iter().map(|u| g.name(u)).collect())
}

/// Return the nodes reachable from `src` in breadth-first order.
///
/// This is a shortcut for [`bfs::order`].
pub fn reachable<G>(g: &G, src: usize) -> Vec<usize>
where
    G: Graph + ?Sized,
{
    bfs::order(g, src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::*;
    use crate::{DiGraph, UnGraph};

    #[test]
    fn test_empty() {
        let g = UnGraph::new();
        assert!(is_connected(&g));
        assert!(components(&g).is_empty());
        assert!(!has_undirected_cycle(&g));
        assert_eq!(toposort(&DiGraph::new()), Some(vec![]));
    }

    #[test]
    fn test_classes() {
        let g: UnGraph = cycle(6);
        assert!(is_connected(&g));
        assert!(has_undirected_cycle(&g));

        let g: UnGraph = path(6);
        assert!(!has_undirected_cycle(&g));

        let g: UnGraph = star(6);
        assert!(is_connected(&g));
        assert!(!has_undirected_cycle(&g));
        assert_eq!(reachable(&g, g.id("3").unwrap()).len(), 7);

        let g: DiGraph = cycle(6);
        assert!(has_directed_cycle(&g));
        assert_eq!(toposort(&g), None);

        let g: DiGraph = complete_graph(5);
        assert!(!has_directed_cycle(&g));
        let order: Vec<_> = toposort(&g).unwrap().into_iter().map(|u| g.name(u)).collect();
        assert_eq!(order, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_self_loop() {
        let mut g = UnGraph::new();
        g.add_edge("a", "a");
        assert!(has_undirected_cycle(&g));

        let mut g = DiGraph::new();
        g.add_edge("a", "a");
        assert!(has_directed_cycle(&g));
    }

    #[test]
    fn test_parallel_edges() {
        let mut g = UnGraph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        assert!(!has_undirected_cycle(&g));
        g.add_edge("a", "b");
        assert!(has_undirected_cycle(&g));
    }

    #[test]
    fn test_directed_cross_edge() {
        // both paths reach d, but there is no cycle
        let mut g = DiGraph::new();
        g.add_edge("a", "b");
        g.add_edge("a", "c");
        g.add_edge("b", "d");
        g.add_edge("c", "d");
        assert!(!has_directed_cycle(&g));
        // as an undirected graph this is a cycle
        assert!(has_undirected_cycle(&g));
    }

    #[test]
    fn test_directed_components() {
        let mut g = DiGraph::new();
        g.add_edge("b", "a");
        g.add_edge("c", "a");

        // components follow the edge directions
        assert!(!is_connected(&g));
        let comps: Vec<Vec<_>> = components(&g)
            .into_iter()
            .map(|c| c.into_iter().map(|u| g.name(u)).collect())
            .collect();
        assert_eq!(comps, vec![vec!["b", "a"], vec!["c"]]);
    }
}
