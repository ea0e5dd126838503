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

//! Adjacency list storage shared by all graph variants.

use crate::traits::{Graph, Weighted};

use std::collections::HashMap;
use std::fmt;

/// An entry of an adjacency list.
pub(crate) trait Entry {
    /// The node id this entry points to.
    fn target(&self) -> usize;
}

impl Entry for usize {
    fn target(&self) -> usize {
        *self
    }
}

/// Adjacency entry of a weighted graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WeightedEntry<W> {
    pub(crate) to: usize,
    pub(crate) weight: W,
}

impl<W> Entry for WeightedEntry<W> {
    fn target(&self) -> usize {
        self.to
    }
}

/// Node names with their adjacency lists.
///
/// Each name gets a dense id when it is first added. A node belongs to
/// the graph if it owns an adjacency list (it has been the source of
/// an inserted entry) or if some entry points to it.
#[derive(Clone, Debug)]
pub(crate) struct AdjList<E> {
    names: Vec<String>,
    ids: HashMap<String, usize>,
    // `true` if the node owns an adjacency list
    keyed: Vec<bool>,
    // number of entries pointing to the node
    refs: Vec<usize>,
    adj: Vec<Vec<E>>,
    nentries: usize,
}

impl<E> Default for AdjList<E> {
    fn default() -> Self {
        AdjList {
            names: vec![],
            ids: HashMap::new(),
            keyed: vec![],
            refs: vec![],
            adj: vec![],
            nentries: 0,
        }
    }
}

impl<E> AdjList<E>
where
    E: Entry,
{
    /// Return the id of `name`, assigning a new one if necessary.
    pub(crate) fn intern(&mut self, name: &str) -> usize {
        if let Some(&u) = self.ids.get(name) {
            return u;
        }
        let u = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), u);
        self.keyed.push(false);
        self.refs.push(0);
        self.adj.push(vec![]);
        u
    }

    /// Append an entry to the list of `u`.
    pub(crate) fn push(&mut self, u: usize, entry: E) {
        self.keyed[u] = true;
        self.refs[entry.target()] += 1;
        self.adj[u].push(entry);
        self.nentries += 1;
    }

    /// Remove the first entry of `u` pointing to `v`.
    ///
    /// Returns the removed entry.
    pub(crate) fn remove_first(&mut self, u: usize, v: usize) -> Option<E> {
        let pos = self.adj[u].iter().position(|e| e.target() == v)?;
        let entry = self.adj[u].remove(pos);
        self.refs[v] -= 1;
        self.nentries -= 1;
        Some(entry)
    }

    pub(crate) fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    pub(crate) fn name(&self, u: usize) -> &str {
        &self.names[u]
    }

    pub(crate) fn node_bound(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn contains(&self, u: usize) -> bool {
        u < self.names.len() && (self.keyed[u] || self.refs[u] > 0)
    }

    /// The adjacency list of `u` (empty for unknown ids).
    pub(crate) fn entries(&self, u: usize) -> &[E] {
        match self.adj.get(u) {
            Some(a) => a,
            None => &[],
        }
    }

    /// Total number of adjacency entries.
    pub(crate) fn num_entries(&self) -> usize {
        self.nentries
    }
}

/// Write one line `node: n1 n2 ...` for each node.
pub(crate) fn fmt_adjacency<G>(g: &G, f: &mut fmt::Formatter) -> fmt::Result
where
    G: Graph + ?Sized,
{
    for u in g.node_ids() {
        write!(f, "{}:", g.name(u))?;
        for v in g.neighs(u) {
            write!(f, " {}", g.name(v))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// Write one line `node: n1(w1) n2(w2) ...` for each node.
pub(crate) fn fmt_weighted<G>(g: &G, f: &mut fmt::Formatter) -> fmt::Result
where
    G: Weighted + ?Sized,
{
    for u in g.node_ids() {
        write!(f, "{}:", g.name(u))?;
        for i in 0..g.degree(u) {
            write!(f, " {}({})", g.name(g.neighbor(u, i)), g.weight(u, i))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::AdjList;

    #[test]
    fn test_membership() {
        let mut adj = AdjList::<usize>::default();
        let a = adj.intern("a");
        let b = adj.intern("b");
        assert_eq!(adj.intern("a"), a);
        assert!(!adj.contains(a));

        adj.push(a, b);
        assert!(adj.contains(a));
        assert!(adj.contains(b));
        assert_eq!(adj.num_entries(), 1);

        // the source keeps its list, the sink vanishes
        assert_eq!(adj.remove_first(a, b), Some(b));
        assert!(adj.contains(a));
        assert!(!adj.contains(b));
        assert_eq!(adj.remove_first(a, b), None);
        assert_eq!(adj.num_entries(), 0);
    }

    #[test]
    fn test_remove_first_only() {
        let mut adj = AdjList::<usize>::default();
        let a = adj.intern("a");
        let b = adj.intern("b");
        let c = adj.intern("c");
        adj.push(a, b);
        adj.push(a, c);
        adj.push(a, b);

        adj.remove_first(a, b);
        assert_eq!(adj.entries(a), &[c, b]);
        assert!(adj.contains(b));
        assert!(adj.entries(42).is_empty());
    }
}
