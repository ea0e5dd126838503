/*
 * Copyright (c) 2017, 2018, 2020, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Traits for constructing graphs.

/// A graph that can be built edge by edge.
///
/// This is implemented by the unweighted graphs, which accept any
/// edge. It is used by the generators in [`classes`][crate::classes].
pub trait Buildable: Default {
    /// Add an edge between the nodes `u` and `v`.
    ///
    /// The nodes are created if they do not exist, yet.
    fn add_link(&mut self, u: &str, v: &str);

    /// Create a new graph by passing it to the callback `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use named_graph::{Buildable, UnGraph};
    /// use named_graph::traits::Graph;
    ///
    /// let g = UnGraph::new_with(|g| {
    ///     g.add_edge("u", "v");
    ///     g.add_edge("v", "w");
    /// });
    ///
    /// assert_eq!(g.num_nodes(), 3);
    /// assert_eq!(g.num_edges(), 2);
    /// ```
    fn new_with<F>(f: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut g = Self::default();
        f(&mut g);
        g
    }
}
