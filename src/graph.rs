/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Undirected weighted graph stored as one edge list per vertex.
//!
//! # Example
//!
//! ```
//! use rs_wgraph::Graph;
//!
//! let mut g: Graph = Graph::new(3);
//! g.add_edge(0, 1, 4).unwrap();
//! g.add_edge(1, 2, 1).unwrap();
//!
//! assert_eq!(g.count_edges(), 2);
//! assert_eq!(g.edge_weight(2, 1), Some(1));
//! assert!(g.add_edge(1, 3, 1).is_err());
//! assert_eq!(g.count_edges(), 2);
//! ```

use crate::edgelist::{self, EdgeList};
use crate::error::{Error, Result};

use num_traits::PrimInt;
use tracing::warn;

use std::fmt;

/// An undirected graph with weighted edges on the vertices `0..n`.
///
/// Each edge `{u, v}` is stored twice: once in the edge list of `u` and once
/// in the edge list of `v`, both with the same weight. Only the methods of
/// this type modify the edge lists, so both copies always exist together.
///
/// Adding an edge between two vertices that are already adjacent creates a
/// second (parallel) edge; nothing is merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<W = u32> {
    lists: Vec<EdgeList<W>>,
}

impl<W> Graph<W>
where
    W: PrimInt,
{
    /// Create a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Graph {
            lists: (0..n).map(|_| EdgeList::new()).collect(),
        }
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.lists.len()
    }

    /// Return `true` iff the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Return [`Error::InvalidVertex`] unless `v` is a vertex.
    pub(crate) fn check_vertex(&self, v: usize) -> Result<()> {
        let n = self.num_vertices();
        if v >= n {
            return Err(Error::InvalidVertex { vertex: v, n });
        }
        Ok(())
    }

    fn check_edge(&self, u: usize, v: usize) -> Result<()> {
        let n = self.num_vertices();
        if u >= n || v >= n {
            warn!(u, v, n, "invalid edge");
            return Err(Error::InvalidEdge { u, v, n });
        }
        Ok(())
    }

    /// Add the edge `{u, v}` with the given weight.
    ///
    /// If one of the endpoints is not a vertex the graph is not modified and
    /// [`Error::InvalidEdge`] is returned.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.check_edge(u, v)?;
        self.push_edge(u, v, weight);
        Ok(())
    }

    /// Add the edge `{u, v}` between two existing vertices.
    pub(crate) fn push_edge(&mut self, u: usize, v: usize, weight: W) {
        self.lists[u].insert(v, weight);
        self.lists[v].insert(u, weight);
    }

    /// Add the edge `{u, v}` with weight 1.
    pub fn add_unit_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_edge(u, v, W::one())
    }

    /// Remove the edge `{u, v}`.
    ///
    /// Returns [`Error::InvalidEdge`] if one of the endpoints is not a vertex
    /// and [`Error::EdgeNotFound`] if there is no such edge. In both cases
    /// the graph is not modified. Of parallel edges only one is removed.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_edge(u, v)?;
        if !self.lists[u].contains(v) {
            return Err(Error::EdgeNotFound { u, v });
        }
        self.lists[u].remove(v)?;
        self.lists[v].remove(u)?;
        Ok(())
    }

    /// Return the edge list of vertex `v`.
    pub fn edge_list(&self, v: usize) -> Option<&EdgeList<W>> {
        self.lists.get(v)
    }

    /// Return the number of edges incident with `v`.
    ///
    /// Returns 0 if `v` is not a vertex.
    pub fn neighbor_count(&self, v: usize) -> usize {
        self.lists.get(v).map(EdgeList::len).unwrap_or(0)
    }

    /// Return the neighbors of `v` in enumeration order.
    ///
    /// Returns an empty vector if `v` is not a vertex.
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        self.lists.get(v).map(EdgeList::neighbors).unwrap_or_default()
    }

    /// Return an iterator over the `(dest, weight)` pairs incident with `v`.
    ///
    /// The iterator is empty if `v` is not a vertex.
    pub fn incident(&self, v: usize) -> Incident<W> {
        Incident(self.lists.get(v).map(EdgeList::iter))
    }

    /// Return the weight of the edge `{u, v}`.
    pub fn edge_weight(&self, u: usize, v: usize) -> Option<W> {
        if v >= self.num_vertices() {
            return None;
        }
        self.lists.get(u).and_then(|l| l.weight(v))
    }

    /// Return `true` iff `{u, v}` is an edge.
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        v < self.num_vertices() && self.lists.get(u).map(|l| l.contains(v)).unwrap_or(false)
    }

    /// Return the number of (undirected) edges.
    pub fn count_edges(&self) -> usize {
        self.lists.iter().map(EdgeList::len).sum::<usize>() / 2
    }

    /// Return an iterator over all edges `(u, v, weight)` with `u < v`.
    ///
    /// Edges are ordered by `u` and then by the enumeration order of the
    /// edge list of `u`. Loops are not returned.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.lists
            .iter()
            .enumerate()
            .flat_map(|(u, l)| l.iter().filter(move |&(v, _)| u < v).map(move |(v, w)| (u, v, w)))
    }

    /// Return the sum of the weights of all edges returned by [`Graph::edges`].
    ///
    /// Returns `None` if the sum does not fit into `W`.
    pub fn total_weight(&self) -> Option<W> {
        self.edges().try_fold(W::zero(), |sum, (_, _, w)| sum.checked_add(&w))
    }
}

/// Iterator over the incident edges of a vertex.
pub struct Incident<'a, W>(Option<edgelist::Iter<'a, W>>);

impl<'a, W> Iterator for Incident<'a, W>
where
    W: Copy,
{
    type Item = (usize, W);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.as_mut().and_then(Iterator::next)
    }
}

impl<W> fmt::Display for Graph<W>
where
    W: PrimInt + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (v, l) in self.lists.iter().enumerate() {
            writeln!(f, "vertex {}: {}", v, l)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Graph;
    use crate::error::Error;

    fn sample() -> Graph {
        let mut g = Graph::new(4);
        g.add_edge(0, 1, 3).unwrap();
        g.add_edge(0, 2, 0).unwrap();
        g.add_edge(2, 3, 5).unwrap();
        g
    }

    #[test]
    fn test_mirrored() {
        let g = sample();
        for (u, v, w) in g.edges() {
            assert_eq!(g.edge_weight(u, v), Some(w));
            assert_eq!(g.edge_weight(v, u), Some(w));
            assert!(g.contains_edge(u, v) && g.contains_edge(v, u));
        }
        assert_eq!(g.count_edges(), 3);
        assert_eq!(g.edge_weight(0, 2), Some(0));
        assert_eq!(g.edge_weight(1, 3), None);
    }

    #[test]
    fn test_invalid_edge() {
        let mut g = sample();
        let before = g.clone();
        assert_eq!(g.add_edge(1, 4, 1), Err(Error::InvalidEdge { u: 1, v: 4, n: 4 }));
        assert_eq!(g.remove_edge(7, 0), Err(Error::InvalidEdge { u: 7, v: 0, n: 4 }));
        assert_eq!(g, before);
    }

    #[test]
    fn test_remove() {
        let mut g = sample();
        g.remove_edge(2, 0).unwrap();
        assert!(!g.contains_edge(0, 2));
        assert!(!g.contains_edge(2, 0));
        assert_eq!(g.count_edges(), 2);

        let before = g.clone();
        assert_eq!(g.remove_edge(1, 3), Err(Error::EdgeNotFound { u: 1, v: 3 }));
        assert_eq!(g.remove_edge(1, 3), Err(Error::EdgeNotFound { u: 1, v: 3 }));
        assert_eq!(g, before);
    }

    #[test]
    fn test_queries_out_of_range() {
        let g = sample();
        assert_eq!(g.neighbor_count(9), 0);
        assert!(g.neighbors(9).is_empty());
        assert_eq!(g.incident(9).count(), 0);
        assert_eq!(g.edge_weight(9, 0), None);
        assert_eq!(g.edge_weight(0, 9), None);
        assert!(!g.contains_edge(0, 9));
    }

    #[test]
    fn test_parallel_edges() {
        let mut g: Graph = Graph::new(2);
        g.add_edge(0, 1, 4).unwrap();
        g.add_edge(0, 1, 2).unwrap();
        assert_eq!(g.count_edges(), 2);
        // newest edge first
        assert_eq!(g.edge_weight(1, 0), Some(2));
        g.remove_edge(0, 1).unwrap();
        assert_eq!(g.count_edges(), 1);
        assert_eq!(g.edge_weight(0, 1), Some(4));
    }

    #[test]
    fn test_unit_edge_and_total() {
        let mut g = sample();
        g.add_unit_edge(1, 3).unwrap();
        assert_eq!(g.edge_weight(3, 1), Some(1));
        assert_eq!(g.total_weight(), Some(9));
    }

    #[test]
    fn test_total_weight_overflow() {
        let mut g: Graph<u8> = Graph::new(3);
        g.add_edge(0, 1, 200).unwrap();
        assert_eq!(g.total_weight(), Some(200));
        g.add_edge(1, 2, 100).unwrap();
        assert_eq!(g.total_weight(), None);
        assert_eq!(Graph::<u8>::new(2).total_weight(), Some(0));
    }

    #[test]
    fn test_display() {
        let mut g: Graph = Graph::new(3);
        g.add_edge(0, 1, 7).unwrap();
        g.add_edge(0, 2, 1).unwrap();
        assert_eq!(
            g.to_string(),
            "vertex 0: (2, weight 1) (1, weight 7)\nvertex 1: (0, weight 7)\nvertex 2: (0, weight 1)\n"
        );
    }
}
