/*
 * Copyright (c) 2017, 2018, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start vertex
//! to all other vertices of an undirected graph. Each edge is assigned a
//! non-negative weight (or length).
//!
//! The frontier is a [`PriorityStore`]. When the distance label of a vertex
//! improves, the vertex is pushed again with the new label instead of
//! updating its old entry. Entries of vertices that have already been
//! finalized are skipped when they are popped.
//!
//! # Example
//!
//! ```
//! use rs_wgraph::Graph;
//! use rs_wgraph::shortestpath::dijkstra;
//!
//! let mut g: Graph = Graph::new(6);
//! for &(u, v, w) in &[(0, 1, 7), (0, 2, 1), (0, 5, 14), (1, 2, 10), (1, 3, 15),
//!                     (2, 3, 11), (2, 5, 2), (3, 4, 6), (4, 5, 9)]
//! {
//!     g.add_edge(u, v, w).unwrap();
//! }
//!
//! let dist = dijkstra::distances(&g, 0).unwrap();
//! assert_eq!(dist, vec![Some(0), Some(7), Some(1), Some(12), Some(12), Some(3)]);
//!
//! let tree = dijkstra::dijkstra(&g, 0).unwrap();
//! assert_eq!(tree.count_edges(), 5);
//! assert!(tree.contains_edge(4, 5));
//! assert!(tree.contains_edge(3, 2));
//! ```

use crate::collections::PriorityStore;
use crate::error::{Error, Result};
use crate::graph::Graph;

use num_traits::PrimInt;
use tracing::{debug, trace};

/// Combination of a distance label and an edge weight.
pub trait Accumulator<T> {
    /// Whether negative edge weights are rejected.
    const NONNEGATIVE: bool;

    /// Return the label of the head of an edge, `None` on overflow.
    fn accum(dist: T, weight: T) -> Option<T>;
}

/// Accumulates by adding distance and weight.
pub struct SumAccumulator;

impl<T> Accumulator<T> for SumAccumulator
where
    T: PrimInt,
{
    const NONNEGATIVE: bool = true;

    fn accum(dist: T, weight: T) -> Option<T> {
        dist.checked_add(&weight)
    }
}

/// The result of a search: label and tree edge of each vertex.
pub(crate) struct Labels<W> {
    /// The final label of each vertex, `None` if unreached.
    pub dist: Vec<Option<W>>,
    /// The predecessor and the weight of the tree edge of each vertex.
    pub pred: Vec<Option<(usize, W)>>,
}

impl<W> Labels<W>
where
    W: PrimInt,
{
    /// Return the tree formed by the predecessor edges.
    pub fn into_tree(self) -> Result<Graph<W>> {
        let mut tree = Graph::new(self.pred.len());
        for (v, pred) in self.pred.into_iter().enumerate() {
            if let Some((u, w)) = pred {
                tree.add_edge(v, u, w)?;
            }
        }
        Ok(tree)
    }
}

/// Run the lazy label setting search from `start`.
///
/// The label of a vertex is the minimum of `Accum::accum(label(u), w)` over
/// all finalized neighbors `u` (with edge weight `w`).
pub(crate) fn start_generic<W, Accum>(g: &Graph<W>, start: usize) -> Result<Labels<W>>
where
    W: PrimInt,
    Accum: Accumulator<W>,
{
    g.check_vertex(start)?;

    let n = g.num_vertices();
    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut pred = vec![None; n];
    let mut done = vec![false; n];

    // every incidence is scanned at most once, so at most one push each
    let mut pqueue = PriorityStore::with_capacity(1 + 2 * g.count_edges());
    dist[start] = Some(W::zero());
    pqueue.push(start, W::zero());

    while let Some((u, d)) = pqueue.pop_min() {
        if done[u] {
            continue;
        }
        done[u] = true;

        for (v, w) in g.incident(u) {
            if Accum::NONNEGATIVE && w < W::zero() {
                return Err(Error::NegativeWeight { u, v });
            }
            if done[v] {
                continue;
            }
            let dv = match Accum::accum(d, w) {
                Some(dv) => dv,
                None => continue,
            };
            if dist[v].map_or(true, |old| dv < old) {
                trace!(u, v, "improved label");
                dist[v] = Some(dv);
                pred[v] = Some((u, w));
                pqueue.push(v, dv);
            }
        }
    }

    Ok(Labels { dist, pred })
}

/// Return the shortest path tree of `g` rooted at `start`.
///
/// The tree contains the edge from each reached vertex to its predecessor on
/// a shortest path from `start`. The start vertex and unreached vertices have
/// no predecessor.
///
/// Returns [`Error::InvalidVertex`] if `start` is not a vertex of `g` and
/// [`Error::NegativeWeight`] if the search scans an edge with negative
/// weight.
pub fn dijkstra<W>(g: &Graph<W>, start: usize) -> Result<Graph<W>>
where
    W: PrimInt,
{
    let labels = start_generic::<W, SumAccumulator>(g, start)?;
    let reached = labels.dist.iter().filter(|d| d.is_some()).count();
    let tree = labels.into_tree()?;
    debug!(start, reached, edges = tree.count_edges(), "dijkstra finished");
    Ok(tree)
}

/// Return the shortest distance from `start` to every vertex.
///
/// Unreachable vertices have distance `None`.
pub fn distances<W>(g: &Graph<W>, start: usize) -> Result<Vec<Option<W>>>
where
    W: PrimInt,
{
    Ok(start_generic::<W, SumAccumulator>(g, start)?.dist)
}
