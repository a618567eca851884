/*
 * Copyright (c) 2017, 2018, 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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
//! use rs_wgraph::Graph;
//! use rs_wgraph::search::bfs;
//!
//! let mut g: Graph = Graph::new(4);
//! g.add_unit_edge(0, 1).unwrap();
//! g.add_unit_edge(0, 2).unwrap();
//! g.add_unit_edge(1, 3).unwrap();
//! g.add_unit_edge(2, 3).unwrap();
//!
//! let tree = bfs(&g, 0).unwrap();
//! assert_eq!(tree.num_vertices(), 4);
//! assert_eq!(tree.count_edges(), 3);
//! // 2 has been dequeued before 1, so 3 is reached via 2
//! assert!(tree.contains_edge(2, 3));
//! assert!(!tree.contains_edge(1, 3));
//! ```

use crate::collections::{ItemQueue, WorkQueue};
use crate::error::Result;
use crate::graph::Graph;

use num_traits::PrimInt;
use tracing::debug;

/// Return the breadth-first-search tree of `g` rooted at `start`.
///
/// Returns [`Error::InvalidVertex`][crate::Error::InvalidVertex] if `start`
/// is not a vertex of `g`.
pub fn bfs<W>(g: &Graph<W>, start: usize) -> Result<Graph<W>>
where
    W: PrimInt,
{
    bfs_with_queue(g, start, WorkQueue::with_capacity(g.num_vertices()))
}

/// Return the breadth-first-search tree of `g` using a user defined queue.
///
/// The queue is cleared before the search starts. It must be able to hold
/// all vertices of `g`.
pub fn bfs_with_queue<W, Q>(g: &Graph<W>, start: usize, mut queue: Q) -> Result<Graph<W>>
where
    W: PrimInt,
    Q: ItemQueue<usize>,
{
    g.check_vertex(start)?;

    let n = g.num_vertices();
    let mut tree = Graph::new(n);
    let mut seen = vec![false; n];

    queue.clear();
    seen[start] = true;
    queue.push(start);

    while let Some(u) = queue.pop() {
        for (v, w) in g.incident(u) {
            if !seen[v] {
                seen[v] = true;
                tree.add_edge(u, v, w)?;
                queue.push(v);
            }
        }
    }

    debug!(start, edges = tree.count_edges(), "bfs finished");
    Ok(tree)
}
