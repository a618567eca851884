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

//! Depth-first-search.
//!
//! # Example
//!
//! ```
//! use rs_wgraph::Graph;
//! use rs_wgraph::search::dfs;
//!
//! let mut g: Graph = Graph::new(4);
//! g.add_unit_edge(0, 1).unwrap();
//! g.add_unit_edge(0, 2).unwrap();
//! g.add_unit_edge(1, 3).unwrap();
//! g.add_unit_edge(2, 3).unwrap();
//!
//! let tree = dfs(&g, 0).unwrap();
//! assert_eq!(tree.count_edges(), 3);
//! // the search goes 0 -> 2 -> 3 -> 1
//! assert!(tree.contains_edge(0, 2));
//! assert!(tree.contains_edge(2, 3));
//! assert!(tree.contains_edge(3, 1));
//! ```

use crate::error::Result;
use crate::graph::{Graph, Incident};

use num_traits::PrimInt;
use tracing::debug;

/// Return the depth-first-search tree of `g` rooted at `start`.
///
/// The search uses an explicit stack, one incidence iterator per vertex on
/// the current path, so deep graphs do not exhaust the call stack. The
/// resulting tree is the same as the one of the recursive formulation.
///
/// Returns [`Error::InvalidVertex`][crate::Error::InvalidVertex] if `start`
/// is not a vertex of `g`.
pub fn dfs<W>(g: &Graph<W>, start: usize) -> Result<Graph<W>>
where
    W: PrimInt,
{
    g.check_vertex(start)?;

    let n = g.num_vertices();
    let mut tree = Graph::new(n);
    let mut seen = vec![false; n];
    let mut stack: Vec<(usize, Incident<W>)> = vec![(start, g.incident(start))];
    seen[start] = true;

    while let Some((u, mut it)) = stack.pop() {
        if let Some((v, w)) = it.next() {
            stack.push((u, it));
            if !seen[v] {
                seen[v] = true;
                tree.add_edge(u, v, w)?;
                stack.push((v, g.incident(v)));
            }
        }
    }

    debug!(start, edges = tree.count_edges(), "dfs finished");
    Ok(tree)
}
