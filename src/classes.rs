// Copyright (c) 2016-2021 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Some common graph classes.
//!
//! All graphs returned here have unit edge weights.

use crate::graph::Graph;

use num_traits::PrimInt;

/// Returns a path with `m` edges.
///
/// The edges are added from vertex 0 towards vertex `m`.
pub fn path<W>(m: usize) -> Graph<W>
where
    W: PrimInt,
{
    let mut g = Graph::new(m + 1);
    for u in 0..m {
        g.push_edge(u, u + 1, W::one());
    }
    g
}

/// Returns a cycle with length `n`.
pub fn cycle<W>(n: usize) -> Graph<W>
where
    W: PrimInt,
{
    let mut g = Graph::new(n);
    for u in 0..n {
        g.push_edge(u, (u + 1) % n, W::one());
    }
    g
}

/// Returns the complete graph on `n` vertices.
pub fn complete_graph<W>(n: usize) -> Graph<W>
where
    W: PrimInt,
{
    let mut g = Graph::new(n);
    for u in 0..n {
        for v in u + 1..n {
            g.push_edge(u, v, W::one());
        }
    }
    g
}

/// Returns a complete bipartite graph on `n+m` vertices.
///
/// The edges will run between the first n vertices and the last m vertices.
pub fn complete_bipartite<W>(n: usize, m: usize) -> Graph<W>
where
    W: PrimInt,
{
    let mut g = Graph::new(n + m);
    for u in 0..n {
        for v in n..n + m {
            g.push_edge(u, v, W::one());
        }
    }
    g
}

/// Returns a star graph with `n` rays.
///
/// The center will be vertex 0. This is equivalent to
/// `complete_bipartite(1,n)`.
pub fn star<W>(n: usize) -> Graph<W>
where
    W: PrimInt,
{
    complete_bipartite(1, n)
}

/// Return a grid graph with `n` columns and `m` rows.
///
/// The vertices are numbered from left to right and from bottom to top. The
/// following is a grid graph with 5 columns and 4 rows.
///
///   15 - 16 - 17 - 18 - 19
///    |    |    |    |    |
///   10 - 11 - 12 - 13 - 14
///    |    |    |    |    |
///    5 -- 6 -- 7 -- 8 -- 9
///    |    |    |    |    |
///    0 -- 1 -- 2 -- 3 -- 4
///
/// ```
/// use rs_wgraph::{classes, Graph};
///
/// let g: Graph = classes::grid(5, 4);
/// assert_eq!(g.num_vertices(), 20);
/// assert_eq!(g.count_edges(), 5*3 + 4*4);
///
/// assert_eq!((0..20).filter(|&u| g.neighbor_count(u) == 2).count(), 4);
/// assert_eq!((0..20).filter(|&u| g.neighbor_count(u) == 3).count(), 10);
/// assert_eq!((0..20).filter(|&u| g.neighbor_count(u) == 4).count(), 6);
/// ```
pub fn grid<W>(n: usize, m: usize) -> Graph<W>
where
    W: PrimInt,
{
    let mut g = Graph::new(n * m);
    for x in 0..n.saturating_sub(1) {
        for y in 0..m {
            g.push_edge(y * n + x, y * n + x + 1, W::one());
        }
    }
    for x in 0..n {
        for y in 0..m.saturating_sub(1) {
            g.push_edge(y * n + x, y * n + x + n, W::one());
        }
    }
    g
}
