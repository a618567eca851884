// Copyright (c) 2016, 2017, 2018, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Implementation of Prim's algorithm

use crate::error::Result;
use crate::graph::Graph;
use crate::shortestpath::dijkstra::{self, Accumulator};

use num_traits::PrimInt;
use tracing::debug;

/// Run Prim's algorithm to solve the *Minimum Spanning Tree*
/// problem on a graph.
///
/// The tree is grown from vertex 0. If the graph is not connected, the
/// returned tree only spans the component of vertex 0, all other vertices
/// are isolated. This can easily be verified by counting the edges of the
/// returned graph. Use [`kruskal`][crate::mst::kruskal] for a spanning
/// forest.
///
/// The graph without vertices yields an empty tree.
///
/// # Example
///
/// ```
/// use rs_wgraph::Graph;
/// use rs_wgraph::mst::prim;
///
/// let mut g: Graph = Graph::new(6);
/// for &(u, v, w) in &[(0, 1, 7), (0, 2, 1), (0, 5, 14), (1, 2, 10), (1, 3, 15),
///                     (2, 3, 11), (2, 5, 2), (3, 4, 6), (4, 5, 9)]
/// {
///     g.add_edge(u, v, w).unwrap();
/// }
///
/// let tree = prim(&g).unwrap();
/// assert_eq!(tree.count_edges(), 5);
/// assert_eq!(tree.total_weight(), Some(25));
/// ```
pub fn prim<W>(g: &Graph<W>) -> Result<Graph<W>>
where
    W: PrimInt,
{
    if g.is_empty() {
        return Ok(Graph::new(0));
    }

    struct WeightAccumulator;
    impl<T> Accumulator<T> for WeightAccumulator {
        const NONNEGATIVE: bool = false;

        fn accum(_dist: T, weight: T) -> Option<T> {
            Some(weight)
        }
    }

    let tree = dijkstra::start_generic::<W, WeightAccumulator>(g, 0)?.into_tree()?;
    debug!(edges = tree.count_edges(), "prim finished");
    Ok(tree)
}
