// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use crate::collections::DisjointSet;
use crate::error::Result;
use crate::graph::Graph;

use num_traits::PrimInt;
use tracing::{debug, trace};

/// Run Kruskal's algorithm to solve the *Minimum Spanning Tree*
/// problem on a graph.
///
/// The edges are considered by increasing weight. Edges of equal weight keep
/// the order of [`Graph::edges`], i.e. by smaller endpoint and then by the
/// enumeration order of its edge list.
///
/// The algorithm actually solves a minimum spanning *forest* problem
/// if the graph is not connected. This can easily be verified by
/// counting the edges of the returned graph.
///
/// # Example
///
/// ```
/// use rs_wgraph::Graph;
/// use rs_wgraph::mst::kruskal;
///
/// let mut g: Graph = Graph::new(6);
/// for &(u, v, w) in &[(0, 1, 7), (0, 2, 1), (0, 5, 14), (1, 2, 10), (1, 3, 15),
///                     (2, 3, 11), (2, 5, 2), (3, 4, 6), (4, 5, 9)]
/// {
///     g.add_edge(u, v, w).unwrap();
/// }
///
/// let tree = kruskal(&g).unwrap();
/// assert_eq!(tree.total_weight(), Some(25));
///
/// let mut edges = tree.edges().collect::<Vec<_>>();
/// edges.sort();
/// assert_eq!(edges, vec![(0, 1, 7), (0, 2, 1), (2, 5, 2), (3, 4, 6), (4, 5, 9)]);
/// ```
pub fn kruskal<W>(g: &Graph<W>) -> Result<Graph<W>>
where
    W: PrimInt,
{
    let n = g.num_vertices();
    let mut edges: Vec<_> = g.edges().collect();
    edges.sort_by_key(|&(_, _, w)| w);

    let mut comps = DisjointSet::new(n);
    let mut tree = Graph::new(n);
    let mut nedges = 0;

    for (u, v, w) in edges {
        if nedges + 1 >= n {
            break;
        }
        if comps.unite(u, v) {
            trace!(u, v, "tree edge");
            tree.add_edge(u, v, w)?;
            nedges += 1;
        }
    }

    debug!(edges = nedges, "kruskal finished");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::kruskal;
    use crate::classes::{cycle, star};
    use crate::Graph;

    #[test]
    fn test_weighted() {
        let mut g: Graph = Graph::new(5);
        g.add_edge(0, 1, 3).unwrap();
        g.add_edge(0, 3, 1).unwrap();
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(1, 3, 3).unwrap();
        g.add_edge(2, 4, 5).unwrap();
        g.add_edge(3, 4, 6).unwrap();

        let tree = kruskal(&g).unwrap();
        assert_eq!(tree.num_vertices(), 5);
        assert_eq!(tree.count_edges(), 4);
        assert_eq!(tree.total_weight(), Some(10));
    }

    #[test]
    fn test_single_and_empty() {
        let g: Graph = Graph::new(1);
        assert_eq!(kruskal(&g).unwrap().count_edges(), 0);
        let g: Graph = Graph::new(0);
        assert_eq!(kruskal(&g).unwrap().num_vertices(), 0);
    }

    #[test]
    fn test_forest() {
        let mut g: Graph = Graph::new(7);
        for &(u, v, w) in &[(0, 1, 4), (1, 2, 1), (0, 2, 2), (3, 4, 5), (4, 5, 5), (3, 5, 5)] {
            g.add_edge(u, v, w).unwrap();
        }
        let tree = kruskal(&g).unwrap();
        assert_eq!(tree.count_edges(), (3 - 1) + (3 - 1));
        assert_eq!(tree.neighbor_count(6), 0);
        assert!(!tree.contains_edge(0, 1));
    }

    #[test]
    fn test_ties_by_collection_order() {
        // all weights equal: (0,1) and (0,2) come first, (1,2) closes a cycle
        let mut g: Graph = Graph::new(3);
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(0, 2, 1).unwrap();
        let tree = kruskal(&g).unwrap();
        assert!(tree.contains_edge(0, 1));
        assert!(tree.contains_edge(0, 2));
        assert!(!tree.contains_edge(1, 2));
    }

    #[test]
    fn test_trees_are_kept() {
        let g: Graph = star(5);
        let mut expected: Vec<_> = g.edges().collect();
        let mut edges: Vec<_> = kruskal(&g).unwrap().edges().collect();
        expected.sort();
        edges.sort();
        assert_eq!(edges, expected);
        let g: Graph = cycle(6);
        assert_eq!(kruskal(&g).unwrap().count_edges(), 5);
    }

    #[test]
    fn test_total_weight_overflow() {
        let mut g: Graph<u8> = Graph::new(3);
        g.add_edge(0, 1, 200).unwrap();
        g.add_edge(1, 2, 100).unwrap();
        let tree = kruskal(&g).unwrap();
        assert_eq!(tree.count_edges(), 2);
        assert_eq!(tree.total_weight(), None);
    }

    #[test]
    fn test_loops_ignored() {
        let mut g: Graph = Graph::new(2);
        g.add_edge(0, 0, 0).unwrap();
        g.add_edge(0, 1, 3).unwrap();
        let tree = kruskal(&g).unwrap();
        assert_eq!(tree.count_edges(), 1);
        assert!(!tree.contains_edge(0, 0));
    }
}
