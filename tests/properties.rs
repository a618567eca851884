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

use proptest::collection::vec;
use proptest::prelude::*;

use rs_wgraph::collections::DisjointSet;
use rs_wgraph::mst::{kruskal, prim};
use rs_wgraph::search::{bfs, dfs};
use rs_wgraph::shortestpath::dijkstra;
use rs_wgraph::{Error, Graph};

type EdgeDef = (usize, usize, u32);

/// A vertex count with a list of edges between its vertices.
fn arb_graph() -> impl Strategy<Value = (usize, Vec<EdgeDef>)> {
    (1usize..10).prop_flat_map(|n| (Just(n), vec((0..n, 0..n, 0u32..20), 0..25)))
}

fn build(n: usize, edges: &[EdgeDef]) -> Graph {
    let mut g = Graph::new(n);
    for &(u, v, w) in edges {
        g.add_edge(u, v, w).unwrap();
    }
    g
}

fn reachable(g: &Graph, start: usize) -> usize {
    let mut seen = vec![false; g.num_vertices()];
    let mut stack = vec![start];
    seen[start] = true;
    let mut cnt = 1;
    while let Some(u) = stack.pop() {
        for v in g.neighbors(u) {
            if !seen[v] {
                seen[v] = true;
                cnt += 1;
                stack.push(v);
            }
        }
    }
    cnt
}

fn components(n: usize, edges: &[EdgeDef]) -> usize {
    let mut comps = DisjointSet::new(n);
    n - edges.iter().filter(|&&(u, v, _)| comps.unite(u, v)).count()
}

/// Bellman-Ford style relaxation until nothing changes.
fn relaxed_distances(n: usize, edges: &[EdgeDef], start: usize) -> Vec<Option<u32>> {
    let mut dist = vec![None; n];
    dist[start] = Some(0);
    let mut changed = true;
    while changed {
        changed = false;
        for &(u, v, w) in edges {
            for &(a, b) in &[(u, v), (v, u)] {
                if let Some(da) = dist[a] {
                    if dist[b].map_or(true, |db| da + w < db) {
                        dist[b] = Some(da + w);
                        changed = true;
                    }
                }
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn count_edges_is_half_the_degree_sum((n, edges) in arb_graph()) {
        let g = build(n, &edges);
        let degrees: usize = (0..n).map(|u| g.neighbor_count(u)).sum();
        prop_assert_eq!(g.count_edges(), degrees / 2);
        prop_assert_eq!(g.count_edges(), edges.len());
    }

    #[test]
    fn added_edges_are_mirrored((n, edges) in arb_graph(), w in 0u32..100) {
        let mut g = build(n, &edges);
        let (u, v) = (n / 2, n - 1);
        g.add_edge(u, v, w).unwrap();
        prop_assert!(g.contains_edge(u, v));
        prop_assert!(g.contains_edge(v, u));
        prop_assert_eq!(g.edge_weight(u, v), Some(w));
        prop_assert_eq!(g.edge_weight(v, u), Some(w));
    }

    #[test]
    fn removing_missing_edge_fails((n, edges) in arb_graph(), u in 0usize..10, v in 0usize..10) {
        let mut g = build(n, &edges);
        let (u, v) = (u % n, v % n);
        if !g.contains_edge(u, v) {
            let before = g.clone();
            prop_assert_eq!(g.remove_edge(u, v), Err(Error::EdgeNotFound { u, v }));
            prop_assert_eq!(g.remove_edge(v, u), Err(Error::EdgeNotFound { u: v, v: u }));
            prop_assert_eq!(g, before);
        }
    }

    #[test]
    fn remove_undoes_add((n, edges) in arb_graph(), w in 0u32..100) {
        let mut g = build(n, &edges);
        let cnt = g.count_edges();
        g.add_edge(0, n - 1, w).unwrap();
        g.remove_edge(n - 1, 0).unwrap();
        prop_assert_eq!(g.count_edges(), cnt);
    }

    #[test]
    fn search_trees_span_the_component((n, edges) in arb_graph(), s in 0usize..10) {
        let g = build(n, &edges);
        let s = s % n;
        for tree in vec![bfs(&g, s).unwrap(), dfs(&g, s).unwrap()] {
            prop_assert_eq!(tree.num_vertices(), n);
            prop_assert_eq!(tree.count_edges(), reachable(&g, s) - 1);
            prop_assert_eq!(reachable(&tree, s), reachable(&g, s));
            for (u, v, _) in tree.edges() {
                prop_assert!(g.contains_edge(u, v));
            }
        }
    }

    #[test]
    fn dijkstra_finds_shortest_distances((n, edges) in arb_graph(), s in 0usize..10) {
        let g = build(n, &edges);
        let s = s % n;
        let expected = relaxed_distances(n, &edges, s);
        prop_assert_eq!(&dijkstra::distances(&g, s).unwrap(), &expected);

        let tree = dijkstra(&g, s).unwrap();
        prop_assert_eq!(tree.count_edges(), reachable(&g, s) - 1);
        let tree_edges: Vec<_> = tree.edges().collect();
        prop_assert_eq!(relaxed_distances(n, &tree_edges, s), expected);
    }

    #[test]
    fn minimum_spanning_trees_agree((n, edges) in arb_graph()) {
        let g = build(n, &edges);
        let forest = kruskal(&g).unwrap();
        prop_assert_eq!(forest.count_edges(), n - components(n, &edges));

        let tree = prim(&g).unwrap();
        prop_assert_eq!(tree.count_edges(), reachable(&g, 0) - 1);
        if reachable(&g, 0) == n {
            prop_assert_eq!(tree.total_weight(), forest.total_weight());
        }
    }
}
