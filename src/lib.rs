// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! A library for undirected weighted graphs and the trees derived from them.
//!
//! A [`Graph`] has a fixed number of vertices `0..n` and stores each edge in
//! the edge lists of both endpoints. The algorithms take a graph and return a
//! new graph on the same vertices containing the selected tree edges:
//!
//! - [`search::bfs()`] and [`search::dfs()`]: search trees from a start vertex,
//! - [`shortestpath::dijkstra()`]: shortest path tree from a start vertex,
//! - [`mst::prim()`] and [`mst::kruskal()`]: minimum spanning trees.
//!
//! # Example
//!
//! ```
//! use rs_wgraph::{mst, search, shortestpath, Graph};
//!
//! let mut g: Graph = Graph::new(4);
//! g.add_edge(0, 1, 1).unwrap();
//! g.add_edge(1, 2, 2).unwrap();
//! g.add_edge(0, 2, 2).unwrap();
//! g.add_edge(2, 3, 1).unwrap();
//!
//! assert_eq!(search::bfs(&g, 0).unwrap().count_edges(), 3);
//! assert_eq!(search::dfs(&g, 0).unwrap().count_edges(), 3);
//! assert_eq!(shortestpath::dijkstra(&g, 0).unwrap().total_weight(), Some(4));
//! assert_eq!(mst::prim(&g).unwrap().total_weight(), Some(4));
//! assert_eq!(mst::kruskal(&g).unwrap().total_weight(), Some(4));
//! ```

// # Data structures

pub mod error;
pub use self::error::{Error, Result};

pub mod edgelist;
pub use self::edgelist::EdgeList;

pub mod graph;
pub use self::graph::Graph;

/// Graph classes
pub mod classes;

pub mod collections;

// # Algorithms

pub mod mst;
pub mod search;
pub mod shortestpath;
