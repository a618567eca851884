/*
 * Copyright (c) 2019, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! # Graph search algorithms.
//!
//! Both searches return the search tree as a new [`Graph`][crate::Graph] on
//! the same vertices. A tree edge `{u, v}` is added when `v` is discovered
//! from `u`, with the weight of that edge in the input graph. Vertices not
//! reachable from the start vertex have no incident edges in the tree.
//!
//! The neighbors of a vertex are visited in the enumeration order of its
//! edge list, i.e. the most recently added edge first. Hence the tree
//! depends on the order in which the edges have been added to the graph.

pub mod bfs;
pub mod dfs;

pub use self::bfs::bfs;
pub use self::dfs::dfs;
