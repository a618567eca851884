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

//! Errors reported by graph mutations and algorithms.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An endpoint of an edge is not a vertex of the graph.
    ///
    /// The graph has not been modified.
    #[error("invalid edge ({u}, {v}) in a graph with {n} vertices")]
    InvalidEdge { u: usize, v: usize, n: usize },

    /// The edge to be removed does not exist.
    #[error("the edge ({u}, {v}) does not exist and cannot be removed")]
    EdgeNotFound { u: usize, v: usize },

    /// An edge list has no entry for the destination.
    #[error("no edge to {dest} in edge list")]
    NotFound { dest: usize },

    /// A start vertex is not a vertex of the graph.
    #[error("invalid start vertex {vertex} in a graph with {n} vertices")]
    InvalidVertex { vertex: usize, n: usize },

    /// An edge weight is negative where only non-negative weights are allowed.
    #[error("negative weight on edge ({u}, {v})")]
    NegativeWeight { u: usize, v: usize },
}
