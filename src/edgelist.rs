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

//! The list of incident edges of a single vertex.

use crate::error::{Error, Result};

use std::fmt;
use std::iter::Rev;
use std::slice::Iter as SliceIter;

/// Data for one incident edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry<W> {
    dest: usize,
    weight: W,
}

/// The incident edges of one vertex.
///
/// Edges are enumerated newest first, i.e. the most recently inserted edge
/// is the first one returned by [`EdgeList::iter`] and
/// [`EdgeList::neighbors`]. The traversal algorithms inherit this order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeList<W = u32> {
    // Stored oldest first, enumerated in reverse.
    entries: Vec<Entry<W>>,
}

impl<W> Default for EdgeList<W> {
    fn default() -> Self {
        EdgeList { entries: vec![] }
    }
}

/// An iterator over the `(dest, weight)` pairs of an edge list.
#[derive(Clone)]
pub struct Iter<'a, W>(Rev<SliceIter<'a, Entry<W>>>);

impl<'a, W> Iterator for Iter<'a, W>
where
    W: Copy,
{
    type Item = (usize, W);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| (e.dest, e.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, W> ExactSizeIterator for Iter<'a, W> where W: Copy {}

impl<W> EdgeList<W>
where
    W: Copy,
{
    /// Create an empty edge list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge to `dest` in front of all existing edges.
    pub fn insert(&mut self, dest: usize, weight: W) {
        self.entries.push(Entry { dest, weight });
    }

    /// Remove the first edge to `dest`.
    ///
    /// Returns [`Error::NotFound`] if there is no such edge.
    pub fn remove(&mut self, dest: usize) -> Result<()> {
        let pos = self
            .entries
            .iter()
            .rposition(|e| e.dest == dest)
            .ok_or(Error::NotFound { dest })?;
        self.entries.remove(pos);
        Ok(())
    }

    /// Return `true` iff there is an edge to `dest`.
    pub fn contains(&self, dest: usize) -> bool {
        self.entries.iter().any(|e| e.dest == dest)
    }

    /// Return the weight of the first edge to `dest`.
    pub fn weight(&self, dest: usize) -> Option<W> {
        self.iter().find(|&(d, _)| d == dest).map(|(_, w)| w)
    }

    /// Return the destinations of all edges.
    ///
    /// The returned vector is a copy, later changes of the list do not
    /// affect it.
    pub fn neighbors(&self) -> Vec<usize> {
        self.iter().map(|(d, _)| d).collect()
    }

    /// Return an iterator over all `(dest, weight)` pairs.
    pub fn iter(&self) -> Iter<W> {
        Iter(self.entries.iter().rev())
    }

    /// Return the number of edges.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` iff the list contains no edge.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W> fmt::Display for EdgeList<W>
where
    W: Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (dest, weight) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "({}, weight {})", dest, weight)?;
        }
        Ok(())
    }
}
