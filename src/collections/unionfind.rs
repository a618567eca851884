/*
 * Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

/// A node of the union-find forest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Component {
    /// The root element with the tree's rank.
    Root(usize),
    /// An inner node with the parent node.
    Node(usize),
}

/// Union-Find data structure on the elements `0..n`.
///
/// Uses path compression in [`DisjointSet::find`] and union by rank in
/// [`DisjointSet::unite`].
#[derive(Clone, Debug)]
pub struct DisjointSet {
    comps: Vec<Component>,
}

impl DisjointSet {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        DisjointSet {
            comps: vec![Component::Root(0); n],
        }
    }

    pub fn len(&self) -> usize {
        self.comps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }

    /// Return the root and the rank of the set containing `u`.
    fn find_root(&self, u: usize) -> (usize, usize) {
        let mut v = u;
        loop {
            match self.comps[v] {
                Component::Node(parent) => v = parent,
                Component::Root(rank) => return (v, rank),
            }
        }
    }

    /// Return the representative of the set containing `u`.
    ///
    /// All elements on the path from `u` to the root are attached directly to
    /// the root.
    pub fn find(&mut self, u: usize) -> usize {
        let (root, _) = self.find_root(u);
        let mut v = u;
        while let Component::Node(parent) = self.comps[v] {
            self.comps[v] = Component::Node(root);
            v = parent;
        }
        root
    }

    /// Return `true` iff `u` and `v` are in the same set.
    pub fn same(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    /// Merge the sets containing `u` and `v`.
    ///
    /// The root of lower rank is attached to the other root. Returns `false`
    /// if both elements have already been in the same set.
    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        let uroot = self.find(u);
        let vroot = self.find(v);
        if uroot == vroot {
            return false;
        }
        let (_, urank) = self.find_root(uroot);
        let (_, vrank) = self.find_root(vroot);
        if urank < vrank {
            self.comps[uroot] = Component::Node(vroot);
        } else {
            self.comps[vroot] = Component::Node(uroot);
            if urank == vrank {
                self.comps[uroot] = Component::Root(urank + 1);
            }
        }
        true
    }
}
