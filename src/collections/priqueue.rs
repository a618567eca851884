/*
 * Copyright (c) 2018, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

/// A bounded min-priority store of `(value, priority)` pairs.
///
/// The pairs are kept unsorted, `pop_min` scans all of them. Pushing a value
/// that is already stored adds a second entry instead of updating the first
/// one. Dijkstra and Prim rely on this: an improved priority is simply pushed
/// again and outdated entries are skipped when they are popped later.
///
/// Among entries of equal priority the one at the lowest position wins, so
/// the result depends only on the sequence of operations.
#[derive(Clone, Debug)]
pub struct PriorityStore<P> {
    entries: Vec<(usize, P)>,
    capacity: usize,
}

impl<P> PriorityStore<P>
where
    P: PartialOrd + Copy,
{
    /// Create an empty store holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityStore {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` iff the store contains no entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear()
    }

    /// Append the entry `(value, priority)`.
    ///
    /// Returns `false` (and stores nothing) if the store is full.
    pub fn push(&mut self, value: usize, priority: P) -> bool {
        if self.entries.len() == self.capacity {
            return false;
        }
        self.entries.push((value, priority));
        true
    }

    /// Lower the priority of the first entry of `value`.
    ///
    /// Returns `true` if such an entry exists and `priority` is smaller than
    /// its current priority.
    pub fn decrease_key(&mut self, value: usize, priority: P) -> bool {
        match self.entries.iter_mut().find(|(v, p)| *v == value && priority < *p) {
            Some(entry) => {
                entry.1 = priority;
                true
            }
            None => false,
        }
    }

    /// Remove and return the entry with the smallest priority.
    ///
    /// The last entry takes the place of the removed one.
    pub fn pop_min(&mut self) -> Option<(usize, P)> {
        let mut it = self.entries.iter().enumerate();
        let (mut minpos, first) = it.next()?;
        let mut minprio = first.1;
        for (i, &(_, p)) in it {
            if p < minprio {
                minpos = i;
                minprio = p;
            }
        }
        Some(self.entries.swap_remove(minpos))
    }
}
