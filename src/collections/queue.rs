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

use std::collections::VecDeque;

/// A first-in-first-out queue of items.
pub trait ItemQueue<I> {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    fn clear(&mut self);

    /// Append `u` at the back of the queue.
    ///
    /// Returns `false` if the item could not be stored.
    fn push(&mut self, u: I) -> bool;

    /// Remove and return the front item, or `None` if the queue is empty.
    fn pop(&mut self) -> Option<I>;
}

impl<'a, I, D> ItemQueue<I> for &'a mut D
where
    D: ItemQueue<I>,
{
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn push(&mut self, u: I) -> bool {
        (**self).push(u)
    }

    fn pop(&mut self) -> Option<I> {
        (**self).pop()
    }
}

impl<I> ItemQueue<I> for VecDeque<I> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }

    fn push(&mut self, u: I) -> bool {
        VecDeque::push_back(self, u);
        true
    }

    fn pop(&mut self) -> Option<I> {
        VecDeque::pop_front(self)
    }
}

/// A fixed capacity ring buffer.
///
/// Pushing onto a full queue does nothing. Breadth-first search never pushes
/// more items than there are vertices, so a queue with capacity `n` never
/// overflows there.
#[derive(Clone, Debug)]
pub struct WorkQueue<I = usize> {
    data: Vec<Option<I>>,
    front: usize,
    len: usize,
}

impl<I> WorkQueue<I> {
    /// Create an empty queue holding at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        WorkQueue {
            data: (0..capacity).map(|_| None).collect(),
            front: 0,
            len: 0,
        }
    }

    /// Return the maximal number of items.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }
}

impl<I> ItemQueue<I> for WorkQueue<I> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.data.iter_mut().for_each(|x| *x = None);
        self.front = 0;
        self.len = 0;
    }

    fn push(&mut self, u: I) -> bool {
        if self.is_full() {
            return false;
        }
        let rear = (self.front + self.len) % self.data.len();
        self.data[rear] = Some(u);
        self.len += 1;
        true
    }

    fn pop(&mut self) -> Option<I> {
        if self.len == 0 {
            return None;
        }
        let u = self.data[self.front].take();
        self.front = (self.front + 1) % self.data.len();
        self.len -= 1;
        u
    }
}
