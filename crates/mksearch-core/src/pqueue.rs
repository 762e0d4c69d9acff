use std::cmp::Reverse;

use crate::traits::Frontier;

/// Binary min-heap ordered by a [`Comparator`].
///
/// Equal items may be popped in any order.
pub struct PriorityQueue<T, C> {
    cmp: C,
    heap: Vec<T>,
}

/// Trait for ordering items in a [`PriorityQueue`].
pub trait Comparator<T> {
    /// Perform `<=` comparison.
    fn le(&self, lhs: &T, rhs: &T) -> bool;
}

/// Orders items by their own [`PartialOrd`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

/// Orders items by a key extracted from each item.
#[derive(Clone, Copy, Debug)]
pub struct ByKey<F>(pub F);

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `cmp`.
    pub fn new(cmp: C) -> Self {
        PriorityQueue { cmp, heap: vec![] }
    }

    /// Creates an empty queue with room for `capacity` items.
    pub fn with_capacity(cmp: C, capacity: usize) -> Self {
        PriorityQueue {
            cmp,
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Inserts `item`.
    pub fn push(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes the minimum item.
    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let ret = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(ret)
    }

    /// Returns the minimum item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent_index = (index - 1) / 2;
            if self.cmp.le(&self.heap[parent_index], &self.heap[index]) {
                break;
            }
            self.heap.swap(parent_index, index);
            index = parent_index;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let child_1_index = index * 2 + 1;
            if child_1_index >= self.heap.len() {
                break;
            }

            let child_2_index = child_1_index + 1;
            let child_index = if child_2_index < self.heap.len()
                && !self
                    .cmp
                    .le(&self.heap[child_1_index], &self.heap[child_2_index])
            {
                child_2_index
            } else {
                child_1_index
            };

            if self.cmp.le(&self.heap[index], &self.heap[child_index]) {
                break;
            }

            self.heap.swap(index, child_index);
            index = child_index;
        }
    }
}

impl<T: PartialOrd> PriorityQueue<T, NaturalOrder> {
    /// Creates an empty queue ordered by `T: PartialOrd`.
    pub fn natural() -> Self {
        PriorityQueue::new(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> Frontier<T> for PriorityQueue<T, C> {
    fn push(&mut self, item: T) {
        PriorityQueue::push(self, item)
    }

    fn pop(&mut self) -> Option<T> {
        PriorityQueue::pop(self)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: PartialOrd> Comparator<T> for NaturalOrder {
    fn le(&self, lhs: &T, rhs: &T) -> bool {
        lhs <= rhs
    }
}

impl<T, K: PartialOrd, F: Fn(&T) -> K> Comparator<T> for ByKey<F> {
    fn le(&self, lhs: &T, rhs: &T) -> bool {
        (self.0)(lhs) <= (self.0)(rhs)
    }
}

impl<T, C: Comparator<T>> Comparator<T> for Reverse<C> {
    fn le(&self, lhs: &T, rhs: &T) -> bool {
        self.0.le(rhs, lhs)
    }
}

macro_rules! tuple_cmp_impl {
    ($($typ:ident $index:tt)*) => {
        impl<T, $($typ: Comparator<T>),*> Comparator<T> for ($($typ,)*) {
            fn le(&self, lhs: &T, rhs: &T) -> bool {
                tuple_cmp_impl!(@cmp self lhs rhs $($index)*)
            }
        }
    };
    (@cmp $self:ident $lhs:ident $rhs:ident $last:tt) => {
        $self.$last.le($lhs, $rhs)
    };
    (@cmp $self:ident $lhs:ident $rhs:ident $next:tt $($rest:tt)+) => {{
        let l_leq_r = $self.$next.le($lhs, $rhs);
        let r_leq_l = $self.$next.le($rhs, $lhs);
        if l_leq_r && r_leq_l {
            tuple_cmp_impl!(@cmp $self $lhs $rhs $($rest)*)
        } else {
            l_leq_r
        }
    }};
}

tuple_cmp_impl!(A 0);
tuple_cmp_impl!(A 0 B 1);
tuple_cmp_impl!(A 0 B 1 C 2);
tuple_cmp_impl!(A 0 B 1 C 2 D 3);
