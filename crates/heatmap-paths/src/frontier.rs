//! Growable ring-buffer FIFO used as the breadth-first frontier.

use std::collections::TryReserveError;

/// A FIFO queue backed by a contiguous buffer used as a ring.
///
/// `head` is the slot of the oldest element and `tail` the slot one past the
/// newest. One slot is always kept free so that `head == tail` can only mean
/// "empty"; the buffer doubles before that slot would be filled. `tail` may
/// rest at `capacity()` and is wrapped to 0 lazily by the next push or pop.
///
/// All allocation goes through `try_reserve_exact`, so running out of memory
/// surfaces as an error and leaves the queue as it was before the call.
#[derive(Debug, Clone)]
pub struct FrontierQueue<T> {
    slots: Vec<T>,
    head: usize,
    tail: usize,
}

impl<T: Copy + Default> FrontierQueue<T> {
    /// Create a queue with room for one slot.
    pub fn try_new() -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(1)?;
        slots.push(T::default());
        Ok(Self {
            slots,
            head: 0,
            tail: 0,
        })
    }

    /// Number of slots in the ring, including the reserved one.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        if self.head > self.tail {
            self.tail + self.capacity() - self.head
        } else {
            self.tail - self.head
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `item` at the back, doubling the ring first if it would
    /// otherwise become full.
    pub fn push(&mut self, item: T) -> Result<(), TryReserveError> {
        if self.len() + 1 == self.capacity() {
            self.grow()?;
        }
        if self.tail == self.capacity() {
            self.tail = 0;
        }
        self.slots[self.tail] = item;
        self.tail += 1;
        Ok(())
    }

    /// Remove and return the oldest element.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head];
        self.head += 1;
        if self.head == self.capacity() {
            self.head = 0;
            // A tail parked at the end denotes slot 0 once head has wrapped.
            if self.tail == self.capacity() {
                self.tail = 0;
            }
        }
        Some(item)
    }

    fn grow(&mut self) -> Result<(), TryReserveError> {
        let old = self.capacity();
        self.slots.try_reserve_exact(old)?;
        self.slots.resize(old * 2, T::default());
        if self.tail < self.head {
            // The live region wraps: [B B . . A A] becomes
            // [B B . . A A B B . . . .] with the live run A A B B contiguous.
            self.slots.copy_within(0..self.tail, old);
            self.tail += old;
        }
        log::trace!("frontier queue grew to {} slots", self.capacity());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;

    #[test]
    fn starts_empty_with_one_slot() {
        let mut q: FrontierQueue<u32> = FrontierQueue::try_new().unwrap();
        assert_eq!(q.capacity(), 1);
        assert!(q.is_empty());
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn push_then_pop_is_fifo_across_growth() {
        for n in [1usize, 2, 3, 5, 100] {
            let mut q = FrontierQueue::try_new().unwrap();
            for i in 0..n {
                q.push(i).unwrap();
                assert_eq!(q.len(), i + 1);
            }
            assert!(q.capacity() > n, "n = {n}: ring must keep a free slot");
            let out: Vec<usize> = std::iter::from_fn(|| q.pop()).collect();
            assert_eq!(out, (0..n).collect::<Vec<_>>(), "n = {n}");
            assert!(q.is_empty());
        }
    }

    #[test]
    fn capacity_doubles() {
        let mut q = FrontierQueue::try_new().unwrap();
        let mut seen = vec![q.capacity()];
        for i in 0..40 {
            q.push(i).unwrap();
            if *seen.last().unwrap() != q.capacity() {
                seen.push(q.capacity());
            }
        }
        assert_eq!(seen, vec![1, 2, 4, 8, 16, 32, 64]);
    }

    #[test]
    fn growth_while_wrapped_keeps_order() {
        let mut q = FrontierQueue::try_new().unwrap();
        q.push(1).unwrap();
        q.push(2).unwrap();
        q.push(3).unwrap();
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.pop(), Some(2));
        q.push(4).unwrap();
        q.push(5).unwrap();

        // 5 went to slot 0 while 3 and 4 sit at the end of the ring.
        assert_eq!(q.capacity(), 4);
        assert!(q.tail < q.head);
        assert_eq!(q.len(), 3);

        q.push(6).unwrap();
        assert_eq!(q.capacity(), 8);
        assert!(q.tail > q.head);

        let out: Vec<i32> = std::iter::from_fn(|| q.pop()).collect();
        assert_eq!(out, vec![3, 4, 5, 6]);
    }

    #[test]
    fn tail_parked_at_end_resets_when_head_wraps() {
        let mut q = FrontierQueue::try_new().unwrap();
        for i in 0..3 {
            q.push(i).unwrap();
        }
        assert_eq!(q.capacity(), 4);
        q.pop();
        q.pop();
        q.push(3).unwrap();
        assert_eq!(q.tail, q.capacity());

        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(3));
        assert_eq!((q.head, q.tail), (0, 0));
        assert!(q.is_empty());
        assert_eq!(q.pop(), None);

        q.push(9).unwrap();
        assert_eq!(q.pop(), Some(9));
    }

    #[test]
    fn matches_vecdeque_under_random_interleaving() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut q = FrontierQueue::try_new().unwrap();
        let mut model = VecDeque::new();
        let mut next = 0u32;
        for _ in 0..5_000 {
            if rng.random_bool(0.55) {
                q.push(next).unwrap();
                model.push_back(next);
                next += 1;
            } else {
                assert_eq!(q.pop(), model.pop_front());
            }
            assert_eq!(q.len(), model.len());
        }
        while let Some(v) = model.pop_front() {
            assert_eq!(q.pop(), Some(v));
        }
        assert!(q.is_empty());
    }
}
