//! Deduplicating FIFO queue of pending object updates.

use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use veldt_core::{ObjectId, SceneEntity};

/// The queue and its duplicate-detection set, guarded as one unit so no
/// observer can see an identifier in one structure but not the other.
#[derive(Debug)]
struct QueueInner<T> {
    pending: VecDeque<T>,
    queued_ids: HashSet<ObjectId>,
}

/// FIFO queue of distinct pending scene objects.
///
/// `enqueue` is called by any thread whose simulation work dirties an
/// object; a single broadcast thread drains with `dequeue` once per tick.
/// Each distinct object appears at most once between drains no matter how
/// many times it was marked dirty, which bounds queue growth under bursty
/// repeated-dirtying workloads.
///
/// FIFO order of first-enqueue is preserved for the lifetime of an entry:
/// a duplicate enqueue does NOT move the object to the back.
#[derive(Debug)]
pub struct UpdateQueue<T: SceneEntity> {
    inner: Mutex<QueueInner<T>>,
}

impl<T: SceneEntity> Default for UpdateQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SceneEntity> UpdateQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(QueueInner {
                pending: VecDeque::new(),
                queued_ids: HashSet::new(),
            }),
        }
    }

    /// A poisoned lock still guards lock-step-consistent data (both
    /// structures are only ever mutated together inside one critical
    /// section), so recover the inner value.
    fn lock(&self) -> MutexGuard<'_, QueueInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue an object for transmission.
    ///
    /// A no-op if the object is already pending; the duplicate is silently
    /// absorbed and the original queue position kept.
    pub fn enqueue(&self, part: T) {
        let object_id = part.object_id();
        let mut inner = self.lock();
        if inner.queued_ids.insert(object_id) {
            inner.pending.push_back(part);
        } else {
            tracing::trace!(%object_id, "update already pending, coalesced");
        }
    }

    /// Remove and return the oldest pending object.
    ///
    /// `None` when the queue is empty - the normal termination condition
    /// for a drain loop.
    pub fn dequeue(&self) -> Option<T> {
        let mut inner = self.lock();
        let part = inner.pending.pop_front()?;
        inner.queued_ids.remove(&part.object_id());
        Some(part)
    }

    /// Discard all pending updates.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.pending.clear();
        inner.queued_ids.clear();
    }

    /// Number of distinct pending objects.
    pub fn len(&self) -> usize {
        self.lock().pending.len()
    }

    /// True if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.lock().pending.is_empty()
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;
    use veldt_core::ScenePart;

    fn part_with_id(id: Uuid) -> ScenePart {
        ScenePart {
            object_id: id,
            local_id: 0,
            name: String::new(),
            position: [0.0; 3],
            updated_at: chrono::Utc::now(),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// For any enqueue sequence drawn from a small id pool, draining
        /// yields each id exactly once, in order of first enqueue.
        #[test]
        fn prop_drain_yields_first_enqueue_order(
            sequence in prop::collection::vec(0..5usize, 0..40),
        ) {
            let pool: Vec<Uuid> = (0..5).map(|_| Uuid::now_v7()).collect();

            let queue = UpdateQueue::new();
            let mut expected = Vec::new();
            for &idx in &sequence {
                let id = pool[idx];
                if !expected.contains(&id) {
                    expected.push(id);
                }
                queue.enqueue(part_with_id(id));
            }

            prop_assert_eq!(queue.len(), expected.len());

            let mut drained = Vec::new();
            while let Some(part) = queue.dequeue() {
                drained.push(part.object_id);
            }
            prop_assert_eq!(drained, expected);
        }
    }
}
