use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Error, Result};

static NEXT_QUEUE_ID: AtomicU64 = AtomicU64::new(0);

/// Stable reference to an element of a `DecreaseKeyHeap`, returned by `insert`.
///
/// A handle stays valid until its element is extracted. It never points into
/// heap storage; the heap keeps a position table indexed by the handle's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    queue: u64,
    slot: usize,
}

/// Operation counters collected by a heap over its lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeapStats {
    pub inserts: usize,
    pub extractions: usize,
    pub decreases: usize,
    /// Element swaps performed while restoring the heap invariant
    pub swaps: usize,
}

#[derive(Debug)]
struct Entry<T> {
    value: T,
    slot: usize,
}

/// A binary min-heap with in-place decrease-key through handles.
///
/// - `insert`: O(log n), returns a `Handle`
/// - `extract_min`: O(log n)
/// - `decrease`: O(log n), sifts the element towards the root
///
/// Elements with equal keys leave in an unspecified but deterministic order.
#[derive(Debug)]
pub struct DecreaseKeyHeap<T>
where
    T: Ord + Debug,
{
    id: u64,
    /// Heap-ordered entries
    entries: Vec<Entry<T>>,
    /// Slot -> index into `entries`, `None` once extracted
    positions: Vec<Option<usize>>,
    /// Maximum number of queued elements, `None` for unbounded
    capacity: Option<usize>,
    stats: HeapStats,
}

impl<T> DecreaseKeyHeap<T>
where
    T: Ord + Debug,
{
    /// Creates a new empty, unbounded priority queue
    pub fn new() -> Self {
        DecreaseKeyHeap {
            id: NEXT_QUEUE_ID.fetch_add(1, Ordering::Relaxed),
            entries: Vec::new(),
            positions: Vec::new(),
            capacity: None,
            stats: HeapStats::default(),
        }
    }

    /// Creates a queue that holds at most `capacity` elements at a time
    pub fn with_capacity(capacity: usize) -> Self {
        DecreaseKeyHeap {
            id: NEXT_QUEUE_ID.fetch_add(1, Ordering::Relaxed),
            entries: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
            capacity: Some(capacity),
            stats: HeapStats::default(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of queued elements
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn stats(&self) -> HeapStats {
        self.stats
    }

    /// Adds an element and returns the handle bound to it
    pub fn insert(&mut self, value: T) -> Result<Handle> {
        if let Some(capacity) = self.capacity {
            if self.entries.len() >= capacity {
                return Err(Error::CapacityExceeded(capacity));
            }
        }

        let slot = self.positions.len();
        let index = self.entries.len();
        self.entries.push(Entry { value, slot });
        self.positions.push(Some(index));
        self.stats.inserts += 1;
        self.sift_up(index);

        Ok(Handle { queue: self.id, slot })
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.entries.first().map(|entry| &entry.value)
    }

    /// Removes and returns the minimum element
    pub fn extract_min(&mut self) -> Result<T> {
        if self.entries.is_empty() {
            return Err(Error::EmptyQueue);
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let entry = self.entries.pop().ok_or(Error::EmptyQueue)?;
        self.positions[entry.slot] = None;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        self.stats.extractions += 1;

        Ok(entry.value)
    }

    /// True while the handle's element is still queued
    pub fn contains(&self, handle: Handle) -> bool {
        self.position(handle).is_ok()
    }

    /// Returns the current value behind a live handle
    pub fn get(&self, handle: Handle) -> Result<&T> {
        let index = self.position(handle)?;
        Ok(&self.entries[index].value)
    }

    /// Replaces the handle's element with a value that compares less than or
    /// equal to it, then restores heap order
    pub fn decrease(&mut self, handle: Handle, value: T) -> Result<()> {
        let index = self.position(handle)?;
        if value > self.entries[index].value {
            return Err(Error::InvalidDecrease);
        }

        self.entries[index].value = value;
        self.stats.decreases += 1;
        self.sift_up(index);
        Ok(())
    }

    fn position(&self, handle: Handle) -> Result<usize> {
        if handle.queue != self.id {
            return Err(Error::StaleHandle);
        }
        self.positions
            .get(handle.slot)
            .copied()
            .flatten()
            .ok_or(Error::StaleHandle)
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.positions[self.entries[a].slot] = Some(a);
        self.positions[self.entries[b].slot] = Some(b);
        self.stats.swaps += 1;
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].value < self.entries[parent].value {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].value < self.entries[smallest].value {
                smallest = left;
            }
            if right < len && self.entries[right].value < self.entries[smallest].value {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T> Default for DecreaseKeyHeap<T>
where
    T: Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
