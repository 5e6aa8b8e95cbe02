//! Event Buffer - bounded in-memory store
//!
//! Holds the most recent `capacity` webhook records in a fixed ring of
//! slots. Once every slot is filled, each push silently replaces the
//! oldest record. Queries walk the ring backward so results come out
//! newest-first.
//!
//! All mutable state (slots, cursor, fill count, push counter) sits behind
//! one `RwLock`: pushes take it exclusively, queries share it.

mod filter;
pub mod stringify;

use std::num::NonZeroUsize;

use parking_lot::RwLock;
use tracing::trace;

use crate::types::{BufferStats, EventRecord};

pub use filter::Filters;

/// Ring state guarded as a single unit
struct Ring {
    slots: Vec<Option<EventRecord>>,
    /// Next slot to write
    cursor: usize,
    /// Slots holding a record; saturates at capacity
    filled: usize,
    total_pushed: u64,
}

impl Ring {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            cursor: 0,
            filled: 0,
            total_pushed: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn push(&mut self, record: EventRecord) {
        let capacity = self.capacity();
        self.slots[self.cursor] = Some(record);
        self.cursor = (self.cursor + 1) % capacity;
        if self.filled < capacity {
            self.filled += 1;
        }
        self.total_pushed += 1;
    }

    /// Stored records, newest first
    fn newest_first(&self) -> impl Iterator<Item = &EventRecord> + '_ {
        let capacity = self.capacity();
        (1..=self.filled).filter_map(move |step| {
            let idx = (self.cursor + capacity - step) % capacity;
            self.slots[idx].as_ref()
        })
    }
}

/// Fixed-capacity, thread-safe ring of captured webhooks
pub struct EventBuffer {
    ring: RwLock<Ring>,
}

impl EventBuffer {
    /// Create an empty buffer with `capacity` slots
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            ring: RwLock::new(Ring::with_capacity(capacity.get())),
        }
    }

    /// Store a record, overwriting the oldest one when full
    pub fn push(&self, record: EventRecord) {
        let mut ring = self.ring.write();
        trace!(
            event_type = %record.event_type,
            slot = ring.cursor,
            "storing record"
        );
        ring.push(record);
    }

    /// Records of `event_type` satisfying every filter, newest first
    ///
    /// Returns clones; callers cannot reach the stored records.
    pub fn query(&self, event_type: &str, filters: &Filters) -> Vec<EventRecord> {
        let ring = self.ring.read();
        let matches: Vec<EventRecord> = ring
            .newest_first()
            .filter(|record| record.event_type == event_type)
            .filter(|record| filters.matches(&record.payload))
            .cloned()
            .collect();
        matches
    }

    /// Number of slots, fixed at construction
    pub fn capacity(&self) -> usize {
        self.ring.read().capacity()
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.ring.read().filled
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the buffer counters, taken under one lock
    pub fn stats(&self) -> BufferStats {
        let ring = self.ring.read();
        BufferStats {
            capacity: ring.capacity(),
            stored: ring.filled,
            total_pushed: ring.total_pushed,
        }
    }
}
