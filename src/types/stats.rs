//! Buffer occupancy statistics

use serde::Serialize;

/// Point-in-time view of the buffer counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct BufferStats {
    /// Fixed number of slots
    pub capacity: usize,
    /// Slots currently holding a record
    pub stored: usize,
    /// Pushes since the buffer was created
    pub total_pushed: u64,
}

impl BufferStats {
    /// Records lost to overwrite since the buffer was created
    pub fn overwritten(&self) -> u64 {
        self.total_pushed.saturating_sub(self.stored as u64)
    }

    /// Check if every slot holds a record
    pub fn is_full(&self) -> bool {
        self.stored == self.capacity
    }
}
