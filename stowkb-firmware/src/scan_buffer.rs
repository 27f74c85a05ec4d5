use heapless::{Deque, Vec};

pub const DEFAULT_BUFFER_SIZE: usize = 128;

/// Fixed capacity FIFO of raw scancode bytes.
///
/// Pushing into a full buffer first drops the oldest `C / 2` bytes so the newest input always
/// survives. Ordering is only broken by that eviction.
pub struct ScanBuffer<const C: usize = DEFAULT_BUFFER_SIZE> {
    bytes: Deque<u8, C>,
}

impl<const C: usize> Default for ScanBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const C: usize> ScanBuffer<C> {
    const CAPACITY_OK: () = assert!(C >= 2, "ScanBuffer needs room for at least 2 bytes");

    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let _ = Self::CAPACITY_OK;
        Self {
            bytes: Deque::new(),
        }
    }

    pub fn push(&mut self, byte: u8) {
        if self.bytes.is_full() {
            let cut = C / 2;
            crate::warn!("scan buffer full; dropping {} oldest bytes", cut);
            for _ in 0..cut {
                self.bytes.pop_front();
            }
        }
        // cannot fail; there is room after the eviction above
        let _ = self.bytes.push_back(byte);
    }

    pub fn pop_front(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }

    pub fn peek_front(&self) -> Option<u8> {
        self.bytes.front().copied()
    }

    /// Remove and return every buffered byte, oldest first.
    pub fn drain_all(&mut self) -> Vec<u8, C> {
        let mut out = Vec::new();
        while let Some(b) = self.bytes.pop_front() {
            // same capacity as the deque
            let _ = out.push(b);
        }
        out
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        C
    }
}

#[cfg(test)]
#[path = "scan_buffer_test.rs"]
mod test;
