// File: crates/plot-core/src/handoff.rs
// Summary: Double-buffer handoff of data frames from a producer thread to the UI thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

struct Slot<T> {
    frame: Mutex<Option<T>>,
    fresh: AtomicBool,
}

/// Latest-wins mailbox: the producer overwrites, the consumer takes.
///
/// Geometry never crosses threads; only the raw frame does. The consumer
/// swaps the frame out under a short lock and does all plotting work on its
/// own thread.
pub struct FrameHandoff<T> {
    slot: Arc<Slot<T>>,
}

impl<T> Clone for FrameHandoff<T> {
    fn clone(&self) -> Self { Self { slot: Arc::clone(&self.slot) } }
}

impl<T> Default for FrameHandoff<T> {
    fn default() -> Self { Self::new() }
}

impl<T> FrameHandoff<T> {
    pub fn new() -> Self {
        Self { slot: Arc::new(Slot { frame: Mutex::new(None), fresh: AtomicBool::new(false) }) }
    }

    /// Store `frame`, replacing any frame the consumer has not taken yet.
    pub fn publish(&self, frame: T) {
        let mut guard = match self.slot.frame.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(frame);
        self.slot.fresh.store(true, Ordering::Release);
    }

    /// Cheap check the UI thread can poll before taking the lock.
    pub fn has_fresh(&self) -> bool {
        self.slot.fresh.load(Ordering::Acquire)
    }

    /// Newest unseen frame, if any.
    pub fn take(&self) -> Option<T> {
        if !self.slot.fresh.swap(false, Ordering::AcqRel) {
            return None;
        }
        let mut guard = match self.slot.frame.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_frame_wins() {
        let h = FrameHandoff::new();
        assert_eq!(h.take(), None);
        h.publish(1);
        h.publish(2);
        assert!(h.has_fresh());
        assert_eq!(h.take(), Some(2));
        assert_eq!(h.take(), None);
    }

    #[test]
    fn crosses_threads() {
        let h = FrameHandoff::new();
        let producer = h.clone();
        std::thread::spawn(move || producer.publish(vec![1.0f32, 2.0]))
            .join()
            .unwrap();
        assert_eq!(h.take(), Some(vec![1.0, 2.0]));
    }
}
