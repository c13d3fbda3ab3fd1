use std::time::{Duration, Instant};

use winit::dpi::PhysicalSize;

/// Holds back window resizes until the user stops dragging.
///
/// Every resize event replaces the pending size and restarts the timer. The
/// size is released once `settle` has passed with no newer event.
#[derive(Debug, Clone)]
pub struct ResizeLatch {
    settle: Duration,
    pending: Option<(PhysicalSize<u32>, Instant)>,
}

impl ResizeLatch {
    pub fn new(settle: Duration) -> Self {
        Self { settle, pending: None }
    }

    pub fn note(&mut self, size: PhysicalSize<u32>, now: Instant) {
        self.pending = Some((size, now));
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending size will be released, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, at)| at + self.settle)
    }

    /// Takes the pending size once it has settled.
    pub fn poll(&mut self, now: Instant) -> Option<PhysicalSize<u32>> {
        let deadline = self.deadline()?;
        if now < deadline {
            return None;
        }
        self.pending.take().map(|(size, _)| size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTLE: Duration = Duration::from_millis(150);

    #[test]
    fn releases_after_quiet_period() {
        let t0 = Instant::now();
        let mut latch = ResizeLatch::new(SETTLE);
        latch.note(PhysicalSize::new(800, 600), t0);
        assert!(latch.is_pending());
        assert_eq!(latch.poll(t0 + Duration::from_millis(100)), None);
        assert_eq!(latch.poll(t0 + SETTLE), Some(PhysicalSize::new(800, 600)));
        assert!(!latch.is_pending());
        assert_eq!(latch.poll(t0 + SETTLE * 2), None);
    }

    #[test]
    fn new_events_restart_the_timer_and_keep_latest_size() {
        let t0 = Instant::now();
        let mut latch = ResizeLatch::new(SETTLE);
        latch.note(PhysicalSize::new(800, 600), t0);
        let t1 = t0 + Duration::from_millis(120);
        latch.note(PhysicalSize::new(1024, 768), t1);
        assert_eq!(latch.poll(t0 + SETTLE), None);
        assert_eq!(latch.deadline(), Some(t1 + SETTLE));
        assert_eq!(latch.poll(t1 + SETTLE), Some(PhysicalSize::new(1024, 768)));
    }
}
