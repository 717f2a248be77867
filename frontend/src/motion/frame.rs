/// Coalesces bursts of scroll/resize events into at most one pending
/// animation frame.
///
/// `H` is the handle of the scheduled frame (`gloo_render::AnimationFrame` in
/// the browser); dropping it cancels the frame.
pub struct FrameGate<H> {
    pending: Option<H>,
    coalesced: u64,
}

impl<H> Default for FrameGate<H> {
    fn default() -> Self {
        Self {
            pending: None,
            coalesced: 0,
        }
    }
}

impl<H> FrameGate<H> {
    /// Schedule a frame with `schedule` unless one is already pending.
    /// Returns whether a new frame was scheduled.
    pub fn request(&mut self, schedule: impl FnOnce() -> H) -> bool {
        if self.pending.is_some() {
            self.coalesced += 1;
            return false;
        }
        self.pending = Some(schedule());
        true
    }

    /// Called from inside the frame callback; clears the pending slot.
    pub fn fire(&mut self) -> Option<H> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Events that arrived while a frame was already queued.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn burst_of_events_schedules_one_frame() {
        let mut gate = FrameGate::default();
        let mut scheduled = 0;
        for _ in 0..25 {
            gate.request(|| {
                scheduled += 1;
            });
        }
        assert_eq!(scheduled, 1);
        assert_eq!(gate.coalesced(), 24);

        assert!(gate.fire().is_some());
        assert!(gate.request(|| ()));
        assert!(gate.is_pending());
    }

    #[test]
    fn cancel_drops_the_pending_handle() {
        let drops = Rc::new(Cell::new(0));
        let mut gate = FrameGate::default();
        gate.request(|| Handle(drops.clone()));
        gate.cancel();
        assert_eq!(drops.get(), 1);
        assert!(!gate.is_pending());
    }

    #[test]
    fn dropping_the_gate_cancels_too() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut gate = FrameGate::default();
            gate.request(|| Handle(drops.clone()));
        }
        assert_eq!(drops.get(), 1);
    }
}
