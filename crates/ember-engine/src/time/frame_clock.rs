use std::time::{Duration, Instant};

/// Timing snapshot for one loop iteration.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped (see [`FrameClock`]).
    pub dt: f32,
    /// Monotonic iteration counter, starting at 0.
    pub frame: u64,
}

/// Per-loop clock producing clamped delta times.
///
/// The clamp keeps downstream consumers stable when the process stalls (hit
/// a breakpoint, window minimized, machine suspended): a multi-second gap is
/// reported as `max_dt` rather than the raw wall-clock gap.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame: u64,
    max_dt: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(Duration::from_millis(250))
    }

    pub fn with_max_dt(max_dt: Duration) -> Self {
        Self {
            last: Instant::now(),
            frame: 0,
            max_dt,
        }
    }

    /// Resets the baseline, e.g. after resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns the snapshot for this iteration.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).min(self.max_dt);
        self.last = now;

        let snapshot = FrameTime {
            dt: dt.as_secs_f32(),
            frame: self.frame,
        };
        self.frame = self.frame.wrapping_add(1);

        snapshot
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
