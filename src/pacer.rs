use std::thread;
use std::time::{Duration, Instant};

/// Per-iteration loop state, passed by reference between loop phases.
pub struct FrameTiming {
    pub frame_start: Instant,
    pub frame_time: Duration,
    pub frame_count: u32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    pub fn new() -> Self {
        Self {
            frame_start: Instant::now(),
            frame_time: Duration::ZERO,
            frame_count: 0,
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }
}

/// Pads each iteration out to a fixed target period. Soft cap only: a slow
/// frame is reported as-is with no catch-up on later frames.
pub struct FramePacer {
    target: Duration,
}

impl FramePacer {
    pub fn new(target: Duration) -> Self {
        Self { target }
    }

    /// Blocks for whatever remains of the target period. Returns the elapsed
    /// time to report for the frame: exactly the target when the frame was
    /// fast, the true elapsed time when it overran.
    pub fn pace(&self, frame_start: Instant) -> Duration {
        let elapsed = frame_start.elapsed();
        if elapsed < self.target {
            thread::sleep(self.target - elapsed);
            self.target
        } else {
            elapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_frame_is_padded_to_target() {
        let pacer = FramePacer::new(Duration::from_millis(20));
        let start = Instant::now();
        let reported = pacer.pace(start);
        let wall = start.elapsed();

        assert_eq!(reported, Duration::from_millis(20));
        assert!(wall >= Duration::from_millis(20), "wall was {:?}", wall);
        // Sleep overshoot exists but should stay well under one period.
        assert!(wall < Duration::from_millis(40), "wall was {:?}", wall);
    }

    #[test]
    fn slow_frame_reports_true_elapsed_without_delay() {
        let pacer = FramePacer::new(Duration::from_millis(5));
        let start = Instant::now();
        thread::sleep(Duration::from_millis(12));
        let before_pace = Instant::now();
        let reported = pacer.pace(start);
        let pace_cost = before_pace.elapsed();

        assert!(reported >= Duration::from_millis(12));
        assert!(pace_cost < Duration::from_millis(4), "paced a slow frame");
    }

    #[test]
    fn begin_frame_restamps_the_start() {
        let mut timing = FrameTiming::new();
        let first = timing.frame_start;
        thread::sleep(Duration::from_millis(2));
        timing.begin_frame();
        assert!(timing.frame_start > first);
    }
}
