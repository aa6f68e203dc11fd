use std::thread;
use std::time::{Duration, Instant};

/// Best-effort fixed-rate frame pacer.
///
/// `pace` sleeps away whatever is left of the frame budget since the
/// previous call. There is no drift correction and no catch-up: a late
/// frame is simply late, and the next one starts a fresh budget.
pub struct FrameClock {
    frame: Duration,
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new(fps: f32) -> Self {
        Self {
            frame: Duration::from_secs_f32(1.0 / fps.max(1.0)),
            last: None,
        }
    }

    /// The full per-frame budget.
    pub fn frame_time(&self) -> Duration {
        self.frame
    }

    /// Sleep out the remainder of the current frame. The first call
    /// returns immediately and starts the first budget.
    pub fn pace(&mut self) {
        if let Some(last) = self.last {
            let wait = remaining(self.frame, last.elapsed());
            if !wait.is_zero() {
                thread::sleep(wait);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Time left in the frame budget. Saturates at zero for late frames.
fn remaining(frame: Duration, elapsed: Duration) -> Duration {
    frame.saturating_sub(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_time_matches_fps() {
        let clock = FrameClock::new(30.0);
        let millis = clock.frame_time().as_secs_f32() * 1000.0;
        assert!((millis - 33.333).abs() < 0.01, "got {} ms", millis);
    }

    #[test]
    fn fps_is_clamped_to_at_least_one() {
        let clock = FrameClock::new(0.0);
        assert_eq!(clock.frame_time(), Duration::from_secs(1));
    }

    #[test]
    fn remaining_saturates_for_late_frames() {
        let frame = Duration::from_millis(33);
        assert_eq!(
            remaining(frame, Duration::from_millis(10)),
            Duration::from_millis(23)
        );
        assert_eq!(remaining(frame, Duration::from_millis(50)), Duration::ZERO);
    }

    #[test]
    fn first_pace_does_not_block_for_a_frame() {
        let mut clock = FrameClock::new(2.0);
        let start = Instant::now();
        clock.pace();
        assert!(start.elapsed() < Duration::from_millis(100));
    }
}
