//! Frame timing state: delta time, pacing delay and running averages.
//!
//! All methods take the current `Instant` from the caller so the arithmetic
//! can be exercised without sleeping.

use std::time::{Duration, Instant};

use tracing::trace;

/// Point-in-time summary of a frame timing state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    pub frames: u64,
    pub last_delta_ms: f64,
    /// Instantaneous rate from the last delta.
    pub fps: f64,
    pub average_fps: f64,
    pub avg_update_ms: f64,
    pub avg_render_ms: f64,
}

#[derive(Debug, Clone)]
pub struct FrameTiming {
    started: Instant,
    last_frame: Instant,
    delta_ms: f64,
    update_total: Duration,
    render_total: Duration,
    total_frames: u64,
    last_delay_ms: i64,
}

impl FrameTiming {
    pub fn start(now: Instant) -> Self {
        Self {
            started: now,
            last_frame: now,
            delta_ms: 0.0,
            update_total: Duration::ZERO,
            render_total: Duration::ZERO,
            total_frames: 0,
            last_delay_ms: 0,
        }
    }

    /// Mark the start of a frame and return milliseconds since the previous one.
    pub fn begin_frame(&mut self, now: Instant) -> f64 {
        self.delta_ms = now.saturating_duration_since(self.last_frame).as_secs_f64() * 1000.0;
        self.last_frame = now;
        self.total_frames += 1;
        self.delta_ms
    }

    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    pub fn frame_count(&self) -> u64 {
        self.total_frames
    }

    pub fn record_update(&mut self, elapsed: Duration) {
        self.update_total += elapsed;
    }

    pub fn record_render(&mut self, elapsed: Duration) {
        self.render_total += elapsed;
    }

    /// Sleep needed to pace toward `target_fps`.
    ///
    /// The measured frame time is the last delta minus the previous sleep. When
    /// the frame ran over budget the delay is clamped to zero.
    pub fn frame_delay(&mut self, target_fps: u32) -> Duration {
        let target_ms = (1000.0 / target_fps.max(1) as f64) as i64;
        let frame_compute_ms = self.delta_ms as i64 - self.last_delay_ms;
        let delay_ms = target_ms - frame_compute_ms;

        if delay_ms < 0 {
            trace!(delay_ms, target_ms, "frame over budget, not sleeping");
        }

        self.last_delay_ms = delay_ms.max(0);
        Duration::from_millis(self.last_delay_ms as u64)
    }

    pub fn stats(&self, now: Instant) -> FrameStats {
        let frames = self.total_frames;
        let elapsed_sec = now.saturating_duration_since(self.started).as_secs_f64();
        let per_frame = |total: Duration| {
            if frames == 0 {
                0.0
            } else {
                total.as_secs_f64() * 1000.0 / frames as f64
            }
        };

        FrameStats {
            frames,
            last_delta_ms: self.delta_ms,
            fps: if self.delta_ms > 0.0 {
                1000.0 / self.delta_ms
            } else {
                0.0
            },
            average_fps: if elapsed_sec > 0.0 {
                frames as f64 / elapsed_sec
            } else {
                0.0
            },
            avg_update_ms: per_frame(self.update_total),
            avg_render_ms: per_frame(self.render_total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn delta_is_measured_between_frames() {
        let t0 = Instant::now();
        let mut timing = FrameTiming::start(t0);
        assert_eq!(timing.begin_frame(t0 + ms(20)), 20.0);
        assert_eq!(timing.begin_frame(t0 + ms(35)), 15.0);
        assert_eq!(timing.frame_count(), 2);
    }

    #[test]
    fn delay_subtracts_compute_time_from_target() {
        let t0 = Instant::now();
        let mut timing = FrameTiming::start(t0);

        // First frame: nothing slept yet, 4ms of work at 50fps (20ms budget).
        timing.begin_frame(t0 + ms(4));
        assert_eq!(timing.frame_delay(50), ms(16));

        // Next delta includes the 16ms sleep plus 6ms of work.
        timing.begin_frame(t0 + ms(4 + 22));
        assert_eq!(timing.frame_delay(50), ms(14));
    }

    #[test]
    fn over_budget_frame_clamps_to_zero() {
        let t0 = Instant::now();
        let mut timing = FrameTiming::start(t0);
        timing.begin_frame(t0 + ms(100));
        assert_eq!(timing.frame_delay(60), Duration::ZERO);

        // The clamped value is what counts as slept on the next frame.
        timing.begin_frame(t0 + ms(110));
        assert_eq!(timing.frame_delay(60), ms(6));
    }

    #[test]
    fn stats_average_over_frames() {
        let t0 = Instant::now();
        let mut timing = FrameTiming::start(t0);
        timing.begin_frame(t0 + ms(10));
        timing.record_update(ms(2));
        timing.record_render(ms(4));
        timing.begin_frame(t0 + ms(20));
        timing.record_update(ms(4));
        timing.record_render(ms(2));

        let stats = timing.stats(t0 + ms(1000));
        assert_eq!(stats.frames, 2);
        assert_eq!(stats.fps, 100.0);
        assert_eq!(stats.average_fps, 2.0);
        assert!((stats.avg_update_ms - 3.0).abs() < 1e-9);
        assert!((stats.avg_render_ms - 3.0).abs() < 1e-9);
    }

    #[test]
    fn fresh_state_reports_zeros() {
        let t0 = Instant::now();
        let stats = FrameTiming::start(t0).stats(t0);
        assert_eq!(stats, FrameStats::default());
    }
}
