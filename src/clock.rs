//! Per-frame simulation clock.
//!
//! Browser animation frames arrive at whatever rate the display allows; the
//! clock turns their timestamps into a clamped `dt` so every component
//! integrates in seconds. Constants that were tuned "per frame" are scaled
//! with [`frames`] against the 60 Hz reference rate.

pub const REFERENCE_FPS: f64 = 60.0;
/// Longest step a single tick may take (a backgrounded tab resumes gently).
pub const MAX_DT: f64 = 0.1;
pub const MIN_DT: f64 = 1.0 / 1000.0;

/// Number of reference frames covered by `dt` seconds.
pub fn frames(dt: f64) -> f64 {
    dt * REFERENCE_FPS
}

pub fn clamp_dt(dt: f64) -> f64 {
    if dt.is_finite() { dt.clamp(MIN_DT, MAX_DT) } else { MIN_DT }
}

#[derive(Clone, Debug, Default)]
pub struct SimulationClock {
    tick: u64,
    elapsed: f64,
    last_timestamp_ms: Option<f64>,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds since the clock started.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Turns an animation-frame timestamp (milliseconds) into the `dt` for
    /// this frame. The first frame uses one reference frame.
    pub fn frame_dt(&mut self, timestamp_ms: f64) -> f64 {
        let dt = match self.last_timestamp_ms {
            Some(prev) => (timestamp_ms - prev) / 1000.0,
            None => 1.0 / REFERENCE_FPS,
        };
        self.last_timestamp_ms = Some(timestamp_ms);
        clamp_dt(dt)
    }

    /// Records one tick of `dt` seconds and returns the clamped step.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let dt = clamp_dt(dt);
        self.tick += 1;
        self.elapsed += dt;
        dt
    }

    /// Tick index that lies `secs` in the future at the reference rate.
    pub fn tick_after(&self, secs: f64) -> u64 {
        self.tick + frames(secs.max(0.0)).round() as u64
    }

    /// Forget the previous frame timestamp (e.g. after the tab was hidden).
    pub fn resync(&mut self) {
        self.last_timestamp_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_one_reference_frame() {
        let mut c = SimulationClock::new();
        let dt = c.frame_dt(1234.0);
        assert!((dt - 1.0 / 60.0).abs() < 1e-12);
        let dt = c.frame_dt(1234.0 + 33.0);
        assert!((dt - 0.033).abs() < 1e-9);
    }

    #[test]
    fn long_pauses_are_clamped() {
        let mut c = SimulationClock::new();
        c.frame_dt(0.0);
        assert_eq!(c.frame_dt(10_000.0), MAX_DT);
        assert_eq!(c.advance(f64::NAN), MIN_DT);
        assert_eq!(c.advance(-1.0), MIN_DT);
    }

    #[test]
    fn tick_after_counts_reference_frames() {
        let mut c = SimulationClock::new();
        c.advance(1.0 / 60.0);
        assert_eq!(c.tick_count(), 1);
        assert_eq!(c.tick_after(0.8), 1 + 48);
    }
}
