//! Periodic tasks driven by the draw loop.
//!
//! `draw_web()` calls at ~60fps with a variable delta. An `IntervalTimer`
//! turns the frame timestamps into a count of elapsed fixed intervals, so the
//! work it gates (age ticker, quote rotation) stays deterministic and can be
//! tested without a browser. Timers start and stop explicitly; a stopped timer
//! never fires and forgets its partial interval.

/// Longest frame gap honoured. A backgrounded tab resumes without a burst.
const MAX_FRAME_DELTA_MS: f64 = 500.0;

pub struct IntervalTimer {
    /// Milliseconds per firing. `0.0` fires once per frame.
    interval_ms: f64,
    /// Accumulated milliseconds not yet consumed as firings
    accumulator: f64,
    /// Total firings since creation
    pub total_fires: u64,
    /// Timestamp of the last update (ms), None right after (re)start
    last_timestamp: Option<f64>,
    running: bool,
}

impl IntervalTimer {
    /// A stopped timer that fires every `interval_ms` once started.
    pub fn every_ms(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            accumulator: 0.0,
            total_fires: 0,
            last_timestamp: None,
            running: false,
        }
    }

    /// A stopped timer that fires on every frame once started.
    pub fn every_frame() -> Self {
        Self::every_ms(0.0)
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.accumulator = 0.0;
        self.last_timestamp = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
        self.last_timestamp = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feed the frame timestamp (from `Date.now()` or similar).
    /// Returns how many intervals elapsed since the previous frame.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        if !self.running {
            return 0;
        }

        if self.interval_ms <= 0.0 {
            self.last_timestamp = Some(now_ms);
            self.total_fires += 1;
            return 1;
        }

        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_DELTA_MS),
            None => 0.0, // First frame after start: no delta
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let fires = (self.accumulator / self.interval_ms) as u32;
        self.accumulator -= fires as f64 * self.interval_ms;
        self.total_fires += fires as u64;
        fires
    }
}
