//! Fixed-timestep accumulator
//!
//! At most one step per frame callback. When the host falls behind the
//! surplus is dropped, so the sketch slows down instead of catching up.

/// Accumulates frame time and says when a step is due
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimestep {
    step_ms: f64,
    last_time: f64,
    accumulator: f64,
}

impl FixedTimestep {
    pub fn new(step_ms: f64) -> Self {
        Self {
            step_ms,
            last_time: 0.0,
            accumulator: 0.0,
        }
    }

    /// Feed the current timestamp (ms). Returns `true` when a step should
    /// run; the accumulator is reset to zero in that case.
    ///
    /// The first call measures from 0, so a large first delta is expected.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let elapsed = (now_ms - self.last_time).max(0.0);
        self.last_time = now_ms;
        self.accumulator += elapsed;

        if self.accumulator > self.step_ms {
            self.accumulator = 0.0;
            true
        } else {
            false
        }
    }

    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn last_time(&self) -> f64 {
        self.last_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_step_until_threshold_exceeded() {
        let mut ts = FixedTimestep::new(16.0);
        ts.last_time = 1000.0;
        assert!(!ts.advance(1005.0));
        assert!(!ts.advance(1010.0));
        assert!(!ts.advance(1016.0)); // exactly one step is not enough
        assert_eq!(ts.accumulator(), 16.0);
        assert!(ts.advance(1017.0));
        assert_eq!(ts.accumulator(), 0.0);
    }

    #[test]
    fn test_surplus_is_discarded() {
        let mut ts = FixedTimestep::new(16.0);
        ts.last_time = 0.0;
        // 100ms lag: one step, remainder dropped
        assert!(ts.advance(100.0));
        assert_eq!(ts.accumulator(), 0.0);
        assert!(!ts.advance(110.0));
    }

    #[test]
    fn test_first_call_measures_from_zero() {
        let mut ts = FixedTimestep::new(16.0);
        assert!(ts.advance(5000.0));
        assert_eq!(ts.last_time(), 5000.0);
    }

    #[test]
    fn test_backwards_time_keeps_accumulator_non_negative() {
        let mut ts = FixedTimestep::new(16.0);
        ts.last_time = 500.0;
        assert!(!ts.advance(510.0));
        assert!(!ts.advance(400.0));
        assert_eq!(ts.accumulator(), 10.0);
        assert!(ts.accumulator() >= 0.0);
    }
}
