//! Round clock.
//!
//! The clock is idle until the first accepted interaction, then advances one
//! second per [`CLOCK_TICK_MS`] of fed time. Stopping is permanent for the
//! round; a new round gets a fresh clock.

use crate::types::CLOCK_TICK_MS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundClock {
    running: bool,
    stopped: bool,
    elapsed_secs: u32,
    accumulator_ms: u32,
}

impl RoundClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on the first accepted interaction. No-op once started or stopped.
    pub fn start(&mut self) {
        if !self.running && !self.stopped {
            self.running = true;
        }
    }

    /// Freeze the clock for the rest of the round.
    pub fn stop(&mut self) {
        self.running = false;
        self.stopped = true;
    }

    /// Feed elapsed wall time. Returns true if the displayed seconds changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.running {
            return false;
        }
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let secs = self.accumulator_ms / CLOCK_TICK_MS;
        self.accumulator_ms %= CLOCK_TICK_MS;
        self.elapsed_secs = self.elapsed_secs.saturating_add(secs);
        secs > 0
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_started(&self) -> bool {
        self.running || self.stopped
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }
}

/// Format seconds as `m:ss`.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_started() {
        let mut clock = RoundClock::new();
        assert!(!clock.tick(5000));
        assert_eq!(clock.elapsed_secs(), 0);
        assert!(!clock.has_started());
    }

    #[test]
    fn test_accumulates_partial_ticks() {
        let mut clock = RoundClock::new();
        clock.start();
        for _ in 0..62 {
            clock.tick(16);
        }
        // 62 * 16 = 992ms, not yet a second.
        assert_eq!(clock.elapsed_secs(), 0);
        assert!(clock.tick(16));
        assert_eq!(clock.elapsed_secs(), 1);
    }

    #[test]
    fn test_stop_is_permanent() {
        let mut clock = RoundClock::new();
        clock.start();
        clock.tick(3000);
        clock.stop();
        clock.start();
        assert!(!clock.tick(10_000));
        assert_eq!(clock.elapsed_secs(), 3);
        assert!(clock.has_started());
        assert!(!clock.is_running());
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(75), "1:15");
        assert_eq!(format_clock(600), "10:00");
    }
}
