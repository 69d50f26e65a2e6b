use std::time::{Duration, Instant};

/// Fixed-interval gate deciding when the simulation may step.
///
/// Owned by the driver loop; frames poll it far more often than it fires.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    last_update: Instant,
}

impl TickClock {
    /// Creates a clock whose first tick is due one `interval` after `now`.
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_update: now,
        }
    }

    /// Returns true and restarts the interval when at least one full
    /// interval has passed since the last tick.
    pub fn event_triggered(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_update) < self.interval {
            return false;
        }

        self.last_update = now;
        true
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickClock;

    #[test]
    fn fires_only_after_a_full_interval() {
        let start = Instant::now();
        let mut clock = TickClock::new(Duration::from_millis(200), start);

        assert!(!clock.event_triggered(start + Duration::from_millis(16)));
        assert!(!clock.event_triggered(start + Duration::from_millis(199)));
        assert!(clock.event_triggered(start + Duration::from_millis(200)));
    }

    #[test]
    fn interval_restarts_from_the_firing_frame() {
        let start = Instant::now();
        let mut clock = TickClock::new(Duration::from_millis(200), start);

        assert!(clock.event_triggered(start + Duration::from_millis(250)));
        assert!(!clock.event_triggered(start + Duration::from_millis(400)));
        assert!(clock.event_triggered(start + Duration::from_millis(450)));
    }

    #[test]
    fn late_frame_fires_once_without_catching_up() {
        let start = Instant::now();
        let mut clock = TickClock::new(Duration::from_millis(200), start);
        let late = start + Duration::from_secs(2);

        assert!(clock.event_triggered(late));
        assert!(!clock.event_triggered(late));
    }
}
