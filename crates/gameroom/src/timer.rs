use mr_core::REVEAL_DELAY;
use std::time::Duration;
use tokio::time::Instant;

/// Configuration for session pacing.
#[derive(Debug, Clone, Copy)]
pub struct TimerConfig {
    /// How long a mismatched pair stays face-up for both players to see.
    pub reveal: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            reveal: Duration::from_secs(REVEAL_DELAY),
        }
    }
}

/// Manages deadline tracking for the mismatch reveal window.
#[derive(Debug)]
pub struct Timer {
    config: TimerConfig,
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            deadline: None,
        }
    }
    pub fn with_defaults() -> Self {
        Self::new(TimerConfig::default())
    }
    pub fn start_reveal(&mut self) {
        self.deadline = Some(Instant::now() + self.config.reveal);
    }
    pub fn clear(&mut self) {
        self.deadline = None;
    }
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
    pub fn expired(&self) -> bool {
        self.deadline.map(|d| Instant::now() >= d).unwrap_or(false)
    }
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }
    pub fn reveal_delay(&self) -> Duration {
        self.config.reveal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_config() {
        let config = TimerConfig::default();
        assert_eq!(config.reveal, Duration::from_secs(REVEAL_DELAY));
    }
    #[test]
    fn timer_starts_cleared() {
        let timer = Timer::with_defaults();
        assert!(timer.deadline().is_none());
        assert!(!timer.expired());
    }
    #[test]
    fn timer_sets_deadline() {
        let mut timer = Timer::with_defaults();
        timer.start_reveal();
        assert!(timer.deadline().is_some());
        assert!(!timer.expired());
    }
    #[test]
    fn zero_delay_expires_immediately() {
        let mut timer = Timer::new(TimerConfig {
            reveal: Duration::ZERO,
        });
        timer.start_reveal();
        assert!(timer.expired());
        assert_eq!(timer.remaining(), Some(Duration::ZERO));
    }
    #[test]
    fn timer_clears() {
        let mut timer = Timer::with_defaults();
        timer.start_reveal();
        timer.clear();
        assert!(timer.deadline().is_none());
    }
}
