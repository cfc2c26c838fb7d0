use std::time::{Duration, Instant};

/// A simple throttle that admits at most one sample per interval.
///
/// Scroll events can arrive far faster than the controller pipeline should
/// run; the view adapter pushes every raw sample through this gate and only
/// forwards the ones it admits. The first sample is admitted immediately,
/// then the gate closes for the configured interval.
#[derive(Debug, Clone)]
pub struct ScrollThrottle {
    /// Minimum time between admitted samples.
    interval: Duration,
    /// When the last admitted sample came through.
    last_admitted: Option<Instant>,
}

impl ScrollThrottle {
    /// Create a throttle with the interval in milliseconds.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            last_admitted: None,
        }
    }

    /// Returns true if this sample should be processed now.
    pub fn admit(&mut self) -> bool {
        match self.last_admitted {
            Some(last) if last.elapsed() < self.interval => false,
            _ => {
                self.last_admitted = Some(Instant::now());
                true
            }
        }
    }

    /// Forget the last admission so the next sample passes immediately.
    pub fn reset(&mut self) {
        self.last_admitted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_admitted() {
        let mut throttle = ScrollThrottle::new(1000);
        assert!(throttle.admit());
    }

    #[test]
    fn second_sample_within_interval_is_rejected() {
        let mut throttle = ScrollThrottle::new(1000);
        assert!(throttle.admit());
        assert!(!throttle.admit());
    }

    #[test]
    fn sample_after_interval_is_admitted() {
        let mut throttle = ScrollThrottle::new(10);
        assert!(throttle.admit());
        std::thread::sleep(Duration::from_millis(20));
        assert!(throttle.admit());
    }

    #[test]
    fn reset_reopens_the_gate() {
        let mut throttle = ScrollThrottle::new(1000);
        assert!(throttle.admit());
        throttle.reset();
        assert!(throttle.admit());
    }
}
