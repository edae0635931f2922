use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("slide delay must be positive (got {0})")]
pub struct InvalidDelay(pub f32);

/// Auto-advance driver for the carousel, written as a frame-time
/// accumulator: the shell feeds it `dt` every frame and applies one advance
/// per completed period. The driver never touches the slide index itself,
/// so every firing acts on the live carousel state rather than a snapshot
/// taken when the timer started.
///
/// Pausing holds the elapsed fraction and resuming continues the same
/// period; changing the delay discards the elapsed fraction and restarts.
/// A stopped driver stays stopped (used when applying a timed transition
/// fails).
#[derive(Debug)]
pub struct Autoplay {
    delay: f32,
    elapsed: f32,
    paused: bool,
    stopped: bool,
}

impl Autoplay {
    pub fn new(delay: f32) -> Result<Self, InvalidDelay> {
        if !(delay > 0.0) {
            return Err(InvalidDelay(delay));
        }
        Ok(Self {
            delay,
            elapsed: 0.0,
            paused: false,
            stopped: false,
        })
    }

    /// Accumulates `dt` and reports whether a period completed. At most one
    /// firing per call; an oversized `dt` (a stalled frame) still counts as
    /// a single period.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.stopped || self.paused {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.delay {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    /// Replaces the period. The elapsed fraction of the old period is
    /// discarded: restart, not resume.
    pub fn set_delay(&mut self, delay: f32) -> Result<(), InvalidDelay> {
        if !(delay > 0.0) {
            return Err(InvalidDelay(delay));
        }
        self.delay = delay;
        self.elapsed = 0.0;
        Ok(())
    }

    /// Holds the accumulator without losing the elapsed fraction.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continues the same period from where `pause` left it.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Permanently disables the driver.
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_delay() {
        assert_eq!(Autoplay::new(0.0).unwrap_err(), InvalidDelay(0.0));
        assert_eq!(Autoplay::new(-1.5).unwrap_err(), InvalidDelay(-1.5));
        assert!(Autoplay::new(f32::NAN).is_err());
    }

    #[test]
    fn fires_once_per_completed_period() {
        let mut autoplay = Autoplay::new(2.0).expect("positive delay");

        assert!(!autoplay.tick(1.0));
        assert!(autoplay.tick(1.0)); // 2s
        assert!(autoplay.tick(2.0)); // 4s
        assert!(autoplay.tick(2.0)); // 6s
    }

    #[test]
    fn no_fires_after_stop() {
        let mut autoplay = Autoplay::new(2.0).expect("positive delay");
        assert!(autoplay.tick(2.0));

        autoplay.stop();
        assert!(!autoplay.tick(2.0));
        assert!(!autoplay.tick(10.0));
    }

    #[test]
    fn pause_holds_the_elapsed_fraction() {
        let mut autoplay = Autoplay::new(2.0).expect("positive delay");
        assert!(!autoplay.tick(1.5));

        autoplay.pause();
        assert!(!autoplay.tick(10.0)); // held, nothing accumulates

        // Resume continues the same period: 0.5s remain, not 2s.
        autoplay.resume();
        assert!(autoplay.tick(0.5));
    }

    #[test]
    fn set_delay_restarts_the_period() {
        let mut autoplay = Autoplay::new(2.0).expect("positive delay");
        assert!(!autoplay.tick(1.9));

        autoplay.set_delay(3.0).expect("positive delay");
        assert!(!autoplay.tick(2.9)); // old fraction was discarded
        assert!(autoplay.tick(0.1));
    }

    #[test]
    fn set_delay_rejects_non_positive_values() {
        let mut autoplay = Autoplay::new(2.0).expect("positive delay");
        assert!(autoplay.set_delay(0.0).is_err());

        // The old period is untouched by the rejected change.
        assert!(autoplay.tick(2.0));
    }

    #[test]
    fn stalled_frame_counts_as_one_period() {
        let mut autoplay = Autoplay::new(2.0).expect("positive delay");
        assert!(autoplay.tick(9.0));
        assert!(!autoplay.tick(1.0));
    }
}
