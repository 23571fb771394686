use std::time::Duration;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselState {
    Running, // Auto-advance scheduled
    Paused,  // No auto-advance until started again
}

/// User interactions the carousel reacts to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselEvent {
    Previous,
    Next,
    Indicator(usize),
    PointerEnter,
    PointerLeave,
}

/// The recurring auto-advance schedule. Present only while running.
#[derive(Debug, Clone, Default)]
pub struct AutoAdvance {
    elapsed: Duration,
}

impl AutoAdvance {
    /// Adds `dt` and returns how many whole periods completed.
    pub fn tick(&mut self, dt: Duration, period: Duration) -> u32 {
        if period.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= period {
            self.elapsed -= period;
            fired += 1;
        }
        fired
    }

    pub fn remaining(&self, period: Duration) -> Duration {
        period.saturating_sub(self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(5000);

    #[test]
    fn fires_once_per_whole_period() {
        let mut timer = AutoAdvance::default();
        assert_eq!(timer.tick(Duration::from_millis(4999), PERIOD), 0);
        assert_eq!(timer.tick(Duration::from_millis(1), PERIOD), 1);
        assert_eq!(timer.remaining(PERIOD), PERIOD);
    }

    #[test]
    fn long_frames_catch_up() {
        let mut timer = AutoAdvance::default();
        assert_eq!(timer.tick(Duration::from_millis(12_500), PERIOD), 2);
        assert_eq!(timer.remaining(PERIOD), Duration::from_millis(2500));
    }

    #[test]
    fn zero_period_never_fires() {
        let mut timer = AutoAdvance::default();
        assert_eq!(timer.tick(Duration::from_secs(1), Duration::ZERO), 0);
    }
}
