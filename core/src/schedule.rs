use core::time::Duration;

use crate::*;

/// Turns elapsed wall-clock time into a count of due farm ticks.
///
/// The caller owns the clock: it measures how much time passed and feeds it to [`TickSchedule::advance`], which
/// keeps any remainder for the next call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickSchedule {
    interval: Duration,
    pending: Duration,
}

impl TickSchedule {
    const MIN_INTERVAL: Duration = Duration::from_millis(1);

    pub const fn new(interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            Self::MIN_INTERVAL
        } else {
            interval
        };
        Self {
            interval,
            pending: Duration::ZERO,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Adds `elapsed` and returns how many whole intervals are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.pending = self.pending.saturating_add(elapsed);

        let mut due = 0u32;
        while self.pending >= self.interval {
            self.pending -= self.interval;
            due = due.saturating_add(1);
        }
        due
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.pending)
    }
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_ticks_every_twenty_seconds() {
        let mut schedule = TickSchedule::default();

        assert_eq!(schedule.interval(), Duration::from_secs(20));
        assert_eq!(schedule.advance(Duration::from_secs(19)), 0);
        assert_eq!(schedule.until_next(), Duration::from_secs(1));
        assert_eq!(schedule.advance(Duration::from_secs(1)), 1);
        assert_eq!(schedule.until_next(), Duration::from_secs(20));
    }

    #[test]
    fn remainder_carries_across_calls() {
        let mut schedule = TickSchedule::new(Duration::from_millis(500));

        let due: u32 = (0..10)
            .map(|_| schedule.advance(Duration::from_millis(300)))
            .sum();

        assert_eq!(due, 6);
        assert_eq!(schedule.until_next(), Duration::from_millis(500));
        assert_eq!(schedule.advance(Duration::ZERO), 0);
    }

    #[test]
    fn long_gap_catches_up_on_every_missed_tick() {
        let mut schedule = TickSchedule::default();

        assert_eq!(schedule.advance(Duration::from_secs(65)), 3);
        assert_eq!(schedule.until_next(), Duration::from_secs(15));
    }

    #[test]
    fn zero_interval_is_raised_to_the_minimum() {
        let mut schedule = TickSchedule::new(Duration::ZERO);

        assert_eq!(schedule.interval(), Duration::from_millis(1));
        assert_eq!(schedule.advance(Duration::from_millis(3)), 3);
    }
}
