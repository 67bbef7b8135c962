use std::time::Duration;

use tokio::time::{interval, Instant, Interval, MissedTickBehavior};

/// The tick scheduler owned by the game loop
///
/// Wraps a tokio interval running at `ticks_per_sec` and re-arms it when the
/// rate changes (level-ups speed the game up). Skips missed ticks rather
/// than bursting to catch up.
pub struct TickClock {
    interval: Interval,
    ticks_per_sec: u32,
}

impl TickClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            interval: Self::arm(ticks_per_sec),
            ticks_per_sec,
        }
    }

    fn arm(ticks_per_sec: u32) -> Interval {
        let period = Duration::from_millis(1000 / u64::from(ticks_per_sec.max(1)));
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        interval
    }

    pub fn ticks_per_sec(&self) -> u32 {
        self.ticks_per_sec
    }

    /// Change the tick rate; a no-op if the rate is unchanged, otherwise the
    /// interval restarts on the new period
    pub fn set_rate(&mut self, ticks_per_sec: u32) {
        if ticks_per_sec != self.ticks_per_sec {
            self.ticks_per_sec = ticks_per_sec;
            self.interval = Self::arm(ticks_per_sec);
        }
    }

    /// Wait for the next tick
    pub async fn tick(&mut self) -> Instant {
        self.interval.tick().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tick_period_follows_rate() {
        let mut clock = TickClock::new(10);
        clock.tick().await; // first tick fires immediately

        let before = Instant::now();
        clock.tick().await;
        assert_eq!(before.elapsed(), Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_rate_rearms_interval() {
        let mut clock = TickClock::new(10);
        clock.tick().await;

        clock.set_rate(20);
        assert_eq!(clock.ticks_per_sec(), 20);
        clock.tick().await; // immediate after re-arm

        let before = Instant::now();
        clock.tick().await;
        assert_eq!(before.elapsed(), Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_rate_same_value_keeps_schedule() {
        let mut clock = TickClock::new(10);
        clock.tick().await;

        // No re-arm: the next tick stays on the original schedule instead of
        // firing immediately.
        clock.set_rate(10);
        let before = Instant::now();
        clock.tick().await;
        assert_eq!(before.elapsed(), Duration::from_millis(100));
    }
}
