use std::time::{Duration, Instant};

/// Per-process session stats; nothing here is persisted
pub struct GameMetrics {
    game_started: Instant,
    pub elapsed: Duration,
    pub high_score: u32,
    pub best_level: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            game_started: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            best_level: 0,
            games_played: 0,
        }
    }

    /// Refresh the elapsed-time reading; called once per rendered frame
    pub fn update(&mut self) {
        self.elapsed = self.game_started.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.game_started = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32, final_level: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
        self.best_level = self.best_level.max(final_level);
    }

    /// Elapsed play time as mm:ss
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10, 1);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5, 1);
        assert_eq!(metrics.high_score, 10); // Should not decrease
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15, 3);
        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.best_level, 3);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed.as_millis() < 50);
    }
}
