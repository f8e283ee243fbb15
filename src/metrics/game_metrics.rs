use std::time::{Duration, Instant};

/// Wall-clock bookkeeping for the play screen
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub rounds_played: u32,
    /// Set once the round ends so the clock stops
    frozen: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            rounds_played: 0,
            frozen: false,
        }
    }

    pub fn update(&mut self) {
        if !self.frozen {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_round_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.frozen = false;
    }

    pub fn on_round_over(&mut self) {
        self.update();
        self.frozen = true;
        self.rounds_played += 1;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
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
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_rounds_played() {
        let mut metrics = GameMetrics::new();

        metrics.on_round_over();
        assert_eq!(metrics.rounds_played, 1);

        metrics.on_round_start();
        metrics.on_round_over();
        assert_eq!(metrics.rounds_played, 2);
    }

    #[test]
    fn test_clock_stops_at_round_over() {
        let mut metrics = GameMetrics::new();
        metrics.on_round_over();
        let stopped_at = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, stopped_at);
    }

    #[test]
    fn test_round_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_round_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
