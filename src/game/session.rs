/// Which half of the round we are in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    GameOver,
}

/// Score bookkeeping for one process lifetime
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub score: u32,
    /// Best score seen since the process started
    pub high_score: u32,
    pub phase: Phase,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// End the round and fold the score into the high score
    pub fn finish(&mut self) {
        self.phase = Phase::GameOver;
        self.high_score = self.high_score.max(self.score);
    }

    /// A fresh session for the next round, keeping the high score
    pub fn restarted(&self) -> Self {
        Self {
            high_score: self.high_score,
            ..Self::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = SessionState::new();
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 0);
        assert_eq!(session.phase, Phase::Playing);
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_high_score_tracking() {
        let mut session = SessionState::new();
        for _ in 0..5 {
            session.award(10);
        }
        session.finish();
        assert_eq!(session.high_score, 50);
        assert!(session.is_game_over());

        let mut session = session.restarted();
        assert_eq!(session.score, 0);
        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(session.high_score, 50);

        for _ in 0..3 {
            session.award(10);
        }
        session.finish();
        assert_eq!(session.score, 30);
        assert_eq!(session.high_score, 50); // Should not decrease

        let mut session = session.restarted();
        session.award(70);
        session.finish();
        assert_eq!(session.high_score, 70); // Should update
    }
}
