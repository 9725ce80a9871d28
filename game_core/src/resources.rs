/// Score tracking owned by the controller. Paused/over live in [`crate::GameFsm`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    pub best: Option<u32>, // None until a round has been recorded
}

impl GameState {
    pub fn new(best: Option<u32>) -> Self {
        Self { score: 0, best }
    }

    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }

    /// Raise the best score to the current score if it is higher.
    ///
    /// Returns the new best when it changed.
    pub fn record_best(&mut self) -> Option<u32> {
        match self.best {
            Some(best) if best >= self.score => None,
            _ => {
                self.best = Some(self.score);
                self.best
            }
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform integer in `[min, max]`
    pub fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        self.0.gen_range(min..=max)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
