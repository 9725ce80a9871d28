//! Best score persisted in `localStorage`

use game_core::ScoreStore;

pub const BEST_SCORE_KEY: &str = "maxScore";

pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or("No window")?
            .local_storage()
            .map_err(|e| format!("localStorage unavailable: {:?}", e))?
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl ScoreStore for LocalStorageStore {
    fn load(&self) -> Result<Option<u32>, String> {
        let raw = Self::storage()?
            .get_item(&self.key)
            .map_err(|e| format!("Failed to read {}: {:?}", self.key, e))?;
        match raw {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map(Some)
                .map_err(|e| format!("Stored {} {:?} is not a score: {}", self.key, value, e)),
            None => Ok(None),
        }
    }

    fn save(&mut self, best: u32) -> Result<(), String> {
        Self::storage()?
            .set_item(&self.key, &best.to_string())
            .map_err(|e| format!("Failed to write {}: {:?}", self.key, e))
    }
}
