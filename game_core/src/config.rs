use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Game configuration
///
/// Every field falls back to its [`Params`] value, so a JSON override only
/// needs to name the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub stage_width: i32,
    pub stage_height: i32,
    pub ground_height: i32,
    pub sky_interval_ms: u64,
    pub land_interval_ms: u64,
    pub pipe_width: i32,
    pub pipe_gap: i32,
    pub pipe_min_height: i32,
    pub pipe_step: i32,
    pub pipe_spawn_interval_ms: u64,
    pub pipe_move_interval_ms: u64,
    pub bird_width: i32,
    pub bird_height: i32,
    pub bird_left: i32,
    pub bird_start_top: f64,
    pub bird_accel: f64,
    pub bird_jump_speed: f64,
    pub wing_interval_ms: u64,
    pub drop_interval_ms: u64,
    pub taunt_below: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stage_width: Params::STAGE_WIDTH,
            stage_height: Params::STAGE_HEIGHT,
            ground_height: Params::GROUND_HEIGHT,
            sky_interval_ms: Params::SKY_INTERVAL_MS,
            land_interval_ms: Params::LAND_INTERVAL_MS,
            pipe_width: Params::PIPE_WIDTH,
            pipe_gap: Params::PIPE_GAP,
            pipe_min_height: Params::PIPE_MIN_HEIGHT,
            pipe_step: Params::PIPE_STEP,
            pipe_spawn_interval_ms: Params::PIPE_SPAWN_INTERVAL_MS,
            pipe_move_interval_ms: Params::PIPE_MOVE_INTERVAL_MS,
            bird_width: Params::BIRD_WIDTH,
            bird_height: Params::BIRD_HEIGHT,
            bird_left: Params::BIRD_LEFT,
            bird_start_top: Params::BIRD_START_TOP,
            bird_accel: Params::BIRD_ACCEL,
            bird_jump_speed: Params::BIRD_JUMP_SPEED,
            wing_interval_ms: Params::WING_INTERVAL_MS,
            drop_interval_ms: Params::DROP_INTERVAL_MS,
            taunt_below: Params::TAUNT_BELOW,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| format!("Invalid config JSON: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Lowest point of the playfield: stage height minus the ground strip
    pub fn max_height(&self) -> i32 {
        self.stage_height - self.ground_height
    }

    /// Largest `top` the bird can have, i.e. resting on the ground
    pub fn bird_floor(&self) -> f64 {
        (self.max_height() - self.bird_height) as f64
    }

    /// Inclusive range the upper pipe height is drawn from
    pub fn upper_height_range(&self) -> (i32, i32) {
        (
            self.pipe_min_height,
            self.max_height() - self.pipe_min_height - self.pipe_gap,
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        let intervals = [
            ("sky_interval_ms", self.sky_interval_ms),
            ("land_interval_ms", self.land_interval_ms),
            ("pipe_spawn_interval_ms", self.pipe_spawn_interval_ms),
            ("pipe_move_interval_ms", self.pipe_move_interval_ms),
            ("wing_interval_ms", self.wing_interval_ms),
            ("drop_interval_ms", self.drop_interval_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(format!("{} must be greater than zero", name));
            }
        }

        if self.stage_width <= 0 || self.max_height() <= self.bird_height {
            return Err("Stage is too small for the bird".to_string());
        }

        let (min, max) = self.upper_height_range();
        if min > max {
            return Err(format!(
                "Pipe gap {} leaves no room for two {}px pipes",
                self.pipe_gap, self.pipe_min_height
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_derived_heights() {
        let config = Config::new();
        assert_eq!(config.max_height(), 488, "600 stage minus 112 ground");
        assert_eq!(config.bird_floor(), 462.0);
        assert_eq!(config.upper_height_range(), (60, 278));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_partial_json_override() {
        let config = Config::from_json(r#"{ "pipe_gap": 120, "land_interval_ms": 10 }"#)
            .expect("partial override should parse");
        assert_eq!(config.pipe_gap, 120);
        assert_eq!(config.land_interval_ms, 10);
        assert_eq!(config.stage_width, Params::STAGE_WIDTH, "untouched fields keep defaults");
    }

    #[test]
    fn test_rejects_zero_interval() {
        let err = Config::from_json(r#"{ "drop_interval_ms": 0 }"#).unwrap_err();
        assert!(err.contains("drop_interval_ms"));
    }

    #[test]
    fn test_rejects_gap_without_room() {
        let err = Config::from_json(r#"{ "pipe_gap": 400 }"#).unwrap_err();
        assert!(err.contains("no room"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Config::from_json("{ not json").is_err());
    }
}
