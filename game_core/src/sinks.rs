//! Presentation and storage seams
//!
//! The simulation never touches the DOM. Each component pushes its visual
//! state through one of these traits, and the browser front end implements
//! them on top of real elements.

use crate::components::{Obstacle, WingFrame};

/// Receives the horizontal offset of a scrolling layer
pub trait LayerSink {
    fn set_offset(&mut self, left: i32);
}

/// Receives bird position and wing frame updates
pub trait BirdSink {
    fn set_top(&mut self, top: f64);
    fn set_wing(&mut self, frame: WingFrame);
}

/// Creates, moves and destroys pipe elements
pub trait ObstacleSink {
    fn create(&mut self, obstacle: &Obstacle);
    fn move_to(&mut self, id: u64, left: i32);
    fn destroy(&mut self, id: u64);
}

/// What the overlay is currently asked to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Start menu before the first round
    Menu,
    Paused {
        score: u32,
    },
    Over {
        score: u32,
        best: u32,
        /// Set to the taunt threshold when the score fell short of it
        taunt: Option<u32>,
    },
}

impl Screen {
    /// Literal overlay text, first line is the heading
    pub fn lines(&self) -> Vec<String> {
        match self {
            Screen::Menu => vec![
                "Flappy".to_string(),
                "Space to flap, Enter to pause".to_string(),
            ],
            Screen::Paused { score } => vec![
                "Paused".to_string(),
                format!("Current score: {}", score),
                "Press Enter to continue".to_string(),
            ],
            Screen::Over { score, best, taunt } => {
                let mut lines = vec![
                    "Game Over".to_string(),
                    format!("Your score: {}", score),
                    format!("Best score: {}", best),
                    "Press Enter to retry".to_string(),
                ];
                if let Some(threshold) = taunt {
                    lines.push(format!("Seriously? Not even {} points?", threshold));
                }
                lines
            }
        }
    }
}

/// Start/pause/game-over overlay
pub trait Overlay {
    fn show(&mut self, screen: &Screen);
    fn hide(&mut self);
}

/// Persistent best-score slot
pub trait ScoreStore {
    /// `Ok(None)` means no best score has been recorded yet
    fn load(&self) -> Result<Option<u32>, String>;
    fn save(&mut self, best: u32) -> Result<(), String>;
}

/// Sink that ignores everything, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LayerSink for NullSink {
    fn set_offset(&mut self, _left: i32) {}
}

impl BirdSink for NullSink {
    fn set_top(&mut self, _top: f64) {}
    fn set_wing(&mut self, _frame: WingFrame) {}
}

impl ObstacleSink for NullSink {
    fn create(&mut self, _obstacle: &Obstacle) {}
    fn move_to(&mut self, _id: u64, _left: i32) {}
    fn destroy(&mut self, _id: u64) {}
}

impl Overlay for NullSink {
    fn show(&mut self, _screen: &Screen) {}
    fn hide(&mut self) {}
}

/// In-memory best score, used headless and when browser storage is unavailable
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub best: Option<u32>,
}

impl MemoryStore {
    pub fn new(best: Option<u32>) -> Self {
        Self { best }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u32>, String> {
        Ok(self.best)
    }

    fn save(&mut self, best: u32) -> Result<(), String> {
        self.best = Some(best);
        Ok(())
    }
}
