//! Round controller
//!
//! Owns every component and the score, multiplexes all component timers on
//! one virtual clock and runs the end-of-round checks.

use crate::components::Obstacle;
use crate::config::Config;
use crate::fsm::{GameFsm, Phase, RoundAction};
use crate::resources::{GameRng, GameState};
use crate::sinks::{
    BirdSink, LayerSink, MemoryStore, NullSink, ObstacleSink, Overlay, ScoreStore, Screen,
};
use crate::systems::{check_crash, Bird, Crash, InputOutcome, Key, Pipes, ScrollingLayer};
use crate::timer::{earliest_due, Timer};

/// Every periodic task in the game, in start order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    Sky,
    Land,
    PipeSpawn,
    PipeMove,
    Wing,
    Drop,
}

impl TimerSlot {
    pub const ALL: [TimerSlot; 6] = [
        TimerSlot::Sky,
        TimerSlot::Land,
        TimerSlot::PipeSpawn,
        TimerSlot::PipeMove,
        TimerSlot::Wing,
        TimerSlot::Drop,
    ];
}

/// Presentation and storage collaborators handed to [`Game::new`]
pub struct Sinks {
    pub sky: Box<dyn LayerSink>,
    pub land: Box<dyn LayerSink>,
    pub pipes: Box<dyn ObstacleSink>,
    pub bird: Box<dyn BirdSink>,
    pub overlay: Box<dyn Overlay>,
    pub store: Box<dyn ScoreStore>,
}

impl Sinks {
    /// No rendering, best score kept in memory
    pub fn headless(best: Option<u32>) -> Self {
        Self {
            sky: Box::new(NullSink),
            land: Box::new(NullSink),
            pipes: Box::new(NullSink),
            bird: Box::new(NullSink),
            overlay: Box::new(NullSink),
            store: Box::new(MemoryStore::new(best)),
        }
    }
}

pub struct Game {
    config: Config,
    now: u64,
    fsm: GameFsm,
    state: GameState,
    sky: ScrollingLayer,
    land: ScrollingLayer,
    pipes: Pipes,
    bird: Bird,
    overlay: Box<dyn Overlay>,
    store: Box<dyn ScoreStore>,
    rng: GameRng,
    last_crash: Option<Crash>,
}

impl Game {
    pub fn new(config: Config, sinks: Sinks, seed: u64) -> Self {
        let Sinks {
            sky,
            land,
            pipes,
            bird,
            mut overlay,
            store,
        } = sinks;

        let best = match store.load() {
            Ok(best) => best,
            Err(e) => {
                log::warn!("Could not read best score, starting without one: {}", e);
                None
            }
        };

        overlay.show(&Screen::Menu);

        Self {
            sky: ScrollingLayer::new(config.stage_width, config.sky_interval_ms, sky),
            land: ScrollingLayer::new(config.stage_width, config.land_interval_ms, land),
            pipes: Pipes::new(&config, pipes),
            bird: Bird::new(&config, bird),
            config,
            now: 0,
            fsm: GameFsm::new(),
            state: GameState::new(best),
            overlay,
            store,
            rng: GameRng::new(seed),
            last_crash: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Virtual clock in milliseconds
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn phase(&self) -> Phase {
        self.fsm.state()
    }

    pub fn fsm(&self) -> &GameFsm {
        &self.fsm
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best_score(&self) -> Option<u32> {
        self.state.best
    }

    pub fn last_crash(&self) -> Option<Crash> {
        self.last_crash
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    pub fn pipes(&self) -> &[Obstacle] {
        self.pipes.all()
    }

    pub fn pipes_mut(&mut self) -> &mut Pipes {
        &mut self.pipes
    }

    pub fn sky(&self) -> &ScrollingLayer {
        &self.sky
    }

    pub fn land(&self) -> &ScrollingLayer {
        &self.land
    }

    pub fn timer(&self, slot: TimerSlot) -> &Timer {
        match slot {
            TimerSlot::Sky => &self.sky.timer,
            TimerSlot::Land => &self.land.timer,
            TimerSlot::PipeSpawn => &self.pipes.spawn_timer,
            TimerSlot::PipeMove => &self.pipes.move_timer,
            TimerSlot::Wing => &self.bird.wing_timer,
            TimerSlot::Drop => &self.bird.drop_timer,
        }
    }

    fn timer_mut(&mut self, slot: TimerSlot) -> &mut Timer {
        match slot {
            TimerSlot::Sky => &mut self.sky.timer,
            TimerSlot::Land => &mut self.land.timer,
            TimerSlot::PipeSpawn => &mut self.pipes.spawn_timer,
            TimerSlot::PipeMove => &mut self.pipes.move_timer,
            TimerSlot::Wing => &mut self.bird.wing_timer,
            TimerSlot::Drop => &mut self.bird.drop_timer,
        }
    }

    /// Slots with an active schedule
    pub fn running_timers(&self) -> Vec<TimerSlot> {
        TimerSlot::ALL
            .into_iter()
            .filter(|slot| self.timer(*slot).is_running())
            .collect()
    }

    /// Start every timer and hide the overlay. Safe to repeat.
    pub fn start(&mut self) {
        let now = self.now;
        for slot in TimerSlot::ALL {
            self.timer_mut(slot).start(now);
        }
        self.overlay.hide();
    }

    /// Stop every timer, save a new best score and show the overlay. Safe to repeat.
    pub fn stop(&mut self) {
        for slot in TimerSlot::ALL {
            self.timer_mut(slot).stop();
        }

        if let Some(best) = self.state.record_best() {
            match self.store.save(best) {
                Ok(()) => log::info!("New best score: {}", best),
                Err(e) => log::warn!("Could not save best score {}: {}", best, e),
            }
        }

        let score = self.state.score;
        let screen = if self.fsm.is_over() {
            let taunt_below = self.config.taunt_below;
            Screen::Over {
                score,
                best: self.state.best.unwrap_or(score),
                taunt: (score < taunt_below).then_some(taunt_below),
            }
        } else {
            Screen::Paused { score }
        };
        self.overlay.show(&screen);
    }

    /// End the round if the bird is on the floor or inside a pipe.
    ///
    /// Returns true when this call ended the round.
    pub fn gameover(&mut self) -> bool {
        let Some(crash) = check_crash(&self.bird, self.pipes.all()) else {
            return false;
        };
        if !self.fsm.transition(RoundAction::Crash).success {
            return false;
        }

        log::info!("Round over ({:?}) with score {}", crash, self.state.score);
        self.last_crash = Some(crash);
        self.stop();
        true
    }

    /// Run the callback bound to `slot` once
    pub fn tick(&mut self, slot: TimerSlot) {
        match slot {
            TimerSlot::Sky => self.sky.tick(),
            TimerSlot::Land => self.land.tick(),
            TimerSlot::PipeSpawn => self.pipes.spawn(&mut self.rng, &self.config),
            TimerSlot::PipeMove => {
                let points = self.pipes.advance(self.config.pipe_step, self.bird.left());
                if points > 0 {
                    self.state.add_points(points);
                    log::debug!("Score: {}", self.state.score);
                }
                // Always after every pipe has moved
                self.gameover();
            }
            TimerSlot::Wing => self.bird.flap(),
            TimerSlot::Drop => self.bird.fall(),
        }
    }

    /// Move the clock forward, firing due timers in time order.
    ///
    /// Schedules are re-read after every callback, so a round that ends
    /// mid-way fires nothing further.
    pub fn advance(&mut self, delta_ms: u64) {
        let until = self.now + delta_ms;
        loop {
            let dues = TimerSlot::ALL.map(|slot| (slot, self.timer(slot).next_due()));
            let Some((slot, due)) = earliest_due(&dues, until) else {
                break;
            };
            self.now = due;
            self.timer_mut(slot).fire(due);
            self.tick(slot);
        }
        self.now = until;
    }

    /// Start button: begins a round from the menu
    pub fn press_start(&mut self) -> InputOutcome {
        if self.fsm.transition(RoundAction::Start).success {
            log::info!("Round started");
            self.start();
            InputOutcome::Started
        } else {
            InputOutcome::Ignored
        }
    }

    pub fn handle_key(&mut self, key: Key) -> InputOutcome {
        match key {
            Key::Jump => {
                self.bird.jump();
                InputOutcome::Jumped
            }
            Key::Confirm => match self.fsm.state() {
                Phase::Ready => self.press_start(),
                Phase::Running => {
                    self.fsm.transition(RoundAction::Pause);
                    self.stop();
                    InputOutcome::Paused
                }
                Phase::Paused => {
                    self.fsm.transition(RoundAction::Resume);
                    self.start();
                    InputOutcome::Resumed
                }
                Phase::Over => {
                    self.restart();
                    InputOutcome::Restarted
                }
            },
        }
    }

    /// Tear down a finished round and wait at the menu. Best score is kept.
    pub fn restart(&mut self) {
        if !self.fsm.transition(RoundAction::Restart).success {
            return;
        }
        self.sky.reset();
        self.land.reset();
        self.pipes.clear();
        self.bird.reset();
        self.state.score = 0;
        self.last_crash = None;
        self.overlay.show(&Screen::Menu);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_game() -> Game {
        Game::new(Config::new(), Sinks::headless(None), 12345)
    }

    #[test]
    fn test_new_game_waits_at_menu() {
        let game = setup_game();
        assert_eq!(game.phase(), Phase::Ready);
        assert!(game.running_timers().is_empty());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_start_twice_same_as_once() {
        let mut game = setup_game();
        game.start();
        let once: Vec<_> = TimerSlot::ALL.map(|s| game.timer(s).next_due()).into();
        game.advance(5);
        game.start();
        let twice: Vec<_> = TimerSlot::ALL.map(|s| game.timer(s).next_due()).into();
        assert_eq!(once, twice, "second start must not reschedule");
        assert_eq!(game.running_timers(), TimerSlot::ALL.to_vec());
    }

    #[test]
    fn test_stop_twice_is_harmless() {
        let mut game = setup_game();
        game.start();
        game.stop();
        game.stop();
        assert!(game.running_timers().is_empty());
    }

    #[test]
    fn test_advance_without_start_fires_nothing() {
        let mut game = setup_game();
        game.advance(10_000);
        assert_eq!(game.sky().offset(), 0);
        assert!(game.pipes().is_empty());
        assert_eq!(game.now(), 10_000);
    }

    #[test]
    fn test_layers_scroll_at_their_own_cadence() {
        let mut game = setup_game();
        game.press_start();
        game.advance(300);
        assert_eq!(game.sky().offset(), -10, "300ms / 30ms");
        assert_eq!(game.land().offset(), -20, "300ms / 15ms");
    }

    #[test]
    fn test_first_pipe_pair_spawns_after_interval() {
        let mut game = setup_game();
        game.press_start();
        // Keep the bird airborne
        for _ in 0..5 {
            game.advance(499);
            game.handle_key(Key::Jump);
        }
        assert!(game.pipes().is_empty(), "not yet at 2500ms");
        game.advance(5);
        assert_eq!(game.pipes().len(), 2);
    }

    #[test]
    fn test_move_tick_scores_and_evaluates() {
        let mut game = setup_game();
        game.press_start();
        let config = game.config().clone();
        // Wide-open gap around the bird: upper pipe ends well above it
        game.pipes_mut().spawn_pair(60, &config);
        game.bird_mut().set_top(150.0);
        // Place the pair one step before the bird
        let left = game.bird().left() + config.pipe_step;
        move_pair_to(&mut game, left);

        game.tick(TimerSlot::PipeMove);
        assert_eq!(game.score(), 1);
        assert_eq!(game.phase(), Phase::Running, "bird is inside the gap");
    }

    fn move_pair_to(game: &mut Game, left: i32) {
        let step = game.config().pipe_step;
        while game.pipes()[0].left > left {
            game.pipes_mut().advance(step, i32::MIN);
        }
    }

    #[test]
    fn test_floor_contact_ends_round() {
        let mut game = setup_game();
        game.press_start();
        let floor = game.config().bird_floor();
        game.bird_mut().set_top(floor);

        game.tick(TimerSlot::PipeMove);

        assert_eq!(game.phase(), Phase::Over);
        assert_eq!(game.last_crash(), Some(Crash::Floor));
        assert!(game.running_timers().is_empty());
    }

    #[test]
    fn test_free_fall_hits_floor() {
        let mut game = setup_game();
        game.press_start();
        game.advance(2_000);
        assert_eq!(game.phase(), Phase::Over, "bird falls to the ground within 2s");
        let stopped_at = game.now();
        game.advance(1_000);
        assert_eq!(game.now(), stopped_at + 1_000);
        assert!(game.running_timers().is_empty(), "no timer restarted itself");
    }

    #[test]
    fn test_enter_pauses_and_resumes() {
        let mut game = setup_game();
        game.press_start();
        game.advance(60);

        assert_eq!(game.handle_key(Key::Confirm), InputOutcome::Paused);
        assert!(game.fsm().is_paused());
        assert!(game.running_timers().is_empty());
        let offset = game.sky().offset();
        game.advance(1_000);
        assert_eq!(game.sky().offset(), offset, "nothing moves while paused");

        assert_eq!(game.handle_key(Key::Confirm), InputOutcome::Resumed);
        assert_eq!(game.running_timers(), TimerSlot::ALL.to_vec());
    }

    #[test]
    fn test_enter_at_menu_starts() {
        let mut game = setup_game();
        assert_eq!(game.handle_key(Key::Confirm), InputOutcome::Started);
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn test_start_button_ignored_mid_round() {
        let mut game = setup_game();
        game.press_start();
        assert_eq!(game.press_start(), InputOutcome::Ignored);
    }

    #[test]
    fn test_enter_after_game_over_restarts() {
        let mut game = Game::new(Config::new(), Sinks::headless(Some(1)), 1);
        game.press_start();
        game.advance(2_500);
        assert_eq!(game.phase(), Phase::Over);

        assert_eq!(game.handle_key(Key::Confirm), InputOutcome::Restarted);
        assert_eq!(game.phase(), Phase::Ready);
        assert_eq!(game.score(), 0);
        assert!(game.pipes().is_empty());
        assert_eq!(game.bird().top(), game.config().bird_start_top);
        assert_eq!(game.best_score(), Some(1), "best survives a restart");
    }

    #[test]
    fn test_jump_allowed_in_any_phase() {
        let mut game = setup_game();
        assert_eq!(game.handle_key(Key::Jump), InputOutcome::Jumped);
        assert_eq!(game.bird().speed(), game.config().bird_jump_speed);
    }
}
