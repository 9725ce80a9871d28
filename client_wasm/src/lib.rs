//! Browser front end
//!
//! Drives a [`game_core::Game`] from `requestAnimationFrame` timestamps and
//! renders it onto the page's existing DOM elements.

#![cfg(target_arch = "wasm32")]

mod dom;
mod input;
mod storage;

use dom::{element, DomBird, DomLayer, DomOverlay, DomPipes};
use game_core::*;
use std::cell::RefCell;
use storage::{LocalStorageStore, BEST_SCORE_KEY};
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

/// Main client state
pub struct Client {
    game: Game,
    clock: FrameClock,
}

impl Client {
    pub fn new(config_json: Option<&str>) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let sinks = Sinks {
            sky: Box::new(DomLayer::new(element(&document, "sky")?)),
            land: Box::new(DomLayer::new(element(&document, "land")?)),
            pipes: Box::new(DomPipes::new(
                document.clone(),
                element(&document, "game")?,
            )),
            bird: Box::new(DomBird::new(element(&document, "bird")?)),
            overlay: Box::new(DomOverlay::new(
                document.clone(),
                element(&document, "gameMenu")?,
                element(&document, "gameover_scr")?,
            )),
            store: Box::new(LocalStorageStore::new(BEST_SCORE_KEY)),
        };

        let seed = js_sys::Date::now() as u64;
        let game = create_game(config_json, sinks, seed).map_err(|e| JsValue::from_str(&e))?;
        log::info!("Game initialized with seed: {}", seed);

        Ok(Self {
            game,
            clock: FrameClock::new(Params::MAX_FRAME_MS),
        })
    }

    pub fn frame(&mut self, now_ms: f64) {
        let delta = self.clock.delta(now_ms);
        if delta > 0 {
            self.game.advance(delta);
        }
    }

    pub fn key_down(&mut self, event: &KeyboardEvent) -> bool {
        let Some(key) = input::key_from_event(event) else {
            return false;
        };
        let outcome = self.game.handle_key(key);
        if outcome != InputOutcome::Jumped {
            log::debug!("{:?} -> {:?}", key, outcome);
        }
        true
    }
}

thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> T) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => Ok(f(client)),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

/// Set up the game on the current page. `config_json` overrides defaults.
#[wasm_bindgen]
pub fn init_game(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already initialized");
    }

    let client = Client::new(config_json.as_deref())?;
    CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
    Ok(())
}

/// Advance the game to the `requestAnimationFrame` timestamp `now_ms`
#[wasm_bindgen]
pub fn frame(now_ms: f64) -> Result<(), JsValue> {
    with_client(|client| client.frame(now_ms))
}

/// Forget the last frame time so a long gap is not replayed
#[wasm_bindgen]
pub fn resync_clock() -> Result<(), JsValue> {
    with_client(|client| client.clock.reset())
}

/// Returns true when the key was consumed and the page should not scroll
#[wasm_bindgen]
pub fn key_down(event: KeyboardEvent) -> Result<bool, JsValue> {
    let handled = with_client(|client| client.key_down(&event))?;
    if handled {
        event.prevent_default();
    }
    Ok(handled)
}

/// Start button on the menu
#[wasm_bindgen]
pub fn press_start() -> Result<(), JsValue> {
    with_client(|client| {
        client.game.press_start();
    })
}

#[wasm_bindgen]
pub fn score() -> Result<u32, JsValue> {
    with_client(|client| client.game.score())
}

#[wasm_bindgen]
pub fn best_score() -> Result<Option<u32>, JsValue> {
    with_client(|client| client.game.best_score())
}

/// Ready, Running, Paused or Over
#[wasm_bindgen]
pub fn phase() -> Result<String, JsValue> {
    with_client(|client| client.game.fsm().state_string())
}
