use crate::components::{Bounds, WingFrame};
use crate::config::Config;
use crate::sinks::BirdSink;
use crate::timer::Timer;

/// The player: falls under constant acceleration, flaps on a fixed cadence
pub struct Bird {
    top: f64,
    left: i32,
    width: i32,
    height: i32,
    speed: f64, // px/ms, positive is down
    accel: f64,
    jump_speed: f64,
    floor: f64,
    start_top: f64,
    wing: WingFrame,
    pub wing_timer: Timer,
    pub drop_timer: Timer,
    sink: Box<dyn BirdSink>,
}

impl Bird {
    pub fn new(config: &Config, sink: Box<dyn BirdSink>) -> Self {
        Self {
            top: config.bird_start_top,
            left: config.bird_left,
            width: config.bird_width,
            height: config.bird_height,
            speed: 0.0,
            accel: config.bird_accel,
            jump_speed: config.bird_jump_speed,
            floor: config.bird_floor(),
            start_top: config.bird_start_top,
            wing: WingFrame::default(),
            wing_timer: Timer::new(config.wing_interval_ms),
            drop_timer: Timer::new(config.drop_interval_ms),
            sink,
        }
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn wing(&self) -> WingFrame {
        self.wing
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.left as f64,
            self.top,
            self.width as f64,
            self.height as f64,
        )
    }

    /// Store a new `top`, clamped to the playfield
    pub fn set_top(&mut self, top: f64) {
        self.top = top.clamp(0.0, self.floor);
    }

    /// Resting exactly on the ground. Only the clamp can produce this value.
    pub fn is_on_floor(&self) -> bool {
        self.top == self.floor
    }

    /// Upward impulse: replaces the current speed
    pub fn jump(&mut self) {
        self.speed = self.jump_speed;
    }

    /// Advance the wing animation one frame
    pub fn flap(&mut self) {
        self.wing = self.wing.next();
        self.render();
    }

    /// Integrate one drop interval: s = v·t + ½·a·t², then v += a·t
    pub fn fall(&mut self) {
        let dt = self.drop_timer.interval() as f64;
        let distance = self.speed * dt + 0.5 * self.accel * dt * dt;
        self.set_top(self.top + distance);
        self.speed += self.accel * dt;
        self.render();
    }

    /// Back to the starting pose with timers stopped
    pub fn reset(&mut self) {
        self.wing_timer.stop();
        self.drop_timer.stop();
        self.top = self.start_top;
        self.speed = 0.0;
        self.wing = WingFrame::default();
        self.render();
    }

    fn render(&mut self) {
        self.sink.set_top(self.top);
        self.sink.set_wing(self.wing);
    }
}
