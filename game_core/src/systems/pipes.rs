use crate::components::{Obstacle, PipeRole};
use crate::config::Config;
use crate::resources::GameRng;
use crate::sinks::ObstacleSink;
use crate::timer::Timer;

/// All live pipes, in spawn order with each pair adjacent (upper, lower)
pub struct Pipes {
    all: Vec<Obstacle>,
    next_id: u64,
    pub spawn_timer: Timer,
    pub move_timer: Timer,
    sink: Box<dyn ObstacleSink>,
}

impl Pipes {
    pub fn new(config: &Config, sink: Box<dyn ObstacleSink>) -> Self {
        Self {
            all: Vec::new(),
            next_id: 0,
            spawn_timer: Timer::new(config.pipe_spawn_interval_ms),
            move_timer: Timer::new(config.pipe_move_interval_ms),
            sink,
        }
    }

    pub fn all(&self) -> &[Obstacle] {
        &self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Draw the upper pipe height for the next pair
    pub fn random_upper_height(rng: &mut GameRng, config: &Config) -> i32 {
        let (min, max) = config.upper_height_range();
        rng.range_inclusive(min, max)
    }

    /// Spawn a random pair at the right edge of the stage
    pub fn spawn(&mut self, rng: &mut GameRng, config: &Config) {
        let upper_height = Self::random_upper_height(rng, config);
        self.spawn_pair(upper_height, config);
    }

    /// Spawn a pair whose upper pipe is `upper_height` tall
    pub fn spawn_pair(&mut self, upper_height: i32, config: &Config) {
        let lower_height = config.max_height() - upper_height - config.pipe_gap;
        let left = config.stage_width;

        let upper = Obstacle {
            id: self.take_id(),
            role: PipeRole::Upper,
            top: 0,
            left,
            width: config.pipe_width,
            height: upper_height,
        };
        let lower = Obstacle {
            id: self.take_id(),
            role: PipeRole::Lower,
            top: upper_height + config.pipe_gap,
            left,
            width: config.pipe_width,
            height: lower_height,
        };

        log::debug!(
            "Spawned pipe pair {}/{} (upper {}px, lower {}px)",
            upper.id,
            lower.id,
            upper_height,
            lower_height
        );

        self.sink.create(&upper);
        self.sink.create(&lower);
        self.all.push(upper);
        self.all.push(lower);
    }

    /// Move every pipe left by `step`, dropping those that left the stage.
    ///
    /// Returns the points earned this tick: one per upper pipe whose `left`
    /// lands exactly on `bird_left`.
    pub fn advance(&mut self, step: i32, bird_left: i32) -> u32 {
        let mut points = 0;
        let mut i = 0;
        while i < self.all.len() {
            let pipe = &mut self.all[i];
            pipe.left -= step;

            if pipe.is_offstage() {
                let gone = self.all.remove(i);
                self.sink.destroy(gone.id);
                // The next pipe shifted into slot i
                continue;
            }

            self.sink.move_to(pipe.id, pipe.left);

            // Even slots hold the upper member of each pair
            if i % 2 == 0 && pipe.left == bird_left {
                debug_assert_eq!(pipe.role, PipeRole::Upper);
                points += 1;
            }
            i += 1;
        }
        points
    }

    /// Stop both timers and tear down every pipe element
    pub fn clear(&mut self) {
        self.spawn_timer.stop();
        self.move_timer.stop();
        for pipe in self.all.drain(..) {
            self.sink.destroy(pipe.id);
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
