use crate::sinks::LayerSink;
use crate::timer::Timer;

/// Endlessly scrolling strip (sky or ground), one pixel per tick
pub struct ScrollingLayer {
    offset: i32,
    width: i32,
    pub timer: Timer,
    sink: Box<dyn LayerSink>,
}

impl ScrollingLayer {
    pub fn new(width: i32, interval_ms: u64, sink: Box<dyn LayerSink>) -> Self {
        Self {
            offset: 0,
            width,
            timer: Timer::new(interval_ms),
            sink,
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Shift left by one pixel, wrapping to 0 once a full width has scrolled
    pub fn tick(&mut self) {
        self.offset -= 1;
        if self.offset == -self.width {
            self.offset = 0;
        }
        self.sink.set_offset(self.offset);
    }

    pub fn reset(&mut self) {
        self.timer.stop();
        self.offset = 0;
        self.sink.set_offset(self.offset);
    }
}
