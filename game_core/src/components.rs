use glam::DVec2;

/// Axis-aligned box in stage pixels, origin top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Centre-distance overlap test. Touching edges do not count.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        let dist = (self.center() - other.center()).abs();
        let reach = (self.size() + other.size()) / 2.0;
        dist.x < reach.x && dist.y < reach.y
    }
}

/// Which half of a pipe pair an obstacle is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeRole {
    Upper,
    Lower,
}

/// One pipe. Pairs share `left` and are spawned together.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u64,
    pub role: PipeRole,
    pub top: i32,
    pub left: i32,
    pub width: i32,
    pub height: i32,
}

impl Obstacle {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.left as f64,
            self.top as f64,
            self.width as f64,
            self.height as f64,
        )
    }

    /// Fully scrolled past the left edge of the stage
    pub fn is_offstage(&self) -> bool {
        self.left < -self.width
    }
}

/// Bird sprite frame, cycles 0 → 1 → 2 → 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WingFrame {
    #[default]
    Up,
    Mid,
    Down,
}

impl WingFrame {
    pub fn index(self) -> u8 {
        match self {
            WingFrame::Up => 0,
            WingFrame::Mid => 1,
            WingFrame::Down => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            WingFrame::Up => WingFrame::Mid,
            WingFrame::Mid => WingFrame::Down,
            WingFrame::Down => WingFrame::Up,
        }
    }

    /// Background offset (x, y) of this frame in the bird sprite sheet
    pub fn sprite_offset(self) -> (i32, i32) {
        match self {
            WingFrame::Up => (-8, -10),
            WingFrame::Mid => (-60, -10),
            WingFrame::Down => (-113, -10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bird_overlapping_pipe_collides() {
        let bird = Bounds::new(200.0, 100.0, 33.0, 26.0);
        let pipe = Bounds::new(210.0, 90.0, 52.0, 150.0);
        assert!(bird.overlaps(&pipe), "both axes overlap");
        assert!(pipe.overlaps(&bird), "overlap is symmetric");
    }

    #[test]
    fn test_distant_pipe_does_not_collide() {
        let bird = Bounds::new(200.0, 100.0, 33.0, 26.0);
        let pipe = Bounds::new(400.0, 90.0, 52.0, 150.0);
        assert!(!bird.overlaps(&pipe));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b), "strict inequality on each axis");
    }

    #[test]
    fn test_horizontal_overlap_alone_is_not_collision() {
        let bird = Bounds::new(200.0, 300.0, 33.0, 26.0);
        let upper = Bounds::new(200.0, 0.0, 52.0, 150.0);
        assert!(!bird.overlaps(&upper), "bird is below the upper pipe");
    }

    #[test]
    fn test_wing_frames_cycle() {
        let mut frame = WingFrame::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(frame.index());
            frame = frame.next();
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_obstacle_offstage_boundary() {
        let mut pipe = Obstacle {
            id: 0,
            role: PipeRole::Upper,
            top: 0,
            left: -52,
            width: 52,
            height: 100,
        };
        assert!(!pipe.is_offstage(), "left == -width is still on stage");
        pipe.left = -53;
        assert!(pipe.is_offstage());
    }
}
