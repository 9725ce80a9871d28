use crate::components::Obstacle;
use crate::systems::bird::Bird;

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    Floor,
    Pipe { id: u64 },
}

/// Check the two end-of-round conditions, floor first
pub fn check_crash(bird: &Bird, pipes: &[Obstacle]) -> Option<Crash> {
    if bird.is_on_floor() {
        return Some(Crash::Floor);
    }

    let bird_box = bird.bounds();
    pipes
        .iter()
        .find(|pipe| bird_box.overlaps(&pipe.bounds()))
        .map(|pipe| Crash::Pipe { id: pipe.id })
}
