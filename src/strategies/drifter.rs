//! Random-walk baseline for calibration matches.

use rand::rngs::StdRng;
use rand::Rng;

use crate::core::{arena, command::Command, coords::Point};
use crate::utils::rng::make_rng;

use super::traits::{Strategy, TurnView};

/// Heroes wander to uniform random points; the seed is fixed under debug
/// builds so calibration runs replay.
pub struct Drifter {
    rng: StdRng,
}

impl Drifter {
    pub fn new() -> Self {
        Self { rng: make_rng() }
    }
}

impl Default for Drifter {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Drifter {
    fn name(&self) -> &'static str {
        "drifter"
    }

    fn plan(&mut self, view: &TurnView) -> Vec<Command> {
        view.heroes
            .iter()
            .map(|_| {
                let to = Point::new(
                    self.rng.random_range(0..=arena::MAP_WIDTH),
                    self.rng.random_range(0..=arena::MAP_HEIGHT),
                );
                Command::move_to(to)
            })
            .collect()
    }
}
