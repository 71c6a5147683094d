use std::time::Instant;

use anyhow::{ensure, Result};

use crate::core::{
    command::Command,
    frame::{InitFrame, TurnFrame},
    threat::ThreatBoard,
};
use crate::strategies::{Drifter, Scout, Sentinel, Strategy, TurnView};

use super::options::{EngineOptions, StrategyKind};

/// Engine drives one bot version over the per-turn frames
pub struct Engine {
    pub init: InitFrame,
    pub options: EngineOptions,
    strategy: Box<dyn Strategy>,
    turn: u32,
}

impl Engine {
    pub fn new(init: InitFrame, options: EngineOptions) -> Self {
        let strategy: Box<dyn Strategy> = match options.strategy {
            StrategyKind::Scout => Box::new(Scout),
            StrategyKind::Sentinel => Box::new(Sentinel),
            StrategyKind::Drifter => Box::new(Drifter::new()),
        };

        Self {
            init,
            options,
            strategy,
            turn: 0,
        }
    }

    /// Plan one turn: exactly one command per own hero, in input order.
    pub fn take_turn(&mut self, frame: &TurnFrame) -> Result<Vec<Command>> {
        let started = Instant::now();
        self.turn += 1;

        let threats = ThreatBoard::new(frame.monsters(), &self.init.base);
        let view = TurnView::new(&self.init, frame, &threats);

        ensure!(
            view.heroes.len() == self.init.heroes_per_player,
            "Expected {} own heroes in frame, got {}",
            self.init.heroes_per_player,
            view.heroes.len()
        );

        let commands = self.strategy.plan(&view);

        ensure!(
            commands.len() == view.heroes.len(),
            "Strategy {} planned {} commands for {} heroes",
            self.strategy.name(),
            commands.len(),
            view.heroes.len()
        );

        if self.options.verbose {
            eprintln!(
                "turn {} [{}] planned in {:.2}ms",
                self.turn,
                self.strategy.name(),
                started.elapsed().as_secs_f64() * 1e3
            );
            eprintln!("{}", frame);
            eprintln!("{}", threats);
        }

        Ok(commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coords::Point;
    use crate::core::entity::Entity;
    use crate::core::frame::PlayerStats;
    use crate::core::side::SideArray;

    fn init() -> InitFrame {
        InitFrame {
            base: Point::new(0, 0),
            heroes_per_player: 3,
        }
    }

    fn frame_with_heroes(count: usize) -> TurnFrame {
        let entities = (0..count)
            .map(|i| {
                Entity::parse(&format!("{} 1 {} 2000 0 0 0 0 0 0 0", i, 1000 + i * 500)).unwrap()
            })
            .collect();

        TurnFrame {
            stats: SideArray::new(
                PlayerStats {
                    health: 3,
                    mana: 30,
                },
                PlayerStats::default(),
            ),
            entities,
        }
    }

    #[test]
    fn test_one_command_per_hero() {
        let mut engine = Engine::new(init(), EngineOptions::default());
        let commands = engine.take_turn(&frame_with_heroes(3)).unwrap();
        assert_eq!(commands.len(), 3);
    }

    #[test]
    fn test_missing_hero_is_error() {
        let mut engine = Engine::new(init(), EngineOptions::default());
        assert!(engine.take_turn(&frame_with_heroes(2)).is_err());
    }
}
