//! First bot version: converge on the worst threat, patrol otherwise.

use crate::core::{arena, command::Command};

use super::traits::{Strategy, TurnView};

/// Every hero moves at the single top-scoring monster threatening our
/// base; with nothing threatening, hero `i` walks its patrol waypoint.
pub struct Scout;

impl Strategy for Scout {
    fn name(&self) -> &'static str {
        "scout"
    }

    fn plan(&mut self, view: &TurnView) -> Vec<Command> {
        let target = view.threats.top_against_us();

        view.heroes
            .iter()
            .enumerate()
            .map(|(i, _)| match target {
                Some(monster) => Command::move_to(monster.pos),
                None => Command::move_to(arena::patrol_waypoint(&view.init.base, i)),
            })
            .collect()
    }
}
