//! Second bot version: distinct targets and mana-gated spells.
//!
//! Each hero claims the best unclaimed threat it is closest to and
//! intercepts it at its next position. Spells spend from a per-turn
//! budget seeded with current mana: wind when a locked-on monster is in
//! push range, control to turn a distant attacker around, shield when an
//! opponent hero crowds an idle defender.

use std::cmp::Ordering;

use crate::core::{
    arena,
    command::Command,
    entity::{Entity, ThreatTarget},
};

use super::traits::{Strategy, TurnView};

/// Budget kept unspent so a wind is always available for a breach.
const MANA_RESERVE: i32 = 20;

/// Monsters farther than this from our base are not worth chasing.
const FARM_RADIUS: f64 = (arena::PATROL_RADIUS + arena::HERO_SIGHT) as f64;

pub struct Sentinel;

impl Strategy for Sentinel {
    fn name(&self) -> &'static str {
        "sentinel"
    }

    fn plan(&mut self, view: &TurnView) -> Vec<Command> {
        let base = &view.init.base;
        let away = arena::opposite_corner(base);
        let mut budget = view.mana();

        // Claim pool: attackers first, then nearby farmable monsters.
        let mut pool: Vec<&Entity> = view.threats.against_us().collect();
        pool.extend(
            view.threats
                .all()
                .filter(|m| m.threat_for != ThreatTarget::OurBase)
                .filter(|m| m.pos.dist(base) <= FARM_RADIUS),
        );

        let mut commands = Vec::with_capacity(view.heroes.len());

        for (i, hero) in view.heroes.iter().copied().enumerate() {
            let remaining = view.heroes.len() - i;
            let target = claim(hero, &mut pool, remaining);

            let command = if let Some(monster) = target {
                let locked =
                    monster.near_base && monster.pos.dist(base) < arena::BASE_DANGER_RADIUS as f64;
                let reach = hero.pos.dist(&monster.pos);

                if locked
                    && monster.shield_life == 0
                    && reach <= arena::WIND_RANGE as f64
                    && budget >= arena::SPELL_COST
                {
                    budget -= arena::SPELL_COST;
                    Command::wind(away).with_note("shoo")
                } else if monster.threat_for == ThreatTarget::OurBase
                    && monster.shield_life == 0
                    && !monster.is_controlled
                    && reach > arena::WIND_RANGE as f64
                    && reach <= arena::CONTROL_RANGE as f64
                    && budget - arena::SPELL_COST >= MANA_RESERVE
                {
                    budget -= arena::SPELL_COST;
                    Command::control(monster.id, away).with_note("turncoat")
                } else {
                    Command::move_to(monster.next_pos())
                }
            } else if hero.shield_life == 0
                && budget - arena::SPELL_COST >= MANA_RESERVE
                && view
                    .frame
                    .enemy_heroes()
                    .any(|e| e.pos.dist(&hero.pos) <= arena::CONTROL_RANGE as f64)
            {
                budget -= arena::SPELL_COST;
                Command::shield(hero.id).with_note("aegis")
            } else {
                Command::move_to(arena::patrol_waypoint(base, i))
            };

            commands.push(command);
        }

        commands
    }
}

/// Take the monster nearest to `hero` out of the best `remaining` pool
/// entries. The window keeps later heroes from being starved of the top
/// threats by the first hero grabbing a far-away one.
fn claim<'a>(hero: &Entity, pool: &mut Vec<&'a Entity>, remaining: usize) -> Option<&'a Entity> {
    if pool.is_empty() {
        return None;
    }

    let window = pool.len().min(remaining);
    let nearest = pool[..window]
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            hero.pos
                .dist(&a.pos)
                .partial_cmp(&hero.pos.dist(&b.pos))
                .unwrap_or(Ordering::Equal)
        })
        .map(|(idx, _)| idx)?;

    Some(pool.remove(nearest))
}
