//! Input frames: everything the bot knows is rebuilt from these each turn

use anyhow::{ensure, Context, Result};

use super::coords::Point;
use super::entity::{parse_ints, Entity, EntityKind};
use super::side::{Side, SideArray};

/// Static setup read once at startup
#[derive(Debug, Clone)]
pub struct InitFrame {
    pub base: Point,
    pub heroes_per_player: usize,
}

/// Base health and mana for one player
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerStats {
    pub health: i32,
    pub mana: i32,
}

/// One turn's worth of input
#[derive(Debug, Clone)]
pub struct TurnFrame {
    pub stats: SideArray<PlayerStats>,
    pub entities: Vec<Entity>,
}

fn next_line<I: Iterator<Item = String>>(lines: &mut I) -> Result<String> {
    lines.next().context("Unexpected end of input")
}

impl InitFrame {
    /// Read the two initialization lines: base corner, heroes per player.
    pub fn read<I: Iterator<Item = String>>(lines: &mut I) -> Result<Self> {
        let base = parse_ints(&next_line(lines)?, 2).context("Bad base line")?;

        let heroes_per_player = next_line(lines)?
            .trim()
            .parse::<usize>()
            .context("Bad hero count")?;
        ensure!(heroes_per_player > 0, "Hero count must be positive");

        Ok(Self {
            base: Point::new(base[0], base[1]),
            heroes_per_player,
        })
    }
}

impl TurnFrame {
    /// Read one turn frame. Returns `Ok(None)` on end of input at the frame
    /// boundary; end of input anywhere else is an error.
    ///
    /// In lenient mode a malformed entity line is skipped with a stderr
    /// note; the announced count still drives the read loop, so the stream
    /// stays in sync.
    pub fn read<I: Iterator<Item = String>>(lines: &mut I, lenient: bool) -> Result<Option<Self>> {
        let Some(own_line) = lines.next() else {
            return Ok(None);
        };

        let own = parse_stats(&own_line).context("Bad own stats line")?;
        let their = parse_stats(&next_line(lines)?).context("Bad opponent stats line")?;

        let count = next_line(lines)?
            .trim()
            .parse::<usize>()
            .context("Bad entity count")?;

        let mut entities = Vec::with_capacity(count);
        for _ in 0..count {
            let line = next_line(lines)?;
            match Entity::parse(&line) {
                Ok(entity) => entities.push(entity),
                Err(err) if lenient => eprintln!("Skipping entity line {:?}: {:#}", line, err),
                Err(err) => return Err(err),
            }
        }

        Ok(Some(Self {
            stats: SideArray::new(own, their),
            entities,
        }))
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_monster())
    }

    /// Own heroes in input order; commands must be emitted in this order.
    pub fn own_heroes(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.kind == EntityKind::OwnHero)
    }

    pub fn enemy_heroes(&self) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(|e| e.kind == EntityKind::EnemyHero)
    }

    pub fn mana(&self) -> i32 {
        self.stats[Side::Ours].mana
    }
}

fn parse_stats(line: &str) -> Result<PlayerStats> {
    let fields = parse_ints(line, 2)?;

    Ok(PlayerStats {
        health: fields[0],
        mana: fields[1],
    })
}
