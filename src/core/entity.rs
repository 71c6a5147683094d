//! Wire entities: the flat records rebuilt from input every turn

use anyhow::{anyhow, ensure, Context, Result};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::coords::{Delta, Point};

/// What kind of entity a wire line describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum EntityKind {
    Monster = 0,
    OwnHero = 1,
    EnemyHero = 2,
}

impl EntityKind {
    pub fn from_wire(value: i32) -> Result<Self> {
        FromPrimitive::from_i32(value).ok_or_else(|| anyhow!("Invalid entity type: {}", value))
    }
}

/// Whose base a monster's trajectory ends at
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum ThreatTarget {
    Neither = 0,
    OurBase = 1,
    TheirBase = 2,
}

impl ThreatTarget {
    pub fn from_wire(value: i32) -> Result<Self> {
        FromPrimitive::from_i32(value).ok_or_else(|| anyhow!("Invalid threat target: {}", value))
    }
}

/// One 11-field entity line
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: i32,
    pub kind: EntityKind,
    pub pos: Point,
    pub shield_life: i32,
    pub is_controlled: bool,
    pub health: i32,
    pub velocity: Delta,
    pub near_base: bool,
    pub threat_for: ThreatTarget,
}

/// Parse a line of whitespace-separated integers, checking the count.
pub(crate) fn parse_ints(line: &str, expected: usize) -> Result<Vec<i32>> {
    let fields = line
        .split_whitespace()
        .map(|f| {
            f.parse::<i32>()
                .with_context(|| format!("Bad integer field {:?}", f))
        })
        .collect::<Result<Vec<_>>>()?;

    ensure!(
        fields.len() == expected,
        "Expected {} fields, got {} in {:?}",
        expected,
        fields.len(),
        line
    );

    Ok(fields)
}

impl Entity {
    /// Parse one entity line:
    /// `id type x y shield_life is_controlled health vx vy near_base threat_for`
    pub fn parse(line: &str) -> Result<Self> {
        let f = parse_ints(line, 11)?;

        Ok(Self {
            id: f[0],
            kind: EntityKind::from_wire(f[1])?,
            pos: Point::new(f[2], f[3]),
            shield_life: f[4],
            is_controlled: f[5] != 0,
            health: f[6],
            velocity: Delta { dx: f[7], dy: f[8] },
            near_base: f[9] != 0,
            threat_for: ThreatTarget::from_wire(f[10])?,
        })
    }

    pub fn is_monster(&self) -> bool {
        self.kind == EntityKind::Monster
    }

    /// Where the entity stands next turn if nothing interferes.
    pub fn next_pos(&self) -> Point {
        &self.pos + &self.velocity
    }
}
