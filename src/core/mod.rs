//! Core game representations: the arena, the wire entities and the
//! per-turn frames rebuilt from them

pub mod arena;
pub mod command;
pub mod coords;
pub mod display;
pub mod entity;
pub mod frame;
pub mod side;
pub mod threat;

pub use command::Command;
pub use coords::{Delta, Point};
pub use entity::{Entity, EntityKind, ThreatTarget};
pub use frame::{InitFrame, PlayerStats, TurnFrame};
pub use side::{Side, SideArray};
pub use threat::ThreatBoard;
