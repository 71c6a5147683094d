//! Arena geometry and contest constants

use std::f64::consts::{FRAC_PI_4, FRAC_PI_8};

use lazy_static::lazy_static;

use super::coords::{Delta, Point};

pub const MAP_WIDTH: i32 = 17630;
pub const MAP_HEIGHT: i32 = 9000;

/// How far a base sees, and the extra margin heroes patrol beyond it.
pub const BASE_SIGHT: i32 = 6000;
pub const PATROL_MARGIN: i32 = 1100;
pub const PATROL_RADIUS: i32 = BASE_SIGHT + PATROL_MARGIN;

pub const HERO_SIGHT: i32 = 2200;
pub const HERO_SPEED: i32 = 800;
pub const MONSTER_SPEED: i32 = 400;

/// Heroes damage every monster within this range each turn.
pub const ATTACK_RANGE: i32 = 800;
pub const ATTACK_DAMAGE: i32 = 2;

/// A monster inside this range locks onto the base and walks straight in.
pub const BASE_DANGER_RADIUS: i32 = 5000;
/// Inside this range the monster takes a base health point.
pub const BASE_HIT_RADIUS: i32 = 300;

pub const SPELL_COST: i32 = 10;
pub const WIND_RANGE: i32 = 1280;
pub const WIND_PUSH: i32 = 2200;
pub const SHIELD_RANGE: i32 = 2200;
pub const SHIELD_TURNS: i32 = 12;
pub const CONTROL_RANGE: i32 = 2200;

lazy_static! {
    /// Patrol offsets from the own base corner: radius `PATROL_RADIUS` at
    /// angles pi/4, pi/8 and 3pi/8.
    pub static ref PATROL_OFFSETS: [Delta; 3] = {
        let r = PATROL_RADIUS as f64;
        let diag = FRAC_PI_4.cos();
        let (cos8, sin8) = (FRAC_PI_8.cos(), FRAC_PI_8.sin());

        [
            Delta { dx: (r * diag) as i32, dy: (r * diag) as i32 },
            Delta { dx: (r * cos8) as i32, dy: (r * sin8) as i32 },
            Delta { dx: (r * sin8) as i32, dy: (r * cos8) as i32 },
        ]
    };
}

/// Absolute patrol waypoint `i` for the given base corner. Offsets are
/// mirrored for the far corner so both sides patrol their own approach;
/// waypoints cycle when there are more heroes than offsets.
pub fn patrol_waypoint(base: &Point, i: usize) -> Point {
    let offset = &PATROL_OFFSETS[i % PATROL_OFFSETS.len()];

    let waypoint = if base.x == 0 {
        base + offset
    } else {
        base - offset
    };

    waypoint.clamped(MAP_WIDTH, MAP_HEIGHT)
}

/// The corner diagonally opposite a base.
pub fn opposite_corner(base: &Point) -> Point {
    Point::new(MAP_WIDTH - base.x, MAP_HEIGHT - base.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoints_in_bounds() {
        for base in [Point::new(0, 0), Point::new(MAP_WIDTH, MAP_HEIGHT)] {
            for i in 0..6 {
                let wp = patrol_waypoint(&base, i);
                assert!(wp.x >= 0 && wp.x <= MAP_WIDTH, "{:?}", wp);
                assert!(wp.y >= 0 && wp.y <= MAP_HEIGHT, "{:?}", wp);
            }
        }
    }

    #[test]
    fn test_waypoints_mirror_by_corner() {
        let near = patrol_waypoint(&Point::new(0, 0), 1);
        let far = patrol_waypoint(&Point::new(MAP_WIDTH, MAP_HEIGHT), 1);

        assert_eq!(far.x, MAP_WIDTH - near.x);
        assert_eq!(far.y, MAP_HEIGHT - near.y);
    }

    #[test]
    fn test_waypoints_cycle() {
        let base = Point::new(0, 0);
        assert_eq!(patrol_waypoint(&base, 0), patrol_waypoint(&base, 3));
    }

    #[test]
    fn test_waypoints_sit_on_patrol_ring() {
        let base = Point::new(0, 0);
        for i in 0..3 {
            let wp = patrol_waypoint(&base, i);
            let r = base.dist(&wp);
            // Integer truncation pulls each waypoint slightly inside the ring.
            assert!(r <= PATROL_RADIUS as f64 && r > (PATROL_RADIUS - 2) as f64);
        }
    }

    #[test]
    fn test_opposite_corner() {
        assert_eq!(
            opposite_corner(&Point::new(0, 0)),
            Point::new(MAP_WIDTH, MAP_HEIGHT)
        );
        assert_eq!(
            opposite_corner(&Point::new(MAP_WIDTH, MAP_HEIGHT)),
            Point::new(0, 0)
        );
    }
}
