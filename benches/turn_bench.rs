use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gossamer::core::coords::{Delta, Point};
use gossamer::core::entity::{Entity, EntityKind, ThreatTarget};
use gossamer::core::frame::{InitFrame, PlayerStats, TurnFrame};
use gossamer::core::side::SideArray;
use gossamer::engine::{Engine, EngineOptions};

fn crowded_frame() -> TurnFrame {
    let mut entities = Vec::new();

    for i in 0..3 {
        entities.push(Entity {
            id: i,
            kind: EntityKind::OwnHero,
            pos: Point::new(2000 + i * 1500, 2000),
            shield_life: 0,
            is_controlled: false,
            health: 0,
            velocity: Delta { dx: 0, dy: 0 },
            near_base: false,
            threat_for: ThreatTarget::Neither,
        });
    }

    for i in 0..30 {
        entities.push(Entity {
            id: 100 + i,
            kind: EntityKind::Monster,
            pos: Point::new(1000 + (i * 530) % 16000, 500 + (i * 271) % 8000),
            shield_life: 0,
            is_controlled: false,
            health: 14,
            velocity: Delta { dx: -400, dy: 0 },
            near_base: i % 5 == 0,
            threat_for: if i % 3 == 0 {
                ThreatTarget::OurBase
            } else {
                ThreatTarget::Neither
            },
        });
    }

    TurnFrame {
        stats: SideArray::new(
            PlayerStats {
                health: 3,
                mana: 90,
            },
            PlayerStats::default(),
        ),
        entities,
    }
}

fn turn_benchmark(c: &mut Criterion) {
    let init = InitFrame {
        base: Point::new(0, 0),
        heroes_per_player: 3,
    };
    let frame = crowded_frame();
    let mut engine = Engine::new(init, EngineOptions::default());

    c.bench_function("sentinel turn plan", |b| {
        b.iter(|| engine.take_turn(black_box(&frame)).unwrap())
    });
}

criterion_group!(benches, turn_benchmark);
criterion_main!(benches);
