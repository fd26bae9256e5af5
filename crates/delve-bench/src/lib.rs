//! Benchmark profiles for the delve simulation kernel.
//!
//! - [`reference_world`]: 80×24 fenced map with scattered rocks and 64
//!   wandering combatants
//! - [`stress_world`]: 400×200 map with 4096 wanderers
//! - [`populate`]: deterministic wanderer placement via the world stream

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use delve_core::{CellId, Glyph};
use delve_rand::Random;
use delve_world::{Actor, Cell, Combatant, Wander, World, WorldConfig, WALL};

/// Fraction of interior cells that start as impassable rock.
const ROCK_DENSITY: f64 = 0.1;

/// Fenced `cols × rows` map with rock scattered at [`ROCK_DENSITY`].
pub fn rocky_world(cols: u32, rows: u32, seed: u64) -> World {
    let config = WorldConfig::new(cols, rows).with_seed(seed);
    World::generate(
        &config,
        |pos, rng: &mut Random| {
            if rng.chance(ROCK_DENSITY).unwrap_or(false) {
                Cell::wall(pos)
            } else {
                Cell::floor(pos)
            }
        },
        |c| {
            c.passable = false;
            c.glyph = WALL;
        },
    )
    .unwrap()
}

/// Place up to `count` wandering combatants on random free floor and
/// schedule each for the next step. Returns how many were placed.
pub fn populate(world: &mut World, count: usize) -> usize {
    let mut free: Vec<CellId> = world
        .cells()
        .filter(|(_, c)| c.passable && c.occupant().is_none())
        .map(|(id, _)| id)
        .collect();
    world.rng_mut().shuffle(&mut free);

    let mut placed = 0;
    for cell in free.into_iter().take(count) {
        let actor = Actor::new(Glyph::ch('g'))
            .with_component(Wander::new(1, 5).unwrap())
            .with_component(Combatant::new(6, 1));
        let id = world.spawn(actor);
        world.place(id, cell).unwrap();
        world.schedule(id, 0).unwrap();
        placed += 1;
    }
    placed
}

/// Terminal-sized reference profile.
pub fn reference_world(seed: u64) -> World {
    let mut world = rocky_world(80, 24, seed);
    populate(&mut world, 64);
    world
}

/// Large stress profile.
pub fn stress_world(seed: u64) -> World {
    let mut world = rocky_world(400, 200, seed);
    populate(&mut world, 4096);
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_world_is_populated() {
        let world = reference_world(1);
        assert_eq!(world.actor_count(), 64);
        assert_eq!(world.clock().len(), 64);
    }

    #[test]
    fn populate_stops_when_full() {
        let mut world = rocky_world(3, 3, 0);
        // One interior cell; it may have become rock.
        let placed = populate(&mut world, 10);
        assert!(placed <= 1);
    }
}
