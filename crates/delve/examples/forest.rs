//! Headless demo: a fenced forest full of wandering, squabbling critters.
//!
//! ```text
//! cargo run -p delve --example forest -- [seed] [steps]
//! RUST_LOG=delve_world=debug cargo run -p delve --example forest
//! ```

use delve::prelude::*;
use std::error::Error;
use tracing_subscriber::EnvFilter;

const TREE: Glyph = Glyph::ch_fg('T', Color::Green);
const CRITTERS: usize = 24;
const SENTRIES: usize = 3;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().map(|s| s.parse()).transpose()?.unwrap_or(2024);
    let steps: u32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(100);

    let config = WorldConfig::new(60, 20).with_seed(seed);
    config.validate()?;
    let mut world = World::generate(
        &config,
        |pos, rng| {
            if rng.chance(0.12).unwrap_or(false) {
                Cell::new(pos, TREE, false)
            } else {
                Cell::floor(pos)
            }
        },
        |c| {
            c.passable = false;
            c.glyph = WALL;
        },
    )?;

    let faces = [
        (Glyph::ch_fg('r', Color::Yellow), 1i64),
        (Glyph::ch_fg('w', Color::LightBlack), 3),
        (Glyph::ch_fg('b', Color::Magenta), 6),
    ];
    for _ in 0..CRITTERS {
        let open: Vec<CellId> = world
            .cells()
            .filter(|(_, c)| c.passable && c.occupant().is_none())
            .map(|(id, _)| id)
            .collect();
        let rng = world.rng_mut();
        let &cell = rng.choice(&open)?;
        let (face, _) = *rng.weighted_choice(&faces, |&(_, w)| w)?;
        let critter = Actor::new(face)
            .with_component(Wander::new(1, 4)?)
            .with_component(Combatant::new(4, 1));
        let id = world.spawn(critter);
        world.place(id, cell)?;
        world.schedule(id, 0)?;
    }

    // Sentries patrol: try each cardinal step in turn, first success wins.
    for _ in 0..SENTRIES {
        let patrol = Selection::new(DIRS_4.iter().map(|&d| walk(d).boxed()).collect());
        let sentry = Actor::new(Glyph::ch_fg('S', Color::Cyan))
            .with_component(Brain::new(patrol, 2))
            .with_component(Combatant::new(8, 2));
        let open: Vec<CellId> = world
            .cells()
            .filter(|(_, c)| c.passable && c.occupant().is_none())
            .map(|(id, _)| id)
            .collect();
        let &cell = world.rng_mut().choice(&open)?;
        let id = world.spawn(sentry);
        world.place(id, cell)?;
        world.schedule(id, 1)?;
    }

    let mut bumps = 0;
    for _ in 0..steps {
        let report = world.step();
        bumps += report.moves.bumped;
    }
    let alive = world.actors().filter(|(_, a)| a.is_placed()).count();

    println!("{}", render(&mut world));
    println!(
        "seed {seed}, {} ticks, {alive}/{} actors left, {bumps} bumps",
        world.tick(),
        CRITTERS + SENTRIES
    );
    Ok(())
}

fn render(world: &mut World) -> String {
    let shape = world.shape();
    let mut out = String::new();
    for y in 0..shape.rows() as i32 {
        for x in 0..shape.cols() as i32 {
            let ch = world
                .cell_at(Vector::new(x, y))
                .map_or(' ', |id| world.glyph_of_cell(id).ch);
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
