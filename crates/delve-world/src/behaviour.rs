//! Stock actor behaviours.

use crate::component::Component;
use crate::error::WorldError;
use crate::event::Event;
use crate::world::{MoveOutcome, World};
use delve_btree::{action, Behaviour, BehaviourExt, BoxedBehaviour, Status};
use delve_core::{ActorId, Vector, DIRS_4, DIRS_8};
use rand::Rng;
use tracing::{debug, trace};

/// Melee combat: bumping deals damage, and running out of health takes
/// the owner off the grid and off the clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    /// Starting and maximum health.
    pub max_health: i32,
    /// Current health.
    pub health: i32,
    /// Damage dealt per bump.
    pub damage: i32,
}

impl Combatant {
    /// A combatant at full health.
    pub fn new(max_health: i32, damage: i32) -> Self {
        Self {
            max_health,
            health: max_health,
            damage,
        }
    }

    /// Whether health is above zero.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl Component<ActorId> for Combatant {
    fn name(&self) -> &str {
        "combatant"
    }

    fn handle(&mut self, world: &mut World, owner: ActorId, event: &mut Event) {
        match *event {
            Event::Bump { bumped } => {
                world.send_actor(
                    bumped,
                    &mut Event::Damage {
                        amount: self.damage,
                        source: Some(owner),
                    },
                );
            }
            Event::Damage { amount, source } => {
                self.health -= amount;
                if self.is_alive() {
                    return;
                }
                if let Ok(Some(cell)) = world.remove(owner) {
                    debug!(
                        actor = %owner,
                        %cell,
                        killer = ?source,
                        "actor died"
                    );
                }
            }
            _ => {}
        }
    }
}

/// Random walk: on each turn, step in a random direction and come back
/// after a random delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wander {
    min_delay: u64,
    max_delay: u64,
    directions: &'static [Vector],
}

impl Wander {
    /// Wander in all eight directions, acting again after between
    /// `min_delay` and `max_delay` steps (inclusive).
    pub fn new(min_delay: u64, max_delay: u64) -> Result<Self, WorldError> {
        if min_delay > max_delay {
            return Err(WorldError::InvalidDelayRange {
                min: min_delay,
                max: max_delay,
            });
        }
        Ok(Self {
            min_delay,
            max_delay,
            directions: &DIRS_8,
        })
    }

    /// Restrict steps to the four cardinal directions.
    pub fn cardinal(mut self) -> Self {
        self.directions = &DIRS_4;
        self
    }

    /// Inclusive delay bounds.
    pub fn delay_range(&self) -> (u64, u64) {
        (self.min_delay, self.max_delay)
    }
}

impl Component<ActorId> for Wander {
    fn name(&self) -> &str {
        "wander"
    }

    fn handle(&mut self, world: &mut World, owner: ActorId, event: &mut Event) {
        if *event != Event::Act {
            return;
        }
        let rng = world.rng_mut();
        let Ok(&delta) = rng.choice(self.directions) else {
            return;
        };
        let delay = rng.gen_range(self.min_delay..=self.max_delay);

        world.move_actor(owner, delta);
        // The move may have killed us.
        if world.actor(owner).is_some_and(|a| a.is_placed()) {
            world
                .schedule(owner, delay)
                .expect("placed actor has a valid handle");
        }
    }
}

/// Tree leaf: step the agent by `delta`. Succeeds only if it moved.
pub fn walk(delta: Vector) -> impl Behaviour<World, ActorId> {
    action(move |world: &mut World, id: ActorId| {
        match world.move_actor(id, delta) {
            MoveOutcome::Moved { .. } => Status::Success,
            _ => Status::Failure,
        }
    })
}

/// Behaviour-tree driver: ticks `root` once per turn, then acts again
/// after a fixed delay.
///
/// A tree that finishes (either way) is reset so the next turn starts
/// from the top; a `Running` tree resumes where it paused.
pub struct Brain {
    root: BoxedBehaviour<World, ActorId>,
    delay: u64,
}

impl Brain {
    /// Drive the owner with `root`, acting every `delay` steps.
    pub fn new(root: impl Behaviour<World, ActorId>, delay: u64) -> Self {
        Self {
            root: root.boxed(),
            delay,
        }
    }

    /// Steps between turns.
    pub fn delay(&self) -> u64 {
        self.delay
    }
}

impl Component<ActorId> for Brain {
    fn name(&self) -> &str {
        "brain"
    }

    fn handle(&mut self, world: &mut World, owner: ActorId, event: &mut Event) {
        if *event != Event::Act {
            return;
        }
        let status = self.root.run(world, owner);
        trace!(actor = %owner, %status, "brain ticked");
        if status.is_done() {
            self.root.reset();
        }
        if world.actor(owner).is_some_and(|a| a.is_placed()) {
            world
                .schedule(owner, self.delay)
                .expect("placed actor has a valid handle");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::entity::{Actor, Cell};

    fn open(cols: u32, rows: u32) -> World {
        World::generate(&WorldConfig::new(cols, rows), |pos, _| Cell::floor(pos), |_| {}).unwrap()
    }

    // ── Combatant ───────────────────────────────────────────────

    #[test]
    fn bump_damages_the_bumped() {
        let mut w = open(2, 1);
        let a = w
            .spawn_at(Actor::default().with_component(Combatant::new(10, 3)), Vector::new(0, 0))
            .unwrap();
        let b = w
            .spawn_at(Actor::default().with_component(Combatant::new(5, 1)), Vector::new(1, 0))
            .unwrap();
        w.move_actor(a, Vector::new(1, 0));
        assert!(w.actor(b).unwrap().is_placed());
        w.move_actor(a, Vector::new(1, 0));
        // 5 - 3 - 3 < 0
        assert!(!w.actor(b).unwrap().is_placed());
        assert_eq!(w.cell_at(Vector::new(1, 0)).and_then(|c| w.cell(c)?.occupant()), None);
    }

    #[test]
    fn death_unschedules() {
        let mut w = open(2, 1);
        let a = w
            .spawn_at(Actor::default().with_component(Combatant::new(1, 1)), Vector::new(0, 0))
            .unwrap();
        w.schedule(a, 4).unwrap();
        w.send_actor(a, &mut Event::Damage { amount: 1, source: None });
        assert!(!w.clock().contains(&a));
        assert!(!w.actor(a).unwrap().is_placed());
    }

    #[test]
    fn surviving_damage_keeps_position() {
        let mut w = open(1, 1);
        let a = w
            .spawn_at(Actor::default().with_component(Combatant::new(4, 1)), Vector::ZERO)
            .unwrap();
        w.send_actor(a, &mut Event::Damage { amount: 3, source: None });
        assert!(w.actor(a).unwrap().is_placed());
    }

    // ── Wander ──────────────────────────────────────────────────

    #[test]
    fn inverted_delay_range_rejected() {
        assert_eq!(
            Wander::new(5, 2),
            Err(WorldError::InvalidDelayRange { min: 5, max: 2 })
        );
        assert_eq!(Wander::new(2, 2).unwrap().delay_range(), (2, 2));
    }

    #[test]
    fn wander_reschedules_within_range() {
        let mut w = open(5, 5);
        let a = w
            .spawn_at(
                Actor::default().with_component(Wander::new(2, 4).unwrap()),
                Vector::new(2, 2),
            )
            .unwrap();
        w.schedule(a, 1).unwrap();
        assert_eq!(w.step().acted, vec![a]);
        let delay = w.clock().delay_of(&a).unwrap();
        assert!((2..=4).contains(&delay), "delay = {delay}");
    }

    #[test]
    fn wander_killed_by_its_own_step_stays_off_the_clock() {
        let mut w = open(3, 3);
        let trap = crate::component::FnComponent::new(
            "trap",
            |w: &mut World, id: ActorId, ev: &mut Event| {
                if let Event::PositionChanged { from: Some(_), .. } = ev {
                    w.remove(id).unwrap();
                }
            },
        );
        let a = w
            .spawn_at(
                Actor::default()
                    .with_component(Wander::new(1, 1).unwrap())
                    .with_component(trap),
                Vector::new(1, 1),
            )
            .unwrap();
        w.schedule(a, 1).unwrap();
        assert_eq!(w.step().acted, vec![a]);
        assert!(!w.actor(a).unwrap().is_placed());
        assert!(!w.clock().contains(&a));
    }

    #[test]
    fn wander_on_a_single_cell_keeps_its_turn() {
        let mut w = open(1, 1);
        let a = w
            .spawn_at(Actor::default().with_component(Wander::new(3, 3).unwrap()), Vector::ZERO)
            .unwrap();
        w.schedule(a, 1).unwrap();
        w.step();
        assert_eq!(w.clock().delay_of(&a), Some(3));
    }

    #[test]
    fn cardinal_wander_never_moves_diagonally() {
        let mut w = open(7, 7);
        let a = w
            .spawn_at(
                Actor::default().with_component(Wander::new(1, 1).unwrap().cardinal()),
                Vector::new(3, 3),
            )
            .unwrap();
        w.schedule(a, 1).unwrap();
        let mut last = w.cell(w.actor(a).unwrap().position().unwrap()).unwrap().offset();
        for _ in 0..50 {
            w.step();
            let now = w.cell(w.actor(a).unwrap().position().unwrap()).unwrap().offset();
            let step = now - last;
            assert!(step == Vector::ZERO || DIRS_4.contains(&step), "step {step}");
            last = now;
        }
    }

    // ── Brain ───────────────────────────────────────────────────

    fn x_of(w: &World, a: ActorId) -> i32 {
        w.cell(w.actor(a).unwrap().position().unwrap()).unwrap().offset().x
    }

    #[test]
    fn brain_ticks_tree_each_turn() {
        let mut w = open(4, 1);
        let a = w
            .spawn_at(
                Actor::default().with_component(Brain::new(walk(Vector::new(1, 0)), 1)),
                Vector::ZERO,
            )
            .unwrap();
        w.schedule(a, 1).unwrap();
        let xs: Vec<i32> = (0..4)
            .map(|_| {
                assert_eq!(w.step().acted, vec![a]);
                x_of(&w, a)
            })
            .collect();
        assert_eq!(xs, vec![1, 2, 3, 3]);
        assert!(w.clock().contains(&a));
    }

    #[test]
    fn brain_resumes_running_tree() {
        let mut w = open(5, 1);
        let mut waited = false;
        let pause = action(move |_: &mut World, _: ActorId| {
            if waited {
                Status::Success
            } else {
                waited = true;
                Status::Running
            }
        });
        let root = delve_btree::Sequence::new(vec![pause.boxed(), walk(Vector::new(1, 0)).boxed()]);
        let a = w
            .spawn_at(Actor::default().with_component(Brain::new(root, 1)), Vector::ZERO)
            .unwrap();
        w.schedule(a, 1).unwrap();
        let xs: Vec<i32> = (0..3)
            .map(|_| {
                w.step();
                x_of(&w, a)
            })
            .collect();
        // Pauses one turn, then walks once per turn.
        assert_eq!(xs, vec![0, 1, 2]);
    }

    #[test]
    fn brain_does_not_reschedule_removed_owner() {
        let mut w = open(2, 1);
        let vanish = delve_btree::func(|w: &mut World, id: ActorId| {
            w.remove(id).unwrap();
        });
        let brain = Brain::new(vanish, 2);
        assert_eq!(brain.delay(), 2);
        let a = w
            .spawn_at(Actor::default().with_component(brain), Vector::ZERO)
            .unwrap();
        w.schedule(a, 1).unwrap();
        w.step();
        assert!(!w.actor(a).unwrap().is_placed());
        assert!(!w.clock().contains(&a));
    }
}
