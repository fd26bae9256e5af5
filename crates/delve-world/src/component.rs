//! Behaviour components and the per-entity component list.

use crate::event::Event;
use crate::world::World;
use std::fmt;

/// A behaviour attached to one entity.
///
/// `Id` is the owner's handle type: [`ActorId`](delve_core::ActorId) for
/// actor components, [`CellId`](delve_core::CellId) for cell components.
/// A component receives every event sent to its owner and may read or
/// mutate the world, rewrite the event (including any query slot), or
/// send further events.
///
/// While a component runs it is detached from its owner, so an event it
/// sends back to its own owner reaches the owner's other components but
/// not itself.
pub trait Component<Id>: 'static {
    /// Name used in logs and `Debug` output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// React to `event` delivered to `owner`.
    fn handle(&mut self, world: &mut World, owner: Id, event: &mut Event);
}

/// A closure acting as a [`Component`].
pub struct FnComponent<F> {
    name: &'static str,
    f: F,
}

impl<F> FnComponent<F> {
    /// Wrap `f` under the given name.
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<Id, F> Component<Id> for FnComponent<F>
where
    F: FnMut(&mut World, Id, &mut Event) + 'static,
{
    fn name(&self) -> &str {
        self.name
    }

    fn handle(&mut self, world: &mut World, owner: Id, event: &mut Event) {
        (self.f)(world, owner, event)
    }
}

/// Ordered list of components attached to one entity.
///
/// Slots are only ever appended, so a slot index stays valid while its
/// component is checked out for dispatch.
pub struct Components<Id> {
    slots: Vec<Option<Box<dyn Component<Id>>>>,
}

impl<Id: 'static> Components<Id> {
    /// An empty list.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Append a component; it runs after every existing one.
    pub fn push(&mut self, component: Box<dyn Component<Id>>) {
        self.slots.push(Some(component));
    }

    /// Number of attached components.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no component is attached.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Names of the attached components, in order. A component that is
    /// currently running shows as `"<busy>"`.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots
            .iter()
            .map(|slot| slot.as_deref().map_or("<busy>", |c| c.name()))
    }

    pub(crate) fn take(&mut self, index: usize) -> Option<Box<dyn Component<Id>>> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub(crate) fn restore(&mut self, index: usize, component: Box<dyn Component<Id>>) {
        self.slots[index] = Some(component);
    }
}

impl<Id: 'static> Default for Components<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: 'static> fmt::Debug for Components<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::{ActorId, CellId};

    struct Named;

    impl Component<ActorId> for Named {
        fn handle(&mut self, _: &mut World, _: ActorId, _: &mut Event) {}
    }

    #[test]
    fn default_name_is_type_name() {
        assert!(Named.name().ends_with("Named"));
    }

    #[test]
    fn take_and_restore_keep_position() {
        let mut list: Components<ActorId> = Components::new();
        list.push(Box::new(Named));
        list.push(Box::new(FnComponent::new("second", |_: &mut World, _: ActorId, _: &mut Event| {})));
        let first = list.take(0).unwrap();
        assert_eq!(list.names().collect::<Vec<_>>(), vec!["<busy>", "second"]);
        assert!(list.take(0).is_none());
        list.restore(0, first);
        assert_eq!(list.len(), 2);
        assert!(list.names().next().unwrap().ends_with("Named"));
    }

    #[test]
    fn take_past_end_is_none() {
        let mut list: Components<ActorId> = Components::default();
        assert!(list.is_empty());
        assert!(list.take(3).is_none());
        assert_eq!(format!("{list:?}"), "[]");
    }

    fn describe<Id: 'static>(list: &Components<Id>) -> String {
        format!("{list:?}")
    }

    #[test]
    fn list_works_for_both_owner_kinds() {
        let mut cells: Components<CellId> = Components::default();
        cells.push(Box::new(FnComponent::new("trap", |_: &mut World, _: CellId, _: &mut Event| {})));
        let mut actors: Components<ActorId> = Components::default();
        actors.push(Box::new(FnComponent::new("brain", |_: &mut World, _: ActorId, _: &mut Event| {})));
        assert_eq!(describe(&cells), r#"["trap"]"#);
        assert_eq!(describe(&actors), r#"["brain"]"#);
    }
}
