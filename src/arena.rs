//! Generational storage for bots.
//!
//! Bots live in a [`SlotMap`] keyed by [`BotId`]. Removing a bot bumps its
//! slot version, so an old id can never reach whatever bot recycles that
//! slot later. Iteration follows insertion order rather than slot order;
//! that order is the update and draw order of the level.

use std::fmt;

use slotmap::{new_key_type, Key, SlotMap};

new_key_type! {
    /// Handle to a bot owned by an [`crate::EntityManager`].
    pub struct BotId;
}

impl fmt::Display for BotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.data())
    }
}

/// Slot map plus the insertion-ordered handle list.
#[derive(Debug)]
pub(crate) struct BotArena<T> {
    slots: SlotMap<BotId, T>,
    order: Vec<BotId>,
}

impl<T> Default for BotArena<T> {
    fn default() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }
}

impl<T> BotArena<T> {
    /// Stores `value` at the end of the order.
    pub(crate) fn insert(&mut self, value: T) -> BotId {
        let id = self.slots.insert(value);
        self.order.push(id);
        id
    }

    /// Unlinks and returns the value behind `id`, or `None` for stale ids.
    pub(crate) fn remove(&mut self, id: BotId) -> Option<T> {
        let value = self.slots.remove(id)?;
        self.order.retain(|live| *live != id);
        Some(value)
    }

    pub(crate) fn get(&self, id: BotId) -> Option<&T> {
        self.slots.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: BotId) -> Option<&mut T> {
        self.slots.get_mut(id)
    }

    pub(crate) fn contains(&self, id: BotId) -> bool {
        self.slots.contains_key(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Ids in insertion order.
    pub(crate) fn ids(&self) -> &[BotId] {
        &self.order
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (BotId, &T)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.slots.get(id).map(|value| (id, value)))
    }

    /// Visits every value mutably, in insertion order.
    pub(crate) fn for_each_mut(&mut self, mut visit: impl FnMut(BotId, &mut T)) {
        for &id in &self.order {
            if let Some(value) = self.slots.get_mut(id) {
                visit(id, value);
            }
        }
    }

    /// Removes every value in insertion order; outstanding ids go stale.
    pub(crate) fn drain(&mut self) -> Vec<(BotId, T)> {
        std::mem::take(&mut self.order)
            .into_iter()
            .filter_map(|id| self.slots.remove(id).map(|value| (id, value)))
            .collect()
    }
}
