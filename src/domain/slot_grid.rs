#![allow(dead_code)]

//! Fixed nine-slot grid for one side of a trade.
//!
//! Filled slots always form a contiguous prefix. Placement redirects to the
//! first empty slot and removal shifts later slots down, so no gap can
//! appear. Indices outside the grid and placing into a full grid are caller
//! bugs and panic.

use super::entities::{DisplayMode, Modifier};
use super::format::apply_mode_scale;

pub const GRID_CAPACITY: usize = 9;

/// Contents of an occupied slot, frozen at selection time.
#[derive(Clone, Debug, PartialEq)]
pub struct FilledSlot {
    pub item_name: String,
    pub base_value: f64,
    pub displayed_value: f64,
    /// Modifier that was active when the item was picked.
    pub modifier: Modifier,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotGrid {
    slots: [Option<FilledSlot>; GRID_CAPACITY],
}

impl SlotGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_empty_index(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Stores `slot` at `target_index`, or at the first empty slot when that
    /// comes earlier. Returns the index actually used.
    pub fn place(&mut self, target_index: usize, slot: FilledSlot) -> usize {
        assert!(
            target_index < GRID_CAPACITY,
            "slot index {target_index} out of range"
        );
        let first_empty = self
            .first_empty_index()
            .unwrap_or_else(|| panic!("cannot place {} into a full grid", slot.item_name));
        let committed = target_index.min(first_empty);
        assert!(
            self.slots[committed].is_none(),
            "slot {committed} is already filled"
        );
        self.slots[committed] = Some(slot);
        committed
    }

    /// Clears `index` and shifts every later filled slot down by one,
    /// keeping their relative order.
    pub fn remove_at(&mut self, index: usize) -> Option<FilledSlot> {
        assert!(index < GRID_CAPACITY, "slot index {index} out of range");
        let removed = self.slots[index].take();

        let survivors: Vec<FilledSlot> = self.slots[index + 1..]
            .iter_mut()
            .filter_map(Option::take)
            .collect();
        for (offset, slot) in survivors.into_iter().enumerate() {
            self.slots[index + offset] = Some(slot);
        }

        removed
    }

    pub fn get(&self, index: usize) -> Option<&FilledSlot> {
        assert!(index < GRID_CAPACITY, "slot index {index} out of range");
        self.slots[index].as_ref()
    }

    pub fn is_filled(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.first_empty_index().is_none()
    }

    pub fn slots(&self) -> &[Option<FilledSlot>; GRID_CAPACITY] {
        &self.slots
    }

    pub fn total(&self, mode: DisplayMode) -> f64 {
        self.slots
            .iter()
            .flatten()
            .map(|slot| apply_mode_scale(slot.displayed_value, mode))
            .sum()
    }

    pub fn reset(&mut self) {
        self.slots = Default::default();
    }
}
