#![allow(dead_code)]

use tracing::debug;

use super::catalog::ExceptionSets;
use super::entities::{DisplayMode, Item, Modifier, Side};
use super::evaluation::{evaluate, Outcome};
use super::slot_grid::{FilledSlot, SlotGrid};
use super::valuation::{compute_displayed_value, sanitize_base_value};

/// Totals and verdict derived from the current grids and display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TradeSummary {
    pub your_total: f64,
    pub their_total: f64,
    pub outcome: Outcome,
}

/// Everything the trade page mutates. Every mutation goes through a method
/// here and refreshes [`TradeSummary`] before returning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TradeState {
    your_offer: SlotGrid,
    their_offer: SlotGrid,
    modifier: Modifier,
    mode: DisplayMode,
    exceptions: ExceptionSets,
    summary: TradeSummary,
}

impl TradeState {
    pub fn new(mode: DisplayMode) -> Self {
        let mut state = Self {
            mode,
            ..Self::default()
        };
        state.recompute();
        state
    }

    pub fn load_exceptions(&mut self, exceptions: ExceptionSets) {
        debug!(
            full = exceptions.full_value_count(),
            eighty_twenty = exceptions.eighty_twenty_count(),
            "exception sets installed"
        );
        self.exceptions = exceptions;
    }

    pub fn exceptions(&self) -> &ExceptionSets {
        &self.exceptions
    }

    /// Value `item` would be stored with if picked right now.
    pub fn preview_value(&self, item: &Item) -> f64 {
        compute_displayed_value(
            sanitize_base_value(item.value),
            item.rarity,
            self.modifier,
            self.exceptions.lookup(&item.name),
        )
    }

    /// Places `item` into the first empty slot of `side`.
    pub fn select_item(&mut self, side: Side, item: &Item) -> usize {
        let target = self
            .grid(side)
            .first_empty_index()
            .unwrap_or_else(|| panic!("{} is already full", side.title()));
        self.select_item_at(side, target, item)
    }

    /// Places `item` at the clicked slot, redirected to an earlier empty slot
    /// when one exists. The modifier tag and value are frozen here.
    pub fn select_item_at(&mut self, side: Side, index: usize, item: &Item) -> usize {
        let base_value = sanitize_base_value(item.value);
        let slot = FilledSlot {
            item_name: item.name.clone(),
            base_value,
            displayed_value: self.preview_value(item),
            modifier: self.modifier,
        };
        let committed = self.grid_mut(side).place(index, slot);
        debug!(side = ?side, index = committed, item = %item.name, "item placed");
        self.recompute();
        committed
    }

    pub fn remove_item(&mut self, side: Side, index: usize) -> Option<FilledSlot> {
        let removed = self.grid_mut(side).remove_at(index);
        self.recompute();
        removed
    }

    /// Picking the active modifier again clears it. Already placed slots keep
    /// the value they were picked with.
    pub fn set_modifier(&mut self, modifier: Modifier) {
        self.modifier = if self.modifier == modifier {
            Modifier::None
        } else {
            modifier
        };
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.recompute();
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Empties both grids. Modifier and display mode are left alone.
    pub fn reset(&mut self) {
        self.your_offer.reset();
        self.their_offer.reset();
        self.recompute();
    }

    pub fn totals(&self) -> (f64, f64) {
        (self.summary.your_total, self.summary.their_total)
    }

    pub fn summary(&self) -> TradeSummary {
        self.summary
    }

    pub fn grid(&self, side: Side) -> &SlotGrid {
        match side {
            Side::YourOffer => &self.your_offer,
            Side::TheirOffer => &self.their_offer,
        }
    }

    pub fn slot(&self, side: Side, index: usize) -> Option<&FilledSlot> {
        self.grid(side).get(index)
    }

    fn grid_mut(&mut self, side: Side) -> &mut SlotGrid {
        match side {
            Side::YourOffer => &mut self.your_offer,
            Side::TheirOffer => &mut self.their_offer,
        }
    }

    fn recompute(&mut self) {
        let your_total = self.your_offer.total(self.mode);
        let their_total = self.their_offer.total(self.mode);
        self.summary = TradeSummary {
            your_total,
            their_total,
            outcome: evaluate(your_total, their_total),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Rarity;
    use crate::domain::evaluation::Verdict;
    use crate::domain::slot_grid::GRID_CAPACITY;

    fn staff() -> Item {
        Item::new("Ember Staff", 200.0, Rarity::Legendary)
    }

    fn boot() -> Item {
        Item::new("Old Boot", 30.0, Rarity::Common)
    }

    #[test]
    fn fresh_state_is_empty() {
        let state = TradeState::new(DisplayMode::Fv);
        assert_eq!(state.totals(), (0.0, 0.0));
        assert_eq!(state.summary().outcome.verdict, Verdict::Empty);
        assert_eq!(state.modifier(), Modifier::None);
    }

    #[test]
    fn selection_updates_totals_and_verdict() {
        let mut state = TradeState::new(DisplayMode::Fv);
        state.select_item(Side::YourOffer, &boot());
        state.select_item(Side::TheirOffer, &staff());
        assert_eq!(state.totals(), (30.0, 200.0));
        let outcome = state.summary().outcome;
        assert_eq!(outcome.verdict, Verdict::Win);
        assert_eq!(outcome.difference_magnitude, 170.0);
    }

    #[test]
    fn modifier_toggles_off_when_reselected() {
        let mut state = TradeState::new(DisplayMode::Fv);
        state.set_modifier(Modifier::Hammer);
        assert_eq!(state.modifier(), Modifier::Hammer);
        state.set_modifier(Modifier::Gem);
        assert_eq!(state.modifier(), Modifier::Gem);
        state.set_modifier(Modifier::Gem);
        assert_eq!(state.modifier(), Modifier::None);
    }

    #[test]
    fn slot_values_are_frozen_at_selection() {
        let mut state = TradeState::new(DisplayMode::Fv);
        state.set_modifier(Modifier::Hammer);
        state.select_item(Side::YourOffer, &staff());
        state.set_modifier(Modifier::Gem);
        state.select_item(Side::YourOffer, &staff());

        let first = state.slot(Side::YourOffer, 0).cloned().expect("slot 0 filled");
        let second = state.slot(Side::YourOffer, 1).cloned().expect("slot 1 filled");
        assert_eq!((first.displayed_value, first.modifier), (140.0, Modifier::Hammer));
        assert_eq!((second.displayed_value, second.modifier), (60.0, Modifier::Gem));
        assert_eq!(first.base_value, 200.0);
        assert_eq!(state.totals().0, 200.0);
    }

    #[test]
    fn exceptions_are_resolved_by_lowercased_name() {
        let mut state = TradeState::new(DisplayMode::Fv);
        state.load_exceptions(ExceptionSets::new(["ember staff"], ["OLD BOOT"]));
        state.set_modifier(Modifier::Gem);
        assert_eq!(state.preview_value(&staff()), 200.0);
        assert_eq!(state.preview_value(&boot()), 24.0);
        state.set_modifier(Modifier::Hammer);
        assert_eq!(state.preview_value(&boot()), 6.0);
    }

    #[test]
    fn clicked_slot_is_redirected_to_first_empty() {
        let mut state = TradeState::new(DisplayMode::Fv);
        state.select_item(Side::TheirOffer, &boot());
        let committed = state.select_item_at(Side::TheirOffer, 5, &staff());
        assert_eq!(committed, 1);
        assert_eq!(state.grid(Side::TheirOffer).filled_count(), 2);
    }

    #[test]
    fn removal_compacts_and_recomputes() {
        let mut state = TradeState::new(DisplayMode::Fv);
        state.select_item(Side::YourOffer, &boot());
        state.select_item(Side::YourOffer, &staff());
        state.select_item(Side::YourOffer, &boot());

        let removed = state.remove_item(Side::YourOffer, 0).map(|s| s.item_name);
        assert_eq!(removed.as_deref(), Some("Old Boot"));
        assert_eq!(
            state.slot(Side::YourOffer, 0).map(|s| s.item_name.as_str()),
            Some("Ember Staff")
        );
        assert_eq!(state.totals().0, 230.0);
    }

    #[test]
    fn hv_mode_scales_totals_at_read_time() {
        let mut state = TradeState::new(DisplayMode::Fv);
        state.select_item(Side::YourOffer, &Item::new("Lantern", 120.0, Rarity::Rare));
        assert_eq!(state.totals().0, 120.0);
        state.toggle_mode();
        assert_eq!(state.mode(), DisplayMode::Hv);
        assert_eq!(state.totals().0, 3.0);
        assert_eq!(state.slot(Side::YourOffer, 0).map(|s| s.displayed_value), Some(120.0));
    }

    #[test]
    fn reset_clears_grids_but_keeps_settings() {
        let mut state = TradeState::new(DisplayMode::Hv);
        state.set_modifier(Modifier::Gem);
        state.select_item(Side::YourOffer, &boot());
        state.select_item(Side::TheirOffer, &staff());
        state.reset();
        let once = state.clone();
        state.reset();
        assert_eq!(state, once);
        assert_eq!(state.totals(), (0.0, 0.0));
        assert_eq!(state.modifier(), Modifier::Gem);
        assert_eq!(state.mode(), DisplayMode::Hv);
    }

    #[test]
    fn negative_catalog_values_count_as_zero() {
        let mut state = TradeState::new(DisplayMode::Fv);
        state.select_item(Side::YourOffer, &Item::new("Debt", -50.0, Rarity::Common));
        assert_eq!(state.totals().0, 0.0);
        assert_eq!(state.summary().outcome.verdict, Verdict::Empty);
    }

    #[test]
    #[should_panic(expected = "already full")]
    fn selecting_into_full_side_panics() {
        let mut state = TradeState::new(DisplayMode::Fv);
        for _ in 0..=GRID_CAPACITY {
            state.select_item(Side::YourOffer, &boot());
        }
    }
}
