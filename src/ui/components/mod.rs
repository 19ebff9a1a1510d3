pub mod controls;
pub mod item_picker;
pub mod offer_grid;
pub mod outcome_indicator;
pub mod toast;
