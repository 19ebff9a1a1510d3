//! Trade valuation logic lives here.

pub mod catalog;
pub mod entities;
pub mod evaluation;
pub mod format;
pub mod slot_grid;
pub mod trade_state;
pub mod valuation;

#[allow(unused_imports)]
pub use catalog::{
    parse_catalog, parse_exceptions, Catalog, CatalogError, CatalogFilter, ExceptionSets,
    ExceptionsDocument,
};
#[allow(unused_imports)]
pub use entities::{DisplayMode, Item, Modifier, Rarity, Side};
#[allow(unused_imports)]
pub use evaluation::{evaluate, outcome_label, Outcome, OutcomeLabel, Verdict};
#[allow(unused_imports)]
pub use format::{apply_mode_scale, format_value, HV_DIVISOR};
#[allow(unused_imports)]
pub use slot_grid::{FilledSlot, SlotGrid, GRID_CAPACITY};
#[allow(unused_imports)]
pub use trade_state::{TradeState, TradeSummary};
#[allow(unused_imports)]
pub use valuation::{compute_displayed_value, round_scaled, ExceptionFlags};
