pub mod settings;
pub mod trade;

pub use settings::SettingsPage;
pub use trade::TradePage;
