//! Command-line side of the payoff engine: household CSV intake, TOML
//! settings, logging and report rendering.

pub mod loader;
pub mod logging;
pub mod report;
pub mod settings;

pub use loader::{EntryRecord, EntryType, Household, HouseholdLoadError, HouseholdLoader};
pub use report::HouseholdReport;
pub use settings::{Settings, SettingsError};
