//! Engine calculations.
//!
//! Each component lives in its own module; shared numeric helpers are in
//! [`common`].

pub mod apr;
pub mod budget;
pub mod common;
pub mod income;
pub mod payoff;
pub mod scenario;
pub mod summary;

pub use apr::weighted_apr;
pub use budget::{BudgetAllocator, build_budget_windows};
pub use income::{monthly_equivalent, normalize_monthly_income};
pub use payoff::{PayoffSimulator, simulate_payoff};
pub use scenario::{ScenarioExplorer, StrategyComparison, compare_strategies, scenario_table};
pub use summary::{HouseholdSummary, derive_extra_payment, summarize_household};
