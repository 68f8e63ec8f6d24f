//! Debt payoff simulation and paycheck budgeting engine.
//!
//! Every operation is a pure function of the snapshots handed to it. The
//! caller supplies the reference date, the chosen [`Strategy`] and the
//! extra monthly payment explicitly.

pub mod calculations;
pub mod config;
pub mod models;

pub use calculations::{
    BudgetAllocator, HouseholdSummary, PayoffSimulator, ScenarioExplorer, StrategyComparison,
    build_budget_windows, compare_strategies, derive_extra_payment, normalize_monthly_income,
    scenario_table, simulate_payoff, summarize_household, weighted_apr,
};
pub use config::{EngineConfig, EngineConfigError};
pub use models::*;
