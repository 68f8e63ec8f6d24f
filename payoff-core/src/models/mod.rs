mod bill;
mod budget_window;
mod debt;
mod income;
mod simulation;
mod strategy;

pub use bill::Bill;
pub use budget_window::BudgetWindow;
pub use debt::Debt;
pub use income::{Income, PayFrequency};
pub use simulation::{DebtPayoff, PayoffOutcome, ScenarioRow, SimulationResult, Unreachable};
pub use strategy::Strategy;
