//! Strategy comparison across a range of extra payments.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::max;
use crate::calculations::payoff::PayoffSimulator;
use crate::{Debt, EngineConfig, ScenarioRow, SimulationResult, Strategy};

/// Avalanche and snowball results for the same debts and extra payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub avalanche: SimulationResult,
    pub snowball: SimulationResult,
}

impl StrategyComparison {
    /// The strategy that finishes the job more cheaply.
    ///
    /// A reachable payoff beats an unreachable one, then lower total
    /// interest wins, then fewer months. Ties go to avalanche.
    pub fn recommended(&self) -> Strategy {
        let rank = |r: &SimulationResult| (r.total_interest(), r.months);

        match (self.avalanche.reached(), self.snowball.reached()) {
            (false, true) => Strategy::Snowball,
            (true, true) if rank(&self.snowball) < rank(&self.avalanche) => Strategy::Snowball,
            _ => Strategy::Avalanche,
        }
    }

    pub fn result_for(&self, strategy: Strategy) -> &SimulationResult {
        match strategy {
            Strategy::Avalanche => &self.avalanche,
            Strategy::Snowball => &self.snowball,
        }
    }
}

/// Runs the payoff simulator over a matrix of extra payments and both
/// strategies.
#[derive(Debug, Clone)]
pub struct ScenarioExplorer<'a> {
    config: &'a EngineConfig,
}

impl<'a> ScenarioExplorer<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Simulates both strategies with the same extra payment.
    pub fn compare(
        &self,
        debts: &[Debt],
        extra_monthly: Decimal,
        today: NaiveDate,
    ) -> StrategyComparison {
        let simulator = PayoffSimulator::new(self.config);
        StrategyComparison {
            avalanche: simulator.simulate(debts, extra_monthly, Strategy::Avalanche, today),
            snowball: simulator.simulate(debts, extra_monthly, Strategy::Snowball, today),
        }
    }

    /// One row per bump, in the order given. Each row's extra amount is
    /// `base_extra + bump`, floored at zero.
    pub fn explore(
        &self,
        debts: &[Debt],
        base_extra: Decimal,
        bumps: &[Decimal],
        today: NaiveDate,
    ) -> Vec<ScenarioRow> {
        bumps
            .iter()
            .map(|&bump| {
                let extra_amount = max(base_extra + bump, Decimal::ZERO);
                let StrategyComparison {
                    avalanche,
                    snowball,
                } = self.compare(debts, extra_amount, today);
                ScenarioRow {
                    bump,
                    extra_amount,
                    avalanche,
                    snowball,
                }
            })
            .collect()
    }

    /// [`ScenarioExplorer::explore`] using the configured bump list.
    pub fn explore_configured(
        &self,
        debts: &[Debt],
        base_extra: Decimal,
        today: NaiveDate,
    ) -> Vec<ScenarioRow> {
        self.explore(debts, base_extra, &self.config.scenario_bumps, today)
    }
}

/// Builds a scenario table with the default engine settings.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payoff_core::{Debt, scenario_table};
/// use rust_decimal_macros::dec;
///
/// let debts = vec![Debt {
///     name: "Loan".to_string(),
///     balance: dec!(1200),
///     apr_percent: dec!(12),
///     min_payment: dec!(100),
/// }];
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
///
/// let rows = scenario_table(&debts, dec!(0), &[dec!(0), dec!(100)], today);
///
/// assert_eq!(rows.len(), 2);
/// assert!(rows[1].avalanche.months < rows[0].avalanche.months);
/// ```
pub fn scenario_table(
    debts: &[Debt],
    base_extra: Decimal,
    bumps: &[Decimal],
    today: NaiveDate,
) -> Vec<ScenarioRow> {
    let config = EngineConfig::default();
    ScenarioExplorer::new(&config).explore(debts, base_extra, bumps, today)
}

/// Compares both strategies with the default engine settings.
pub fn compare_strategies(
    debts: &[Debt],
    extra_monthly: Decimal,
    today: NaiveDate,
) -> StrategyComparison {
    let config = EngineConfig::default();
    ScenarioExplorer::new(&config).compare(debts, extra_monthly, today)
}
