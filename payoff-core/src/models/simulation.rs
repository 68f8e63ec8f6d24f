use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Strategy;

/// Why a simulation could not bring every balance to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unreachable {
    /// Minimums plus extra never exceeded the interest accruing in the
    /// first month, so the total interest is unbounded.
    PaymentsBelowInterest,

    /// The month cap was hit with balances still outstanding.
    MonthCapExceeded { interest_so_far: Decimal },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoffOutcome {
    Reached {
        payoff_date: Option<NaiveDate>,
        total_interest: Decimal,
    },
    Unreachable(Unreachable),
}

/// The month a single debt was paid off during a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtPayoff {
    pub name: String,
    pub month: u32,
}

/// Result of running one payoff simulation.
///
/// `months` is the number of simulated months for a reached payoff, and
/// the month cap for an unreachable one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub strategy: Strategy,
    pub months: u32,
    pub outcome: PayoffOutcome,
    /// Debts in the order their balances reached zero. Debts closed in
    /// the same month are listed in input order.
    pub payoff_order: Vec<DebtPayoff>,
}

impl SimulationResult {
    pub fn reached(&self) -> bool {
        matches!(self.outcome, PayoffOutcome::Reached { .. })
    }

    pub fn payoff_date(&self) -> Option<NaiveDate> {
        match &self.outcome {
            PayoffOutcome::Reached { payoff_date, .. } => *payoff_date,
            PayoffOutcome::Unreachable(_) => None,
        }
    }

    /// Total interest paid, or `None` when it is unbounded.
    ///
    /// A capped simulation reports the interest accrued before the cap.
    pub fn total_interest(&self) -> Option<Decimal> {
        match &self.outcome {
            PayoffOutcome::Reached { total_interest, .. } => Some(*total_interest),
            PayoffOutcome::Unreachable(Unreachable::MonthCapExceeded { interest_so_far }) => {
                Some(*interest_so_far)
            }
            PayoffOutcome::Unreachable(Unreachable::PaymentsBelowInterest) => None,
        }
    }
}

/// One line of a scenario comparison: the extra amount tried and the
/// result of each strategy under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub bump: Decimal,
    pub extra_amount: Decimal,
    pub avalanche: SimulationResult,
    pub snowball: SimulationResult,
}

impl ScenarioRow {
    pub fn result_for(&self, strategy: Strategy) -> &SimulationResult {
        match strategy {
            Strategy::Avalanche => &self.avalanche,
            Strategy::Snowball => &self.snowball,
        }
    }
}
