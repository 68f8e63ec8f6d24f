//! Month-by-month debt payoff simulation.
//!
//! # Monthly tick
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Accrue `balance × apr / 100 / 12` on every open debt |
//! | 2    | Pay `min(min_payment, balance)` on every open debt |
//! | 3    | Cascade the extra payment: pay the top-ranked debt, re-rank, repeat |
//!
//! Ticks repeat until every balance is at or below
//! [`EngineConfig::epsilon`], or until [`EngineConfig::max_months`] is
//! exceeded. Before the first tick the simulator checks that the combined
//! payments outpace the interest accruing right now; if they do not, the
//! run stops immediately as [`Unreachable::PaymentsBelowInterest`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use payoff_core::{Debt, EngineConfig, PayoffSimulator, Strategy};
//! use rust_decimal_macros::dec;
//!
//! let debts = vec![Debt {
//!     name: "Credit union loan".to_string(),
//!     balance: dec!(1200),
//!     apr_percent: dec!(12),
//!     min_payment: dec!(100),
//! }];
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//!
//! let config = EngineConfig::default();
//! let result =
//!     PayoffSimulator::new(&config).simulate(&debts, dec!(0), Strategy::Avalanche, today);
//!
//! assert!(result.reached());
//! assert_eq!(result.months, 13);
//! assert_eq!(result.total_interest(), Some(dec!(84.78)));
//! assert_eq!(result.payoff_date(), NaiveDate::from_ymd_opt(2026, 2, 1));
//! ```

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use crate::calculations::common::{max, round_half_up};
use crate::{
    Debt, DebtPayoff, EngineConfig, PayoffOutcome, SimulationResult, Strategy, Unreachable,
};

/// Simulation-local copy of a debt. The caller's records are never touched.
#[derive(Debug, Clone)]
struct WorkingDebt<'d> {
    name: &'d str,
    balance: Decimal,
    apr_percent: Decimal,
    monthly_rate: Decimal,
    min_payment: Decimal,
    paid_off: bool,
}

impl<'d> WorkingDebt<'d> {
    fn from_debt(debt: &'d Debt) -> Self {
        Self {
            name: &debt.name,
            balance: debt.balance,
            apr_percent: debt.apr_percent,
            monthly_rate: debt.apr_percent / Decimal::ONE_HUNDRED / Decimal::from(12),
            min_payment: debt.min_payment,
            paid_off: false,
        }
    }
}

/// Runs payoff simulations under a fixed [`EngineConfig`].
#[derive(Debug, Clone)]
pub struct PayoffSimulator<'a> {
    config: &'a EngineConfig,
}

impl<'a> PayoffSimulator<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Simulates paying off `debts` with `extra_monthly` on top of the
    /// minimums, directing the extra according to `strategy`.
    ///
    /// `today` anchors the payoff date. A negative extra is treated as zero.
    pub fn simulate(
        &self,
        debts: &[Debt],
        extra_monthly: Decimal,
        strategy: Strategy,
        today: NaiveDate,
    ) -> SimulationResult {
        let extra = max(extra_monthly, Decimal::ZERO);
        let mut working = self.working_set(debts);

        if working.is_empty() {
            debug!(strategy = strategy.as_str(), "no outstanding balances to simulate");
            return SimulationResult {
                strategy,
                months: 0,
                outcome: PayoffOutcome::Reached {
                    payoff_date: None,
                    total_interest: Decimal::ZERO,
                },
                payoff_order: Vec::new(),
            };
        }

        let interest_floor = self.interest_floor(&working);
        let payment_floor = self.payment_floor(&working, extra);
        if payment_floor <= interest_floor {
            warn!(
                strategy = strategy.as_str(),
                interest_floor = %interest_floor,
                payment_floor = %payment_floor,
                "Payments do not outpace interest; payoff is unreachable"
            );
            return self.unreachable(strategy, Unreachable::PaymentsBelowInterest, Vec::new());
        }

        let mut total_interest = Decimal::ZERO;
        let mut months: u32 = 0;
        let mut payoff_order = Vec::new();

        while self.has_outstanding(&working) {
            months += 1;
            if months > self.config.max_months {
                warn!(
                    strategy = strategy.as_str(),
                    max_months = self.config.max_months,
                    interest_so_far = %round_half_up(total_interest),
                    "Month cap reached with balances outstanding"
                );
                return self.unreachable(
                    strategy,
                    Unreachable::MonthCapExceeded {
                        interest_so_far: round_half_up(total_interest),
                    },
                    payoff_order,
                );
            }

            total_interest += self.accrue_interest(&mut working);
            self.pay_minimums(&mut working);
            self.cascade_extra(&mut working, extra, strategy);
            self.record_payoffs(&mut working, months, &mut payoff_order);
        }

        let total_interest = round_half_up(total_interest);
        debug!(
            strategy = strategy.as_str(),
            months,
            total_interest = %total_interest,
            "payoff simulation complete"
        );

        SimulationResult {
            strategy,
            months,
            outcome: PayoffOutcome::Reached {
                payoff_date: self.payoff_date(months, today),
                total_interest,
            },
            payoff_order,
        }
    }

    /// Copies every debt that still has a balance above epsilon.
    fn working_set<'d>(
        &self,
        debts: &'d [Debt],
    ) -> Vec<WorkingDebt<'d>> {
        debts
            .iter()
            .filter(|d| d.balance > self.config.epsilon)
            .map(WorkingDebt::from_debt)
            .collect()
    }

    /// Interest that would accrue this month on the opening balances.
    fn interest_floor(
        &self,
        working: &[WorkingDebt<'_>],
    ) -> Decimal {
        working.iter().map(|d| d.balance * d.monthly_rate).sum()
    }

    /// Minimum payments plus the extra amount.
    fn payment_floor(
        &self,
        working: &[WorkingDebt<'_>],
        extra: Decimal,
    ) -> Decimal {
        working.iter().map(|d| d.min_payment).sum::<Decimal>() + extra
    }

    fn has_outstanding(
        &self,
        working: &[WorkingDebt<'_>],
    ) -> bool {
        working.iter().any(|d| d.balance > self.config.epsilon)
    }

    /// Step 1: adds a month of interest to each open balance and returns
    /// the interest added.
    fn accrue_interest(
        &self,
        working: &mut [WorkingDebt<'_>],
    ) -> Decimal {
        let mut accrued = Decimal::ZERO;
        for debt in working.iter_mut().filter(|d| d.balance > Decimal::ZERO) {
            let interest = debt.balance * debt.monthly_rate;
            debt.balance += interest;
            accrued += interest;
        }
        accrued
    }

    /// Step 2: pays each open debt's minimum, capped at its balance.
    fn pay_minimums(
        &self,
        working: &mut [WorkingDebt<'_>],
    ) {
        for debt in working.iter_mut().filter(|d| d.balance > Decimal::ZERO) {
            debt.balance -= debt.min_payment.min(debt.balance);
        }
    }

    /// Step 3: spends `extra` on the highest-priority open debt, re-ranking
    /// after every payment since a debt can close mid-cascade.
    fn cascade_extra(
        &self,
        working: &mut [WorkingDebt<'_>],
        extra: Decimal,
        strategy: Strategy,
    ) {
        let epsilon = self.config.epsilon;
        let mut remaining = extra;

        while remaining > epsilon {
            let Some(target) = working
                .iter_mut()
                .filter(|d| d.balance > epsilon)
                .min_by_key(|d| strategy.priority_key(d.balance, d.apr_percent))
            else {
                break;
            };

            let payment = remaining.min(target.balance);
            target.balance -= payment;
            remaining -= payment;
        }
    }

    /// Notes every debt that closed during `month`. Same-month closures
    /// keep input order.
    fn record_payoffs(
        &self,
        working: &mut [WorkingDebt<'_>],
        month: u32,
        payoff_order: &mut Vec<DebtPayoff>,
    ) {
        for debt in working
            .iter_mut()
            .filter(|d| !d.paid_off && d.balance <= self.config.epsilon)
        {
            debt.paid_off = true;
            payoff_order.push(DebtPayoff {
                name: debt.name.to_string(),
                month,
            });
        }
    }

    /// `today + round(months × days_per_month)` days, rounding half to even.
    fn payoff_date(
        &self,
        months: u32,
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        let days = (Decimal::from(months) * self.config.days_per_month)
            .round()
            .to_u64()?;
        today.checked_add_days(Days::new(days))
    }

    fn unreachable(
        &self,
        strategy: Strategy,
        reason: Unreachable,
        payoff_order: Vec<DebtPayoff>,
    ) -> SimulationResult {
        SimulationResult {
            strategy,
            months: self.config.max_months,
            outcome: PayoffOutcome::Unreachable(reason),
            payoff_order,
        }
    }
}

/// Simulates a payoff with the default engine settings and the given month cap.
pub fn simulate_payoff(
    debts: &[Debt],
    extra_monthly: Decimal,
    strategy: Strategy,
    max_months: u32,
    today: NaiveDate,
) -> SimulationResult {
    let config = EngineConfig {
        max_months,
        ..EngineConfig::default()
    };
    PayoffSimulator::new(&config).simulate(debts, extra_monthly, strategy, today)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn debt(
        name: &str,
        balance: Decimal,
        apr_percent: Decimal,
        min_payment: Decimal,
    ) -> Debt {
        Debt {
            name: name.to_string(),
            balance,
            apr_percent,
            min_payment,
        }
    }

    fn mixed_debts() -> Vec<Debt> {
        vec![
            debt("Visa", dec!(5000), dec!(24.99), dec!(100)),
            debt("Store card", dec!(1500), dec!(12), dec!(50)),
            debt("Car loan", dec!(8000), dec!(6.5), dec!(150)),
        ]
    }

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // Empty and paid-off inputs
    // =========================================================================

    #[test]
    fn empty_debts_are_reached_immediately() {
        let result = simulate_payoff(&[], dec!(250), Strategy::Avalanche, 600, today());

        assert_eq!(result.months, 0);
        assert!(result.reached());
        assert_eq!(result.total_interest(), Some(Decimal::ZERO));
        assert_eq!(result.payoff_date(), None);
        assert!(result.payoff_order.is_empty());
    }

    #[test]
    fn paid_off_debts_are_ignored() {
        let debts = vec![
            debt("Old card", dec!(0), dec!(22), dec!(35)),
            debt("Rounding dust", dec!(0.01), dec!(22), dec!(0)),
        ];

        let result = simulate_payoff(&debts, dec!(0), Strategy::Snowball, 600, today());

        assert_eq!(result.months, 0);
        assert!(result.reached());
        assert_eq!(result.payoff_date(), None);
    }

    // =========================================================================
    // Single debt amortization
    // =========================================================================

    #[test]
    fn single_debt_matches_reference_amortization() {
        let debts = vec![debt("Loan", dec!(1200), dec!(12), dec!(100))];

        let result = simulate_payoff(&debts, dec!(0), Strategy::Avalanche, 600, today());

        assert!(result.reached());
        assert_eq!(result.months, 13);
        assert_eq!(result.total_interest(), Some(dec!(84.78)));
        // 13 × 30.4375 = 395.6875 → 396 days
        assert_eq!(result.payoff_date(), NaiveDate::from_ymd_opt(2026, 2, 1));
        assert_eq!(
            result.payoff_order,
            vec![DebtPayoff {
                name: "Loan".to_string(),
                month: 13,
            }]
        );
    }

    #[test]
    fn zero_rate_debt_accrues_no_interest() {
        let debts = vec![debt("Family loan", dec!(1000), dec!(0), dec!(100))];

        let result = simulate_payoff(&debts, dec!(0), Strategy::Avalanche, 600, today());

        assert_eq!(result.months, 10);
        assert_eq!(result.total_interest(), Some(Decimal::ZERO));
    }

    #[test]
    fn extra_payment_shortens_payoff() {
        let debts = vec![debt("Loan", dec!(1200), dec!(12), dec!(100))];

        let base = simulate_payoff(&debts, dec!(0), Strategy::Avalanche, 600, today());
        let boosted = simulate_payoff(&debts, dec!(200), Strategy::Avalanche, 600, today());

        assert!(boosted.months < base.months);
        assert!(boosted.total_interest() < base.total_interest());
    }

    #[test]
    fn negative_extra_is_treated_as_zero() {
        let debts = vec![debt("Loan", dec!(1200), dec!(12), dec!(100))];

        let negative = simulate_payoff(&debts, dec!(-75), Strategy::Avalanche, 600, today());
        let zero = simulate_payoff(&debts, dec!(0), Strategy::Avalanche, 600, today());

        assert_eq!(negative, zero);
    }

    // =========================================================================
    // Unreachable payoff
    // =========================================================================

    #[test]
    fn minimum_below_interest_is_unreachable() {
        let _guard = init_test_tracing();
        let debts = vec![debt("Payday loan", dec!(1000), dec!(24), dec!(1))];

        let result = simulate_payoff(&debts, dec!(0), Strategy::Avalanche, 600, today());

        assert!(!result.reached());
        assert_eq!(result.months, 600);
        assert_eq!(result.total_interest(), None);
        assert_eq!(result.payoff_date(), None);
        assert_eq!(
            result.outcome,
            PayoffOutcome::Unreachable(Unreachable::PaymentsBelowInterest)
        );
    }

    #[test]
    fn minimum_equal_to_interest_is_unreachable() {
        // 1000 × 1% = 10 interest against a 10 minimum
        let debts = vec![debt("Loan", dec!(1000), dec!(12), dec!(10))];

        let result = simulate_payoff(&debts, dec!(0), Strategy::Snowball, 600, today());

        assert_eq!(
            result.outcome,
            PayoffOutcome::Unreachable(Unreachable::PaymentsBelowInterest)
        );
    }

    #[test]
    fn extra_payment_can_make_payoff_reachable() {
        let debts = vec![debt("Payday loan", dec!(1000), dec!(24), dec!(1))];

        let result = simulate_payoff(&debts, dec!(100), Strategy::Avalanche, 600, today());

        assert!(result.reached());
    }

    #[test]
    fn month_cap_reports_partial_interest() {
        let _guard = init_test_tracing();
        // Barely outpaces interest, so it needs far more than 600 months.
        let debts = vec![debt("Loan", dec!(1000), dec!(12), dec!(10.01))];

        let result = simulate_payoff(&debts, dec!(0), Strategy::Avalanche, 600, today());

        assert!(!result.reached());
        assert_eq!(result.months, 600);
        assert_eq!(result.payoff_date(), None);
        match result.outcome {
            PayoffOutcome::Unreachable(Unreachable::MonthCapExceeded { interest_so_far }) => {
                assert!(interest_so_far > dec!(5000));
            }
            other => panic!("expected MonthCapExceeded, got {other:#?}"),
        }
    }

    #[test]
    fn small_month_cap_stops_early() {
        let debts = vec![debt("Loan", dec!(1200), dec!(12), dec!(100))];

        let result = simulate_payoff(&debts, dec!(0), Strategy::Avalanche, 5, today());

        assert!(!result.reached());
        assert_eq!(result.months, 5);
        assert!(result.total_interest().unwrap() > Decimal::ZERO);
    }

    #[test]
    fn month_cap_equal_to_needed_months_is_reached() {
        let debts = vec![debt("Loan", dec!(1200), dec!(12), dec!(100))];

        let result = simulate_payoff(&debts, dec!(0), Strategy::Avalanche, 13, today());

        assert!(result.reached());
        assert_eq!(result.months, 13);
    }

    // =========================================================================
    // Strategies
    // =========================================================================

    #[test]
    fn avalanche_on_mixed_debts_matches_reference() {
        let result = simulate_payoff(&mixed_debts(), dec!(300), Strategy::Avalanche, 600, today());

        assert_eq!(result.months, 32);
        assert_eq!(result.total_interest(), Some(dec!(1966.08)));
        let order: Vec<_> = result
            .payoff_order
            .iter()
            .map(|p| (p.name.as_str(), p.month))
            .collect();
        assert_eq!(order, vec![("Visa", 15), ("Store card", 18), ("Car loan", 32)]);
    }

    #[test]
    fn snowball_on_mixed_debts_matches_reference() {
        let result = simulate_payoff(&mixed_debts(), dec!(300), Strategy::Snowball, 600, today());

        assert_eq!(result.months, 33);
        assert_eq!(result.total_interest(), Some(dec!(2303.37)));
        let order: Vec<_> = result
            .payoff_order
            .iter()
            .map(|p| (p.name.as_str(), p.month))
            .collect();
        assert_eq!(order, vec![("Store card", 5), ("Visa", 19), ("Car loan", 33)]);
    }

    #[test]
    fn avalanche_never_pays_more_interest_than_snowball() {
        let debts = mixed_debts();

        for extra in [dec!(50), dec!(300), dec!(1000)] {
            let avalanche = simulate_payoff(&debts, extra, Strategy::Avalanche, 600, today());
            let snowball = simulate_payoff(&debts, extra, Strategy::Snowball, 600, today());

            assert!(
                avalanche.total_interest() <= snowball.total_interest(),
                "avalanche paid more interest with extra {extra}"
            );
        }
    }

    #[test]
    fn extra_cascades_into_next_debt_when_target_closes() {
        let debts = vec![
            debt("Small", dec!(100), dec!(20), dec!(10)),
            debt("Large", dec!(1000), dec!(5), dec!(20)),
        ];

        let result = simulate_payoff(&debts, dec!(200), Strategy::Avalanche, 600, today());

        assert_eq!(
            result.payoff_order[0],
            DebtPayoff {
                name: "Small".to_string(),
                month: 1,
            }
        );
        assert!(result.reached());
    }

    #[test]
    fn same_month_closures_keep_input_order() {
        let debts = vec![
            debt("Zero rate", dec!(50), dec!(0), dec!(100)),
            debt("High rate", dec!(40), dec!(30), dec!(100)),
        ];

        let result = simulate_payoff(&debts, dec!(0), Strategy::Avalanche, 600, today());

        let order: Vec<_> = result
            .payoff_order
            .iter()
            .map(|p| (p.name.as_str(), p.month))
            .collect();
        assert_eq!(order, vec![("Zero rate", 1), ("High rate", 1)]);
    }

    #[test]
    fn result_records_requested_strategy() {
        let debts = mixed_debts();

        let result = simulate_payoff(&debts, dec!(300), Strategy::Snowball, 600, today());

        assert_eq!(result.strategy, Strategy::Snowball);
    }

    // =========================================================================
    // Purity
    // =========================================================================

    #[test]
    fn repeated_runs_are_identical_and_leave_input_untouched() {
        let debts = mixed_debts();
        let snapshot = debts.clone();

        let first = simulate_payoff(&debts, dec!(300), Strategy::Avalanche, 600, today());
        let second = simulate_payoff(&debts, dec!(300), Strategy::Avalanche, 600, today());

        assert_eq!(first, second);
        assert_eq!(debts, snapshot);
    }

    // =========================================================================
    // Payoff date
    // =========================================================================

    #[test]
    fn payoff_date_rounds_half_to_even() {
        let config = EngineConfig::default();
        let simulator = PayoffSimulator::new(&config);

        // 8 × 30.4375 = 243.5 → 244, 24 × 30.4375 = 730.5 → 730
        assert_eq!(
            simulator.payoff_date(8, today()),
            today().checked_add_days(Days::new(244))
        );
        assert_eq!(
            simulator.payoff_date(24, today()),
            today().checked_add_days(Days::new(730))
        );
    }

    #[test]
    fn custom_days_per_month_is_respected() {
        let config = EngineConfig {
            days_per_month: dec!(30),
            ..EngineConfig::default()
        };
        let debts = vec![debt("Loan", dec!(1200), dec!(12), dec!(100))];

        let result =
            PayoffSimulator::new(&config).simulate(&debts, dec!(0), Strategy::Avalanche, today());

        // 13 × 30 = 390 days
        assert_eq!(result.payoff_date(), NaiveDate::from_ymd_opt(2026, 1, 26));
    }
}
