//! Plain-text household report.
//!
//! An unreachable payoff is always rendered as a sentence, never as a
//! number, so a reader cannot mistake it for a real month count.

use std::fmt;

use chrono::NaiveDate;
use payoff_core::calculations::common::round_half_up;
use payoff_core::{
    BudgetAllocator, BudgetWindow, HouseholdSummary, PayoffOutcome, ScenarioExplorer, ScenarioRow,
    SimulationResult, Strategy, StrategyComparison, Unreachable, derive_extra_payment,
    summarize_household,
};
use rust_decimal::Decimal;
use tracing::info;

use crate::loader::Household;
use crate::settings::Settings;

pub const UNREACHABLE_MESSAGE: &str = "cannot pay off with current minimums";

/// Everything the report shows, computed once from a household snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseholdReport {
    pub today: NaiveDate,
    pub chosen_strategy: Strategy,
    pub extra_payment: Decimal,
    pub summary: HouseholdSummary,
    pub comparison: StrategyComparison,
    pub scenarios: Vec<ScenarioRow>,
    pub windows: Vec<BudgetWindow>,
}

impl HouseholdReport {
    /// Runs every engine component over `household`.
    pub fn build(
        household: &Household,
        settings: &Settings,
        today: NaiveDate,
    ) -> Self {
        let summary = summarize_household(&household.incomes, &household.bills, &household.debts);
        let extra_payment = derive_extra_payment(summary.cashflow, settings.extra_override);
        info!(
            incomes = household.incomes.len(),
            bills = household.bills.len(),
            debts = household.debts.len(),
            extra = %extra_payment,
            "building household report"
        );

        let explorer = ScenarioExplorer::new(&settings.engine);
        let comparison = explorer.compare(&household.debts, extra_payment, today);
        let scenarios = explorer.explore_configured(&household.debts, extra_payment, today);
        let windows = BudgetAllocator::new(&settings.engine).build(
            &household.incomes,
            &household.bills,
            &household.debts,
        );

        Self {
            today,
            chosen_strategy: settings.strategy,
            extra_payment,
            summary,
            comparison,
            scenarios,
            windows,
        }
    }

    /// The result for the strategy the household chose.
    pub fn chosen_result(&self) -> &SimulationResult {
        self.comparison.result_for(self.chosen_strategy)
    }
}

fn money(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// One-line description of a simulation outcome.
pub fn describe_outcome(result: &SimulationResult) -> String {
    match &result.outcome {
        PayoffOutcome::Reached { .. } if result.months == 0 => "no outstanding debt".to_string(),
        PayoffOutcome::Reached {
            payoff_date: Some(date),
            total_interest,
        } => format!(
            "{} months, debt-free by {date}, interest {}",
            result.months,
            money(*total_interest)
        ),
        PayoffOutcome::Reached {
            payoff_date: None,
            total_interest,
        } => format!(
            "{} months, interest {}",
            result.months,
            money(*total_interest)
        ),
        PayoffOutcome::Unreachable(Unreachable::PaymentsBelowInterest) => {
            UNREACHABLE_MESSAGE.to_string()
        }
        PayoffOutcome::Unreachable(Unreachable::MonthCapExceeded { interest_so_far }) => format!(
            "not paid off within {} months (interest so far {})",
            result.months,
            money(*interest_so_far)
        ),
    }
}

fn scenario_cell(result: &SimulationResult) -> String {
    match &result.outcome {
        PayoffOutcome::Reached { total_interest, .. } => {
            format!("{} mo / {}", result.months, money(*total_interest))
        }
        PayoffOutcome::Unreachable(Unreachable::PaymentsBelowInterest) => "unreachable".to_string(),
        PayoffOutcome::Unreachable(Unreachable::MonthCapExceeded { .. }) => {
            format!("over {} mo", result.months)
        }
    }
}

impl fmt::Display for HouseholdReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = &self.summary;
        writeln!(f, "Household report for {}", self.today)?;
        writeln!(f)?;

        writeln!(f, "Monthly summary")?;
        writeln!(f, "  {:<16}{:>12}", "Income", money(s.monthly_income))?;
        writeln!(f, "  {:<16}{:>12}", "Bills", money(s.monthly_bills))?;
        writeln!(f, "  {:<16}{:>12}", "Debt minimums", money(s.monthly_debt_minimums))?;
        writeln!(f, "  {:<16}{:>12}", "Obligations", money(s.monthly_obligations))?;
        writeln!(f, "  {:<16}{:>12}", "Cashflow", money(s.cashflow))?;
        writeln!(f, "  {:<16}{:>11}%", "Debt-to-income", money(s.dti_percent))?;
        writeln!(f, "  {:<16}{:>12}", "Total debt", money(s.total_debt_balance))?;
        writeln!(f, "  {:<16}{:>11}%", "Weighted APR", money(s.weighted_apr))?;
        writeln!(f)?;

        writeln!(f, "Payoff plan (extra {} per month)", money(self.extra_payment))?;
        for strategy in Strategy::ALL {
            let result = self.comparison.result_for(strategy);
            writeln!(f, "  {:<10}{}", strategy.as_str(), describe_outcome(result))?;
            for payoff in &result.payoff_order {
                writeln!(f, "    month {:>3}: {} paid off", payoff.month, payoff.name)?;
            }
        }
        writeln!(f, "  Chosen: {}", self.chosen_strategy.as_str())?;
        writeln!(f, "  Recommended: {}", self.comparison.recommended().as_str())?;
        writeln!(f)?;

        if !self.scenarios.is_empty() {
            writeln!(f, "Extra payment scenarios")?;
            writeln!(f, "  {:>10}  {:<22}{:<22}", "Extra", "Avalanche", "Snowball")?;
            for row in &self.scenarios {
                write!(f, "  {:>10}  ", money(row.extra_amount))?;
                for strategy in Strategy::ALL {
                    write!(f, "{:<22}", scenario_cell(row.result_for(strategy)))?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Pay periods")?;
        if self.windows.is_empty() {
            writeln!(f, "  no dated paychecks")?;
        }
        for window in &self.windows {
            writeln!(
                f,
                "  {} to {}  {}: income {}, bills {}, debt share {}, left {}",
                window.start_date,
                window.end_date,
                window.income_name,
                money(window.income_amount),
                money(window.bills_total()),
                money(window.debt_min_share),
                money(window.remainder)
            )?;
            for bill in &window.bills {
                let due = bill.due_date.map(|d| d.to_string()).unwrap_or_default();
                writeln!(f, "    {} {} (due {due})", bill.name, money(bill.amount))?;
            }
        }

        Ok(())
    }
}
