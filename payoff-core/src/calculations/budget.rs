//! Paycheck-to-paycheck budget windows.
//!
//! Each dated income opens a window that runs until the next paycheck, or
//! for [`EngineConfig::fallback_window_days`] after the last one. A bill
//! belongs to the window whose half-open range `[start, end)` contains its
//! due date, so a bill due on a payday lands in the window that payday
//! opens. Debt minimums are split evenly across the windows.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::{Bill, BudgetWindow, Debt, EngineConfig, Income};

/// Builds pay-period windows from dated incomes and bills.
#[derive(Debug, Clone)]
pub struct BudgetAllocator<'a> {
    config: &'a EngineConfig,
}

impl<'a> BudgetAllocator<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Returns one window per dated income, ordered by start date.
    ///
    /// Incomes without a next pay date cannot anchor a window and bills
    /// without a due date cannot be placed; both are skipped.
    pub fn build(
        &self,
        incomes: &[Income],
        bills: &[Bill],
        debts: &[Debt],
    ) -> Vec<BudgetWindow> {
        let anchored = self.anchored_incomes(incomes);
        let debt_min_share = self.debt_min_share(debts, anchored.len());

        let dated_bills: Vec<(NaiveDate, &Bill)> = bills
            .iter()
            .filter_map(|b| b.due_date.map(|due| (due, b)))
            .collect();
        if dated_bills.len() < bills.len() {
            debug!(
                skipped = bills.len() - dated_bills.len(),
                "bills without a due date left out of budget windows"
            );
        }

        anchored
            .iter()
            .enumerate()
            .map(|(k, &(start, income))| {
                let end = match anchored.get(k + 1) {
                    Some(&(next_start, _)) => next_start,
                    None => self.fallback_end(start),
                };

                let mut window = BudgetWindow {
                    income_name: income.name.clone(),
                    start_date: start,
                    end_date: end,
                    income_amount: income.amount,
                    bills: Vec::new(),
                    debt_min_share,
                    remainder: Decimal::ZERO,
                };
                let bills: Vec<Bill> = dated_bills
                    .iter()
                    .filter(|(due, _)| window.contains(*due))
                    .map(|(_, bill)| (*bill).clone())
                    .collect();
                window.bills = bills;
                window.remainder = income.amount - window.bills_total() - debt_min_share;
                window
            })
            .collect()
    }

    /// Dated incomes sorted by pay date. Equal dates keep input order.
    fn anchored_incomes<'i>(
        &self,
        incomes: &'i [Income],
    ) -> Vec<(NaiveDate, &'i Income)> {
        let mut anchored: Vec<_> = incomes
            .iter()
            .filter_map(|i| i.next_pay_date.map(|date| (date, i)))
            .collect();
        if anchored.len() < incomes.len() {
            debug!(
                skipped = incomes.len() - anchored.len(),
                "incomes without a pay date cannot anchor a budget window"
            );
        }
        anchored.sort_by_key(|&(date, _)| date);
        anchored
    }

    /// Total minimums of open debts divided evenly across `windows`.
    fn debt_min_share(
        &self,
        debts: &[Debt],
        windows: usize,
    ) -> Decimal {
        let total: Decimal = debts
            .iter()
            .filter(|d| !d.is_paid_off())
            .map(|d| d.min_payment)
            .sum();
        total / Decimal::from(windows.max(1))
    }

    fn fallback_end(
        &self,
        start: NaiveDate,
    ) -> NaiveDate {
        start
            .checked_add_days(Days::new(u64::from(self.config.fallback_window_days)))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Builds budget windows with the default engine settings.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payoff_core::{Bill, Income, PayFrequency, build_budget_windows};
/// use rust_decimal_macros::dec;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 3, d);
/// let incomes = vec![Income {
///     name: "Salary".to_string(),
///     amount: dec!(2000),
///     frequency: PayFrequency::BiWeekly,
///     next_pay_date: day(1),
/// }];
/// let bills = vec![Bill {
///     name: "Phone".to_string(),
///     amount: dec!(60),
///     due_date: day(10),
/// }];
///
/// let windows = build_budget_windows(&incomes, &bills, &[]);
///
/// assert_eq!(windows[0].end_date, day(15).unwrap());
/// assert_eq!(windows[0].remainder, dec!(1940));
/// ```
pub fn build_budget_windows(
    incomes: &[Income],
    bills: &[Bill],
    debts: &[Debt],
) -> Vec<BudgetWindow> {
    let config = EngineConfig::default();
    BudgetAllocator::new(&config).build(incomes, bills, debts)
}
