//! Monthly household totals: income, obligations, cashflow and DTI.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::apr::weighted_apr;
use crate::calculations::common::{max, percent_of, round_half_up};
use crate::calculations::income::normalize_monthly_income;
use crate::{Bill, Debt, Income};

/// Monthly snapshot of a household's finances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdSummary {
    /// Normalized monthly income across all pay frequencies.
    pub monthly_income: Decimal,

    /// Sum of bill amounts.
    pub monthly_bills: Decimal,

    /// Sum of minimum payments on debts that still carry a balance.
    pub monthly_debt_minimums: Decimal,

    /// Bills plus debt minimums.
    pub monthly_obligations: Decimal,

    /// Income minus obligations. Negative when the household runs short.
    pub cashflow: Decimal,

    /// Obligations as a percentage of income; zero when there is no income.
    pub dti_percent: Decimal,

    pub total_debt_balance: Decimal,

    /// Balance-weighted APR, unrounded.
    pub weighted_apr: Decimal,
}

/// Summarizes a household's monthly position.
///
/// # Example
///
/// ```
/// use payoff_core::{Bill, Debt, Income, PayFrequency, summarize_household};
/// use rust_decimal_macros::dec;
///
/// let incomes = vec![Income {
///     name: "Salary".to_string(),
///     amount: dec!(5000),
///     frequency: PayFrequency::Monthly,
///     next_pay_date: None,
/// }];
/// let bills = vec![Bill {
///     name: "Rent".to_string(),
///     amount: dec!(1500),
///     due_date: None,
/// }];
/// let debts = vec![Debt {
///     name: "Visa".to_string(),
///     balance: dec!(3000),
///     apr_percent: dec!(19.99),
///     min_payment: dec!(500),
/// }];
///
/// let summary = summarize_household(&incomes, &bills, &debts);
///
/// assert_eq!(summary.monthly_obligations, dec!(2000));
/// assert_eq!(summary.cashflow, dec!(3000));
/// assert_eq!(summary.dti_percent, dec!(40));
/// ```
pub fn summarize_household(
    incomes: &[Income],
    bills: &[Bill],
    debts: &[Debt],
) -> HouseholdSummary {
    let monthly_income = normalize_monthly_income(incomes);
    let monthly_bills: Decimal = bills.iter().map(|b| b.amount).sum();
    let monthly_debt_minimums: Decimal = debts
        .iter()
        .filter(|d| !d.is_paid_off())
        .map(|d| d.min_payment)
        .sum();
    let monthly_obligations = monthly_bills + monthly_debt_minimums;

    HouseholdSummary {
        monthly_income,
        monthly_bills,
        monthly_debt_minimums,
        monthly_obligations,
        cashflow: monthly_income - monthly_obligations,
        dti_percent: round_half_up(percent_of(monthly_obligations, monthly_income)),
        total_debt_balance: debts.iter().map(|d| d.balance).sum(),
        weighted_apr: weighted_apr(debts),
    }
}

/// Extra monthly payment to feed the simulator.
///
/// An explicit override wins; otherwise positive cashflow is used and a
/// shortfall yields zero.
pub fn derive_extra_payment(
    cashflow: Decimal,
    extra_override: Option<Decimal>,
) -> Decimal {
    match extra_override {
        Some(amount) => max(amount, Decimal::ZERO),
        None => max(cashflow, Decimal::ZERO),
    }
}
