//! Balance-weighted average interest rate.

use rust_decimal::Decimal;

use crate::Debt;

/// Average APR across `debts`, weighting each rate by its balance.
///
/// Returns zero when the total balance is zero or negative, which covers
/// both an empty list and a fully paid-off one.
///
/// # Example
///
/// ```
/// use payoff_core::{Debt, weighted_apr};
/// use rust_decimal_macros::dec;
///
/// let debts = vec![
///     Debt {
///         name: "Store card".to_string(),
///         balance: dec!(100),
///         apr_percent: dec!(10),
///         min_payment: dec!(25),
///     },
///     Debt {
///         name: "Visa".to_string(),
///         balance: dec!(300),
///         apr_percent: dec!(20),
///         min_payment: dec!(35),
///     },
/// ];
///
/// assert_eq!(weighted_apr(&debts), dec!(17.5));
/// ```
pub fn weighted_apr(debts: &[Debt]) -> Decimal {
    let total_balance: Decimal = debts.iter().map(|d| d.balance).sum();
    if total_balance <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    // Σ(balance_i × apr_i) / total keeps a single division.
    let weighted: Decimal = debts.iter().map(|d| d.balance * d.apr_percent).sum();
    weighted / total_balance
}
