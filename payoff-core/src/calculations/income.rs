//! Monthly-equivalent income.

use rust_decimal::Decimal;

use crate::Income;
use crate::calculations::common::round_half_up;

const MONTHS_PER_YEAR: u32 = 12;

/// Converts a single income into its monthly equivalent.
///
/// Monthly amounts pass through unchanged; bi-weekly and weekly paychecks
/// are scaled by paychecks-per-year / 12. The result is not rounded.
pub fn monthly_equivalent(income: &Income) -> Decimal {
    match income.frequency.paychecks_per_year() {
        None => income.amount,
        Some(per_year) => income.amount * Decimal::from(per_year) / Decimal::from(MONTHS_PER_YEAR),
    }
}

/// Sums the monthly equivalent of every income, rounded to cents.
///
/// # Example
///
/// ```
/// use payoff_core::{Income, PayFrequency, normalize_monthly_income};
/// use rust_decimal_macros::dec;
///
/// let incomes = vec![
///     Income {
///         name: "Salary".to_string(),
///         amount: dec!(1000),
///         frequency: PayFrequency::BiWeekly,
///         next_pay_date: None,
///     },
///     Income {
///         name: "Rental".to_string(),
///         amount: dec!(800),
///         frequency: PayFrequency::Monthly,
///         next_pay_date: None,
///     },
/// ];
///
/// assert_eq!(normalize_monthly_income(&incomes), dec!(2966.67));
/// ```
pub fn normalize_monthly_income(incomes: &[Income]) -> Decimal {
    round_half_up(incomes.iter().map(monthly_equivalent).sum())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::PayFrequency;

    fn income(
        amount: Decimal,
        frequency: PayFrequency,
    ) -> Income {
        Income {
            name: "Paycheck".to_string(),
            amount,
            frequency,
            next_pay_date: None,
        }
    }

    #[test]
    fn monthly_income_passes_through() {
        let result = normalize_monthly_income(&[income(dec!(3200), PayFrequency::Monthly)]);

        assert_eq!(result, dec!(3200));
    }

    #[test]
    fn biweekly_income_scales_by_26_over_12() {
        let result = normalize_monthly_income(&[income(dec!(1000), PayFrequency::BiWeekly)]);

        assert_eq!(result, dec!(2166.67));
    }

    #[test]
    fn weekly_income_scales_by_52_over_12() {
        let result = normalize_monthly_income(&[income(dec!(500), PayFrequency::Weekly)]);

        assert_eq!(result, dec!(2166.67));
    }

    #[test]
    fn unrecognised_label_is_treated_as_monthly() {
        let frequency = PayFrequency::from_label("Quarterly");

        let result = normalize_monthly_income(&[income(dec!(1250), frequency)]);

        assert_eq!(result, dec!(1250));
    }

    #[test]
    fn mixed_frequencies_are_summed_before_rounding() {
        let incomes = vec![
            income(dec!(1000), PayFrequency::BiWeekly),
            income(dec!(500), PayFrequency::Weekly),
        ];

        // 2166.666.. + 2166.666.. = 4333.333..
        assert_eq!(normalize_monthly_income(&incomes), dec!(4333.33));
    }

    #[test]
    fn empty_income_list_is_zero() {
        assert_eq!(normalize_monthly_income(&[]), Decimal::ZERO);
    }

    #[test]
    fn monthly_equivalent_is_unrounded() {
        let result = monthly_equivalent(&income(dec!(1200), PayFrequency::BiWeekly));

        assert_eq!(result, dec!(2600));
    }
}
