use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Bill;

/// A pay period running from one paycheck up to (not including) the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetWindow {
    pub income_name: String,
    pub start_date: NaiveDate,
    /// Exclusive.
    pub end_date: NaiveDate,
    pub income_amount: Decimal,
    pub bills: Vec<Bill>,
    pub debt_min_share: Decimal,
    /// Income left after bills and the debt share. May be negative.
    pub remainder: Decimal,
}

impl BudgetWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date < self.end_date
    }

    pub fn bills_total(&self) -> Decimal {
        self.bills.iter().map(|b| b.amount).sum()
    }
}
