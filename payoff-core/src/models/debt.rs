use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    pub name: String,
    pub balance: Decimal,
    /// Annual rate as a percentage, e.g. `19.99` for 19.99%.
    pub apr_percent: Decimal,
    pub min_payment: Decimal,
}

impl Debt {
    /// A debt with no remaining balance takes no further interest or payments.
    pub fn is_paid_off(&self) -> bool {
        self.balance <= Decimal::ZERO
    }
}
