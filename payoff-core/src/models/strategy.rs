use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order in which extra payments are applied to outstanding debts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Highest APR first; ties go to the smaller balance.
    #[default]
    Avalanche,
    /// Smallest balance first; ties go to the higher APR.
    Snowball,
}

/// Sort key for a single outstanding debt. Smaller keys are paid first.
pub(crate) type PriorityKey = (Decimal, Decimal);

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Avalanche, Strategy::Snowball];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Avalanche => "avalanche",
            Self::Snowball => "snowball",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Some(Self::Avalanche),
            "snowball" => Some(Self::Snowball),
            _ => None,
        }
    }

    /// Ascending key used to pick the next debt that receives extra money.
    pub(crate) fn priority_key(
        &self,
        balance: Decimal,
        apr_percent: Decimal,
    ) -> PriorityKey {
        match self {
            Self::Avalanche => (-apr_percent, balance),
            Self::Snowball => (balance, -apr_percent),
        }
    }
}
