use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How often an income is paid.
///
/// Labels that are not recognised fall back to [`PayFrequency::Monthly`]
/// instead of failing, both in [`PayFrequency::from_label`] and when
/// deserializing from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum PayFrequency {
    #[default]
    Monthly,
    BiWeekly,
    Weekly,
}

impl PayFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::BiWeekly => "Bi-weekly",
            Self::Weekly => "Weekly",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "monthly" => Self::Monthly,
            "bi-weekly" | "biweekly" | "bi_weekly" => Self::BiWeekly,
            "weekly" => Self::Weekly,
            other => {
                debug!(label = other, "unrecognised pay frequency; treating as monthly");
                Self::Monthly
            }
        }
    }

    /// Number of paychecks in a year, or `None` for monthly amounts which
    /// are already expressed per month.
    pub fn paychecks_per_year(&self) -> Option<u32> {
        match self {
            Self::Monthly => None,
            Self::BiWeekly => Some(26),
            Self::Weekly => Some(52),
        }
    }
}

impl From<String> for PayFrequency {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub name: String,
    /// Amount of a single paycheck.
    pub amount: Decimal,
    pub frequency: PayFrequency,
    pub next_pay_date: Option<NaiveDate>,
}
