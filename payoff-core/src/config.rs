//! Tunables shared by the simulator, scenario explorer and budget allocator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by [`EngineConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineConfigError {
    /// The month cap must allow at least one simulated month.
    #[error("max_months must be at least 1")]
    ZeroMaxMonths,

    /// The balance tolerance must be positive.
    #[error("epsilon must be positive, got {0}")]
    InvalidEpsilon(Decimal),

    /// The average month length must be positive.
    #[error("days_per_month must be positive, got {0}")]
    InvalidDaysPerMonth(Decimal),

    /// The last pay window must span at least one day.
    #[error("fallback_window_days must be at least 1")]
    ZeroFallbackWindow,

    /// Scenario bumps must be listed in ascending order.
    #[error("scenario bumps must be ascending, found {next} after {previous}")]
    UnsortedBumps { previous: Decimal, next: Decimal },
}

/// Engine configuration.
///
/// Every field has a default, so a partial TOML table only needs to name
/// the values it changes.
///
/// # Example
///
/// ```
/// use payoff_core::EngineConfig;
/// use rust_decimal_macros::dec;
///
/// let config = EngineConfig::default();
///
/// assert_eq!(config.max_months, 600);
/// assert_eq!(config.epsilon, dec!(0.01));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on simulated months before a payoff is declared unreachable.
    pub max_months: u32,

    /// Balances at or below this amount count as paid off.
    pub epsilon: Decimal,

    /// Average month length used to turn a month count into a date.
    pub days_per_month: Decimal,

    /// Length of the last pay window, which has no following paycheck.
    pub fallback_window_days: u32,

    /// Extra-payment increments tried by the scenario explorer.
    pub scenario_bumps: Vec<Decimal>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_months: 600,
            epsilon: Decimal::new(1, 2),
            days_per_month: Decimal::new(304375, 4),
            fallback_window_days: 14,
            scenario_bumps: [0, 100, 250, 500, 1000]
                .into_iter()
                .map(Decimal::from)
                .collect(),
        }
    }
}

impl EngineConfig {
    /// Checks that every value is inside its valid range.
    ///
    /// # Errors
    ///
    /// Returns the first [`EngineConfigError`] found.
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if self.max_months == 0 {
            return Err(EngineConfigError::ZeroMaxMonths);
        }
        if self.epsilon <= Decimal::ZERO {
            return Err(EngineConfigError::InvalidEpsilon(self.epsilon));
        }
        if self.days_per_month <= Decimal::ZERO {
            return Err(EngineConfigError::InvalidDaysPerMonth(self.days_per_month));
        }
        if self.fallback_window_days == 0 {
            return Err(EngineConfigError::ZeroFallbackWindow);
        }
        if let Some(pair) = self.scenario_bumps.windows(2).find(|w| w[1] < w[0]) {
            return Err(EngineConfigError::UnsortedBumps {
                previous: pair[0],
                next: pair[1],
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = EngineConfig::default();

        assert_eq!(config.max_months, 600);
        assert_eq!(config.epsilon, dec!(0.01));
        assert_eq!(config.days_per_month, dec!(30.4375));
        assert_eq!(config.fallback_window_days, 14);
        assert_eq!(
            config.scenario_bumps,
            vec![dec!(0), dec!(100), dec!(250), dec!(500), dec!(1000)]
        );
    }

    #[test]
    fn validate_accepts_default() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_max_months() {
        let config = EngineConfig {
            max_months: 0,
            ..EngineConfig::default()
        };

        assert_eq!(config.validate(), Err(EngineConfigError::ZeroMaxMonths));
    }

    #[test]
    fn validate_rejects_non_positive_epsilon() {
        let config = EngineConfig {
            epsilon: dec!(0),
            ..EngineConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(EngineConfigError::InvalidEpsilon(dec!(0)))
        );
    }

    #[test]
    fn validate_rejects_negative_days_per_month() {
        let config = EngineConfig {
            days_per_month: dec!(-30),
            ..EngineConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(EngineConfigError::InvalidDaysPerMonth(dec!(-30)))
        );
    }

    #[test]
    fn validate_rejects_zero_fallback_window() {
        let config = EngineConfig {
            fallback_window_days: 0,
            ..EngineConfig::default()
        };

        assert_eq!(config.validate(), Err(EngineConfigError::ZeroFallbackWindow));
    }

    #[test]
    fn validate_rejects_descending_bumps() {
        let config = EngineConfig {
            scenario_bumps: vec![dec!(0), dec!(500), dec!(250)],
            ..EngineConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(EngineConfigError::UnsortedBumps {
                previous: dec!(500),
                next: dec!(250),
            })
        );
    }

    #[test]
    fn validate_allows_empty_and_negative_bumps() {
        let empty = EngineConfig {
            scenario_bumps: Vec::new(),
            ..EngineConfig::default()
        };
        let negative = EngineConfig {
            scenario_bumps: vec![dec!(-200), dec!(0), dec!(200)],
            ..EngineConfig::default()
        };

        assert_eq!(empty.validate(), Ok(()));
        assert_eq!(negative.validate(), Ok(()));
    }
}
