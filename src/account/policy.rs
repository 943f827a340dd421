use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::account::error::PolicyError;

/// Thresholds, rates and fees driving the band transitions of an account.
///
/// The defaults are the fixed constants of the three bands:
/// - Overdrawn: balance in `(-100.00, 0.00]`, no interest, `15.00` service fee;
/// - Standard: balance in `(0.00, 1000.00]`, no interest;
/// - Premium: balance above `1000.00`, `5%` interest every time it is paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct BandPolicy {
    /// Lower limit of the overdrawn band. Informational: nothing stops a balance from going below it.
    #[builder(default = dec!(-100))]
    pub(crate) overdraft_floor: Decimal,
    /// Upper limit of the overdrawn band and lower limit of the standard one.
    #[builder(default = Decimal::ZERO)]
    pub(crate) standard_floor: Decimal,
    /// Upper limit of the standard band and lower limit of the premium one.
    #[builder(default = dec!(1000))]
    pub(crate) premium_threshold: Decimal,
    /// Upper limit of the premium band. Informational as well.
    #[builder(default = dec!(10000000))]
    pub(crate) premium_ceiling: Decimal,
    #[builder(default = Decimal::ZERO)]
    pub(crate) standard_rate: Decimal,
    #[builder(default = dec!(0.05))]
    pub(crate) premium_rate: Decimal,
    /// Flat fee computed on every withdrawal attempted while overdrawn.
    #[builder(default = dec!(15))]
    pub(crate) overdraft_fee: Decimal,
    /// When set, non positive amounts are rejected instead of being applied.
    #[builder(default = false)]
    pub(crate) validate_amounts: bool,
}

impl Default for BandPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl BandPolicy {
    /// Reads a policy from its json representation. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Checks that limits are strictly ordered, and that rates and fee are usable.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let limits = [
            ("overdraft_floor", self.overdraft_floor),
            ("standard_floor", self.standard_floor),
            ("premium_threshold", self.premium_threshold),
            ("premium_ceiling", self.premium_ceiling),
        ];

        for pair in limits.windows(2) {
            let (lower_name, lower) = pair[0];
            let (upper_name, upper) = pair[1];
            if lower >= upper {
                return Err(PolicyError::UnorderedLimits {
                    lower: lower_name,
                    upper: upper_name,
                });
            }
        }

        if self.standard_rate < Decimal::ZERO || self.premium_rate < Decimal::ZERO {
            return Err(PolicyError::NegativeRate);
        }

        if self.overdraft_fee < Decimal::ZERO {
            return Err(PolicyError::NegativeFee(self.overdraft_fee));
        }

        Ok(())
    }

    pub fn overdraft_floor(&self) -> Decimal {
        self.overdraft_floor
    }

    pub fn standard_floor(&self) -> Decimal {
        self.standard_floor
    }

    pub fn premium_threshold(&self) -> Decimal {
        self.premium_threshold
    }

    pub fn premium_ceiling(&self) -> Decimal {
        self.premium_ceiling
    }

    pub fn standard_rate(&self) -> Decimal {
        self.standard_rate
    }

    pub fn premium_rate(&self) -> Decimal {
        self.premium_rate
    }

    pub fn overdraft_fee(&self) -> Decimal {
        self.overdraft_fee
    }

    pub fn validate_amounts(&self) -> bool {
        self.validate_amounts
    }
}
