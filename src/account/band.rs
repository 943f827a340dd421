use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::policy::BandPolicy;

/// The balance range an account currently sits in, together with that balance.
///
/// A band value is never mutated: every operation builds the successor band from the resulting balance and
/// the caller installs it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "band", rename_all = "snake_case")]
pub enum Band {
    /// The account is overdrawn. Withdrawals are refused and no interest is paid.
    Overdrawn { balance: Decimal },
    /// Non interest bearing band. Every new account starts here.
    Standard { balance: Decimal },
    /// Interest bearing band.
    Premium { balance: Decimal },
}

/// Band discriminant, handy for comparisons and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandKind {
    Overdrawn,
    Standard,
    Premium,
}

impl BandKind {
    pub const fn name(&self) -> &'static str {
        match self {
            BandKind::Overdrawn => "Overdrawn",
            BandKind::Standard => "Standard",
            BandKind::Premium => "Premium",
        }
    }
}

impl Display for BandKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a withdrawal attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Withdrawal {
    /// The amount was debited; holds the band to install.
    Debited(Band),
    /// The account is overdrawn and nothing was debited. The fee is computed but never charged.
    Refused { fee: Decimal },
}

impl Default for Band {
    fn default() -> Self {
        Band::Standard {
            balance: Decimal::ZERO,
        }
    }
}

impl Band {
    pub const fn balance(&self) -> Decimal {
        match *self {
            Band::Overdrawn { balance } | Band::Standard { balance } | Band::Premium { balance } => balance,
        }
    }

    pub const fn kind(&self) -> BandKind {
        match self {
            Band::Overdrawn { .. } => BandKind::Overdrawn,
            Band::Standard { .. } => BandKind::Standard,
            Band::Premium { .. } => BandKind::Premium,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn lower_limit(&self, policy: &BandPolicy) -> Decimal {
        match self {
            Band::Overdrawn { .. } => policy.overdraft_floor,
            Band::Standard { .. } => policy.standard_floor,
            Band::Premium { .. } => policy.premium_threshold,
        }
    }

    pub fn upper_limit(&self, policy: &BandPolicy) -> Decimal {
        match self {
            Band::Overdrawn { .. } => policy.standard_floor,
            Band::Standard { .. } => policy.premium_threshold,
            Band::Premium { .. } => policy.premium_ceiling,
        }
    }

    pub fn interest_rate(&self, policy: &BandPolicy) -> Decimal {
        match self {
            Band::Overdrawn { .. } => Decimal::ZERO,
            Band::Standard { .. } => policy.standard_rate,
            Band::Premium { .. } => policy.premium_rate,
        }
    }

    /// Only overdrawn accounts carry a service fee.
    pub fn service_fee(&self, policy: &BandPolicy) -> Option<Decimal> {
        match self {
            Band::Overdrawn { .. } => Some(policy.overdraft_fee),
            Band::Standard { .. } | Band::Premium { .. } => None,
        }
    }

    pub fn deposit(self, amount: Decimal, policy: &BandPolicy) -> Band {
        self.with_balance(self.balance() + amount).settle(policy)
    }

    pub fn withdraw(self, amount: Decimal, policy: &BandPolicy) -> Withdrawal {
        match self {
            Band::Overdrawn { .. } => Withdrawal::Refused {
                fee: policy.overdraft_fee,
            },
            Band::Standard { balance } | Band::Premium { balance } => {
                Withdrawal::Debited(self.with_balance(balance - amount).settle(policy))
            }
        }
    }

    /// Returns the interest credited and the band to install. Overdrawn accounts are skipped entirely,
    /// without even re-checking the band.
    pub fn pay_interest(self, policy: &BandPolicy) -> (Decimal, Band) {
        match self {
            Band::Overdrawn { .. } => (Decimal::ZERO, self),
            Band::Standard { balance } | Band::Premium { balance } => {
                let interest: Decimal = self.interest_rate(policy) * balance;
                (interest, self.with_balance(balance + interest).settle(policy))
            }
        }
    }

    /// Re-evaluates the band once against the current balance. Limits are strict, so a balance sitting
    /// exactly on a limit keeps its band, and at most one hop is taken.
    pub fn settle(self, policy: &BandPolicy) -> Band {
        match self {
            Band::Overdrawn { balance } if balance > policy.standard_floor => Band::Standard { balance },
            Band::Standard { balance } if balance < policy.standard_floor => Band::Overdrawn { balance },
            Band::Standard { balance } if balance > policy.premium_threshold => Band::Premium { balance },
            Band::Premium { balance } if balance < policy.standard_floor => Band::Overdrawn { balance },
            Band::Premium { balance } if balance < policy.premium_threshold => Band::Standard { balance },
            unchanged => unchanged,
        }
    }

    const fn with_balance(self, balance: Decimal) -> Band {
        match self {
            Band::Overdrawn { .. } => Band::Overdrawn { balance },
            Band::Standard { .. } => Band::Standard { balance },
            Band::Premium { .. } => Band::Premium { balance },
        }
    }
}
