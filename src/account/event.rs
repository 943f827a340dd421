use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::band::Band;

/// Facts emitted by a bank account. Every event carries the band the account is in once the event is
/// applied, so applying it is a plain replacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BankAccountEvent {
    Deposited { amount: Decimal, band: Band },
    Withdrawn { amount: Decimal, band: Band },
    /// Emitted when an overdrawn account is asked for money. `band` is the untouched current band.
    WithdrawalRefused { amount: Decimal, fee: Decimal, band: Band },
    InterestPaid { interest: Decimal, band: Band },
}

impl BankAccountEvent {
    pub const fn band(&self) -> &Band {
        match self {
            BankAccountEvent::Deposited { band, .. }
            | BankAccountEvent::Withdrawn { band, .. }
            | BankAccountEvent::WithdrawalRefused { band, .. }
            | BankAccountEvent::InterestPaid { band, .. } => band,
        }
    }
}
