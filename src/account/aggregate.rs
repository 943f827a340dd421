use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::band::{Band, Withdrawal};
use crate::account::command::BankAccountCommand;
use crate::account::error::AccountError;
use crate::account::event::BankAccountEvent;
use crate::account::policy::BandPolicy;
use crate::Aggregate;

pub struct BankAccount;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountState {
    pub band: Band,
    pub policy: BandPolicy,
}

impl AccountState {
    pub fn new(policy: BandPolicy) -> Self {
        Self {
            band: Band::default(),
            policy,
        }
    }

    fn check_amount(&self, amount: Decimal) -> Result<(), AccountError> {
        if self.policy.validate_amounts && amount <= Decimal::ZERO {
            Err(AccountError::InvalidAmount { amount })
        } else {
            Ok(())
        }
    }
}

impl Aggregate for BankAccount {
    const NAME: &'static str = "bank_account";
    type State = AccountState;
    type Command = BankAccountCommand;
    type Event = BankAccountEvent;
    type Error = AccountError;

    fn handle_command(state: &Self::State, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let AccountState { band, policy } = state;

        let event = match command {
            BankAccountCommand::Deposit { amount } => {
                state.check_amount(amount)?;
                BankAccountEvent::Deposited {
                    amount,
                    band: band.deposit(amount, policy),
                }
            }
            BankAccountCommand::Withdraw { amount } => {
                state.check_amount(amount)?;
                match band.withdraw(amount, policy) {
                    Withdrawal::Debited(band) => BankAccountEvent::Withdrawn { amount, band },
                    Withdrawal::Refused { fee } => BankAccountEvent::WithdrawalRefused {
                        amount,
                        fee,
                        band: *band,
                    },
                }
            }
            BankAccountCommand::PayInterest => {
                let (interest, band) = band.pay_interest(policy);
                BankAccountEvent::InterestPaid { interest, band }
            }
        };

        Ok(vec![event])
    }

    fn apply_event(state: Self::State, payload: Self::Event) -> Self::State {
        AccountState {
            band: *payload.band(),
            ..state
        }
    }
}
