//! A bank account whose behaviour depends on the balance band it sits in.
//!
//! The [`Account`] is the entry point: it owns the current [`Band`] through an [`AggregateState`] and
//! runs every operation through an [`AggregateManager`], which in turn feeds the [`StatusReport`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use aggregate::{AccountState, BankAccount};
pub use band::{Band, BandKind, Withdrawal};
pub use command::BankAccountCommand;
pub use error::{AccountError, PolicyError};
pub use event::BankAccountEvent;
pub use policy::BandPolicy;
pub use report::{currency, render, StatusReport};

use crate::types::SequenceNumber;
use crate::{AggregateManager, AggregateState, EventEnvelope, EventHandler};

mod aggregate;
mod band;
mod command;
mod error;
mod event;
mod policy;
mod report;

/// Opens a new account for the given owner, reporting on stdout.
pub fn new_account(owner: impl Into<String>) -> Account {
    Account::new(owner)
}

pub struct Account {
    owner: String,
    state: AggregateState<AccountState>,
    manager: AggregateManager<BankAccount>,
}

/// Point in time view of an account, meant to be serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub id: Uuid,
    pub owner: String,
    pub sequence_number: SequenceNumber,
    pub band: Band,
    pub policy: BandPolicy,
}

impl Account {
    /// New accounts start empty, in the standard band, with the default policy.
    pub fn new(owner: impl Into<String>) -> Self {
        Self::open(owner.into(), BandPolicy::default())
    }

    /// Same as [`Account::new`] with custom thresholds; the policy is validated first.
    pub fn with_policy(owner: impl Into<String>, policy: BandPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self::open(owner.into(), policy))
    }

    fn open(owner: String, policy: BandPolicy) -> Self {
        Self {
            owner,
            state: AggregateState::with_inner(Uuid::new_v4(), AccountState::new(policy)),
            manager: AggregateManager::new().add_event_handler(StatusReport::default()),
        }
    }

    /// Replaces the stdout report with the given handlers.
    pub fn with_event_handlers(mut self, event_handlers: Vec<Box<dyn EventHandler<BankAccount>>>) -> Self {
        self.manager = AggregateManager::new().with_event_handlers(event_handlers);
        self
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.handle(BankAccountCommand::Deposit { amount })
    }

    /// Overdrawn accounts refuse withdrawals: the balance is left as it is.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.handle(BankAccountCommand::Withdraw { amount })
    }

    pub fn pay_interest(&mut self) -> Result<(), AccountError> {
        self.handle(BankAccountCommand::PayInterest)
    }

    pub fn balance(&self) -> Decimal {
        self.band().balance()
    }

    pub fn band(&self) -> &Band {
        &self.state.inner().band
    }

    pub fn band_name(&self) -> &'static str {
        self.band().name()
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn id(&self) -> &Uuid {
        self.state.id()
    }

    pub fn policy(&self) -> &BandPolicy {
        &self.state.inner().policy
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: *self.state.id(),
            owner: self.owner.clone(),
            sequence_number: *self.state.sequence_number(),
            band: *self.band(),
            policy: self.policy().clone(),
        }
    }

    fn handle(&mut self, command: BankAccountCommand) -> Result<(), AccountError> {
        let before: BandKind = self.band().kind();

        let envelopes: Vec<EventEnvelope<BankAccountEvent>> = self.manager.handle_command(&mut self.state, command)?;

        for envelope in &envelopes {
            if let BankAccountEvent::WithdrawalRefused { amount, fee, band } = envelope.payload() {
                tracing::warn!(
                    owner = %self.owner,
                    amount = %amount,
                    fee = %fee,
                    balance = %band.balance(),
                    "withdrawal refused on overdrawn account"
                );
            }
        }

        let after: BandKind = self.band().kind();
        if before != after {
            tracing::info!(
                owner = %self.owner,
                from = %before,
                to = %after,
                balance = %self.balance(),
                "account changed band"
            );
        }

        Ok(())
    }
}
