//! A bank account modelled as a state machine over three balance bands (overdrawn, standard and
//! premium), built on a small synchronous aggregate core.
//!
//! ```no_run
//! use banded_account::account::new_account;
//! use rust_decimal_macros::dec;
//!
//! let mut account = new_account("Jim Johnson");
//! account.deposit(dec!(1350.00)).unwrap();
//! account.pay_interest().unwrap();
//! assert_eq!(account.band_name(), "Premium");
//! ```

pub use crate::aggregate::Aggregate;
pub use crate::event::EventEnvelope;
pub use crate::handler::EventHandler;
pub use crate::manager::AggregateManager;
pub use crate::state::AggregateState;

mod aggregate;
mod event;
mod handler;
mod manager;
mod state;

pub mod account;

pub mod types {
    pub type SequenceNumber = i32;
}
