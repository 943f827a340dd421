use std::cell::{Ref, RefCell};
use std::io::{Stdout, Write};

use rust_decimal::Decimal;

use crate::account::aggregate::BankAccount;
use crate::account::event::BankAccountEvent;
use crate::{EventEnvelope, EventHandler};

/// Writes the console style status lines for every account event:
///
/// ```text
/// Deposited $500.00 ---
///  Balance = $500.00
///  Status  = Standard
/// ```
pub struct StatusReport<W: Write> {
    sink: RefCell<W>,
}

impl Default for StatusReport<Stdout> {
    fn default() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> StatusReport<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: RefCell::new(sink),
        }
    }

    pub fn sink(&self) -> Ref<'_, W> {
        self.sink.borrow()
    }

    pub fn into_sink(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: Write> EventHandler<BankAccount> for StatusReport<W> {
    fn handle(&self, event: &EventEnvelope<BankAccountEvent>) {
        let lines: String = render(event.payload());

        if let Err(error) = self.sink.borrow_mut().write_all(lines.as_bytes()) {
            tracing::error!({
                event_id = %event.id,
                aggregate_id = %event.aggregate_id,
                error = ?error,
            }, "status report failed to write");
        }
    }

    fn name(&self) -> &'static str {
        "status_report"
    }
}

/// Renders the report lines for a single event, trailing blank line included.
pub fn render(event: &BankAccountEvent) -> String {
    let headline: String = match event {
        BankAccountEvent::Deposited { amount, .. } => format!("Deposited {} --- ", currency(*amount)),
        BankAccountEvent::Withdrawn { amount, .. } => format!("Withdrew {} --- ", currency(*amount)),
        BankAccountEvent::WithdrawalRefused { amount, .. } => format!(
            "No funds available for withdrawal!\nWithdrew {} --- ",
            currency(*amount)
        ),
        BankAccountEvent::InterestPaid { .. } => "Interest Paid --- ".to_string(),
    };

    let band = event.band();
    format!(
        "{}\n Balance = {}\n Status  = {}\n\n",
        headline,
        currency(band.balance()),
        band.name()
    )
}

/// Formats an amount as dollars with thousands separators and two decimals, e.g. `-$1,234.50`.
pub fn currency(amount: Decimal) -> String {
    let rounded: Decimal = amount.round_dp(2);

    let mut cents: Decimal = rounded.abs();
    cents.rescale(2);
    let fixed: String = cents.to_string();
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped: String = String::with_capacity(units.len() + units.len() / 3);
    for (index, digit) in units.chars().enumerate() {
        if index > 0 && (units.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // rounding can leave a negative zero behind
    let sign: &str = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}${}.{}", sign, grouped, cents)
}
