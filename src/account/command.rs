use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BankAccountCommand {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    PayInterest,
}
