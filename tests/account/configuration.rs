use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use banded_account::account::{Account, AccountError, BandKind, BandPolicy, PolicyError};

use crate::account::{output, reported_account};

#[test]
fn unvalidated_account_applies_negative_amounts() {
    let mut account = Account::new("owner").with_event_handlers(vec![]);

    account.deposit(dec!(-20)).unwrap();
    assert_eq!(account.balance(), dec!(-20));
    assert_eq!(account.band().kind(), BandKind::Overdrawn);

    account.deposit(Decimal::ZERO).unwrap();
    assert_eq!(account.balance(), dec!(-20));
}

#[test]
fn validating_account_rejects_invalid_amounts_without_side_effects() {
    let policy = BandPolicy::builder().validate_amounts(true).build();
    let (mut account, report) = reported_account(policy);
    account.deposit(dec!(100)).unwrap();
    let before = account.snapshot();

    assert_eq!(
        account.deposit(dec!(-20)),
        Err(AccountError::InvalidAmount { amount: dec!(-20) })
    );
    assert_eq!(
        account.withdraw(Decimal::ZERO),
        Err(AccountError::InvalidAmount { amount: Decimal::ZERO })
    );

    assert_eq!(account.snapshot(), before);
    assert_eq!(output(&report).matches("Status").count(), 1);
}

#[test]
fn custom_policy_moves_the_thresholds() {
    let policy = BandPolicy::from_json(r#"{ "premium_threshold": "500.00", "premium_rate": "0.1" }"#).unwrap();
    let mut account = Account::with_policy("owner", policy)
        .unwrap()
        .with_event_handlers(vec![]);

    account.deposit(dec!(600)).unwrap();
    assert_eq!(account.band().kind(), BandKind::Premium);

    account.pay_interest().unwrap();
    assert_eq!(account.balance(), dec!(660.00));
}

#[test]
fn invalid_policy_json_is_rejected() {
    let result = BandPolicy::from_json(r#"{ "standard_floor": "2000.00" }"#);
    assert!(matches!(result, Err(PolicyError::UnorderedLimits { .. })));
}

#[test]
fn invalid_policy_cannot_open_an_account() {
    let policy = BandPolicy::builder().premium_threshold(dec!(-1)).build();

    match Account::with_policy("owner", policy) {
        Err(PolicyError::UnorderedLimits { lower, upper }) => {
            assert_eq!(lower, "standard_floor");
            assert_eq!(upper, "premium_threshold");
        }
        Err(other) => panic!("unexpected error: {:?}", other),
        Ok(_) => panic!("account opened with a premium threshold below the standard floor"),
    }

    let policy = BandPolicy::builder().overdraft_fee(dec!(-15)).build();
    assert!(matches!(
        Account::with_policy("owner", policy),
        Err(PolicyError::NegativeFee(_))
    ));
}
