use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use banded_account::account::{BandKind, BandPolicy};

use crate::account::{output, reported_account};

#[test]
fn jim_johnson_scenario() {
    let (mut account, report) = reported_account(BandPolicy::default());
    assert_eq!(account.balance(), Decimal::ZERO);
    assert_eq!(account.band_name(), "Standard");

    account.deposit(dec!(500)).unwrap();
    assert_eq!((account.balance(), account.band().kind()), (dec!(500), BandKind::Standard));

    account.deposit(dec!(300)).unwrap();
    assert_eq!((account.balance(), account.band().kind()), (dec!(800), BandKind::Standard));

    account.deposit(dec!(550)).unwrap();
    assert_eq!((account.balance(), account.band().kind()), (dec!(1350), BandKind::Premium));

    account.pay_interest().unwrap();
    assert_eq!((account.balance(), account.band().kind()), (dec!(1417.5), BandKind::Premium));

    account.withdraw(dec!(2000)).unwrap();
    assert_eq!((account.balance(), account.band().kind()), (dec!(-582.5), BandKind::Overdrawn));

    account.withdraw(dec!(1100)).unwrap();
    assert_eq!((account.balance(), account.band().kind()), (dec!(-582.5), BandKind::Overdrawn));

    let expected = "\
Deposited $500.00 --- 
 Balance = $500.00
 Status  = Standard

Deposited $300.00 --- 
 Balance = $800.00
 Status  = Standard

Deposited $550.00 --- 
 Balance = $1,350.00
 Status  = Premium

Interest Paid --- 
 Balance = $1,417.50
 Status  = Premium

Withdrew $2,000.00 --- 
 Balance = -$582.50
 Status  = Overdrawn

No funds available for withdrawal!
Withdrew $1,100.00 --- 
 Balance = -$582.50
 Status  = Overdrawn

";
    assert_eq!(output(&report), expected);
}

#[test]
fn snapshot_serializes_current_band() {
    let (mut account, _report) = reported_account(BandPolicy::default());
    account.deposit(dec!(1350.00)).unwrap();

    let json = serde_json::to_value(account.snapshot()).unwrap();

    assert_eq!(json["owner"], "Jim Johnson");
    assert_eq!(json["sequence_number"], 1);
    assert_eq!(json["band"], serde_json::json!({ "band": "premium", "balance": "1350.00" }));
    assert_eq!(json["id"], account.id().to_string());
}
