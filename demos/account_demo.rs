//! Opens an account for Jim Johnson and walks it through every band: the status report of each
//! operation is printed on stdout.

use banded_account::account::{new_account, AccountError};
use rust_decimal_macros::dec;

fn main() -> Result<(), AccountError> {
    println!("\n======================================================== START\n");

    let mut account = new_account("Jim Johnson");

    account.deposit(dec!(500))?;
    account.deposit(dec!(300))?;
    account.deposit(dec!(550))?;
    account.pay_interest()?;
    account.withdraw(dec!(2000))?;
    account.withdraw(dec!(1100))?;

    println!(
        "===> {} ends up {} with a balance of {}",
        account.owner(),
        account.band_name(),
        banded_account::account::currency(account.balance())
    );

    println!("\n======================================================== FINISHED\n");
    Ok(())
}
