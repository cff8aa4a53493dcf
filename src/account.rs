//! Account balance model and the minimum-balance guard.
//!
//! Maintains the invariant: after any committed debit the balance is at or
//! above the minimum balance. Income credits have no lower-bound check.

use crate::money::Money;
use rust_decimal::Decimal;

/// The single account's running balance.
///
/// # Invariants
///
/// - `debit` refuses any amount that would leave the balance below
///   [`Account::minimum_balance`]; a refused debit changes nothing
/// - `credit` never fails and has no lower-bound check
#[derive(Debug, Clone)]
pub struct Account {
    /// Current balance in currency units.
    pub balance: Money,
}

impl Account {
    /// Floor the balance may never cross as a result of a debit.
    pub fn minimum_balance() -> Money {
        Money::new(Decimal::new(1000, 0))
    }

    /// Creates an account with the given opening balance.
    pub fn new(opening_balance: Money) -> Self {
        Account {
            balance: opening_balance,
        }
    }

    /// Credits funds into the account. Always succeeds.
    pub fn credit(&mut self, amount: Money) {
        self.balance += amount;
    }

    /// Returns `true` if debiting `amount` keeps the balance at or above
    /// the minimum balance.
    pub fn can_debit(&self, amount: Money) -> bool {
        self.balance - amount >= Self::minimum_balance()
    }

    /// Debits funds from the account.
    ///
    /// Returns `false` and leaves the balance untouched if the debit would
    /// push the balance below the minimum balance.
    pub fn debit(&mut self, amount: Money) -> bool {
        if !self.can_debit(amount) {
            return false;
        }

        self.balance -= amount;
        true
    }
}
