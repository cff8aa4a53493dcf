//! Interactive session: the menu loop driving the account and ledger.
//!
//! Every balance check happens before any mutation, so a rejected operation
//! leaves the account and ledger exactly as they were. Rejections are
//! messages to the user, never errors; the only way a session ends is the
//! exit selection or the end of the input stream.

use crate::account::Account;
use crate::console::Console;
use crate::error::{FinanceError, Result};
use crate::investment::Investment;
use crate::ledger::Ledger;
use crate::money::Money;
use crate::transaction::Transaction;
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Outcome of one menu iteration.
enum Flow {
    Continue,
    Exit,
}

/// A single interactive session owning the account and its ledger.
pub struct Session {
    account: Account,
    ledger: Ledger,
}

impl Session {
    /// Creates a session with the given opening balance and an empty ledger.
    pub fn new(opening_balance: Money) -> Self {
        Session {
            account: Account::new(opening_balance),
            ledger: Ledger::new(),
        }
    }

    /// Current account balance.
    pub fn balance(&self) -> Money {
        self.account.balance
    }

    /// Read-only view of the recorded history.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Records income: credits the balance and appends an Income record.
    /// Always succeeds; income has no lower-bound check.
    pub fn record_income(&mut self, amount: Money, description: impl Into<String>) {
        self.account.credit(amount);
        self.ledger
            .add_transaction(Transaction::income(amount, description));
        debug!(
            "Recorded income of {}, balance now {}",
            amount, self.account.balance
        );
    }

    /// Records an expenditure: debits the balance and appends an
    /// Expenditure record.
    ///
    /// Returns `false` without touching any state when the debit would push
    /// the balance below the minimum balance.
    pub fn record_expenditure(&mut self, amount: Money, description: impl Into<String>) -> bool {
        if !self.account.debit(amount) {
            warn!(
                "Expenditure of {} rejected, balance {} may not fall below {}",
                amount,
                self.account.balance,
                Account::minimum_balance()
            );
            return false;
        }

        self.ledger
            .add_transaction(Transaction::expenditure(amount, description));
        debug!(
            "Recorded expenditure of {}, balance now {}",
            amount, self.account.balance
        );
        true
    }

    /// Commits an investment, debiting its principal from the balance.
    ///
    /// Returns `false` without touching any state when the principal debit
    /// would push the balance below the minimum balance.
    pub fn invest(&mut self, investment: Investment) -> bool {
        if !self.account.debit(investment.principal) {
            warn!(
                "Investment of {} rejected, balance {} may not fall below {}",
                investment.principal,
                self.account.balance,
                Account::minimum_balance()
            );
            return false;
        }

        debug!(
            "Committed {} investment of {}, balance now {}",
            investment.kind.label(),
            investment.principal,
            self.account.balance
        );
        self.ledger.add_investment(investment);
        true
    }

    /// Runs the menu loop until the exit selection or the end of input.
    ///
    /// End of input is treated as an implicit exit so that scripted and
    /// piped sessions terminate cleanly with exit code 0.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            match self.step(console) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(FinanceError::InputClosed) => {
                    debug!("Input stream closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Shows the menu, reads one selection, and dispatches it.
    fn step<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        self.show_menu(console)?;

        match console.read_integer("Enter choice: ")? {
            1 => self.prompt_income(console)?,
            2 => self.prompt_expenditure(console)?,
            3 => self.prompt_investment(console)?,
            4 => console.write_line(&self.ledger.render_transaction_history())?,
            5 => console.write_line(&self.ledger.render_investment_portfolio())?,
            6 => console.write_line(&self.ledger.render_investment_projections())?,
            0 => {
                console.write_line("Exiting. Goodbye!")?;
                return Ok(Flow::Exit);
            }
            other => {
                warn!("Invalid menu option {}", other);
                console.write_line("Invalid option. Please try again.")?;
            }
        }

        Ok(Flow::Continue)
    }

    fn show_menu<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.write_line("")?;
        console.write_line("========= FINANCE MENU =========")?;
        console.write_line(&format!("Current Balance: {} INR", self.account.balance))?;
        console.write_line("--------------------------------")?;
        console.write_line("1. Record Income")?;
        console.write_line("2. Record Expenditure")?;
        console.write_line("3. Make Investment")?;
        console.write_line("4. View Transaction History")?;
        console.write_line("5. View Investment Portfolio")?;
        console.write_line("6. View Investment Projections")?;
        console.write_line("0. Exit")?;
        Ok(())
    }

    fn prompt_income<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let amount = console.read_decimal("Enter income amount: ")?;
        if amount.is_negative() {
            console.write_line("Error: Amount must not be negative.")?;
            return Ok(());
        }

        let description = console.read_line("Enter description (e.g., Salary): ")?;
        self.record_income(amount, description);
        console.write_line("Income recorded successfully.")?;
        Ok(())
    }

    fn prompt_expenditure<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        let amount = console.read_decimal("Enter expenditure amount: ")?;
        if amount.is_negative() {
            console.write_line("Error: Amount must not be negative.")?;
            return Ok(());
        }
        if !self.account.can_debit(amount) {
            console.write_line(&format!(
                "Error: Transaction declined. Balance cannot fall below {} INR.",
                Account::minimum_balance()
            ))?;
            return Ok(());
        }

        let description = console.read_line("Enter description (e.g., Groceries): ")?;
        if self.record_expenditure(amount, description) {
            console.write_line("Expenditure recorded successfully.")?;
        }
        Ok(())
    }

    fn prompt_investment<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        console.write_line("")?;
        console.write_line("--- New Investment ---")?;
        console.write_line("1. Recurring Contribution Plan")?;
        console.write_line("2. Fixed Deposit")?;
        console.write_line("0. Back to Main Menu")?;

        let choice = console.read_integer("Choose investment type: ")?;
        if choice == 0 {
            return Ok(());
        }
        if choice != 1 && choice != 2 {
            warn!("Invalid investment type {}", choice);
            console.write_line("Invalid investment type.")?;
            return Ok(());
        }

        let principal = console.read_decimal("Enter principal amount to invest: ")?;
        if principal.is_negative() {
            console.write_line("Error: Amount must not be negative.")?;
            return Ok(());
        }
        if !self.account.can_debit(principal) {
            console.write_line(&format!(
                "Error: Investment failed. Balance cannot fall below {} INR.",
                Account::minimum_balance()
            ))?;
            return Ok(());
        }

        let duration_years =
            match u32::try_from(console.read_integer("Enter duration in years: ")?) {
                Ok(years) => years,
                Err(_) => {
                    console.write_line("Error: Duration must be a non-negative number of years.")?;
                    return Ok(());
                }
            };

        let investment = if choice == 1 {
            let monthly = console.read_decimal("Enter monthly investment amount: ")?;
            if monthly.is_negative() {
                console.write_line("Error: Amount must not be negative.")?;
                return Ok(());
            }
            Investment::recurring(principal, duration_years, monthly)
        } else {
            Investment::fixed_deposit(principal, duration_years)
        };

        let label = investment.kind.label();
        if self.invest(investment) {
            console.write_line(&format!("{} investment made successfully.", label))?;
        }
        Ok(())
    }
}
