//! # Finance Manager
//!
//! An interactive console ledger for a single account: records income and
//! expenditure, commits recurring-contribution plans and fixed deposits,
//! and prints formatted reports including maturity projections.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Amounts carry exactly 2 decimal places via `rust_decimal`
//! - **Append-only ledger**: Records are immutable and kept in insertion order
//! - **Minimum-balance guard**: Every debit is checked before any state changes
//! - **Testable I/O seam**: The console is generic over its reader and writer
//!
//! ## Example
//!
//! ```no_run
//! use std::io::{self, Cursor};
//! use std::str::FromStr;
//! use finance_manager::{Console, Money, Session};
//!
//! let mut session = Session::new(Money::from_str("5000").unwrap());
//! let mut console = Console::new(Cursor::new("1\n100\nGift\n0\n"), io::stdout());
//! session.run(&mut console).unwrap();
//! ```

pub mod account;
pub mod console;
pub mod error;
pub mod investment;
pub mod ledger;
pub mod money;
pub mod session;
pub mod transaction;

pub use account::Account;
pub use console::Console;
pub use error::{FinanceError, Result};
pub use investment::{Investment, InvestmentKind};
pub use ledger::Ledger;
pub use money::Money;
pub use session::Session;
pub use transaction::{Transaction, TransactionKind};
