//! Finance Manager CLI
//!
//! An interactive menu-driven console for recording income, expenditure,
//! and investments against a single account.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use finance_manager::{Console, Money, Result, Session};
use rust_decimal::Decimal;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    console.write_line("--- Welcome to your Personal Finance Management System! ---")?;

    let opening_balance = Money::new(Decimal::new(5000, 0));
    let mut session = Session::new(opening_balance);
    session.run(&mut console)
}
