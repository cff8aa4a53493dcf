//! Append-only record of transactions and investments, with report rendering.
//!
//! The ledger owns every record, keeps each collection in insertion order,
//! and never mutates or removes an entry. Reports are rendered to `String`
//! so they can be checked in tests and written to any console.

use crate::investment::{Investment, InvestmentKind};
use crate::transaction::Transaction;

/// Owning collection of all recorded transactions and investments.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Transactions in insertion order.
    transactions: Vec<Transaction>,

    /// Investments in insertion order.
    investments: Vec<Investment>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Appends a transaction. Never fails; no uniqueness constraint.
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Appends an investment. Never fails; no uniqueness constraint.
    pub fn add_investment(&mut self, investment: Investment) {
        self.investments.push(investment);
    }

    /// Iterates over transactions in insertion order.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    /// Iterates over investments in insertion order.
    pub fn investments(&self) -> impl Iterator<Item = &Investment> {
        self.investments.iter()
    }

    /// Renders the transaction history table.
    ///
    /// Columns: Type (left-aligned), Amount (right-aligned, 2 decimals),
    /// Description. One row per transaction in insertion order.
    pub fn render_transaction_history(&self) -> String {
        let mut lines = vec![
            String::new(),
            "--- Transaction History ---".to_string(),
            format!("{:<15}{:>10}    {}", "Type", "Amount", "Description"),
            "-".repeat(50),
        ];

        for transaction in &self.transactions {
            lines.push(format!(
                "{:<15}{:>10}    {}",
                transaction.kind.label(),
                transaction.amount.to_string(),
                transaction.description
            ));
        }

        lines.join("\n")
    }

    /// Renders the investment portfolio table.
    ///
    /// Columns: Type, Principal, Duration, Details. Recurring-contribution
    /// rows show the monthly amount in the details column.
    pub fn render_investment_portfolio(&self) -> String {
        let mut lines = vec![
            String::new(),
            "--- Investment Portfolio ---".to_string(),
            format!(
                "{:<15}{:>10}{:>12}      {}",
                "Type", "Principal", "Duration", "Details"
            ),
            "-".repeat(70),
        ];

        for investment in &self.investments {
            let details = match &investment.kind {
                InvestmentKind::RecurringContribution {
                    monthly_contribution,
                } => format!("(Monthly: {})", monthly_contribution),
                InvestmentKind::FixedDeposit => String::new(),
            };
            lines.push(format!(
                "{:<15}{:>10}{:>8} yrs      {}",
                investment.kind.label(),
                investment.principal.to_string(),
                investment.duration_years,
                details
            ));
        }

        lines.join("\n")
    }

    /// Renders the maturity projection for every investment.
    ///
    /// Each entry carries a 1-based index, the category label, and the
    /// maturity value to 2 decimal places with the currency suffix.
    pub fn render_investment_projections(&self) -> String {
        let mut lines = vec![
            String::new(),
            "--- Investment Maturity Projections ---".to_string(),
        ];

        for (index, investment) in self.investments.iter().enumerate() {
            lines.push(format!(
                "Portfolio Item {} ({}):",
                index + 1,
                investment.kind.label()
            ));
            lines.push(format!(
                "  Matures to: {} INR",
                investment.maturity_value()
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use std::str::FromStr;

    fn inr(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert_eq!(ledger.transactions().count(), 0);
        assert_eq!(ledger.investments().count(), 0);
    }

    #[test]
    fn test_transactions_keep_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::income(inr("100"), "first"));
        ledger.add_transaction(Transaction::expenditure(inr("50"), "second"));
        ledger.add_transaction(Transaction::income(inr("25"), "third"));

        let descriptions: Vec<_> = ledger.transactions().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, ["first", "second", "third"]);
    }

    #[test]
    fn test_collections_are_independent() {
        let mut ledger = Ledger::new();
        ledger.add_investment(Investment::fixed_deposit(inr("1000"), 1));
        ledger.add_transaction(Transaction::income(inr("100"), "salary"));
        ledger.add_investment(Investment::recurring(inr("500"), 2, inr("50")));

        assert_eq!(ledger.transactions().count(), 1);
        assert_eq!(ledger.investments().count(), 2);

        let labels: Vec<_> = ledger.investments().map(|i| i.kind.label()).collect();
        assert_eq!(labels, ["Fixed Deposit", "Recurring Plan"]);
    }

    #[test]
    fn test_transaction_history_rows() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::income(inr("1200.5"), "Salary"));
        ledger.add_transaction(Transaction::expenditure(inr("300"), "Rent"));

        let table = ledger.render_transaction_history();
        assert!(table.contains("--- Transaction History ---"));
        assert!(table.contains("Description"));

        let rows: Vec<_> = table.lines().skip(4).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Income"));
        assert!(rows[0].contains("1200.50"));
        assert!(rows[0].ends_with("Salary"));
        assert!(rows[1].starts_with("Expenditure"));
        assert!(rows[1].contains("300.00"));
    }

    #[test]
    fn test_amount_column_right_aligned() {
        let mut ledger = Ledger::new();
        ledger.add_transaction(Transaction::income(inr("5"), "a"));
        ledger.add_transaction(Transaction::income(inr("12345.67"), "b"));

        let table = ledger.render_transaction_history();
        let rows: Vec<_> = table.lines().skip(4).collect();

        // Both amounts end at the same column.
        assert_eq!(rows[0].find("    a"), rows[1].find("    b"));
    }

    #[test]
    fn test_portfolio_shows_monthly_for_recurring_only() {
        let mut ledger = Ledger::new();
        ledger.add_investment(Investment::recurring(inr("1000"), 2, inr("250")));
        ledger.add_investment(Investment::fixed_deposit(inr("2000"), 3));

        let table = ledger.render_investment_portfolio();
        assert!(table.contains("--- Investment Portfolio ---"));

        let rows: Vec<_> = table.lines().skip(4).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("Recurring Plan"));
        assert!(rows[0].contains("(Monthly: 250.00)"));
        assert!(rows[0].contains("2 yrs"));
        assert!(rows[1].contains("Fixed Deposit"));
        assert!(!rows[1].contains("Monthly"));
    }

    #[test]
    fn test_projections_are_indexed_from_one() {
        let mut ledger = Ledger::new();
        ledger.add_investment(Investment::fixed_deposit(inr("3000"), 2));
        ledger.add_investment(Investment::fixed_deposit(inr("1000"), 5));

        let report = ledger.render_investment_projections();
        assert!(report.contains("Portfolio Item 1 (Fixed Deposit):"));
        assert!(report.contains("  Matures to: 3441.12 INR"));
        assert!(report.contains("Portfolio Item 2 (Fixed Deposit):"));
        assert!(report.contains("  Matures to: 1409.12 INR"));
    }

    #[test]
    fn test_empty_reports_have_headers_only() {
        let ledger = Ledger::new();
        assert_eq!(ledger.render_transaction_history().lines().count(), 4);
        assert_eq!(ledger.render_investment_projections().lines().count(), 2);
    }
}
