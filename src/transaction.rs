//! Income and expenditure records.

use crate::money::Money;

/// Direction of a recorded monetary movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money entering the account.
    Income,

    /// Money leaving the account.
    Expenditure,
}

impl TransactionKind {
    /// Label used in report tables.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expenditure => "Expenditure",
        }
    }
}

/// A single recorded monetary movement.
///
/// Immutable once created. Owned exclusively by the ledger, which keeps
/// transactions in insertion order and never removes them.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Income or expenditure.
    pub kind: TransactionKind,

    /// Amount moved. Non-negative.
    pub amount: Money,

    /// Free-text description, possibly empty.
    pub description: String,
}

impl Transaction {
    /// Creates an income record.
    pub fn income(amount: Money, description: impl Into<String>) -> Self {
        Transaction {
            kind: TransactionKind::Income,
            amount,
            description: description.into(),
        }
    }

    /// Creates an expenditure record.
    pub fn expenditure(amount: Money, description: impl Into<String>) -> Self {
        Transaction {
            kind: TransactionKind::Expenditure,
            amount,
            description: description.into(),
        }
    }
}
