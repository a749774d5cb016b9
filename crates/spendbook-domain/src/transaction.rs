//! Domain model for a single signed ledger entry.

use serde::{Deserialize, Serialize};

use crate::common::{Amounted, Displayable};

/// One signed monetary entry in a category's ledger.
///
/// Positive amounts are deposits (inflows), negative amounts are withdrawals
/// (outflows). A withdrawal of magnitude `m` is stored as `-m`. Entries are
/// never mutated after being appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    /// Builds a deposit entry carrying the amount as given.
    pub fn deposit(amount: f64, description: impl Into<String>) -> Self {
        Self::new(amount, description)
    }

    /// Builds a withdrawal entry, negating the amount.
    pub fn withdrawal(amount: f64, description: impl Into<String>) -> Self {
        Self::new(-amount, description)
    }

    /// Returns `true` when the entry records an outflow.
    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0.0
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} {:.2}", self.description, self.amount)
    }
}
