//! Budget categories and their transaction ledgers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, Identifiable, NamedEntity};
use crate::transaction::Transaction;

/// A named budget category owning an append-only ledger of transactions.
///
/// The ledger's insertion order is its chronological order. Entries are only
/// ever appended; a rejected withdrawal or transfer leaves it untouched. The
/// balance is always the sum of the ledger's amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    name: String,
    ledger: Vec<Transaction>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the ledger, oldest entry first.
    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    /// Records an inflow. Never fails; the amount is stored as given.
    pub fn deposit(&mut self, amount: f64, description: impl Into<String>) {
        self.ledger.push(Transaction::deposit(amount, description));
    }

    /// Records an outflow of `amount`, stored negated, if funds suffice.
    ///
    /// Returns `true` when the withdrawal took place. Insufficient funds is
    /// reported through the return value, never as an error, and leaves the
    /// ledger unchanged.
    pub fn withdraw(&mut self, amount: f64, description: impl Into<String>) -> bool {
        if !self.check_funds(amount) {
            return false;
        }
        self.ledger
            .push(Transaction::withdrawal(amount, description));
        true
    }

    /// Returns `true` iff `amount` does not exceed the current balance.
    ///
    /// Draining the category to exactly zero is allowed. Both [`withdraw`]
    /// and [`transfer`] gate on this check.
    ///
    /// [`withdraw`]: Category::withdraw
    /// [`transfer`]: Category::transfer
    pub fn check_funds(&self, amount: f64) -> bool {
        amount <= self.balance()
    }

    /// Sum of every ledger amount.
    pub fn balance(&self) -> f64 {
        self.ledger.iter().map(|entry| entry.amount).sum()
    }

    /// Sum of the withdrawal amounts only; zero or negative.
    pub fn spent(&self) -> f64 {
        self.ledger
            .iter()
            .filter(|entry| entry.is_withdrawal())
            .map(|entry| entry.amount)
            .sum()
    }

    /// Moves `amount` into `destination` as a paired withdrawal and deposit.
    ///
    /// The withdrawal on `self` carries the description
    /// `Transfer to <destination>`, the deposit on `destination` carries
    /// `Transfer from <self>`. The withdrawal is gated first and the deposit
    /// cannot fail, so a rejected transfer leaves both ledgers unchanged.
    pub fn transfer(&mut self, amount: f64, destination: &mut Category) -> bool {
        if !self.withdraw(amount, format!("Transfer to {}", destination.name)) {
            return false;
        }
        destination.deposit(amount, format!("Transfer from {}", self.name));
        true
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({:.2})", self.name, self.balance())
    }
}

/// Fixed-format statement: a 30-column starred title, one line per ledger
/// entry (description clipped to 23 columns, amount right-aligned in 7 with
/// two decimals), and a closing total line. No trailing newline.
///
/// The title pads each side with `(30 - name_len) / 2` asterisks; an odd
/// remainder makes the line one short of 30 rather than re-padding.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = "*".repeat(30usize.saturating_sub(self.name.chars().count()) / 2);
        writeln!(f, "{pad}{}{pad}", self.name)?;
        for entry in &self.ledger {
            let description: String = entry.description.chars().take(23).collect();
            writeln!(f, "{description:<23}{:7.2}", entry.amount)?;
        }
        write!(f, "Total:{:7.2}", self.balance())
    }
}
