//! spendbook-domain
//!
//! Pure domain models (Category, Transaction). No I/O, no CLI, no storage.
//! Only data types, ledger arithmetic, and their fixed-format renderings.

pub mod category;
pub mod common;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use transaction::*;
