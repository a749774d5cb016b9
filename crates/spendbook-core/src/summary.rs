//! Aggregation of withdrawal totals into per-category spend shares.

use spendbook_domain::Category;

/// One category's slice of the total withdrawal volume.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendShare {
    pub name: String,
    /// Sum of the category's withdrawal amounts; zero or negative.
    pub spent: f64,
    /// Share of total spending, rounded down to the nearest multiple of 10.
    pub percent: u32,
}

/// Computes each category's share of the combined withdrawal volume.
///
/// Deposits are excluded entirely; only withdrawals count toward spending.
/// When no category has any withdrawals there is no volume to apportion and
/// every share's percent is reported as 0.
pub fn spend_shares(categories: &[Category]) -> Vec<SpendShare> {
    let total_spent: f64 = categories.iter().map(Category::spent).sum();
    if total_spent == 0.0 && !categories.is_empty() {
        tracing::warn!("no withdrawals recorded; reporting every spend share as zero");
    }

    categories
        .iter()
        .map(|category| {
            let spent = category.spent();
            SpendShare {
                name: category.name().to_string(),
                spent,
                percent: percent_bucket(spent, total_spent),
            }
        })
        .collect()
}

/// Buckets `spent / total` to the nearest lower multiple of 10, in percent.
fn percent_bucket(spent: f64, total_spent: f64) -> u32 {
    if total_spent == 0.0 {
        return 0;
    }
    let ratio = (spent / total_spent * 100.0).abs();
    (ratio / 10.0).floor() as u32 * 10
}
