//! ASCII bar chart of percentage spent per category.

use spendbook_domain::Category;

use crate::error::CoreError;
use crate::summary::spend_shares;

/// Renders the spend chart for the given categories.
///
/// Layout, top to bottom: the title line, one row per ten-percent step from
/// 100 down to 0 with a bar cell (`o` plus two spaces) wherever the row is at
/// or below a category's share, a dashed separator reaching two columns past
/// the last bar, and the category names written vertically. The final name
/// row carries no trailing newline.
///
/// An empty slice is rejected; there is nothing to chart.
pub fn create_spend_chart(categories: &[Category]) -> Result<String, CoreError> {
    if categories.is_empty() {
        return Err(CoreError::NoCategories);
    }

    let shares = spend_shares(categories);
    tracing::debug!(categories = categories.len(), "rendering spend chart");

    let mut output = String::from("Percentage spent by category\n");

    for row in (0..=100u32).rev().step_by(10) {
        output.push_str(&format!("{row:>3}| "));
        for share in &shares {
            output.push_str(if row <= share.percent { "o  " } else { "   " });
        }
        output.push('\n');
    }

    output.push_str("    -");
    output.push_str(&"---".repeat(shares.len()));
    output.push('\n');

    let names: Vec<Vec<char>> = shares
        .iter()
        .map(|share| share.name.chars().collect())
        .collect();
    let tallest = names.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..tallest {
        output.push_str("     ");
        for name in &names {
            match name.get(row) {
                Some(ch) => {
                    output.push(*ch);
                    output.push_str("  ");
                }
                None => output.push_str("   "),
            }
        }
        if row + 1 < tallest {
            output.push('\n');
        }
    }

    Ok(output)
}
