use spendbook_core::{create_spend_chart, CoreError};
use spendbook_domain::Category;

fn category_with_spend(name: &str, withdrawn: f64) -> Category {
    let mut category = Category::new(name);
    category.deposit(withdrawn + 1.0, "");
    assert!(category.withdraw(withdrawn, ""));
    category
}

#[test]
fn chart_matches_two_category_layout_exactly() {
    // Food 60 of 80 spent -> 75% -> bucket 70; Clothing 20 of 80 -> 25% -> 20.
    let categories = vec![
        category_with_spend("Food", 60.0),
        category_with_spend("Clothing", 20.0),
    ];

    let expected = [
        "Percentage spent by category",
        "100|       ",
        " 90|       ",
        " 80|       ",
        " 70| o     ",
        " 60| o     ",
        " 50| o     ",
        " 40| o     ",
        " 30| o     ",
        " 20| o  o  ",
        " 10| o  o  ",
        "  0| o  o  ",
        "    -------",
        "     F  C  ",
        "     o  l  ",
        "     o  o  ",
        "     d  t  ",
        "        h  ",
        "        i  ",
        "        n  ",
        "        g  ",
    ]
    .join("\n");

    let chart = create_spend_chart(&categories).expect("chart");
    assert_eq!(chart, expected);
}

#[test]
fn chart_matches_four_category_layout_exactly() {
    let categories = vec![
        category_with_spend("Food", 600.0),
        category_with_spend("Clothing", 200.0),
        category_with_spend("Auto", 100.0),
        category_with_spend("Test", 100.0),
    ];

    let expected = [
        "Percentage spent by category",
        "100|             ",
        " 90|             ",
        " 80|             ",
        " 70|             ",
        " 60| o           ",
        " 50| o           ",
        " 40| o           ",
        " 30| o           ",
        " 20| o  o        ",
        " 10| o  o  o  o  ",
        "  0| o  o  o  o  ",
        "    -------------",
        "     F  C  A  T  ",
        "     o  l  u  e  ",
        "     o  o  t  s  ",
        "     d  t  o  t  ",
        "        h        ",
        "        i        ",
        "        n        ",
        "        g        ",
    ]
    .join("\n");

    let chart = create_spend_chart(&categories).expect("chart");
    assert_eq!(chart, expected);
}

#[test]
fn category_without_withdrawals_bars_only_at_zero_row() {
    let mut idle = Category::new("Auto");
    idle.deposit(500.0, "");
    let categories = vec![category_with_spend("Food", 80.0), idle];

    let chart = create_spend_chart(&categories).expect("chart");
    let lines: Vec<&str> = chart.lines().collect();

    assert_eq!(lines[11], "  0| o  o  ");
    assert_eq!(lines[10], " 10| o     ");
    assert_eq!(lines[1], "100| o     ");
}

#[test]
fn chart_with_no_withdrawals_anywhere_shows_all_zero_bars() {
    let mut food = Category::new("Food");
    food.deposit(100.0, "");
    let mut clothing = Category::new("Clothing");
    clothing.deposit(100.0, "");

    let chart = create_spend_chart(&[food, clothing]).expect("chart");
    let lines: Vec<&str> = chart.lines().collect();

    assert_eq!(lines[11], "  0| o  o  ");
    for row_line in &lines[1..11] {
        assert!(!row_line.contains('o'), "unexpected bar in {row_line:?}");
    }
}

#[test]
fn chart_rejects_empty_category_list() {
    assert_eq!(create_spend_chart(&[]), Err(CoreError::NoCategories));
}
