// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use poisha::models::{Transaction, TransactionType, Wallet};
use poisha::report;
use rust_decimal::Decimal;

fn txn(
    r#type: TransactionType,
    amount: &str,
    category: &str,
    date: &str,
    note: &str,
) -> Transaction {
    Transaction {
        id: poisha::utils::new_id(),
        uid: "user-test1".to_string(),
        r#type,
        amount: amount.parse::<Decimal>().unwrap(),
        category: category.to_string(),
        wallet: Wallet::Cash,
        note: note.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        created_at: 0,
    }
}

#[test]
fn totals_scenario() {
    let txns = vec![
        txn(TransactionType::Expense, "1500", "Food", "2025-08-10", ""),
        txn(TransactionType::Income, "5000", "Salary", "2025-08-10", ""),
    ];
    let t = report::totals(&txns);
    assert_eq!(t.income, Decimal::from(5000));
    assert_eq!(t.expense, Decimal::from(1500));
    assert_eq!(t.balance, Decimal::from(3500));
}

#[test]
fn totals_empty_is_zero() {
    let t = report::totals(&[]);
    assert_eq!(t.income, Decimal::ZERO);
    assert_eq!(t.expense, Decimal::ZERO);
    assert_eq!(t.balance, Decimal::ZERO);
}

#[test]
fn totals_balance_identity() {
    let txns = vec![
        txn(TransactionType::Income, "120.50", "Salary", "2025-08-01", ""),
        txn(TransactionType::Expense, "30.25", "Food", "2025-08-02", ""),
        txn(TransactionType::Expense, "10", "Transport", "2025-08-03", ""),
    ];
    let t = report::totals(&txns);
    assert_eq!(t.balance, t.income - t.expense);
}

#[test]
fn daily_series_has_ten_points_on_empty_input() {
    let today = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
    let series = report::daily_series(&[], today);
    assert_eq!(series.len(), 10);
    for p in &series {
        assert_eq!(p.income, Decimal::ZERO);
        assert_eq!(p.expense, Decimal::ZERO);
    }
}

#[test]
fn daily_series_window_ends_today_oldest_first() {
    let today = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
    let series = report::daily_series(&[], today);
    assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2025, 8, 21).unwrap());
    assert_eq!(series[9].date, today);
    for pair in series.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn daily_series_sums_per_day_and_zero_pads() {
    let today = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
    let txns = vec![
        txn(TransactionType::Expense, "100", "Food", "2025-08-30", ""),
        txn(TransactionType::Expense, "50", "Food", "2025-08-30", ""),
        txn(TransactionType::Income, "900", "Salary", "2025-08-25", ""),
        // Outside the window, must not appear anywhere
        txn(TransactionType::Expense, "999", "Rent", "2025-08-20", ""),
    ];
    let series = report::daily_series(&txns, today);
    assert_eq!(series.len(), 10);
    assert_eq!(series[9].expense, Decimal::from(150));
    assert_eq!(series[9].income, Decimal::ZERO);
    assert_eq!(series[4].income, Decimal::from(900));
    let total_expense: Decimal = series.iter().map(|p| p.expense).sum();
    assert_eq!(total_expense, Decimal::from(150));
}

#[test]
fn breakdown_scenario_and_omits_income() {
    let txns = vec![
        txn(TransactionType::Expense, "1500", "Food", "2025-08-10", ""),
        txn(TransactionType::Income, "5000", "Salary", "2025-08-10", ""),
    ];
    let breakdown = report::category_breakdown(&txns);
    assert_eq!(breakdown, vec![("Food".to_string(), Decimal::from(1500))]);
}

#[test]
fn breakdown_groups_case_sensitively_without_double_counting() {
    let txns = vec![
        txn(TransactionType::Expense, "10", "Food", "2025-08-10", ""),
        txn(TransactionType::Expense, "20", "food", "2025-08-11", ""),
        txn(TransactionType::Expense, "30", "Food", "2025-08-12", ""),
    ];
    let breakdown = report::category_breakdown(&txns);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0], ("Food".to_string(), Decimal::from(40)));
    assert_eq!(breakdown[1], ("food".to_string(), Decimal::from(20)));
    let sum: Decimal = breakdown.iter().map(|(_, v)| *v).sum();
    assert_eq!(sum, Decimal::from(60));
}

#[test]
fn breakdown_empty_when_no_expenses() {
    let txns = vec![txn(TransactionType::Income, "5000", "Salary", "2025-08-10", "")];
    assert!(report::category_breakdown(&txns).is_empty());
}

#[test]
fn search_empty_query_returns_all_in_order() {
    let txns = vec![
        txn(TransactionType::Expense, "10", "Food", "2025-08-12", "lunch"),
        txn(TransactionType::Expense, "20", "Transport", "2025-08-11", "bus"),
        txn(TransactionType::Income, "30", "Salary", "2025-08-10", ""),
    ];
    let hits = report::search(&txns, "");
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].category, "Food");
    assert_eq!(hits[2].category, "Salary");
}

#[test]
fn search_is_case_insensitive_on_note_or_category() {
    let txns = vec![
        txn(TransactionType::Expense, "10", "Food", "2025-08-12", "Lunch at Unimart"),
        txn(TransactionType::Expense, "20", "Transport", "2025-08-11", "bus fare"),
        txn(TransactionType::Expense, "30", "Shopping", "2025-08-10", "groceries"),
    ];
    let by_note = report::search(&txns, "UNIMART");
    assert_eq!(by_note.len(), 1);
    assert_eq!(by_note[0].category, "Food");

    let by_category = report::search(&txns, "shop");
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].note, "groceries");

    assert!(report::search(&txns, "nothing-here").is_empty());
}
