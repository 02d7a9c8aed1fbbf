// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.
//
// Derived read-only views over the transaction list. Everything here is a
// plain scan recomputed per call: the data is one user's local history, so
// incremental maintenance would buy nothing.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Partition by type and sum. Empty input yields zero totals.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in transactions {
        match t.r#type {
            TransactionType::Income => income += t.amount,
            TransactionType::Expense => expense += t.amount,
        }
    }
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Ten calendar days ending on `today` (inclusive), oldest first. Days with
/// no matching rows are zero points, never omitted. Dates are treated as
/// viewer-local-naive; the caller decides what "today" is.
pub fn daily_series(transactions: &[Transaction], today: NaiveDate) -> Vec<DailyPoint> {
    (0..10)
        .map(|i| {
            let date = today - Duration::days(9 - i);
            let mut income = Decimal::ZERO;
            let mut expense = Decimal::ZERO;
            for t in transactions.iter().filter(|t| t.date == date) {
                match t.r#type {
                    TransactionType::Income => income += t.amount,
                    TransactionType::Expense => expense += t.amount,
                }
            }
            DailyPoint {
                date,
                income,
                expense,
            }
        })
        .collect()
}

/// Expense totals grouped by exact category string, first-seen order.
/// Categories with no expense rows are absent.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    let mut groups: Vec<(String, Decimal)> = Vec::new();
    for t in transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense)
    {
        match groups.iter_mut().find(|(name, _)| *name == t.category) {
            Some((_, total)) => *total += t.amount,
            None => groups.push((t.category.clone(), t.amount)),
        }
    }
    groups
}

/// Case-insensitive substring match on note or category. Empty query is the
/// identity; store order (newest first) is preserved.
pub fn search<'a>(transactions: &'a [Transaction], query: &str) -> Vec<&'a Transaction> {
    let needle = query.to_lowercase();
    transactions
        .iter()
        .filter(|t| {
            t.note.to_lowercase().contains(&needle) || t.category.to_lowercase().contains(&needle)
        })
        .collect()
}
