// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use poisha::ai::{parse_structured, AnomalyReport, CategoryGuess, Gateway};
use poisha::catalog::default_categories;
use poisha::models::{Language, Transaction, TransactionType, Wallet};
use rust_decimal::Decimal;

fn txn(amount: &str) -> Transaction {
    Transaction {
        id: poisha::utils::new_id(),
        uid: "user-test1".to_string(),
        r#type: TransactionType::Expense,
        amount: amount.parse::<Decimal>().unwrap(),
        category: "Food".to_string(),
        wallet: Wallet::Cash,
        note: "lunch".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
        created_at: 0,
    }
}

#[test]
fn categorize_without_credential_is_absent() {
    let gateway = Gateway::new(None);
    let guess = gateway.categorize("Spent 1500 for grocery at Unimart", &default_categories());
    assert!(guess.is_none());
}

#[test]
fn advise_without_credential_is_fixed_sentence() {
    let gateway = Gateway::new(None);
    let txns = vec![txn("100")];
    assert_eq!(
        gateway.advise(&txns, Language::EN),
        "AI service unavailable."
    );
}

#[test]
fn advise_with_empty_list_is_insufficient_data_in_bengali() {
    // Credential present, but no data: the fixed sentence comes back before
    // any network attempt.
    let gateway = Gateway::new(Some("test-key".to_string()));
    assert_eq!(
        gateway.advise(&[], Language::BN),
        "বিশ্লেষণ করার জন্য যথেষ্ট তথ্য নেই।"
    );
}

#[test]
fn anomalies_below_sample_floor_are_absent() {
    // Four transactions stay under the floor even with a credential, so the
    // gateway answers absent without touching the network.
    let gateway = Gateway::new(Some("test-key".to_string()));
    let txns = vec![txn("10"), txn("20"), txn("30"), txn("40")];
    assert!(gateway.detect_anomalies(&txns, Language::EN).is_none());
}

#[test]
fn anomalies_without_credential_are_absent() {
    let gateway = Gateway::new(None);
    let txns = vec![txn("10"), txn("20"), txn("30"), txn("40"), txn("50")];
    assert!(gateway.detect_anomalies(&txns, Language::BN).is_none());
}

#[test]
fn structured_decode_accepts_plain_json() {
    let report: AnomalyReport =
        parse_structured(r#"{"hasAnomaly": true, "explanation": "one entry dwarfs the rest"}"#)
            .unwrap();
    assert!(report.has_anomaly);
    assert_eq!(report.explanation, "one entry dwarfs the rest");
}

#[test]
fn structured_decode_strips_markdown_fences() {
    let raw = "```json\n{\"hasAnomaly\": false, \"explanation\": \"all normal\"}\n```";
    let report: AnomalyReport = parse_structured(raw).unwrap();
    assert!(!report.has_anomaly);
}

#[test]
fn structured_decode_rejects_malformed_payloads() {
    assert!(parse_structured::<AnomalyReport>("I think everything looks fine!").is_none());
    assert!(parse_structured::<AnomalyReport>(r#"{"hasAnomaly": "maybe"}"#).is_none());
    // Missing mandatory fields is a structural mismatch too.
    assert!(parse_structured::<CategoryGuess>(r#"{"category": "Food"}"#).is_none());
}

#[test]
fn category_guess_defaults_to_expense_when_type_is_odd() {
    let guess: CategoryGuess = parse_structured(
        r#"{"amount": 1500, "category": "Food", "type": "SOMETHING_ELSE"}"#,
    )
    .unwrap();
    assert_eq!(guess.transaction_type(), TransactionType::Expense);
    assert_eq!(guess.amount, Decimal::from(1500));

    let income: CategoryGuess =
        parse_structured(r#"{"amount": 5000, "category": "Salary", "type": "income"}"#).unwrap();
    assert_eq!(income.transaction_type(), TransactionType::Income);
}
