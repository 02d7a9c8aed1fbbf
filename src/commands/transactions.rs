// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rust_decimal::Decimal;

use crate::ai::Gateway;
use crate::catalog;
use crate::i18n;
use crate::models::{AppState, Transaction, TransactionType, Wallet};
use crate::report;
use crate::store;
use crate::utils::{
    fmt_money, maybe_print_json, new_id, now_millis, parse_amount, parse_date, pretty_table,
};

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        Some(("export", sub)) => export(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let Some(user) = state.user.as_ref() else {
        bail!("No active session (run: poisha login)");
    };
    let uid = user.uid.clone();

    let mut r#type: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let wallet: Wallet = sub.get_one::<String>("wallet").unwrap().parse()?;
    let note = sub
        .get_one::<String>("note")
        .cloned()
        .unwrap_or_default();
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };
    let mut amount: Option<Decimal> = sub
        .get_one::<String>("amount")
        .map(|s| parse_amount(s))
        .transpose()?;
    // Free text is tolerated here; the registry is not a foreign key.
    let mut category = match sub.get_one::<String>("category") {
        Some(c) => c.clone(),
        None => match state.categories.first() {
            Some(c) => c.name.clone(),
            None => bail!("No category given and the registry is empty (pass --category)"),
        },
    };

    if sub.get_flag("ai") {
        if note.is_empty() {
            bail!("--ai needs a --note to analyze");
        }
        let gateway = Gateway::from_env();
        match gateway.categorize(&note, &state.categories) {
            Some(guess) => {
                if amount.is_none() {
                    amount = Some(guess.amount);
                }
                // Keep the already-selected category when the suggestion
                // matches nothing in the registry.
                if let Some(cat) = catalog::match_category(&guess.category, &state.categories) {
                    category = cat.name.clone();
                }
                r#type = guess.transaction_type();
            }
            None => eprintln!("AI categorization unavailable; using the flags as given."),
        }
    }

    let Some(amount) = amount else {
        bail!("Amount required (pass --amount, or --ai with a descriptive note)");
    };
    if amount <= Decimal::ZERO {
        bail!("Amount must be positive");
    }

    let txn = Transaction {
        id: new_id(),
        uid,
        r#type,
        amount,
        category,
        wallet,
        note,
        date,
        created_at: now_millis(),
    };
    // Newest first, matching the history view's ordering convention.
    state.transactions.insert(0, txn);
    store::persist(state);
    println!("{}", i18n::labels(state.language).txn_added);
    Ok(())
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let query = sub.get_one::<String>("search").map(|s| s.as_str()).unwrap_or("");

    let mut rows = report::search(&state.transactions, query);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let labels = i18n::labels(state.language);
        let data = rows
            .iter()
            .map(|t| {
                vec![
                    t.date.to_string(),
                    t.r#type.to_string(),
                    t.category.clone(),
                    t.wallet.to_string(),
                    fmt_money(&t.amount),
                    t.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    labels.date,
                    "Type",
                    labels.category,
                    labels.wallet,
                    labels.amount,
                    labels.note,
                ],
                data,
            )
        );
    }
    Ok(())
}

fn export(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "type", "amount", "category", "wallet", "note"])?;
            for t in &state.transactions {
                wtr.write_record([
                    t.date.to_string(),
                    t.r#type.to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                    t.wallet.to_string(),
                    t.note.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&state.transactions)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", state.transactions.len(), out);
    Ok(())
}
