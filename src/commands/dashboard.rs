// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::catalog;
use crate::i18n;
use crate::models::AppState;
use crate::report;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let labels = i18n::labels(state.language);

    let today = chrono::Local::now().date_naive();
    let totals = report::totals(&state.transactions);
    let series = report::daily_series(&state.transactions, today);
    let breakdown = report::category_breakdown(&state.transactions);
    let recent: Vec<_> = state.transactions.iter().take(5).collect();

    if maybe_print_json(
        json_flag,
        jsonl_flag,
        &json!({
            "totals": totals,
            "series": series,
            "categories": breakdown,
            "recent": recent,
        }),
    )? {
        return Ok(());
    }

    println!("{}", labels.dashboard);
    println!(
        "{}",
        pretty_table(
            &[labels.total_balance, labels.income, labels.expense],
            vec![vec![
                fmt_money(&totals.balance),
                fmt_money(&totals.income),
                fmt_money(&totals.expense),
            ]],
        )
    );

    let series_rows = series
        .iter()
        .map(|p| {
            vec![
                p.date.to_string(),
                fmt_money(&p.income),
                fmt_money(&p.expense),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&[labels.date, labels.income, labels.expense], series_rows)
    );

    if !breakdown.is_empty() {
        let cat_rows = breakdown
            .iter()
            .map(|(name, total)| {
                let glyph = catalog::find_by_name(name, &state.categories)
                    .map(|c| c.icon.glyph())
                    .unwrap_or("💲");
                vec![format!("{} {}", glyph, name), fmt_money(total)]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&[labels.category, labels.expense], cat_rows)
        );
    }

    if !recent.is_empty() {
        println!("{}", labels.recent_activity);
        let rows = recent
            .iter()
            .map(|t| {
                vec![
                    t.date.to_string(),
                    t.r#type.to_string(),
                    t.category.clone(),
                    fmt_money(&t.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[labels.date, "Type", labels.category, labels.amount],
                rows
            )
        );
    }
    Ok(())
}
