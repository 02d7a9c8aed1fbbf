// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::catalog;
use crate::models::AppState;
use crate::store;
use crate::utils::pretty_table;

pub fn handle(state: &AppState) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Categories referenced by transactions but missing from the registry
    // (free text is tolerated at entry, but worth flagging here).
    let mut seen = Vec::new();
    for t in &state.transactions {
        if catalog::find_by_name(&t.category, &state.categories).is_none()
            && !seen.contains(&t.category)
        {
            seen.push(t.category.clone());
            rows.push(vec!["unknown_category".into(), t.category.clone()]);
        }
    }

    // 2) Amounts that should never have been accepted
    for t in &state.transactions {
        if t.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".into(),
                format!("{} {} on {}", t.amount, t.category, t.date),
            ]);
        }
    }

    // 3) Duplicate transaction ids would break the immutability story
    let mut ids: Vec<&str> = state.transactions.iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    for pair in ids.windows(2) {
        if pair[0] == pair[1] {
            rows.push(vec!["duplicate_id".into(), pair[0].to_string()]);
        }
    }

    if let Ok(path) = store::snapshot_path() {
        println!("Snapshot: {}", path.display());
    }
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
