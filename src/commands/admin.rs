// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};

use crate::models::{AppState, TransactionType, UserRole};
use crate::utils::pretty_table;

/// Role-gated console summary over the local snapshot.
pub fn handle(state: &AppState) -> Result<()> {
    let Some(user) = state.user.as_ref() else {
        bail!("No active session (run: poisha login)");
    };
    if user.role != UserRole::Admin {
        bail!("Admin access required");
    }

    let expenses = state
        .transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense)
        .count();
    let premium = if user.is_premium() { "yes" } else { "no" };
    println!(
        "{}",
        pretty_table(
            &["Metric", "Value"],
            vec![
                vec!["transactions".into(), state.transactions.len().to_string()],
                vec!["expense entries".into(), expenses.to_string()],
                vec!["categories".into(), state.categories.len().to_string()],
                vec!["premium active".into(), premium.to_string()],
            ],
        )
    );
    Ok(())
}
