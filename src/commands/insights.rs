// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};

use crate::ai::Gateway;
use crate::catalog;
use crate::i18n;
use crate::models::AppState;
use crate::utils::pretty_table;

/// Premium-gated AI report: the advice and anomaly calls go out as a pair
/// and are shown together.
pub fn handle(state: &AppState) -> Result<()> {
    let labels = i18n::labels(state.language);
    let Some(user) = state.user.as_ref() else {
        bail!("No active session (run: poisha login)");
    };
    if !user.is_premium() {
        println!("{}", labels.premium_feature);
        println!("Upgrade with: poisha upgrade --via bkash|nagad");
        return Ok(());
    }

    let gateway = Gateway::from_env();
    if !gateway.has_credential() {
        eprintln!("ai: GEMINI_API_KEY not set; responses will be degraded");
    }
    let (advice, anomaly) = gateway.insights(&state.transactions, state.language);

    println!("{}", labels.ai_advice);
    println!();
    println!("{}", advice);
    if let Some(report) = anomaly {
        println!();
        if report.has_anomaly {
            println!("⚠ {}", report.explanation);
        } else {
            println!("{}", report.explanation);
        }
    }
    Ok(())
}

/// Direct access to categorize-from-text.
pub fn categorize(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    let text = m.get_one::<String>("text").unwrap();
    let labels = i18n::labels(state.language);

    let gateway = Gateway::from_env();
    let Some(guess) = gateway.categorize(text, &state.categories) else {
        println!("{}", labels.service_unavailable);
        return Ok(());
    };

    let matched = catalog::match_category(&guess.category, &state.categories)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| guess.category.clone());
    println!(
        "{}",
        pretty_table(
            &["Type", labels.amount, labels.category, "Recurring"],
            vec![vec![
                guess.transaction_type().to_string(),
                guess.amount.to_string(),
                matched,
                guess
                    .is_recurring
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]],
        )
    );
    Ok(())
}
