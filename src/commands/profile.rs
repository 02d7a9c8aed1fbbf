// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};

use crate::models::{AppState, Plan, Subscription, SubscriptionStatus};
use crate::store;
use crate::utils::{new_id, now_millis, pretty_table};

const THIRTY_DAYS_MS: i64 = 30 * 24 * 60 * 60 * 1000;

pub fn show(state: &AppState) -> Result<()> {
    let Some(user) = state.user.as_ref() else {
        println!("No active session (run: poisha login)");
        return Ok(());
    };
    let (plan, status) = user
        .subscription
        .as_ref()
        .map(|s| (format!("{:?}", s.plan), format!("{:?}", s.status)))
        .unwrap_or_else(|| ("-".to_string(), "-".to_string()));
    println!(
        "{}",
        pretty_table(
            &["Name", "Email", "Role", "Plan", "Status"],
            vec![vec![
                user.name.clone(),
                user.email.clone(),
                format!("{:?}", user.role),
                plan,
                status,
            ]],
        )
    );
    Ok(())
}

/// Simulated two-channel payment flow: a short processing delay, a
/// fabricated payment reference, then the subscription flips to Premium.
pub fn upgrade(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    let Some(user) = state.user.as_mut() else {
        bail!("No active session (run: poisha login)");
    };
    let via = m.get_one::<String>("via").unwrap().to_lowercase();
    let channel = match via.as_str() {
        "bkash" => "bKash",
        "nagad" => "Nagad",
        other => bail!("Unknown payment channel '{}' (use bkash|nagad)", other),
    };

    println!("Processing payment via {}...", channel);
    std::thread::sleep(std::time::Duration::from_millis(1500));
    let reference = format!("PAY-{}", &new_id().replace('-', "")[..10].to_uppercase());

    let now = now_millis();
    match user.subscription.as_mut() {
        Some(sub) => {
            sub.plan = Plan::Premium;
            sub.status = SubscriptionStatus::Active;
            sub.transaction_id = Some(reference.clone());
        }
        None => {
            user.subscription = Some(Subscription {
                plan: Plan::Premium,
                status: SubscriptionStatus::Active,
                start_date: now,
                end_date: now + THIRTY_DAYS_MS,
                transaction_id: Some(reference.clone()),
            });
        }
    }
    store::persist(state);
    println!("Subscription upgraded to Premium (ref: {})", reference);
    Ok(())
}
