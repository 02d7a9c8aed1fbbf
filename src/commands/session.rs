// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{
    AppState, Plan, Subscription, SubscriptionStatus, User, UserRole,
};
use crate::store;
use crate::utils::{new_id, now_millis};

const THIRTY_DAYS_MS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Local session simulation: fabricates a user record, no backend involved.
pub fn login(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    let role: UserRole = m.get_one::<String>("role").unwrap().parse()?;
    let now = now_millis();
    let user = match role {
        UserRole::Admin => User {
            uid: "admin-system".to_string(),
            name: "Poisha Executive".to_string(),
            email: "executive@poisha.app".to_string(),
            role,
            created_at: now,
            subscription: Some(free_subscription(now)),
        },
        UserRole::User => User {
            uid: format!("user-{}", &new_id()[..5]),
            name: "Premium Client".to_string(),
            email: "client@poisha.app".to_string(),
            role,
            created_at: now,
            subscription: Some(free_subscription(now)),
        },
    };
    let name = user.name.clone();
    state.user = Some(user);
    store::persist(state);
    println!("Welcome back, {}", name);
    Ok(())
}

pub fn logout(state: &mut AppState) -> Result<()> {
    if state.user.take().is_none() {
        println!("No active session.");
        return Ok(());
    }
    store::persist(state);
    println!("Logged out.");
    Ok(())
}

fn free_subscription(now: i64) -> Subscription {
    Subscription {
        plan: Plan::Free,
        status: SubscriptionStatus::Inactive,
        start_date: now,
        end_date: now + THIRTY_DAYS_MS,
        transaction_id: None,
    }
}
