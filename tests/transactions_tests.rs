// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use poisha::cli;
use poisha::commands::transactions;
use poisha::models::{AppState, User, UserRole};
use poisha::utils::now_millis;

fn logged_in_state() -> AppState {
    let mut state = AppState::default();
    state.user = Some(User {
        uid: "user-test1".to_string(),
        name: "Premium Client".to_string(),
        email: "client@poisha.app".to_string(),
        role: UserRole::User,
        created_at: now_millis(),
        subscription: None,
    });
    state
}

fn tx_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["poisha", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    tx_m.clone()
}

#[test]
fn add_with_empty_registry_needs_an_explicit_category() {
    // An empty category list is still a structurally valid snapshot; adding
    // without --category must come back as an error, not a panic.
    let mut state = logged_in_state();
    state.categories.clear();
    let tx_m = tx_matches(&["add", "--amount", "10"]);
    let err = transactions::handle(&mut state, &tx_m).unwrap_err();
    assert!(err.to_string().contains("--category"));
    assert!(state.transactions.is_empty());
}

#[test]
fn add_without_session_is_rejected() {
    let mut state = AppState::default();
    let tx_m = tx_matches(&["add", "--amount", "10", "--category", "Food"]);
    let err = transactions::handle(&mut state, &tx_m).unwrap_err();
    assert!(err.to_string().contains("poisha login"));
    assert!(state.transactions.is_empty());
}

#[test]
fn add_without_amount_or_ai_is_rejected() {
    let mut state = logged_in_state();
    let tx_m = tx_matches(&["add", "--category", "Food"]);
    let err = transactions::handle(&mut state, &tx_m).unwrap_err();
    assert!(err.to_string().contains("Amount required"));
    assert!(state.transactions.is_empty());
}
