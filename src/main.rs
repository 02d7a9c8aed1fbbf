// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use poisha::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // The snapshot is loaded once and owned here; state-changing handlers
    // persist it themselves after an accepted mutation.
    let mut state = store::load();

    match matches.subcommand() {
        Some(("login", sub)) => commands::session::login(&mut state, sub)?,
        Some(("logout", _)) => commands::session::logout(&mut state)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut state, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&state, sub)?,
        Some(("categorize", sub)) => commands::insights::categorize(&state, sub)?,
        Some(("insights", _)) => commands::insights::handle(&state)?,
        Some(("profile", _)) => commands::profile::show(&state)?,
        Some(("upgrade", sub)) => commands::profile::upgrade(&mut state, sub)?,
        Some(("config", sub)) => commands::config::handle(&mut state, sub)?,
        Some(("admin", _)) => commands::admin::handle(&state)?,
        Some(("doctor", _)) => commands::doctor::handle(&state)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
