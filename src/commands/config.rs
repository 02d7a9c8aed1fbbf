// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{AppState, Language, Theme};
use crate::store;

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("language", sub)) => {
            let lang: Language = sub.get_one::<String>("value").unwrap().parse()?;
            state.language = lang;
            store::persist(state);
            println!("Language set to {:?}", lang);
        }
        Some(("theme", sub)) => {
            let theme: Theme = sub.get_one::<String>("value").unwrap().parse()?;
            state.theme = theme;
            store::persist(state);
            println!("Theme set to {:?}", theme);
        }
        _ => {}
    }
    Ok(())
}
