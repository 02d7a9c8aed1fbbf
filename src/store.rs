// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::AppState;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Poisha", "poisha"));

/// Fixed storage key: a single JSON blob holding the whole snapshot.
const SNAPSHOT_FILE: &str = "poisha.json";

pub fn snapshot_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(SNAPSHOT_FILE))
}

/// Load the snapshot from the default location. Absence (first run) and
/// corruption both fall back to the default snapshot; this never fails.
pub fn load() -> AppState {
    match snapshot_path() {
        Ok(path) => load_from(&path),
        Err(e) => {
            eprintln!("store: cannot resolve snapshot path ({e}); starting fresh");
            AppState::default()
        }
    }
}

pub fn load_from(path: &Path) -> AppState {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        // First run, or unreadable: either way the default snapshot.
        Err(_) => return AppState::default(),
    };
    match serde_json::from_str::<AppState>(&raw) {
        Ok(state) => state,
        Err(e) => {
            eprintln!(
                "store: snapshot at {} is corrupt ({e}); starting fresh",
                path.display()
            );
            AppState::default()
        }
    }
}

/// Persist the whole snapshot, overwriting the previous blob.
pub fn save(state: &AppState) -> Result<()> {
    let path = snapshot_path()?;
    save_to(state, &path)
}

pub fn save_to(state: &AppState, path: &Path) -> Result<()> {
    let raw = serde_json::to_string_pretty(state).context("Serialize snapshot")?;
    fs::write(path, raw).with_context(|| format!("Write snapshot to {}", path.display()))?;
    Ok(())
}

/// Persistence hook for mutating commands: save, log on failure, never
/// surface the error to the user.
pub fn persist(state: &AppState) {
    if let Err(e) = save(state) {
        eprintln!("store: failed to persist snapshot: {e:#}");
    }
}
