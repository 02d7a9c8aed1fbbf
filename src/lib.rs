// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod ai;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod i18n;
pub mod models;
pub mod report;
pub mod store;
pub mod utils;
