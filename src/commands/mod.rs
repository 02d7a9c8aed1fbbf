// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod admin;
pub mod config;
pub mod dashboard;
pub mod doctor;
pub mod insights;
pub mod profile;
pub mod session;
pub mod transactions;
