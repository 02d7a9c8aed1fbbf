// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::bail;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{self, IconTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "INCOME")]
    Income,
    #[serde(rename = "EXPENSE")]
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "INCOME"),
            TransactionType::Expense => write!(f, "EXPENSE"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            other => bail!("Invalid transaction type '{}' (use income|expense)", other),
        }
    }
}

/// Fixed set of payment wallets. Serialized with the display strings the
/// snapshot has always used, so `bKash` keeps its lowercase b.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wallet {
    Cash,
    Bank,
    #[serde(rename = "bKash")]
    Bkash,
    Nagad,
}

impl Wallet {
    pub const ALL: [Wallet; 4] = [Wallet::Cash, Wallet::Bank, Wallet::Bkash, Wallet::Nagad];

    pub fn as_str(&self) -> &'static str {
        match self {
            Wallet::Cash => "Cash",
            Wallet::Bank => "Bank",
            Wallet::Bkash => "bKash",
            Wallet::Nagad => "Nagad",
        }
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wallet {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(Wallet::Cash),
            "bank" => Ok(Wallet::Bank),
            "bkash" => Ok(Wallet::Bkash),
            "nagad" => Ok(Wallet::Nagad),
            other => bail!("Unknown wallet '{}' (use cash|bank|bkash|nagad)", other),
        }
    }
}

/// A recorded income or expense entry. Immutable once created: there is no
/// edit or delete path, rows live as long as the snapshot does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub uid: String,
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub wallet: Wallet,
    pub note: String,
    pub date: NaiveDate,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub name_bn: String,
    pub icon: IconTag,
    pub created_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "USER")]
    User,
}

impl FromStr for UserRole {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(UserRole::Admin),
            "USER" => Ok(UserRole::User),
            other => bail!("Unknown role '{}' (use admin|user)", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plan {
    #[serde(rename = "FREE")]
    Free,
    #[serde(rename = "PREMIUM")]
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub plan: Plan,
    pub status: SubscriptionStatus,
    pub start_date: i64,
    pub end_date: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
}

impl User {
    pub fn is_premium(&self) -> bool {
        self.subscription
            .as_ref()
            .map(|s| s.plan == Plan::Premium && s.status == SubscriptionStatus::Active)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    EN,
    BN,
}

impl FromStr for Language {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EN" => Ok(Language::EN),
            "BN" => Ok(Language::BN),
            other => bail!("Unknown language '{}' (use EN|BN)", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
}

impl FromStr for Theme {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => bail!("Unknown theme '{}' (use light|dark)", other),
        }
    }
}

/// The application snapshot: the single unit of durability. The whole value
/// is rewritten on every accepted mutation and must always round-trip
/// through serde_json.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub user: Option<User>,
    pub loading: bool,
    pub language: Language,
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            transactions: Vec::new(),
            categories: catalog::default_categories(),
            user: None,
            loading: false,
            language: Language::BN,
            theme: Theme::Dark,
        }
    }
}
