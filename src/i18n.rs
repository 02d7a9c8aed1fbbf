// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Language;

/// Static label table for the two supported languages. Deliberately a plain
/// lookup, not an i18n framework.
pub struct Labels {
    pub dashboard: &'static str,
    pub history: &'static str,
    pub balance: &'static str,
    pub income: &'static str,
    pub expense: &'static str,
    pub category: &'static str,
    pub wallet: &'static str,
    pub note: &'static str,
    pub date: &'static str,
    pub amount: &'static str,
    pub transactions: &'static str,
    pub total_balance: &'static str,
    pub recent_activity: &'static str,
    pub ai_advice: &'static str,
    pub premium_feature: &'static str,
    pub txn_added: &'static str,
    pub service_unavailable: &'static str,
    pub insufficient_data: &'static str,
}

static EN: Labels = Labels {
    dashboard: "Dashboard",
    history: "History",
    balance: "Balance",
    income: "Income",
    expense: "Expense",
    category: "Category",
    wallet: "Wallet",
    note: "Transaction Details",
    date: "Date",
    amount: "Amount (BDT)",
    transactions: "Recent Transactions",
    total_balance: "Net Worth",
    recent_activity: "Recent Ledger",
    ai_advice: "AI Insights",
    premium_feature: "Executive Pro Feature",
    txn_added: "Transaction added successfully",
    service_unavailable: "AI service unavailable.",
    insufficient_data: "Not enough data for professional analysis.",
};

static BN: Labels = Labels {
    dashboard: "ড্যাশবোর্ড",
    history: "ইতিহাস",
    balance: "ব্যালেন্স",
    income: "আয়",
    expense: "ব্যয়",
    category: "ক্যাটাগরি",
    wallet: "ওয়ালেট",
    note: "লেনদেনের বর্ণনা",
    date: "তারিখ",
    amount: "টাকার পরিমাণ",
    transactions: "লেনদেনসমূহ",
    total_balance: "মোট সম্পদ",
    recent_activity: "সাম্প্রতিক হিসাব",
    ai_advice: "এআই রিপোর্ট",
    premium_feature: "প্রো ফিচার",
    txn_added: "লেনদেন সফলভাবে যোগ করা হয়েছে",
    service_unavailable: "এআই সেবা এখন উপলব্ধ নয়।",
    insufficient_data: "বিশ্লেষণ করার জন্য যথেষ্ট তথ্য নেই।",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::EN => &EN,
        Language::BN => &BN,
    }
}

/// BDT currency marker.
pub const CURRENCY: &str = "৳";
