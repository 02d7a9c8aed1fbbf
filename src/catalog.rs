// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Closed set of icon tags the category registry uses. Anything else in a
/// stored snapshot deserializes to the `DollarSign` fallback instead of
/// failing the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum IconTag {
    Utensils,
    ShoppingCart,
    Car,
    Home,
    Zap,
    HeartPulse,
    GraduationCap,
    Smartphone,
    Briefcase,
    DollarSign,
}

impl From<String> for IconTag {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Utensils" => IconTag::Utensils,
            "ShoppingCart" => IconTag::ShoppingCart,
            "Car" => IconTag::Car,
            "Home" => IconTag::Home,
            "Zap" => IconTag::Zap,
            "HeartPulse" => IconTag::HeartPulse,
            "GraduationCap" => IconTag::GraduationCap,
            "Smartphone" => IconTag::Smartphone,
            "Briefcase" => IconTag::Briefcase,
            _ => IconTag::DollarSign,
        }
    }
}

impl IconTag {
    /// Terminal glyph for the tag.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconTag::Utensils => "🍽",
            IconTag::ShoppingCart => "🛒",
            IconTag::Car => "🚗",
            IconTag::Home => "🏠",
            IconTag::Zap => "⚡",
            IconTag::HeartPulse => "💓",
            IconTag::GraduationCap => "🎓",
            IconTag::Smartphone => "📱",
            IconTag::Briefcase => "💼",
            IconTag::DollarSign => "💲",
        }
    }
}

/// System-seeded category registry. Read-only reference data; there is no
/// user-defined-category path.
pub fn default_categories() -> Vec<Category> {
    let seed: [(&str, &str, &str, IconTag); 10] = [
        ("cat1", "Food", "খাবার", IconTag::Utensils),
        ("cat2", "Shopping", "কেনাকাটা", IconTag::ShoppingCart),
        ("cat3", "Transport", "যাতায়াত", IconTag::Car),
        ("cat4", "Rent", "ভাড়া", IconTag::Home),
        ("cat5", "Utilities", "ইউটিলিটি", IconTag::Zap),
        ("cat6", "Health", "স্বাস্থ্য", IconTag::HeartPulse),
        ("cat7", "Education", "শিক্ষা", IconTag::GraduationCap),
        ("cat8", "Mobile", "মোবাইল বিল", IconTag::Smartphone),
        ("cat9", "Salary", "বেতন", IconTag::Briefcase),
        ("cat10", "Business", "ব্যবসা", IconTag::DollarSign),
    ];
    seed.iter()
        .map(|(id, name, name_bn, icon)| Category {
            id: (*id).to_string(),
            name: (*name).to_string(),
            name_bn: (*name_bn).to_string(),
            icon: *icon,
            created_by: "system".to_string(),
        })
        .collect()
}

/// Match an AI-suggested category string back to the registry:
/// case-insensitive on the English name, exact on the Bengali name.
/// No match means the caller keeps whatever was already selected.
pub fn match_category<'a>(suggestion: &str, categories: &'a [Category]) -> Option<&'a Category> {
    let lowered = suggestion.to_lowercase();
    categories
        .iter()
        .find(|c| c.name.to_lowercase() == lowered || c.name_bn == suggestion)
}

pub fn find_by_name<'a>(name: &str, categories: &'a [Category]) -> Option<&'a Category> {
    categories.iter().find(|c| c.name == name)
}
