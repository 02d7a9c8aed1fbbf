// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use poisha::catalog::{default_categories, match_category, IconTag};

#[test]
fn registry_is_system_seeded() {
    let cats = default_categories();
    assert_eq!(cats.len(), 10);
    assert!(cats.iter().all(|c| c.created_by == "system"));
    assert_eq!(cats[0].name, "Food");
    assert_eq!(cats[0].name_bn, "খাবার");
}

#[test]
fn match_back_is_case_insensitive_on_english_names() {
    let cats = default_categories();
    assert_eq!(match_category("food", &cats).unwrap().id, "cat1");
    assert_eq!(match_category("TRANSPORT", &cats).unwrap().id, "cat3");
}

#[test]
fn match_back_accepts_bengali_names() {
    let cats = default_categories();
    assert_eq!(match_category("বেতন", &cats).unwrap().name, "Salary");
}

#[test]
fn match_back_misses_yield_none() {
    let cats = default_categories();
    assert!(match_category("Cryptocurrency", &cats).is_none());
    assert!(match_category("", &cats).is_none());
}

#[test]
fn unknown_icon_tags_fall_back() {
    // A snapshot written by an older build may carry tags outside the closed
    // set; they land on the fallback instead of poisoning the load.
    let tag: IconTag = serde_json::from_str("\"Shirt\"").unwrap();
    assert_eq!(tag, IconTag::DollarSign);
    let known: IconTag = serde_json::from_str("\"Utensils\"").unwrap();
    assert_eq!(known, IconTag::Utensils);
}

#[test]
fn every_tag_renders_a_glyph() {
    let cats = default_categories();
    for c in &cats {
        assert!(!c.icon.glyph().is_empty());
    }
}
