//! Fixture data used by the demo fallback policy.
//!
//! # Invariants
//! - Values are fixed; compatibility tests compare them literally.

use crate::model::memo::{Category, CategoryId, Memo, MemoDraft, MemoId};

const RESTAURANTS: CategoryId = CategoryId(2);

/// Categories shown when the category fetch fails.
pub fn fallback_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Personal"),
        Category::new(2, "Restaurants"),
        Category::new(3, "Work"),
    ]
}

/// Memo list shown when a category's memo fetch fails.
pub fn fallback_memos(category_id: CategoryId) -> Vec<Memo> {
    if category_id != RESTAURANTS {
        return Vec::new();
    }
    vec![
        Memo::new(
            10,
            Some(RESTAURANTS),
            "Blue Plate",
            "Blue Plate is a restaurant.",
        ),
        Memo::new(
            11,
            Some(RESTAURANTS),
            "Daily Grill",
            "Daily Grill is a restaurant.",
        ),
    ]
}

/// Edit buffer contents when a memo detail fetch fails.
pub fn fallback_memo_detail(memo_id: MemoId) -> MemoDraft {
    match memo_id.0 {
        11 => MemoDraft::new("Daily Grill", "13 Newcastle Ave. Woodbridge, VA 22191"),
        10 => MemoDraft::new("Blue Plate", "Blue Plate is a restaurant."),
        _ => MemoDraft::blank(),
    }
}
