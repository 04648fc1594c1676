//! Category/memo selection with generation tracking.
//!
//! # Responsibility
//! - Apply pure selection transitions (open, collapse, select, clear).
//! - Issue generation tokens so late remote completions can be recognized.
//!
//! # Invariants
//! - `selected_memo_id` is `Some` only while `selected_category_id` is `Some`.
//! - Every category transition bumps both generations; every memo
//!   transition bumps the detail generation.
//! - Generations never decrease.

use crate::model::memo::{CategoryId, MemoId};

/// Token captured when a remote call is issued and compared on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Outcome of `SelectionState::toggle_category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryToggle {
    /// The category was already open and is now closed.
    Collapsed,
    /// A different category is now open; its list must be fetched.
    Opened(Generation),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_category_id: Option<CategoryId>,
    selected_memo_id: Option<MemoId>,
    list_generation: u64,
    detail_generation: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_category_id(&self) -> Option<CategoryId> {
        self.selected_category_id
    }

    pub fn selected_memo_id(&self) -> Option<MemoId> {
        self.selected_memo_id
    }

    /// Opens `category_id`, or collapses it when it is already open.
    pub fn toggle_category(&mut self, category_id: CategoryId) -> CategoryToggle {
        self.list_generation += 1;
        self.detail_generation += 1;
        self.selected_memo_id = None;

        if self.selected_category_id == Some(category_id) {
            self.selected_category_id = None;
            return CategoryToggle::Collapsed;
        }

        self.selected_category_id = Some(category_id);
        CategoryToggle::Opened(Generation(self.list_generation))
    }

    /// Selects one memo inside the open category.
    ///
    /// Returns `None` without changing state when no category is open.
    pub fn select_memo(&mut self, memo_id: MemoId) -> Option<Generation> {
        self.selected_category_id?;
        self.detail_generation += 1;
        self.selected_memo_id = Some(memo_id);
        Some(Generation(self.detail_generation))
    }

    /// Clears the memo selection and invalidates in-flight detail fetches.
    pub fn clear_memo(&mut self) {
        self.detail_generation += 1;
        self.selected_memo_id = None;
    }

    /// Captures the current list generation without changing it.
    pub fn list_token(&self) -> Generation {
        Generation(self.list_generation)
    }

    pub fn is_current_list(&self, token: Generation) -> bool {
        token.0 == self.list_generation
    }

    pub fn is_current_detail(&self, token: Generation) -> bool {
        token.0 == self.detail_generation
    }
}
