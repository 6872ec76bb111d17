//! Portfolio grid filter state.
//!
//! DESIGN
//! ======
//! Each item moves through a two-step transition (style change now, display
//! change after a delay). Every transition stamps the item with a fresh
//! generation token and the deferred step only lands if its token is still
//! current, so rapid reselection can never apply a superseded step.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use crate::config::{FILTER_FADE_IN_DELAY_MS, FILTER_HIDDEN_OFFSET_PX, FILTER_HIDE_DELAY_MS};

/// Filter value that matches every category.
pub const FILTER_ALL: &str = "all";

/// Transition phase of one grid item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemPhase {
    #[default]
    Visible,
    /// Displayed but transparent; becomes `Hidden` when its step lands.
    FadingOut,
    Hidden,
    /// Displayed; becomes `Visible` when its step lands.
    FadingIn,
}

/// Inline style values derived from a phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemStyle {
    pub displayed: bool,
    pub opacity: f64,
    pub offset_px: f64,
}

impl ItemPhase {
    #[must_use]
    pub fn style(self) -> ItemStyle {
        match self {
            Self::Visible => ItemStyle { displayed: true, opacity: 1.0, offset_px: 0.0 },
            Self::FadingOut => ItemStyle { displayed: true, opacity: 0.0, offset_px: FILTER_HIDDEN_OFFSET_PX },
            Self::Hidden => ItemStyle { displayed: false, opacity: 0.0, offset_px: FILTER_HIDDEN_OFFSET_PX },
            Self::FadingIn => ItemStyle { displayed: true, opacity: 0.0, offset_px: FILTER_HIDDEN_OFFSET_PX },
        }
    }

    /// Whether the item belongs to the current selection.
    #[must_use]
    pub fn is_selected(self) -> bool {
        matches!(self, Self::Visible | Self::FadingIn)
    }
}

/// Deferred step the caller must schedule after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingStep {
    pub index: usize,
    pub token: u64,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
struct GridItem {
    category: String,
    phase: ItemPhase,
    token: u64,
}

/// Selected category plus the transition state of every item.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioFilter {
    selection: String,
    items: Vec<GridItem>,
}

/// `"all"` matches everything; otherwise categories must be equal.
#[must_use]
pub fn matches_filter(filter: &str, category: &str) -> bool {
    filter == FILTER_ALL || filter == category
}

impl PortfolioFilter {
    /// Start with every item visible and `"all"` selected.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = categories
            .into_iter()
            .map(|category| GridItem { category: category.into(), phase: ItemPhase::Visible, token: 0 })
            .collect();
        Self { selection: FILTER_ALL.to_owned(), items }
    }

    #[must_use]
    pub fn selection(&self) -> &str {
        &self.selection
    }

    #[must_use]
    pub fn is_active_filter(&self, filter: &str) -> bool {
        self.selection == filter
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn phase(&self, index: usize) -> Option<ItemPhase> {
        self.items.get(index).map(|item| item.phase)
    }

    /// Select `filter` and start transitions for every item whose
    /// membership changes. Returns the deferred steps to schedule.
    pub fn select(&mut self, filter: &str) -> Vec<PendingStep> {
        self.selection = filter.to_owned();
        let mut steps = Vec::new();
        for (index, item) in self.items.iter_mut().enumerate() {
            let show = matches_filter(filter, &item.category);
            let (next, delay_ms) = match (show, item.phase) {
                (true, ItemPhase::Visible) | (false, ItemPhase::Hidden) => continue,
                (true, _) => (ItemPhase::FadingIn, FILTER_FADE_IN_DELAY_MS),
                (false, _) => (ItemPhase::FadingOut, FILTER_HIDE_DELAY_MS),
            };
            item.token += 1;
            item.phase = next;
            steps.push(PendingStep { index, token: item.token, delay_ms });
        }
        steps
    }

    /// Land a deferred step. Returns `false` for superseded or unknown steps.
    pub fn complete(&mut self, step: PendingStep) -> bool {
        let Some(item) = self.items.get_mut(step.index) else {
            return false;
        };
        if item.token != step.token {
            return false;
        }
        item.phase = match item.phase {
            ItemPhase::FadingIn => ItemPhase::Visible,
            ItemPhase::FadingOut => ItemPhase::Hidden,
            ItemPhase::Visible | ItemPhase::Hidden => return false,
        };
        true
    }

    /// Indices of items in the current selection, in document order.
    #[must_use]
    pub fn selected_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.phase.is_selected())
            .map(|(index, _)| index)
            .collect()
    }
}
