mod engine;
pub mod query;

pub use engine::filter_topics;
pub use query::{QueryMode, MIN_QUERY_LENGTH};

use crate::ruleset::TopicCategory;
use crate::types::TopicId;
use ratatui::style::Style;

/// One row of the filtered topic list. The label keeps its original casing
/// (uppercasing happens only while matching) and already carries the category
/// marker suffix where applicable.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicEntry {
    pub topic: TopicId,
    pub label: String,
    pub style: Style,
}

impl TopicEntry {
    /// Informational rows (the "type more" hints) carry no topic id and can
    /// never be selected.
    pub fn is_selectable(&self) -> bool {
        !self.topic.is_empty()
    }
}

/// Start indices of each category's slice of the merged topic list. Research
/// always starts at 0. The indices are non-decreasing and bounded by the list
/// length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryBoundaries {
    pub manufacturing: usize,
    pub facilities: usize,
    pub items: usize,
    pub crafts: usize,
}

impl CategoryBoundaries {
    /// All four boundaries at `len`: every row counts as research-like. Used
    /// by the script-trigger modes, which have no category partition.
    pub fn all_at(len: usize) -> Self {
        Self {
            manufacturing: len,
            facilities: len,
            items: len,
            crafts: len,
        }
    }

    /// Which category a row index falls into, checked from the highest
    /// boundary down.
    pub fn category_at(&self, index: usize) -> TopicCategory {
        if index >= self.crafts {
            TopicCategory::Craft
        } else if index >= self.items {
            TopicCategory::Item
        } else if index >= self.facilities {
            TopicCategory::Facility
        } else if index >= self.manufacturing {
            TopicCategory::Manufacturing
        } else {
            TopicCategory::Research
        }
    }

    pub fn is_consistent(&self, len: usize) -> bool {
        self.manufacturing <= self.facilities
            && self.facilities <= self.items
            && self.items <= self.crafts
            && self.crafts <= len
    }
}

/// The full output of one filter pass. Recomputed from scratch on every query
/// change and discarded afterwards; it never mutates the catalogs it was
/// built from.
#[derive(Debug, Clone, Default)]
pub struct TopicList {
    pub entries: Vec<TopicEntry>,
    pub boundaries: CategoryBoundaries,
}

impl TopicList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a clicked row to its topic and category. Out-of-range indices
    /// and informational rows yield `None`; a stale click after a re-filter
    /// must not fault.
    pub fn select(&self, index: usize) -> Option<(TopicId, TopicCategory)> {
        let entry = self.entries.get(index)?;
        if !entry.is_selectable() {
            return None;
        }
        Some((entry.topic.clone(), self.boundaries.category_at(index)))
    }
}
