use crate::ruleset::TopicCategory;
use crate::ui::constants::UiStyle;
use ratatui::style::Style;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only answers about the player's progress through the tech tree.
///
/// Each category has its own notion of "discovered": research projects are
/// discovered once researched, items only count as discovered while they are
/// also protected (unprotected items have no tech tree relevance at all).
pub trait DiscoveryOracle {
    fn is_discovered(&self, category: TopicCategory, topic: &str) -> bool;

    /// Whether an item is gated behind research. Unprotected items never show
    /// up in the topic list.
    fn is_protected_item(&self, topic: &str) -> bool;

    /// Display style for research rows, which are colored by research state
    /// rather than by the plain discovered/undiscovered dichotomy.
    fn research_style(&self, topic: &str) -> Style;
}

/// Concrete oracle backed by the discovered/protected sets of a campaign.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechProgress {
    #[serde(default)]
    pub discovered_research: HashSet<String>,
    #[serde(default)]
    pub discovered_manufacturing: HashSet<String>,
    #[serde(default)]
    pub discovered_facilities: HashSet<String>,
    #[serde(default)]
    pub discovered_items: HashSet<String>,
    #[serde(default)]
    pub discovered_crafts: HashSet<String>,
    #[serde(default)]
    pub protected_items: HashSet<String>,
}

impl DiscoveryOracle for TechProgress {
    fn is_discovered(&self, category: TopicCategory, topic: &str) -> bool {
        match category {
            TopicCategory::Research => self.discovered_research.contains(topic),
            TopicCategory::Manufacturing => self.discovered_manufacturing.contains(topic),
            TopicCategory::Facility => self.discovered_facilities.contains(topic),
            TopicCategory::Item => {
                self.is_protected_item(topic) && self.discovered_items.contains(topic)
            }
            TopicCategory::Craft => self.discovered_crafts.contains(topic),
        }
    }

    fn is_protected_item(&self, topic: &str) -> bool {
        self.protected_items.contains(topic)
    }

    fn research_style(&self, topic: &str) -> Style {
        if self.is_discovered(TopicCategory::Research, topic) {
            UiStyle::RESEARCH_DISCOVERED
        } else {
            UiStyle::RESEARCH_UNDISCOVERED
        }
    }
}
