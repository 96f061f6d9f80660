use super::constants::UiStyle;
use super::traits::SplitPanel;
use crate::progress::DiscoveryOracle;
use crate::ruleset::{Ruleset, TopicCategory};
use crate::techtree::{filter_topics, TopicList};
use crate::types::TopicId;
use ratatui::style::Style;

/// Presentation-side state of the topic picker: the current query text, the
/// topic list it produced and a cyclable selection index. The panel owns no
/// catalog data; every query change re-runs the filter from scratch.
#[derive(Debug, Default)]
pub struct TopicSelectPanel {
    query: String,
    index: usize,
    topics: TopicList,
}

impl TopicSelectPanel {
    pub fn new(rules: &Ruleset, oracle: &impl DiscoveryOracle) -> Self {
        let mut panel = Self::default();
        panel.refresh(rules, oracle);
        panel
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn topics(&self) -> &TopicList {
        &self.topics
    }

    /// Applies a new query and recomputes the topic list. The previous list
    /// is discarded whole and the selection snaps back to the top.
    pub fn set_query(&mut self, query: &str, rules: &Ruleset, oracle: &impl DiscoveryOracle) {
        self.query = query.to_string();
        self.refresh(rules, oracle);
    }

    /// Re-runs the current query, e.g. when the screen reopens and discovery
    /// state may have changed underneath it.
    pub fn refresh(&mut self, rules: &Ruleset, oracle: &impl DiscoveryOracle) {
        self.topics = filter_topics(&self.query, rules, oracle);
        self.index = 0;
    }

    /// Display style for a row: the entry's own color, with the selection
    /// background patched on top for the row the index sits on.
    pub fn row_style(&self, index: usize) -> Style {
        let style = self
            .topics
            .entries
            .get(index)
            .map(|entry| entry.style)
            .unwrap_or_default();
        if index == self.index {
            style.patch(UiStyle::SELECTED)
        } else {
            style
        }
    }

    /// Resolves a clicked row to `(topic, category)` for the next screen.
    /// Stale indices from before a re-filter resolve to `None`.
    pub fn select(&self, index: usize) -> Option<(TopicId, TopicCategory)> {
        let selected = self.topics.select(index);
        if selected.is_none() {
            log::debug!("ignoring selection of row {index} out of {}", self.topics.len());
        }
        selected
    }

    pub fn select_current(&self) -> Option<(TopicId, TopicCategory)> {
        self.select(self.index)
    }
}

impl SplitPanel for TopicSelectPanel {
    fn index(&self) -> usize {
        self.index
    }

    fn max_index(&self) -> usize {
        self.topics.len()
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::TopicSelectPanel;
    use crate::progress::TechProgress;
    use crate::ruleset::{Ruleset, TopicCategory};
    use crate::ui::constants::UiStyle;
    use crate::ui::traits::SplitPanel;

    fn test_ruleset() -> Ruleset {
        Ruleset {
            research: vec!["R_SONIC".to_string()],
            crafts: vec!["C_SONIC_SUB".to_string()],
            ..Ruleset::default()
        }
    }

    #[test]
    fn test_panel_recomputes_on_query_change() {
        let rules = test_ruleset();
        let progress = TechProgress::default();
        let mut panel = TopicSelectPanel::new(&rules, &progress);
        // Empty query: the two hint rows, nothing selectable.
        assert_eq!(panel.topics().len(), 2);
        assert!(panel.select_current().is_none());

        panel.set_query("sonic", &rules, &progress);
        assert_eq!(panel.topics().len(), 2);
        assert_eq!(
            panel.select(0),
            Some(("R_SONIC".to_string(), TopicCategory::Research))
        );
        assert_eq!(
            panel.select(1),
            Some(("C_SONIC_SUB".to_string(), TopicCategory::Craft))
        );
        assert!(panel.select(2).is_none());
    }

    #[test]
    fn test_row_style_patches_selection_onto_current_row() {
        let rules = test_ruleset();
        let progress = TechProgress::default();
        let mut panel = TopicSelectPanel::new(&rules, &progress);
        panel.set_query("sonic", &rules, &progress);

        assert_eq!(panel.index(), 0);
        assert_eq!(panel.row_style(0).bg, UiStyle::SELECTED.bg);
        assert_eq!(panel.row_style(1).bg, None);
        // The undiscovered craft row keeps its dim foreground under selection.
        panel.set_index(1);
        assert_eq!(panel.row_style(1).fg, UiStyle::SECONDARY.fg);
        assert_eq!(panel.row_style(1).bg, UiStyle::SELECTED.bg);
        // Out-of-range rows fall back to the default style.
        assert_eq!(panel.row_style(7), UiStyle::DEFAULT);
    }

    #[test]
    fn test_index_cycles_over_rows() {
        let rules = test_ruleset();
        let progress = TechProgress::default();
        let mut panel = TopicSelectPanel::new(&rules, &progress);
        panel.set_query("sonic", &rules, &progress);

        assert_eq!(panel.index(), 0);
        panel.next_index();
        assert_eq!(panel.index(), 1);
        panel.next_index();
        assert_eq!(panel.index(), 0);
        panel.previous_index();
        assert_eq!(panel.index(), 1);
    }
}
