use crate::types::TopicId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use strum_macros::EnumIter;

/// The five kinds of tech tree topics, in the fixed order the topic list
/// presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum TopicCategory {
    Research,
    Manufacturing,
    Facility,
    Item,
    Craft,
}

impl Display for TopicCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopicCategory::Research => write!(f, "Research"),
            TopicCategory::Manufacturing => write!(f, "Manufacturing"),
            TopicCategory::Facility => write!(f, "Facility"),
            TopicCategory::Item => write!(f, "Item"),
            TopicCategory::Craft => write!(f, "Craft"),
        }
    }
}

impl TopicCategory {
    /// Short marker appended to the displayed label so mixed search results
    /// stay tellable apart. Research rows carry none.
    pub fn label_marker(&self) -> &'static str {
        match self {
            TopicCategory::Research => "",
            TopicCategory::Manufacturing => " [m]",
            TopicCategory::Facility => " [f]",
            TopicCategory::Item => " [i]",
            TopicCategory::Craft => " [c]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum ScriptKind {
    Arc,
    Event,
    Mission,
}

impl Display for ScriptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptKind::Arc => write!(f, "Arc"),
            ScriptKind::Event => write!(f, "Event"),
            ScriptKind::Mission => write!(f, "Mission"),
        }
    }
}

/// A mod script (arc, event or mission) with the research topics that can
/// trigger it. The boolean tells whether the trigger fires on the topic being
/// researched or still missing; the topic list only cares about the keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptRule {
    #[serde(default)]
    pub research_triggers: HashMap<TopicId, bool>,
}

/// Read-only view over the mod data: the five ordered topic catalogs, the
/// localized label table and the script tables. Order within each catalog is
/// the order the mod declared and is preserved everywhere downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ruleset {
    #[serde(default)]
    pub research: Vec<TopicId>,
    #[serde(default)]
    pub manufacturing: Vec<TopicId>,
    #[serde(default)]
    pub facilities: Vec<TopicId>,
    #[serde(default)]
    pub items: Vec<TopicId>,
    #[serde(default)]
    pub crafts: Vec<TopicId>,
    #[serde(default)]
    pub labels: HashMap<TopicId, String>,
    #[serde(default)]
    pub arc_script_list: Vec<String>,
    #[serde(default)]
    pub arc_scripts: HashMap<String, ScriptRule>,
    #[serde(default)]
    pub event_script_list: Vec<String>,
    #[serde(default)]
    pub event_scripts: HashMap<String, ScriptRule>,
    #[serde(default)]
    pub mission_script_list: Vec<String>,
    #[serde(default)]
    pub mission_scripts: HashMap<String, ScriptRule>,
}

impl Ruleset {
    pub fn topics(&self, category: TopicCategory) -> &[TopicId] {
        match category {
            TopicCategory::Research => &self.research,
            TopicCategory::Manufacturing => &self.manufacturing,
            TopicCategory::Facility => &self.facilities,
            TopicCategory::Item => &self.items,
            TopicCategory::Craft => &self.crafts,
        }
    }

    /// Localized display label for a topic. Falls back to the raw id when the
    /// mod ships no translation entry.
    pub fn label(&self, topic: &str) -> String {
        self.labels
            .get(topic)
            .cloned()
            .unwrap_or_else(|| topic.to_string())
    }

    pub fn script_ids(&self, kind: ScriptKind) -> &[String] {
        match kind {
            ScriptKind::Arc => &self.arc_script_list,
            ScriptKind::Event => &self.event_script_list,
            ScriptKind::Mission => &self.mission_script_list,
        }
    }

    /// Looks a script up by id. Ids listed without a matching table entry
    /// resolve to `None` and callers skip them.
    pub fn script(&self, kind: ScriptKind, id: &str) -> Option<&ScriptRule> {
        match kind {
            ScriptKind::Arc => self.arc_scripts.get(id),
            ScriptKind::Event => self.event_scripts.get(id),
            ScriptKind::Mission => self.mission_scripts.get(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Ruleset, ScriptKind, TopicCategory};
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_iteration_order() {
        let order = TopicCategory::iter().collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                TopicCategory::Research,
                TopicCategory::Manufacturing,
                TopicCategory::Facility,
                TopicCategory::Item,
                TopicCategory::Craft,
            ]
        );
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let mut rules = Ruleset::default();
        rules
            .labels
            .insert("STR_LASER".to_string(), "Laser Weapons".to_string());
        assert_eq!(rules.label("STR_LASER"), "Laser Weapons");
        assert_eq!(rules.label("STR_PLASMA"), "STR_PLASMA");
    }

    #[test]
    fn test_unknown_script_id_is_none() {
        let mut rules = Ruleset::default();
        rules.arc_script_list.push("missing".to_string());
        assert!(rules.script(ScriptKind::Arc, "missing").is_none());
    }
}
