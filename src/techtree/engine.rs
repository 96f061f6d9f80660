use super::query::QueryMode;
use super::{CategoryBoundaries, TopicEntry, TopicList};
use crate::progress::DiscoveryOracle;
use crate::ruleset::{Ruleset, ScriptKind, TopicCategory};
use crate::ui::constants::{UiStyle, UiText};
use std::collections::HashSet;
use strum::IntoEnumIterator;

/// Runs one full filter pass over the mod catalogs.
///
/// The pass is a pure function of its inputs: it walks the five catalogs in
/// their fixed order (or the script tables for the reserved trigger tokens),
/// appends matching rows in catalog order and records where each category's
/// slice of the merged list begins.
pub fn filter_topics(
    raw_query: &str,
    rules: &Ruleset,
    oracle: &impl DiscoveryOracle,
) -> TopicList {
    match QueryMode::resolve(raw_query) {
        QueryMode::TooShort => hint_list(),
        QueryMode::ScriptTriggers(kind) => script_trigger_list(kind, rules, oracle),
        mode => scan_catalogs(&mode, rules, oracle),
    }
}

/// The two hint rows shown until the query is long enough to search with.
fn hint_list() -> TopicList {
    let entries = [UiText::TYPE_MORE_A, UiText::TYPE_MORE_B]
        .iter()
        .map(|&hint| TopicEntry {
            topic: String::new(),
            label: hint.to_string(),
            style: UiStyle::DEFAULT,
        })
        .collect();

    TopicList {
        entries,
        boundaries: CategoryBoundaries::default(),
    }
}

/// Collects the deduplicated set of research topics referenced as triggers by
/// every script of the given kind. Listed script ids without a table entry
/// are skipped. Known research topics come out in research catalog order;
/// triggers naming topics outside the catalog follow in first-seen order.
fn script_trigger_list(
    kind: ScriptKind,
    rules: &Ruleset,
    oracle: &impl DiscoveryOracle,
) -> TopicList {
    let mut triggered: HashSet<&str> = HashSet::new();
    let mut first_seen: Vec<&str> = vec![];
    for script_id in rules.script_ids(kind) {
        let Some(script) = rules.script(kind, script_id) else {
            log::debug!("{kind} script '{script_id}' is listed but undefined, skipping");
            continue;
        };
        for topic in script.research_triggers.keys() {
            if triggered.insert(topic.as_str()) {
                first_seen.push(topic.as_str());
            }
        }
    }

    let mut entries: Vec<TopicEntry> = rules
        .topics(TopicCategory::Research)
        .iter()
        .filter(|topic| triggered.contains(topic.as_str()))
        .map(|topic| research_entry(topic, rules, oracle))
        .collect();
    let in_catalog: HashSet<&str> = rules
        .topics(TopicCategory::Research)
        .iter()
        .map(|topic| topic.as_str())
        .collect();
    for topic in first_seen {
        if !in_catalog.contains(topic) {
            entries.push(research_entry(topic, rules, oracle));
        }
    }

    // No category partition in this mode: every row is research-like.
    let boundaries = CategoryBoundaries::all_at(entries.len());
    TopicList {
        entries,
        boundaries,
    }
}

fn research_entry(topic: &str, rules: &Ruleset, oracle: &impl DiscoveryOracle) -> TopicEntry {
    TopicEntry {
        topic: topic.to_string(),
        label: rules.label(topic),
        style: oracle.research_style(topic),
    }
}

/// The normal pass: one uniform loop over the five catalogs instead of five
/// near-identical ones. The match predicate and row style vary per category
/// and query mode; the append-then-record-boundary structure does not.
fn scan_catalogs(mode: &QueryMode, rules: &Ruleset, oracle: &impl DiscoveryOracle) -> TopicList {
    let mut entries: Vec<TopicEntry> = vec![];
    let mut boundaries = CategoryBoundaries::default();

    for category in TopicCategory::iter() {
        for topic in rules.topics(category) {
            if category == TopicCategory::Item && !oracle.is_protected_item(topic) {
                // Unprotected items carry no tech tree relevance.
                continue;
            }

            let label = rules.label(topic);
            let matched = match mode {
                QueryMode::RevealUndiscovered => !oracle.is_discovered(category, topic),
                QueryMode::Normal(needle) => label.to_uppercase().contains(needle.as_str()),
                _ => unreachable!("short and script queries never reach the catalog scan"),
            };
            if !matched {
                continue;
            }

            let style = if category == TopicCategory::Research {
                oracle.research_style(topic)
            } else if oracle.is_discovered(category, topic) {
                UiStyle::DEFAULT
            } else {
                UiStyle::SECONDARY
            };
            entries.push(TopicEntry {
                topic: topic.clone(),
                label: format!("{}{}", label, category.label_marker()),
                style,
            });
        }

        // Each category's slice starts where the previous one ended.
        match category {
            TopicCategory::Research => boundaries.manufacturing = entries.len(),
            TopicCategory::Manufacturing => boundaries.facilities = entries.len(),
            TopicCategory::Facility => boundaries.items = entries.len(),
            TopicCategory::Item => boundaries.crafts = entries.len(),
            TopicCategory::Craft => {}
        }
    }

    log::debug!(
        "topic scan matched {} rows (boundaries {:?})",
        entries.len(),
        boundaries
    );
    TopicList {
        entries,
        boundaries,
    }
}
