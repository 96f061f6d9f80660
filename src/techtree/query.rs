use crate::ruleset::ScriptKind;

/// Queries shorter than this never scan the catalogs; with large mods a one
/// or two letter needle would match nearly everything.
pub const MIN_QUERY_LENGTH: usize = 3;

/// How a raw search string drives the topic scan. Resolved once, up front,
/// so the reserved tokens never leak into the per-catalog loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// Below the minimum length, show the "type more" hint rows.
    TooShort,
    /// Reserved token: list every research topic referenced as a trigger by
    /// the scripts of the given kind, instead of scanning the catalogs.
    ScriptTriggers(ScriptKind),
    /// Reserved token: match topics the player has NOT discovered yet.
    RevealUndiscovered,
    /// Plain substring search; holds the uppercased needle.
    Normal(String),
}

impl QueryMode {
    pub fn resolve(raw: &str) -> Self {
        let needle = raw.to_uppercase();
        if needle.chars().count() < MIN_QUERY_LENGTH {
            return QueryMode::TooShort;
        }

        match needle.as_str() {
            "ASCRIPT" => QueryMode::ScriptTriggers(ScriptKind::Arc),
            "ESCRIPT" => QueryMode::ScriptTriggers(ScriptKind::Event),
            "MSCRIPT" => QueryMode::ScriptTriggers(ScriptKind::Mission),
            "SHAZAM" => QueryMode::RevealUndiscovered,
            _ => QueryMode::Normal(needle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{QueryMode, MIN_QUERY_LENGTH};
    use crate::ruleset::ScriptKind;

    #[test]
    fn test_short_queries_resolve_to_too_short() {
        for raw in ["", "a", "ab", "  "] {
            assert_eq!(QueryMode::resolve(raw), QueryMode::TooShort);
        }
        assert!(MIN_QUERY_LENGTH == 3);
    }

    #[test]
    fn test_reserved_tokens_are_case_insensitive() {
        assert_eq!(
            QueryMode::resolve("ascript"),
            QueryMode::ScriptTriggers(ScriptKind::Arc)
        );
        assert_eq!(
            QueryMode::resolve("eScRiPt"),
            QueryMode::ScriptTriggers(ScriptKind::Event)
        );
        assert_eq!(
            QueryMode::resolve("MSCRIPT"),
            QueryMode::ScriptTriggers(ScriptKind::Mission)
        );
        assert_eq!(QueryMode::resolve("shazam"), QueryMode::RevealUndiscovered);
    }

    #[test]
    fn test_normal_queries_are_uppercased() {
        assert_eq!(
            QueryMode::resolve("laser"),
            QueryMode::Normal("LASER".to_string())
        );
        // A token with extra characters is a plain search, not a command.
        assert_eq!(
            QueryMode::resolve("shazam!"),
            QueryMode::Normal("SHAZAM!".to_string())
        );
    }
}
