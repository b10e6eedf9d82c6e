use regex::Regex;

use super::username::normalize;

/// `@` followed by a maximal run of ASCII word characters.
const MENTION_PATTERN: &str = r"@([A-Za-z0-9_]+)";

/// Finds `@username` tokens in post text.
#[derive(Debug, Clone)]
pub struct MentionExtractor {
    pattern: Regex,
}

impl MentionExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(MENTION_PATTERN).expect("mention pattern is valid"),
        }
    }

    /// Normalized usernames mentioned in `text`, in order of appearance.
    ///
    /// Repeated mentions are yielded each time they occur. A bare `@`, or one
    /// followed by punctuation or whitespace, yields nothing.
    pub fn extract<'t>(&'t self, text: &'t str) -> impl Iterator<Item = String> + 't {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| normalize(m.as_str()))
    }
}

impl Default for MentionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::MentionExtractor;

    fn mentions(text: &str) -> Vec<String> {
        MentionExtractor::new().extract(text).collect()
    }

    #[test]
    fn captures_word_run_after_at() {
        assert_eq!(mentions("hi @Bert_99, and @ernie!"), vec!["bert_99", "ernie"]);
    }

    #[test]
    fn malformed_at_signs_are_ignored() {
        assert!(mentions("@ alone, @@ and trailing @").is_empty());
        assert!(mentions("").is_empty());
    }

    #[test]
    fn stops_at_first_non_word_character() {
        assert_eq!(mentions("@alice.bob @carol-dave"), vec!["alice", "carol"]);
    }

    #[test]
    fn email_addresses_count_as_mentions() {
        // Only the `@` prefix matters, not what precedes it.
        assert_eq!(mentions("mail bitdiddle@mit.edu"), vec!["mit"]);
    }

    #[test]
    fn repeated_mentions_are_all_yielded() {
        assert_eq!(mentions("@a @A @a"), vec!["a", "a", "a"]);
    }
}
