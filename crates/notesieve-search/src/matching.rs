//! Term matching primitives shared by every dimension and by tag suggestions.
//!
//! Three strategies are tried in order, first success wins:
//!
//! 1. **Exact**: case-insensitive equality with the whole unit.
//! 2. **Substring**: case-insensitive containment.
//! 3. **Initials**: the first character of every word (split on whitespace,
//!    `-` and `_`) concatenated, which must start with the term. This is a
//!    Latin-initial approximation, not a transliteration: `machine-learning`
//!    matches `ml`, but no romanization of non-Latin scripts is attempted.
//!
//! All functions here expect the term to be already folded with
//! [`fold_case`].

/// Which strategy produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    Exact,
    Substring,
    Initials,
}

/// Case-fold character by character.
///
/// Unlike `str::to_lowercase` this never picks a context-dependent form
/// (word-final `Σ` folds to `σ`, not `ς`), so terms and text folded here
/// always compare consistently.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Lowercased first character of every whitespace/`-`/`_` delimited word.
pub fn initials(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether the initials of `text` start with `term`.
pub fn matches_initials(text: &str, term: &str) -> bool {
    initials(text).starts_with(term)
}

/// Match a lowercased term against one lowercased unit (a tag).
pub fn match_unit(unit: &str, term: &str) -> Option<MatchStrategy> {
    if unit == term {
        Some(MatchStrategy::Exact)
    } else if unit.contains(term) {
        Some(MatchStrategy::Substring)
    } else if matches_initials(unit, term) {
        Some(MatchStrategy::Initials)
    } else {
        None
    }
}

// =============================================================================
// CASE-FOLDED TEXT
// =============================================================================

/// Lowercased view of a text that remembers where every folded character
/// came from, so hits found in the folded text can be cut from the original.
///
/// Lowercasing can change the number of characters (`İ` folds to two), so
/// positions are tracked per folded character rather than assumed equal.
#[derive(Debug)]
pub struct FoldedText<'a> {
    original: &'a str,
    folded: String,
    /// Original character index of each folded character.
    origin: Vec<usize>,
    char_count: usize,
}

impl<'a> FoldedText<'a> {
    pub fn new(original: &'a str) -> Self {
        let mut folded = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());
        let mut char_count = 0;

        // Same per-character folding as `fold_case`.
        for (idx, c) in original.chars().enumerate() {
            for lower in c.to_lowercase() {
                folded.push(lower);
                origin.push(idx);
            }
            char_count = idx + 1;
        }

        Self {
            original,
            folded,
            origin,
            char_count,
        }
    }

    /// The lowercased text.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Number of characters in the original text.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn contains(&self, term: &str) -> bool {
        self.folded.contains(term)
    }

    /// Character span `[start, end)` in the original text of the first
    /// occurrence of a lowercased, non-empty term.
    pub fn find_span(&self, term: &str) -> Option<(usize, usize)> {
        let term_chars = term.chars().count();
        if term_chars == 0 {
            return None;
        }
        let byte_idx = self.folded.find(term)?;
        let first = self.folded[..byte_idx].chars().count();
        let last = first + term_chars - 1;
        Some((self.origin[first], self.origin[last] + 1))
    }

    /// Original characters of `[start, end)` widened by `context` on both
    /// sides, clamped to the text bounds.
    pub fn excerpt(&self, start: usize, end: usize, context: usize) -> String {
        let from = start.saturating_sub(context);
        let to = end.saturating_add(context).min(self.char_count);
        self.original
            .chars()
            .skip(from)
            .take(to.saturating_sub(from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_split_rules() {
        assert_eq!(initials("machine-learning"), "ml");
        assert_eq!(initials("Deep Neural_Networks"), "dnn");
        assert_eq!(initials("--leading  gaps__here"), "lgh");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_matches_initials_is_prefix() {
        assert!(matches_initials("machine-learning", "ml"));
        assert!(matches_initials("machine-learning", "m"));
        assert!(!matches_initials("machine-learning", "lm"));
        assert!(!matches_initials("machine-learning", "mlx"));
    }

    #[test]
    fn test_match_unit_strategy_order() {
        assert_eq!(match_unit("work", "work"), Some(MatchStrategy::Exact));
        assert_eq!(match_unit("homework", "work"), Some(MatchStrategy::Substring));
        assert_eq!(
            match_unit("machine-learning", "ml"),
            Some(MatchStrategy::Initials)
        );
        assert_eq!(match_unit("play", "work"), None);
    }

    #[test]
    fn test_folded_text_span_ascii() {
        let text = FoldedText::new("Hello World");
        assert_eq!(text.folded(), "hello world");
        assert_eq!(text.find_span("world"), Some((6, 11)));
        assert_eq!(text.find_span("absent"), None);
        assert_eq!(text.find_span(""), None);
    }

    #[test]
    fn test_folded_text_multibyte() {
        let text = FoldedText::new("Café RÉSUMÉ notes");
        assert_eq!(text.char_count(), 17);
        assert_eq!(text.find_span("résumé"), Some((5, 11)));
        assert_eq!(text.excerpt(5, 11, 2), "é RÉSUMÉ n");
    }

    #[test]
    fn test_folded_text_expanding_lowercase() {
        // 'İ' lowercases to "i̇" (two chars); spans still map to the original.
        let text = FoldedText::new("İstanbul trip");
        let (start, end) = text.find_span("trip").unwrap();
        assert_eq!((start, end), (9, 13));
        assert_eq!(text.excerpt(start, end, 0), "trip");
    }

    #[test]
    fn test_fold_case_final_sigma() {
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        let text = FoldedText::new("Η ΟΔΟΣ ΕΙΝΑΙ");
        assert_eq!(text.find_span(&fold_case("ΟΔΟΣ")), Some((2, 6)));
    }

    #[test]
    fn test_excerpt_clamps() {
        let text = FoldedText::new("short text");
        assert_eq!(text.excerpt(0, 5, 20), "short text");
        assert_eq!(text.excerpt(6, 10, 3), "rt text");
    }
}
