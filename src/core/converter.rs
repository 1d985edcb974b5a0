// File: src/core/converter.rs
use crate::core::types::{Derivation, Language};

/// One literal substring substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

const fn rule(pattern: &'static str, replacement: &'static str) -> Rule {
    Rule { pattern, replacement }
}

const LATIN_RULES: &[Rule] = &[rule("qu", "kʷ"), rule("c", "k"), rule("ae", "ai"), rule("oe", "oi")];

const GREEK_RULES: &[Rule] = &[
    rule("αι", "ai"), rule("ει", "ei"), rule("οι", "oi"), rule("ου", "u"),
    rule("φ", "ph"), rule("θ", "th"), rule("χ", "kh"),
];

const GERMANIC_RULES: &[Rule] = &[
    rule("f", "p"), rule("þ", "t"), rule("h", "k"), rule("d", "t"), rule("w", "u̯"),
];

// Romance tables only bring a word back towards its Latin shape; the Latin
// rules still run afterwards.
const ITALIAN_RULES: &[Rule] = &[rule("zione", "tio"), rule("ch", "c"), rule("gl", "li"), rule("gn", "ni")];

const SPANISH_RULES: &[Rule] = &[rule("ción", "tio"), rule("h", "f"), rule("ll", "pl")];

/// An ordered rule list. Rules are applied one after another to the whole
/// string, so a later rule sees the output of the earlier ones.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    rules: &'static [Rule],
}

impl RuleTable {
    pub fn latin() -> Self {
        Self { rules: LATIN_RULES }
    }

    /// The table that turns a word of `language` into a PIE-like form, or for
    /// Romance languages into a Latin-like form.
    pub fn for_language(language: Language) -> Self {
        let rules = match language {
            Language::Latin => LATIN_RULES,
            Language::Greek => GREEK_RULES,
            Language::OldEnglish | Language::ModernGerman => GERMANIC_RULES,
            Language::Italian => ITALIAN_RULES,
            Language::Spanish => SPANISH_RULES,
        };
        Self { rules }
    }

    /// Applies every rule in order. Returns the rewritten word and a note for
    /// each rule that actually matched.
    pub fn apply(&self, word: &str) -> (String, Vec<String>) {
        let mut current = word.to_string();
        let mut steps = Vec::new();
        for r in self.rules {
            if current.contains(r.pattern) {
                let next = current.replace(r.pattern, r.replacement);
                steps.push(format!("{} → {}: {} ⇒ {}", r.pattern, r.replacement, current, next));
                current = next;
            }
        }
        (current, steps)
    }
}

/// Marks a form as reconstructed unless it already is.
pub fn mark_reconstructed(form: &str) -> String {
    if form.starts_with('*') {
        form.to_string()
    } else {
        format!("*{}", form)
    }
}

/// Rule-based derivation for a word with no table entry.
pub fn derive_with(table: RuleTable, word: &str) -> Derivation {
    let (rewritten, steps) = table.apply(word);
    Derivation::reconstructed(mark_reconstructed(&rewritten), steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutions_are_literal() {
        let (out, steps) = RuleTable::latin().apply("cacao");
        assert_eq!(out, "kakao");
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn rules_fire_in_table_order() {
        // "qu" is rewritten before "c" so the labiovelar survives.
        let (out, _) = RuleTable::latin().apply("quercus");
        assert_eq!(out, "kʷerkus");

        // Germanic "h" → "k" then "d" → "t" on the same word.
        let (out, steps) = RuleTable::for_language(Language::OldEnglish).apply("hand");
        assert_eq!(out, "kant");
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn unmatched_word_only_gets_the_star() {
        let d = derive_with(RuleTable::latin(), "lupus");
        assert_eq!(d.form, "*lupus");
        assert!(d.steps.is_empty());
        assert!(!d.is_attested());
    }

    #[test]
    fn star_is_not_doubled() {
        assert_eq!(mark_reconstructed("*wódr̥"), "*wódr̥");
        assert_eq!(mark_reconstructed("wódr̥"), "*wódr̥");
    }

    #[test]
    fn greek_digraphs_and_aspirates() {
        let d = derive_with(RuleTable::for_language(Language::Greek), "φράτηρ");
        assert_eq!(d.form, "*phράτηρ");
    }

    #[test]
    fn romance_rules_move_towards_latin() {
        let (out, _) = RuleTable::for_language(Language::Italian).apply("nazione");
        assert_eq!(out, "natio");
        let (out, _) = RuleTable::for_language(Language::Spanish).apply("nación");
        assert_eq!(out, "natio");
    }
}
