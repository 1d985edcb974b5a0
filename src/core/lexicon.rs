// --- File: src/core/lexicon.rs
use crate::core::data;
use crate::core::types::{Language, NOT_FOUND};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered word → value mapping. Used both for the per-language
/// word → Latin dictionaries and for the Latin → PIE table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: IndexMap<String, String>,
}

impl Dictionary {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Inserts or overwrites. A new word is appended at the end; an existing
    /// word keeps its position.
    pub fn insert(&mut self, word: &str, value: &str) -> Option<String> {
        self.entries.insert(word.to_string(), value.to_string())
    }

    /// First word (in insertion order) whose value equals `value`.
    /// Duplicate targets are not reported, the earliest entry wins.
    pub fn find_word(&self, value: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, v)| v.as_str() == value)
            .map(|(k, _)| k.as_str())
    }

    /// Like [`find_word`](Self::find_word) but yields [`NOT_FOUND`] on a miss.
    pub fn reverse_lookup(&self, value: &str) -> &str {
        self.find_word(value).unwrap_or(NOT_FOUND)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Every dictionary the engine consults. Owned by the engine; loaded and
/// saved as a whole by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconStore {
    pub italian: Dictionary,
    pub spanish: Dictionary,
    pub greek: Dictionary,
    pub old_english: Dictionary,
    pub modern_german: Dictionary,
    pub latin_pie: Dictionary,
}

impl LexiconStore {
    /// The built-in lexicon.
    pub fn builtin() -> Self {
        Self {
            italian: Dictionary::from_pairs(data::ITALIAN),
            spanish: Dictionary::from_pairs(data::SPANISH),
            greek: Dictionary::from_pairs(data::GREEK),
            old_english: Dictionary::from_pairs(data::OLD_ENGLISH),
            modern_german: Dictionary::from_pairs(data::MODERN_GERMAN),
            latin_pie: Dictionary::from_pairs(data::LATIN_PIE),
        }
    }

    /// Word → Latin dictionary for a language. Latin has none: its words are
    /// the keys of the PIE table.
    pub fn dictionary(&self, language: Language) -> Option<&Dictionary> {
        match language {
            Language::Italian => Some(&self.italian),
            Language::Spanish => Some(&self.spanish),
            Language::Greek => Some(&self.greek),
            Language::OldEnglish => Some(&self.old_english),
            Language::ModernGerman => Some(&self.modern_german),
            Language::Latin => None,
        }
    }

    pub fn dictionary_mut(&mut self, language: Language) -> Option<&mut Dictionary> {
        match language {
            Language::Italian => Some(&mut self.italian),
            Language::Spanish => Some(&mut self.spanish),
            Language::Greek => Some(&mut self.greek),
            Language::OldEnglish => Some(&mut self.old_english),
            Language::ModernGerman => Some(&mut self.modern_german),
            Language::Latin => None,
        }
    }

    /// The word standing for `latin_key` in `language`, or [`NOT_FOUND`].
    pub fn word_for(&self, language: Language, latin_key: &str) -> String {
        match self.dictionary(language) {
            Some(dict) => dict.reverse_lookup(latin_key).to_string(),
            None => latin_key.to_string(),
        }
    }
}

impl Default for LexiconStore {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_lookup_is_first_match() {
        let dict = Dictionary::from_pairs(&[("focolare", "focus"), ("fuoco", "focus")]);
        assert_eq!(dict.reverse_lookup("focus"), "focolare");
        assert_eq!(dict.reverse_lookup("ignis"), NOT_FOUND);
    }

    #[test]
    fn reverse_lookup_inverts_unique_entries() {
        let store = LexiconStore::builtin();
        for lang in Language::ALL {
            let Some(dict) = store.dictionary(lang) else { continue };
            for (word, latin) in dict.iter() {
                let matches = dict.iter().filter(|(_, v)| *v == latin).count();
                if matches == 1 {
                    assert_eq!(dict.reverse_lookup(latin), word, "{lang}: {word}");
                }
            }
        }
    }

    #[test]
    fn insert_appends_new_words() {
        let mut dict = Dictionary::from_pairs(&[("padre", "pater")]);
        assert!(dict.insert("lupo", "lupus").is_none());
        let words: Vec<_> = dict.iter().map(|(k, _)| k).collect();
        assert_eq!(words, ["padre", "lupo"]);
    }

    #[test]
    fn latin_has_no_word_dictionary() {
        let store = LexiconStore::builtin();
        assert!(store.dictionary(Language::Latin).is_none());
        assert_eq!(store.word_for(Language::Latin, "pater"), "pater");
        assert_eq!(store.word_for(Language::Greek, "pater"), "πατήρ");
    }
}
