// File: src/learning.rs
use crate::core::context::SessionContext;
use crate::core::converter::mark_reconstructed;
use crate::core::lexicon::LexiconStore;
use crate::core::types::Language;
use crate::error::{Error, Result};

/// A mapping the user supplied for a word the lexicon did not know.
///
/// For every language except Latin, `value` is the Latin equivalent of
/// `word`. For Latin, `value` is the PIE reconstruction of `word`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingCorrection {
    pub language: Language,
    pub word: String,
    pub value: String,
}

impl MappingCorrection {
    pub fn new(language: Language, word: &str, value: &str) -> Self {
        Self {
            language,
            word: word.to_string(),
            value: value.to_string(),
        }
    }
}

/// Applies a correction to the in-memory store and returns the normalized
/// (word, value) pair that was inserted. Persisting is left to the caller.
pub fn learn(
    store: &mut LexiconStore,
    context: &mut SessionContext,
    correction: &MappingCorrection,
) -> Result<(String, String)> {
    let language = correction.language;
    let word = language.normalize(&correction.word);
    let value = correction.value.trim();
    if word.is_empty() || value.is_empty() {
        return Err(Error::EmptyCorrection {
            language: language.to_string(),
        });
    }

    let value = match store.dictionary_mut(language) {
        Some(dict) => {
            let latin = Language::Latin.normalize(value);
            dict.insert(&word, &latin);
            latin
        }
        None => {
            let pie = mark_reconstructed(value);
            store.latin_pie.insert(&word, &pie);
            pie
        }
    };

    context.invalidate();
    tracing::info!(%language, word = %word, value = %value, "learned new mapping");
    Ok((word, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learns_word_to_latin() {
        let mut store = LexiconStore::builtin();
        let mut ctx = SessionContext::new(3);
        let c = MappingCorrection::new(Language::ModernGerman, " Wolf ", " Lupus ");
        let (word, value) = learn(&mut store, &mut ctx, &c).unwrap();
        assert_eq!((word.as_str(), value.as_str()), ("wolf", "lupus"));
        assert_eq!(store.modern_german.get("wolf"), Some("lupus"));
    }

    #[test]
    fn latin_corrections_extend_the_pie_table() {
        let mut store = LexiconStore::builtin();
        let mut ctx = SessionContext::new(3);
        let c = MappingCorrection::new(Language::Latin, "lupus", "wĺ̥kʷos");
        learn(&mut store, &mut ctx, &c).unwrap();
        assert_eq!(store.latin_pie.get("lupus"), Some("*wĺ̥kʷos"));
    }

    #[test]
    fn empty_values_are_rejected() {
        let mut store = LexiconStore::builtin();
        let mut ctx = SessionContext::new(3);
        let c = MappingCorrection::new(Language::Greek, "λύκος", "   ");
        assert!(matches!(
            learn(&mut store, &mut ctx, &c),
            Err(Error::EmptyCorrection { .. })
        ));
        assert_eq!(store, LexiconStore::builtin());
    }
}
