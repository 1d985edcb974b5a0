use crate::config::Config;
use crate::core::ablaut::{ablaut_variants, suggest_root};
use crate::core::context::{HistoryEntry, SessionContext};
use crate::core::converter::{derive_with, RuleTable};
use crate::core::data::ETYMOLOGY_NOTES;
use crate::core::lexicon::LexiconStore;
use crate::core::types::{
    Branch, ComparativeRow, Derivation, Language, Lookup, Reconstruction, NOT_FOUND,
};
use crate::error::Result;
use crate::learning::{learn, MappingCorrection};
use crate::persistence::{file_for, load_store, save_store};
use std::path::{Path, PathBuf};

/// The lookup engine: a lexicon store, the rule tables, and one session's
/// history and cache.
pub struct LexiconEngine {
    store: LexiconStore,
    context: SessionContext,
    data_dir: Option<PathBuf>,
    // Files that failed to load; a save never replaces them.
    unreadable: Vec<&'static str>,
    dirty: bool,
}

impl LexiconEngine {
    /// Built-in lexicon with nowhere to save corrections.
    pub fn new() -> Self {
        Self::with_store(LexiconStore::builtin(), Config::default().history_window)
    }

    pub fn with_store(store: LexiconStore, history_window: usize) -> Self {
        Self {
            store,
            context: SessionContext::new(history_window),
            data_dir: None,
            unreadable: Vec::new(),
            dirty: false,
        }
    }

    /// Loads the lexicon from `dir`. A file that cannot be read keeps its
    /// built-in entries for this session and is never overwritten.
    pub fn from_dir_or_default(dir: &Path, history_window: usize) -> Self {
        let loaded = load_store(dir);
        let mut engine = Self::with_store(loaded.store, history_window);
        engine.data_dir = Some(dir.to_path_buf());
        engine.unreadable = loaded.unreadable;
        engine
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_dir_or_default(&config.data_dir, config.history_window)
    }

    pub fn store(&self) -> &LexiconStore {
        &self.store
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Files left untouched on save because they failed to load.
    pub fn unreadable_files(&self) -> &[&'static str] {
        &self.unreadable
    }

    /// True when a correction has not reached disk yet.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Maps a word to its Latin key without side effects.
    pub fn lookup(&self, word: &str, language: Language) -> Lookup {
        let normalized = language.normalize(word);
        match self.store.dictionary(language) {
            Some(dict) => match dict.get(&normalized) {
                Some(latin) => Lookup::Resolved {
                    word: normalized.clone(),
                    language,
                    latin_key: latin.to_string(),
                    fallback: false,
                },
                None => Lookup::Missing {
                    word: normalized,
                    language,
                },
            },
            // A Latin word is its own key, known or not.
            None => {
                let fallback = !self.store.latin_pie.contains(&normalized);
                Lookup::Resolved {
                    word: normalized.clone(),
                    language,
                    latin_key: normalized,
                    fallback,
                }
            }
        }
    }

    /// [`lookup`](Self::lookup), recording resolved words in the session history.
    pub fn resolve(&mut self, word: &str, language: Language) -> Lookup {
        let result = self.lookup(word, language);
        if let Lookup::Resolved { word, latin_key, .. } = &result {
            self.context.record(HistoryEntry {
                word: word.clone(),
                language,
                latin_key: latin_key.clone(),
            });
        }
        result
    }

    /// The stored PIE form for a known Latin key, otherwise the Latin rules
    /// applied to the normalized word.
    pub fn latin_to_pie(&self, latin: &str) -> Derivation {
        let normalized = Language::Latin.normalize(latin);
        match self.store.latin_pie.get(&normalized) {
            Some(form) => Derivation::attested(form),
            None => derive_with(RuleTable::latin(), &normalized),
        }
    }

    /// PIE form for a word read as belonging to `language`.
    pub fn derive_pie(&self, word: &str, language: Language) -> Derivation {
        let normalized = language.normalize(word);
        match language.branch() {
            Branch::Latin => self.latin_to_pie(&normalized),
            Branch::Greek | Branch::Germanic => {
                derive_with(RuleTable::for_language(language), &normalized)
            }
            Branch::Romance => {
                let attested = self
                    .store
                    .dictionary(language)
                    .and_then(|dict| dict.get(&normalized))
                    .and_then(|latin| self.store.latin_pie.get(latin));
                if let Some(form) = attested {
                    return Derivation::attested(form);
                }
                let (latinized, mut steps) = RuleTable::for_language(language).apply(&normalized);
                let mut derivation = self.latin_to_pie(&latinized);
                steps.append(&mut derivation.steps);
                derivation.steps = steps;
                derivation
            }
        }
    }

    /// [`derive_pie`](Self::derive_pie) through the session cache.
    pub fn derive_pie_cached(&mut self, word: &str, language: Language) -> Derivation {
        let normalized = language.normalize(word);
        if let Some(hit) = self.context.cached(language, &normalized) {
            tracing::debug!(%language, word = %normalized, "derivation cache hit");
            return hit.clone();
        }
        let derivation = self.derive_pie(&normalized, language);
        tracing::debug!(%language, word = %normalized, form = %derivation.form, steps = derivation.steps.len(), "derived PIE form");
        self.context.remember(language, &normalized, derivation.clone());
        derivation
    }

    /// One row per language, in [`Language::ALL`] order. Each row's PIE form
    /// is derived from that row's own word.
    pub fn comparative_table(&self, latin_key: &str) -> Vec<ComparativeRow> {
        Language::ALL
            .into_iter()
            .map(|language| {
                let word = self.store.word_for(language, latin_key);
                let pie = if word == NOT_FOUND {
                    NOT_FOUND.to_string()
                } else {
                    self.derive_pie(&word, language).form
                };
                ComparativeRow { language, word, pie }
            })
            .collect()
    }

    /// Most common PIE form across the comparative table, with its ablaut grades.
    pub fn reconstruct(&self, latin_key: &str) -> Reconstruction {
        let rows = self.comparative_table(latin_key);
        let suggested = suggest_root(rows.iter().map(|row| row.pie.as_str()));
        let variants = suggested
            .as_deref()
            .map(ablaut_variants)
            .unwrap_or_default();
        Reconstruction { suggested, variants }
    }

    pub fn etymology(&self, latin_key: &str) -> Option<&'static str> {
        ETYMOLOGY_NOTES
            .iter()
            .find(|(key, _)| *key == latin_key)
            .map(|(_, note)| *note)
    }

    /// Adds a user-supplied mapping and saves the lexicon. If the save fails
    /// the entry stays in memory for the rest of the session.
    pub fn commit_correction(&mut self, correction: &MappingCorrection) -> Result<()> {
        learn(&mut self.store, &mut self.context, correction)?;
        self.dirty = true;
        let file = file_for(correction.language);
        if self.data_dir.is_some() && self.unreadable.contains(&file) {
            tracing::warn!(file, "dictionary file failed to load; correction kept for this session only");
        }
        self.save().map_err(|e| {
            tracing::error!(error = %e, "could not save lexicon; correction kept for this session only");
            e
        })
    }

    /// Writes pending corrections. Does nothing when the lexicon is unchanged
    /// or has no data directory.
    pub fn save(&mut self) -> Result<()> {
        let Some(dir) = &self.data_dir else {
            return Ok(());
        };
        if !self.dirty {
            return Ok(());
        }
        save_store(&self.store, dir, &self.unreadable)?;
        self.dirty = false;
        Ok(())
    }
}

impl Default for LexiconEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_hit_needs_no_rules() {
        let engine = LexiconEngine::new();
        let lookup = engine.lookup(" Padre ", Language::Italian);
        assert_eq!(lookup.latin_key(), Some("pater"));
        let pie = engine.latin_to_pie("pater");
        assert_eq!(pie.form, "*ph₂tḗr");
        assert!(pie.is_attested());
    }

    #[test]
    fn every_stored_latin_key_returns_its_literal() {
        let engine = LexiconEngine::new();
        for (latin, pie) in engine.store().latin_pie.iter() {
            assert_eq!(engine.latin_to_pie(latin).form, pie);
        }
    }

    #[test]
    fn unknown_latin_is_its_own_fallback_key() {
        let engine = LexiconEngine::new();
        match engine.lookup("Lupus", Language::Latin) {
            Lookup::Resolved { latin_key, fallback, .. } => {
                assert_eq!(latin_key, "lupus");
                assert!(fallback);
            }
            other => panic!("expected a resolved lookup, got {other:?}"),
        }
        assert_eq!(engine.latin_to_pie("lupus").form, "*lupus");
    }

    #[test]
    fn unknown_words_are_missing_not_errors() {
        let engine = LexiconEngine::new();
        assert_eq!(
            engine.lookup("wolf", Language::ModernGerman),
            Lookup::Missing {
                word: "wolf".to_string(),
                language: Language::ModernGerman
            }
        );
    }

    #[test]
    fn greek_lookup_is_not_case_folded() {
        let engine = LexiconEngine::new();
        assert_eq!(engine.lookup(" πατήρ ", Language::Greek).latin_key(), Some("pater"));
        assert!(matches!(
            engine.lookup("Πατήρ", Language::Greek),
            Lookup::Missing { .. }
        ));
    }

    #[test]
    fn comparative_table_for_frater() {
        let engine = LexiconEngine::new();
        let rows = engine.comparative_table("frater");
        let words: Vec<_> = rows.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(
            words,
            ["fratello", "hermano", "frater", "φράτηρ", "brōþor", "bruder"]
        );
        assert!(rows.iter().all(|r| r.pie != NOT_FOUND && !r.pie.is_empty()));
        assert_eq!(rows[0].pie, "*bʰréh₂tēr");
        assert_eq!(rows[3].pie, "*phράτηρ");
        assert_eq!(rows[4].pie, "*brōtor");
        assert_eq!(rows[5].pie, "*bruter");
    }

    #[test]
    fn missing_branch_word_shows_marker() {
        let engine = LexiconEngine::new();
        // No Greek word maps to "soror".
        let rows = engine.comparative_table("soror");
        let greek = rows.iter().find(|r| r.language == Language::Greek).unwrap();
        assert_eq!(greek.word, NOT_FOUND);
        assert_eq!(greek.pie, NOT_FOUND);
        assert!(!greek.is_found());
    }

    #[test]
    fn romance_words_outside_the_lexicon_go_through_latin() {
        let engine = LexiconEngine::new();
        let d = engine.derive_pie("nazione", Language::Italian);
        assert_eq!(d.form, "*natio");
        assert!(!d.is_attested());
        assert_eq!(d.steps.len(), 1);
    }

    #[test]
    fn reconstruction_picks_the_shared_form() {
        let engine = LexiconEngine::new();
        let r = engine.reconstruct("frater");
        assert_eq!(r.suggested.as_deref(), Some("*bʰréh₂tēr"));
        assert_eq!(r.variants, vec!["*bʰréh₂tēr (no e/o alternation)"]);
    }

    #[test]
    fn reconstruction_of_unknown_key_is_latin_only() {
        let engine = LexiconEngine::new();
        let r = engine.reconstruct("lupus");
        assert_eq!(r.suggested.as_deref(), Some("*lupus"));
        assert_eq!(r.variants, vec!["*lupus (no e/o alternation)"]);
    }

    #[test]
    fn cached_derivation_matches_uncached() {
        let mut engine = LexiconEngine::new();
        let first = engine.derive_pie_cached("hand", Language::OldEnglish);
        let second = engine.derive_pie_cached("hand", Language::OldEnglish);
        assert_eq!(first, second);
        assert_eq!(first, engine.derive_pie("hand", Language::OldEnglish));
        assert_eq!(engine.context().cache_len(), 1);
    }

    #[test]
    fn resolve_records_history() {
        let mut engine = LexiconEngine::new();
        engine.resolve("hermano", Language::Spanish);
        engine.resolve("zzz", Language::Spanish);
        let recent: Vec<_> = engine.context().recent().map(|e| e.latin_key.as_str()).collect();
        assert_eq!(recent, ["frater"]);
    }

    #[test]
    fn correction_without_data_dir_stays_in_memory() {
        let mut engine = LexiconEngine::new();
        let c = MappingCorrection::new(Language::Greek, "λύκος", "lupus");
        engine.commit_correction(&c).unwrap();
        assert_eq!(engine.lookup("λύκος", Language::Greek).latin_key(), Some("lupus"));
        assert!(engine.has_unsaved_changes());
    }

    #[test]
    fn save_without_changes_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = LexiconEngine::from_dir_or_default(dir.path(), 5);
        engine.save().unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn successful_commit_clears_dirty_flag() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = LexiconEngine::from_dir_or_default(dir.path(), 5);
        let c = MappingCorrection::new(Language::Greek, "λύκος", "lupus");
        engine.commit_correction(&c).unwrap();
        assert!(!engine.has_unsaved_changes());
    }

    #[test]
    fn etymology_notes_cover_builtin_keys() {
        let engine = LexiconEngine::new();
        for (latin, _) in engine.store().latin_pie.iter() {
            assert!(engine.etymology(latin).is_some(), "no note for {latin}");
        }
        assert!(engine.etymology("lupus").is_none());
    }
}
