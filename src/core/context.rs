// File: src/core/context.rs
use crate::core::types::{Derivation, LatinKey, Language};
use std::collections::{HashMap, VecDeque};

/// A lookup the user made during this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub word: String,
    pub language: Language,
    pub latin_key: LatinKey,
}

/// Session-scoped state: a bounded window of recent lookups and a cache of
/// derived PIE forms. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct SessionContext {
    window_size: usize,
    history: VecDeque<HistoryEntry>,
    /// Maps (language, normalized word) -> derivation
    derivations: HashMap<(Language, String), Derivation>,
}

impl SessionContext {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            history: VecDeque::with_capacity(window_size),
            derivations: HashMap::new(),
        }
    }

    /// Records a resolved lookup, dropping the oldest one once the window is full.
    pub fn record(&mut self, entry: HistoryEntry) {
        if self.window_size == 0 {
            return;
        }
        if self.history.len() == self.window_size {
            self.history.pop_front();
        }
        self.history.push_back(entry);
    }

    /// Most recent first.
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().rev()
    }

    pub fn cached(&self, language: Language, word: &str) -> Option<&Derivation> {
        self.derivations.get(&(language, word.to_string()))
    }

    pub fn remember(&mut self, language: Language, word: &str, derivation: Derivation) {
        self.derivations.insert((language, word.to_string()), derivation);
    }

    /// Drops every cached derivation. Called whenever the lexicon changes.
    pub fn invalidate(&mut self) {
        self.derivations.clear();
    }

    pub fn cache_len(&self) -> usize {
        self.derivations.len()
    }
}
