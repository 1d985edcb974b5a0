// src/core/types.rs
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Marker shown wherever a branch has no word (or no form) for a Latin key.
pub const NOT_FOUND: &str = "—";

/// The canonical Latin word used as the join key across branch dictionaries.
pub type LatinKey = String;

/// Language groups. Latin is kept apart from its Romance descendants because
/// it owns the PIE table rather than a word-to-Latin dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Romance,
    Latin,
    Greek,
    Germanic,
}

/// Every source language the lexicon understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Italian,
    Spanish,
    Latin,
    Greek,
    OldEnglish,
    ModernGerman,
}

impl Language {
    /// Order of the rows in a comparative table.
    pub const ALL: [Language; 6] = [
        Language::Italian,
        Language::Spanish,
        Language::Latin,
        Language::Greek,
        Language::OldEnglish,
        Language::ModernGerman,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Language::Italian => "italian",
            Language::Spanish => "spanish",
            Language::Latin => "latin",
            Language::Greek => "greek",
            Language::OldEnglish => "old_english",
            Language::ModernGerman => "modern_german",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Italian => "Italian",
            Language::Spanish => "Spanish",
            Language::Latin => "Latin",
            Language::Greek => "Greek",
            Language::OldEnglish => "Old English",
            Language::ModernGerman => "Modern German",
        }
    }

    pub fn branch(self) -> Branch {
        match self {
            Language::Italian | Language::Spanish => Branch::Romance,
            Language::Latin => Branch::Latin,
            Language::Greek => Branch::Greek,
            Language::OldEnglish | Language::ModernGerman => Branch::Germanic,
        }
    }

    /// Trims and lowercases a raw word. Greek is only trimmed: case folding
    /// polytonic input would not match the dictionary spellings.
    pub fn normalize(self, word: &str) -> String {
        match self {
            Language::Greek => word.trim().to_string(),
            _ => word.trim().to_lowercase(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.id() == wanted)
            .ok_or_else(|| Error::UnknownLanguage(value.to_string()))
    }
}

/// A PIE form together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub form: String,
    /// True when the form came straight from the Latin-to-PIE table.
    attested: bool,
    /// Human-readable record of the substitution rules that fired.
    pub steps: Vec<String>,
}

impl Derivation {
    pub fn attested(form: &str) -> Self {
        Self {
            form: form.to_string(),
            attested: true,
            steps: Vec::new(),
        }
    }

    /// A form produced by substitution rules rather than read from the table.
    pub fn reconstructed(form: String, steps: Vec<String>) -> Self {
        Self {
            form,
            attested: false,
            steps,
        }
    }

    pub fn is_attested(&self) -> bool {
        self.attested
    }
}

/// Outcome of the pure lookup step. `Missing` is not an error: callers decide
/// whether to ask for a correction or fall back to generic reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Resolved {
        word: String,
        language: Language,
        latin_key: LatinKey,
        /// Set when a Latin word absent from the PIE table is used as its own key.
        fallback: bool,
    },
    Missing {
        word: String,
        language: Language,
    },
}

impl Lookup {
    pub fn latin_key(&self) -> Option<&str> {
        match self {
            Lookup::Resolved { latin_key, .. } => Some(latin_key.as_str()),
            Lookup::Missing { .. } => None,
        }
    }
}

/// One line of the comparative table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparativeRow {
    pub language: Language,
    pub word: String,
    pub pie: String,
}

impl ComparativeRow {
    pub fn is_found(&self) -> bool {
        self.word != NOT_FOUND
    }
}

/// Suggested root across branches plus its ablaut grades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub suggested: Option<String>,
    pub variants: Vec<String>,
}
