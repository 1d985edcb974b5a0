// File: src/persistence.rs
//! On-disk layout of the lexicon. Four pretty-printed JSON files, one per
//! dictionary group, each rewritten wholesale on save:
//!
//! ```text
//! <data_dir>/
//! ├── romance_to_latin.json   # { "italian": {..}, "spanish": {..} }
//! ├── greek_to_latin.json     # { word: latin }
//! ├── germanic_to_latin.json  # { "old_english": {..}, "modern_german": {..} }
//! └── latin_to_pie.json       # { latin: pie }
//! ```
use crate::core::lexicon::{Dictionary, LexiconStore};
use crate::core::types::Language;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub const ROMANCE_FILE: &str = "romance_to_latin.json";
pub const GREEK_FILE: &str = "greek_to_latin.json";
pub const GERMANIC_FILE: &str = "germanic_to_latin.json";
pub const LATIN_PIE_FILE: &str = "latin_to_pie.json";

/// The file holding `language`'s entries.
pub fn file_for(language: Language) -> &'static str {
    match language {
        Language::Italian | Language::Spanish => ROMANCE_FILE,
        Language::Greek => GREEK_FILE,
        Language::OldEnglish | Language::ModernGerman => GERMANIC_FILE,
        Language::Latin => LATIN_PIE_FILE,
    }
}

#[derive(Serialize, Deserialize)]
struct RomanceFile {
    #[serde(default)]
    italian: Dictionary,
    #[serde(default)]
    spanish: Dictionary,
}

#[derive(Serialize, Deserialize)]
struct GermanicFile {
    #[serde(default)]
    old_english: Dictionary,
    #[serde(default)]
    modern_german: Dictionary,
}

/// Result of [`load_store`]: the store plus the files that exist but could
/// not be read. Those keep their built-in entries in memory and must not be
/// overwritten by a later save.
#[derive(Debug)]
pub struct LoadedStore {
    pub store: LexiconStore,
    pub unreadable: Vec<&'static str>,
}

/// Loads the store from `dir`. Each absent or unreadable file keeps its
/// built-in default; the other files are still used.
pub fn load_store(dir: &Path) -> LoadedStore {
    let mut store = LexiconStore::builtin();
    let mut unreadable = Vec::new();

    if let Some(romance) = read_or_skip::<RomanceFile>(dir, ROMANCE_FILE, &mut unreadable) {
        store.italian = romance.italian;
        store.spanish = romance.spanish;
    }
    if let Some(greek) = read_or_skip::<Dictionary>(dir, GREEK_FILE, &mut unreadable) {
        store.greek = greek;
    }
    if let Some(germanic) = read_or_skip::<GermanicFile>(dir, GERMANIC_FILE, &mut unreadable) {
        store.old_english = germanic.old_english;
        store.modern_german = germanic.modern_german;
    }
    if let Some(latin_pie) = read_or_skip::<Dictionary>(dir, LATIN_PIE_FILE, &mut unreadable) {
        store.latin_pie = latin_pie;
    }

    tracing::info!(dir = %dir.display(), unreadable = unreadable.len(), "lexicon loaded");
    LoadedStore { store, unreadable }
}

/// Rewrites the dictionary files in `dir`, creating it if needed. Files named
/// in `skip` are left untouched.
///
/// Every file is serialized to a temp file first; nothing is replaced unless
/// all of them were written. The renames themselves run one after another, so
/// a rename failing midway can still leave a mix of old and new files.
pub fn save_store(store: &LexiconStore, dir: &Path, skip: &[&str]) -> Result<()> {
    fs::create_dir_all(dir)?;

    let romance = RomanceFile {
        italian: store.italian.clone(),
        spanish: store.spanish.clone(),
    };
    let germanic = GermanicFile {
        old_english: store.old_english.clone(),
        modern_german: store.modern_german.clone(),
    };

    let mut staged = Vec::new();
    if !skip.contains(&ROMANCE_FILE) {
        staged.push((ROMANCE_FILE, write_temp(dir, &romance)?));
    }
    if !skip.contains(&GREEK_FILE) {
        staged.push((GREEK_FILE, write_temp(dir, &store.greek)?));
    }
    if !skip.contains(&GERMANIC_FILE) {
        staged.push((GERMANIC_FILE, write_temp(dir, &germanic)?));
    }
    if !skip.contains(&LATIN_PIE_FILE) {
        staged.push((LATIN_PIE_FILE, write_temp(dir, &store.latin_pie)?));
    }

    for (name, temp_file) in staged {
        let path = dir.join(name);
        temp_file.persist(&path).map_err(|source| Error::Persist {
            path: path.display().to_string(),
            source,
        })?;
    }

    tracing::info!(dir = %dir.display(), skipped = skip.len(), "lexicon saved");
    Ok(())
}

fn read_or_skip<T: DeserializeOwned>(
    dir: &Path,
    name: &'static str,
    unreadable: &mut Vec<&'static str>,
) -> Option<T> {
    let path = dir.join(name);
    match read_json(&path) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable dictionary file, using built-in entries and leaving the file alone");
            unreadable.push(name);
            None
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no dictionary file, keeping built-in entries");
        return Ok(None);
    }
    let reader = BufReader::new(File::open(path)?);
    Ok(Some(serde_json::from_reader(reader)?))
}

/// Serializes into a temp file beside the final location so the later rename
/// stays on one filesystem.
fn write_temp<T: Serialize>(dir: &Path, value: &T) -> Result<NamedTempFile> {
    let mut temp_file = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(&mut temp_file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    Ok(temp_file)
}
