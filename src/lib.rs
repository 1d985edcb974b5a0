// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod learning;
pub mod persistence;

pub use crate::config::Config;
pub use crate::core::engine::LexiconEngine;
pub use crate::core::types::{Branch, ComparativeRow, Derivation, Language, Lookup, Reconstruction, NOT_FOUND};
pub use crate::error::{Error, Result};
pub use crate::learning::MappingCorrection;
