// src/core/mod.rs

pub mod ablaut;
pub mod context;
pub mod converter;
pub mod data;
pub mod engine;
pub mod lexicon;
pub mod types;
