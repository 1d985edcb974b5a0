// Prints the lookup result for a handful of sample words in every language.
// Run with: cargo run --bin lexicon_check
use ie_core::{Language, LexiconEngine, Lookup};

fn main() {
    let engine = LexiconEngine::new();
    let test_cases = [
        ("padre", Language::Italian),
        ("nazione", Language::Italian),
        ("hermano", Language::Spanish),
        ("noche", Language::Spanish),
        ("pater", Language::Latin),
        ("lupus", Language::Latin),
        ("aqua", Language::Latin),
        ("φράτηρ", Language::Greek),
        ("θάλασσα", Language::Greek),
        ("brōþor", Language::OldEnglish),
        ("hand", Language::OldEnglish),
        ("bruder", Language::ModernGerman),
        ("wolf", Language::ModernGerman),
    ];
    for (word, language) in test_cases {
        match engine.lookup(word, language) {
            Lookup::Resolved { latin_key, .. } => {
                let pie = engine.latin_to_pie(&latin_key);
                let own = engine.derive_pie(word, language);
                println!("{word} ({language}) => {latin_key} => {} [own: {}]", pie.form, own.form);
            }
            Lookup::Missing { .. } => {
                let own = engine.derive_pie(word, language);
                println!("{word} ({language}) => — => {}", own.form);
            }
        }
    }
}
