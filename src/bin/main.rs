use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{style, Stylize};
use crossterm::terminal::{Clear, ClearType};
use ie_core::core::data::NOTES_ATTRIBUTION;
use ie_core::{ComparativeRow, Config, Language, LexiconEngine, Lookup, MappingCorrection, NOT_FOUND};
use std::io::{self, stdin, stdout, Write};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ie_core=warn")),
        )
        .init();

    let config = Config::from_env();
    let mut engine = LexiconEngine::from_config(&config);
    let mut language = Language::Italian;
    let mut compare = false;

    print_header(&config, language, compare)?;
    for file in engine.unreadable_files() {
        println!("{}", format!("Could not read {}; built-in entries used, file left as is.", file).yellow());
    }

    loop {
        print!("\n[{}{}] > ", language, if compare { ", compare" } else { "" });
        stdout().flush()?;

        let Some(line) = read_line()? else { break };
        let cmd = line.trim();

        match cmd {
            "exit" | "quit" => break,
            "" => continue,
            ":compare" => {
                compare = !compare;
                println!("Comparative reconstruction {}", if compare { "on" } else { "off" });
            }
            ":history" => print_history(&engine),
            ":clear" => print_header(&config, language, compare)?,
            s if s.starts_with(":lang") => match s[":lang".len()..].trim().parse::<Language>() {
                Ok(lang) => {
                    language = lang;
                    println!("Source language: {}", language.label());
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
            word => lookup_and_render(&mut engine, word, language, compare)?,
        }
    }

    if let Err(e) = engine.save() {
        eprintln!("[ERROR] Could not save dictionaries: {}", e);
    }
    Ok(())
}

fn read_line() -> io::Result<Option<String>> {
    let mut input = String::new();
    if stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input))
}

fn print_header(config: &Config, language: Language, compare: bool) -> io::Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Comparative Indo-European Lookup".bold());
    println!("---------------------------------------------------------------");
    println!("Type a word to look it up. ':lang <id>' changes the source language,");
    println!("':compare' toggles comparative reconstruction, ':history' lists recent");
    println!("lookups, 'exit' quits.");
    println!(
        "Languages: {}",
        Language::ALL.map(|l| l.id()).join(", ")
    );
    println!("Dictionaries: {}", config.data_dir.display());
    println!("Source language: {}, compare: {}", language.label(), compare);
    Ok(())
}

fn print_history(engine: &LexiconEngine) {
    let mut any = false;
    for entry in engine.context().recent() {
        any = true;
        println!("  {} ({}) -> {}", entry.word, entry.language, entry.latin_key);
    }
    if !any {
        println!("  no lookups yet");
    }
}

fn lookup_and_render(
    engine: &mut LexiconEngine,
    word: &str,
    language: Language,
    compare: bool,
) -> io::Result<()> {
    let mut lookup = engine.resolve(word, language);

    if let Lookup::Missing { word: missing, .. } = &lookup {
        let missing = missing.clone();
        print!(
            "'{}' is not in the {} dictionary. Latin equivalent (empty to skip): ",
            missing,
            language.label()
        );
        stdout().flush()?;
        let answer = read_line()?.unwrap_or_default();
        let answer = answer.trim();
        if !answer.is_empty() {
            let correction = MappingCorrection::new(language, &missing, answer);
            match engine.commit_correction(&correction) {
                Ok(()) => println!("{}", "Saved.".green()),
                Err(e) => println!("{}", format!("Not saved: {}", e).red()),
            }
            lookup = engine.resolve(&missing, language);
        }
    }

    println!();
    let latin_key = match &lookup {
        Lookup::Resolved { latin_key, fallback, .. } => {
            let pie = engine.derive_pie_cached(latin_key, Language::Latin);
            println!("{}", "Result".bold());
            println!("  Latin concept: {}", style(latin_key).bold());
            if *fallback {
                println!("  {}", "(not in the Latin-PIE table, using the word itself)".dark_grey());
            }
            println!("  Reconstructed PIE: {}", style(&pie.form).bold());
            for step in &pie.steps {
                println!("    {}", style(step).dark_grey());
            }
            latin_key.clone()
        }
        Lookup::Missing { word, language } => {
            println!(
                "{}",
                "Word not found in the dictionaries. Attempting a generic phonetic reconstruction."
                    .yellow()
            );
            let pie = engine.derive_pie_cached(word, *language);
            println!("  Reconstructed PIE: {}", style(&pie.form).bold());
            for step in &pie.steps {
                println!("    {}", style(step).dark_grey());
            }
            NOT_FOUND.to_string()
        }
    };

    if latin_key == NOT_FOUND {
        return Ok(());
    }

    println!("\n{}", "Cross-language comparison".bold());
    print_table(&engine.comparative_table(&latin_key));

    if compare {
        let reconstruction = engine.reconstruct(&latin_key);
        println!("\n{}", "Comparative reconstruction".bold());
        match reconstruction.suggested {
            Some(root) => {
                println!("  Suggested root: {}", style(&root).bold());
                for variant in &reconstruction.variants {
                    println!("    ablaut: {}", variant);
                }
            }
            None => println!("  No branch produced a form."),
        }
    }

    if let Some(note) = engine.etymology(&latin_key) {
        println!("\n{}", "Etymological note".bold());
        println!("  {}: {}", latin_key.to_uppercase().cyan(), note);
        println!("  {}", NOTES_ATTRIBUTION.dark_grey());
    }
    Ok(())
}

fn print_table(rows: &[ComparativeRow]) {
    let width = |s: &str| s.chars().count();
    let lang_w = rows.iter().map(|r| width(r.language.label())).max().unwrap_or(0).max(8);
    let word_w = rows.iter().map(|r| width(&r.word)).max().unwrap_or(0).max(4);

    println!("  {:<lang_w$}  {:<word_w$}  {}", "Language", "Form", "Derived PIE");
    for row in rows {
        let pad = word_w.saturating_sub(width(&row.word));
        println!(
            "  {:<lang_w$}  {}{}  {}",
            row.language.label(),
            row.word,
            " ".repeat(pad),
            row.pie
        );
    }
}
