// File: src/core/ablaut.rs
use crate::core::types::NOT_FOUND;
use std::collections::HashMap;

/// Picks the most frequent literal form among `forms`, skipping empty strings
/// and the not-found marker. Ties go to the form seen first.
pub fn suggest_root<'a, I>(forms: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for form in forms {
        if form.is_empty() || form == NOT_FOUND {
            continue;
        }
        let count = counts.entry(form).or_insert(0);
        if *count == 0 {
            order.push(form);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for form in order {
        let n = counts[form];
        if best.map_or(true, |(_, top)| n > top) {
            best = Some((form, n));
        }
    }
    best.map(|(form, _)| form.to_string())
}

/// Toy e/o/zero grade alternation by plain substring replacement.
///
/// A root with an `e` yields its o-grade twice (the list keeps the
/// duplicate). A root with only `o` yields its e-grade and zero grade. A root
/// with neither is returned annotated.
pub fn ablaut_variants(root: &str) -> Vec<String> {
    if root.contains('e') {
        let o_grade = root.replace('e', "o");
        vec![o_grade.clone(), o_grade]
    } else if root.contains('o') {
        vec![root.replace('o', "e"), root.replace('o', "")]
    } else {
        vec![format!("{} (no e/o alternation)", root)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_frequent_form_wins() {
        let forms = ["*bʰréh₂tēr", "*phράτηρ", "*bʰréh₂tēr", "*brōtor"];
        assert_eq!(suggest_root(forms).as_deref(), Some("*bʰréh₂tēr"));
    }

    #[test]
    fn ties_go_to_the_first_seen() {
        let forms = ["*a", "*b", "*b", "*a"];
        assert_eq!(suggest_root(forms).as_deref(), Some("*a"));
    }

    #[test]
    fn markers_and_blanks_are_ignored() {
        assert_eq!(suggest_root([NOT_FOUND, "", NOT_FOUND]), None);
        assert_eq!(suggest_root([NOT_FOUND, "*x"]).as_deref(), Some("*x"));
    }

    #[test]
    fn e_grade_root_yields_duplicated_o_grade() {
        assert_eq!(ablaut_variants("*h₃ekʷlos"), vec!["*h₃okʷlos", "*h₃okʷlos"]);
    }

    #[test]
    fn o_grade_root_yields_e_and_zero_grades() {
        assert_eq!(ablaut_variants("*mori"), vec!["*meri", "*mri"]);
    }

    #[test]
    fn accented_vowels_do_not_alternate() {
        // "é" and "ó" are distinct characters from plain "e" and "o".
        assert_eq!(ablaut_variants("*swésōr"), vec!["*swésōr (no e/o alternation)"]);
        assert_eq!(ablaut_variants("*ḱḗr"), vec!["*ḱḗr (no e/o alternation)"]);
    }

    #[test]
    fn variants_are_deterministic() {
        assert_eq!(ablaut_variants("*h₂ekʷā"), ablaut_variants("*h₂ekʷā"));
    }
}
