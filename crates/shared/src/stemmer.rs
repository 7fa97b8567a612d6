//! Dictionary-backed Indonesian stemmer.
//!
//! Affixes are peeled off in the usual order (particles, possessive pronouns,
//! derivational suffixes, then up to three derivational prefixes with nasal
//! recoding). A candidate is accepted only when it is a known root word, so
//! unknown words pass through untouched instead of being over-stemmed.

use std::collections::HashSet;

const ROOT_WORDS: &str = include_str!("../data/kata-dasar.txt");

const PARTICLES: [&str; 4] = ["lah", "kah", "tah", "pun"];
const POSSESSIVES: [&str; 3] = ["nya", "ku", "mu"];
const MAX_PREFIXES: usize = 3;

/// Reduces a single token to its root form.
pub trait Stemmer {
    fn stem(&self, word: &str) -> String;
}

pub struct IndonesianStemmer {
    roots: HashSet<String>,
}

impl IndonesianStemmer {
    /// Stemmer using the bundled root dictionary.
    pub fn new() -> Self {
        Self::with_roots(ROOT_WORDS.lines())
    }

    pub fn with_roots<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roots = roots
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { roots }
    }

    fn is_root(&self, word: &str) -> bool {
        self.roots.contains(word)
    }

    fn strip_prefixes(&self, word: &str, depth: usize) -> Option<String> {
        if depth == 0 {
            return None;
        }

        let candidates = prefix_candidates(word);
        if let Some(root) = candidates.iter().find(|c| self.is_root(c)) {
            return Some(root.clone());
        }

        candidates
            .iter()
            .filter(|c| c.chars().count() > 2)
            .find_map(|c| self.strip_prefixes(c, depth - 1))
    }
}

impl Default for IndonesianStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for IndonesianStemmer {
    fn stem(&self, word: &str) -> String {
        if word.chars().count() <= 3 || self.is_root(word) {
            return word.to_string();
        }

        let forms = suffix_forms(word);
        if let Some(root) = forms.iter().skip(1).find(|f| self.is_root(f)) {
            return root.to_string();
        }

        // most stripped form first, then restore suffixes one at a time
        forms
            .iter()
            .rev()
            .find_map(|form| self.strip_prefixes(form, MAX_PREFIXES))
            .unwrap_or_else(|| word.to_string())
    }
}

fn strip_any<'a>(word: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes
        .iter()
        .find_map(|s| word.strip_suffix(s))
        .filter(|rest| rest.chars().count() >= 2)
}

/// The word followed by progressively suffix-stripped forms.
fn suffix_forms(word: &str) -> Vec<&str> {
    let mut forms = vec![word];
    let mut current = word;

    if let Some(rest) = strip_any(current, &PARTICLES) {
        forms.push(rest);
        current = rest;
    }
    if let Some(rest) = strip_any(current, &POSSESSIVES) {
        forms.push(rest);
        current = rest;
    }

    // "-kan" may really be a root ending in k followed by "-an"
    if let Some(rest) = strip_any(current, &["kan"]) {
        forms.push(rest);
    }
    if let Some(rest) = strip_any(current, &["an"]) {
        forms.push(rest);
    } else if let Some(rest) = strip_any(current, &["i"]) {
        forms.push(rest);
    }

    forms
}

/// Every way of removing one derivational prefix from `word`.
fn prefix_candidates(word: &str) -> Vec<String> {
    let mut out = Vec::new();

    for plain in ["di", "ke", "se", "ber", "be", "ter", "te", "per"] {
        if let Some(rest) = word.strip_prefix(plain) {
            out.push(rest.to_string());
        }
    }

    for nasal in ["me", "pe"] {
        if let Some(rest) = word.strip_prefix(nasal) {
            out.extend(recode_nasal(rest));
        }
    }

    out
}

/// Undo the sound change a me-/pe- prefix causes on the first root letter.
fn recode_nasal(rest: &str) -> Vec<String> {
    if let Some(r) = rest.strip_prefix("ny") {
        vec![format!("s{}", r)]
    } else if let Some(r) = rest.strip_prefix("ng") {
        vec![r.to_string(), format!("k{}", r)]
    } else if let Some(r) = rest.strip_prefix('m') {
        vec![r.to_string(), format!("p{}", r), format!("m{}", r)]
    } else if let Some(r) = rest.strip_prefix('n') {
        vec![r.to_string(), format!("t{}", r), format!("n{}", r)]
    } else {
        vec![rest.to_string()]
    }
}
