use std::collections::HashMap;
use std::sync::LazyLock;

/// Honorifics that may lead a name, in their canonical spelling.
/// Matching is case-insensitive and ignores periods, so "DR." and "dr"
/// both resolve to "Dr".
pub const TITLES: &[&str] = &[
    // Social
    "Mr", "Mrs", "Ms", "Miss", "Mx", "Master", "Madam", "Mme", "Mlle", "Sir", "Dame", "Lord",
    "Lady", "Hon", "Honorable", "Honourable",
    // Academic / professional
    "Dr", "Doctor", "Prof", "Professor", "Judge", "Justice",
    // Clergy
    "Rev", "Reverend", "Fr", "Father", "Pastor", "Rabbi", "Imam", "Sister", "Brother", "Bishop",
    "Cardinal",
    // Military
    "Capt", "Captain", "Col", "Colonel", "Gen", "General", "Lt", "Lieutenant", "Maj", "Major",
    "Sgt", "Sergeant", "Cpl", "Corporal", "Pvt", "Cmdr", "Commander", "Adm", "Admiral",
    // Civic
    "Pres", "President", "Gov", "Governor", "Sen", "Senator", "Rep", "Amb", "Ambassador",
    "Mayor",
];

/// Generational, honor and credential suffixes, in their canonical spelling.
/// Single-letter roman numerals are left out: they read as middle initials.
/// So are two-letter credentials that double as surnames (MA, DO, BA).
pub const SUFFIXES: &[&str] = &[
    // Generational
    "Jr", "Sr", "II", "III", "IV", "VI", "VII", "VIII", "2nd", "3rd", "4th",
    // Legal
    "Esq", "Esquire", "JD", "QC", "KC",
    // Academic
    "PhD", "EdD", "PsyD", "DPhil", "MSc", "MBA", "BSc", "LLB", "LLM", "LLD",
    // Medical
    "MD", "DDS", "DVM", "RN", "PharmD",
    // Professional / honors
    "CPA", "OBE", "MBE", "CBE", "KBE", "FRS", "Ret",
];

/// Words allowed to join two titles, as in "Mr and Mrs".
pub const CONJUNCTIONS: &[&str] = &["and", "&", "y", "e"];

/// Lookup key for a token: lowercase with periods dropped.
pub fn lexicon_key(token: &str) -> String {
    token
        .chars()
        .filter(|&c| c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

fn build_lookup(words: &[&'static str]) -> HashMap<String, &'static str> {
    words.iter().map(|&w| (lexicon_key(w), w)).collect()
}

static TITLE_LOOKUP: LazyLock<HashMap<String, &'static str>> =
    LazyLock::new(|| build_lookup(TITLES));

static SUFFIX_LOOKUP: LazyLock<HashMap<String, &'static str>> =
    LazyLock::new(|| build_lookup(SUFFIXES));

/// Canonical spelling of `token` if it is a known title.
pub fn canonical_title(token: &str) -> Option<&'static str> {
    TITLE_LOOKUP.get(&lexicon_key(token)).copied()
}

/// Canonical spelling of `token` if it is a known suffix.
pub fn canonical_suffix(token: &str) -> Option<&'static str> {
    SUFFIX_LOOKUP.get(&lexicon_key(token)).copied()
}

pub fn is_title(token: &str) -> bool {
    canonical_title(token).is_some()
}

pub fn is_suffix(token: &str) -> bool {
    canonical_suffix(token).is_some()
}

pub fn is_conjunction(token: &str) -> bool {
    let key = token.to_lowercase();
    CONJUNCTIONS.contains(&key.as_str())
}

/// Number of leading tokens that form a title chain.
///
/// A chain is a run of titles, optionally joined by a conjunction that sits
/// between two titles ("Mr and Mrs"). The chain never swallows the last
/// token, so a name always keeps at least one core token.
pub fn leading_title_count(tokens: &[String]) -> usize {
    let mut count = 0;
    while count < tokens.len() {
        if is_title(&tokens[count]) {
            count += 1;
        } else if count > 0
            && is_conjunction(&tokens[count])
            && tokens.get(count + 1).is_some_and(|t| is_title(t))
        {
            count += 2;
        } else {
            break;
        }
    }

    let mut limit = count.min(tokens.len().saturating_sub(1));
    // Don't leave a dangling conjunction at the end of the chain
    while limit > 0 && is_conjunction(&tokens[limit - 1]) {
        limit -= 1;
    }
    limit
}

/// Number of trailing tokens that are suffixes, leaving at least `keep`
/// tokens in front of them.
pub fn trailing_suffix_count(tokens: &[String], keep: usize) -> usize {
    tokens
        .iter()
        .rev()
        .take(tokens.len().saturating_sub(keep))
        .take_while(|t| is_suffix(t))
        .count()
}
