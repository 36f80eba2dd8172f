use name_parser_types::NameFields;

use crate::parser::decompose;
use crate::surname::is_particle;
use crate::titles::{canonical_suffix, canonical_title, is_conjunction};

// ── A decomposed personal name ─────────────────────────────────────

/// A personal name broken into its parts.
///
/// Built once by [`crate::parser::parse`] and read-only afterwards. Tokens
/// keep the spelling they had in the input; use [`ParsedName::capitalized`]
/// for normalized case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedName {
    pub(crate) title: Vec<String>,
    pub(crate) first_name: String,
    pub(crate) middle_names: Vec<String>,
    /// May hold several words: "van der Berg", "Smith-Jones".
    pub(crate) last_name: String,
    pub(crate) nickname: String,
    pub(crate) suffix: Vec<String>,
}

impl ParsedName {
    pub fn title(&self) -> &[String] {
        &self.title
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_names(&self) -> &[String] {
        &self.middle_names
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn suffix(&self) -> &[String] {
        &self.suffix
    }

    /// Titles joined with a space: "Mr and Mrs".
    pub fn title_str(&self) -> String {
        self.title.join(" ")
    }

    /// Middle names joined with a space.
    pub fn middle_name(&self) -> String {
        self.middle_names.join(" ")
    }

    /// Suffixes joined with a comma: "Jr, PhD".
    pub fn suffix_str(&self) -> String {
        self.suffix.join(", ")
    }

    /// The name in canonical order (title first middle last suffix), one
    /// space between parts. The nickname is left out.
    ///
    /// When that order would read back differently, e.g. a two-word surname
    /// with no particle ("Garcia Lopez, Ana"), the comma layout
    /// "Last, Title First Middle, Suffix" is used instead. Either way,
    /// parsing the result again gives back the same parts.
    pub fn full_name(&self) -> String {
        let forward = self.forward_name();
        if self.last_name.is_empty() || self.same_parts(&decompose(&forward)) {
            forward
        } else {
            self.reversed_name()
        }
    }

    /// Whether `other` has the same title, first, middle, last and suffix.
    /// Nicknames are not compared.
    pub fn same_parts(&self, other: &ParsedName) -> bool {
        self.title == other.title
            && self.first_name == other.first_name
            && self.middle_names == other.middle_names
            && self.last_name == other.last_name
            && self.suffix == other.suffix
    }

    fn forward_name(&self) -> String {
        self.title
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.first_name.as_str()))
            .chain(self.middle_names.iter().map(String::as_str))
            .chain(std::iter::once(self.last_name.as_str()))
            .chain(self.suffix.iter().map(String::as_str))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// "Last, Title First Middle, Suffix"
    fn reversed_name(&self) -> String {
        let given = self
            .title
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.first_name.as_str()))
            .chain(self.middle_names.iter().map(String::as_str))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let mut out = format!("{}, {given}", self.last_name);
        if !self.suffix.is_empty() {
            out.push_str(", ");
            out.push_str(&self.suffix.join(" "));
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.first_name.is_empty()
            && self.middle_names.is_empty()
            && self.last_name.is_empty()
            && self.nickname.is_empty()
            && self.suffix.is_empty()
    }

    /// A copy with case normalized.
    ///
    /// Titles and suffixes take their lexicon spelling ("phd" -> "PhD"),
    /// surname particles in front of another surname word are lowercased,
    /// every other word is capitalized per hyphen or apostrophe segment.
    pub fn capitalized(&self) -> ParsedName {
        let last_words: Vec<&str> = self.last_name.split(' ').collect();
        let last_name = last_words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i + 1 < last_words.len() && is_particle(w) {
                    w.to_lowercase()
                } else {
                    capitalize_word(w)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        ParsedName {
            title: self
                .title
                .iter()
                .map(|t| match canonical_title(t) {
                    Some(canonical) => canonical.to_string(),
                    None if is_conjunction(t) => t.to_lowercase(),
                    None => capitalize_word(t),
                })
                .collect(),
            first_name: capitalize_word(&self.first_name),
            middle_names: self.middle_names.iter().map(|m| capitalize_word(m)).collect(),
            last_name,
            nickname: self
                .nickname
                .split_whitespace()
                .map(capitalize_word)
                .collect::<Vec<_>>()
                .join(" "),
            suffix: self
                .suffix
                .iter()
                .map(|s| match canonical_suffix(s) {
                    Some(canonical) => canonical.to_string(),
                    None => capitalize_word(s),
                })
                .collect(),
        }
    }
}

impl From<&ParsedName> for NameFields {
    fn from(name: &ParsedName) -> Self {
        NameFields {
            title: name.title_str(),
            first_name: name.first_name.clone(),
            middle_name: name.middle_name(),
            last_name: name.last_name.clone(),
            nickname: name.nickname.clone(),
            suffixes: name.suffix_str(),
        }
    }
}

/// Upper-case the first letter of each hyphen/apostrophe segment and lower
/// the rest: "o'brien" -> "O'Brien", "SMITH-JONES" -> "Smith-Jones".
fn capitalize_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut segment_start = true;

    for c in word.to_lowercase().chars() {
        if segment_start && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            segment_start = false;
        } else {
            out.push(c);
        }
        if matches!(c, '-' | '\'' | '’') {
            segment_start = true;
        }
    }

    // McDonald, McKay
    if let Some(rest) = out.strip_prefix("Mc") {
        let mut chars = rest.chars();
        if let Some(c) = chars.next().filter(|c| c.is_lowercase()) {
            return format!("Mc{}{}", c.to_uppercase(), chars.as_str());
        }
    }
    out
}
