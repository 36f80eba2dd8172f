use regex::Regex;
use std::sync::LazyLock;

// ── Nickname delimiters ────────────────────────────────────────────
//
// Real inputs:
//   John "Jack" Smith
//   Robert (Bob) Jones
//   William ‘Bill’ O'Brien
//   Margaret “Peggy” Hill
//
// Single quotes, straight or curly, only count when they stand alone
// around a word group, otherwise "O'Brien" or "O’Brien" would be cut
// apart. Each opening quote pairs only with its own closing quote.

static RE_DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s*"([^"]*)"\s*"#).unwrap());

static RE_CURLY_DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*“([^”]*)”\s*").unwrap());

static RE_CURLY_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s+)‘([^’]*)’(?:\s+|$)").unwrap());

static RE_PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(([^()]*)\)\s*").unwrap());

static RE_SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s+)'([^']*)'(?:\s+|$)").unwrap());

/// A name with its nickname segments taken out.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Scanned {
    /// What's left after removing nickname segments.
    pub remainder: String,
    /// Nickname segments in the order they were found, trimmed.
    pub nicknames: Vec<String>,
}

/// Pull every quoted or parenthesized segment out of `raw`.
///
/// Each removed segment is replaced by a single space so the words on
/// either side stay apart.
pub fn extract_nicknames(raw: &str) -> Scanned {
    let mut remainder = raw.to_string();
    let mut found: Vec<(usize, String)> = Vec::new();

    for re in [
        &*RE_DOUBLE_QUOTED,
        &*RE_CURLY_DOUBLE,
        &*RE_PARENTHESIZED,
        &*RE_SINGLE_QUOTED,
        &*RE_CURLY_SINGLE,
    ] {
        // Positions in `remainder` shift between passes; order by `raw`.
        for caps in re.captures_iter(&remainder) {
            let inner = caps[1].trim();
            if !inner.is_empty() {
                let offset = raw.find(caps[0].trim()).unwrap_or(usize::MAX);
                found.push((offset, inner.to_string()));
            }
        }
        remainder = re.replace_all(&remainder, " ").into_owned();
    }

    found.sort_by_key(|(offset, _)| *offset);

    Scanned {
        remainder: remainder.trim().to_string(),
        nicknames: found.into_iter().map(|(_, n)| n).collect(),
    }
}

/// Split one comma-free segment into name tokens.
///
/// Hyphenated words stay whole. A hyphen standing on its own glues the
/// words around it: "Smith - Jones" gives "Smith-Jones".
pub fn tokenize(segment: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut glue_next = false;

    for word in segment.split_whitespace() {
        if is_bare_hyphen(word) {
            match tokens.last_mut() {
                Some(last) => {
                    last.push_str(word);
                    glue_next = true;
                }
                None => tokens.push(word.to_string()),
            }
            continue;
        }

        if glue_next {
            if let Some(last) = tokens.last_mut() {
                last.push_str(word);
            }
            glue_next = false;
        } else {
            tokens.push(word.to_string());
        }
    }

    tokens
}

fn is_bare_hyphen(word: &str) -> bool {
    matches!(word, "-" | "–" | "—")
}
