use crate::error::InvalidInputError;
use crate::scanner::{extract_nicknames, tokenize};
use crate::surname::{CoreName, split_name, split_reversed_name};
use crate::titles::{is_suffix, leading_title_count, trailing_suffix_count};
use crate::types::ParsedName;

// ── Name layouts ───────────────────────────────────────────────────
//
// Real inputs:
//   Mr Fred Blogs                 → title first last
//   Dr Jane Q. Public PhD         → title first middle last suffix
//   Blogs, Fred                   → last, first
//   Van Der Berg, Mr Johan Pieter → last, title first middle
//   John Smith, Jr.               → first last, suffix
//   Smith, John, Jr., PhD         → last, first, suffix, suffix

/// Titles, core tokens and suffixes of one comma-free segment.
struct Segment {
    title: Vec<String>,
    core: Vec<String>,
    suffix: Vec<String>,
}

impl Segment {
    /// Peel leading titles and trailing suffixes off `tokens`. Titles are
    /// taken first, so a word in both lexicons leading a name is a title.
    fn classify(mut tokens: Vec<String>) -> Self {
        let title_len = leading_title_count(&tokens);
        let mut core = tokens.split_off(title_len);
        let title = tokens;

        let suffix_len = trailing_suffix_count(&core, 1);
        let suffix = core.split_off(core.len() - suffix_len);

        Segment {
            title,
            core,
            suffix,
        }
    }
}

/// Break a free-form personal name into its parts.
///
/// Fails only when there is nothing to read: empty or whitespace-only input,
/// or input without a single letter.
pub fn parse(raw: &str) -> Result<ParsedName, InvalidInputError> {
    if raw.trim().is_empty() {
        return Err(InvalidInputError::Empty);
    }
    if !raw.chars().any(char::is_alphabetic) {
        return Err(InvalidInputError::NoAlphabeticContent);
    }

    let name = decompose(raw);
    tracing::trace!(raw, parsed = %name.full_name(), "parsed name");
    Ok(name)
}

/// The parsing work behind [`parse`], without input checks or logging.
pub(crate) fn decompose(raw: &str) -> ParsedName {
    let scanned = extract_nicknames(raw);
    let parts: Vec<&str> = scanned
        .remainder
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let mut name = match parts.as_slice() {
        [] => ParsedName::default(),
        [single] => parse_first_last(single),
        [head, tail @ ..] if is_suffix_list(tail) => parse_suffix_after_comma(head, tail),
        [surname, given, rest @ ..] => parse_last_first(surname, given, rest),
    };
    name.nickname = scanned.nicknames.join(" ");
    name
}

/// "Title First Middle Last Suffix"
fn parse_first_last(segment: &str) -> ParsedName {
    let Segment {
        title,
        core,
        suffix,
    } = Segment::classify(tokenize(segment));
    let CoreName {
        first,
        middles,
        last,
    } = split_name(&core);

    ParsedName {
        title,
        first_name: first,
        middle_names: middles,
        last_name: last,
        nickname: String::new(),
        suffix,
    }
}

/// "First Last, Suffix[, Suffix]"
fn parse_suffix_after_comma(head: &str, tail: &[&str]) -> ParsedName {
    let mut name = parse_first_last(head);
    name.suffix.extend(tail.iter().flat_map(|p| tokenize(p)));
    name
}

/// "Last, Title First Middle Suffix[, Suffix]"
fn parse_last_first(surname: &str, given: &str, rest: &[&str]) -> ParsedName {
    let Segment {
        title,
        core,
        mut suffix,
    } = Segment::classify(tokenize(given));
    let CoreName {
        first,
        middles,
        last,
    } = split_reversed_name(&tokenize(surname), &core);

    // Anything past the second comma trails the name
    suffix.extend(rest.iter().flat_map(|p| tokenize(p)));

    ParsedName {
        title,
        first_name: first,
        middle_names: middles,
        last_name: last,
        nickname: String::new(),
        suffix,
    }
}

fn is_suffix_list(parts: &[&str]) -> bool {
    parts
        .iter()
        .flat_map(|p| p.split_whitespace())
        .all(is_suffix)
}
