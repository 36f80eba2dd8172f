/// Particles that bind to the word after them to form a compound surname,
/// e.g. "van der Berg", "de la Cruz", "bin Laden".
pub const SURNAME_PARTICLES: &[&str] = &[
    "van", "von", "der", "den", "de", "del", "della", "dei", "di", "da", "das", "dos", "du", "la",
    "le", "les", "lo", "st", "st.", "ste", "ste.", "san", "santa", "ter", "ten", "bin", "ibn",
    "bint", "al", "el", "ap", "mac", "vander", "vanden",
];

pub fn is_particle(token: &str) -> bool {
    let key = token.to_lowercase();
    SURNAME_PARTICLES.contains(&key.as_str())
}

/// The core of a name once titles and suffixes are gone.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CoreName {
    pub first: String,
    pub middles: Vec<String>,
    pub last: String,
}

/// Split "First Middle... Last" tokens into their parts.
///
/// Particles directly in front of the last token join the surname, but the
/// first token is always the first name ("Van Morrison" keeps "Van").
/// A single token is taken as a last name.
pub fn split_name(tokens: &[String]) -> CoreName {
    match tokens {
        [] => CoreName::default(),
        [only] => CoreName {
            last: only.clone(),
            ..Default::default()
        },
        [first, rest @ ..] => {
            let mut last_start = rest.len() - 1;
            while last_start > 0 && is_particle(&rest[last_start - 1]) {
                last_start -= 1;
            }

            CoreName {
                first: first.clone(),
                middles: rest[..last_start].to_vec(),
                last: rest[last_start..].join(" "),
            }
        }
    }
}

/// Split "Last, First Middle..." where the surname part is already isolated.
pub fn split_reversed_name(last: &[String], given: &[String]) -> CoreName {
    let (first, middles) = match given {
        [] => (String::new(), Vec::new()),
        [first, middles @ ..] => (first.clone(), middles.to_vec()),
    };
    CoreName {
        first,
        middles,
        last: last.join(" "),
    }
}
