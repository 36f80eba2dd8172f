/// Why a raw string could not be read as a name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    /// Nothing but whitespace.
    #[error("name is empty")]
    Empty,

    /// No letter anywhere in the input, e.g. "123" or "--".
    #[error("name contains no alphabetic characters")]
    NoAlphabeticContent,
}
