use serde::{Deserialize, Serialize};

// ── Request body ─────────────────────────────────────────────────────────

/// JSON body accepted by `POST /api/ParseFullName` when no `name` query
/// parameter is supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseNameRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ── Response body ────────────────────────────────────────────────────────

/// Broken out parts of a name, one string per part.
///
/// Every key is always present; parts that were not found are empty strings.
/// Multi-valued parts are flattened: titles and middle names are joined with
/// a space, suffixes with `", "`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameFields {
    pub title: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub nickname: String,
    pub suffixes: String,
}
