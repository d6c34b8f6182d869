use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

const UNKNOWN_NAME: &str = "Unknown reviewer";
const ANON_NAME: &str = "Community critic";
const UNKNOWN_INITIALS: &str = "??";

lazy_static! {
    // Heuristic for opaque machine ids (UUIDs, hex hashes): hex digits
    // and dashes, 16 chars or longer. There is no documented id format
    // behind this; the threshold and character class are kept as-is.
    static ref OPAQUE_ID: Regex = Regex::new(r"^[A-Fa-f0-9-]{16,}$").unwrap();
}

/// Author of a review as the API reports it: a numeric account id, a
/// free-text id (username, email, UUID), or nothing at all. Negative
/// numeric ids mark system-generated content.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(untagged)]
pub enum AuthorId {
    Numeric(i64),
    Text(String),
    #[default]
    Anonymous,
}

impl From<i64> for AuthorId {
    fn from(id: i64) -> Self {
        AuthorId::Numeric(id)
    }
}

impl From<&str> for AuthorId {
    fn from(id: &str) -> Self {
        AuthorId::Text(id.to_string())
    }
}

impl From<String> for AuthorId {
    fn from(id: String) -> Self {
        AuthorId::Text(id)
    }
}

impl<T: Into<AuthorId>> From<Option<T>> for AuthorId {
    fn from(id: Option<T>) -> Self {
        id.map_or(AuthorId::Anonymous, Into::into)
    }
}

/// Human-friendly display name for a review author.
///
/// Total and pure: every variant maps to a printable name, unknown or
/// opaque identifiers to a sentinel. Email-like ids show their local
/// part; anything already readable passes through trimmed.
pub fn friendly_author_name(author: &AuthorId) -> String {
    match author {
        AuthorId::Anonymous => UNKNOWN_NAME.to_string(),
        AuthorId::Numeric(id) if *id < 0 => ANON_NAME.to_string(),
        AuthorId::Numeric(id) => format!("User {}", id),
        AuthorId::Text(raw) => {
            let cleaned = raw.trim();
            if cleaned.is_empty() {
                return UNKNOWN_NAME.to_string();
            }
            if cleaned.contains('@') {
                let local = cleaned.split('@').next().unwrap_or("");
                return if local.is_empty() {
                    UNKNOWN_NAME.to_string()
                } else {
                    local.to_string()
                };
            }
            if OPAQUE_ID.is_match(cleaned) {
                let prefix: String = cleaned.chars().take(6).collect();
                return format!("User {}", prefix);
            }
            cleaned.to_string()
        }
    }
}

/// Two-character avatar initials for a review author.
///
/// Idempotent for a given input and never fails; inputs with no usable
/// letters fall back to raw characters padded with `?`.
pub fn initials(author: &AuthorId) -> String {
    match author {
        AuthorId::Anonymous => UNKNOWN_INITIALS.to_string(),
        AuthorId::Numeric(id) if *id < 0 => "CC".to_string(),
        AuthorId::Numeric(id) => format!("U{}", id)
            .chars()
            .take(3)
            .collect::<String>()
            .to_uppercase(),
        AuthorId::Text(raw) => text_initials(raw),
    }
}

fn text_initials(raw: &str) -> String {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return UNKNOWN_INITIALS.to_string();
    }

    let base = if cleaned.contains('@') {
        cleaned.split('@').next().unwrap_or("")
    } else {
        cleaned
    };

    // Punctuation becomes a separator; words split on whitespace,
    // underscores and dashes.
    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let letter_tokens: Vec<String> = sanitized
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|token| !token.is_empty())
        .map(|token| token.chars().filter(|c| c.is_ascii_alphabetic()).collect())
        .filter(|token: &String| !token.is_empty())
        .collect();

    if letter_tokens.len() >= 2 {
        let mut out = String::new();
        for token in letter_tokens.iter().take(2) {
            out.extend(token.chars().next());
        }
        return out.to_uppercase();
    }

    if let Some(letters) = letter_tokens.first() {
        if letters.chars().count() >= 2 {
            return letters.chars().take(2).collect::<String>().to_uppercase();
        }
        let single: String = letters.chars().take(1).collect();
        return format!("{}{}", single, single).to_uppercase();
    }

    // No letters anywhere in the tokens: try letters from the raw base,
    // then fall back to its first two characters padded with `?`.
    let fallback: String = base.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    match fallback.chars().count() {
        0 => {
            let mut raw_pair: String = base.chars().take(2).collect();
            if raw_pair.is_empty() {
                return UNKNOWN_INITIALS.to_string();
            }
            while raw_pair.chars().count() < 2 {
                raw_pair.push('?');
            }
            raw_pair.to_uppercase()
        }
        1 => {
            let single: String = fallback.chars().take(1).collect();
            format!("{}{}", single, single).to_uppercase()
        }
        _ => fallback.chars().take(2).collect::<String>().to_uppercase(),
    }
}
