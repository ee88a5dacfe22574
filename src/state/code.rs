//! Game code identifiers.

use std::fmt;

/// Identity of a hosted game session.
///
/// Codes are compared case-insensitively, so they are normalized to upper
/// case on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameCode(String);

impl GameCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
