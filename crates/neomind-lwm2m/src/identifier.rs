//! Identifier arguments and resolved entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier as supplied by a caller: either a canonical key or a
/// numeric protocol code.
///
/// Dictionaries match `Numeric` by value. `Key` is matched by key first and,
/// if it is made only of decimal digits, by value as a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Numeric(u32),
    Key(String),
}

impl Identifier {
    /// Numeric value of this identifier, if it is or spells a number.
    ///
    /// Codes are `u32`; an all-digit key beyond `u32::MAX` spells no code
    /// and yields `None`.
    pub fn as_number(&self) -> Option<u32> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Key(s) if is_decimal(s) => s.parse().ok(),
            Self::Key(_) => None,
        }
    }

    /// Convert an all-digit key into `Numeric`. Anything else is returned as is.
    pub fn coerce_numeric(self) -> Self {
        match self.as_number() {
            Some(n) => Self::Numeric(n),
            None => self,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{}", n),
            Self::Key(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::Key(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::Key(s)
    }
}

impl From<&String> for Identifier {
    fn from(s: &String) -> Self {
        Self::Key(s.clone())
    }
}

impl From<u8> for Identifier {
    fn from(n: u8) -> Self {
        Self::Numeric(n.into())
    }
}

impl From<u16> for Identifier {
    fn from(n: u16) -> Self {
        Self::Numeric(n.into())
    }
}

impl From<u32> for Identifier {
    fn from(n: u32) -> Self {
        Self::Numeric(n)
    }
}

/// Negative numbers are never protocol codes; they are kept as text so that
/// lookups miss and fallbacks echo them back.
impl From<i32> for Identifier {
    fn from(n: i32) -> Self {
        match u32::try_from(n) {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Key(n.to_string()),
        }
    }
}

impl From<&Identifier> for Identifier {
    fn from(id: &Identifier) -> Self {
        id.clone()
    }
}

/// A resolved (key, code) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierEntry {
    pub key: String,
    pub value: u32,
}

impl IdentifierEntry {
    pub fn new(key: impl Into<String>, value: u32) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
