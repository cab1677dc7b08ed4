use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DesignXError;

/// Opaque identifier naming one logical item of the external system
///
/// Uniqueness is the external system's business; this type only guarantees
/// the value is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Wrap a raw id; returns `None` for the empty string
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Read an identifier out of a property value
    ///
    /// Strings are taken as-is and numbers by their decimal text. Anything
    /// else (null, bool, array, object, empty string) is not an identifier.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Self::new(s.as_str()),
            Value::Number(n) => Self::new(n.to_string()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = DesignXError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| DesignXError::MissingArgument {
            field: "identifier".to_string(),
        })
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
