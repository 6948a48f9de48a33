//! Typed access to decoded property values

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::TRUE_LITERALS;

/// A decoded property value.
///
/// Quoting and escape sequences are already resolved. Typed views are derived
/// on every call and never fail: text that does not convert falls back to
/// `0.0` or `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(String);

impl Value {
    pub fn new(text: impl Into<String>) -> Self {
        Value(text.into())
    }

    /// Parse the text as an `f64`, yielding `0.0` when it is not a number
    ///
    /// # Example
    ///
    /// ```rust
    /// use rini::Value;
    ///
    /// assert_eq!(Value::from("2.75").as_f64(), 2.75);
    /// assert_eq!(Value::from("abc").as_f64(), 0.0);
    /// ```
    pub fn as_f64(&self) -> f64 {
        self.0.parse::<f64>().unwrap_or(0.0)
    }

    /// The decoded text, unchanged
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for the exact literals `Y`, `y`, `Yes`, `yes`, `1`, `true`, `True`
    ///
    /// # Example
    ///
    /// ```rust
    /// use rini::Value;
    ///
    /// assert!(Value::from("Yes").as_bool());
    /// assert!(!Value::from("YES").as_bool());
    /// ```
    pub fn as_bool(&self) -> bool {
        TRUE_LITERALS.contains(&self.0.as_str())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Value {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value(text)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
