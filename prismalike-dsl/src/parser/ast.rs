//! Parsed KV block types

use serde::{Deserialize, Serialize};

// ============================================================================
// VALUES
// ============================================================================

/// The right-hand side of a `key = value` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum KVValue {
    /// Reserved for bare text values; the current grammar never produces it.
    Text(String),
    QuotedString(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    /// Name of an environment variable from `env("NAME")`, unresolved.
    EnvRef(String),
}

impl KVValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            KVValue::Text(_) => "text",
            KVValue::QuotedString(_) => "string",
            KVValue::Integer(_) => "integer",
            KVValue::Number(_) => "number",
            KVValue::Boolean(_) => "boolean",
            KVValue::EnvRef(_) => "env",
        }
    }

    /// String content of a quoted string or text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            KVValue::QuotedString(s) | KVValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            KVValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Floating-point view; integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            KVValue::Number(n) => Some(*n),
            KVValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            KVValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_env(&self) -> Option<&str> {
        match self {
            KVValue::EnvRef(name) => Some(name),
            _ => None,
        }
    }
}

// ============================================================================
// LINES AND BLOCKS
// ============================================================================

/// One `key = value` line with the documentation comments attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KVLine {
    pub key: String,
    pub value: KVValue,
    pub comments: Vec<String>,
}

impl KVLine {
    pub fn new(key: impl Into<String>, value: KVValue) -> Self {
        Self {
            key: key.into(),
            value,
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }
}

/// A named block of key/value lines.
///
/// Keys may repeat; `lines` keeps source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KVBlock {
    pub name: String,
    pub lines: Vec<KVLine>,
    pub comments: Vec<String>,
}

impl KVBlock {
    /// First line with the given key.
    pub fn get(&self, key: &str) -> Option<&KVLine> {
        self.lines.iter().find(|line| line.key == key)
    }

    /// Every line with the given key, in source order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a KVLine> + 'a {
        self.lines.iter().filter(move |line| line.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.key.as_str())
    }
}

/// Read-only input the enclosing schema parser hands to the block parser:
/// the block's name and the documentation comments found above its header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub name: String,
    #[serde(default)]
    pub comments: Vec<String>,
}

impl BlockHeader {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }
}
