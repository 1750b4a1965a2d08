// Copyright 2025 the Holdfast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameter blocks for command bindings.
//!
//! A widget bound to a host command carries a small ordered block of named
//! values that is handed to the host's dispatcher verbatim when the drag
//! starts. The block is deliberately tiny: commands with rich option sets
//! belong to the host's own configuration surface, not to the handle that
//! triggers them.

use alloc::string::String;
use core::fmt;
use smallvec::SmallVec;

/// A single parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Str(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(String::from(v))
    }
}

/// An ordered block of named parameter values.
///
/// Insertion order is preserved so dispatchers and logs see parameters the
/// way the widget author wrote them. Setting an existing name replaces its
/// value in place.
///
/// ```rust
/// use holdfast_widget::{Params, Value};
///
/// let mut params = Params::new();
/// params.set("constraint_axis", "X");
/// params.set("proportional", false);
/// assert_eq!(params.get("constraint_axis"), Some(&Value::Str("X".into())));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: SmallVec<[(String, Value); 4]>,
}

impl Params {
    /// Creates an empty block.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Number of parameters in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the block is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets `name` to `value`, replacing an existing entry of the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            *slot = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                Value::Bool(v) => write!(f, "{name}={v}")?,
                Value::Int(v) => write!(f, "{name}={v}")?,
                Value::Float(v) => write!(f, "{name}={v}")?,
                Value::Str(v) => write!(f, "{name}={v:?}")?,
            }
        }
        f.write_str("}")
    }
}
