//! Resource path utilities.
//!
//! LwM2M resources are addressed as `object/instance/resource`. Paths are
//! written either with slashes (`3303/0/5700`) or with dots (`3303.0.5700`),
//! and both forms are accepted everywhere.
//!
//! ```text
//! {"temperature": {"0": {"sensorValue": 21.5, "units": "C"}}}
//!     ──flatten──→
//! {"temperature.0.sensorValue": 21.5, "temperature.0.units": "C"}
//! ```

use serde_json::{Map, Value};
use std::fmt;

use crate::error::{Lwm2mError, Result};
use crate::identifier::Identifier;

/// Property that holds a list of object instances. It is always kept whole
/// when flattening, so an updated list replaces the old one.
pub const OBJ_LIST: &str = "objList";

/// Flattened resource values: full dot path -> leaf value, in traversal order.
pub type PathValueMap = Map<String, Value>;

/// Convert a path to slash notation, dropping one leading and one trailing
/// slash.
pub fn to_slash_notation(path: &str) -> String {
    normalize(path, '.', '/')
}

/// Convert a path to dot notation, dropping one leading and one trailing dot.
pub fn to_dot_notation(path: &str) -> String {
    normalize(path, '/', '.')
}

fn normalize(path: &str, from: char, to: char) -> String {
    let path = path.replace(from, &to.to_string());
    let path = path.strip_prefix(to).unwrap_or(&path);
    let path = path.strip_suffix(to).unwrap_or(path);
    path.to_string()
}

/// Split a path of either notation into its segments.
///
/// An empty path yields a single empty segment.
pub fn segments(path: &str) -> Vec<String> {
    to_slash_notation(path)
        .split('/')
        .map(str::to_string)
        .collect()
}

/// One argument of [`build_path`]: text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl PathSegment {
    fn render(&self) -> Result<String> {
        match self {
            Self::Text(s) => Ok(s.clone()),
            Self::Integer(n) => Ok(n.to_string()),
            Self::Float(f) if f.is_finite() => Ok(f.to_string()),
            Self::Float(f) => Err(Lwm2mError::InvalidArgument(format!(
                "path segment must be a string or a finite number, got {}",
                f
            ))),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for PathSegment {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<char> for PathSegment {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

macro_rules! integer_segment {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PathSegment {
                fn from(n: $t) -> Self {
                    Self::Integer(n.into())
                }
            }
        )*
    };
}

integer_segment!(u8, u16, u32, i8, i16, i32, i64);

impl From<f32> for PathSegment {
    fn from(n: f32) -> Self {
        Self::Float(n.into())
    }
}

impl From<f64> for PathSegment {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<Identifier> for PathSegment {
    fn from(id: Identifier) -> Self {
        match id {
            Identifier::Numeric(n) => Self::Integer(n.into()),
            Identifier::Key(s) => Self::Text(s),
        }
    }
}

impl From<&Identifier> for PathSegment {
    fn from(id: &Identifier) -> Self {
        id.clone().into()
    }
}

/// Join path segments with a delimiter.
///
/// The first element is the delimiter, the rest are the segments. Fails if
/// `parts` is empty or contains a non-finite number. See also the
/// [`build_path!`](crate::build_path!) macro.
pub fn build_path(parts: &[PathSegment]) -> Result<String> {
    let (delimiter, rest) = parts.split_first().ok_or_else(|| {
        Lwm2mError::InvalidArgument("expected a delimiter followed by path segments".to_string())
    })?;

    let delimiter = delimiter.render()?;
    let rest = rest
        .iter()
        .map(PathSegment::render)
        .collect::<Result<Vec<_>>>()?;

    Ok(rest.join(&delimiter))
}

/// Variadic form of [`build_path`](crate::path::build_path).
///
/// ```
/// use neomind_lwm2m::build_path;
///
/// assert_eq!(build_path!("/", "temperature", 0, "sensorValue").unwrap(), "temperature/0/sensorValue");
/// assert!(build_path!().is_err());
/// ```
#[macro_export]
macro_rules! build_path {
    ($($part:expr),* $(,)?) => {
        $crate::path::build_path(&[$($crate::path::PathSegment::from($part)),*])
    };
}

/// Flatten a resource value tree into dot paths.
///
/// Objects and arrays are expanded (arrays by index) except under the
/// [`OBJ_LIST`] key, whose value is emitted whole. A non-composite `value`
/// produces a single entry keyed by the normalized root path. On key
/// collision the entry visited later in property order wins.
pub fn flatten(root_path: &str, value: &Value) -> PathValueMap {
    let mut result = PathValueMap::new();
    flatten_into(root_path, value, &mut result);
    tracing::trace!(root = root_path, leaves = result.len(), "Flattened resource values");
    result
}

fn flatten_into(root_path: &str, value: &Value, out: &mut PathValueMap) {
    let root = to_dot_notation(root_path);
    let prefix = if root.is_empty() {
        root.clone()
    } else {
        format!("{}.", root)
    };

    let mut visit = |key: &str, child: &Value| {
        let path = format!("{}{}", prefix, key);
        if is_composite(child) && key != OBJ_LIST {
            flatten_into(&path, child, out);
        } else {
            tracing::trace!(path = %path, "Flatten leaf");
            out.insert(path, child.clone());
        }
    };

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                visit(key, child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                visit(&index.to_string(), child);
            }
        }
        _ => {
            tracing::trace!(path = %root, "Flatten leaf");
            out.insert(root, value.clone());
        }
    }
}

fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Parse `text` as JSON, or return it unchanged as a string value.
pub fn safe_parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| {
        tracing::trace!("Keeping unparsable payload as text: {}", e);
        Value::String(text.to_string())
    })
}
