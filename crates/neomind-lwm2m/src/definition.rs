//! Resource characteristics: access rights, multiplicity, data type.

use serde::{Deserialize, Serialize};

/// Operations a server may perform on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Access {
    /// Read-only
    R,
    /// Write-only
    W,
    /// Read and write
    RW,
    /// Executable
    E,
}

impl Access {
    pub fn is_readable(self) -> bool {
        matches!(self, Self::R | Self::RW)
    }

    pub fn is_writable(self) -> bool {
        matches!(self, Self::W | Self::RW)
    }

    pub fn is_executable(self) -> bool {
        matches!(self, Self::E)
    }
}

/// Resource value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Integer,
    Float,
    Boolean,
    Opaque,
    Time,
    Objlnk,
    Execute,
}

/// Inclusive numeric range of a resource value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// Characteristics of a single resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDef {
    /// `None` when the resource has no defined access (e.g. object links)
    #[serde(default)]
    pub access: Option<Access>,
    /// Multiple-instance resource
    #[serde(default)]
    pub multi: bool,
    /// Mandatory resource
    #[serde(default)]
    pub mand: bool,
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ValueRange>,
    /// Initial value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init: Option<serde_json::Value>,
}

impl ResourceDef {
    pub fn new(access: Option<Access>, data_type: DataType) -> Self {
        Self {
            access,
            multi: false,
            mand: false,
            data_type,
            range: None,
            init: None,
        }
    }

    pub fn mandatory(mut self) -> Self {
        self.mand = true;
        self
    }

    pub fn multiple(mut self) -> Self {
        self.multi = true;
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(ValueRange { min, max });
        self
    }

    pub fn with_init(mut self, init: serde_json::Value) -> Self {
        self.init = Some(init);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_access_flags() {
        assert!(Access::RW.is_readable() && Access::RW.is_writable());
        assert!(!Access::R.is_writable());
        assert!(Access::E.is_executable());
        assert!(!Access::W.is_readable());
    }

    #[test]
    fn test_deserialize_minimal() {
        let def: ResourceDef = serde_json::from_value(json!({ "access": "RW", "type": "boolean" })).unwrap();
        assert_eq!(def.access, Some(Access::RW));
        assert_eq!(def.data_type, DataType::Boolean);
        assert!(!def.multi);
        assert!(!def.mand);
        assert!(def.range.is_none());
    }

    #[test]
    fn test_deserialize_full() {
        let def: ResourceDef = serde_json::from_value(json!({
            "access": "R",
            "multi": true,
            "mand": true,
            "type": "integer",
            "range": { "min": 0, "max": 100 },
            "init": 0
        }))
        .unwrap();
        assert_eq!(
            def,
            ResourceDef::new(Some(Access::R), DataType::Integer)
                .multiple()
                .mandatory()
                .with_range(0.0, 100.0)
                .with_init(json!(0))
        );
    }

    #[test]
    fn test_null_access() {
        let def: ResourceDef = serde_json::from_value(json!({ "access": null, "type": "objlnk" })).unwrap();
        assert_eq!(def.access, None);
    }
}
