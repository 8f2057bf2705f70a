//! Dictionary extension configuration.
//!
//! Vendor objects and resources that are not part of the built-in registry
//! can be described in a JSON file and applied with
//! [`Lwm2mDictionary::with_config`](crate::Lwm2mDictionary::with_config).
//!
//! ```json
//! {
//!   "objects": { "myObject": 20001 },
//!   "object_resources": { "myObject": { "enabled": 0 } },
//!   "resource_defs": { "myObject": { "enabled": { "access": "RW", "type": "boolean" } } }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::definition::ResourceDef;
use crate::error::Result;

/// Environment variable names
pub mod env_vars {
    /// Path of a dictionary extension file
    pub const DICTIONARY_PATH: &str = "NEOMIND_LWM2M_DICTIONARY";
}

/// Additional dictionary entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Object key -> object ID
    #[serde(default)]
    pub objects: BTreeMap<String, u32>,
    /// Resource key -> resource ID, usable from any object
    #[serde(default)]
    pub shared_resources: BTreeMap<String, u32>,
    /// Object key (or ID) -> resource key -> resource ID
    #[serde(default)]
    pub object_resources: BTreeMap<String, BTreeMap<String, u32>>,
    /// Response key -> response code
    #[serde(default)]
    pub response_codes: BTreeMap<String, u32>,
    /// Object key (or ID) -> resource key -> definition
    #[serde(default)]
    pub resource_defs: BTreeMap<String, BTreeMap<String, ResourceDef>>,
    /// Shared resource key -> definition
    #[serde(default)]
    pub shared_resource_defs: BTreeMap<String, ResourceDef>,
}

impl DictionaryConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Load the file named by [`env_vars::DICTIONARY_PATH`], if set.
    pub fn from_env() -> Result<Option<Self>> {
        let Ok(path) = std::env::var(env_vars::DICTIONARY_PATH) else {
            return Ok(None);
        };

        match Self::load(&path) {
            Ok(config) => {
                tracing::debug!(path = %path, "Loaded LwM2M dictionary extension");
                Ok(Some(config))
            }
            Err(e) => {
                tracing::warn!("Failed to load LwM2M dictionary extension from {}: {}", path, e);
                Err(e)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
            && self.shared_resources.is_empty()
            && self.object_resources.is_empty()
            && self.response_codes.is_empty()
            && self.resource_defs.is_empty()
            && self.shared_resource_defs.is_empty()
    }
}
