//! LwM2M Identifier and Path Crate
//!
//! This crate translates LwM2M identifiers and resource paths for the NeoMind
//! device layer.
//!
//! ## Architecture
//!
//! - **IdentifierResolver**: command, object ID, resource ID and response code
//!   resolution with lenient fallbacks for vendor identifiers
//! - **IdentifierDictionary**: lookup tables consumed by the resolver
//!   (`Lwm2mDictionary` ships the OMA and IPSO registries)
//! - **path**: slash/dot notation, path building and value flattening
//!
//! ## Example
//!
//! ```
//! use neomind_lwm2m::{flatten, IdentifierResolver};
//! use serde_json::json;
//!
//! let resolver = IdentifierResolver::default();
//! assert_eq!(resolver.object_id_key(3303), "temperature");
//! assert_eq!(resolver.resource_id_key(3303, 5700), "sensorValue");
//! assert!(resolver.is_success(205));
//!
//! let values = flatten("temperature/0", &json!({ "sensorValue": 21.5 }));
//! assert_eq!(values["temperature.0.sensorValue"], json!(21.5));
//! ```

mod builtin;
mod table;

pub mod command;
pub mod config;
pub mod definition;
pub mod dictionary;
pub mod error;
pub mod identifier;
pub mod path;
pub mod resolver;

pub use command::Command;
pub use config::DictionaryConfig;
pub use definition::{Access, DataType, ResourceDef, ValueRange};
pub use dictionary::{IdentifierDictionary, Lwm2mDictionary};
pub use error::{Lwm2mError, Result};
pub use identifier::{Identifier, IdentifierEntry};
pub use path::{
    build_path, flatten, safe_parse, segments, to_dot_notation, to_slash_notation, PathSegment,
    PathValueMap, OBJ_LIST,
};
pub use resolver::{IdentifierResolver, SUCCESS_CODES};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
