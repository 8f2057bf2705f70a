//! Identifier resolution.
//!
//! [`IdentifierResolver`] translates between LwM2M numeric codes and their
//! canonical keys for four identifier classes:
//!
//! | Class | Unknown key | Unknown numeric |
//! |-------|-------------|-----------------|
//! | command | `None` | `None` |
//! | object ID | input echoed as text | all-digit input coerced, else echoed |
//! | resource ID | input echoed as text | all-digit input coerced, else echoed |
//! | response code | `None` | `None` |
//!
//! Commands and response codes are closed enumerations, so an unknown value
//! is reported. Object and resource IDs are open-ended (vendor objects), so
//! unknown values pass through unchanged.

use std::sync::Arc;

use crate::definition::{Access, ResourceDef};
use crate::dictionary::{IdentifierDictionary, Lwm2mDictionary};
use crate::identifier::{Identifier, IdentifierEntry};

/// Response codes that count as a successful operation.
pub const SUCCESS_CODES: [u32; 5] = [200, 201, 202, 204, 205];

/// Resolves identifiers against an [`IdentifierDictionary`].
#[derive(Clone)]
pub struct IdentifierResolver {
    dictionary: Arc<dyn IdentifierDictionary>,
}

impl Default for IdentifierResolver {
    fn default() -> Self {
        Self::new(Lwm2mDictionary::builtin())
    }
}

impl std::fmt::Debug for IdentifierResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentifierResolver").finish_non_exhaustive()
    }
}

impl IdentifierResolver {
    pub fn new(dictionary: Arc<dyn IdentifierDictionary>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &dyn IdentifierDictionary {
        self.dictionary.as_ref()
    }

    // ========== Commands ==========

    pub fn resolve_command(&self, id: impl Into<Identifier>) -> Option<IdentifierEntry> {
        self.dictionary.lookup_command(&id.into())
    }

    pub fn command_key(&self, id: impl Into<Identifier>) -> Option<String> {
        self.resolve_command(id).map(|entry| entry.key)
    }

    pub fn command_numeric(&self, id: impl Into<Identifier>) -> Option<u32> {
        self.resolve_command(id).map(|entry| entry.value)
    }

    // ========== Object IDs ==========

    pub fn resolve_object_id(&self, id: impl Into<Identifier>) -> Option<IdentifierEntry> {
        self.dictionary.lookup_object_id(&id.into())
    }

    /// Canonical object key, or the input as text if the object is unknown.
    pub fn object_id_key(&self, id: impl Into<Identifier>) -> String {
        let id = id.into();
        match self.dictionary.lookup_object_id(&id) {
            Some(entry) => entry.key,
            None => {
                tracing::debug!(oid = %id, "Unknown object ID, echoing input");
                id.to_string()
            }
        }
    }

    /// Numeric object ID, or the lenient fallback if the object is unknown.
    ///
    /// The fallback coerces an all-digit input to `Identifier::Numeric` when it
    /// fits in `u32`. Longer digit strings and non-numeric keys are returned
    /// unchanged.
    pub fn object_id_numeric(&self, id: impl Into<Identifier>) -> Identifier {
        let id = id.into();
        match self.dictionary.lookup_object_id(&id) {
            Some(entry) => Identifier::Numeric(entry.value),
            None => {
                tracing::debug!(oid = %id, "Unknown object ID, coercing input");
                id.coerce_numeric()
            }
        }
    }

    // ========== Resource IDs ==========

    /// Resolve a resource ID within an object.
    pub fn resolve_resource_id(
        &self,
        object_id: impl Into<Identifier>,
        resource_id: impl Into<Identifier>,
    ) -> Option<IdentifierEntry> {
        self.dictionary
            .lookup_resource_id(Some(&object_id.into()), &resource_id.into())
    }

    /// Resolve a resource ID without an object scope.
    pub fn resolve_resource_id_unscoped(
        &self,
        resource_id: impl Into<Identifier>,
    ) -> Option<IdentifierEntry> {
        self.dictionary.lookup_resource_id(None, &resource_id.into())
    }

    pub fn resource_id_key(
        &self,
        object_id: impl Into<Identifier>,
        resource_id: impl Into<Identifier>,
    ) -> String {
        let object_id = object_id.into();
        self.resource_key(Some(&object_id), resource_id.into())
    }

    pub fn resource_id_key_unscoped(&self, resource_id: impl Into<Identifier>) -> String {
        self.resource_key(None, resource_id.into())
    }

    pub fn resource_id_numeric(
        &self,
        object_id: impl Into<Identifier>,
        resource_id: impl Into<Identifier>,
    ) -> Identifier {
        let object_id = object_id.into();
        self.resource_numeric(Some(&object_id), resource_id.into())
    }

    pub fn resource_id_numeric_unscoped(&self, resource_id: impl Into<Identifier>) -> Identifier {
        self.resource_numeric(None, resource_id.into())
    }

    fn resource_key(&self, object_id: Option<&Identifier>, resource_id: Identifier) -> String {
        match self.dictionary.lookup_resource_id(object_id, &resource_id) {
            Some(entry) => entry.key,
            None => {
                tracing::debug!(rid = %resource_id, "Unknown resource ID, echoing input");
                resource_id.to_string()
            }
        }
    }

    fn resource_numeric(&self, object_id: Option<&Identifier>, resource_id: Identifier) -> Identifier {
        match self.dictionary.lookup_resource_id(object_id, &resource_id) {
            Some(entry) => Identifier::Numeric(entry.value),
            None => {
                tracing::debug!(rid = %resource_id, "Unknown resource ID, coercing input");
                resource_id.coerce_numeric()
            }
        }
    }

    // ========== Response codes ==========

    pub fn resolve_response_code(&self, code: impl Into<Identifier>) -> Option<IdentifierEntry> {
        self.dictionary.lookup_response_code(&code.into())
    }

    pub fn response_code_key(&self, code: impl Into<Identifier>) -> Option<String> {
        self.resolve_response_code(code).map(|entry| entry.key)
    }

    pub fn response_code_numeric(&self, code: impl Into<Identifier>) -> Option<u32> {
        self.resolve_response_code(code).map(|entry| entry.value)
    }

    /// Whether `code` is a known response code in [`SUCCESS_CODES`].
    pub fn is_success(&self, code: impl Into<Identifier>) -> bool {
        self.resolve_response_code(code)
            .is_some_and(|entry| SUCCESS_CODES.contains(&entry.value))
    }

    // ========== Resource characteristics ==========

    /// Access rights of a resource, if the dictionary defines it.
    pub fn access_control(
        &self,
        object_id: impl Into<Identifier>,
        resource_id: impl Into<Identifier>,
    ) -> Option<Access> {
        self.resource_def(object_id, resource_id)
            .and_then(|def| def.access)
    }

    pub fn resource_def(
        &self,
        object_id: impl Into<Identifier>,
        resource_id: impl Into<Identifier>,
    ) -> Option<ResourceDef> {
        self.dictionary
            .lookup_resource_def(&object_id.into(), &resource_id.into())
    }
}
