//! Identifier dictionary.
//!
//! The resolver does not own any identifier tables besides the command
//! enumeration. Everything else comes from an [`IdentifierDictionary`].
//! [`Lwm2mDictionary`] is the default implementation, holding the OMA and
//! IPSO registries and accepting extensions from a [`DictionaryConfig`].

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::builtin::builtin_dictionary;
use crate::command::Command;
use crate::config::DictionaryConfig;
use crate::definition::ResourceDef;
use crate::error::{Lwm2mError, Result};
use crate::identifier::{Identifier, IdentifierEntry};
use crate::table::EnumTable;

static BUILTIN: Lazy<Arc<Lwm2mDictionary>> = Lazy::new(|| Arc::new(builtin_dictionary()));

/// Source of identifier tables.
///
/// Implementations must be read-only at lookup time.
pub trait IdentifierDictionary: Send + Sync {
    /// Look up a command. Commands are a closed local enumeration, so the
    /// default implementation is rarely overridden.
    fn lookup_command(&self, id: &Identifier) -> Option<IdentifierEntry> {
        Command::lookup(id).map(Command::entry)
    }

    fn lookup_object_id(&self, id: &Identifier) -> Option<IdentifierEntry>;

    /// Look up a resource ID, scoped to `object_id` when one is given.
    fn lookup_resource_id(
        &self,
        object_id: Option<&Identifier>,
        resource_id: &Identifier,
    ) -> Option<IdentifierEntry>;

    fn lookup_response_code(&self, code: &Identifier) -> Option<IdentifierEntry>;

    fn lookup_resource_def(
        &self,
        object_id: &Identifier,
        resource_id: &Identifier,
    ) -> Option<ResourceDef>;
}

/// Table-backed LwM2M dictionary.
#[derive(Debug, Clone)]
pub struct Lwm2mDictionary {
    objects: EnumTable,
    shared_resources: EnumTable,
    /// Object key -> object-specific resources
    object_resources: HashMap<String, EnumTable>,
    response_codes: EnumTable,
    /// Object key -> resource key -> definition
    object_defs: HashMap<String, HashMap<String, ResourceDef>>,
    /// Shared resource key -> definition
    shared_defs: HashMap<String, ResourceDef>,
}

impl Lwm2mDictionary {
    /// The built-in dictionary, initialized on first use and shared.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Copy the built-in tables and apply `config` on top.
    pub fn with_config(config: &DictionaryConfig) -> Result<Self> {
        let mut dictionary = Lwm2mDictionary::clone(&BUILTIN);
        dictionary.extend(config)?;
        Ok(dictionary)
    }

    pub(crate) fn from_parts(
        objects: EnumTable,
        shared_resources: EnumTable,
        object_resources: HashMap<String, EnumTable>,
        response_codes: EnumTable,
        object_defs: HashMap<String, HashMap<String, ResourceDef>>,
        shared_defs: HashMap<String, ResourceDef>,
    ) -> Self {
        Self {
            objects,
            shared_resources,
            object_resources,
            response_codes,
            object_defs,
            shared_defs,
        }
    }

    /// Apply a dictionary extension.
    ///
    /// Objects are added before object-scoped tables so a config may define
    /// an object and its resources together. Identical re-definitions are
    /// accepted; a key or code already bound to something else is a
    /// [`Lwm2mError::Conflict`]. On error the dictionary is left unchanged.
    pub fn extend(&mut self, config: &DictionaryConfig) -> Result<()> {
        let mut staged = self.clone();
        staged.apply(config)?;
        *self = staged;

        tracing::info!(
            objects = self.objects.len(),
            shared_resources = self.shared_resources.len(),
            response_codes = self.response_codes.len(),
            "Applied LwM2M dictionary extension"
        );
        Ok(())
    }

    fn apply(&mut self, config: &DictionaryConfig) -> Result<()> {
        for (key, value) in &config.objects {
            self.objects.insert(key, *value)?;
        }
        for (key, value) in &config.shared_resources {
            self.shared_resources.insert(key, *value)?;
        }
        for (object, resources) in &config.object_resources {
            let object_key = self.object_key(object)?;
            let table = self.object_resources.entry(object_key).or_default();
            for (key, value) in resources {
                table.insert(key, *value)?;
            }
        }
        for (key, value) in &config.response_codes {
            self.response_codes.insert(key, *value)?;
        }
        for (object, defs) in &config.resource_defs {
            let object_key = self.object_key(object)?;
            let table = self.object_defs.entry(object_key).or_default();
            for (rid, def) in defs {
                table.insert(rid.clone(), def.clone());
            }
        }
        for (rid, def) in &config.shared_resource_defs {
            self.shared_defs.insert(rid.clone(), def.clone());
        }
        Ok(())
    }

    fn object_key(&self, object: &str) -> Result<String> {
        self.objects
            .get(&Identifier::from(object))
            .map(|entry| entry.key)
            .ok_or_else(|| Lwm2mError::UnknownObject(object.to_string()))
    }
}

impl IdentifierDictionary for Lwm2mDictionary {
    fn lookup_object_id(&self, id: &Identifier) -> Option<IdentifierEntry> {
        self.objects.get(id)
    }

    /// Scoped lookups try the object's own resources before the shared
    /// IPSO resources. Unscoped lookups only see the shared resources.
    fn lookup_resource_id(
        &self,
        object_id: Option<&Identifier>,
        resource_id: &Identifier,
    ) -> Option<IdentifierEntry> {
        let specific = object_id
            .and_then(|oid| self.objects.get(oid))
            .and_then(|object| self.object_resources.get(&object.key))
            .and_then(|table| table.get(resource_id));

        specific.or_else(|| self.shared_resources.get(resource_id))
    }

    fn lookup_response_code(&self, code: &Identifier) -> Option<IdentifierEntry> {
        self.response_codes.get(code)
    }

    fn lookup_resource_def(
        &self,
        object_id: &Identifier,
        resource_id: &Identifier,
    ) -> Option<ResourceDef> {
        let resource = self.lookup_resource_id(Some(object_id), resource_id)?;
        let specific = self
            .objects
            .get(object_id)
            .and_then(|object| self.object_defs.get(&object.key))
            .and_then(|defs| defs.get(&resource.key));

        specific
            .or_else(|| self.shared_defs.get(&resource.key))
            .cloned()
    }
}
