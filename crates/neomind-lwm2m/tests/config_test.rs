//! Dictionary Configuration Tests
//!
//! Tests loading dictionary extensions from files and the environment and
//! resolving vendor identifiers through them.

use std::io::Write;
use std::sync::Arc;

use neomind_lwm2m::config::env_vars;
use neomind_lwm2m::{
    Access, DictionaryConfig, Identifier, IdentifierResolver, Lwm2mDictionary, Lwm2mError,
};

const VENDOR_DICTIONARY: &str = r#"{
    "objects": { "vendorMeter": 26241 },
    "shared_resources": { "pulseCount": 27001 },
    "object_resources": { "vendorMeter": { "reading": 0, "reset": 1 } },
    "response_codes": { "tooManyRequests": 429 },
    "resource_defs": {
        "vendorMeter": {
            "reading": { "access": "R", "mand": true, "type": "float" },
            "reset": { "access": "E", "type": "execute" }
        }
    },
    "shared_resource_defs": { "pulseCount": { "access": "RW", "type": "integer", "init": 0 } }
}"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("neomind_lwm2m=debug")
        .with_test_writer()
        .try_init();
}

fn write_config(content: &str) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_and_resolve_vendor_objects() -> anyhow::Result<()> {
    init_tracing();

    let file = write_config(VENDOR_DICTIONARY)?;
    let config = DictionaryConfig::load(file.path())?;
    let resolver = IdentifierResolver::new(Arc::new(Lwm2mDictionary::with_config(&config)?));

    assert_eq!(resolver.object_id_key(26241), "vendorMeter");
    assert_eq!(resolver.resource_id_key("vendorMeter", 1), "reset");
    assert_eq!(resolver.resource_id_numeric(26241, "pulseCount"), Identifier::Numeric(27001));
    assert_eq!(resolver.resource_id_key_unscoped(27001), "pulseCount");
    assert_eq!(resolver.response_code_key(429), Some("tooManyRequests".to_string()));
    assert!(!resolver.is_success(429));

    assert_eq!(resolver.access_control("vendorMeter", "reading"), Some(Access::R));
    assert_eq!(resolver.access_control(26241, 1), Some(Access::E));
    let def = resolver.resource_def(26241, "pulseCount").unwrap();
    assert_eq!(def.init, Some(serde_json::json!(0)));

    // Built-in entries are still available
    assert_eq!(resolver.object_id_key(3), "device");
    Ok(())
}

#[test]
fn test_config_can_reference_builtin_object_by_id() -> anyhow::Result<()> {
    let config = DictionaryConfig::from_json_str(
        r#"{ "object_resources": { "3303": { "vendorOffset": 26000 } } }"#,
    )?;
    let dictionary = Lwm2mDictionary::with_config(&config)?;
    let resolver = IdentifierResolver::new(Arc::new(dictionary));

    assert_eq!(resolver.resource_id_key("temperature", 26000), "vendorOffset");
    // Not visible to other objects
    assert_eq!(resolver.resource_id_key("humidity", 26000), "26000");
    Ok(())
}

#[test]
fn test_conflicting_config_is_rejected() -> anyhow::Result<()> {
    let config = DictionaryConfig::from_json_str(r#"{ "response_codes": { "ok": 201 } }"#)?;
    let err = Lwm2mDictionary::with_config(&config).unwrap_err();
    assert!(matches!(err, Lwm2mError::Conflict(_)));
    Ok(())
}

#[test]
fn test_from_env() -> anyhow::Result<()> {
    init_tracing();

    std::env::remove_var(env_vars::DICTIONARY_PATH);
    assert!(DictionaryConfig::from_env()?.is_none());

    let file = write_config(VENDOR_DICTIONARY)?;
    std::env::set_var(env_vars::DICTIONARY_PATH, file.path());
    let config = DictionaryConfig::from_env()?.expect("config should be loaded");
    assert_eq!(config.objects.get("vendorMeter"), Some(&26241));

    let broken = write_config("{ not json")?;
    std::env::set_var(env_vars::DICTIONARY_PATH, broken.path());
    assert!(matches!(
        DictionaryConfig::from_env(),
        Err(Lwm2mError::Serialization(_))
    ));

    std::env::remove_var(env_vars::DICTIONARY_PATH);
    Ok(())
}
