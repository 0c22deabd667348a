//! Synthetic function definitions for registered authorizers.

use std::path::{Path, PathBuf};

use crate::service::model::{FunctionDefinition, PackageRule, ServiceContext};

/// Reserved prefix for synthetic function keys. User function names never
/// use it by convention, so inserts cannot collide.
pub const FUNCTION_KEY_PREFIX: &str = "$_LOCAL_AUTH_";

/// Fixed sizing for placeholder functions; they only ever proxy one call.
const SYNTHETIC_MEMORY_MB: u32 = 256;
const SYNTHETIC_TIMEOUT_SECS: u32 = 30;
const SYNTHETIC_RUNTIME: &str = "nodejs14.x";

/// Synthetic function key for an authorizer name.
pub fn function_key(authorizer_name: &str) -> String {
    format!("{FUNCTION_KEY_PREFIX}{authorizer_name}")
}

/// Where the loaded module sits relative to the service root, in the three
/// spellings the synthetic definition needs.
#[derive(Debug, Clone)]
pub struct ModuleArtifact {
    /// On-disk location the module was loaded from.
    pub path: PathBuf,

    /// Root-relative artifact path for the packaging rule.
    pub package_include: String,

    /// Root-relative path minus extension; handlers are `<base>.<export>`.
    pub handler_base: String,
}

impl ModuleArtifact {
    pub fn new(service_root: &Path, module_path: &Path) -> Self {
        let relative = module_path.strip_prefix(service_root).unwrap_or(module_path);
        Self {
            path: module_path.to_path_buf(),
            package_include: relative.display().to_string(),
            handler_base: relative.with_extension("").display().to_string(),
        }
    }
}

/// Builds the placeholder definition registered under the synthetic key.
///
/// No events: the function is only reached through rewritten authorizer
/// bindings, never triggered directly.
pub fn synthetic_definition(
    authorizer_name: &str,
    context: &ServiceContext,
    artifact: &ModuleArtifact,
) -> FunctionDefinition {
    FunctionDefinition {
        name: Some(format!(
            "{}-{}-{}",
            context.service_name, context.stage, authorizer_name
        )),
        handler: Some(format!("{}.{}", artifact.handler_base, authorizer_name)),
        memory_size: Some(SYNTHETIC_MEMORY_MB),
        timeout: Some(SYNTHETIC_TIMEOUT_SECS),
        runtime: Some(SYNTHETIC_RUNTIME.to_owned()),
        events: Vec::new(),
        package: Some(PackageRule {
            include: vec![artifact.package_include.clone()],
            exclude: Vec::new(),
            extra: serde_json::Map::new(),
        }),
        extra: serde_json::Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ServiceContext {
        ServiceContext {
            service_name: "orders".into(),
            stage: "dev".into(),
            service_root: PathBuf::from("/srv/app"),
        }
    }

    #[test]
    fn test_key_uses_reserved_prefix() {
        assert_eq!(function_key("myAuth"), "$_LOCAL_AUTH_myAuth");
    }

    #[test]
    fn test_artifact_paths_are_root_relative() {
        let artifact = ModuleArtifact::new(
            Path::new("/srv/app"),
            Path::new("/srv/app/.offline-local-auth/local-authorizers.js"),
        );
        assert_eq!(
            artifact.package_include,
            ".offline-local-auth/local-authorizers.js"
        );
        assert_eq!(artifact.handler_base, ".offline-local-auth/local-authorizers");
    }

    #[test]
    fn test_definition_shape() {
        let artifact =
            ModuleArtifact::new(Path::new("/srv/app"), Path::new("/srv/app/local-authorizers.js"));
        let definition = synthetic_definition("myAuth", &context(), &artifact);

        assert_eq!(definition.name.as_deref(), Some("orders-dev-myAuth"));
        assert_eq!(definition.handler.as_deref(), Some("local-authorizers.myAuth"));
        assert_eq!(definition.memory_size, Some(256));
        assert_eq!(definition.timeout, Some(30));
        assert_eq!(definition.runtime.as_deref(), Some("nodejs14.x"));
        assert!(definition.events.is_empty());
        assert_eq!(
            definition.package.unwrap().include,
            ["local-authorizers.js"]
        );
    }
}
