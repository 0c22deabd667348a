//! Registry construction and binding rewrite.
//!
//! # Responsibilities
//! - Load the applicable proxy module and register one synthetic function
//!   per exported name
//! - Rewrite each HTTP event's local authorizer binding to the matching
//!   synthetic function key
//!
//! # Design Decisions
//! - Load failure aborts before any mutation; the store is never left with
//!   a partial registry
//! - Misses are diagnosed with the full list of registered names and left
//!   untouched, so an existing cloud-facing binding keeps working

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::json;

use crate::codegen::generated_module_path;
use crate::config::LocalAuthConfig;
use crate::inject::synthetic::{function_key, synthetic_definition, ModuleArtifact};
use crate::loader::ModuleLoader;
use crate::service::model::ServiceContext;
use crate::service::store::FunctionStore;

/// Default authorizer type applied when a binding declares none.
const DEFAULT_AUTH_TYPE: &str = "token";

/// Per-run mapping from authorizer name to synthetic function key, in
/// export declaration order. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizerRegistry {
    entries: IndexMap<String, String>,
}

impl AuthorizerRegistry {
    /// Synthetic function key registered for `name`, if any.
    pub fn key_for(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Registered authorizer names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Applies local authorizers to the handed function store.
///
/// Registers a synthetic function per exported authorizer name, then
/// rewrites every HTTP event binding that names one of them. Disabled mode
/// is a no-op, and any module-load failure leaves the store untouched so
/// the original bindings stay in effect.
pub fn inject(
    config: &LocalAuthConfig,
    store: &mut dyn FunctionStore,
    context: &ServiceContext,
    loader: &dyn ModuleLoader,
) {
    let module_path = match config {
        LocalAuthConfig::Disabled => {
            tracing::debug!("local authorizer injection disabled");
            return;
        }
        LocalAuthConfig::Hardcoded { module_path } => absolutize(context, module_path),
        LocalAuthConfig::Injected(_) => generated_module_path(&context.service_root),
    };

    let module = match loader.load(&module_path) {
        Ok(module) => module,
        Err(error) => {
            tracing::error!(
                path = %module_path.display(),
                error = %error,
                "unable to load local authorizers, keeping existing bindings"
            );
            return;
        }
    };
    if module.is_empty() {
        tracing::warn!(path = %module_path.display(), "no local authorizers found");
        return;
    }

    let artifact = ModuleArtifact::new(&context.service_root, &module_path);
    let mut registry = AuthorizerRegistry::default();
    for name in module.names() {
        let key = function_key(name);
        store.insert(key.clone(), synthetic_definition(name, context, &artifact));
        registry.entries.insert(name.to_owned(), key);
    }
    tracing::info!(
        count = registry.entries.len(),
        path = %module_path.display(),
        "registered local authorizers"
    );

    rewrite_bindings(store, &registry);
}

fn absolutize(context: &ServiceContext, module_path: &Path) -> PathBuf {
    if module_path.is_absolute() {
        module_path.to_path_buf()
    } else {
        context.service_root.join(module_path)
    }
}

/// Second pass: point matched bindings at their synthetic functions.
fn rewrite_bindings(store: &mut dyn FunctionStore, registry: &AuthorizerRegistry) {
    store.visit_mut(&mut |function_key, definition| {
        for event in &mut definition.events {
            let Some(http) = event.http.as_mut() else {
                continue;
            };
            let Some(binding) = http.local_authorizer_binding() else {
                continue;
            };
            match registry.key_for(&binding.name) {
                Some(synthetic_key) => {
                    http.authorizer = Some(json!({
                        "name": synthetic_key,
                        "type": binding.auth_type.as_deref().unwrap_or(DEFAULT_AUTH_TYPE),
                    }));
                    tracing::debug!(
                        function = function_key,
                        authorizer = %binding.name,
                        target = synthetic_key,
                        "rewrote local authorizer binding"
                    );
                }
                None => {
                    let valid = registry.names().collect::<Vec<_>>().join(", ");
                    tracing::warn!(
                        function = function_key,
                        authorizer = %binding.name,
                        valid = %valid,
                        "unknown local authorizer, leaving binding untouched"
                    );
                }
            }
        }
    });
}
