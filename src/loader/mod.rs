//! Module loading capability.
//!
//! # Responsibilities
//! - Given a module path, produce the mapping of exported name to binding
//! - Keep the loading mechanism swappable: the injector only sees the
//!   [`ModuleLoader`] trait
//!
//! # Design Decisions
//! - Export order is preserved; it drives registry and synthetic-definition
//!   insertion order
//! - A module with no export clause loads successfully with zero exports;
//!   only unreadable or unparseable modules are errors

pub mod scan;

use std::io;
use std::path::Path;

use indexmap::IndexMap;
use thiserror::Error;

pub use scan::JsExportScanner;

/// Errors loading a proxy module. The injector treats every variant the
/// same way: log and abort injection for the run.
#[derive(Debug, Error)]
pub enum ModuleLoadError {
    #[error("failed to read module {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("unbalanced export object in {path}")]
    Malformed { path: String },
}

/// What an exported name is bound to inside the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBinding {
    /// Local identifier backing the export. Equals the export name for
    /// shorthand and property-assignment forms.
    pub local: String,
}

/// A loaded module's export surface, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedModule {
    pub exports: IndexMap<String, ExportBinding>,
}

impl LoadedModule {
    /// Exported names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.exports.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

/// Capability: given a path, return the module's export mapping.
pub trait ModuleLoader {
    fn load(&self, path: &Path) -> Result<LoadedModule, ModuleLoadError>;
}
