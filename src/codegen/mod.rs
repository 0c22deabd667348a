//! Proxy module generation subsystem.
//!
//! # Data Flow
//! ```text
//! InjectedConfig
//!     → proxy.rs (render source against one SDK calling convention)
//!     → writer.rs (unconditional overwrite in the reserved directory)
//!     → loaded back by the injector at server-start time
//! ```
//!
//! # Design Decisions
//! - One parameterized renderer; the two SDK generations differ only in a
//!   small calling-convention descriptor
//! - Regeneration is not incremental and carries no versioning; a single
//!   sequential startup is the only writer

pub mod proxy;
pub mod writer;

pub use proxy::{generate, PROXY_EXPORT};
pub use writer::{generated_module_path, persist, PersistError, RESERVED_DIR};
