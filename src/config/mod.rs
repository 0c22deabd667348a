//! Local authorizer configuration subsystem.
//!
//! # Data Flow
//! ```text
//! service descriptor custom section (loose YAML/JSON value)
//!     → resolver.rs (shape detection, file probe)
//!     → LocalAuthConfig (one of Disabled / Hardcoded / Injected)
//!     → consumed by codegen and inject at server-start time
//! ```
//!
//! # Design Decisions
//! - The mode is an explicit sum type, matched exhaustively at every
//!   consumption site; there is no string discriminator to forget to check
//! - Resolution is total: every input, including null, maps to a mode
//! - Recomputed fresh on each initialization; immutable afterwards

pub mod resolver;
pub mod schema;

pub use resolver::{resolve, FileProbe, FsProbe};
pub use schema::{InjectedConfig, LocalAuthConfig, SdkVersion};
