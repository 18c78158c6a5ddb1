// Public modules
pub mod alias;
pub mod defaults;
pub mod error;
pub mod paths;
pub mod registry;
pub mod search_path;
pub mod setup;
pub mod shim;
pub mod validator;

// Internal modules - not part of public API
pub(crate) mod local_files;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use registry::{AliasStore, ShimRegistry};
