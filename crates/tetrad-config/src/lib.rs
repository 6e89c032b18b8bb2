pub mod config;
pub mod discovery;
pub mod error;
pub mod package;
pub mod peers;
pub mod settings;
pub mod validation;

// Re-export main types
pub use config::*;
pub use error::*;
pub use package::PackageDeclaration;
pub use peers::PeerDependencySet;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{discover, discover_with_profile, ConfigDiscovery};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
