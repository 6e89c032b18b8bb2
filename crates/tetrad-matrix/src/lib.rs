//! # tetrad-matrix
//!
//! Derives the fixed family of build descriptors a library ships as:
//!
//! - ESM tree (`build/esm`, one file per source module)
//! - CommonJS tree (`build/cjs`, same shape, named exports)
//! - UMD development bundle (`build/umd/index.development.js`)
//! - UMD production bundle (`build/umd/index.production.js`, minified, with size reports)
//!
//! The crate performs no transpilation, bundling or minification. It only
//! describes how an external bundler should be invoked, so the four targets are
//! always derived from one declaration and cannot drift apart.
//!
//! # Example
//!
//! ```
//! use tetrad_config::{PackageDeclaration, PeerDependencySet};
//! use tetrad_matrix::{Format, MatrixGenerator};
//!
//! let peers = PeerDependencySet::new().with("solid-js", "Solid");
//! let generator = MatrixGenerator::new(peers, "Ranger Labs");
//!
//! let package = PackageDeclaration::new(
//!     "ranger-core",
//!     "packages/ranger-core",
//!     "RangerCore",
//!     "ranger-core",
//!     "src/index.jsx",
//! );
//!
//! let matrix = generator.generate(&[package]).unwrap();
//! assert_eq!(matrix.len(), 4);
//! assert_eq!(matrix.descriptors()[3].format, Format::UmdProduction);
//! assert!(matrix.descriptors()[0].is_external("solid-js"));
//! ```

pub mod banner;
pub mod descriptor;
pub mod error;
pub mod external;
pub mod format;
pub mod matrix;
pub mod pipeline;
pub mod replace;
pub mod targets;

pub use banner::license_banner;
pub use descriptor::{BuildDescriptor, ExportsMode, OutputLocation, OutputOptions, ReportArtifact};
pub use error::{Error, Misconfiguration, Result};
pub use external::ExternalClassifier;
pub use format::Format;
pub use matrix::{Matrix, MatrixGenerator};
pub use pipeline::{build_pipeline, AnalyzeOptions, MinifyOptions, ReportKind, TransformStage};
pub use replace::{EnvironmentMode, EnvironmentReplace, NODE_ENV_TOKEN};
pub use targets::{build_targets, TargetContext};

// Re-export the input types so callers need only this crate.
pub use tetrad_config::{PackageDeclaration, PeerDependencySet};
