//! The four shipped module shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output target format.
///
/// Declaration order is the order descriptors appear in a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// ES modules, one file per source module.
    Esm,
    /// CommonJS, one file per source module.
    Cjs,
    /// Single-file UMD with development assertions.
    #[serde(rename = "umd-dev")]
    UmdDevelopment,
    /// Single-file minified UMD with size reports.
    #[serde(rename = "umd-prod")]
    UmdProduction,
}

impl Format {
    /// Every format, in matrix order.
    pub const ALL: [Format; 4] = [
        Format::Esm,
        Format::Cjs,
        Format::UmdDevelopment,
        Format::UmdProduction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Esm => "esm",
            Self::Cjs => "cjs",
            Self::UmdDevelopment => "umd-dev",
            Self::UmdProduction => "umd-prod",
        }
    }

    /// Module syntax handed to the bundler (`es`, `cjs` or `umd`).
    pub fn module_syntax(&self) -> &'static str {
        match self {
            Self::Esm => "es",
            Self::Cjs => "cjs",
            Self::UmdDevelopment | Self::UmdProduction => "umd",
        }
    }

    /// True for the single-file variants that need a global symbol.
    pub fn is_umd(&self) -> bool {
        matches!(self, Self::UmdDevelopment | Self::UmdProduction)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
