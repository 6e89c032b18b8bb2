//! Global configuration settings shared across profiles.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Generate packages on a worker pool. Output order is unaffected.
    #[serde(default)]
    pub parallel: bool,
}
