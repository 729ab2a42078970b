//! `[assets]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! root = "assets"        # contains stylesheets/ and javascripts/
//! env = "development"    # optional, see `Environment`
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Asset root, relative to the config file's directory.
    pub root: PathBuf,
    /// Environment name. Unset falls back to `ASSETLINE_ENV`.
    pub env: Option<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            env: None,
        }
    }
}
