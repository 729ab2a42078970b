//! `[compilers]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [compilers.stylus]
//! command = ["npx", "stylus"]
//!
//! [compilers.coffee]
//! command = ["coffee", "--stdio", "--compile", "--bare"]
//!
//! [compilers.es6]
//! command = ["npx", "babel", "--presets", "@babel/preset-env"]
//! targets = "ie 11"      # browserslist query; "" defers to .browserslistrc
//! ```

use crate::compiler::{CoffeeCompiler, Compilers, Es6Compiler, StylusCompiler};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilersConfig {
    pub stylus: StylusConfig,
    pub coffee: CoffeeConfig,
    pub es6: Es6Config,
}

/// `[compilers.stylus]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StylusConfig {
    /// Command reading Stylus on stdin and writing CSS to stdout.
    pub command: Vec<String>,
}

impl Default for StylusConfig {
    fn default() -> Self {
        Self {
            command: StylusCompiler::default().command().to_vec(),
        }
    }
}

/// `[compilers.coffee]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoffeeConfig {
    /// Command reading CoffeeScript on stdin and writing JavaScript to stdout.
    pub command: Vec<String>,
}

impl Default for CoffeeConfig {
    fn default() -> Self {
        Self {
            command: CoffeeCompiler::default().command().to_vec(),
        }
    }
}

/// `[compilers.es6]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Es6Config {
    /// Command reading ES6 on stdin and writing ES5 to stdout.
    pub command: Vec<String>,

    /// Browserslist query handed to preset-env through `BROWSERSLIST`.
    pub targets: String,
}

impl Default for Es6Config {
    fn default() -> Self {
        let compiler = Es6Compiler::default();
        Self {
            command: compiler.command().to_vec(),
            targets: compiler.targets().to_owned(),
        }
    }
}

impl CompilersConfig {
    /// Collect validation errors.
    ///
    /// # Checks
    /// - `stylus.command`, `coffee.command` and `es6.command` must not be empty
    pub fn validate(&self, errors: &mut Vec<String>) {
        if self.stylus.command.is_empty() {
            errors.push("compilers.stylus.command is empty".into());
        }
        if self.coffee.command.is_empty() {
            errors.push("compilers.coffee.command is empty".into());
        }
        if self.es6.command.is_empty() {
            errors.push("compilers.es6.command is empty".into());
        }
    }

    /// Build the compiler set for a pipeline.
    pub fn build(&self) -> Compilers {
        Compilers {
            stylus: StylusCompiler::new(self.stylus.command.clone()),
            coffee: CoffeeCompiler::new(self.coffee.command.clone()),
            es6: Es6Compiler::new(self.es6.command.clone(), self.es6.targets.clone()),
        }
    }
}
