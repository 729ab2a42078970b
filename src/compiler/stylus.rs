//! Stylus → CSS via the `stylus` CLI.
//!
//! The source is piped through stdin; the CLI writes CSS to stdout.
//! Arguments: `command [--compress] --include <source dir>`

use super::run_piped;
use crate::asset::AssetError;
use crate::core::Environment;
use std::path::Path;

/// Options passed to the stylus compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylusOptions {
    /// Emit compressed (minified) CSS.
    pub compress: bool,
}

impl StylusOptions {
    /// Readable output, for local work and test fixtures.
    pub const UNCOMPRESSED: Self = Self { compress: false };

    /// Options for environments without an entry in the table.
    pub const DEFAULT: Self = Self { compress: true };

    /// Look up the options for an environment. Total: unknown names get
    /// [`StylusOptions::DEFAULT`].
    pub fn for_env(env: &Environment) -> Self {
        ENV_OPTIONS
            .iter()
            .find(|(name, _)| *name == env.name())
            .map_or(Self::DEFAULT, |(_, options)| *options)
    }
}

/// Per-environment option table.
const ENV_OPTIONS: &[(&str, StylusOptions)] = &[
    ("development", StylusOptions::UNCOMPRESSED),
    ("test", StylusOptions::UNCOMPRESSED),
];

#[derive(Debug, Clone)]
pub struct StylusCompiler {
    command: Vec<String>,
}

impl Default for StylusCompiler {
    fn default() -> Self {
        Self::new(vec!["stylus".into()])
    }
}

impl StylusCompiler {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }

    pub fn compile(
        &self,
        source: &str,
        path: &Path,
        options: StylusOptions,
    ) -> Result<String, AssetError> {
        let mut args: Vec<&std::ffi::OsStr> = Vec::new();
        if options.compress {
            args.push("--compress".as_ref());
        }
        // Relative @import lookups
        if let Some(dir) = path.parent() {
            args.push("--include".as_ref());
            args.push(dir.as_os_str());
        }
        run_piped(&self.command, &args, &[], source, path)
    }
}
