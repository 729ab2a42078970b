//! Source-format compilers wrapped by the transpiling strategies.
//!
//! | Compiler | Source   | Runs as                         |
//! |----------|----------|---------------------------------|
//! | `stylus` | `.styl`  | external CLI, stdin → stdout    |
//! | `coffee` | `.coffee`| external CLI, stdin → stdout    |
//! | `es6`    | `.es6`   | external babel CLI, stdin → stdout |

mod coffee;
mod es6;
mod stylus;

pub use coffee::CoffeeCompiler;
pub use es6::Es6Compiler;
#[cfg(test)]
pub use es6::{fake_babel, installed_babel};
pub use stylus::{StylusCompiler, StylusOptions};

use crate::asset::AssetError;
use crate::core::Environment;
use crate::utils::exec::Cmd;
use std::ffi::OsStr;
use std::path::Path;

/// One wrapped compiler.
#[derive(Debug, Clone)]
pub enum Transpiler {
    Stylus(StylusCompiler),
    Coffee(CoffeeCompiler),
    Es6(Es6Compiler),
}

impl Transpiler {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Stylus(_) => "stylus",
            Self::Coffee(_) => "coffee",
            Self::Es6(_) => "es6",
        }
    }

    /// External command the source is piped through.
    pub fn command(&self) -> &[String] {
        match self {
            Self::Stylus(c) => c.command(),
            Self::Coffee(c) => c.command(),
            Self::Es6(c) => c.command(),
        }
    }

    /// Compile `source` read from `path`. Only stylus consults `env`.
    pub fn compile(
        &self,
        source: &str,
        path: &Path,
        env: &Environment,
    ) -> Result<String, AssetError> {
        match self {
            Self::Stylus(c) => c.compile(source, path, StylusOptions::for_env(env)),
            Self::Coffee(c) => c.compile(source, path),
            Self::Es6(c) => c.compile(source, path),
        }
    }
}

/// The compilers a pipeline is built with.
#[derive(Debug, Clone, Default)]
pub struct Compilers {
    pub stylus: StylusCompiler,
    pub coffee: CoffeeCompiler,
    pub es6: Es6Compiler,
}

/// Pipe `source` through `command args...` (with `envs` set) and return its stdout.
fn run_piped<S: AsRef<OsStr>>(
    command: &[String],
    args: &[S],
    envs: &[(&str, &str)],
    source: &str,
    path: &Path,
) -> Result<String, AssetError> {
    if command.is_empty() {
        return Err(AssetError::compilation(path, "compiler command is empty"));
    }

    let output = Cmd::from_slice(command)
        .args(args)
        .envs(envs.iter().copied())
        .stdin(source)
        .run()
        .map_err(|e| AssetError::compilation(path, format!("{e:#}")))?;

    String::from_utf8(output.stdout).map_err(|e| AssetError::compilation(path, e))
}
