//! ES6+ → ES5 JavaScript via the `babel` CLI with `@babel/preset-env`.
//!
//! The source is piped through stdin with `--filename <source>` so babel
//! config lookup and error messages refer to the real file. Targets are
//! handed to preset-env as a browserslist query through `BROWSERSLIST`.

use super::run_piped;
use crate::asset::AssetError;
use std::ffi::OsStr;
use std::path::Path;

/// Browserslist query whose engines predate ES2015, so everything is lowered.
pub const DEFAULT_TARGETS: &str = "ie 11";

#[derive(Debug, Clone)]
pub struct Es6Compiler {
    command: Vec<String>,
    targets: String,
}

impl Default for Es6Compiler {
    fn default() -> Self {
        Self::new(
            vec![
                "babel".into(),
                "--presets".into(),
                "@babel/preset-env".into(),
            ],
            DEFAULT_TARGETS,
        )
    }
}

impl Es6Compiler {
    /// `targets` empty leaves target selection to the project's own
    /// browserslist config.
    pub fn new(command: Vec<String>, targets: impl Into<String>) -> Self {
        Self {
            command,
            targets: targets.into(),
        }
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }

    pub fn targets(&self) -> &str {
        &self.targets
    }

    pub fn compile(&self, source: &str, path: &Path) -> Result<String, AssetError> {
        let args: [&OsStr; 2] = ["--filename".as_ref(), path.as_os_str()];
        let target_env = [("BROWSERSLIST", self.targets.as_str())];
        let envs = if self.targets.is_empty() {
            &[][..]
        } else {
            &target_env[..]
        };
        run_piped(&self.command, &args, envs, source, path)
    }
}

/// Stand-in for babel: rewrites `const` and single-expression arrows the way
/// preset-env would, and rejects `const = ` like a syntax error.
#[cfg(test)]
pub fn fake_babel() -> Es6Compiler {
    let script = r#"src=$(cat)
case "$src" in *"const = "*) echo "$2: SyntaxError: Unexpected token" >&2; exit 1;; esac
printf '%s\n' "$src" | sed -e 's/const /var /g' -e 's/(\([a-z]*\)) => \([a-z]*\)/function (\1) { return \2; }/g'"#;
    Es6Compiler::new(
        vec!["sh".into(), "-c".into(), script.into(), "babel".into()],
        DEFAULT_TARGETS,
    )
}

/// The real babel toolchain, when it is installed and preset-env resolves.
#[cfg(test)]
pub fn installed_babel() -> Option<Es6Compiler> {
    which::which("babel").ok()?;
    let compiler = Es6Compiler::default();
    compiler
        .compile("let a = 1;\n", Path::new("check.es6"))
        .ok()
        .map(|_| compiler)
}
