//! Compiler strategies: decide whether they own a request, then produce it.

use super::{AssetError, AssetKind, path};
use crate::compiler::Transpiler;
use crate::core::Environment;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// What a strategy reads and what it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    /// Extension that must exist on disk.
    pub source_ext: &'static str,
    /// Extension the client requests.
    pub target_ext: &'static str,
    /// Subdirectory under the asset root.
    pub type_dir: &'static str,
}

impl Descriptor {
    fn resolve(&self, filename: &str, root: &Path) -> PathBuf {
        path::resolve_path(filename, self.source_ext, self.type_dir, root)
    }

    /// Requested extension matches AND the source file exists.
    ///
    /// An existence check that errors (rather than answering "no") fails the
    /// match with [`AssetError::Unhandable`].
    fn matches(&self, filename: &str, root: &Path) -> Result<bool, AssetError> {
        if !path::has_extension(filename, self.target_ext) {
            return Ok(false);
        }
        let source = self.resolve(filename, root);
        source.try_exists().map_err(|e| {
            crate::debug!("dispatch"; "cannot check {}: {}", source.display(), e);
            AssetError::unhandable(filename)
        })
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/*.{}", self.type_dir, self.source_ext)?;
        if self.source_ext != self.target_ext {
            write!(f, " -> .{}", self.target_ext)?;
        }
        Ok(())
    }
}

/// Serves a file verbatim when it already has the requested extension.
#[derive(Debug, Clone)]
pub struct PassthroughAsset {
    descriptor: Descriptor,
    root: PathBuf,
}

impl PassthroughAsset {
    pub fn new(kind: AssetKind, root: impl Into<PathBuf>) -> Self {
        Self {
            descriptor: Descriptor {
                source_ext: kind.native_ext(),
                target_ext: kind.native_ext(),
                type_dir: kind.type_dir(),
            },
            root: root.into(),
        }
    }

    pub fn matches(&self, filename: &str) -> Result<bool, AssetError> {
        self.descriptor.matches(filename, &self.root)
    }

    pub fn compile(&self, filename: &str) -> Result<String, AssetError> {
        read_source(&self.descriptor.resolve(filename, &self.root))
    }
}

/// Serves the output of a compiler run over a source with another extension.
#[derive(Debug, Clone)]
pub struct TranspilingAsset {
    descriptor: Descriptor,
    root: PathBuf,
    transpiler: Transpiler,
    env: Environment,
}

impl TranspilingAsset {
    pub fn new(
        kind: AssetKind,
        source_ext: &'static str,
        transpiler: Transpiler,
        env: Environment,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            descriptor: Descriptor {
                source_ext,
                target_ext: kind.native_ext(),
                type_dir: kind.type_dir(),
            },
            root: root.into(),
            transpiler,
            env,
        }
    }

    pub fn transpiler(&self) -> &Transpiler {
        &self.transpiler
    }

    pub fn matches(&self, filename: &str) -> Result<bool, AssetError> {
        self.descriptor.matches(filename, &self.root)
    }

    pub fn compile(&self, filename: &str) -> Result<String, AssetError> {
        let path = self.descriptor.resolve(filename, &self.root);
        let source = read_source(&path)?;
        self.transpiler.compile(&source, &path, &self.env)
    }
}

/// A link in the compiler chain.
#[derive(Debug, Clone)]
pub enum Strategy {
    Passthrough(PassthroughAsset),
    Transpiling(TranspilingAsset),
}

impl Strategy {
    pub fn descriptor(&self) -> &Descriptor {
        match self {
            Self::Passthrough(s) => &s.descriptor,
            Self::Transpiling(s) => &s.descriptor,
        }
    }

    /// Short label for logs: `passthrough` or the compiler name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Passthrough(_) => "passthrough",
            Self::Transpiling(s) => s.transpiler.name(),
        }
    }

    pub fn matches(&self, filename: &str) -> Result<bool, AssetError> {
        match self {
            Self::Passthrough(s) => s.matches(filename),
            Self::Transpiling(s) => s.matches(filename),
        }
    }

    pub fn compile(&self, filename: &str) -> Result<String, AssetError> {
        match self {
            Self::Passthrough(s) => s.compile(filename),
            Self::Transpiling(s) => s.compile(filename),
        }
    }
}

impl From<PassthroughAsset> for Strategy {
    fn from(s: PassthroughAsset) -> Self {
        Self::Passthrough(s)
    }
}

impl From<TranspilingAsset> for Strategy {
    fn from(s: TranspilingAsset) -> Self {
        Self::Transpiling(s)
    }
}

fn read_source(path: &Path) -> Result<String, AssetError> {
    fs::read_to_string(path).map_err(|source| AssetError::SourceRead {
        path: path.to_path_buf(),
        source,
    })
}
