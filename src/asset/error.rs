//! Asset pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single `fetch`.
#[derive(Debug, Error)]
pub enum AssetError {
    /// No strategy claims the request: unsupported extension, no source file
    /// under any strategy serving that extension, or a failing matcher.
    #[error("no compiler can handle `{filename}`")]
    Unhandable { filename: String },

    /// A strategy matched but reading its source failed.
    #[error("failed to read `{}`", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The compiler rejected the source.
    #[error("failed to compile `{}`: {message}", path.display())]
    Compilation { path: PathBuf, message: String },
}

impl AssetError {
    pub fn unhandable(filename: impl Into<String>) -> Self {
        Self::Unhandable {
            filename: filename.into(),
        }
    }

    pub fn compilation(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Compilation {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Whether this is the "nothing serves this file" outcome.
    pub const fn is_unhandable(&self) -> bool {
        matches!(self, Self::Unhandable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_display() {
        let err = AssetError::unhandable("logo.png");
        assert_eq!(err.to_string(), "no compiler can handle `logo.png`");
        assert!(err.is_unhandable());

        let err = AssetError::SourceRead {
            path: PathBuf::from("stylesheets/app.css"),
            source: Error::new(ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("stylesheets/app.css"));
        assert!(!err.is_unhandable());

        let err = AssetError::compilation("javascripts/app.es6", "Unexpected token");
        assert!(err.to_string().contains("Unexpected token"));
    }
}
