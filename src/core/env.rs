//! Environment mode the pipeline is built for.

use std::{convert::Infallible, fmt, str::FromStr};

/// Runtime environment, fixed for the process lifetime.
///
/// Any name is accepted; names other than the three known modes are kept
/// as [`Environment::Other`] so they can still be displayed and matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    Development,
    Test,
    /// Also the mode used when no environment is configured.
    #[default]
    Production,
    Other(String),
}

impl Environment {
    /// Parse an environment name. Empty input means unset.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "development" => Self::Development,
            "test" => Self::Test,
            "" | "production" => Self::Production,
            other => Self::Other(other.to_string()),
        }
    }

    /// Resolve an optional name, falling back to production when absent.
    pub fn from_optional(name: Option<&str>) -> Self {
        name.map(Self::from_name).unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
            Self::Other(name) => name,
        }
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
