//! CoffeeScript → JavaScript via the `coffee` CLI (`--stdio --compile`).

use super::run_piped;
use crate::asset::AssetError;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct CoffeeCompiler {
    command: Vec<String>,
}

impl Default for CoffeeCompiler {
    fn default() -> Self {
        Self::new(vec!["coffee".into(), "--stdio".into(), "--compile".into()])
    }
}

impl CoffeeCompiler {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }

    pub fn compile(&self, source: &str, path: &Path) -> Result<String, AssetError> {
        run_piped::<&str>(&self.command, &[], &[], source, path)
    }
}
