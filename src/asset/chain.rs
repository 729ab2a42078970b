//! Ordered compiler chain and the dispatch algorithm.

use super::{AssetError, Strategy};
use crate::debug;

/// Immutable, ordered list of strategies. First match wins.
#[derive(Debug, Clone)]
pub struct CompilerChain {
    strategies: Vec<Strategy>,
}

impl CompilerChain {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Select the first strategy whose matcher accepts `filename`.
    ///
    /// A matcher that fails stops the scan; later strategies are never
    /// consulted. Running out of strategies is [`AssetError::Unhandable`].
    pub fn select(&self, filename: &str) -> Result<&Strategy, AssetError> {
        for strategy in &self.strategies {
            if strategy.matches(filename)? {
                return Ok(strategy);
            }
        }
        Err(AssetError::unhandable(filename))
    }

    /// Select a strategy and compile `filename` with it.
    pub fn dispatch(&self, filename: &str) -> Result<String, AssetError> {
        let strategy = self.select(filename)?;
        debug!("dispatch"; "{} -> {} ({})", filename, strategy.name(), strategy.descriptor());
        strategy.compile(filename)
    }
}
