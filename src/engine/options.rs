/// Configuration options for the engine
use std::str::FromStr;

use anyhow::{bail, Result};

/// Which bot version plans the turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Scout,
    Sentinel,
    Drifter,
}

impl FromStr for StrategyKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scout" => Ok(StrategyKind::Scout),
            "sentinel" => Ok(StrategyKind::Sentinel),
            "drifter" => Ok(StrategyKind::Drifter),
            _ => bail!("Unknown strategy: {}", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// The strategy planning each turn
    pub strategy: StrategyKind,
    /// Whether malformed input is fatal
    pub strict_mode: bool,
    /// Whether to render the frame digest to stderr each turn
    pub verbose: bool,
}

impl EngineOptions {
    /// Set an option by name and value.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "strategy" => self.strategy = value.parse()?,
            "strictmode" => self.strict_mode = value.parse()?,
            "verbose" => self.verbose = value.parse()?,
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Sentinel,
            strict_mode: false,
            verbose: false,
        }
    }
}
