//! `check` command: show the compiler chain and external tool availability.

use crate::asset::{AssetPipeline, Strategy};
use crate::compiler::Transpiler;
use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use std::fmt;

/// One row of the chain table.
#[derive(Debug)]
struct ChainEntry {
    name: &'static str,
    descriptor: String,
    tool: Tool,
}

/// How the entry produces its output.
#[derive(Debug, PartialEq, Eq)]
enum Tool {
    Verbatim,
    External { command: String, installed: bool },
}

impl ChainEntry {
    fn from_strategy(strategy: &Strategy) -> Self {
        let tool = match strategy {
            Strategy::Passthrough(_) => Tool::Verbatim,
            Strategy::Transpiling(t) => {
                let transpiler = t.transpiler();
                let command = transpiler.command();
                let mut shown = command.join(" ");
                if let Transpiler::Es6(es6) = transpiler
                    && !es6.targets().is_empty()
                {
                    shown = format!("BROWSERSLIST=\"{}\" {shown}", es6.targets());
                }
                Tool::External {
                    command: shown,
                    installed: command.first().is_some_and(|c| which::which(c).is_ok()),
                }
            }
        };
        Self {
            name: strategy.name(),
            descriptor: strategy.descriptor().to_string(),
            tool,
        }
    }

    fn is_missing(&self) -> bool {
        matches!(self.tool, Tool::External { installed: false, .. })
    }
}

impl fmt::Display for ChainEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {:<36}", self.name, self.descriptor)?;
        match &self.tool {
            Tool::Verbatim => write!(f, "{}", "verbatim".dimmed()),
            Tool::External {
                command,
                installed: true,
            } => write!(f, "{}", command.green()),
            Tool::External {
                command,
                installed: false,
            } => write!(f, "{} {}", command.red(), "(not installed)".red().bold()),
        }
    }
}

/// Print the chain in dispatch order. Fails when an external compiler
/// command cannot be found on `PATH`.
pub fn check_pipeline(pipeline: &AssetPipeline) -> Result<()> {
    println!("{} {}", "env ".dimmed(), pipeline.env());
    println!("{} {}", "root".dimmed(), pipeline.root().display());
    println!();

    let entries: Vec<_> = pipeline
        .strategies()
        .iter()
        .map(ChainEntry::from_strategy)
        .collect();
    for (i, entry) in entries.iter().enumerate() {
        println!("{} {}", format!("{}.", i + 1).dimmed(), entry);
    }

    let missing: Vec<_> = entries.iter().filter(|e| e.is_missing()).collect();
    if !missing.is_empty() {
        let names: Vec<_> = missing.iter().map(|e| e.name).collect();
        bail!("compiler not installed: {}", names.join(", "));
    }
    Ok(())
}
