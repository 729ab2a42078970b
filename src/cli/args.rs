//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Serve stylesheets and scripts compiled on demand
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: assetline.toml, searched upward from cwd)
    #[arg(short = 'C', long, default_value = "assetline.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve `/assets/<type>/<filename>` over HTTP
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        pipeline_args: PipelineArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Compile one asset and print it to stdout
    #[command(visible_alias = "f")]
    Fetch {
        #[command(flatten)]
        pipeline_args: PipelineArgs,

        /// Requested filename (e.g., app.css, admin/panel.js)
        filename: String,
    },

    /// Show the compiler chain and whether external compilers are installed
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        pipeline_args: PipelineArgs,
    },
}

/// Arguments shared by every command that builds a pipeline
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PipelineArgs {
    /// Asset root directory (contains stylesheets/ and javascripts/)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Environment name (development, test, production, ...)
    #[arg(short, long)]
    pub env: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn pipeline_args(&self) -> &PipelineArgs {
        match &self.command {
            Commands::Serve { pipeline_args, .. }
            | Commands::Fetch { pipeline_args, .. }
            | Commands::Check { pipeline_args } => pipeline_args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from([
            "assetline", "serve", "--root", "public", "--env", "development", "-p", "8080",
        ]);
        let Commands::Serve { port, interface, .. } = &cli.command else {
            panic!("expected serve");
        };
        assert_eq!(*port, Some(8080));
        assert!(interface.is_none());
        assert_eq!(cli.pipeline_args().root, Some(PathBuf::from("public")));
        assert_eq!(cli.pipeline_args().env.as_deref(), Some("development"));
        assert_eq!(cli.config, PathBuf::from("assetline.toml"));
    }

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::parse_from(["assetline", "-C", "conf.toml", "fetch", "app.js", "-V"]);
        let Commands::Fetch { filename, .. } = &cli.command else {
            panic!("expected fetch");
        };
        assert_eq!(filename, "app.js");
        assert!(cli.pipeline_args().verbose);
        assert_eq!(cli.config, PathBuf::from("conf.toml"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
