use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bindcheck")]
#[command(about = "Audit Rust FFI declarations against the C header they bind", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare exported header functions with binding declarations
    Check {
        /// C header declaring the exported API
        header: PathBuf,

        /// Rust source holding the `extern "C"` declarations
        bindings: PathBuf,

        /// Configuration file (defaults to the nearest .bindcheck.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Token marking exported declarations in the header
        #[arg(long)]
        export_marker: Option<String>,

        /// Additional export names that need no binding
        #[arg(long, value_delimiter = ',')]
        ignore: Vec<String>,

        /// Start from an empty deny-list instead of the configured one
        #[arg(long)]
        no_default_ignores: bool,

        /// Plain output without colors
        #[arg(long)]
        plain: bool,
    },

    /// Write a default .bindcheck.toml in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}
