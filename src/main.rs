use anyhow::Result;
use clap::Parser;
use bindcheck::cli::{Cli, Commands};
use bindcheck::commands::{self, CheckConfig};
use bindcheck::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            header,
            bindings,
            config,
            format,
            output,
            export_marker,
            ignore,
            no_default_ignores,
            plain,
        } => {
            let check_config = CheckConfig {
                header,
                bindings,
                config,
                format,
                output,
                export_marker,
                ignore,
                no_default_ignores,
                plain,
            };
            let report = commands::run_check(check_config)?;
            if !report.is_clean() {
                std::process::exit(report.exit_code());
            }
            Ok(())
        }
        Commands::Init { force } => {
            commands::init_config(force)?;
            Ok(())
        }
    }
}
