pub mod commands;
pub mod logging;
pub mod types;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::config::defaults::default_source;
use crate::config::Config;
use crate::server::ServerConfig;
use types::{Cli, Commands};

/// Run the command-line interface
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.command.log_level(cli.debug));

    let mut config = Config::for_source(cli.source.unwrap_or_else(default_source));
    if let Some(destination) = cli.destination {
        config = config.with_destination(destination);
    }

    let result = match cli.command {
        Commands::Build { clean, .. } => commands::handle_build_command(config, clean),
        Commands::Clean {} => commands::handle_clean_command(config),
        Commands::Serve {
            host,
            port,
            clean,
            watch,
            open,
        } => {
            let server_config = ServerConfig::new(&host, port).with_open_url(open);
            commands::handle_serve_command(config, server_config, clean, watch).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
