use std::process::ExitCode;

mod builder;
mod cli;
mod config;
mod front_matter;
mod layout;
mod liquid;
mod markdown;
mod server;
mod utils;

#[tokio::main]
async fn main() -> ExitCode {
    cli::run().await
}
