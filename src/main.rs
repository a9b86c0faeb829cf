use clap::Parser;
use tracing::debug;

use landingdesk::cli::Cli;
use landingdesk::config::{get_config, init_config, init_config_from};
use landingdesk::interfaces::cli::run_cli_command;
use landingdesk::system::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.config.as_deref() {
        Some(path) => init_config_from(path),
        None => init_config(),
    }
    let config = get_config();

    let guard = init_logging(&config.logging)?;
    debug!("Configuration: {:?}", config);

    let result = run_cli_command(cli.command, &config, cli.json).await;
    // Flush buffered log lines before a possible process::exit
    drop(guard);

    if let Err(e) = result {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }
    Ok(())
}
