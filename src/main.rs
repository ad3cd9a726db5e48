use clap::Parser;
use dotenvy::dotenv;

use mockflix::{
    adapters::cli::{Cli, run},
    infra::{
        config::AppConfig,
        setup::{init_app_state, init_tracing},
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env().with_storage_path(cli.storage);
    init_tracing(&config)?;

    let app_state = init_app_state(config);

    match run(&app_state, cli.command).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            Err(err.into())
        }
    }
}
