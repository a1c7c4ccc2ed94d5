use anyhow::Result;
use clap::Parser;
use dynform_cli::{open_store, Cli, Config, DynformCli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(url) = &cli.store {
        config.store.url = url.clone();
    }

    let forms = open_store(&config.store.url)?;
    DynformCli::with_config(forms, config).run(cli).await
}
