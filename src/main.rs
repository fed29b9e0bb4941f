use anyhow::Context;
use clap::Parser;
use custdesk::cli::Cli;
use custdesk::customer::CustomerBook;
use custdesk::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli
        .load_config()
        .with_context(|| format!("loading {}", cli.config_path().display()))?;

    let log_path = init_tracing(&config.log)?;
    tracing::info!(log = %log_path.display(), "custdesk starting");

    let book = match &config.data.customers_path {
        Some(path) => CustomerBook::load_from(path)?,
        None => CustomerBook::sample(),
    };

    custdesk::ui::run(&config.ui, book).context("running dashboard")?;
    Ok(())
}
