use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use uplift::app::AppContext;
use uplift::cli::{commands, Cli, Commands};
use uplift::config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(cli.db, config)?;
    let mut session = ctx.session();

    match cli.command {
        Commands::Add { kind, content } => {
            commands::add_item(&mut session, kind.into(), &content)?;
        }
        Commands::Like { id } => {
            commands::like_item(&mut session, &id)?;
        }
        Commands::Dislike { id } => {
            commands::dislike_item(&mut session, &id)?;
        }
        Commands::Remove { id } => {
            commands::remove_item(&mut session, &id)?;
        }
        Commands::Show => {
            commands::show(&mut session)?;
        }
        Commands::List => {
            commands::list_items(&session)?;
        }
        Commands::Export { output } => {
            commands::export_items(&session, output.as_deref())?;
        }
        Commands::Import { path } => {
            commands::import_items(&mut session, &path)?;
        }
    }

    Ok(())
}
