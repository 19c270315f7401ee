//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use kbo_power::{
    cli::{Commands, PowerCli},
    commands::{
        build::{handle_build, BuildParams},
        query::handle_query,
        resolve_data_dir,
    },
    dataset::{DataPaths, DatasetCache},
};
use std::time::Duration;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = PowerCli::parse();
    init_tracing(app.verbose)?;

    let data_dir = resolve_data_dir(app.data_dir)?;

    match app.command {
        Commands::Build {
            batting,
            pitching,
            output,
        } => {
            handle_build(BuildParams {
                data_dir,
                batting,
                pitching,
                output,
            })
            .context("build failed, output left unchanged")?;
        }

        Commands::Query {
            json,
            cache_ttl_secs,
            cmd,
        } => {
            let cache = DatasetCache::with_ttl(
                DataPaths::from_root(&data_dir),
                Duration::from_secs(cache_ttl_secs),
            );
            println!("{}", handle_query(&cache, &cmd, json)?);
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for query output.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose {
        "kbo_power=debug,warn"
    } else {
        "kbo_power=info,warn"
    };

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
