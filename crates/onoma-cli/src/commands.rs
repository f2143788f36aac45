use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::config::{Config, resolve_dataset_path};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let dataset = resolve_dataset_path(cli.data.as_deref(), &config);

    match cli.command {
        None | Some(Commands::Browse) => handlers::browse::handle(&dataset),

        Some(Commands::List { prefix, limit }) => {
            handlers::list::handle(&dataset, prefix.as_deref().unwrap_or(""), limit, cli.format)
        }

        Some(Commands::Check) => handlers::check::handle(&dataset),
    }
}
