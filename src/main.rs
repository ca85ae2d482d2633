mod cli;
mod client;
mod display;
mod editor;
mod error;
mod graphql;
mod index;
mod models;
mod scaffold;
mod transform;

use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::models::config;

fn main() {
    let cli = Cli::parse();
    let user_config = config::load_config();

    tracing_subscriber::fmt()
        .with_max_level(user_config.max_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!(path = ?config::get_config_path(), "configuration loaded");
    cli::run(cli, &user_config);
}
