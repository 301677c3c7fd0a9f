mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::Cli;
use context::Context;
use env_logger::Env;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let result = if cli.show_template {
        commands::template::run()
    } else {
        Context::from_cli(&cli).and_then(|ctx| commands::render::run(&ctx))
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
