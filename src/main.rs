mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod pricing;
mod source;
mod tokens;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();

    let config = if cli.quiet {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = app::execute(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
