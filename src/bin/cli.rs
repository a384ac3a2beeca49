// src/bin/cli.rs
use top40_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();
    cli::run()
}
