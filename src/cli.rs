// src/cli.rs
use std::{env, fs, path::PathBuf};

use color_eyre::eyre::{Result, bail, eyre};

use crate::config::options::{ChartKind, ScrapeOptions};
use crate::scrape;

pub fn run() -> Result<()> {
    let mut opts = ScrapeOptions::default();
    parse_cli(&mut opts)?;

    let snapshot = scrape::run(&opts)?;
    let json = if opts.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };

    match &opts.out {
        Some(path) => fs::write(path, json + "\n")?,
        None => println!("{json}"),
    }
    Ok(())
}

fn parse_cli(opts: &mut ScrapeOptions) -> Result<()> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "singles" => opts.chart = ChartKind::Singles,
            "albums" => opts.chart = ChartKind::Albums,
            "-p" | "--pretty" => opts.pretty = true,
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| eyre!("Missing output path"))?;
                opts.out = Some(PathBuf::from(v));
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other => bail!("Unknown arg: {other} (expected singles|albums, --pretty, -o FILE)"),
        }
    }
    Ok(())
}
