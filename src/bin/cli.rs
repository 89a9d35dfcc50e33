// src/bin/cli.rs
use clap::Parser;
use spot_viewer::{cli, log};

fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("Error: {e}");
    }
    dotenvy::dotenv().ok();
    log::init();

    if let Err(e) = cli::run(cli::Cli::parse()) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
