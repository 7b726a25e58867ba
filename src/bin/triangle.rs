use anyhow::{Context, Result};
use clap::Parser;

use learngl::{app, demos::TriangleDemo, Settings};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::parse();
    app::run(&settings, |display, assets| TriangleDemo::new(display, assets))
        .context("triangle demo failed")
}
