use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use log::info;
use stitch_core::build_site;

use crate::config::load_build_config;

pub fn add_build_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("DIR")
                .help("Directory containing the YAML content records"),
        )
        .arg(
            Arg::new("templates")
                .short('t')
                .long("templates")
                .value_name("DIR")
                .help("Directory containing one HTML template per page"),
        )
        .arg(
            Arg::new("partials")
                .short('p')
                .long("partials")
                .value_name("DIR")
                .help("Directory containing the shared HTML partials"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for generated pages"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file")
                .default_value("./stitch.toml"),
        )
}

pub fn make_command() -> Command {
    add_build_args(Command::new("stitch"))
        .about("Build the static site from YAML content and HTML templates")
        .version(env!("CARGO_PKG_VERSION"))
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = load_build_config(args)?;

    info!("Building site from {}...", config.data.display());
    let written = build_site(&config).context("Build failed")?;

    info!(
        "Build complete! {} pages written to {}",
        written.len(),
        config.output.display()
    );

    Ok(())
}
