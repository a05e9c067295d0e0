use anyhow::Result;
use env_logger::Env;

mod cmd;
mod config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let matches = cmd::build::make_command().get_matches();
    cmd::build::execute(&matches)
}
