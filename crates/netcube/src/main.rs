//! Command-line 2x2x2 and 3x3x3 cube simulator.

mod cli;
mod render;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    color_eyre::install()?;

    cli::exec(args)
}
