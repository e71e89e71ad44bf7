//! CLI entry point for generating amogus variants and their images

use amogen::io::cli::{Cli, Generator};
use amogen::io::configuration::DEFAULT_LOG_FILTER;
use clap::Parser;
use env_logger::Env;

fn main() -> amogen::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let cli = Cli::parse();
    let mut generator = Generator::new(cli);
    let mut stdout = std::io::stdout().lock();
    generator.process(&mut stdout)?;
    Ok(())
}
