use addressbook::app::Application;
use addressbook::cli::Cli;
use addressbook::{Config, init_logger};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_logger(cli.log_level.as_deref(), &config.logging.level);
    log::debug!("Loaded config: {:?}", config);

    Application::new(&config).run()
}
