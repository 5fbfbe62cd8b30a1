use anyhow::Result;
use clap::Parser;
use todozone::cli::Cli;
use todozone::config::Config;
use todozone::logger::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = Config::load()?;
    let logger = Logger::from_config(&config.logging)?;

    todozone::ui::run_app(config, logger).await
}
