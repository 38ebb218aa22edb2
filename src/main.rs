// jlpt-notes binary.

use clap::Parser;

use jlpt_notes::cli::{Cli, exit_code};
use jlpt_notes::{App, Config, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_code(&e));
        }
    };
    logging::init(&cli.log_level)?;

    let config = Config::from_cli(cli)?;
    App::new(config)?.run().await?;
    Ok(())
}
