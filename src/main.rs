use clap::Parser;
use station_api::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(args) => cli::resolve::run(cli.catalog, args).await,
        Command::List(args) => cli::list::run(cli.catalog, args).await,
    }
}
