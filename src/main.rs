use clap::Parser;

use petfriends::cmd::{Cli, run_smoke};
use petfriends::errors::Result;
use petfriends::log::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run_smoke(&cli).await
}
