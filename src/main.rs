use anyhow::Result;
use clap::Parser;
use scholartree_rs::{cli, workflow};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let (config, request) = args.into_parts();

    workflow::launch(&config, &request).await
}
