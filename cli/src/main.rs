use clap::Parser;
use presentation::cli::{Cli, CliApp};
use shared::types::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut app = CliApp::bootstrap()?;
    app.run(cli).await?;
    Ok(())
}
