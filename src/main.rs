use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    slidedeck_cli::run_cli().await
}
