use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    notebook::cli::run().await?;
    Ok(())
}
