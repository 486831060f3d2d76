#[tokio::main]
async fn main() -> anyhow::Result<()> {
    openduty::bootstrapper::run().await
}
