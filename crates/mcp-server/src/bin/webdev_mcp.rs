use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    webdev_mcp::main_entry().await
}
