use dotenvy::dotenv;
use std::time::Duration;

use steam_user_proxy::client::menu::Repl;
use steam_user_proxy::client::proxy::ProxyClient;
use steam_user_proxy::config::ClientConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let config = ClientConfig::from_env()?;
    let proxy = ProxyClient::new(&config)?;

    let stdin = std::io::stdin();
    let mut repl = Repl::new(proxy, stdin.lock(), std::io::stdout());
    repl.run().await?;

    tokio::time::sleep(Duration::from_millis(500)).await;
    Ok(())
}
