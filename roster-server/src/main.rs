use roster_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. dotenv, config, logging
    let config = setup_environment()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Roster server starting...");

    // 2. Database + schema (and sample data when SEED_ON_START is set)
    let state = ServerState::initialize(&config).await?;

    // 3. Serve until Ctrl-C
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
