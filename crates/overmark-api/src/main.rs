use overmark_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (tracing, shared state, routes)
    let router = overmark_api::setup::initialize_app(config.clone())?;

    // Start the server
    overmark_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
