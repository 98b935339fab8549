use anyhow::Context;
use dotenvy::dotenv;
use eventdesk::router::init_router;
use eventdesk::state::init_app_state;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    eventdesk_observability::init_tracing();

    let state = init_app_state()?;
    let address = state.server_config.bind_address();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{address}/swagger-ui");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
