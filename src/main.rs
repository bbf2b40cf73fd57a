mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::router().with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        "Listening on http://{} (database: {})",
        config.listen_addr,
        config.database_url
    );

    axum::serve(listener, app).await?;

    Ok(())
}
