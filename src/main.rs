mod auth;
mod db;
mod error;
mod routes;
mod state;
mod task;
mod user;

use db::{create_pool, run_migrations};
use routes::create_router;
use state::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,task_ez=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    tracing::info!("Connecting to database...");
    let db = create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    run_migrations(&db).await?;

    // Wire repositories and services
    let user_repository = user::user_repository::UserRepository::new(db.clone());
    let task_repository = task::task_repository::TaskRepository::new(db.clone());

    let auth_service = auth::auth_service::AuthService::new(user_repository);
    let task_service = task::task_service::TaskService::new(task_repository);

    let state = state::AppState {
        auth_service,
        task_service,
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
