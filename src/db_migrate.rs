use color_eyre::eyre::Result;
use dotenv::dotenv;
use salon_db::repositories::{client, style};
use salon_db::schema::initialize_database;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| salon_api::config::DEFAULT_DATABASE_URL.to_string());

    info!("Opening database {}", database_url);
    let db_pool = salon_db::create_pool(&database_url).await?;

    initialize_database(&db_pool).await?;

    let styles = style::count_styles(&db_pool).await?;
    let clients = client::count_clients(&db_pool).await?;
    info!(styles, clients, "Database ready");

    db_pool.close().await;
    Ok(())
}
