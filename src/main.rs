use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use salon_api::config::ApiConfig;
use salon_db::{create_pool, schema::initialize_database, SqliteStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Open the database file, creating it on first run
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema and style catalog
    initialize_database(&db_pool).await?;

    // Start API server
    let store = Arc::new(SqliteStore::new(db_pool));
    salon_api::start_server(config, store).await?;

    Ok(())
}
