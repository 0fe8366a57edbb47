use eyre::Result;
use tracing::info;

use crate::repositories::style;
use crate::seed::STYLE_CATALOG;
use crate::DbPool;

/// Creates the tables if needed and seeds the style catalog into an empty
/// `styles` table. Safe to run on every start.
pub async fn initialize_database(pool: &DbPool) -> Result<()> {
    info!("Initializing database schema...");

    // Create clients table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            phone TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create styles table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS styles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            category TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table. style_id has no foreign key; references to
    // missing styles are stored as given.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            client_id INTEGER NOT NULL REFERENCES clients(id),
            service TEXT NOT NULL,
            date TEXT NOT NULL,
            time TEXT NOT NULL,
            style_id INTEGER NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_appointments_client_id ON appointments(client_id);")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_appointments_date_time ON appointments(date, time);")
        .execute(pool)
        .await?;

    seed_styles(pool).await?;

    info!("Database schema initialized successfully.");
    Ok(())
}

async fn seed_styles(pool: &DbPool) -> Result<()> {
    let mut tx = pool.begin().await?;

    let existing = style::count_styles(&mut *tx).await?;
    if existing > 0 {
        info!(existing, "Style catalog already present, skipping seed");
        return Ok(());
    }

    for (name, category) in STYLE_CATALOG {
        style::insert_style(&mut *tx, name, category).await?;
    }
    tx.commit().await?;

    info!(count = STYLE_CATALOG.len(), "Seeded style catalog");
    Ok(())
}
