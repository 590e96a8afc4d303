use anyhow::{bail, Result};
use hanzi_dict_backend::config::AppConfig;
use hanzi_dict_backend::storage::{sqlite::TABLE, SqliteStore};

/// Open the dictionary database and check its table / 打开字典数据库并检查数据表
///
/// `DATABASE_URL` overrides the configured file.
pub async fn open_dictionary(config: &AppConfig) -> Result<SqliteStore> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            let db_path = config.get_database_path();
            if !db_path.exists() {
                bail!(
                    "Database file not found: {:?}. Place the SQLite dictionary file there or set DATABASE_URL.",
                    db_path
                );
            }
            config.get_database_url()
        }
    };

    let store = SqliteStore::connect(&database_url, config.database.max_connections).await?;

    if !store.table_exists().await? {
        store.close().await;
        bail!("Table {} not found in {}", TABLE, database_url);
    }

    Ok(store)
}
