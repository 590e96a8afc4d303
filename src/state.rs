use hanzi_dict_backend::config::AppConfig;
use hanzi_dict_backend::storage::SqliteStore;
use hanzi_dict_backend::DictService;

/// Shared application state / 应用共享状态
pub struct AppState {
    pub config: AppConfig,
    pub service: DictService<SqliteStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: SqliteStore) -> Self {
        let service = DictService::new(store, config.page_size());
        Self { config, service }
    }
}
