//! Storage collaborator for the dictionary table / 字典数据存储
//!
//! The service only talks to storage through [`DictStore`]; the SQLite
//! implementation lives in [`sqlite`].

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CharacterRecord, Statistics};
use crate::query::SearchPlan;

pub mod sqlite;

pub use sqlite::SqliteStore;

/// Read-only access to the dictionary table / 字典表只读访问
#[async_trait]
pub trait DictStore: Send + Sync {
    /// Rows matching the plan's filter, ordered by id, limited to the plan's window
    async fn fetch_page(&self, plan: &SearchPlan) -> Result<Vec<CharacterRecord>>;

    /// Number of rows matching the plan's filter, ignoring the window
    async fn count(&self, plan: &SearchPlan) -> Result<i64>;

    async fn find_by_id(&self, id: i64) -> Result<Option<CharacterRecord>>;

    async fn statistics(&self) -> Result<Statistics>;
}
