//! SQLite dictionary store / SQLite 字典存储
//!
//! Opens the dataset through an sqlx pool. Every connection enables
//! `case_sensitive_like` so that substring search is case-sensitive.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use super::DictStore;
use crate::error::Result;
use crate::models::{CharacterRecord, RadicalCount, Statistics, StrokeCount};
use crate::query::{BindValue, Condition, MatchOp, SearchPlan};

/// Dictionary table name / 字典表名
pub const TABLE: &str = "httpcn_zi";

const COLUMNS: &str =
    "id, zi, pinyin, pinyin_toneless, wb86, wb98, bushou, zbh, unicode, zyybpic, xgsf, kxzdpic";

/// Number of radicals reported in statistics
const TOP_RADICALS: i64 = 10;
/// Stroke counts above this are left out of statistics
const MAX_STATS_STROKES: i64 = 20;

/// Connection options with case-sensitive LIKE / 连接选项
pub fn connect_options(url: &str) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(url)?.pragma("case_sensitive_like", "ON"))
}

/// Render OR'd conditions as a WHERE body
fn where_clause(conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(|c| match c.op {
            MatchOp::Contains => format!("{} LIKE ?", c.column.as_str()),
            MatchOp::Equals => format!("{} = ?", c.column.as_str()),
        })
        .collect::<Vec<_>>()
        .join(" OR ")
}

pub struct SqliteStore {
    db: SqlitePool,
}

impl SqliteStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Open a pool on the dictionary database / 打开字典数据库
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(connect_options(url)?)
            .await?;

        tracing::info!("Dictionary database opened: {}", url);
        Ok(Self { db })
    }

    /// Check that the dictionary table is present / 检查字典表是否存在
    pub async fn table_exists(&self) -> Result<bool> {
        let found: Option<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?"
        )
        .bind(TABLE)
        .fetch_optional(&self.db)
        .await?;
        Ok(found.is_some())
    }

    /// 关闭数据库连接池 / Close database connection pool
    pub async fn close(&self) {
        self.db.close().await;
    }
}

#[async_trait]
impl DictStore for SqliteStore {
    async fn fetch_page(&self, plan: &SearchPlan) -> Result<Vec<CharacterRecord>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} ORDER BY id LIMIT ? OFFSET ?",
            COLUMNS,
            TABLE,
            where_clause(&plan.conditions)
        );

        let mut query = sqlx::query_as::<_, CharacterRecord>(&sql);
        for param in &plan.params {
            query = match param {
                BindValue::Text(s) => query.bind(s.as_str()),
                BindValue::Integer(i) => query.bind(*i),
            };
        }

        let rows = query.fetch_all(&self.db).await?;
        tracing::debug!("{} rows for {:?} at offset {}", rows.len(), plan.kind, plan.offset);
        Ok(rows)
    }

    async fn count(&self, plan: &SearchPlan) -> Result<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {}",
            TABLE,
            where_clause(&plan.conditions)
        );

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for param in &plan.count_params {
            query = match param {
                BindValue::Text(s) => query.bind(s.as_str()),
                BindValue::Integer(i) => query.bind(*i),
            };
        }

        Ok(query.fetch_one(&self.db).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CharacterRecord>> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?", COLUMNS, TABLE);
        let record = sqlx::query_as::<_, CharacterRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        Ok(record)
    }

    async fn statistics(&self) -> Result<Statistics> {
        let total_characters: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", TABLE))
            .fetch_one(&self.db)
            .await?;

        let top_radicals: Vec<RadicalCount> = sqlx::query_as(&format!(
            "SELECT bushou, COUNT(*) AS count FROM {} GROUP BY bushou ORDER BY count DESC, bushou LIMIT ?",
            TABLE
        ))
        .bind(TOP_RADICALS)
        .fetch_all(&self.db)
        .await?;

        let stroke_statistics: Vec<StrokeCount> = sqlx::query_as(&format!(
            "SELECT zbh, COUNT(*) AS count FROM {} WHERE zbh <= ? GROUP BY zbh ORDER BY zbh",
            TABLE
        ))
        .bind(MAX_STATS_STROKES)
        .fetch_all(&self.db)
        .await?;

        Ok(Statistics {
            total_characters,
            top_radicals,
            stroke_statistics,
        })
    }
}
