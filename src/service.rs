//! Dictionary query service / 字典查询服务
//!
//! plan → storage → paginate → enrich

use crate::enrich::enrich;
use crate::error::{DictError, Result};
use crate::models::{DecoratedRecord, PageResult, Statistics};
use crate::query::{paginate, QueryPlanner, SearchKind};
use crate::storage::DictStore;

pub struct DictService<S> {
    store: S,
    planner: QueryPlanner,
}

impl<S: DictStore> DictService<S> {
    pub fn new(store: S, page_size: i64) -> Self {
        Self {
            store,
            planner: QueryPlanner::new(page_size),
        }
    }

    pub fn page_size(&self) -> i64 {
        self.planner.page_size()
    }

    /// Search one page of characters / 分页搜索
    pub async fn search(&self, kind: SearchKind, term: &str, page: i64) -> Result<PageResult> {
        let plan = self.planner.plan_page(kind, term, page)?;

        let rows = self.store.fetch_page(&plan).await?;
        let total_count = self.store.count(&plan).await?;
        let pagination = paginate(page, total_count, plan.limit);

        tracing::debug!(
            "search {} '{}' page {}: {} of {} matches",
            kind.as_token(),
            term,
            page,
            rows.len(),
            total_count
        );

        Ok(PageResult {
            results: rows.into_iter().map(enrich).collect(),
            current_page: page,
            total_pages: pagination.total_pages,
            total_count,
            items_per_page: plan.limit,
        })
    }

    /// Character detail by id / 获取汉字详情
    pub async fn character(&self, id: i64) -> Result<DecoratedRecord> {
        self.store
            .find_by_id(id)
            .await?
            .map(enrich)
            .ok_or(DictError::NotFound(id))
    }

    pub async fn statistics(&self) -> Result<Statistics> {
        self.store.statistics().await
    }
}
