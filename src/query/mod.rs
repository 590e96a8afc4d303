//! Query planning and pagination / 查询计划与分页

pub mod pagination;
pub mod planner;

pub use pagination::{paginate, Pagination};
pub use planner::{BindValue, Column, Condition, MatchOp, QueryPlanner, SearchKind, SearchPlan};
