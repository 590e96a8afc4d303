//! Search criterion dispatch / 查询构建
//!
//! Turns a criterion kind and a raw term into a storage-agnostic plan: a set
//! of OR'd conditions plus the parameters for the row query and the count
//! query. The two parameter lists always describe the same filter; the row
//! query additionally carries `limit` and `offset` at the end.

use crate::error::{DictError, Result};

/// Supported search criteria / 搜索类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchKind {
    /// Substring on the glyph (`zi`); also the fallback for unknown tokens
    #[default]
    Character,
    /// Substring on `pinyin` or `pinyin_toneless`
    Pronunciation,
    /// Substring on `wb86` or `wb98`
    InputCodeFuzzy,
    /// Exact `wb86`
    InputCode86,
    /// Exact stroke count
    StrokeCount,
    /// Exact radical
    Radical,
    /// Substring on the codepoint text
    Codepoint,
    /// Substring across six text columns
    AnyField,
}

impl SearchKind {
    /// Map a delivery token to a kind; unknown tokens fall back to character search
    pub fn from_token(token: &str) -> Self {
        match token {
            "zi" => Self::Character,
            "pinyin" => Self::Pronunciation,
            "wubi" => Self::InputCodeFuzzy,
            "wb86" => Self::InputCode86,
            "zbh" => Self::StrokeCount,
            "bushou" => Self::Radical,
            "unicode" => Self::Codepoint,
            "all" => Self::AnyField,
            _ => Self::default(),
        }
    }

    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Character => "zi",
            Self::Pronunciation => "pinyin",
            Self::InputCodeFuzzy => "wubi",
            Self::InputCode86 => "wb86",
            Self::StrokeCount => "zbh",
            Self::Radical => "bushou",
            Self::Codepoint => "unicode",
            Self::AnyField => "all",
        }
    }
}

/// Searchable columns of the dictionary table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Zi,
    Pinyin,
    PinyinToneless,
    Wb86,
    Wb98,
    Bushou,
    Zbh,
    Unicode,
}

impl Column {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Pinyin => "pinyin",
            Self::PinyinToneless => "pinyin_toneless",
            Self::Wb86 => "wb86",
            Self::Wb98 => "wb98",
            Self::Bushou => "bushou",
            Self::Zbh => "zbh",
            Self::Unicode => "unicode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOp {
    /// Literal containment, case-sensitive. Bound as a `%term%` pattern.
    Contains,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub column: Column,
    pub op: MatchOp,
}

impl Condition {
    const fn contains(column: Column) -> Self {
        Self { column, op: MatchOp::Contains }
    }

    const fn equals(column: Column) -> Self {
        Self { column, op: MatchOp::Equals }
    }
}

/// A bound query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Integer(i64),
}

/// Filter, parameters and window for one search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPlan {
    pub kind: SearchKind,
    /// Conditions joined with OR
    pub conditions: Vec<Condition>,
    /// Row query parameters: filter values, then limit, then offset
    pub params: Vec<BindValue>,
    /// Count query parameters: filter values only
    pub count_params: Vec<BindValue>,
    pub offset: i64,
    pub limit: i64,
}

const ANY_FIELD_COLUMNS: [Column; 6] = [
    Column::Zi,
    Column::Pinyin,
    Column::PinyinToneless,
    Column::Wb86,
    Column::Wb98,
    Column::Bushou,
];

/// Builds search plans with a fixed page size / 查询计划构建器
#[derive(Debug, Clone, Copy)]
pub struct QueryPlanner {
    page_size: i64,
}

impl QueryPlanner {
    pub fn new(page_size: i64) -> Self {
        Self { page_size: page_size.max(1) }
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Plan the first page of a search
    pub fn plan(&self, kind: SearchKind, term: &str) -> Result<SearchPlan> {
        self.plan_page(kind, term, 1)
    }

    /// Plan a given page of a search. Fails with `InvalidArgument` when the
    /// term cannot be used for the criterion or the page has no representable offset.
    pub fn plan_page(&self, kind: SearchKind, term: &str, page: i64) -> Result<SearchPlan> {
        let conditions: Vec<Condition> = match kind {
            SearchKind::Character => vec![Condition::contains(Column::Zi)],
            SearchKind::Pronunciation => vec![
                Condition::contains(Column::Pinyin),
                Condition::contains(Column::PinyinToneless),
            ],
            SearchKind::InputCodeFuzzy => vec![
                Condition::contains(Column::Wb86),
                Condition::contains(Column::Wb98),
            ],
            SearchKind::InputCode86 => vec![Condition::equals(Column::Wb86)],
            SearchKind::StrokeCount => vec![Condition::equals(Column::Zbh)],
            SearchKind::Radical => vec![Condition::equals(Column::Bushou)],
            SearchKind::Codepoint => vec![Condition::contains(Column::Unicode)],
            SearchKind::AnyField => ANY_FIELD_COLUMNS.into_iter().map(Condition::contains).collect(),
        };

        let value = match kind {
            SearchKind::StrokeCount => {
                let strokes = term.trim().parse::<i64>().map_err(|_| {
                    DictError::invalid_argument(format!("stroke count must be an integer, got '{}'", term))
                })?;
                BindValue::Integer(strokes)
            }
            _ if conditions.iter().all(|c| c.op == MatchOp::Equals) => BindValue::Text(term.to_string()),
            _ => BindValue::Text(format!("%{}%", term)),
        };

        let offset = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(self.page_size))
            .ok_or_else(|| DictError::invalid_argument(format!("page out of range: {}", page)))?;

        let count_params = vec![value; conditions.len()];
        let mut params = count_params.clone();
        params.push(BindValue::Integer(self.page_size));
        params.push(BindValue::Integer(offset));

        tracing::debug!("planned {} search: {} condition(s), offset {}", kind.as_token(), conditions.len(), offset);

        Ok(SearchPlan {
            kind,
            conditions,
            params,
            count_params,
            offset,
            limit: self.page_size,
        })
    }
}
