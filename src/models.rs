use serde::{Deserialize, Serialize};

/// One row of the `httpcn_zi` dictionary table / 字典表记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CharacterRecord {
    pub id: i64,
    /// Character glyph / 汉字
    pub zi: Option<String>,
    /// Raw pronunciation, possibly several readings / 拼音（可能多音）
    pub pinyin: Option<String>,
    pub pinyin_toneless: Option<String>,
    /// Wubi 86 code / 五笔86
    pub wb86: Option<String>,
    /// Wubi 98 code / 五笔98
    pub wb98: Option<String>,
    /// Radical / 部首
    pub bushou: Option<String>,
    /// Stroke count / 总笔画
    pub zbh: Option<i64>,
    pub unicode: Option<String>,
    /// Usage illustrations, concatenated paths / 字源演变图
    pub zyybpic: Option<String>,
    /// Form variants, concatenated paths / 相关书法
    pub xgsf: Option<String>,
    /// Dictionary scan, concatenated paths / 康熙字典原图
    pub kxzdpic: Option<String>,
}

/// Record with derived fields attached / 附加解析字段的记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedRecord {
    #[serde(flatten)]
    pub record: CharacterRecord,
    pub all_pronunciations: Vec<String>,
    pub primary_pronunciation: String,
    pub zyybpic_list: Vec<String>,
    pub xgsf_list: Vec<String>,
    pub kxzdpic_list: Vec<String>,
}

/// One page of search results / 分页搜索结果
#[derive(Debug, Clone, Serialize)]
pub struct PageResult {
    pub results: Vec<DecoratedRecord>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_count: i64,
    pub items_per_page: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RadicalCount {
    pub bushou: Option<String>,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StrokeCount {
    pub zbh: Option<i64>,
    pub count: i64,
}

/// Dataset statistics / 数据统计
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub total_characters: i64,
    pub top_radicals: Vec<RadicalCount>,
    pub stroke_statistics: Vec<StrokeCount>,
}
