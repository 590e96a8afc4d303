use crate::models::{CharacterRecord, DecoratedRecord};
use crate::parser::{parse_image_paths, parse_pronunciations};

fn image_list(field: &Option<String>) -> Vec<String> {
    parse_image_paths(field.as_deref().unwrap_or("")).paths
}

/// Attach parsed pronunciations and image lists to a raw row / 为记录附加解析字段
pub fn enrich(record: CharacterRecord) -> DecoratedRecord {
    let pronunciations = parse_pronunciations(record.pinyin.as_deref().unwrap_or(""));
    let zyybpic_list = image_list(&record.zyybpic);
    let xgsf_list = image_list(&record.xgsf);
    let kxzdpic_list = image_list(&record.kxzdpic);

    DecoratedRecord {
        record,
        all_pronunciations: pronunciations.readings,
        primary_pronunciation: pronunciations.primary,
        zyybpic_list,
        xgsf_list,
        kxzdpic_list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CharacterRecord {
        CharacterRecord {
            id: 7,
            zi: Some("乐".to_string()),
            pinyin: Some("lè yuè".to_string()),
            pinyin_toneless: Some("le yue".to_string()),
            zbh: Some(5),
            zyybpic: Some("/Upload/Zy/4E50_1.gif/Upload/Zy/4E50_2.gif".to_string()),
            xgsf: None,
            kxzdpic: Some("Upload/kx/0001.jpg".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_enrich() {
        let decorated = enrich(sample());
        assert_eq!(decorated.all_pronunciations, vec!["lè", "yuè"]);
        assert_eq!(decorated.primary_pronunciation, "lè");
        assert_eq!(decorated.zyybpic_list, vec!["/Upload/Zy/4E50_1.gif", "/Upload/Zy/4E50_2.gif"]);
        assert!(decorated.xgsf_list.is_empty());
        assert_eq!(decorated.kxzdpic_list, vec!["/Upload/kx/0001.jpg"]);
        assert_eq!(decorated.record, sample());
    }

    #[test]
    fn test_enrich_empty_record() {
        let decorated = enrich(CharacterRecord::default());
        assert!(decorated.all_pronunciations.is_empty());
        assert_eq!(decorated.primary_pronunciation, "");
        assert!(decorated.zyybpic_list.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let first = enrich(sample());
        let second = enrich(first.record.clone());
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(enrich(sample())).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["zi"], "乐");
        assert_eq!(value["primary_pronunciation"], "lè");
        assert_eq!(value["kxzdpic_list"][0], "/Upload/kx/0001.jpg");
        assert!(value["xgsf"].is_null());
    }
}
