//! 多音字拼音解析
//!
//! The `pinyin` column holds every reading of a character glued together
//! with whatever delimiter the source happened to use.

/// Candidate separators in priority order / 按优先级排列的分隔符
const SEPARATORS: &[char] = &[
    ' ',        // space
    '\u{3000}', // full-width space
    '\t',
    ',',
    '，',
    '、',
    ';',
    '；',
    '/',
    '\\',
];

const MAX_READING_LEN: usize = 15;

/// Readings recovered from one pronunciation field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPronunciations {
    pub readings: Vec<String>,
    pub primary: String,
}

/// Split a raw pronunciation field into distinct readings / 解析拼音字段
pub fn parse_pronunciations(raw: &str) -> ParsedPronunciations {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedPronunciations::default();
    }

    let candidates = split_on_first_separator(trimmed);

    let mut readings: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if is_reading(candidate) && !readings.iter().any(|r| r == candidate) {
            readings.push(candidate.to_string());
        }
    }

    if readings.is_empty() {
        readings.push(trimmed.to_string());
    }

    let primary = readings.first().cloned().unwrap_or_default();
    ParsedPronunciations { readings, primary }
}

/// Use the first separator that yields more than one segment
fn split_on_first_separator(text: &str) -> Vec<&str> {
    for sep in SEPARATORS {
        if !text.contains(*sep) {
            continue;
        }
        let parts: Vec<&str> = text
            .split(*sep)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.len() > 1 {
            return parts;
        }
    }
    vec![text]
}

fn is_reading(segment: &str) -> bool {
    let len = segment.chars().count();
    (1..=MAX_READING_LEN).contains(&len) && segment.chars().any(char::is_alphabetic)
}
