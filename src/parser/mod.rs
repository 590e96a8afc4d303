//! Field parsers for flattened dictionary columns / 拼接字段解析
//!
//! Both parsers are total functions: malformed input degrades to a
//! single-element or empty list, never an error.

pub mod image_paths;
pub mod pronunciation;

pub use image_paths::{parse_image_paths, ParsedImageRefs};
pub use pronunciation::{parse_pronunciations, ParsedPronunciations};
