//! 图片路径解析
//!
//! Image columns store several `/Upload/...` paths concatenated with no
//! delimiter, e.g. `/Upload/Zy/4E85_1.gif/Upload/Zy/4E85_2.gif`.

const UPLOAD_MARKER: &str = "/Upload/";
const IMAGE_EXTENSIONS: &[&str] = &[".gif", ".jpg", ".jpeg", ".png", ".bmp"];
const MIN_PATH_LEN: usize = 10;

/// Image paths recovered from one field, in encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedImageRefs {
    pub paths: Vec<String>,
}

/// Split concatenated image paths / 拆分拼接的图片路径
pub fn parse_image_paths(raw: &str) -> ParsedImageRefs {
    if raw.is_empty() {
        return ParsedImageRefs::default();
    }

    let mut candidates: Vec<String> = Vec::new();
    for (i, part) in raw.split(UPLOAD_MARKER).enumerate() {
        if part.trim().is_empty() {
            continue;
        }

        if i == 0 {
            // Text before the first marker
            if part.starts_with("Upload/") {
                candidates.push(format!("/{}", part));
            } else if part.contains('/') && !part.starts_with('/') {
                candidates.push(format!("{}{}", UPLOAD_MARKER, part));
            }
        } else {
            candidates.push(format!("{}{}", UPLOAD_MARKER, part));
        }
    }

    let paths = candidates.into_iter().filter(|p| is_image_path(p)).collect();
    ParsedImageRefs { paths }
}

fn is_image_path(path: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
        && path.chars().count() > MIN_PATH_LEN
        && path.contains(UPLOAD_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &str) -> Vec<String> {
        parse_image_paths(raw).paths
    }

    #[test]
    fn test_concatenated_paths() {
        assert_eq!(
            paths("/Upload/Zy/4E85_1.gif/Upload/Zy/4E85_2.gif"),
            vec!["/Upload/Zy/4E85_1.gif", "/Upload/Zy/4E85_2.gif"]
        );
    }

    #[test]
    fn test_empty_and_garbage() {
        assert!(paths("").is_empty());
        assert!(paths("notanimagepath").is_empty());
        assert!(paths("   ").is_empty());
        assert!(paths("/Upload/").is_empty());
    }

    #[test]
    fn test_leading_segment_without_slash() {
        assert_eq!(
            paths("Upload/kx/0001.jpg/Upload/kx/0002.jpg"),
            vec!["/Upload/kx/0001.jpg", "/Upload/kx/0002.jpg"]
        );
    }

    #[test]
    fn test_leading_segment_lost_marker() {
        assert_eq!(
            paths("Zy/4E85_1.png/Upload/Zy/4E85_2.png"),
            vec!["/Upload/Zy/4E85_1.png", "/Upload/Zy/4E85_2.png"]
        );
    }

    #[test]
    fn test_leading_segment_discarded() {
        // Absolute path with a different root, or no slash at all
        assert_eq!(paths("/img/a.gif/Upload/Zy/b.gif"), vec!["/Upload/Zy/b.gif"]);
        assert_eq!(paths("junk.gif/Upload/Zy/b.gif"), vec!["/Upload/Zy/b.gif"]);
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        assert_eq!(
            paths("/Upload/Zy/4E85_1.GIF/Upload/Zy/4E85_2.bmp"),
            vec!["/Upload/Zy/4E85_2.bmp"]
        );
    }

    #[test]
    fn test_short_paths() {
        assert_eq!(paths("/Upload/a.png"), vec!["/Upload/a.png"]);
        assert!(!is_image_path("/a/b.png"));
        assert!(!is_image_path("/Upload.png"));
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        assert_eq!(
            paths("/Upload/x/1.jpeg/Upload/x/1.jpeg/Upload/x/0.jpeg"),
            vec!["/Upload/x/1.jpeg", "/Upload/x/1.jpeg", "/Upload/x/0.jpeg"]
        );
    }
}
