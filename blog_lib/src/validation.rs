use blog_api::types::PostInput;

use crate::error::BlogError;

pub const MIN_TITLE_CHARS: usize = 5;
pub const MAX_TITLE_CHARS: usize = 140;
pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_TAG_LENGTH: usize = 40;
pub const MAX_AUTHOR_LENGTH: usize = 120;
pub const MAX_LIMIT: i64 = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, BlogError> {
    if input.len() > max_len {
        return Err(BlogError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(BlogError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a post title: sanitized, between 5 and 140 characters.
pub fn validate_title(input: &str) -> Result<String, BlogError> {
    let title = sanitize_text(input, MAX_TITLE_CHARS * 4)?;
    let chars = title.chars().count();
    if !(MIN_TITLE_CHARS..=MAX_TITLE_CHARS).contains(&chars) {
        return Err(BlogError::InvalidInput(format!(
            "title must be between {} and {} characters (got {})",
            MIN_TITLE_CHARS, MAX_TITLE_CHARS, chars
        )));
    }
    Ok(title)
}

/// Validate an author name: required.
pub fn validate_author(input: &str) -> Result<String, BlogError> {
    sanitize_text(input, MAX_AUTHOR_LENGTH)
        .map_err(|e| BlogError::InvalidInput(format!("author: {}", message(e))))
}

/// Validate post content: required. Newlines and tabs are kept.
pub fn validate_content(input: &str) -> Result<String, BlogError> {
    let content: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || matches!(c, '\n' | '\t' | ' '))
        .collect();
    let content = content.trim().to_string();
    if content.is_empty() {
        return Err(BlogError::InvalidInput("content is required".to_string()));
    }
    Ok(content)
}

/// Validate tags: trimmed, lowercased, empties dropped, duplicates removed
/// keeping first occurrence.
pub fn validate_tags(inputs: &[String]) -> Result<Vec<String>, BlogError> {
    let mut tags: Vec<String> = Vec::with_capacity(inputs.len());
    for raw in inputs {
        let tag = raw.trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }
        if tag.len() > MAX_TAG_LENGTH {
            return Err(BlogError::InvalidInput(format!(
                "tag '{}' exceeds maximum length of {} bytes",
                tag, MAX_TAG_LENGTH
            )));
        }
        if tag.chars().any(|c| c.is_control() || c.is_whitespace()) {
            return Err(BlogError::InvalidInput(format!(
                "tag '{}' must not contain whitespace",
                tag
            )));
        }
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

/// Validate a full-text search string: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, BlogError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a published flag: case-insensitive, accepts yes/no and 1/0.
pub fn validate_published(input: &str) -> Result<bool, BlogError> {
    match input.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(BlogError::InvalidInput(format!(
            "unknown published value '{}'. Valid values: true, false",
            input
        ))),
    }
}

/// Validate a page number (1-indexed).
pub fn validate_page(page: i64) -> Result<i64, BlogError> {
    if page < 1 {
        return Err(BlogError::InvalidInput(
            "page must be a positive integer".to_string(),
        ));
    }
    Ok(page)
}

/// Validate a page size: 1 to 100.
pub fn validate_limit(limit: i64) -> Result<i64, BlogError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(BlogError::InvalidInput(format!(
            "limit must be between 1 and {}",
            MAX_LIMIT
        )));
    }
    Ok(limit)
}

/// Validate a post id: 24 hexadecimal characters, returned lowercased.
pub fn validate_post_id(input: &str) -> Result<String, BlogError> {
    let id = input.trim();
    if id.len() != 24 || !id.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BlogError::InvalidInput(format!(
            "invalid post id '{}': expected 24 hex characters",
            input
        )));
    }
    Ok(id.to_lowercase())
}

/// Build a validated create/update payload.
pub fn new_post(
    title: &str,
    author: &str,
    content: &str,
    tags: &[String],
    published: bool,
) -> Result<PostInput, BlogError> {
    Ok(PostInput {
        title: validate_title(title)?,
        author: validate_author(author)?,
        content: validate_content(content)?,
        tags: validate_tags(tags)?,
        published,
    })
}

fn message(e: BlogError) -> String {
    match e {
        BlogError::InvalidInput(msg) => msg,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(result: Result<impl std::fmt::Debug, BlogError>) -> String {
        match result {
            Err(BlogError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn sanitize_strips_control_chars_and_trims() {
        assert_eq!(sanitize_text("  Hola\u{7}\u{0} mundo ", 50).unwrap(), "Hola mundo");
        assert!(invalid(sanitize_text("\u{1}\u{2}", 50)).contains("empty"));
        assert!(invalid(sanitize_text("abcdef", 3)).contains("maximum length"));
    }

    #[test]
    fn title_length_bounds() {
        assert_eq!(validate_title("Go!!!").unwrap(), "Go!!!");
        assert!(invalid(validate_title("Go")).contains("between 5 and 140"));
        assert!(validate_title(&"a".repeat(140)).is_ok());
        assert!(validate_title(&"a".repeat(141)).is_err());
    }

    #[test]
    fn title_counts_characters_not_bytes() {
        // 140 two-byte characters.
        assert!(validate_title(&"é".repeat(140)).is_ok());
        assert!(validate_title("Índé").is_err());
    }

    #[test]
    fn author_and_content_are_required() {
        assert!(invalid(validate_author("   ")).starts_with("author:"));
        assert!(invalid(validate_content(" \n\t ")).contains("content is required"));
        assert_eq!(validate_content(" line one\nline two ").unwrap(), "line one\nline two");
    }

    #[test]
    fn tags_are_normalized() {
        let tags = validate_tags(&[
            " Go ".to_string(),
            "".to_string(),
            "mongodb".to_string(),
            "GO".to_string(),
        ])
        .unwrap();
        assert_eq!(tags, vec!["go", "mongodb"]);
        assert!(validate_tags(&["two words".to_string()]).is_err());
        assert!(validate_tags(&["x".repeat(41)]).is_err());
    }

    #[test]
    fn published_values() {
        assert!(validate_published("TRUE").unwrap());
        assert!(validate_published("yes").unwrap());
        assert!(!validate_published("0").unwrap());
        assert!(invalid(validate_published("maybe")).contains("maybe"));
    }

    #[test]
    fn page_and_limit_bounds() {
        assert_eq!(validate_page(1).unwrap(), 1);
        assert!(validate_page(0).is_err());
        assert_eq!(validate_limit(100).unwrap(), 100);
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(101).is_err());
    }

    #[test]
    fn post_id_format() {
        assert_eq!(
            validate_post_id(" 66F1C2A9E4B0A1B2C3D4E5F6 ").unwrap(),
            "66f1c2a9e4b0a1b2c3d4e5f6"
        );
        assert!(validate_post_id("66f1c2a9").is_err());
        assert!(validate_post_id("zzf1c2a9e4b0a1b2c3d4e5f6").is_err());
    }

    #[test]
    fn new_post_validates_every_field() {
        let post = new_post(
            " Introducción a Go ",
            "Alice",
            "Texto del post...",
            &["Go".to_string(), "backend".to_string()],
            true,
        )
        .unwrap();
        assert_eq!(post.title, "Introducción a Go");
        assert_eq!(post.tags, vec!["go", "backend"]);
        assert!(post.published);

        assert!(new_post("Hi", "Alice", "x", &[], false).is_err());
        assert!(new_post("Hello", "", "x", &[], false).is_err());
    }
}
