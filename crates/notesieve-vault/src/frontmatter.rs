//! Tag extraction from Markdown notes.
//!
//! A note's tags are the union of:
//! - YAML frontmatter `tags` / `tag` (a list, or one string separated by
//!   commas or whitespace)
//! - inline `#tags` in the body, outside fenced code blocks and inline code
//!
//! Tags are returned with the `#` marker, deduplicated case-insensitively in
//! first-seen order. Frontmatter that is not valid YAML contributes no tags.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_yaml::Value as YamlValue;
use tracing::debug;

use notesieve_core::{normalize_tag, strip_tag_marker, with_tag_marker, Result};

/// `#tag` at line start or after whitespace. Letters, digits, `_`, `-`, `/`.
static INLINE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(?:^|\s)#([\p{L}\p{N}_/\-]+)").expect("inline tag pattern is valid")
});

static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`[^`]+`").expect("inline code pattern is valid"));

#[derive(Debug, Default, Deserialize)]
struct Frontmatter {
    #[serde(default)]
    tags: Option<TagField>,
    #[serde(default)]
    tag: Option<TagField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagField {
    One(String),
    Many(Vec<YamlValue>),
}

impl TagField {
    fn into_tags(self) -> Vec<String> {
        match self {
            TagField::One(s) => s
                .split(|c: char| c == ',' || c.is_whitespace())
                .map(str::to_string)
                .collect(),
            TagField::Many(items) => items
                .into_iter()
                .filter_map(|v| match v {
                    YamlValue::String(s) => Some(s),
                    YamlValue::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
        }
    }
}

/// Split a note into its frontmatter block (without fences) and body.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let rest = match content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    {
        Some(rest) => rest,
        None => return (None, content),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let body = &rest[offset + line.len()..];
            return (Some(&rest[..offset]), body);
        }
        offset += line.len();
    }
    (None, content)
}

/// Tags declared in a frontmatter block, without markers.
pub fn frontmatter_tags(yaml: &str) -> Result<Vec<String>> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let frontmatter: Frontmatter = serde_yaml::from_str(yaml)?;

    let mut tags = Vec::new();
    for field in [frontmatter.tags, frontmatter.tag].into_iter().flatten() {
        tags.extend(
            field
                .into_tags()
                .into_iter()
                .map(|t| strip_tag_marker(t.trim()).to_string())
                .filter(|t| !t.is_empty()),
        );
    }
    Ok(tags)
}

/// Inline `#tags` in a note body, without markers.
///
/// Purely numeric tags (`#123`) are not tags.
pub fn inline_tags(body: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut in_fence = false;

    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        let line = INLINE_CODE.replace_all(line, "");
        for cap in INLINE_TAG.captures_iter(&line) {
            let tag = &cap[1];
            if tag.chars().any(|c| !c.is_ascii_digit()) {
                tags.push(tag.to_string());
            }
        }
    }
    tags
}

/// All tags of a note, `#`-prefixed, deduplicated in first-seen order.
pub fn extract_tags(content: &str) -> Vec<String> {
    let (frontmatter, body) = split_frontmatter(content);

    let mut tags = match frontmatter.map(frontmatter_tags) {
        Some(Ok(tags)) => tags,
        Some(Err(e)) => {
            debug!(error = %e, "Ignoring unparsable frontmatter");
            Vec::new()
        }
        None => Vec::new(),
    };
    tags.extend(inline_tags(body));

    let mut seen = std::collections::HashSet::new();
    tags.into_iter()
        .filter(|t| seen.insert(normalize_tag(t)))
        .map(|t| with_tag_marker(&t))
        .collect()
}
