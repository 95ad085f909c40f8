use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref TAG_SEPARATOR_REGEX: regex::Regex = regex::Regex::new(r"[,;]").unwrap();
}

pub const MAX_TAG_LEN: usize = 40;
pub const MAX_COMMENT_LEN: usize = 500;

/// Normalized, set-like list of free-text tags.
///
/// Input may be separated by `,` or `;`. Entries are trimmed, blanks are
/// dropped and duplicates are removed case-insensitively, keeping the first
/// spelling seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in TAG_SEPARATOR_REGEX
            .split(raw)
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            if tag.chars().count() > MAX_TAG_LEN {
                return Err(format!("Tag '{}' exceeds {} characters", tag, MAX_TAG_LEN));
            }
            if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                tags.push(tag.to_string());
            }
        }
        Ok(Self(tags))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Storage form: comma-joined.
    pub fn to_column(&self) -> String {
        self.0.join(",")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContentTitle {
    #[validate(length(min = 1, max = 255))]
    pub value: String,
}

impl ContentTitle {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let title = Self {
            value: value.trim().to_string(),
        };
        title.validate()?;
        Ok(title)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContentDescription {
    #[validate(length(max = 500))]
    pub value: String,
}

impl ContentDescription {
    /// Blank descriptions collapse to `None`.
    pub fn new(value: Option<String>) -> Result<Option<Self>, validator::ValidationErrors> {
        let Some(trimmed) = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        else {
            return Ok(None);
        };
        let description = Self { value: trimmed };
        description.validate()?;
        Ok(Some(description))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentText {
    #[validate(length(min = 1, max = 500))]
    pub value: String,
}

impl CommentText {
    pub fn new(value: &str) -> Result<Self, validator::ValidationErrors> {
        let text = Self {
            value: value.trim().to_string(),
        };
        text.validate()?;
        Ok(text)
    }
}

/// Escapes `%`, `_` and `\` so user input is matched literally inside an
/// `ILIKE ... ESCAPE '\'` pattern.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
