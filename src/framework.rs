use serde::Deserialize;
use thiserror::Error;

const DELIMITER: &str = "---\n";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("frontmatter delimiter missing or unpaired")]
    MissingDelimiter,
    #[error("expected exactly two frontmatter delimiter lines, found {0}")]
    ExtraDelimiters(usize),
    #[error("invalid frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One framework document's frontmatter. Only `sidebarTitle`, `sidebarGroup`
/// and `topics` are required; unknown keys (`yaml`, `homepage`) are ignored.
#[derive(Debug, Deserialize)]
pub struct Framework {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "sidebarTitle")]
    pub sidebar_title: String,
    #[serde(rename = "sidebarGroup")]
    pub sidebar_group: String,
    #[serde(default)]
    pub levels: Option<u32>,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Deserialize)]
pub struct Topic {
    pub name: String,
    pub content: Vec<TopicContent>,
}

/// Per-level content of a topic. `criteria` and `example_criteria` are
/// independent optional fields; either, both, or neither may be present.
#[derive(Debug, Deserialize)]
pub struct TopicContent {
    pub level: u32,
    #[serde(default)]
    pub criteria: Option<Vec<String>>,
    #[serde(rename = "exampleCriteria", default)]
    pub example_criteria: Option<Vec<ExampleCriterion>>,
}

#[derive(Debug, Deserialize)]
pub struct ExampleCriterion {
    pub criteria: String,
    pub examples: Vec<String>,
}

/// Parse a framework document: the YAML payload is the text strictly between
/// the first and second delimiter lines. Any other delimiter count is an
/// error rather than a guess at further structure.
pub fn extract_framework(text: &str) -> Result<Framework, ExtractError> {
    let segments: Vec<&str> = text.split(DELIMITER).collect();
    match segments.len() {
        0..=2 => Err(ExtractError::MissingDelimiter),
        3 => Ok(serde_yaml::from_str(segments[1])?),
        n => Err(ExtractError::ExtraDelimiters(n - 1)),
    }
}
