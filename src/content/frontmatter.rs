//! Front-matter parsing and schema validation

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FieldIssue, ValidationError};

/// Raw front-matter mapping, normalized to JSON values
pub type RawMatter = Map<String, Value>;

/// Language of a front-matter block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatterFormat {
    Yaml,
    Json,
    Toml,
}

/// Validated post metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    pub title: String,
    pub description: String,
    /// Kept verbatim; only interpreted when sorting or formatting
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub draft: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
}

impl Frontmatter {
    /// Check a raw mapping against the post schema.
    ///
    /// Every problem is reported, not only the first one. Unknown keys are
    /// ignored and optional fields fall back to their defaults.
    pub fn validate(data: &RawMatter) -> Result<Self, ValidationError> {
        let mut issues = Vec::new();

        let title = required_string(data, "title", &mut issues);
        let description = optional_string(data, "description", &mut issues).unwrap_or_default();
        let date = required_string(data, "date", &mut issues);
        let updated = optional_string(data, "updated", &mut issues);
        let tags = string_list(data, "tags", &mut issues);
        let cover_image = optional_string(data, "coverImage", &mut issues);
        let draft = optional_bool(data, "draft", &mut issues).unwrap_or(false);
        let canonical_url = optional_string(data, "canonicalUrl", &mut issues);

        match (title, date) {
            (Some(title), Some(date)) if issues.is_empty() => Ok(Self {
                title,
                description,
                date,
                updated,
                tags,
                cover_image,
                draft,
                canonical_url,
            }),
            _ => Err(ValidationError { issues }),
        }
    }

    /// The date used for sitemaps: `updated` when present, else `date`
    pub fn last_modified(&self) -> &str {
        self.updated.as_deref().unwrap_or(&self.date)
    }
}

/// Split content into its raw front-matter mapping and the body.
///
/// Content without a leading delimiter yields an empty mapping and the whole
/// input as body. A block that is opened but never closed, or that does not
/// parse as a mapping, is an error.
pub fn extract(content: &str) -> Result<(RawMatter, &str), String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    match split_block(content)? {
        Some((format, block, body)) => Ok((parse_block(format, block)?, body)),
        None => Ok((Map::new(), content)),
    }
}

/// Locate the delimited block. Returns (format, block, body).
fn split_block(content: &str) -> Result<Option<(MatterFormat, &str, &str)>, String> {
    let (open, default_format) = if content.starts_with("---") {
        ("---", MatterFormat::Yaml)
    } else if content.starts_with("+++") {
        ("+++", MatterFormat::Toml)
    } else {
        return Ok(None);
    };

    let first_line_end = content.find('\n').unwrap_or(content.len());
    let hint = content[open.len()..first_line_end].trim();

    // `----` and longer runs are thematic breaks, not delimiters
    if hint.starts_with(&open[..1]) {
        return Ok(None);
    }

    let format = match hint {
        "" => default_format,
        "yaml" | "yml" => MatterFormat::Yaml,
        "json" => MatterFormat::Json,
        "toml" => MatterFormat::Toml,
        other => return Err(format!("unsupported front-matter language `{}`", other)),
    };

    let rest = content.get(first_line_end + 1..).unwrap_or("");
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == open {
            return Ok(Some((format, &rest[..offset], &rest[offset + line.len()..])));
        }
        offset += line.len();
    }

    Err(format!("missing closing `{}`", open))
}

fn parse_block(format: MatterFormat, block: &str) -> Result<RawMatter, String> {
    if block.trim().is_empty() {
        return Ok(Map::new());
    }

    let value = match format {
        MatterFormat::Yaml => serde_yaml::from_str::<serde_yaml::Value>(block)
            .map(yaml_to_json)
            .map_err(|e| format!("invalid YAML: {}", e))?,
        MatterFormat::Json => {
            serde_json::from_str::<Value>(block).map_err(|e| format!("invalid JSON: {}", e))?
        }
        MatterFormat::Toml => block
            .parse::<toml::Table>()
            .map(|t| toml_to_json(toml::Value::Table(t)))
            .map_err(|e| format!("invalid TOML: {}", e))?,
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(format!(
            "front-matter must be a mapping, found {}",
            type_name(&other)
        )),
    }
}

fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(seq) => Value::Array(seq.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => Value::Object(
            mapping
                .into_iter()
                .map(|(k, v)| (yaml_key(k), yaml_to_json(v)))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid(field: &str, expected: &'static str, found: &Value) -> FieldIssue {
    FieldIssue::InvalidType {
        field: field.to_string(),
        expected,
        found: type_name(found),
    }
}

fn required_string(data: &RawMatter, field: &str, issues: &mut Vec<FieldIssue>) -> Option<String> {
    if !data.contains_key(field) {
        issues.push(FieldIssue::Missing {
            field: field.to_string(),
        });
        return None;
    }
    optional_string(data, field, issues)
}

fn optional_string(data: &RawMatter, field: &str, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match data.get(field)? {
        Value::String(s) => Some(s.clone()),
        other => {
            issues.push(invalid(field, "string", other));
            None
        }
    }
}

fn optional_bool(data: &RawMatter, field: &str, issues: &mut Vec<FieldIssue>) -> Option<bool> {
    match data.get(field)? {
        Value::Bool(b) => Some(*b),
        other => {
            issues.push(invalid(field, "boolean", other));
            None
        }
    }
}

fn string_list(data: &RawMatter, field: &str, issues: &mut Vec<FieldIssue>) -> Vec<String> {
    let items = match data.get(field) {
        None => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            issues.push(invalid(field, "array", other));
            return Vec::new();
        }
    };

    let mut list = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => list.push(s.clone()),
            other => issues.push(invalid(&format!("{}[{}]", field, i), "string", other)),
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> (Result<Frontmatter, ValidationError>, &str) {
        let (raw, body) = extract(content).unwrap();
        (Frontmatter::validate(&raw), body)
    }

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2024-01-15
tags:
  - rust
  - notes
coverImage: /images/cover.png
---

This is the content.
"#;

        let (fm, body) = parse(content);
        let fm = fm.unwrap();
        assert_eq!(fm.title, "Hello World");
        assert_eq!(fm.date, "2024-01-15");
        assert_eq!(fm.tags, vec!["rust", "notes"]);
        assert_eq!(fm.cover_image.as_deref(), Some("/images/cover.png"));
        assert_eq!(body, "\nThis is the content.\n");
    }

    #[test]
    fn test_optional_defaults() {
        let (fm, _) = parse("---\ntitle: Minimal\ndate: '2024-02-01'\n---\nbody");
        let fm = fm.unwrap();
        assert_eq!(fm.description, "");
        assert!(fm.tags.is_empty());
        assert!(!fm.draft);
        assert_eq!(fm.updated, None);
        assert_eq!(fm.canonical_url, None);
        assert_eq!(fm.last_modified(), "2024-02-01");
    }

    #[test]
    fn test_missing_title() {
        let (fm, _) = parse("---\ndate: 2024-01-01\n---\n");
        let err = fm.unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue::Missing {
                field: "title".to_string()
            }]
        );
    }

    #[test]
    fn test_collects_every_issue() {
        let content = "---\ntitle: 42\ndraft: 'yes'\ntags: [ok, 3]\n---\n";
        let err = parse(content).0.unwrap_err();
        assert!(err.has_field("title"));
        assert!(err.has_field("date"));
        assert!(err.has_field("draft"));
        assert!(err.has_field("tags[1]"));
        assert_eq!(err.issues.len(), 4);
    }

    #[test]
    fn test_null_is_not_absent() {
        let err = parse("---\ntitle: T\ndate: 2024-01-01\ndescription:\n---\n")
            .0
            .unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue::InvalidType {
                field: "description".to_string(),
                expected: "string",
                found: "null",
            }]
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let (fm, _) = parse("---\ntitle: T\ndate: 2024-01-01\nlayout: wide\n---\n");
        assert_eq!(fm.unwrap().title, "T");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just a body.\n";
        let (raw, body) = extract(content).unwrap();
        assert!(raw.is_empty());
        assert_eq!(body, content);

        let err = Frontmatter::validate(&raw).unwrap_err();
        assert!(err.has_field("title"));
        assert!(err.has_field("date"));
    }

    #[test]
    fn test_thematic_break_is_not_a_delimiter() {
        let content = "----\ntitle: nope\n----\n";
        let (raw, body) = extract(content).unwrap();
        assert!(raw.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_closing_delimiter_with_trailing_space() {
        let (raw, body) = extract("---\ntitle: T\ndate: 2024-01-01\n--- \nBody\n").unwrap();
        assert_eq!(raw["title"], "T");
        assert_eq!(body, "Body\n");
        assert!(Frontmatter::validate(&raw).is_ok());
    }

    #[test]
    fn test_unterminated_block() {
        let err = extract("---\ntitle: Open\n\nNo closing line").unwrap_err();
        assert!(err.contains("missing closing"));
    }

    #[test]
    fn test_json_hint() {
        let content = "---json\n{\"title\": \"Json\", \"date\": \"2024-03-01\", \"draft\": true}\n---\nBody";
        let (fm, body) = parse(content);
        let fm = fm.unwrap();
        assert_eq!(fm.title, "Json");
        assert!(fm.draft);
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_toml_block_with_datetime() {
        let content = "+++\ntitle = \"Toml\"\ndate = 2024-04-01\ntags = [\"a\"]\n+++\nBody";
        let (fm, _) = parse(content);
        let fm = fm.unwrap();
        assert_eq!(fm.title, "Toml");
        assert_eq!(fm.date, "2024-04-01");
        assert_eq!(fm.tags, vec!["a"]);
    }

    #[test]
    fn test_crlf_and_bom() {
        let content = "\u{feff}---\r\ntitle: Windows\r\ndate: 2024-01-01\r\n---\r\nBody\r\n";
        let (fm, body) = parse(content);
        assert_eq!(fm.unwrap().title, "Windows");
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_non_mapping_block() {
        let err = extract("---\n- just\n- a list\n---\n").unwrap_err();
        assert!(err.contains("mapping"));
    }
}
