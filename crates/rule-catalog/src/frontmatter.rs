/// Front-matter extraction for `.mdc` rule-definition files.
///
/// A file may start with a YAML block delimited by `---` lines. When that block is
/// a mapping, `description` and `globs` come from it. Otherwise the first non-blank
/// line of the body (with any leading `#` heading markers removed) is used as the
/// description. Extraction never fails: unreadable files yield the defaults.
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

/// Glob used when a file does not declare one.
pub const DEFAULT_GLOBS: &str = "**/*.*";

static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)").expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub description: String,
    pub globs: String,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            description: String::new(),
            globs: DEFAULT_GLOBS.to_string(),
        }
    }
}

/// Reads `path` and extracts its front-matter, logging and defaulting on I/O errors.
pub fn extract_file(path: &Path) -> FrontMatter {
    match std::fs::read_to_string(path) {
        Ok(content) => extract(&content),
        Err(e) => {
            warn!(error = %e, path = %path.display(), "failed to read rule file");
            FrontMatter::default()
        }
    }
}

pub fn extract(content: &str) -> FrontMatter {
    let (block, body) = match BLOCK_RE.captures(content) {
        Some(caps) => {
            let end = caps.get(0).map_or(0, |m| m.end());
            (Some(caps.get(1).map_or("", |m| m.as_str())), &content[end..])
        }
        None => (None, content),
    };

    if let Some(mapping) = block.and_then(parse_block) {
        return FrontMatter {
            description: field_text(&mapping, "description").unwrap_or_default(),
            globs: field_text(&mapping, "globs").unwrap_or_else(|| DEFAULT_GLOBS.to_string()),
        };
    }

    FrontMatter {
        description: first_line_title(body),
        globs: DEFAULT_GLOBS.to_string(),
    }
}

fn parse_block(block: &str) -> Option<Mapping> {
    if block.trim().is_empty() {
        return Some(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(block) {
        Ok(Value::Mapping(mapping)) => Some(mapping),
        // empty or comment-only block
        Ok(Value::Null) => Some(Mapping::new()),
        Ok(_) => {
            debug!("front-matter is not a mapping, using body text");
            None
        }
        Err(e) => {
            debug!(error = %e, "front-matter is not valid YAML, using body text");
            None
        }
    }
}

fn field_text(mapping: &Mapping, key: &str) -> Option<String> {
    match mapping.get(key)? {
        Value::Sequence(items) => {
            let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
            Some(parts.join(","))
        }
        value => scalar_text(value),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_line_title(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.trim_start_matches('#').trim_start().to_string())
        .unwrap_or_default()
}
