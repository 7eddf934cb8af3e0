use std::path::Path;

use serde_json::Map;

use crate::model::{LocalizedText, RuleEntry};
use crate::scanner::{relative_to_root, ScannedFile};
use crate::techstack;

/// Appended to the title-cased id to form a rule set's display name ("rule set").
pub const NAME_SUFFIX: &str = " 规则集";

/// Rule id for a rule directory: its base name without the trailing rule suffix.
pub fn rule_id(rule_dir: &Path) -> String {
    let base = rule_dir
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    techstack::strip_rule_suffix(&base).to_string()
}

/// Builds the catalog entry for one rule directory from its scanned files.
pub fn build_rule_entry(rule_dir: &Path, rules_root: &Path, files: &[ScannedFile]) -> RuleEntry {
    let id = rule_id(rule_dir);
    let tech_stack = techstack::classify(&id);
    let tags = tech_stack.tags();

    RuleEntry {
        path: Some(relative_to_root(rule_dir, rules_root)),
        name: Some(LocalizedText::Plain(display_name(&id))),
        description: Some(LocalizedText::Plain(describe(&id, files.len()))),
        tech_stack: Some(tech_stack),
        tags: Some(tags),
        files: Some(files.iter().map(ScannedFile::to_record).collect()),
        extra: Map::new(),
        id,
    }
}

fn display_name(id: &str) -> String {
    format!("{}{NAME_SUFFIX}", title_case(&id.replace('-', " ")))
}

fn describe(id: &str, file_count: usize) -> String {
    if file_count > 0 {
        format!("包含{file_count}个规则文件的{id}技术栈规则集")
    } else {
        format!("{id}技术栈规则集")
    }
}

/// Upper-cases a letter that follows a non-letter and lower-cases the rest,
/// so `next.js app` becomes `Next.Js App`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}
