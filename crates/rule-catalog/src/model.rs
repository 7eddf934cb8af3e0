use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Version written into a catalog created from scratch.
pub const DEFAULT_VERSION: &str = "1.0.0";
/// `lastUpdated` of a catalog created from scratch, before the first merge stamps it.
pub const DEFAULT_LAST_UPDATED: &str = "2023-07-12";

/// The whole rule catalog as persisted in `meta.json`.
///
/// Fields that are absent in the document stay absent when it is written back,
/// and values of unexpected JSON types are carried through as they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub rules: Vec<RuleEntry>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub supported_languages: Option<Value>,
    /// Top-level fields this tool does not manage, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Catalog {
    pub fn get(&self, id: &str) -> Option<&RuleEntry> {
        self.rules.iter().find(|rule| rule.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            version: Some(DEFAULT_VERSION.into()),
            last_updated: Some(DEFAULT_LAST_UPDATED.into()),
            supported_languages: None,
            extra: Map::new(),
        }
    }
}

/// Metadata for one rule set, i.e. one directory under the rules root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleEntry {
    /// Directory name without the `-cursorrules-prompt-file` suffix. Unique in a catalog.
    pub id: String,
    /// Directory path relative to the rules root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<LocalizedText>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<TechStack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRecord>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RuleEntry {
    /// The rule path, empty when the entry has none.
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn files(&self) -> &[FileRecord] {
        self.files.as_deref().unwrap_or_default()
    }
}

/// One rule-definition file inside a rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, description: impl Into<LocalizedText>) -> Self {
        Self {
            path: Some(path.into()),
            description: Some(description.into()),
            extra: Map::new(),
        }
    }

    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechStack {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TechStack {
    /// Lower-cased tags in category order: languages, then frameworks, then tools.
    pub fn tags(&self) -> Vec<String> {
        self.languages
            .iter()
            .chain(&self.frameworks)
            .chain(&self.tools)
            .map(|name| name.to_lowercase())
            .collect()
    }
}

/// A `name` or `description` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    /// Language code → text, in document order.
    Localized(Map<String, Value>),
    /// Any other JSON value (`null`, a number, a list), kept untouched.
    Other(Value),
}

impl LocalizedText {
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Self::Plain(text) => Some(text),
            _ => None,
        }
    }

    /// Text for `lang`. A plain string answers for every language.
    pub fn get(&self, lang: &str) -> Option<&str> {
        match self {
            Self::Plain(text) => Some(text),
            Self::Localized(translations) => translations.get(lang).and_then(Value::as_str),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for LocalizedText {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<Map<String, Value>> for LocalizedText {
    fn from(translations: Map<String, Value>) -> Self {
        Self::Localized(translations)
    }
}

/// A field that appears in the document, even as `null`, deserializes to `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
