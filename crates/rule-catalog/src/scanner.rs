use std::path::Path;

use tracing::{debug, warn};

use crate::frontmatter;
use crate::model::FileRecord;

/// Extension of rule-definition files, without the dot.
pub const RULE_FILE_EXTENSION: &str = "mdc";

/// A rule-definition file found by [`scan_rule_directory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// File name, e.g. `main.mdc`.
    pub file: String,
    /// Path relative to the rules root, `/`-separated.
    pub path: String,
    pub description: String,
    pub globs: String,
    /// Lower-cased file name without the extension.
    pub id: String,
}

impl ScannedFile {
    /// The catalog form of this file: path and description only.
    pub fn to_record(&self) -> FileRecord {
        FileRecord::new(self.path.clone(), self.description.clone())
    }
}

/// `path` relative to `root` with `/` separators, or `path` itself when it is not under `root`.
pub fn relative_to_root(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Lists the rule-definition files directly inside `dir`, sorted by file name.
///
/// Hidden files and anything that is not a regular `.mdc` file are skipped. A
/// directory that cannot be read yields an empty list.
pub fn scan_rule_directory(dir: &Path, rules_root: &Path) -> Vec<ScannedFile> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, path = %dir.display(), "failed to scan rule directory");
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| {
            entry
                .inspect_err(|e| warn!(error = %e, path = %dir.display(), "unreadable directory entry"))
                .ok()
        })
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| rule_file_stem(name).is_some())
        .collect();
    names.sort();

    let files: Vec<ScannedFile> = names
        .into_iter()
        .map(|name| {
            let path = dir.join(&name);
            let front = frontmatter::extract_file(&path);
            let id = rule_file_stem(&name).unwrap_or(&name).to_lowercase();
            ScannedFile {
                path: relative_to_root(&path, rules_root),
                description: front.description,
                globs: front.globs,
                id,
                file: name,
            }
        })
        .collect();

    debug!(path = %dir.display(), files = files.len(), "scanned rule directory");
    files
}

/// File name without the rule extension, if `name` is a visible rule-definition file.
fn rule_file_stem(name: &str) -> Option<&str> {
    if name.starts_with('.') {
        return None;
    }
    name.strip_suffix(RULE_FILE_EXTENSION)?.strip_suffix('.')
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn rule_file_names() {
        assert_eq!(rule_file_stem("main.mdc"), Some("main"));
        assert_eq!(rule_file_stem("API.Rules.mdc"), Some("API.Rules"));
        assert_eq!(rule_file_stem(".hidden.mdc"), None);
        assert_eq!(rule_file_stem("notes.md"), None);
        assert_eq!(rule_file_stem("mdc"), None);
    }

    #[test]
    fn scans_sorted_visible_rule_files() {
        let root = tempfile::tempdir().expect("tempdir");
        let dir = root.path().join("react-vite-cursorrules-prompt-file");
        fs::create_dir(&dir).expect("mkdir");
        fs::write(dir.join("Zeta.mdc"), "# Zeta rules\n").expect("write");
        fs::write(dir.join("alpha.mdc"), "---\ndescription: Alpha\nglobs: \"*.tsx\"\n---\n")
            .expect("write");
        fs::write(dir.join(".draft.mdc"), "# hidden").expect("write");
        fs::write(dir.join("README.md"), "# readme").expect("write");
        fs::create_dir(dir.join("nested.mdc")).expect("mkdir");

        let files = scan_rule_directory(&dir, root.path());
        assert_eq!(files.len(), 2);

        assert_eq!(files[0].file, "Zeta.mdc");
        assert_eq!(files[0].id, "zeta");
        assert_eq!(files[0].path, "react-vite-cursorrules-prompt-file/Zeta.mdc");
        assert_eq!(files[0].description, "Zeta rules");
        assert_eq!(files[0].globs, "**/*.*");

        assert_eq!(files[1].id, "alpha");
        assert_eq!(files[1].description, "Alpha");
        assert_eq!(files[1].globs, "*.tsx");

        let record = files[1].to_record();
        assert_eq!(record.path(), "react-vite-cursorrules-prompt-file/alpha.mdc");
        assert_eq!(record.description.and_then(|d| d.as_plain().map(String::from)), Some("Alpha".into()));
    }

    #[test]
    fn missing_directory_is_empty() {
        let root = tempfile::tempdir().expect("tempdir");
        assert!(scan_rule_directory(&root.path().join("nope"), root.path()).is_empty());
    }

    #[test]
    fn path_outside_root_is_kept_whole() {
        assert_eq!(
            relative_to_root(Path::new("other/x.mdc"), Path::new("rules")),
            "other/x.mdc"
        );
        assert_eq!(relative_to_root(Path::new("rules/a/x.mdc"), Path::new("rules")), "a/x.mdc");
    }
}
