use crate::model::TechStack;

/// Trailing marker carried by every rule directory name in the upstream collection.
pub const RULE_DIR_SUFFIX: &str = "-cursorrules-prompt-file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechCategory {
    Language,
    Framework,
    Tool,
}

// Lower-cased token → display name. Add technologies here.
const LANGUAGES: &[(&str, &str)] = &[
    ("typescript", "Typescript"),
    ("javascript", "Javascript"),
    ("python", "Python"),
    ("php", "Php"),
    ("solidity", "Solidity"),
    ("c#", "C#"),
    ("csharp", "Csharp"),
    ("rust", "Rust"),
    ("go", "Go"),
];

const FRAMEWORKS: &[(&str, &str)] = &[
    ("react", "React"),
    ("angular", "Angular"),
    ("vue", "Vue"),
    ("nextjs", "Next.js"),
    ("fastapi", "FastAPI"),
    ("flask", "Flask"),
    ("django", "Django"),
    ("laravel", "Laravel"),
    ("express", "Express"),
    ("nestjs", "NestJS"),
    ("tailwind", "Tailwind"),
    ("shadcn", "Shadcn"),
    ("sveltekit", "Sveltekit"),
    ("svelte", "Svelte"),
    ("qwik", "Qwik"),
    ("solid", "Solid"),
];

const TOOLS: &[(&str, &str)] = &[
    ("vite", "Vite"),
    ("webpack", "Webpack"),
    ("jest", "Jest"),
    ("cypress", "Cypress"),
    ("storybook", "Storybook"),
    ("pwa", "Pwa"),
    ("vercel", "Vercel"),
    ("netlify", "Netlify"),
    ("supabase", "Supabase"),
    ("mongodb", "Mongodb"),
    ("firebase", "Firebase"),
];

/// Lookup order decides the category of a token listed in more than one table.
const TABLES: &[(TechCategory, &[(&str, &str)])] = &[
    (TechCategory::Language, LANGUAGES),
    (TechCategory::Framework, FRAMEWORKS),
    (TechCategory::Tool, TOOLS),
];

/// Removes a trailing `-cursorrules-prompt-file` (optionally followed by `/`).
/// Anything else, including the suffix appearing mid-name, is left alone.
pub fn strip_rule_suffix(name: &str) -> &str {
    let trimmed = name.strip_suffix('/').unwrap_or(name);
    trimmed.strip_suffix(RULE_DIR_SUFFIX).unwrap_or(name)
}

/// Category and display name for a single name token, case-insensitively.
pub fn lookup(token: &str) -> Option<(TechCategory, &'static str)> {
    let token = token.to_lowercase();
    TABLES.iter().find_map(|(category, table)| {
        table
            .iter()
            .find(|(keyword, _)| *keyword == token)
            .map(|(_, display)| (*category, *display))
    })
}

/// Classifies the hyphen-separated tokens of a rule directory name.
/// Unknown tokens are dropped; order and duplicates are kept.
pub fn classify(dir_name: &str) -> TechStack {
    let mut stack = TechStack::default();
    for token in strip_rule_suffix(dir_name).split('-') {
        let Some((category, display)) = lookup(token) else {
            continue;
        };
        let bucket = match category {
            TechCategory::Language => &mut stack.languages,
            TechCategory::Framework => &mut stack.frameworks,
            TechCategory::Tool => &mut stack.tools,
        };
        bucket.push(display.to_string());
    }
    stack
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_the_trailing_suffix() {
        assert_eq!(strip_rule_suffix("python-fastapi-cursorrules-prompt-file"), "python-fastapi");
        assert_eq!(strip_rule_suffix("python-fastapi-cursorrules-prompt-file/"), "python-fastapi");
        assert_eq!(strip_rule_suffix("python-fastapi"), "python-fastapi");
        assert_eq!(strip_rule_suffix("python-fastapi/"), "python-fastapi/");
        assert_eq!(
            strip_rule_suffix("a-cursorrules-prompt-file-b"),
            "a-cursorrules-prompt-file-b"
        );
        assert_eq!(
            strip_rule_suffix("x-cursorrules-prompt-file-cursorrules-prompt-file"),
            "x-cursorrules-prompt-file"
        );
        assert_eq!(strip_rule_suffix("x-Cursorrules-Prompt-File"), "x-Cursorrules-Prompt-File");
    }

    #[test]
    fn classifies_python_fastapi() {
        let stack = classify("python-fastapi-cursorrules-prompt-file");
        assert_eq!(stack.languages, vec!["Python"]);
        assert_eq!(stack.frameworks, vec!["FastAPI"]);
        assert!(stack.tools.is_empty());
    }

    #[test]
    fn special_display_names_and_case_insensitivity() {
        let stack = classify("TypeScript-NextJS-nestjs-Vite-supabase");
        assert_eq!(stack.languages, vec!["Typescript"]);
        assert_eq!(stack.frameworks, vec!["Next.js", "NestJS"]);
        assert_eq!(stack.tools, vec!["Vite", "Supabase"]);
    }

    #[test]
    fn unknown_tokens_dropped_duplicates_kept() {
        let stack = classify("react-native-react-expo-c#");
        assert_eq!(stack.languages, vec!["C#"]);
        assert_eq!(stack.frameworks, vec!["React", "React"]);
        assert!(stack.tools.is_empty());
    }

    #[test]
    fn nothing_recognised() {
        assert_eq!(classify("cursor-ai-general"), TechStack::default());
        assert_eq!(classify(""), TechStack::default());
    }

    #[test]
    fn lookup_reports_category() {
        assert_eq!(lookup("Go"), Some((TechCategory::Language, "Go")));
        assert_eq!(lookup("sveltekit"), Some((TechCategory::Framework, "Sveltekit")));
        assert_eq!(lookup("jest"), Some((TechCategory::Tool, "Jest")));
        assert_eq!(lookup("native"), None);
    }
}
