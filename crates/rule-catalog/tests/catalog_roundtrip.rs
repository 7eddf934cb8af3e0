use std::fs;

use chrono::NaiveDate;
use rule_catalog::i18n::convert_to_multilingual;
use rule_catalog::model::LocalizedText;
use rule_catalog::{merger, paths, store};
use serde_json::{json, Value};

#[test]
fn sync_then_convert_round_trip() {
    let workspace = tempfile::tempdir().expect("tempdir");
    let rules_root = workspace.path().join("rules");
    let meta_path = workspace.path().join("meta.json");

    let fastapi = rules_root.join("python-fastapi-cursorrules-prompt-file");
    fs::create_dir_all(&fastapi).expect("mkdir");
    fs::write(
        fastapi.join("main.mdc"),
        "---\ndescription: \"API rules\"\nglobs: \"**/*.py\"\n---\n# Main\n",
    )
    .expect("write");
    fs::write(fastapi.join("testing.mdc"), "# Testing With Pytest\nUse fixtures.\n").expect("write");
    fs::create_dir_all(rules_root.join("nextjs-tailwind-cursorrules-prompt-file")).expect("mkdir");

    let today = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
    let outcome = merger::merge_rules_root(store::load_or_default(&meta_path).expect("load"), &rules_root, today)
        .expect("merge");
    assert_eq!(outcome.added, 2);
    store::save_catalog(&outcome.catalog, &meta_path).expect("save");

    // a second pass over the same tree adds nothing
    let again = merger::merge_rules_root(store::load_catalog(&meta_path).expect("load"), &rules_root, today)
        .expect("merge");
    assert_eq!(again.added, 0);
    assert_eq!(again.catalog.rules, outcome.catalog.rules);

    let loaded = store::load_catalog(&meta_path).expect("load");
    let nextjs = loaded.get("nextjs-tailwind").expect("nextjs entry");
    assert_eq!(
        nextjs.tech_stack.as_ref().map(|stack| stack.frameworks.clone()),
        Some(vec!["Next.js".to_string(), "Tailwind".to_string()])
    );
    assert_eq!(nextjs.tags(), ["next.js", "tailwind"]);
    assert_eq!(nextjs.description, Some(LocalizedText::from("nextjs-tailwind技术栈规则集")));

    let python = loaded.get("python-fastapi").expect("python entry");
    assert_eq!(python.files()[1].description, Some(LocalizedText::from("Testing With Pytest")));

    // file paths are stored root-relative but checked inside the existing rule directory
    let issues = paths::check_file_paths(&loaded, &rules_root);
    assert_eq!(
        issues,
        vec![
            "Rule 'python-fastapi': File 'python-fastapi-cursorrules-prompt-file/main.mdc' does not exist",
            "Rule 'python-fastapi': File 'python-fastapi-cursorrules-prompt-file/testing.mdc' does not exist",
        ]
    );

    let output = workspace.path().join("meta_i18n.json");
    store::save_catalog(&convert_to_multilingual(&loaded), &output).expect("save converted");
    let converted = store::load_catalog(&output).expect("reload converted");

    assert_eq!(converted.supported_languages, Some(json!(["zh", "en"])));
    for (before, after) in loaded.rules.iter().zip(&converted.rules) {
        for (old, new) in [(&before.name, &after.name), (&before.description, &after.description)] {
            let original = old.as_ref().and_then(LocalizedText::as_plain).expect("plain before");
            let LocalizedText::Localized(map) = new.as_ref().expect("present after") else {
                panic!("expected a mapping for {}", before.id);
            };
            assert_eq!(map.len(), 2);
            assert_eq!(map.get("zh").and_then(Value::as_str), Some(original));
            assert_eq!(map.get("en").and_then(Value::as_str), Some(original));
        }
    }

    let reconverted = convert_to_multilingual(&converted);
    assert_eq!(reconverted, converted);
}
