/// Conversion of a single-language catalog into the multilingual layout.
///
/// Every plain-string `name`/`description` (rule and file level) becomes a mapping
/// keyed by [`SUPPORTED_LANGUAGES`]. Text for languages other than the source
/// language comes from a [`Translator`]; the default one copies the source text.
/// Values that are already mappings, and values that are not strings at all, are
/// left as they are, so converting twice changes nothing.
use serde_json::{Map, Value};

use crate::model::{Catalog, FileRecord, LocalizedText, RuleEntry};

/// Language that plain strings in an unconverted catalog are written in.
pub const SOURCE_LANGUAGE: &str = "zh";
/// Languages of a converted catalog, in output order.
pub const SUPPORTED_LANGUAGES: &[&str] = &["zh", "en"];

pub trait Translator {
    fn translate(&self, text: &str, from: &str, to: &str) -> String;
}

/// Fills every language with the source text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(&self, text: &str, _from: &str, _to: &str) -> String {
        text.to_string()
    }
}

/// Converts `catalog` using [`PassthroughTranslator`].
pub fn convert_to_multilingual(catalog: &Catalog) -> Catalog {
    convert_with(catalog, &PassthroughTranslator)
}

pub fn convert_with(catalog: &Catalog, translator: &dyn Translator) -> Catalog {
    let mut converted = catalog.clone();
    for rule in &mut converted.rules {
        localize_rule(rule, translator);
    }
    converted.supported_languages = Some(Value::from(SUPPORTED_LANGUAGES.to_vec()));
    converted
}

fn localize_rule(rule: &mut RuleEntry, translator: &dyn Translator) {
    localize_field(&mut rule.name, translator);
    localize_field(&mut rule.description, translator);
    for file in rule.files.iter_mut().flatten() {
        localize_file(file, translator);
    }
}

fn localize_file(file: &mut FileRecord, translator: &dyn Translator) {
    localize_field(&mut file.description, translator);
}

fn localize_field(field: &mut Option<LocalizedText>, translator: &dyn Translator) {
    if let Some(LocalizedText::Plain(text)) = field.as_ref() {
        let translations = localize(text, translator);
        *field = Some(LocalizedText::Localized(translations));
    }
}

fn localize(text: &str, translator: &dyn Translator) -> Map<String, Value> {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|&lang| {
            let value = if lang == SOURCE_LANGUAGE {
                text.to_string()
            } else {
                translator.translate(text, SOURCE_LANGUAGE, lang)
            };
            (lang.to_string(), Value::String(value))
        })
        .collect()
}
