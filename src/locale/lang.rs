//! Site language name to ISO-639-1 code mapping.

use indexmap::IndexMap;
use log::debug;
use once_cell::sync::Lazy;

/// Fixed mapping from internal language names to ISO-639-1 codes.
static LANG_ISO639: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("afrikaans", "af"),
        ("bosnian", "bs"),
        ("bulgarian", "bg"),
        ("catalan", "ca"),
        ("chinese_simplified", "zh-cn"),
        ("chinese_traditional", "zh"),
        ("croatian", "hr"),
        ("czech", "cs"),
        ("danish", "da"),
        ("dutch", "nl"),
        ("english", "en"),
        ("estonian", "et"),
        ("farsi", "fa"), // replaced by 'persian'
        ("finnish", "fi"),
        ("french_canada", "fr-ca"),
        ("french_france", "fr"),
        ("german", "de"),
        ("german_formal", "de"),
        ("hebrew", "he"),
        ("hellenic", "el"),
        ("indonesian", "id"),
        ("italian", "it"),
        ("japanese", "ja"),
        ("korean", "ko"),
        ("norwegian", "nb"), // Norwegian (Bokmal)
        ("persian", "fa"),
        ("polish", "pl"),
        ("portuguese", "pt"),
        ("portuguese_brazil", "pt-br"),
        ("romanian", "ro"),
        ("russian", "ru"),
        ("serbian", "sr"),
        ("slovak", "sk"),
        ("slovenian", "sl"),
        ("spanish", "es"),
        ("spanish_argentina", "es"),
        ("swedish", "sv"),
        ("turkish", "tr"),
        ("ukrainian", "uk"),
        ("ukrainian_koi8-u", "uk"),
    ])
});

/// Returns the ISO-639-1 (or region-qualified) code for a site language name.
///
/// The lookup is case-insensitive and strips an optional `_utf-8` suffix
/// first. Unknown names fall back to `en`.
///
/// # Examples
///
/// ```
/// use renderkit::lang_iso639_code;
///
/// assert_eq!(lang_iso639_code("FRENCH_FRANCE"), "fr");
/// assert_eq!(lang_iso639_code("german_utf-8"), "de");
/// assert_eq!(lang_iso639_code("unknown_lang"), "en");
/// ```
pub fn lang_iso639_code(lang_name: &str) -> &'static str {
    let lang_name = lang_name.to_lowercase().replace("_utf-8", "");

    match LANG_ISO639.get(lang_name.as_str()).copied() {
        Some(code) => code,
        None => {
            debug!("No ISO-639 code for language {:?}, using 'en'", lang_name);
            "en"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_lookup() {
        let test_cases = [
            ("english", "en"),
            ("FRENCH_FRANCE", "fr"),
            ("French_Canada", "fr-ca"),
            ("chinese_simplified", "zh-cn"),
            ("Chinese_Simplified_utf-8", "zh-cn"),
            ("german_utf-8", "de"),
            ("ukrainian_koi8-u", "uk"),
            ("norwegian", "nb"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(lang_iso639_code(input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_unknown_defaults_to_en() {
        assert_eq!(lang_iso639_code("unknown_lang"), "en");
        assert_eq!(lang_iso639_code(""), "en");
    }
}
