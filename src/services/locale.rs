// Locale Resolver Service
// Maps the host locale to a supported application language

/// Language used when the host locale is unknown or unsupported.
pub const DEFAULT_LANGUAGE: &str = "en_US";

/// BCP-47 tags reported by the host mapped to the supported language codes.
/// Simplified-script regions collapse onto zh_CN, traditional-script regions
/// onto zh_TW.
const LOCALE_MAPPING: &[(&str, &str)] = &[
    ("en-US", "en_US"),
    ("zh-CN", "zh_CN"),
    ("zh-SG", "zh_CN"),
    ("zh-Hans", "zh_CN"),
    ("zh-TW", "zh_TW"),
    ("zh-HK", "zh_TW"),
    ("zh-MO", "zh_TW"),
    ("zh-Hant", "zh_TW"),
];

/// Look up a locale tag in the supported-language table.
pub fn map_locale(tag: &str) -> &'static str {
    LOCALE_MAPPING
        .iter()
        .find(|(locale, _)| *locale == tag)
        .map(|(_, language)| *language)
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Resolve the application language from the OS locale.
pub fn system_language() -> &'static str {
    match sys_locale::get_locale() {
        Some(tag) => map_locale(&tag),
        None => DEFAULT_LANGUAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_entry_maps_to_its_language() {
        for (tag, language) in LOCALE_MAPPING {
            assert_eq!(map_locale(tag), *language);
        }
    }

    #[test]
    fn test_unknown_locales_fall_back_to_english() {
        assert_eq!(map_locale("fr-FR"), DEFAULT_LANGUAGE);
        assert_eq!(map_locale("ja-JP"), DEFAULT_LANGUAGE);
        assert_eq!(map_locale(""), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_system_language_is_always_supported() {
        let language = system_language();
        assert!(["en_US", "zh_CN", "zh_TW"].contains(&language));
    }
}
