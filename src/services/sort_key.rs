// Trainer Name Sort Keys
// Phonetic keys so Chinese trainer names sort alongside Latin ones

use pinyin::ToPinyin;

/// True when the text contains any CJK Unified Ideograph.
pub fn is_chinese(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// Sort key for a trainer name.
///
/// Chinese names are rewritten as a space-delimited, tone-stripped pinyin
/// reading so lexicographic comparison approximates phonetic order. Anything
/// without ideographs is returned unchanged. Callers pass this to their list
/// sort; nothing is sorted here.
pub fn sort_trainers_key(name: &str) -> String {
    if !is_chinese(name) {
        return name.to_string();
    }

    let mut tokens: Vec<String> = Vec::new();
    let mut literal = String::new();
    for c in name.chars() {
        match c.to_pinyin() {
            Some(syllable) => {
                if !literal.is_empty() {
                    tokens.push(std::mem::take(&mut literal));
                }
                tokens.push(syllable.plain().to_string());
            }
            None => literal.push(c),
        }
    }
    if !literal.is_empty() {
        tokens.push(literal);
    }

    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_ideographs() {
        assert!(is_chinese("三国志"));
        assert!(is_chinese("Dyson球计划"));
        assert!(!is_chinese("Tokyo"));
        assert!(!is_chinese(""));
    }

    #[test]
    fn test_chinese_names_get_pinyin_keys() {
        let key = sort_trainers_key("东京");
        assert_eq!(key, "dong jing");
        assert!(key.is_ascii());
    }

    #[test]
    fn test_latin_names_pass_through() {
        assert_eq!(sort_trainers_key("Tokyo"), "Tokyo");
        assert_eq!(sort_trainers_key("Half-Life 2"), "Half-Life 2");
    }

    #[test]
    fn test_mixed_names_keep_latin_runs() {
        let key = sort_trainers_key("Dyson球计划");
        assert_eq!(key, "Dyson qiu ji hua");
    }
}
