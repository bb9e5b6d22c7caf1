/// Reference page for a language tag's primary subtag, or `None` when the
/// language is not in the directory. Tags like `en-US` resolve through
/// their first two letters.
pub fn language_reference(tag: &str) -> Option<&'static str> {
    let code = tag.get(..2)?.to_lowercase();
    match code.as_str() {
        "en" => Some("http://lexvo.org/id/iso639-1/en"),
        "es" => Some("http://lexvo.org/id/iso639-1/es"),
        "fr" => Some("http://lexvo.org/id/iso639-1/fr"),
        "de" => Some("http://lexvo.org/id/iso639-1/de"),
        "it" => Some("http://lexvo.org/id/iso639-1/it"),
        "pt" => Some("http://lexvo.org/id/iso639-1/pt"),
        "nl" => Some("http://lexvo.org/id/iso639-1/nl"),
        "ca" => Some("http://lexvo.org/id/iso639-1/ca"),
        "el" => Some("http://lexvo.org/id/iso639-1/el"),
        "pl" => Some("http://lexvo.org/id/iso639-1/pl"),
        "cs" => Some("http://lexvo.org/id/iso639-1/cs"),
        "sv" => Some("http://lexvo.org/id/iso639-1/sv"),
        "da" => Some("http://lexvo.org/id/iso639-1/da"),
        "fi" => Some("http://lexvo.org/id/iso639-1/fi"),
        "ru" => Some("http://lexvo.org/id/iso639-1/ru"),
        "ja" => Some("http://lexvo.org/id/iso639-1/ja"),
        "zh" => Some("http://lexvo.org/id/iso639-1/zh"),
        "ko" => Some("http://lexvo.org/id/iso639-1/ko"),
        "ar" => Some("http://lexvo.org/id/iso639-1/ar"),
        _ => None,
    }
}
