/// Selectable option values offered by the form. The department table keeps
/// the short ids alongside the labels so the CLI can accept either.

pub const DEPARTMENTS: &[(&str, &str)] = &[
    ("infant", "영아부"),
    ("preschool", "유치부"),
    ("lower_elem", "유년부"),
    ("upper_elem", "초등부"),
    ("middle", "중등부"),
    ("high", "고등부"),
    ("university", "대학부"),
    ("3040", "30-40"),
    ("adult", "장년부"),
    ("senior", "실버"),
];

/// Marker option that switches frequency entry to free text.
pub const FREQUENCY_CUSTOM: &str = "기타 (직접 입력)";

pub const FREQUENCY_OPTIONS: &[&str] = &[
    "1주 (단 회)",
    "4주 (1개월)",
    "12주 (3개월)",
    FREQUENCY_CUSTOM,
];

pub const SERMON_TIME_OPTIONS: &[&str] = &["5분", "10분", "20분", "30분", "40분"];

pub const SERMON_TYPES: &[&str] = &[
    "인물설교",
    "사건설교",
    "주제설교",
    "강해설교",
    "장례설교",
    "심방설교",
    "새벽설교",
];

/// Resolve a department given either its id or its label.
pub fn department_label(input: &str) -> Option<&'static str> {
    DEPARTMENTS
        .iter()
        .find(|(id, label)| *id == input || *label == input)
        .map(|(_, label)| *label)
}

/// True when `value` is one of the concrete frequency presets (the custom
/// marker itself is not a preset value).
pub fn is_frequency_preset(value: &str) -> bool {
    FREQUENCY_OPTIONS
        .iter()
        .any(|opt| *opt == value && *opt != FREQUENCY_CUSTOM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_resolves_by_id_and_label() {
        assert_eq!(department_label("high"), Some("고등부"));
        assert_eq!(department_label("고등부"), Some("고등부"));
        assert_eq!(department_label("youth"), None);
    }

    #[test]
    fn frequency_presets_exclude_custom_marker() {
        assert!(is_frequency_preset("4주 (1개월)"));
        assert!(!is_frequency_preset(FREQUENCY_CUSTOM));
        assert!(!is_frequency_preset("특별 새벽기도회 5일"));
    }
}
