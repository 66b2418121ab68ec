use url::form_urlencoded;

use crate::catalog;
use crate::state::{FormState, FormUpdate, FrequencyMode};

/// Query-string codec for shareable links. Only the textual fields travel;
/// the attachment never does.

/// Emits one pair per non-empty textual field, keys matching the form field
/// names literally. Empty fields are omitted entirely.
pub fn encode(state: &FormState) -> String {
    let fields: [(&str, &str); 9] = [
        ("department", &state.department),
        ("frequency", &state.frequency),
        ("period", &state.period),
        ("sermonType", &state.sermon_type),
        ("coreTheme", &state.core_theme),
        ("details", &state.details),
        ("scripture", &state.scripture),
        ("direction", &state.direction),
        ("sermonTime", &state.sermon_time),
    ];

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        if !value.is_empty() {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}

/// Accepts a bare query string or a full URL; unknown keys and empty values
/// are ignored, known values are taken verbatim with no catalog validation.
/// The frequency mode is pinned here, at the input boundary.
pub fn decode(input: &str) -> FormUpdate {
    let query = match input.split_once('?') {
        Some((_, rest)) => rest,
        None => input,
    };
    let query = match query.split_once('#') {
        Some((q, _)) => q,
        None => query,
    };

    let mut update = FormUpdate::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        let value = value.into_owned();
        match key.as_ref() {
            "department" => update.department = Some(value),
            "frequency" => {
                update.frequency_mode = Some(if catalog::is_frequency_preset(&value) {
                    FrequencyMode::Preset
                } else {
                    FrequencyMode::Custom
                });
                update.frequency = Some(value);
            }
            "period" => update.period = Some(value),
            "sermonType" => update.sermon_type = Some(value),
            "coreTheme" => update.core_theme = Some(value),
            "details" => update.details = Some(value),
            "scripture" => update.scripture = Some(value),
            "direction" => update.direction = Some(value),
            "sermonTime" => update.sermon_time = Some(value),
            _ => {}
        }
    }
    update
}
