//! Display helpers turning raw field values into text safe to put in a table cell.

use std::{borrow::Cow, sync::LazyLock};

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use crate::field::{EnumValue, FieldValue};

pub const MAX_STRING_LENGTH: usize = 150;
pub const ELLIPSIS: &str = "...";

const INVALID_DATE: &str = "Invalid Date";

static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\p{Ll}\d])(\p{Lu})").unwrap());
static ACRONYM_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{Lu}+)(\p{Lu}[\p{Ll}\d]+)").unwrap());
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_-]+").unwrap());
static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Cuts `text` down to [`MAX_STRING_LENGTH`] characters.
pub fn truncate(text: &str) -> Cow<'_, str> {
    truncate_to(text, MAX_STRING_LENGTH)
}

/// Returns `text` untouched when it has at most `max_length` characters,
/// otherwise its first `max_length` characters followed by [`ELLIPSIS`].
pub fn truncate_to(text: &str, max_length: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_length) {
        Some((end, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..end])),
        None => Cow::Borrowed(text),
    }
}

// Largest integer a JS number holds exactly, 2^53
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Pretty prints `value` with two space indentation and truncates the result.
/// Keys keep their insertion order and whole floats print without a fraction.
pub fn json_truncate(value: &serde_json::Value) -> String {
    let mut value = value.clone();
    whole_floats_to_integers(&mut value);
    truncate(&format!("{value:#}")).into_owned()
}

fn whole_floats_to_integers(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Number(number) => {
            let whole = number
                .as_f64()
                .filter(|float| number.is_f64() && float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER);
            if let Some(whole) = whole {
                *value = serde_json::Value::from(whole as i64);
            }
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(whole_floats_to_integers),
        serde_json::Value::Object(map) => map.values_mut().for_each(whole_floats_to_integers),
        _ => {}
    }
}

/// `PENDING_REVIEW` -> `Pending review`, `inProgress` -> `In progress`.
pub fn humanize(token: &str) -> String {
    let split = LOWER_UPPER.replace_all(token, "${1}_${2}");
    let split = ACRONYM_WORD.replace_all(&split, "${1}_${2}");
    let lower = split.to_lowercase();
    let spaced = SEPARATORS.replace_all(&lower, " ");
    let spaced = WHITESPACE_RUNS.replace_all(&spaced, " ");

    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_enum(values: Option<&EnumValue>) -> Option<String> {
    match values? {
        EnumValue::Single(value) if value.is_empty() => None,
        EnumValue::Single(value) => Some(humanize(value)),
        EnumValue::Many(values) => Some(
            values
                .iter()
                .map(|value| humanize(value))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}

/// A `<time>` element: the raw value stays machine readable, the text is UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeTag {
    pub date_time: String,
    pub title: String,
    pub text: String,
}

pub fn time_tag(datetime: Option<&str>) -> Option<TimeTag> {
    let raw = datetime.filter(|raw| !raw.is_empty())?;

    let text = match parse_utc(raw) {
        Some(parsed) => parsed.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        None => {
            tracing::debug!("Could not parse datetime {raw:?}");
            INVALID_DATE.to_owned()
        }
    };

    Some(TimeTag {
        date_time: raw.to_owned(),
        title: raw.to_owned(),
        text,
    })
}

fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    // Date-only values mean midnight UTC
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A read-only checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxTag {
    pub checked: bool,
    pub disabled: bool,
}

pub fn checkbox_input_tag(checked: bool) -> CheckboxTag {
    CheckboxTag {
        checked,
        disabled: true,
    }
}

/// What ends up in one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCell {
    Empty,
    Text(String),
    Time(TimeTag),
    Checkbox(CheckboxTag),
}

pub fn format_field(value: &FieldValue) -> DisplayCell {
    match value {
        FieldValue::Null => DisplayCell::Empty,
        FieldValue::Int(number) => DisplayCell::Text(truncate(&number.to_string()).into_owned()),
        FieldValue::Text(text) => DisplayCell::Text(truncate(text).into_owned()),
        FieldValue::Enum(values) => format_enum(Some(values)).map_or(DisplayCell::Empty, DisplayCell::Text),
        FieldValue::Json(json) => DisplayCell::Text(json_truncate(json)),
        FieldValue::DateTime(raw) => time_tag(Some(raw)).map_or(DisplayCell::Empty, DisplayCell::Time),
        FieldValue::Bool(checked) => DisplayCell::Checkbox(checkbox_input_tag(*checked)),
    }
}
