use std::{env, fmt::Display};

use chrono::{DateTime, Local, Locale, TimeZone};
use log::warn;

const DATE_FORMAT: &str = "%A, %d de %B de %Y";

/// Today's date, e.g. "Jueves, 17 de octubre de 2024".
pub fn format_today(locale: Locale) -> String {
    format_date(&Local::now(), locale)
}

pub fn format_date<Tz: TimeZone>(at: &DateTime<Tz>, locale: Locale) -> String
where
    Tz::Offset: Display,
{
    let localized = at.format_localized(DATE_FORMAT, locale).to_string();
    capitalize(&deunicode::deunicode(&localized))
}

/// Picks the preferred locale, falling back to the process default and then POSIX.
pub fn resolve_locale(preferred: &str) -> Locale {
    resolve_locale_with(preferred, process_locale_name())
}

fn resolve_locale_with(preferred: &str, process_default: Option<String>) -> Locale {
    if let Some(locale) = parse_locale(preferred) {
        return locale;
    }
    warn!(
        "Locale {} is not available, falling back to the system locale",
        preferred
    );
    process_default
        .as_deref()
        .and_then(parse_locale)
        .unwrap_or(Locale::POSIX)
}

fn process_locale_name() -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.is_empty())
}

/// Accepts `es_ES`, `es-ES` and `es_ES.UTF-8@euro` style names.
fn parse_locale(name: &str) -> Option<Locale> {
    let base = name.split(['.', '@']).next().unwrap_or("").trim();
    if base.is_empty() {
        return None;
    }
    Locale::try_from(base.replace('-', "_").as_str()).ok()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
