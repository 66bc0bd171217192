//! Display helpers for character records: status tones, labels and dates.

use chrono::{DateTime, Datelike, Local, TimeZone};

use crate::types::Character;

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Visual tone derived from a character's life status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Alive,
    Dead,
    Unknown,
    Other,
}

impl StatusTone {
    /// Tone for the card background. Matches the API's exact spelling.
    pub fn for_card(status: &str) -> Self {
        match status {
            "Alive" => StatusTone::Alive,
            "Dead" => StatusTone::Dead,
            "unknown" => StatusTone::Unknown,
            _ => StatusTone::Other,
        }
    }

    /// Tone for the overlay badge. Case-insensitive; anything not alive or
    /// dead shares one tone.
    pub fn for_badge(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "alive" => StatusTone::Alive,
            "dead" => StatusTone::Dead,
            _ => StatusTone::Other,
        }
    }

    /// CSS modifier class.
    pub fn class(&self) -> &'static str {
        match self {
            StatusTone::Alive => "tone-alive",
            StatusTone::Dead => "tone-dead",
            StatusTone::Unknown => "tone-unknown",
            StatusTone::Other => "tone-other",
        }
    }
}

/// "1 episodio", "N episodios".
pub fn episode_label(count: usize) -> String {
    if count == 1 {
        "1 episodio".to_string()
    } else {
        format!("{count} episodios")
    }
}

/// Spanish long date ("4 de noviembre de 2017") of an ISO 8601 timestamp,
/// on the viewer's local calendar day.
pub fn long_date_es(timestamp: &str) -> Option<String> {
    long_date_es_in(timestamp, &Local)
}

/// Same as [`long_date_es`], with the calendar day taken in `tz`.
pub fn long_date_es_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(timestamp).ok()?;
    let date = parsed.with_timezone(tz).date_naive();
    let month = MONTHS_ES[date.month0() as usize];
    Some(format!("{} de {} de {}", date.day(), month, date.year()))
}

/// Footer line of the detail overlay. Unparsable timestamps are shown verbatim.
pub fn created_label(character: &Character) -> String {
    let date = long_date_es(&character.created).unwrap_or_else(|| character.created.clone());
    format!("Creado el {date}")
}
