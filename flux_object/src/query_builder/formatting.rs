//! Argument formatting shared by pipeline stages

use chrono::{DateTime, SecondsFormat, TimeZone};
use std::fmt::Display;

/// `["a", "b"]`
pub fn quote_columns<I, S>(columns: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let quoted = columns
        .into_iter()
        .map(|column| format!("\"{}\"", column.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");

    format!("[{}]", quoted)
}

/// RFC 3339 with whole seconds, `Z` for UTC
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
