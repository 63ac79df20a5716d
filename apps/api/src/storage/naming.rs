//! Submission file names: `resume_<YYYY-MM-DD_HHMM>.json`, minute resolution, UTC.

use chrono::{DateTime, NaiveDateTime, Utc};

/// How many submissions the load picker offers.
pub const RECENT_LIMIT: usize = 10;

const PREFIX: &str = "resume_";
const SUFFIX: &str = ".json";
const STAMP_FORMAT: &str = "%Y-%m-%d_%H%M";

pub fn submission_file_name(at: DateTime<Utc>) -> String {
    format!("{PREFIX}{}{SUFFIX}", at.format(STAMP_FORMAT))
}

/// Parses the timestamp out of a submission name. Anything that does not match
/// the naming scheme exactly yields `None`.
pub fn parse_submission_timestamp(name: &str) -> Option<NaiveDateTime> {
    let stamp = name.strip_prefix(PREFIX)?.strip_suffix(SUFFIX)?;
    // Seconds are appended so chrono has a complete time to parse.
    let ts = NaiveDateTime::parse_from_str(&format!("{stamp}00"), &format!("{STAMP_FORMAT}%S"))
        .ok()?;
    // chrono accepts unpadded fields; only the canonical spelling counts.
    (submission_file_name(ts.and_utc()) == name).then_some(ts)
}

pub fn is_submission_name(name: &str) -> bool {
    parse_submission_timestamp(name).is_some()
}

/// Newest first, at most `limit`. Names that do not parse are dropped.
pub fn recent_submissions<I>(names: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut dated: Vec<(NaiveDateTime, String)> = names
        .into_iter()
        .filter_map(|name| parse_submission_timestamp(&name).map(|ts| (ts, name)))
        .collect();
    dated.sort_by(|a, b| b.cmp(a));
    dated.into_iter().take(limit).map(|(_, name)| name).collect()
}
