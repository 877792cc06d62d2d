use crate::dimension::Dimension;
use crate::record::StatRecord;
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_KEY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

pub const MALE_FIELD: &str = "male";
pub const FEMALE_FIELD: &str = "female";

/// Sum of the gender counts in a record (missing counts are zero).
pub fn total_count(record: &StatRecord) -> u64 {
    record.count(MALE_FIELD).unwrap_or(0) + record.count(FEMALE_FIELD).unwrap_or(0)
}

/// Female share in percent, `None` when the record has no counts at all.
pub fn female_share(record: &StatRecord) -> Option<f64> {
    let total = total_count(record);
    if total == 0 {
        return None;
    }
    let female = record.count(FEMALE_FIELD).unwrap_or(0);
    Some(female as f64 / total as f64 * 100.0)
}

pub fn format_share(share: Option<f64>) -> String {
    match share {
        Some(pct) => format!("{:.1}%", pct),
        None => "n/a".to_string(),
    }
}

/// Records ordered for display: years chronologically, everything else by
/// total headcount, largest first.
pub fn display_order(dimension: Dimension, records: &[StatRecord]) -> Vec<&StatRecord> {
    let mut ordered: Vec<&StatRecord> = records.iter().collect();
    match dimension {
        Dimension::Year => ordered.sort_by_key(|r| r.key(dimension)),
        _ => ordered.sort_by_key(|r| std::cmp::Reverse(total_count(r))),
    }
    ordered
}

/// Validate a lookup key typed by the user for `dimension`.
pub fn validate_lookup_key(dimension: Dimension, input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", dimension.label()));
    }
    if dimension == Dimension::Year && !YEAR_KEY_REGEX.is_match(trimmed) {
        return Err("Year must be four digits, e.g. 1999".to_string());
    }
    Ok(trimmed.to_string())
}
