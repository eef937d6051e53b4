use chrono::{Datelike, NaiveDate, Utc};
use tracing::debug;

use crate::models::candidate::WorkHistoryEntry;
use crate::overlaps::OverlapRecord;

/// Months since year 0, so ranges compare as integers.
type MonthStamp = i32;

/// Finds every pair of jobs whose month ranges overlap, measured against today.
pub fn detect_overlaps(history: &[WorkHistoryEntry]) -> Vec<OverlapRecord> {
    detect_overlaps_as_of(history, Utc::now().date_naive())
}

/// Ongoing jobs ("Present", empty end) run until `today`. A job that ends in
/// the month the next one starts does not overlap it. Jobs whose start date
/// cannot be read are skipped.
pub fn detect_overlaps_as_of(history: &[WorkHistoryEntry], today: NaiveDate) -> Vec<OverlapRecord> {
    let now = stamp(today);
    let ranges: Vec<Option<(MonthStamp, MonthStamp)>> = history
        .iter()
        .map(|job| {
            let start = parse_month(&job.start_date)?;
            let end = if is_ongoing(&job.end_date) {
                now
            } else {
                parse_month(&job.end_date)?
            };
            if end < start {
                debug!(
                    "Ignoring job '{}' with end date before start date",
                    job.title
                );
                return None;
            }
            Some((start, end))
        })
        .collect();

    let mut overlaps = Vec::new();
    for (i, a) in ranges.iter().enumerate() {
        let Some((a_start, a_end)) = a else { continue };
        for (j, b) in ranges.iter().enumerate().skip(i + 1) {
            let Some((b_start, b_end)) = b else { continue };
            if a_start < b_end && b_start < a_end {
                overlaps.push(OverlapRecord {
                    job_a_index: i,
                    job_b_index: j,
                    job_a: job_label(&history[i], i),
                    job_b: job_label(&history[j], j),
                });
            }
        }
    }
    overlaps
}

/// "{title} at {facility}", or whichever half exists.
pub fn job_label(job: &WorkHistoryEntry, index: usize) -> String {
    match (job.title.trim(), job.facility.trim()) {
        ("", "") => format!("Job {}", index + 1),
        (title, "") => title.to_string(),
        ("", facility) => facility.to_string(),
        (title, facility) => format!("{title} at {facility}"),
    }
}

fn is_ongoing(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    text.is_empty() || matches!(text.as_str(), "present" | "current" | "now" | "ongoing")
}

fn stamp(date: NaiveDate) -> MonthStamp {
    date.year() * 12 + date.month0() as i32
}

/// Reads "Jan 2020", "January 2020", "Sept. 2020", "01/2020", "2020-01",
/// "2020-01-15" or a bare "2020" (taken as January).
fn parse_month(text: &str) -> Option<MonthStamp> {
    let lowered = text.replace(['.', ','], " ").to_lowercase();
    let cleaned = lowered
        .split_whitespace()
        .map(|word| if word == "sept" { "sep" } else { word })
        .collect::<Vec<_>>()
        .join(" ");
    if cleaned.is_empty() {
        return None;
    }

    let attempts = [
        (format!("1 {cleaned}"), "%d %b %Y"),
        (format!("1/{cleaned}"), "%d/%m/%Y"),
        (format!("{cleaned}-01"), "%Y-%m-%d"),
        (cleaned.clone(), "%Y-%m-%d"),
        (cleaned.clone(), "%m/%d/%Y"),
    ];
    for (candidate, format) in &attempts {
        if let Ok(date) = NaiveDate::parse_from_str(candidate, format) {
            return Some(stamp(date));
        }
    }

    if cleaned.len() == 4 {
        if let Ok(year) = cleaned.parse::<i32>() {
            return Some(year * 12);
        }
    }
    None
}
