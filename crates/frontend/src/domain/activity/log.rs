//! Recent-activity log for the pharmacy dashboard.
//!
//! A bounded, newest-first log of inventory actions persisted in
//! localStorage. This is best-effort UX state, not a system of record:
//! reads fail open to an empty log and concurrent tabs race last-write-wins.

use chrono::{DateTime, Utc};
use contracts::enums::stock_status::StockStatus;
use serde::{Deserialize, Serialize};

use crate::shared::storage;

pub const STORAGE_KEY: &str = "pharmy:pharmacy:recent-activity:v1";
pub const MAX_ENTRIES: usize = 25;

/// Persisted shape, one element of the JSON array under [`STORAGE_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredActivityEntry {
    pub id: String,
    pub medicine_name: String,
    pub action: String,
    pub status: StockStatus,
    pub created_at_iso: String,
}

/// What dashboard widgets see: the absolute instant is replaced by a
/// relative-time string computed at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub id: String,
    pub medicine_name: String,
    pub action: String,
    pub status: StockStatus,
    pub timestamp: String,
}

/// Input for [`append`]; id and timestamp are assigned at write time.
#[derive(Debug, Clone)]
pub struct NewActivityEntry {
    pub medicine_name: String,
    pub action: String,
    pub status: StockStatus,
}

fn parse_instant(iso: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| DateTime::<Utc>::UNIX_EPOCH)
}

/// Prepend `incoming` to `existing`, order newest-first by `created_at_iso`
/// and truncate to [`MAX_ENTRIES`]. Entries with an unparseable timestamp
/// sort last instead of poisoning the log.
pub fn merge_entries(
    existing: Vec<StoredActivityEntry>,
    incoming: Vec<StoredActivityEntry>,
) -> Vec<StoredActivityEntry> {
    let mut merged = incoming;
    merged.extend(existing);
    merged.sort_by_key(|entry| std::cmp::Reverse(parse_instant(&entry.created_at_iso)));
    merged.truncate(MAX_ENTRIES);
    merged
}

/// Map an absolute instant to a coarse human-relative string.
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    if seconds < 10 {
        return "just now".to_string();
    }
    if seconds < 60 {
        return format!("{}s ago", seconds);
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return if minutes == 1 {
            "1 min ago".to_string()
        } else {
            format!("{} mins ago", minutes)
        };
    }
    let hours = minutes / 60;
    if hours < 24 {
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        };
    }
    let days = hours / 24;
    if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", days)
    }
}

/// Hydrate stored entries for display, dropping the absolute timestamp.
pub fn hydrate_entries(stored: Vec<StoredActivityEntry>, now: DateTime<Utc>) -> Vec<ActivityEntry> {
    stored
        .into_iter()
        .map(|entry| {
            let timestamp = format_relative_time(parse_instant(&entry.created_at_iso), now);
            ActivityEntry {
                id: entry.id,
                medicine_name: entry.medicine_name,
                action: entry.action,
                status: entry.status,
                timestamp,
            }
        })
        .collect()
}

/// Record new actions: assign ids and timestamps, merge into the persisted
/// log and write it back.
pub fn append(entries: Vec<NewActivityEntry>) {
    let now_iso = Utc::now().to_rfc3339();
    let incoming: Vec<StoredActivityEntry> = entries
        .into_iter()
        .map(|entry| StoredActivityEntry {
            id: uuid::Uuid::new_v4().to_string(),
            medicine_name: entry.medicine_name,
            action: entry.action,
            status: entry.status,
            created_at_iso: now_iso.clone(),
        })
        .collect();

    let existing: Vec<StoredActivityEntry> = storage::read_json_or_default(STORAGE_KEY);
    let merged = merge_entries(existing, incoming);
    storage::write_json(STORAGE_KEY, &merged);
}

/// Load the log for display. Corrupt or missing storage yields an empty log.
pub fn read() -> Vec<ActivityEntry> {
    let stored: Vec<StoredActivityEntry> = storage::read_json_or_default(STORAGE_KEY);
    let sorted = merge_entries(stored, Vec::new());
    hydrate_entries(sorted, Utc::now())
}
