use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use super::model::PurchaseHistoryEntry;

/// Summary of the purchases made since the start of the week.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyStats {
    pub items_purchased: usize,
    pub total_units: u64,
    pub top_category: Option<String>,
    pub top_item: Option<String>,
}

/// Purchases sharing the same calendar day (UTC).
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseDay {
    pub day: NaiveDate,
    pub entries: Vec<PurchaseHistoryEntry>,
}

/// Monday 00:00 UTC of the week containing `now`.
pub fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let days_since_monday = i64::from(now.weekday().num_days_from_monday());
    let monday = now.date_naive() - Duration::days(days_since_monday);
    monday.and_time(NaiveTime::MIN).and_utc()
}

pub fn weekly_stats(entries: &[PurchaseHistoryEntry]) -> WeeklyStats {
    WeeklyStats {
        items_purchased: entries.len(),
        total_units: entries.iter().map(|e| u64::from(e.quantity)).sum(),
        top_category: most_frequent(entries.iter().map(|e| e.category.as_str())),
        top_item: most_frequent(entries.iter().map(|e| e.item_name.as_str())),
    }
}

/// Groups entries by purchase day, keeping days and entries in input order.
pub fn group_by_day(entries: &[PurchaseHistoryEntry]) -> Vec<PurchaseDay> {
    let mut days: Vec<PurchaseDay> = Vec::new();
    for entry in entries {
        let day = entry.purchased_at.date_naive();
        match days.iter_mut().find(|group| group.day == day) {
            Some(group) => group.entries.push(entry.clone()),
            None => days.push(PurchaseDay {
                day,
                entries: vec![entry.clone()],
            }),
        }
    }
    days
}

// Ties go to the value seen first.
fn most_frequent<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for value in order {
        let count = counts[value];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.to_string())
}
